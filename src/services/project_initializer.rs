// Creates a React + Tailwind project step by step

use std::io;
use std::path::{Path, PathBuf};

use crate::models::init_step::InitStep;
use crate::models::project_request::ProjectRequest;
use crate::models::template::TemplateFile;
use crate::services::command_runner::{CommandRunner, Invocation};
use crate::services::template_writer::TemplateWriter;
use crate::utils::config::ToolchainConfig;
use crate::utils::error::{InitError, Result};
use crate::utils::validation::validate_target_available;

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub project_name: String,
    pub project_root: PathBuf,
    pub steps_completed: Vec<InitStep>,
}

/// Runs the initialization sequence for one project.
///
/// Steps run strictly in [`InitStep::ALL`] order and the first failure stops
/// the run. Work done by earlier steps is left in place; there is no rollback.
#[derive(Debug, Clone)]
pub struct ProjectInitializer<R> {
    runner: R,
    parent_dir: PathBuf,
    toolchain: ToolchainConfig,
}

impl<R: CommandRunner> ProjectInitializer<R> {
    /// Create an initializer that places new projects under `parent_dir`
    pub fn new(runner: R, parent_dir: &Path) -> Self {
        Self {
            runner,
            parent_dir: parent_dir.to_path_buf(),
            toolchain: ToolchainConfig::default(),
        }
    }

    #[must_use]
    pub fn with_toolchain(mut self, toolchain: ToolchainConfig) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Create the project described by `request`.
    ///
    /// `on_step` is called right before each step starts, which lets the
    /// caller print progress without the initializer owning the console.
    pub async fn initialize<F>(&self, request: &ProjectRequest, mut on_step: F) -> Result<InitReport>
    where
        F: FnMut(InitStep),
    {
        let name = request.name();
        let expected_root = validate_target_available(&self.parent_dir, name)?;
        let mut completed = Vec::with_capacity(InitStep::ALL.len());

        tracing::info!(project = name, parent = %self.parent_dir.display(), "initializing project");

        on_step(InitStep::Scaffold);
        self.run_external(InitStep::Scaffold, self.scaffold_invocation(name))
            .await?;
        completed.push(InitStep::Scaffold);

        on_step(InitStep::EnterProject);
        let project_root = enter_project(&expected_root)?;
        completed.push(InitStep::EnterProject);

        for step in [
            InitStep::InstallDependencies,
            InitStep::InstallTailwind,
            InitStep::InitTailwind,
        ] {
            on_step(step);
            let invocation = self.tool_invocation(step, &project_root);
            self.run_external(step, invocation).await?;
            completed.push(step);
        }

        let writer = TemplateWriter::new(&project_root);
        for (step, template) in [
            (InitStep::WriteTailwindConfig, Some(TemplateFile::TailwindConfig)),
            (InitStep::WriteStylesheet, Some(TemplateFile::Stylesheet)),
            (InitStep::CreateComponentsDir, None),
            (InitStep::WriteExampleComponent, Some(TemplateFile::ExampleComponent)),
            (InitStep::WriteApp, Some(TemplateFile::App)),
        ] {
            on_step(step);
            let written = match template {
                Some(template) => writer.write(template),
                None => writer.ensure_components_dir(),
            };
            written.map_err(|e| {
                tracing::warn!(%step, error = %e, "file step failed");
                InitError::io(step, e)
            })?;
            completed.push(step);
        }

        tracing::info!(project = name, root = %project_root.display(), "project created");

        Ok(InitReport {
            project_name: name.to_string(),
            project_root,
            steps_completed: completed,
        })
    }

    /// `npm create vite@latest <name> -- --template react`, run in the parent
    fn scaffold_invocation(&self, name: &str) -> Invocation {
        let args = [
            "create",
            self.toolchain.scaffold_package.as_str(),
            name,
            "--",
            "--template",
            self.toolchain.template.as_str(),
        ];
        Invocation::new(&self.toolchain.npm, args, &self.parent_dir)
    }

    /// Commands that run inside the new project
    fn tool_invocation(&self, step: InitStep, project_root: &Path) -> Invocation {
        match step {
            InitStep::InstallTailwind => {
                let args = ["install".to_string(), "-D".to_string()]
                    .into_iter()
                    .chain(self.toolchain.dev_dependencies.iter().cloned());
                Invocation::new(&self.toolchain.npm, args, project_root)
            }
            InitStep::InitTailwind => {
                Invocation::new(&self.toolchain.npx, ["tailwindcss", "init", "-p"], project_root)
            }
            _ => Invocation::new(&self.toolchain.npm, ["install"], project_root),
        }
    }

    async fn run_external(&self, step: InitStep, invocation: Invocation) -> Result<()> {
        tracing::info!(%step, command = %invocation, "running");

        let outcome = self.runner.run(&invocation).await.map_err(|e| {
            tracing::warn!(%step, command = %invocation, error = %e, "could not start command");
            InitError::ExternalToolFailure {
                step,
                command: invocation.to_string(),
                status: format!("could not be started: {e}"),
            }
        })?;

        if !outcome.is_success() {
            tracing::warn!(%step, command = %invocation, %outcome, "command failed");
            return Err(InitError::ExternalToolFailure {
                step,
                command: invocation.to_string(),
                status: outcome.to_string(),
            });
        }

        Ok(())
    }
}

/// The scaffolder is expected to have created the project directory
fn enter_project(expected_root: &Path) -> Result<PathBuf> {
    if expected_root.is_dir() {
        Ok(expected_root.to_path_buf())
    } else {
        Err(InitError::io(
            InitStep::EnterProject,
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} was not created by the scaffolder", expected_root.display()),
            ),
        ))
    }
}
