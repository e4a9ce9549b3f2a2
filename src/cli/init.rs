use std::path::Path;

use crate::models::init_step::InitStep;
use crate::models::project_request::ProjectRequest;
use crate::services::command_runner::{CommandRunner, SystemCommandRunner};
use crate::services::project_initializer::{InitReport, ProjectInitializer};
use crate::utils::error::{InitError, Result};
use crate::utils::output;

/// Create a new React + Tailwind project in the current directory
#[derive(Debug)]
pub struct InitCommand {
    /// Project name as given on the command line
    pub project_name: Option<String>,
}

impl InitCommand {
    /// Execute the init command
    pub async fn run(&self) -> Result<()> {
        let current_dir = std::env::current_dir().map_err(InitError::CurrentDir)?;

        self.run_in(SystemCommandRunner::new(), &current_dir).await?;
        Ok(())
    }

    /// Execute with an explicit runner and parent directory
    pub async fn run_in<R: CommandRunner>(&self, runner: R, parent_dir: &Path) -> Result<InitReport> {
        let request = ProjectRequest::new(self.project_name.as_deref())?;
        let initializer = ProjectInitializer::new(runner, parent_dir);

        let report = initializer.initialize(&request, |step| announce(&request, step)).await?;

        print_next_steps(&report);
        Ok(report)
    }
}

/// Progress lines printed between the tools' own output
fn announce(request: &ProjectRequest, step: InitStep) {
    match step {
        InitStep::Scaffold => {
            output::info(&format!("Creating new React+Tailwind project: {request}..."));
        }
        InitStep::InstallDependencies => output::info("\nInstalling dependencies..."),
        InitStep::InitTailwind => output::info("\nConfiguring Tailwind..."),
        _ => {}
    }
}

fn print_next_steps(report: &InitReport) {
    println!();
    output::success("Project created successfully!");
    println!();
    output::header("Next steps:");
    output::command(&format!("cd {}", report.project_name));
    output::command("npm run dev\n");
}
