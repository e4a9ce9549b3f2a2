// Integration tests for creating a project through the library API
// External commands are replaced by a recording runner

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

use react_tailwind_template::cli::init::InitCommand;
use react_tailwind_template::{
    CommandOutcome, CommandRunner, InitError, InitStep, Invocation, ProjectInitializer,
    ProjectRequest, TemplateFile,
};

/// Pretends to be npm/npx: records every call and lays down the files the
/// real tools would create
#[derive(Default)]
struct ScriptedRunner {
    calls: Mutex<Vec<Invocation>>,
    failing_program_arg: Option<&'static str>,
}

impl ScriptedRunner {
    fn failing_on(first_arg: &'static str) -> Self {
        Self {
            failing_program_arg: Some(first_arg),
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for &ScriptedRunner {
    async fn run(&self, invocation: &Invocation) -> io::Result<CommandOutcome> {
        self.calls.lock().unwrap().push(invocation.clone());

        let first_arg = invocation.args.first().map(String::as_str);
        if first_arg.is_some() && first_arg == self.failing_program_arg {
            return Ok(CommandOutcome::failure(1));
        }

        match first_arg {
            Some("create") => scaffold(&invocation.working_dir.join(&invocation.args[2]))?,
            Some("tailwindcss") => {
                fs::write(invocation.working_dir.join("tailwind.config.js"), "module.exports = {}")?;
                fs::write(invocation.working_dir.join("postcss.config.js"), "export default {}")?;
            }
            _ => {}
        }

        Ok(CommandOutcome::success())
    }
}

fn scaffold(root: &Path) -> io::Result<()> {
    fs::create_dir_all(root.join("src"))?;
    fs::write(root.join("index.html"), "<div id=\"root\"></div>")?;
    fs::write(root.join("src/App.jsx"), "// vite starter")?;
    fs::write(root.join("src/index.css"), ":root { color: red; }")
}

#[tokio::test]
async fn test_my_app_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::default();
    let cmd = InitCommand { project_name: Some("my-app".to_string()) };

    let report = cmd.run_in(&runner, temp_dir.path()).await.unwrap();

    let root = temp_dir.path().join("my-app");
    assert_eq!(report.project_root, root);
    assert_eq!(report.project_name, "my-app");

    let config = fs::read_to_string(root.join("tailwind.config.js")).unwrap();
    assert_eq!(config, TemplateFile::TailwindConfig.contents());
    let content_block: Vec<&str> = config
        .lines()
        .skip_while(|line| !line.contains("content: ["))
        .skip(1)
        .take_while(|line| !line.contains(']'))
        .map(str::trim)
        .collect();
    assert_eq!(content_block, ["\"./index.html\",", "\"./src/**/*.{js,jsx}\","]);

    // Files the scaffolder made but we don't own are left alone
    assert_eq!(fs::read_to_string(root.join("index.html")).unwrap(), "<div id=\"root\"></div>");
    assert!(root.join("postcss.config.js").exists());
}

#[tokio::test]
async fn test_existing_components_dir_is_reused() {
    let temp_dir = TempDir::new().unwrap();

    // Runner whose scaffold already ships a components folder
    struct WithComponents;
    impl CommandRunner for WithComponents {
        async fn run(&self, invocation: &Invocation) -> io::Result<CommandOutcome> {
            if invocation.args.first().map(String::as_str) == Some("create") {
                let root = invocation.working_dir.join(&invocation.args[2]);
                scaffold(&root)?;
                fs::create_dir_all(root.join("src/components"))?;
                fs::write(root.join("src/components/Button.jsx"), "// button")?;
            }
            Ok(CommandOutcome::success())
        }
    }

    let initializer = ProjectInitializer::new(WithComponents, temp_dir.path());
    let request = ProjectRequest::new(Some("with-components")).unwrap();
    initializer.initialize(&request, |_| {}).await.unwrap();

    let components = temp_dir.path().join("with-components/src/components");
    assert!(components.join("Button.jsx").exists());
    assert_eq!(
        fs::read_to_string(components.join("Example.jsx")).unwrap(),
        TemplateFile::ExampleComponent.contents()
    );
}

#[tokio::test]
async fn test_tailwind_init_failure_leaves_project_behind() {
    let temp_dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::failing_on("tailwindcss");
    let initializer = ProjectInitializer::new(&runner, temp_dir.path());
    let request = ProjectRequest::new(Some("partial")).unwrap();
    let mut started = Vec::new();

    let err = initializer
        .initialize(&request, |step| started.push(step))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        InitError::ExternalToolFailure { step: InitStep::InitTailwind, .. }
    ));
    assert_eq!(started.last(), Some(&InitStep::InitTailwind));
    assert_eq!(runner.calls().len(), 4);

    let root = temp_dir.path().join("partial");
    assert!(root.is_dir());
    assert_eq!(fs::read_to_string(root.join("src/App.jsx")).unwrap(), "// vite starter");
    assert!(!root.join("src/components").exists());
}

#[tokio::test]
async fn test_install_runs_inside_project_not_cwd() {
    let temp_dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::default();
    let cwd_before = std::env::current_dir().unwrap();
    let initializer = ProjectInitializer::new(&runner, temp_dir.path());
    let request = ProjectRequest::new(Some("rooted")).unwrap();

    initializer.initialize(&request, |_| {}).await.unwrap();

    let root = temp_dir.path().join("rooted");
    let calls = runner.calls();
    assert_eq!(calls[0].working_dir, temp_dir.path());
    for call in &calls[1..] {
        assert_eq!(call.working_dir, root);
    }
    assert_eq!(std::env::current_dir().unwrap(), cwd_before);
}

#[tokio::test]
async fn test_invalid_names_touch_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::default();

    for name in ["My-App", "has space", "under_score", &"x".repeat(51)] {
        let cmd = InitCommand { project_name: Some(name.to_string()) };
        let err = cmd.run_in(&runner, temp_dir.path()).await.unwrap_err();
        assert!(err.is_preflight(), "{name}: {err}");
    }

    assert!(runner.calls().is_empty());
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
