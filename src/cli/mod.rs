// CLI module for command-line interface

pub mod init;

use clap::Parser;
use crate::utils::error::Result;

use self::init::InitCommand;

/// Main CLI structure
#[derive(Debug, Parser)]
#[command(name = "react-tailwind-template")]
#[command(about = "Create a new React + Tailwind CSS project")]
#[command(long_about = r#"Create a new React + Tailwind CSS project.

Scaffolds a Vite React app, installs Tailwind CSS with PostCSS and
Autoprefixer, and replaces the starter files with a Tailwind-ready setup.
npm and npx must be on PATH; their output is shown as they run.

Project names may only contain lowercase letters, numbers, and hyphens,
and can be at most 50 characters long.

Examples:
  react-tailwind-template my-app
  npx react-tailwind-template my-app"#)]
#[command(version)]
pub struct Cli {
    /// Name of the project directory to create
    // Names may start with a hyphen, so they must not be parsed as flags
    #[arg(value_name = "PROJECT_NAME", allow_hyphen_values = true)]
    pub project_name: Option<String>,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the parsed command line
    pub async fn execute(cli: Cli) -> Result<()> {
        let cmd = InitCommand {
            project_name: cli.project_name,
        };
        cmd.run().await
    }
}
