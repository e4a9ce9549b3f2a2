// Error types for project initialization

use std::path::PathBuf;
use console::style;
use thiserror::Error;

use crate::models::init_step::InitStep;

/// Everything that can stop a project from being created
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Please specify the project name")]
    MissingName,

    #[error("Project name '{name}' can only contain lowercase letters, numbers, and hyphens")]
    InvalidName { name: String },

    #[error("Project name is too long (max 50 characters)")]
    NameTooLong { name: String, length: usize },

    #[error("Directory {} already exists", path.display())]
    DirectoryExists { path: PathBuf },

    #[error("Could not read the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("{step} failed: `{command}` {status}")]
    ExternalToolFailure {
        step: InitStep,
        command: String,
        status: String,
    },

    #[error("{step} failed: {source}")]
    Io {
        step: InitStep,
        #[source]
        source: std::io::Error,
    },
}

impl InitError {
    /// Wrap an I/O error with the step that produced it
    pub const fn io(step: InitStep, source: std::io::Error) -> Self {
        Self::Io { step, source }
    }

    /// The step the sequence stopped at, if it got past validation
    pub const fn step(&self) -> Option<InitStep> {
        match self {
            Self::ExternalToolFailure { step, .. } | Self::Io { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Whether the error was raised before anything touched the filesystem
    pub const fn is_preflight(&self) -> bool {
        matches!(
            self,
            Self::MissingName
                | Self::InvalidName { .. }
                | Self::NameTooLong { .. }
                | Self::DirectoryExists { .. }
                | Self::CurrentDir(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, InitError>;

/// User-facing rendering of an [`InitError`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    /// Build the message, hint and exit code shown for an error
    pub fn from_init_error(err: &InitError) -> Self {
        let (message, hint) = match err {
            InitError::MissingName => (
                format!("{err}:"),
                Some(format!(
                    "  {} {} {}\n",
                    style("npx").cyan(),
                    style(env!("CARGO_PKG_NAME")).green(),
                    style("<project-name>").yellow()
                )),
            ),
            InitError::ExternalToolFailure { .. } | InitError::Io { .. } => (
                "Error creating project:".to_string(),
                Some(err.to_string()),
            ),
            _ => (err.to_string(), None),
        };

        Self {
            message,
            hint,
            exit_code: 1,
        }
    }

    /// Print to stderr
    pub fn print(&self) {
        crate::utils::output::error(&self.message);
        if let Some(hint) = &self.hint {
            eprintln!("{hint}");
        }
    }
}
