// Running external programs with the user's terminal attached

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// A fully described external command.
///
/// The working directory is always explicit; nothing relies on the process
/// current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl Invocation {
    pub fn new<I, S>(program: &str, args: I, working_dir: &Path) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            working_dir: working_dir.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// How a finished command exited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandOutcome {
    /// Exit code, `None` when the process was killed by a signal
    pub code: Option<i32>,
}

impl CommandOutcome {
    pub const fn success() -> Self {
        Self { code: Some(0) }
    }

    pub const fn failure(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.code, Some(0))
    }
}

impl From<ExitStatus> for CommandOutcome {
    fn from(status: ExitStatus) -> Self {
        Self { code: status.code() }
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exited with code {code}"),
            None => f.write_str("was terminated by a signal"),
        }
    }
}

/// Spawns an external command and waits for it to finish.
///
/// `Err` means the program could not be started at all; a program that ran
/// and failed is an `Ok` outcome with a non-zero code.
pub trait CommandRunner {
    fn run(
        &self,
        invocation: &Invocation,
    ) -> impl Future<Output = std::io::Result<CommandOutcome>> + Send;
}

/// Runs commands for real, sharing stdin/stdout/stderr with this process so
/// the user sees the tool's own output and prompts as they happen.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub const fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    async fn run(&self, invocation: &Invocation) -> std::io::Result<CommandOutcome> {
        tracing::debug!(
            command = %invocation,
            dir = %invocation.working_dir.display(),
            "spawning"
        );

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await?;

        Ok(CommandOutcome::from(status))
    }
}
