//! Subprocess execution behind a mockable trait.
//!
//! All git interaction shells out to the system `git` binary so the tool
//! inherits the user's existing git config, hooks, and credential store.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::GitError;

/// Captured result of a finished subprocess.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Trait for running external commands.
///
/// This abstraction allows mocking git in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program with arguments and capture its output.
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, GitError>;
}

/// Default runner that spawns real processes via tokio.
///
/// No timeout is applied; each invocation blocks the (sequential) workflow
/// until the subprocess exits.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, GitError> {
        let output = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(GitError::SpawnFailed)?;

        Ok(CommandOutput {
            success: output.status.success(),
            stdout: String::from_utf8(output.stdout).map_err(GitError::InvalidOutput)?,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
