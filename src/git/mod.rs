//! Git inspection and staging/commit operations over a command runner.

pub mod runner;

pub use runner::{CommandOutput, CommandRunner, SystemRunner};

use console::style;
use tracing::warn;

use crate::error::GitError;
use crate::lang::Messages;

/// Git operations used by the commit workflow.
///
/// Inspection methods (`changed_files`, `staged_diff`) degrade on failure:
/// they print the localized error and return an empty result so the workflow
/// can still finish. Mutations (`stage_*`, `commit`) propagate their errors.
pub struct GitCli<R: CommandRunner> {
    runner: R,
    messages: &'static Messages,
}

impl<R: CommandRunner> GitCli<R> {
    pub fn new(runner: R, messages: &'static Messages) -> Self {
        Self { runner, messages }
    }

    /// Paths of all changed files, from `git status --porcelain`.
    ///
    /// Returns an empty list when git fails (not a repository, git missing).
    pub async fn changed_files(&self) -> Vec<String> {
        match self.run_git(&["status", "--porcelain"], "status").await {
            Ok(stdout) => parse_porcelain(&stdout),
            Err(e) => {
                warn!("git status --porcelain failed: {e}");
                eprintln!("{} {e}", style(self.messages.changed_files_failed).red());
                Vec::new()
            }
        }
    }

    /// The staged diff summary, from `git diff --staged --stat`, trimmed.
    ///
    /// Returns an empty string when git fails.
    pub async fn staged_diff(&self) -> String {
        match self.run_git(&["diff", "--staged", "--stat"], "diff").await {
            Ok(stdout) => stdout.trim().to_string(),
            Err(e) => {
                warn!("git diff --staged --stat failed: {e}");
                eprintln!("{} {e}", style(self.messages.diff_failed).red());
                String::new()
            }
        }
    }

    /// Stage everything: `git add .`
    pub async fn stage_all(&self) -> Result<(), GitError> {
        self.run_git(&["add", "."], "add").await?;
        Ok(())
    }

    /// Stage exactly the given paths: `git add -- <paths>`
    pub async fn stage_paths(&self, paths: &[String]) -> Result<(), GitError> {
        let mut args = vec!["add".to_string(), "--".to_string()];
        args.extend(paths.iter().cloned());
        self.run_raw(&args, "add").await?;
        Ok(())
    }

    /// Commit with the message as the subject: `git commit -m <message>`.
    ///
    /// The message is passed as a single argv element, never through a shell.
    pub async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message], "commit").await?;
        Ok(())
    }

    async fn run_git(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.run_raw(&args, operation).await
    }

    async fn run_raw(&self, args: &[String], operation: &str) -> Result<String, GitError> {
        let output = self.runner.run("git", args).await?;

        if !output.success {
            return Err(GitError::CommandFailed {
                operation: operation.to_string(),
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

/// Extract file paths from `git status --porcelain` output.
///
/// Each non-empty line contributes its last whitespace-separated token, which
/// covers plain status lines (`M  path`, `?? path`) as well as renames
/// (`R  old -> new` yields `new`).
fn parse_porcelain(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| line.split_whitespace().last())
        .map(|path| path.to_string())
        .collect()
}
