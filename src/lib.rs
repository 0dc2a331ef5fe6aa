//! grapho - an interactive CLI that stages files and commits with
//! AI-generated conventional commit messages.
//!
//! # Overview
//!
//! grapho lists the working tree's changed files, lets the user stage a
//! selection (or everything), sends the staged diff summary to a hosted
//! chat-completion API, and offers five generated commit messages to pick
//! from before committing. All git interaction shells out to the system
//! `git` binary; the whole flow is sequential and makes at most one network
//! request per run.

pub mod config;
pub mod error;
pub mod git;
pub mod lang;
pub mod llm;
pub mod session;

// Re-export commonly used types
pub use config::ConfigStore;
pub use error::{ConfigError, GenerateError, GitError, SessionError};
pub use git::{CommandRunner, GitCli, SystemRunner};
pub use lang::Language;
pub use llm::{ChatCompleter, FALLBACK_MESSAGE, GroqClient};
pub use session::{Prompter, Session, TermPrompter};
