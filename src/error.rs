//! Error types for grapho modules using thiserror.

use thiserror::Error;

/// Errors from the API-key config store.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not determine the user home directory")]
    NoHomeDir,

    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("Failed to write config file: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("Config file is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Failed to read API key from the terminal: {0}")]
    PromptFailed(#[source] std::io::Error),
}

/// Errors from git subprocess invocations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to run git (is it installed and on PATH?): {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git {operation} failed: {stderr}")]
    CommandFailed { operation: String, stderr: String },

    #[error("git produced invalid UTF-8 output")]
    InvalidOutput(#[source] std::string::FromUtf8Error),
}

/// Errors from the chat-completion API.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Chat-completion request failed: {0}")]
    RequestFailed(#[source] reqwest::Error),

    #[error("Chat-completion API responded with {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("Failed to decode chat-completion response: {0}")]
    DecodeFailed(#[source] reqwest::Error),

    #[error("Chat-completion response contained no message content")]
    EmptyResponse,
}

/// Errors that abort the interactive session.
///
/// Inspection failures never surface here (they degrade inside `GitCli` and
/// `commit_candidates`); what remains is staging/commit failures, config
/// failures, and terminal I/O.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal interaction failed: {0}")]
    Prompt(#[from] std::io::Error),
}
