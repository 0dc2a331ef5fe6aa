//! Commit-message generation via a hosted chat-completion API.
//!
//! The network seam is the [`ChatCompleter`] trait; [`GroqClient`] is the
//! real implementation. Every failure mode degrades to the fallback message
//! so the commit workflow can always reach the selection prompt.

pub mod groq;
pub mod parse;
pub mod prompt;

pub use groq::GroqClient;
pub use parse::parse_suggestions;

use async_trait::async_trait;
use console::style;
use tracing::warn;

use crate::error::GenerateError;
use crate::lang::Language;

/// The message used whenever generation cannot produce valid candidates.
pub const FALLBACK_MESSAGE: &str = "Update code";

/// Trait for issuing one chat-completion request.
///
/// This abstraction allows mocking the API in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    /// Send a system + user message pair and return the assistant's reply.
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        user: &str,
    ) -> Result<String, GenerateError>;
}

/// Generate up to five candidate commit messages for a staged diff summary.
///
/// Short-circuits on an empty diff without any network call. A request
/// failure, an empty reply, or a reply with no numbered lines all degrade to
/// `[FALLBACK_MESSAGE]` after printing the localized notice; this function
/// never fails.
pub async fn commit_candidates<C: ChatCompleter + ?Sized>(
    completer: &C,
    api_key: &str,
    diff: &str,
    language: Language,
) -> Vec<String> {
    let messages = language.messages();

    if diff.is_empty() {
        println!("{}", style(messages.no_diff_changes).yellow());
        return vec![FALLBACK_MESSAGE.to_string()];
    }

    let system = prompt::system_prompt(language);
    let user = prompt::user_prompt(language, diff);

    match completer.complete(api_key, system, &user).await {
        Ok(reply) => {
            let suggestions = parse_suggestions(&reply);
            if suggestions.is_empty() {
                warn!("chat completion returned no numbered suggestions");
                eprintln!("{}", style(messages.invalid_response).red());
                vec![FALLBACK_MESSAGE.to_string()]
            } else {
                suggestions
            }
        }
        Err(GenerateError::EmptyResponse) => {
            warn!("chat completion returned an empty reply");
            eprintln!("{}", style(messages.invalid_response).red());
            vec![FALLBACK_MESSAGE.to_string()]
        }
        Err(e) => {
            warn!("chat completion failed: {e}");
            eprintln!("{} {e}", style(messages.fetch_messages_failed).red());
            vec![FALLBACK_MESSAGE.to_string()]
        }
    }
}
