//! Groq chat-completion client (OpenAI-compatible endpoint).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerateError;
use crate::llm::ChatCompleter;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Fixed model identifier; the tool does not expose model selection.
pub const MODEL: &str = "llama-3.3-70b-versatile";

/// One-shot chat-completion client.
///
/// No timeout and no retries: the single request blocks the sequential
/// workflow until the API answers, and any failure degrades to the fallback
/// commit message upstream.
pub struct GroqClient {
    http: Client,
    base_url: String,
}

impl GroqClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different API root (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for GroqClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatCompleter for GroqClient {
    async fn complete(
        &self,
        api_key: &str,
        system: &str,
        user: &str,
    ) -> Result<String, GenerateError> {
        let request = ChatCompletionRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
        };

        debug!("requesting {} completion from {}", MODEL, self.base_url);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(GenerateError::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(GenerateError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ChatCompletionResponse =
            response.json().await.map_err(GenerateError::DecodeFailed)?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(GenerateError::EmptyResponse);
        }

        Ok(content)
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_two_messages_in_order() {
        let request = ChatCompletionRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "rules",
                },
                ChatMessage {
                    role: "user",
                    content: "diff",
                },
            ],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], MODEL);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "diff");
    }

    #[test]
    fn response_tolerates_missing_fields() {
        let payload: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.choices.is_empty());

        let payload: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": [{"message": {}}]}"#).unwrap();
        assert_eq!(payload.choices.len(), 1);
        assert!(payload.choices[0].message.content.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = GroqClient::with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
