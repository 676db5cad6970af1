//! LLM client — the single point of entry for all Claude API calls.
//!
//! No other module may call the Anthropic API directly. Each call is a
//! single request with a single user message: no retries, no streaming,
//! no tool use.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

mod extract;

pub use extract::extract_json;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 2048;

/// Models a request may select. Anything not on this list resolves to the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelId {
    #[default]
    Sonnet45,
    Opus46,
}

impl ModelId {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelId::Sonnet45 => "claude-sonnet-4-5-20250929",
            ModelId::Opus46 => "claude-opus-4-6",
        }
    }

    /// Total resolution: an absent, empty, or unrecognized identifier all
    /// fall back to the default model.
    pub fn resolve(requested: Option<&str>) -> Self {
        match requested {
            Some("claude-sonnet-4-5-20250929") => ModelId::Sonnet45,
            Some("claude-opus-4-6") => ModelId::Opus46,
            _ => ModelId::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected response format.")]
    UnexpectedFormat,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct LlmResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    block_type: String,
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

impl LlmResponse {
    /// The first content block, if and only if it is text-typed.
    fn into_text(self) -> Result<String, LlmError> {
        let first = self
            .content
            .into_iter()
            .next()
            .ok_or(LlmError::UnexpectedFormat)?;
        if first.block_type != "text" {
            return Err(LlmError::UnexpectedFormat);
        }
        first.text.ok_or(LlmError::UnexpectedFormat)
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The single LLM client shared by all handlers.
/// Wraps the Anthropic Messages API; one request per completion.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    messages_url: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            messages_url: ANTHROPIC_API_URL.to_string(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            messages_url: format!("{base_url}/v1/messages"),
        }
    }

    /// Runs one completion and returns the text of the first content block.
    /// Failures propagate immediately: transport and API errors as-is, a
    /// non-text first block as `LlmError::UnexpectedFormat`.
    pub async fn complete(
        &self,
        model: ModelId,
        system: &str,
        prompt: &str,
    ) -> Result<String, LlmError> {
        let request_body = AnthropicRequest {
            model: model.as_str(),
            max_tokens: MAX_TOKENS,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.messages_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Prefer the message from the Anthropic error envelope
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        llm_response.into_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::with_base_url("test-key".to_string(), server.uri())
    }

    #[test]
    fn model_resolution_is_total() {
        assert_eq!(ModelId::resolve(None), ModelId::Sonnet45);
        assert_eq!(ModelId::resolve(Some("")), ModelId::Sonnet45);
        assert_eq!(ModelId::resolve(Some("gpt-4")), ModelId::Sonnet45);
        assert_eq!(
            ModelId::resolve(Some("claude-sonnet-4-5-20250929")),
            ModelId::Sonnet45
        );
        assert_eq!(ModelId::resolve(Some("claude-opus-4-6")), ModelId::Opus46);
    }

    #[tokio::test]
    async fn complete_returns_first_text_block() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "test-key"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .and(body_partial_json(json!({
                "model": "claude-opus-4-6",
                "max_tokens": 2048,
                "messages": [{"role": "user", "content": "the prompt"}],
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "{\"grade\": \"A\"}"}],
                "usage": {"input_tokens": 12, "output_tokens": 7},
            })))
            .mount(&server)
            .await;

        let text = client_for(&server)
            .complete(ModelId::Opus46, "the system prompt", "the prompt")
            .await
            .unwrap();
        assert_eq!(text, "{\"grade\": \"A\"}");
    }

    #[tokio::test]
    async fn complete_rejects_non_text_first_block() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "image", "source": {"type": "base64"}}],
                "usage": {"input_tokens": 12, "output_tokens": 7},
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(ModelId::Sonnet45, "system", "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::UnexpectedFormat));
        assert_eq!(err.to_string(), "Unexpected response format.");
    }

    #[tokio::test]
    async fn complete_rejects_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [],
                "usage": {"input_tokens": 12, "output_tokens": 0},
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(ModelId::Sonnet45, "system", "prompt")
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::UnexpectedFormat));
    }

    #[tokio::test]
    async fn complete_surfaces_api_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"},
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(ModelId::Sonnet45, "system", "prompt")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid x-api-key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
