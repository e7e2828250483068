//! Groq client. Groq exposes an OpenAI-compatible chat completions API, so
//! the request/response shapes here are the standard compat ones.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::provider::{CompletionClient, GatewayError, Result};
use crate::types::{Role, Turn};

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

pub struct GroqClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GroqClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the credential from `GROQ_API_KEY`. When it is absent the client
    /// still constructs, but every call fails fast with
    /// [`GatewayError::NotConfigured`].
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn turns_to_messages(turns: &[Turn]) -> Vec<serde_json::Value> {
        turns
            .iter()
            .map(|t| {
                let role = match t.role {
                    Role::System => "system",
                    Role::User => "user",
                };
                json!({ "role": role, "content": t.text })
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, model: &str, turns: &[Turn], temperature: f32) -> Result<String> {
        let Some(api_key) = &self.api_key else {
            return Err(GatewayError::NotConfigured);
        };

        let body = json!({
            "model": model,
            "messages": Self::turns_to_messages(turns),
            "temperature": temperature,
        });

        debug!(model, temperature, "sending completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api { status, body });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let text = completion
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(GatewayError::EmptyResponse)?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn turns() -> Vec<Turn> {
        vec![Turn::system("You summarize."), Turn::user("Summarize this.")]
    }

    #[tokio::test]
    async fn missing_key_short_circuits_without_network() {
        // No mock server at this address; the call must fail before I/O.
        let client = GroqClient {
            client: Client::new(),
            api_key: None,
            base_url: "http://127.0.0.1:1".to_string(),
        };

        let err = client.complete("m", &turns(), 0.2).await.unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured));
    }

    #[tokio::test]
    async fn successful_completion_returns_trimmed_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer test-key"))
            .and(body_partial_json(json!({ "model": "test-model" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "  a summary  " } }]
            })))
            .mount(&server)
            .await;

        let client = GroqClient::new("test-key").with_base_url(server.uri());
        let text = client.complete("test-model", &turns(), 0.2).await.unwrap();
        assert_eq!(text, "a summary");
    }

    #[tokio::test]
    async fn blank_content_is_an_empty_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "   " } }]
            })))
            .mount(&server)
            .await;

        let client = GroqClient::new("k").with_base_url(server.uri());
        let err = client.complete("m", &turns(), 0.2).await.unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }

    #[tokio::test]
    async fn missing_choices_is_an_empty_response_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = GroqClient::new("k").with_base_url(server.uri());
        let err = client.complete("m", &turns(), 0.2).await.unwrap_err();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }

    #[tokio::test]
    async fn non_success_status_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&server)
            .await;

        let client = GroqClient::new("k").with_base_url(server.uri());
        let err = client.complete("m", &turns(), 0.2).await.unwrap_err();
        match err {
            GatewayError::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "rate limited");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
