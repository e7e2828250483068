use async_trait::async_trait;
use thiserror::Error;

use crate::types::Turn;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// No provider credential was available at startup. Every call
    /// short-circuits to this without attempting network I/O.
    #[error("LLM client not configured")]
    NotConfigured,

    #[error("Empty response from LLM")]
    EmptyResponse,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, GatewayError>;

/// The one seam to the text-completion provider.
///
/// No retries happen at this layer; a failed call surfaces immediately to the
/// caller.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Run `turns` through `model` and return the generated text, trimmed.
    async fn complete(&self, model: &str, turns: &[Turn], temperature: f32) -> Result<String>;
}
