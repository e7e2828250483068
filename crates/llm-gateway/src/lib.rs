//! llm-gateway - Narrow text-completion gateway
//!
//! Wraps an opaque chat-completion provider behind a single trait so the
//! orchestrator and templates never touch HTTP details. One provider ships
//! today (Groq's OpenAI-compatible API); alternates only need to implement
//! [`CompletionClient`].

pub mod profile;
pub mod prompts;
mod provider;
pub mod providers;
mod types;

pub use profile::parse_derived_profile;
pub use provider::{CompletionClient, GatewayError, Result};
pub use providers::GroqClient;
pub use types::{Role, Turn};

/// Default generation model, centralized for an easy future swap.
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";
