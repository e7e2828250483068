//! comment_core - Core types shared across the commentto system
//!
//! This crate provides the foundational types used by the server, the gateway
//! and the CLI:
//! - `types` - request/response DTOs for the HTTP API
//! - `voice` - Voice model, built-in presets, registry and persistence
//! - `text` - text truncation helpers

pub mod text;
pub mod types;
pub mod voice;

// Re-export commonly used types
pub use text::{safe_truncate, DEFAULT_TRUNCATE_CHARS};
pub use types::{CommentRequest, CommentResponse, UserStyle, VoiceProfileRequest, VoiceProfileResult};
pub use voice::{preset_voices, Voice, VoiceRegistry, VoiceStore, VoiceStoreError, PRESET_ID_PREFIX};
