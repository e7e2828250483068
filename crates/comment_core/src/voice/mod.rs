//! Voice model, built-in presets, registry and persistence.

mod presets;
mod registry;
mod store;

pub use presets::{preset_voices, PRESET_ID_PREFIX};
pub use registry::VoiceRegistry;
pub use store::{VoiceStore, VoiceStoreError};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named writing voice: a stable id, a display name and a free-text
/// behavioral profile the generator follows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Voice {
    pub id: String,
    pub name: String,
    pub profile: String,
}

impl Voice {
    /// Create a custom voice with a freshly minted id.
    pub fn custom(name: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            id: format!("voice-{}", Uuid::new_v4()),
            name: name.into(),
            profile: profile.into(),
        }
    }

    /// Preset voices ship with the binary and are never removable or persisted.
    pub fn is_preset(&self) -> bool {
        self.id.starts_with(PRESET_ID_PREFIX)
    }
}
