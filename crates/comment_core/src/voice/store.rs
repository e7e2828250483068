//! File-backed persistence for custom voices.
//!
//! Only the custom subset is ever written; presets live in the binary and
//! would otherwise duplicate across sessions.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::Voice;

#[derive(Debug, Error)]
pub enum VoiceStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No data directory available on this platform")]
    NoDataDir,
}

/// JSON-file store holding the array of custom [`Voice`] records.
///
/// The file is read once at startup and overwritten in full on every
/// mutation, matching the single-keyed-entry model of the extension's local
/// storage.
pub struct VoiceStore {
    path: PathBuf,
}

impl VoiceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location
    /// (`<data_dir>/commentto/custom_voices.json`).
    pub fn default_location() -> Result<Self, VoiceStoreError> {
        let dir = dirs::data_dir().ok_or(VoiceStoreError::NoDataDir)?;
        Ok(Self::new(dir.join("commentto").join("custom_voices.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the custom voices. A missing file is an empty list, not an error.
    pub fn load(&self) -> Result<Vec<Voice>, VoiceStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let voices: Vec<Voice> = serde_json::from_str(&content)?;
        Ok(voices)
    }

    /// Overwrite the store with `voices`. Presets are filtered out here as a
    /// final guard; callers should already pass only the custom subset.
    pub fn save(&self, voices: &[Voice]) -> Result<(), VoiceStoreError> {
        let custom: Vec<&Voice> = voices.iter().filter(|v| !v.is_preset()).collect();
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&custom)?;
        fs::write(&self.path, content)?;
        debug!(path = %self.path.display(), count = custom.len(), "saved custom voices");
        Ok(())
    }
}
