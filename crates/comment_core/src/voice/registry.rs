//! In-memory voice registry backed by a [`VoiceStore`].

use tracing::debug;

use super::{preset_voices, Voice, VoiceStore, VoiceStoreError};

/// Presets plus the user's custom voices, with a current selection.
///
/// Every mutation saves the custom subset immediately, so persistence timing
/// is deterministic rather than a background effect.
pub struct VoiceRegistry {
    store: VoiceStore,
    custom: Vec<Voice>,
    selected_id: String,
}

impl VoiceRegistry {
    /// Load custom voices from `store`. Selection starts at the first preset.
    pub fn open(store: VoiceStore) -> Result<Self, VoiceStoreError> {
        let custom = store.load()?;
        let selected_id = preset_voices()[0].id.clone();
        Ok(Self {
            store,
            custom,
            selected_id,
        })
    }

    /// All voices in display order: presets first, then custom.
    pub fn list(&self) -> Vec<&Voice> {
        preset_voices().iter().chain(self.custom.iter()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Voice> {
        self.list().into_iter().find(|v| v.id == id)
    }

    /// Find a voice by id first, then by case-insensitive name.
    pub fn resolve(&self, id_or_name: &str) -> Option<&Voice> {
        self.get(id_or_name).or_else(|| {
            self.list()
                .into_iter()
                .find(|v| v.name.eq_ignore_ascii_case(id_or_name))
        })
    }

    pub fn selected(&self) -> &Voice {
        // The id always refers to a live voice: removal resets it and presets
        // never go away.
        let id = self.selected_id.clone();
        self.get(&id).unwrap_or(&preset_voices()[0])
    }

    /// Select `id` if it exists; unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: &str) -> bool {
        if self.get(id).is_some() {
            self.selected_id = id.to_string();
            true
        } else {
            false
        }
    }

    /// Append a custom voice built from a derived `{name, profile}` pair and
    /// persist. Returns the stored voice with its minted id.
    pub fn add_custom(
        &mut self,
        name: impl Into<String>,
        profile: impl Into<String>,
    ) -> Result<Voice, VoiceStoreError> {
        let voice = Voice::custom(name, profile);
        self.custom.push(voice.clone());
        self.store.save(&self.custom)?;
        Ok(voice)
    }

    /// Remove a custom voice and persist. Preset ids are a silent no-op. If
    /// the removed voice was selected, selection falls back to the first
    /// preset.
    pub fn remove(&mut self, id: &str) -> Result<bool, VoiceStoreError> {
        if id.starts_with(super::PRESET_ID_PREFIX) {
            debug!(id, "ignoring removal of preset voice");
            return Ok(false);
        }
        let before = self.custom.len();
        self.custom.retain(|v| v.id != id);
        if self.custom.len() == before {
            return Ok(false);
        }
        if self.selected_id == id {
            self.selected_id = preset_voices()[0].id.clone();
        }
        self.store.save(&self.custom)?;
        Ok(true)
    }
}
