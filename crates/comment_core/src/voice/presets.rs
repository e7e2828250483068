//! Built-in preset voices.

use once_cell::sync::Lazy;

use super::Voice;

/// Ids carrying this prefix are compiled-in presets: never removable, never
/// written to the custom-voice store.
pub const PRESET_ID_PREFIX: &str = "preset-";

static PRESET_VOICES: Lazy<Vec<Voice>> = Lazy::new(|| {
    vec![
        Voice {
            id: "preset-friendly".into(),
            name: "Friendly".into(),
            profile: "Casual, warm, and conversational. Sounds supportive and human, like a \
                      friendly reply. Uses short sentences, personal reactions, and light \
                      encouragement without trying to be funny."
                .into(),
        },
        Voice {
            id: "preset-funny".into(),
            name: "Funny".into(),
            profile: "Highly playful and expressive tone with sharp, witty humor. Comfortable \
                      flirting with dark or ironic jokes, but never mean-spirited or offensive. \
                      Uses exaggeration, unexpected comparisons, sentence fragments, and \
                      emotional reactions over explanations. Feels like a clever friend thinking \
                      out loud. Absolutely no corporate or polished language."
                .into(),
        },
        Voice {
            id: "preset-curious".into(),
            name: "Curious".into(),
            profile: "Open and inquisitive tone. Highlights what stood out most and asks one \
                      genuine, thoughtful question to invite discussion."
                .into(),
        },
        Voice {
            id: "preset-neutral".into(),
            name: "Neutral".into(),
            profile: "Clear, balanced, and thoughtful tone. Professional but human. Uses \
                      complete sentences, avoids jokes, and summarizes the key idea with a \
                      practical or reflective takeaway."
                .into(),
        },
        // Character voices
        Voice {
            id: "preset-pirate".into(),
            name: "Pirate".into(),
            profile: "Speaks like a pirate. Uses nautical metaphors, adventurous language, and \
                      playful pirate-style phrasing while still responding meaningfully to the \
                      content."
                .into(),
        },
        Voice {
            id: "preset-harry-potter".into(),
            name: "Wizard".into(),
            profile: "Magical, whimsical tone inspired by wizarding language. Uses wonder, \
                      curiosity, and metaphor while staying relevant to the idea being discussed."
                .into(),
        },
        Voice {
            id: "preset-texan".into(),
            name: "Texan".into(),
            profile: "Confident, folksy Southern tone. Plainspoken, warm, and expressive with a \
                      friendly, down-to-earth attitude."
                .into(),
        },
        Voice {
            id: "preset-yoda".into(),
            name: "Yoda".into(),
            profile: "Speaks in Yoda-style syntax. Inverted sentence structure, wise and \
                      reflective tone, short philosophical observations tied to the content."
                .into(),
        },
    ]
});

/// The compiled-in preset voices, in display order. The first entry is the
/// default selection.
pub fn preset_voices() -> &'static [Voice] {
    &PRESET_VOICES
}
