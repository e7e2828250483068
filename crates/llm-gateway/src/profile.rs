//! Parsing of derived voice-profile completions.

use comment_core::types::VoiceProfileResult;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*name\s*:\s*(.+?)\s*$").expect("valid regex"));
static PROFILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*profile\s*:\s*(.+?)\s*$").expect("valid regex"));

/// Name used when samples-derived output has no `NAME:` line; there is no
/// description to fall back on.
const SAMPLES_FALLBACK_NAME: &str = "Custom Voice";

const FALLBACK_NAME_CHARS: usize = 30;

/// Extract `{name, profile}` from a raw completion.
///
/// Labels match case-insensitively at line starts. When either label is
/// missing the parse falls back instead of failing: the name becomes a
/// truncated prefix of `description` (or a generic default for samples mode)
/// and the profile becomes the full raw text.
pub fn parse_derived_profile(raw: &str, description: Option<&str>) -> VoiceProfileResult {
    let name = NAME_RE
        .captures(raw)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| fallback_name(description));

    let profile = PROFILE_RE
        .captures(raw)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| raw.trim().to_string());

    VoiceProfileResult { name, profile }
}

fn fallback_name(description: Option<&str>) -> String {
    match description {
        Some(description) => description.chars().take(FALLBACK_NAME_CHARS).collect(),
        None => SAMPLES_FALLBACK_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_output() {
        let raw = "NAME: Dry Morning Skeptic\nPROFILE: Short clipped sentences, doubts first.";
        let parsed = parse_derived_profile(raw, Some("dry and skeptical"));
        assert_eq!(parsed.name, "Dry Morning Skeptic");
        assert_eq!(parsed.profile, "Short clipped sentences, doubts first.");
    }

    #[test]
    fn labels_match_case_insensitively() {
        let raw = "name: Quiet Observer\nProfile: Watches first, speaks last.";
        let parsed = parse_derived_profile(raw, None);
        assert_eq!(parsed.name, "Quiet Observer");
        assert_eq!(parsed.profile, "Watches first, speaks last.");
    }

    #[test]
    fn missing_labels_fall_back_without_raising() {
        let raw = "A voice that is warm but brisk.";
        let description = "a warm but brisk voice that never rambles on";
        let parsed = parse_derived_profile(raw, Some(description));
        assert_eq!(parsed.name, description.chars().take(30).collect::<String>());
        assert_eq!(parsed.profile, raw);
    }

    #[test]
    fn samples_mode_uses_generic_fallback_name() {
        let parsed = parse_derived_profile("unstructured text", None);
        assert_eq!(parsed.name, "Custom Voice");
        assert_eq!(parsed.profile, "unstructured text");
    }

    #[test]
    fn partial_labels_mix_parse_and_fallback() {
        let raw = "PROFILE: Only the profile line came back.";
        let parsed = parse_derived_profile(raw, Some("short description"));
        assert_eq!(parsed.name, "short description");
        assert_eq!(parsed.profile, "Only the profile line came back.");
    }

    #[test]
    fn fallback_name_is_char_safe() {
        let description = "é".repeat(40);
        let parsed = parse_derived_profile("no labels here", Some(&description));
        assert_eq!(parsed.name.chars().count(), 30);
    }
}
