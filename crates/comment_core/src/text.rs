//! Text truncation helpers.

/// Default cap applied to inbound content before summarization.
pub const DEFAULT_TRUNCATE_CHARS: usize = 16000;

const TRUNCATION_MARKER: &str = "\n\n... [CONTENT TRUNCATED FOR LENGTH] ...\n\n";

/// Truncate `text` to roughly `max_chars`, keeping the head and tail halves
/// around a marker. Long pages usually carry the lede up top and conclusions
/// at the bottom, so the middle is what gets dropped.
///
/// Counts are in `char`s, never bytes, so multi-byte input is never split
/// mid-codepoint.
pub fn safe_truncate(text: &str, max_chars: usize) -> String {
    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }

    let half = max_chars / 2;
    let head: String = text.chars().take(half).collect();
    let tail: String = text
        .chars()
        .skip(len.saturating_sub(half))
        .collect();

    format!("{head}{TRUNCATION_MARKER}{tail}")
}

/// Truncate to at most `max_chars` characters, no marker.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
