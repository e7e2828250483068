//! extractor - Heuristic main-content extraction
//!
//! Given a snapshot of a rendered page (block geometry plus landmark text),
//! pick the text that best represents the primary readable content. The
//! heuristic is a priority-ordered chain of fallbacks and never fails: the
//! last stage is the full body text, which exists by construction.

mod page;

pub use page::{PageBlock, PageSnapshot};

use tracing::debug;

/// Policy knobs for the extraction heuristic. These are tuning constants, not
/// derived values; the defaults match the shipped extension behavior.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Blocks whose viewport-visible height is at or below this are dropped
    /// (navigation chrome, ads, short asides).
    pub min_visible_height: f64,
    /// Blocks with at most this many characters of text are dropped.
    pub min_block_chars: usize,
    /// A stage's trimmed text must exceed this length to be accepted before
    /// falling through to the next stage.
    pub fallback_threshold_chars: usize,
    /// Hard cap on the returned excerpt, in characters.
    pub max_chars: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_visible_height: 120.0,
            min_block_chars: 200,
            fallback_threshold_chars: 300,
            max_chars: 15000,
        }
    }
}

/// Extract the main readable content of `page`, capped at
/// `config.max_chars` characters.
///
/// Stages, each a fallback for the previous:
/// 1. viewport-weighted scan: score visible blocks by
///    `visible_height × text_len`, take the maximum;
/// 2. semantic landmark: `article`, else `main`, else body;
/// 3. full body text, returned unconditionally.
pub fn extract_page_text(page: &PageSnapshot, config: &ExtractorConfig) -> String {
    if let Some(block) = best_visible_block(page, config) {
        if block.text.trim().chars().count() > config.fallback_threshold_chars {
            debug!(top = block.top, "extracted viewport-weighted block");
            return truncate_chars(&block.text, config.max_chars);
        }
    }

    let landmark = page
        .article_text
        .as_deref()
        .or(page.main_text.as_deref())
        .unwrap_or(&page.body_text);
    if landmark.trim().chars().count() > config.fallback_threshold_chars {
        debug!("extracted semantic landmark text");
        return truncate_chars(landmark, config.max_chars);
    }

    debug!("falling back to full body text");
    truncate_chars(&page.body_text, config.max_chars)
}

/// Highest-scoring content block, or `None` when every block fails the
/// visibility/length filters.
///
/// Score is `visible_height × text_len`, which favors large, prominently
/// visible blocks over merely long ones. Ties keep the earliest block in
/// document order (the scan only replaces the best on a strictly greater
/// score).
fn best_visible_block<'a>(
    page: &'a PageSnapshot,
    config: &ExtractorConfig,
) -> Option<&'a PageBlock> {
    let mut best: Option<(&PageBlock, f64)> = None;

    for block in &page.blocks {
        let visible = block.visible_height(page.viewport_height);
        if visible <= config.min_visible_height {
            continue;
        }
        let text_len = block.text.chars().count();
        if text_len <= config.min_block_chars {
            continue;
        }

        let score = visible * text_len as f64;
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((block, score)),
        }
    }

    best.map(|(block, _)| block)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
