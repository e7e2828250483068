//! Rendered-page snapshot types.
//!
//! A snapshot is what an in-page capture script records: block geometry in
//! document order plus the text of the usual semantic landmarks. It is
//! serde-serializable so captures can be saved and re-extracted offline.

use serde::{Deserialize, Serialize};

/// One block-level, content-bearing element.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageBlock {
    /// Top of the bounding box relative to the viewport. Negative when the
    /// block starts above the fold.
    pub top: f64,
    /// Bounding-box height.
    pub height: f64,
    /// Rendered text content.
    pub text: String,
}

impl PageBlock {
    /// Height of the intersection between this block and the viewport
    /// `[0, viewport_height]`. Zero when there is no overlap.
    pub fn visible_height(&self, viewport_height: f64) -> f64 {
        let bottom = self.top + self.height;
        (bottom.min(viewport_height) - self.top.max(0.0)).max(0.0)
    }
}

/// A rendered document as seen by the capture script.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PageSnapshot {
    pub viewport_height: f64,
    /// Blocks in document order.
    #[serde(default)]
    pub blocks: Vec<PageBlock>,
    /// Rendered text of the `article` landmark, if the page has one.
    #[serde(default)]
    pub article_text: Option<String>,
    /// Rendered text of the `main` landmark, if the page has one.
    #[serde(default)]
    pub main_text: Option<String>,
    /// Full rendered body text. Always present; may be empty on a blank page.
    pub body_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_height_clamps_to_viewport() {
        let block = PageBlock {
            top: -100.0,
            height: 300.0,
            text: String::new(),
        };
        assert_eq!(block.visible_height(900.0), 200.0);

        let below = PageBlock {
            top: 1000.0,
            height: 300.0,
            text: String::new(),
        };
        assert_eq!(below.visible_height(900.0), 0.0);

        let spanning = PageBlock {
            top: -50.0,
            height: 2000.0,
            text: String::new(),
        };
        assert_eq!(spanning.visible_height(900.0), 900.0);
    }

    #[test]
    fn snapshot_deserializes_with_minimal_fields() {
        let snapshot: PageSnapshot =
            serde_json::from_str(r#"{"viewport_height": 800.0, "body_text": "hello"}"#).unwrap();
        assert!(snapshot.blocks.is_empty());
        assert!(snapshot.article_text.is_none());
        assert_eq!(snapshot.body_text, "hello");
    }
}
