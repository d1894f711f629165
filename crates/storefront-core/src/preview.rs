//! # Preview State
//!
//! Tracks the single product shown in a preview overlay.
//!
//! ```text
//!            open(p)                 close()
//!   Closed ──────────► Open { p } ──────────► Closed { data: p }
//!                         │  ▲
//!                         └──┘ open(q) replaces p with q
//! ```
//!
//! `close()` keeps the last product in `data` so a closing transition can
//! still render it. Callers must not treat a set `data` as "open".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// Open/closed flag plus the last product opened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PreviewState {
    pub is_open: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub data: Option<Product>,
}

impl PreviewState {
    /// Creates a closed, empty preview.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `product`, replacing whatever was shown before.
    pub fn open(&mut self, product: Product) {
        self.is_open = true;
        self.data = Some(product);
    }

    /// Hides the preview. `data` is left as it was.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// The product currently shown, only while open.
    pub fn visible(&self) -> Option<&Product> {
        if self.is_open {
            self.data.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_and_empty() {
        let state = PreviewState::new();
        assert!(!state.is_open);
        assert!(state.data.is_none());
        assert!(state.visible().is_none());
    }

    #[test]
    fn test_open_replaces_data() {
        let mut state = PreviewState::new();
        state.open(Product::new("A", "Hat"));
        state.open(Product::new("B", "Scarf"));

        assert!(state.is_open);
        assert_eq!(state.visible().map(|p| p.id.as_str()), Some("B"));
    }

    #[test]
    fn test_close_keeps_last_product() {
        let mut state = PreviewState::new();
        state.open(Product::new("A", "Hat"));
        state.close();

        assert!(!state.is_open);
        assert_eq!(state.data.as_ref().map(|p| p.id.as_str()), Some("A"));
        assert!(state.visible().is_none());
    }

    #[test]
    fn test_empty_preview_omits_data() {
        let json = serde_json::to_value(PreviewState::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "isOpen": false }));

        let mut state = PreviewState::new();
        state.open(Product::new("A", "Hat"));
        state.close();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["data"]["id"], serde_json::json!("A"));
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut state = PreviewState::new();
        state.close();
        assert_eq!(state, PreviewState::new());
    }
}
