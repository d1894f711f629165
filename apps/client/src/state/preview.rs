//! # Preview Store
//!
//! Single-slot "quick view" state. Not persisted; every session starts
//! closed.

use storefront_core::{PreviewState, Product};
use tokio::sync::watch;
use tracing::debug;

/// Observable [`PreviewState`].
#[derive(Debug)]
pub struct PreviewStore {
    state: watch::Sender<PreviewState>,
}

impl PreviewStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(PreviewState::new());
        PreviewStore { state }
    }

    /// Shows `product`, replacing any previous one.
    pub fn open(&self, product: Product) {
        debug!(product_id = %product.id, "preview open");
        self.state.send_modify(|state| state.open(product));
    }

    /// Hides the preview. The last product stays in `data`.
    pub fn close(&self) {
        debug!("preview close");
        self.state.send_modify(PreviewState::close);
    }

    pub fn snapshot(&self) -> PreviewState {
        self.state.borrow().clone()
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open
    }

    pub fn subscribe(&self) -> watch::Receiver<PreviewState> {
        self.state.subscribe()
    }
}

impl Default for PreviewStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_cycle() {
        let preview = PreviewStore::new();
        assert_eq!(preview.snapshot(), PreviewState::new());

        preview.open(Product::new("P1", "Hoodie"));
        assert!(preview.is_open());
        preview.open(Product::new("P2", "Cap"));
        assert_eq!(preview.snapshot().data.unwrap().id, "P2");

        preview.close();
        let state = preview.snapshot();
        assert!(!state.is_open);
        assert_eq!(state.data.unwrap().id, "P2");
    }

    #[test]
    fn test_subscribers_are_notified() {
        let preview = PreviewStore::new();
        let mut rx = preview.subscribe();

        preview.open(Product::new("P1", "Hoodie"));
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_open);

        preview.close();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_open);
    }
}
