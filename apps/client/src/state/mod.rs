//! # State Module
//!
//! Client-side state holders. Each one owns a single concern so commands
//! take only what they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌────────────────────────┐        ┌────────────────────────┐          │
//! │  │      CartStore<S>      │        │     PreviewStore       │          │
//! │  │                        │        │                        │          │
//! │  │  Mutex<Cart>           │        │  watch<PreviewState>   │          │
//! │  │  watch<Vec<Product>>   │        │  (memory only)         │          │
//! │  │  CartPersistence<S> ───┼──► KeyValueStore (SQLite)      │          │
//! │  └────────────────────────┘        └────────────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: tokio Mutex held across the durable write                │
//! │  • PreviewStore: watch::Sender, mutations are atomic per call          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod persist;
mod preview;

pub use cart::CartStore;
pub use persist::CartPersistence;
pub use preview::PreviewStore;

use storefront_core::CoreError;
use storefront_db::DbError;
use thiserror::Error;

/// Why the cart could not be read from or made durable in its store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Cart storage failed: {0}")]
    Storage(#[from] DbError),

    #[error("Failed to encode cart: {0}")]
    Snapshot(#[from] CoreError),
}

pub type StoreResult<T> = Result<T, StoreError>;
