//! # Cart Persistence
//!
//! Reads and writes the cart snapshot under one key of a [`KeyValueStore`].
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hydrate()                          save(items)                         │
//! │  ─────────                          ───────────                         │
//! │  store.get(key)                     snapshot::encode(items)             │
//! │     │                                  │                                │
//! │     ├─ None ─────────► empty cart      ▼                                │
//! │     ├─ Err ──────────► returned      store.set(key, json)               │
//! │     └─ Some(json)                      │                                │
//! │          │                             └─ Err ──► returned to caller    │
//! │          ▼                                                              │
//! │     snapshot::decode ─ Err ──► empty cart                               │
//! │          │                                                              │
//! │          ▼                                                              │
//! │     Cart::from_items (duplicates dropped, first wins)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A snapshot that reads back but does not decode costs the user their cart,
//! not the session. A store that cannot be read at all is an error: starting
//! empty there would let the next write clobber a snapshot that may be fine.

use storefront_core::{snapshot, Cart, Product, CART_STORAGE_KEY};
use storefront_db::KeyValueStore;
use tracing::{debug, error, info, warn};

use super::StoreResult;

/// Cart snapshot reader/writer bound to one store key.
#[derive(Debug)]
pub struct CartPersistence<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartPersistence<S> {
    /// Persists under the default `"cart-storage"` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, CART_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        CartPersistence {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Restores the last saved cart, or an empty one when nothing usable
    /// was saved.
    ///
    /// ## Errors
    /// [`StoreError::Storage`](super::StoreError::Storage) when the store
    /// itself cannot be read.
    pub async fn hydrate(&self) -> StoreResult<Cart> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No saved cart");
                return Ok(Cart::new());
            }
            Err(e) => {
                error!(key = %self.key, error = %e, "Could not read saved cart");
                return Err(e.into());
            }
        };

        let items = match snapshot::decode(&raw) {
            Ok(items) => items,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Discarding unreadable cart snapshot");
                return Ok(Cart::new());
            }
        };

        let stored = items.len();
        let cart = Cart::from_items(items);
        if cart.len() != stored {
            warn!(
                key = %self.key,
                dropped = stored - cart.len(),
                "Saved cart had duplicate ids"
            );
        }

        info!(key = %self.key, items = cart.len(), "Cart restored");
        Ok(cart)
    }

    /// Replaces the saved snapshot with `items`.
    pub async fn save(&self, items: &[Product]) -> StoreResult<()> {
        let json = snapshot::encode(items)?;
        self.store.set(&self.key, &json).await?;
        debug!(key = %self.key, items = items.len(), "Cart saved");
        Ok(())
    }
}
