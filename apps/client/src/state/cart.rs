//! # Cart Store
//!
//! The process-wide cart: pure [`Cart`] rules, made durable and observable.
//!
//! ## Mutation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    CartStore::add_item(product)                         │
//! │                                                                         │
//! │  lock ──► clone cart ──► Cart::add_item ──► outcome                     │
//! │                                               │                         │
//! │                 ┌─────────────────────────────┤                         │
//! │                 ▼                             ▼                         │
//! │          AlreadyInCart                      Added                       │
//! │          (no write)                           │                         │
//! │                 │                     persistence.save(next)            │
//! │                 │                        │            │                 │
//! │                 │                       Ok           Err                │
//! │                 │                        │            │                 │
//! │                 │               commit + publish   return Err           │
//! │                 │                        │         (cart unchanged,     │
//! │                 ▼                        ▼          no notification)    │
//! │           notify(outcome) ◄──────────────┘                              │
//! │                                                                         │
//! │  The lock is held from decision to commit, so two concurrent adds of   │
//! │  the same id cannot both see "not present".                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Observing
//! [`CartStore::subscribe`] hands out a `watch::Receiver` that sees every
//! committed change. No-op outcomes publish nothing.

use std::sync::Arc;

use storefront_core::{Cart, CartOutcome, Product};
use storefront_db::KeyValueStore;
use tokio::sync::{watch, Mutex};
use tracing::debug;

use super::persist::CartPersistence;
use super::StoreResult;
use crate::notify::NotificationSink;

/// Durable, observable shopping cart.
pub struct CartStore<S> {
    cart: Mutex<Cart>,
    persistence: CartPersistence<S>,
    notifier: Arc<dyn NotificationSink>,
    published: watch::Sender<Vec<Product>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Restores the saved cart and builds the store around it.
    ///
    /// Fails only when the store cannot be read; see
    /// [`CartPersistence::hydrate`].
    pub async fn load(
        persistence: CartPersistence<S>,
        notifier: Arc<dyn NotificationSink>,
    ) -> StoreResult<Self> {
        let cart = persistence.hydrate().await?;
        let (published, _) = watch::channel(cart.items().to_vec());

        Ok(CartStore {
            cart: Mutex::new(cart),
            persistence,
            notifier,
            published,
        })
    }

    /// Adds `product` unless an item with the same id is already present.
    pub async fn add_item(&self, product: Product) -> StoreResult<CartOutcome> {
        let product_id = product.id.clone();
        let outcome = self.mutate(|cart| cart.add_item(product)).await?;
        debug!(product_id = %product_id, ?outcome, "add_item");
        Ok(outcome)
    }

    /// Removes the item with `id`, if any.
    pub async fn remove_item(&self, id: &str) -> StoreResult<CartOutcome> {
        let outcome = self.mutate(|cart| cart.remove_item(id)).await?;
        debug!(product_id = %id, ?outcome, "remove_item");
        Ok(outcome)
    }

    /// Empties the cart. Always writes, even when already empty. Silent.
    pub async fn remove_all(&self) -> StoreResult<()> {
        let mut cart = self.cart.lock().await;
        self.commit(&mut cart, Cart::new()).await?;
        debug!("remove_all");
        Ok(())
    }

    /// Current items, in insertion order.
    pub fn items(&self) -> Vec<Product> {
        self.published.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.published.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.published.borrow().is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.published.borrow().iter().any(|p| p.id == id)
    }

    /// Receives the item list after every committed change.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Product>> {
        self.published.subscribe()
    }

    /// Runs one rule against a copy of the cart and commits the copy only
    /// if the rule changed something and the write succeeded.
    async fn mutate<F>(&self, rule: F) -> StoreResult<CartOutcome>
    where
        F: FnOnce(&mut Cart) -> CartOutcome,
    {
        let mut cart = self.cart.lock().await;

        let mut next = cart.clone();
        let outcome = rule(&mut next);

        if outcome.is_change() {
            self.commit(&mut cart, next).await?;
        }

        self.notifier.notify(outcome.notification());
        Ok(outcome)
    }

    async fn commit(&self, current: &mut Cart, next: Cart) -> StoreResult<()> {
        self.persistence.save(next.items()).await?;
        *current = next;
        self.published.send_replace(current.items().to_vec());
        Ok(())
    }
}

impl<S> std::fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.published.borrow().len())
            .finish_non_exhaustive()
    }
}
