//! # Cart Rules
//!
//! The pure mutation rules of the shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation            Precondition           Result                     │
//! │  ─────────            ────────────           ──────                     │
//! │                                                                         │
//! │  add_item(p) ───────► p.id not in cart ────► items.push(p)  Added      │
//! │               └─────► p.id in cart ────────► unchanged      AlreadyIn  │
//! │                                                                         │
//! │  remove_item(id) ───► id in cart ──────────► entry dropped  Removed    │
//! │               └─────► id not in cart ──────► unchanged      NotFound   │
//! │                                                                         │
//! │  remove_all() ──────► (always) ────────────► items = []                │
//! │                                                                         │
//! │  NOTE: Nothing here persists or notifies. The client's CartStore wraps │
//! │        these rules with the durable store and the notification sink.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::notification::Notification;
use crate::types::Product;

// =============================================================================
// Cart Outcome
// =============================================================================

/// What a cart mutation did.
///
/// Duplicates and misses are outcomes, not errors: the caller reports them
/// and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartOutcome {
    /// Product appended to the end of the cart.
    Added,
    /// A product with the same id was already present; nothing changed.
    AlreadyInCart,
    /// The entry with the given id was dropped.
    Removed,
    /// No entry had the given id; nothing changed.
    NotFound,
}

impl CartOutcome {
    /// Returns true if the cart's contents changed.
    pub fn is_change(&self) -> bool {
        matches!(self, CartOutcome::Added | CartOutcome::Removed)
    }

    /// The user-facing notification for this outcome.
    pub fn notification(&self) -> Notification {
        match self {
            CartOutcome::Added => Notification::success("Added to cart"),
            CartOutcome::AlreadyInCart => Notification::error("Item already in cart"),
            CartOutcome::Removed => Notification::success("Removed from cart"),
            CartOutcome::NotFound => Notification::error("Item not found in cart"),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - No two items share an id (exact string equality)
/// - Items stay in insertion order; removal never reorders the rest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Builds a cart from previously stored items.
    ///
    /// Later entries whose id was already seen are dropped, so a snapshot
    /// that somehow holds duplicates still yields a cart that satisfies the
    /// uniqueness invariant. The first occurrence wins.
    pub fn from_items(items: impl IntoIterator<Item = Product>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            cart.add_item(item);
        }
        cart
    }

    /// Appends a product unless one with the same id is already present.
    pub fn add_item(&mut self, product: Product) -> CartOutcome {
        if self.contains(&product.id) {
            return CartOutcome::AlreadyInCart;
        }

        self.items.push(product);
        CartOutcome::Added
    }

    /// Removes the entry with the given id.
    pub fn remove_item(&mut self, id: &str) -> CartOutcome {
        match self.position(id) {
            Some(index) => {
                // Vec::remove shifts the tail down, keeping relative order.
                self.items.remove(index);
                CartOutcome::Removed
            }
            None => CartOutcome::NotFound,
        }
    }

    /// Clears all items from the cart.
    pub fn remove_all(&mut self) {
        self.items.clear();
    }

    /// Returns true if an item with this id is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Looks up an item by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Read-only view of the items in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Consumes the cart, returning its items.
    pub fn into_items(self) -> Vec<Product> {
        self.items
    }

    /// Returns the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::NotificationKind;

    fn product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id))
    }

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.items().iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();

        assert_eq!(cart.add_item(product("A")), CartOutcome::Added);
        assert_eq!(cart.add_item(product("B")), CartOutcome::Added);

        assert_eq!(ids(&cart), vec!["A", "B"]);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_cart_duplicate_add_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_item(product("A"));
        cart.add_item(product("B"));
        let before = cart.clone();

        let mut renamed = product("A");
        renamed.name = "Different name, same id".to_string();

        assert_eq!(cart.add_item(renamed), CartOutcome::AlreadyInCart);
        assert_eq!(cart, before);
        assert_eq!(cart.get("A").unwrap().name, "Product A");
    }

    #[test]
    fn test_cart_ids_compare_exactly() {
        let mut cart = Cart::new();
        cart.add_item(product("abc"));

        assert_eq!(cart.add_item(product("ABC")), CartOutcome::Added);
        assert_eq!(cart.add_item(product(" abc")), CartOutcome::Added);
        assert_eq!(cart.len(), 3);
    }

    #[test]
    fn test_cart_uniqueness_over_many_adds() {
        let mut cart = Cart::new();
        for round in 0..5 {
            for id in ["A", "B", "C", "A", "B"] {
                let outcome = cart.add_item(product(id));
                if round > 0 {
                    assert_eq!(outcome, CartOutcome::AlreadyInCart);
                }
            }
        }

        assert_eq!(ids(&cart), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_cart_remove_preserves_order() {
        let mut cart = Cart::new();
        for id in ["A", "B", "C", "D"] {
            cart.add_item(product(id));
        }

        assert_eq!(cart.remove_item("B"), CartOutcome::Removed);
        assert_eq!(ids(&cart), vec!["A", "C", "D"]);

        assert_eq!(cart.remove_item("D"), CartOutcome::Removed);
        assert_eq!(ids(&cart), vec!["A", "C"]);
    }

    #[test]
    fn test_cart_remove_missing_id() {
        let mut cart = Cart::new();
        cart.add_item(product("A"));
        let before = cart.clone();

        assert_eq!(cart.remove_item("Z"), CartOutcome::NotFound);
        assert_eq!(cart, before);

        let mut empty = Cart::new();
        assert_eq!(empty.remove_item("A"), CartOutcome::NotFound);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(product("A"));
        cart.add_item(product("B"));
        assert!(!cart.is_empty());

        cart.remove_all();
        assert!(cart.is_empty());

        // Clearing an empty cart is fine too.
        cart.remove_all();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_items_drops_later_duplicates() {
        let mut first_a = product("A");
        first_a.name = "first".to_string();
        let mut second_a = product("A");
        second_a.name = "second".to_string();

        let cart = Cart::from_items(vec![first_a, product("B"), second_a]);

        assert_eq!(ids(&cart), vec!["A", "B"]);
        assert_eq!(cart.get("A").unwrap().name, "first");
    }

    #[test]
    fn test_outcome_notifications() {
        let added = CartOutcome::Added.notification();
        assert_eq!(added.kind, NotificationKind::Success);
        assert_eq!(added.message, "Added to cart");

        let duplicate = CartOutcome::AlreadyInCart.notification();
        assert_eq!(duplicate.kind, NotificationKind::Error);
        assert_eq!(duplicate.message, "Item already in cart");

        assert_eq!(CartOutcome::Removed.notification().message, "Removed from cart");
        assert_eq!(
            CartOutcome::NotFound.notification().message,
            "Item not found in cart"
        );
    }

    #[test]
    fn test_outcome_is_change() {
        assert!(CartOutcome::Added.is_change());
        assert!(CartOutcome::Removed.is_change());
        assert!(!CartOutcome::AlreadyInCart.is_change());
        assert!(!CartOutcome::NotFound.is_change());
    }
}
