//! # storefront-core: Pure Domain Logic for the Storefront Client
//!
//! This crate holds the catalog types and the cart rules as pure code with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Client Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 storefront-client (apps/client)                 │   │
//! │  │   CartStore, PreviewStore, CatalogClient, commands, CLI         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            ★ storefront-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  preview  │  │ snapshot  │  │   │
//! │  │   │  Product  │  │   Cart    │  │  Preview  │  │  encode   │  │   │
//! │  │   │  Category │  │  Outcome  │  │  State    │  │  decode   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 storefront-db (Durable Store)                   │   │
//! │  │              SQLite key-value table, migrations                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog types (Product, Category, Billboard, ...) and filters
//! - [`cart`] - Cart mutation rules (uniqueness, ordering)
//! - [`preview`] - Single-slot preview state
//! - [`notification`] - Outcome messages for the notification sink
//! - [`snapshot`] - Cart snapshot wire format
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::cart::{Cart, CartOutcome};
//! use storefront_core::types::Product;
//!
//! let mut cart = Cart::new();
//! assert_eq!(cart.add_item(Product::new("A", "Hoodie")), CartOutcome::Added);
//! assert_eq!(cart.add_item(Product::new("A", "Hoodie")), CartOutcome::AlreadyInCart);
//! assert_eq!(cart.len(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod notification;
pub mod preview;
pub mod snapshot;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartOutcome};
pub use error::{CoreError, CoreResult, ValidationError};
pub use notification::{Notification, NotificationKind};
pub use preview::PreviewState;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Durable-store key the cart snapshot lives under.
///
/// Matches the key the web storefront used for its local storage, so a
/// snapshot it wrote can be read here. See [`snapshot`] for what a rewrite
/// normalizes.
pub const CART_STORAGE_KEY: &str = "cart-storage";

/// Version stamped into every cart snapshot.
pub const CART_SNAPSHOT_VERSION: u32 = 0;
