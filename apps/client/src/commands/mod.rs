//! # Commands Module
//!
//! Everything a front end can ask the client to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart manipulation (get, add, remove, clear)
//! ├── catalog.rs  ◄─── Page-shaped catalog reads (home, product, category)
//! └── preview.rs  ◄─── Quick-view open/close
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartStore<S>) -> CartResponse
//!
//! // Only needs the catalog
//! async fn product_detail(catalog: &CatalogClient, id: &str) -> ApiResult<ProductDetail>
//!
//! // Needs both
//! async fn add_to_cart(catalog: &CatalogClient, cart: &CartStore<S>, id: &str)
//! ```

pub mod cart;
pub mod catalog;
pub mod preview;
