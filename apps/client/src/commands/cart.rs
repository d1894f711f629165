//! # Cart Commands
//!
//! Cart operations as called from the CLI (or any other front end).
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart   ┌──────────┐  clear_cart   ┌──────────┐   │
//! │  │  Empty   │──────────────►│ In Cart  │──────────────►│  Empty   │   │
//! │  │  Cart    │               │          │ (checkout)     │  Cart    │   │
//! │  └──────────┘               └──────────┘               └──────────┘   │
//! │                                 │   ▲                                   │
//! │                    remove_from_cart  add_to_cart                        │
//! │                                 └───┘                                   │
//! │                                                                         │
//! │  Every change is written to the durable store before it is visible.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::validation::validate_id;
use storefront_core::{CartOutcome, Product};
use storefront_db::KeyValueStore;
use tracing::debug;
use ts_rs::TS;

use crate::catalog::CatalogClient;
use crate::error::ApiResult;
use crate::state::CartStore;

/// Cart contents, plus what the last command did to them.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<Product>,

    pub item_count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub outcome: Option<CartOutcome>,
}

impl CartResponse {
    fn snapshot<S: KeyValueStore>(cart: &CartStore<S>, outcome: Option<CartOutcome>) -> Self {
        let items = cart.items();
        CartResponse {
            item_count: items.len(),
            items,
            outcome,
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart<S: KeyValueStore>(cart: &CartStore<S>) -> CartResponse {
    debug!("get_cart command");
    CartResponse::snapshot(cart, None)
}

/// Fetches `product_id` from the catalog and adds it to the cart.
///
/// The cart stores the product as fetched, so it can be displayed without
/// going back to the catalog.
pub async fn add_to_cart<S: KeyValueStore>(
    catalog: &CatalogClient,
    cart: &CartStore<S>,
    product_id: &str,
) -> ApiResult<CartResponse> {
    debug!(product_id = %product_id, "add_to_cart command");
    validate_id("product", product_id)?;

    let product = catalog.get_product(product_id).await?;
    let outcome = cart.add_item(product).await?;

    Ok(CartResponse::snapshot(cart, Some(outcome)))
}

/// Removes the item with `product_id` from the cart.
pub async fn remove_from_cart<S: KeyValueStore>(
    cart: &CartStore<S>,
    product_id: &str,
) -> ApiResult<CartResponse> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let outcome = cart.remove_item(product_id).await?;
    Ok(CartResponse::snapshot(cart, Some(outcome)))
}

/// Empties the cart.
pub async fn clear_cart<S: KeyValueStore>(cart: &CartStore<S>) -> ApiResult<CartResponse> {
    debug!("clear_cart command");

    cart.remove_all().await?;
    Ok(CartResponse::snapshot(cart, None))
}
