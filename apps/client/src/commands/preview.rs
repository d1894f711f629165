//! # Preview Commands

use storefront_core::PreviewState;
use tracing::debug;

use crate::catalog::CatalogClient;
use crate::error::ApiResult;
use crate::state::PreviewStore;

/// Fetches `product_id` and shows it in the preview.
pub async fn preview_product(
    catalog: &CatalogClient,
    preview: &PreviewStore,
    product_id: &str,
) -> ApiResult<PreviewState> {
    debug!(product_id = %product_id, "preview_product command");

    let product = catalog.get_product(product_id).await?;
    preview.open(product);
    Ok(preview.snapshot())
}

/// Hides the preview.
pub fn close_preview(preview: &PreviewStore) -> PreviewState {
    debug!("close_preview command");
    preview.close();
    preview.snapshot()
}
