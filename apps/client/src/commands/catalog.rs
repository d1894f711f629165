//! # Catalog Commands
//!
//! Page-shaped reads composed from several catalog calls.
//!
//! ```text
//! home_feed()            billboard(home id) + products(isFeatured=true)
//! product_detail(id)     product(id) + products(categoryId) minus itself
//! catalog_filters()      categories + sizes + colors, fetched together
//! category_page(id, ..)  category(id) + products(categoryId, sizeId, colorId)
//! ```

use serde::Serialize;
use storefront_core::{Billboard, Category, Color, Product, ProductQuery, Size};
use tracing::debug;
use ts_rs::TS;

use crate::catalog::CatalogClient;
use crate::error::ApiResult;

/// Landing page content.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct HomeFeed {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub billboard: Option<Billboard>,

    pub featured: Vec<Product>,
}

/// A product with others from the same category.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,

    pub related: Vec<Product>,
}

/// The values products can be filtered by.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilters {
    pub categories: Vec<Category>,
    pub sizes: Vec<Size>,
    pub colors: Vec<Color>,
}

/// A category with its (filtered) products.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPage {
    pub category: Category,
    pub products: Vec<Product>,
    pub sizes: Vec<Size>,
    pub colors: Vec<Color>,
}

/// Featured products, headed by the configured billboard if there is one.
pub async fn home_feed(catalog: &CatalogClient, billboard_id: Option<&str>) -> ApiResult<HomeFeed> {
    debug!(billboard_id = ?billboard_id, "home_feed command");

    let featured_query = ProductQuery::new().featured(true);
    let featured = catalog.get_products(&featured_query);

    let (billboard, featured) = match billboard_id {
        Some(id) => {
            let (billboard, featured) = tokio::try_join!(catalog.get_billboard(id), featured)?;
            (Some(billboard), featured)
        }
        None => (None, featured.await?),
    };

    Ok(HomeFeed { billboard, featured })
}

/// One product plus the rest of its category.
pub async fn product_detail(catalog: &CatalogClient, product_id: &str) -> ApiResult<ProductDetail> {
    debug!(product_id = %product_id, "product_detail command");

    let product = catalog.get_product(product_id).await?;

    let related = match product.category_id() {
        Some(category_id) => catalog
            .get_products(&ProductQuery::new().category(category_id))
            .await?
            .into_iter()
            .filter(|p| p.id != product.id)
            .collect(),
        None => Vec::new(),
    };

    Ok(ProductDetail { product, related })
}

/// Categories, sizes and colors in one round.
pub async fn catalog_filters(catalog: &CatalogClient) -> ApiResult<CatalogFilters> {
    debug!("catalog_filters command");

    let (categories, sizes, colors) = tokio::try_join!(
        catalog.get_categories(),
        catalog.get_sizes(),
        catalog.get_colors()
    )?;

    Ok(CatalogFilters {
        categories,
        sizes,
        colors,
    })
}

/// A category's products, narrowed by optional size and color.
pub async fn category_page(
    catalog: &CatalogClient,
    category_id: &str,
    size_id: Option<&str>,
    color_id: Option<&str>,
) -> ApiResult<CategoryPage> {
    debug!(category_id = %category_id, "category_page command");

    let mut query = ProductQuery::new().category(category_id);
    if let Some(size) = size_id {
        query = query.size(size);
    }
    if let Some(color) = color_id {
        query = query.color(color);
    }

    let (category, products, sizes, colors) = tokio::try_join!(
        catalog.get_category(category_id),
        catalog.get_products(&query),
        catalog.get_sizes(),
        catalog.get_colors()
    )?;

    Ok(CategoryPage {
        category,
        products,
        sizes,
        colors,
    })
}
