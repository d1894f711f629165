//! # Catalog Client
//!
//! Read-only HTTP client for the store's catalog API.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog API (relative to base_url)                   │
//! │                                                                         │
//! │  GET /billboards/{id}     → Billboard                                   │
//! │  GET /categories          → Category[]                                  │
//! │  GET /categories/{id}     → Category                                    │
//! │  GET /colors              → Color[]                                     │
//! │  GET /sizes               → Size[]                                      │
//! │  GET /products?categoryId=&colorId=&sizeId=&isFeatured=                 │
//! │                           → Product[]                                   │
//! │  GET /products/{id}       → Product                                     │
//! │                                                                         │
//! │  Any non-2xx status fails with "Failed to fetch <resource>".           │
//! │  There is no retry and no cache; every call is one request.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use storefront_core::validation::validate_id;
use storefront_core::{Billboard, Category, Color, Product, ProductQuery, Size, ValidationError};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiSettings;

// =============================================================================
// Errors
// =============================================================================

/// Errors from the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured base URL cannot be used.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a non-success status.
    #[error("Failed to fetch {resource} (HTTP {status})")]
    Status { resource: &'static str, status: u16 },

    /// The request never produced a response (DNS, connect, timeout).
    #[error("Failed to fetch {resource}: {message}")]
    Transport {
        resource: &'static str,
        message: String,
    },

    /// The body was not the JSON we expected.
    #[error("Failed to decode {resource}: {message}")]
    Decode {
        resource: &'static str,
        message: String,
    },

    /// An id argument was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CatalogError {
    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the server said the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Client
// =============================================================================

/// HTTP client for the catalog API.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> CatalogResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl(format!(
                "{}: expected an http(s) URL",
                base_url
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("storefront-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Transport {
                resource: "client",
                message: e.to_string(),
            })?;

        Ok(CatalogClient { http, base_url })
    }

    /// Creates a client from the `[api]` config section.
    pub fn from_settings(settings: &ApiSettings) -> CatalogResult<Self> {
        Self::new(&settings.base_url, settings.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // =========================================================================
    // Resources
    // =========================================================================

    pub async fn get_billboard(&self, id: &str) -> CatalogResult<Billboard> {
        validate_id("billboard", id)?;
        self.fetch("billboard", self.endpoint(&["billboards", id]))
            .await
    }

    pub async fn get_categories(&self) -> CatalogResult<Vec<Category>> {
        self.fetch("categories", self.endpoint(&["categories"])).await
    }

    pub async fn get_category(&self, id: &str) -> CatalogResult<Category> {
        validate_id("category", id)?;
        self.fetch("category", self.endpoint(&["categories", id]))
            .await
    }

    pub async fn get_colors(&self) -> CatalogResult<Vec<Color>> {
        self.fetch("colors", self.endpoint(&["colors"])).await
    }

    pub async fn get_sizes(&self) -> CatalogResult<Vec<Size>> {
        self.fetch("sizes", self.endpoint(&["sizes"])).await
    }

    /// Lists products matching every filter set in `query`.
    pub async fn get_products(&self, query: &ProductQuery) -> CatalogResult<Vec<Product>> {
        self.fetch("products", self.products_url(query)).await
    }

    pub async fn get_product(&self, id: &str) -> CatalogResult<Product> {
        validate_id("product", id)?;
        self.fetch("product", self.endpoint(&["products", id])).await
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in new(): an http(s) URL can always be a base.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn products_url(&self, query: &ProductQuery) -> Url {
        let mut url = self.endpoint(&["products"]);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.query_pairs());
        }
        url
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &'static str, url: Url) -> CatalogResult<T> {
        debug!(%url, resource, "Fetching catalog resource");

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "Catalog request failed");
                CatalogError::Transport {
                    resource,
                    message: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "Catalog returned an error status");
            return Err(CatalogError::Status {
                resource,
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| CatalogError::Decode {
            resource,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CatalogClient {
        CatalogClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_rejects_non_http_base() {
        assert!(matches!(
            CatalogClient::new("ftp://example.com/api", Duration::from_secs(1)),
            Err(CatalogError::InvalidUrl(_))
        ));
        assert!(matches!(
            CatalogClient::new("not a url", Duration::from_secs(1)),
            Err(CatalogError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_endpoint_joins_segments() {
        let c = client("http://localhost:3000/api/store-1");
        assert_eq!(
            c.endpoint(&["products", "abc"]).as_str(),
            "http://localhost:3000/api/store-1/products/abc"
        );
    }

    #[test]
    fn test_endpoint_tolerates_trailing_slash() {
        let c = client("http://localhost:3000/api/");
        assert_eq!(
            c.endpoint(&["categories"]).as_str(),
            "http://localhost:3000/api/categories"
        );

        let bare = client("http://localhost:3000");
        assert_eq!(bare.endpoint(&["sizes"]).as_str(), "http://localhost:3000/sizes");
    }

    #[test]
    fn test_endpoint_encodes_ids() {
        let c = client("http://localhost/api");
        assert_eq!(
            c.endpoint(&["products", "a b?c"]).as_str(),
            "http://localhost/api/products/a%20b%3Fc"
        );
    }

    #[test]
    fn test_products_url_without_filters() {
        let c = client("http://localhost/api");
        assert_eq!(
            c.products_url(&ProductQuery::new()).as_str(),
            "http://localhost/api/products"
        );
    }

    #[test]
    fn test_products_url_with_filters() {
        let c = client("http://localhost/api");
        let query = ProductQuery::new().category("cat-1").featured(true);
        assert_eq!(
            c.products_url(&query).as_str(),
            "http://localhost/api/products?categoryId=cat-1&isFeatured=true"
        );
    }

    #[tokio::test]
    async fn test_bad_id_fails_before_request() {
        // Port 9 (discard) is never contacted: validation fails first.
        let c = client("http://127.0.0.1:9/api");
        assert!(matches!(
            c.get_product("").await,
            Err(CatalogError::Validation(ValidationError::Required { .. }))
        ));
        assert!(matches!(
            c.get_category("a/b").await,
            Err(CatalogError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[test]
    fn test_error_classification() {
        let not_found = CatalogError::Status {
            resource: "product",
            status: 404,
        };
        assert!(not_found.is_not_found());
        assert_eq!(not_found.to_string(), "Failed to fetch product (HTTP 404)");

        let server = CatalogError::Status {
            resource: "products",
            status: 503,
        };
        assert!(!server.is_not_found());
        assert_eq!(server.status(), Some(503));
    }
}
