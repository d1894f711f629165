//! # Domain Types
//!
//! Catalog types shared by the cart, the catalog client and the frontend.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │   Billboard     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id             │──►│  id             │       │
//! │  │  name           │   │  name           │   │  label          │       │
//! │  │  price (text)   │   │  billboard?     │   │  imageUrl       │       │
//! │  │  isFeatured     │   └─────────────────┘   └─────────────────┘       │
//! │  │  size? color?   │                                                   │
//! │  │  images[]       │   ┌─────────────────┐   ┌─────────────────┐       │
//! │  └─────────────────┘   │  Size / Color   │   │     Image       │       │
//! │                        │  id, name,value │   │  id, url        │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! The catalog API speaks camelCase JSON. Relations may be omitted by some
//! endpoints, so they are optional here and skipped when absent; a product
//! therefore serializes back to the same JSON it was read from.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Image
// =============================================================================

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Image {
    pub id: String,
    pub url: String,
}

// =============================================================================
// Billboard
// =============================================================================

/// A promotional banner shown on the home feed and category pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: String,
    pub label: String,
    pub image_url: String,
}

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,

    /// The category's billboard, when the endpoint embeds it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub billboard: Option<Billboard>,
}

// =============================================================================
// Size & Color
// =============================================================================

/// A size option (e.g. name "Large", value "L").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Size {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// A color option (value is a CSS color, e.g. "#000000").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Color {
    pub id: String,
    pub name: String,
    pub value: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product as served by the catalog.
///
/// The cart never looks past [`Product::id`]; every other field is carried
/// along for display and echoed back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog-wide unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price as decimal text.
    ///
    /// The API serializes decimals as strings, older deployments as numbers.
    /// Strings are kept verbatim, numbers are rendered back to text (`12.50`
    /// becomes `"12.5"`) and `null` becomes the empty string. Nothing here
    /// does arithmetic on it.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: String,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category: Option<Category>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub size: Option<Size>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub color: Option<Color>,

    #[serde(default)]
    pub images: Vec<Image>,

    /// Top-level fields this client does not model (`storeId`, `createdAt`,
    /// ...). Written back untouched when the product is serialized.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Creates a bare product with only an id and a name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price: "0".to_string(),
            is_featured: false,
            category: None,
            size: None,
            color: None,
            images: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Returns the id of the product's category, if known.
    pub fn category_id(&self) -> Option<&str> {
        self.category.as_ref().map(|c| c.id.as_str())
    }

    /// Returns the first image URL (the card/thumbnail image).
    pub fn primary_image_url(&self) -> Option<&str> {
        self.images.first().map(|i| i.url.as_str())
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawPrice>::deserialize(deserializer)? {
        Some(RawPrice::Text(text)) => text,
        Some(RawPrice::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

// =============================================================================
// Product Query
// =============================================================================

/// Filters for the product listing endpoint.
///
/// ## Semantics
/// Every filter is optional. Present filters combine with AND; absent filters
/// impose no constraint and are not sent on the wire.
///
/// ```rust
/// use storefront_core::ProductQuery;
///
/// let query = ProductQuery::new().category("cat-1").featured(true);
/// assert_eq!(
///     query.query_pairs(),
///     vec![("categoryId", "cat-1".to_string()), ("isFeatured", "true".to_string())]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub category_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub size_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub color_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub is_featured: Option<bool>,
}

impl ProductQuery {
    /// Creates an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, id: impl Into<String>) -> Self {
        self.category_id = Some(id.into());
        self
    }

    pub fn size(mut self, id: impl Into<String>) -> Self {
        self.size_id = Some(id.into());
        self
    }

    pub fn color(mut self, id: impl Into<String>) -> Self {
        self.color_id = Some(id.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.is_featured = Some(featured);
        self
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.size_id.is_none()
            && self.color_id.is_none()
            && self.is_featured.is_none()
    }

    /// Query-string pairs for the filters that are set, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(ref id) = self.category_id {
            pairs.push(("categoryId", id.clone()));
        }
        if let Some(ref id) = self.color_id {
            pairs.push(("colorId", id.clone()));
        }
        if let Some(ref id) = self.size_id {
            pairs.push(("sizeId", id.clone()));
        }
        if let Some(featured) = self.is_featured {
            pairs.push(("isFeatured", featured.to_string()));
        }
        pairs
    }

    /// Checks a product against every present filter.
    ///
    /// A filter on a relation the product does not carry never matches.
    pub fn matches(&self, product: &Product) -> bool {
        fn relation_matches(filter: &Option<String>, actual: Option<&str>) -> bool {
            match filter {
                Some(wanted) => actual == Some(wanted.as_str()),
                None => true,
            }
        }

        relation_matches(&self.category_id, product.category_id())
            && relation_matches(&self.size_id, product.size.as_ref().map(|s| s.id.as_str()))
            && relation_matches(
                &self.color_id,
                product.color.as_ref().map(|c| c.id.as_str()),
            )
            && self
                .is_featured
                .map_or(true, |featured| product.is_featured == featured)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
