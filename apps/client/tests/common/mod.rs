//! In-process fake of the catalog API, served by axum on an ephemeral port.

#![allow(dead_code)]

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use storefront_core::{Billboard, Category, Color, Image, Product, ProductQuery, Size};
use tokio::net::TcpListener;

/// A running fake catalog.
pub struct FakeCatalog {
    /// `http://127.0.0.1:<port>`
    pub root: String,
}

impl FakeCatalog {
    /// The well-behaved API.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.root)
    }

    /// An API whose endpoints return errors or garbage.
    pub fn broken_url(&self) -> String {
        format!("{}/broken", self.root)
    }
}

pub async fn spawn() -> FakeCatalog {
    let app = Router::new()
        .route("/api/billboards/{id}", get(billboard))
        .route("/api/categories", get(categories))
        .route("/api/categories/{id}", get(category))
        .route("/api/colors", get(colors))
        .route("/api/sizes", get(sizes))
        .route("/api/products", get(products))
        .route("/api/products/{id}", get(product))
        .route("/broken/categories", get(|| async { "not json" }))
        .route(
            "/broken/products",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeCatalog {
        root: format!("http://{addr}"),
    }
}

// =============================================================================
// Fixtures
// =============================================================================

pub fn home_billboard() -> Billboard {
    Billboard {
        id: "bb-home".to_string(),
        label: "Explore the collection".to_string(),
        image_url: "https://cdn.example.com/home.jpg".to_string(),
    }
}

pub fn fixture_categories() -> Vec<Category> {
    vec![
        Category {
            id: "cat-tops".to_string(),
            name: "Tops".to_string(),
            billboard: Some(home_billboard()),
        },
        Category {
            id: "cat-hats".to_string(),
            name: "Hats".to_string(),
            billboard: None,
        },
    ]
}

pub fn fixture_sizes() -> Vec<Size> {
    vec![
        Size {
            id: "size-m".to_string(),
            name: "Medium".to_string(),
            value: "M".to_string(),
        },
        Size {
            id: "size-l".to_string(),
            name: "Large".to_string(),
            value: "L".to_string(),
        },
    ]
}

pub fn fixture_colors() -> Vec<Color> {
    vec![Color {
        id: "color-black".to_string(),
        name: "Black".to_string(),
        value: "#000000".to_string(),
    }]
}

/// hoodie: tops, M, black, featured
/// tee:    tops, L
/// cap:    hats, featured
/// gift:   no category
pub fn fixture_products() -> Vec<Product> {
    let categories = fixture_categories();
    let sizes = fixture_sizes();
    let black = fixture_colors().remove(0);

    let mut hoodie = Product::new("prod-hoodie", "Hoodie");
    hoodie.price = "59.99".to_string();
    hoodie.is_featured = true;
    hoodie.category = Some(categories[0].clone());
    hoodie.size = Some(sizes[0].clone());
    hoodie.color = Some(black);
    hoodie.images = vec![Image {
        id: "img-1".to_string(),
        url: "https://cdn.example.com/hoodie.jpg".to_string(),
    }];

    let mut tee = Product::new("prod-tee", "Tee");
    tee.price = "19.5".to_string();
    tee.category = Some(categories[0].clone());
    tee.size = Some(sizes[1].clone());

    let mut cap = Product::new("prod-cap", "Cap");
    cap.price = "15".to_string();
    cap.is_featured = true;
    cap.category = Some(categories[1].clone());

    let mut gift = Product::new("prod-gift", "Gift card");
    gift.price = "25".to_string();

    vec![hoodie, tee, cap, gift]
}

// =============================================================================
// Handlers
// =============================================================================

async fn billboard(Path(id): Path<String>) -> Result<Json<Billboard>, StatusCode> {
    let billboard = home_billboard();
    if billboard.id == id {
        Ok(Json(billboard))
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

async fn categories() -> Json<Vec<Category>> {
    Json(fixture_categories())
}

async fn category(Path(id): Path<String>) -> Result<Json<Category>, StatusCode> {
    fixture_categories()
        .into_iter()
        .find(|c| c.id == id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn colors() -> Json<Vec<Color>> {
    Json(fixture_colors())
}

async fn sizes() -> Json<Vec<Size>> {
    Json(fixture_sizes())
}

async fn products(Query(query): Query<ProductQuery>) -> Json<Vec<Product>> {
    Json(
        fixture_products()
            .into_iter()
            .filter(|p| query.matches(p))
            .collect(),
    )
}

async fn product(Path(id): Path<String>) -> Result<Json<Product>, StatusCode> {
    fixture_products()
        .into_iter()
        .find(|p| p.id == id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}
