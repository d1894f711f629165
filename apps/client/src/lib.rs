//! # Storefront Client Library
//!
//! A storefront client: a durable shopping cart, a product preview slot and
//! a read-only catalog API client, wired together behind [`Storefront`].
//!
//! ## Module Organization
//! ```text
//! storefront_client/
//! ├── lib.rs          ◄─── You are here (Storefront wiring, logging)
//! ├── main.rs         ◄─── `storefront` CLI
//! ├── config.rs       ◄─── ClientConfig (TOML + env)
//! ├── catalog.rs      ◄─── CatalogClient (reqwest)
//! ├── notify.rs       ◄─── Notification sinks
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports, StoreError
//! │   ├── cart.rs     ◄─── CartStore
//! │   ├── persist.rs  ◄─── CartPersistence (snapshot ↔ KeyValueStore)
//! │   └── preview.rs  ◄─── PreviewStore
//! ├── commands/       ◄─── Cart, catalog and preview commands
//! └── error.rs        ◄─── ApiError for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()             RUST_LOG or "info,storefront=debug"      │
//! │  2. ClientConfig::load()       defaults → storefront.toml → env         │
//! │  3. Database::new()            SQLite (WAL), migrations                 │
//! │  4. CartStore::load()          hydrate "cart-storage" (read error fails)│
//! │  5. CatalogClient::new()       base URL + timeout                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod notify;
pub mod state;

use std::sync::Arc;

use storefront_db::{Database, DbConfig, KeyValueStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::CatalogClient;
use config::{ClientConfig, ConfigError};
use error::ApiResult;
use notify::NotificationSink;
use state::{CartPersistence, CartStore, PreviewStore};

/// The wired-up client: one cart, one preview, one catalog connection.
#[derive(Debug)]
pub struct Storefront<S = Database> {
    pub config: ClientConfig,
    pub catalog: CatalogClient,
    pub cart: CartStore<S>,
    pub preview: PreviewStore,
}

impl<S: KeyValueStore> Storefront<S> {
    /// Builds the client over an already-open store. The cart is hydrated
    /// before this returns.
    pub async fn with_store(
        config: ClientConfig,
        store: S,
        notifier: Arc<dyn NotificationSink>,
    ) -> ApiResult<Self> {
        config.validate()?;

        let catalog = CatalogClient::from_settings(&config.api)?;
        let persistence = CartPersistence::with_key(store, config.storage.cart_key.clone());
        let cart = CartStore::load(persistence, notifier).await?;

        Ok(Storefront {
            config,
            catalog,
            cart,
            preview: PreviewStore::new(),
        })
    }
}

impl Storefront<Database> {
    /// Opens the SQLite store named by the config and builds the client.
    pub async fn open(config: ClientConfig, notifier: Arc<dyn NotificationSink>) -> ApiResult<Self> {
        let db_path = config.storage.resolve_database_path()?;
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Invalid(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        info!(db_path = %db_path.display(), "Opening local store");

        let db = Database::new(DbConfig::new(db_path)).await?;
        Self::with_store(config, db, notifier).await
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_client=trace` - Trace this crate only
/// - Default: INFO, DEBUG for the storefront crates
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
