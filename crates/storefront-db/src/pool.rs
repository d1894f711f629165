//! # Opening the Store
//!
//! One SQLite database holds the client's durable state.
//!
//! ```text
//! DbConfig::new(path)    file on disk, created on first open
//! DbConfig::in_memory()  private database, gone with the handle
//!        │
//!        ▼
//! Database::new(config) ──► pool ──► embedded migrations ──► db.kv()
//! ```
//!
//! The path goes to SQLite as a filename, never through a connection URL,
//! so `?`, `#` and `%` in a directory name are just characters.
//!
//! ## WAL Mode
//! WAL journaling keeps readers and the single cart writer from blocking
//! each other and recovers cleanly after a crash.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::kv::KvRepository;

/// File-backed pools hold a few connections; an in-memory database exists
/// per connection, so it gets exactly one.
const FILE_POOL_SIZE: u32 = 4;

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// SQLite file, or `None` for a private in-memory database.
    pub database_path: Option<PathBuf>,
}

impl DbConfig {
    /// A database file at `path`. The file is created if it doesn't exist;
    /// its directory must.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: Some(path.into()),
        }
    }

    /// A throwaway database that vanishes with the pool (for tests).
    pub fn in_memory() -> Self {
        DbConfig { database_path: None }
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let options = match &self.database_path {
            Some(path) => SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true),
            None => SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?,
        };

        Ok(options
            .journal_mode(SqliteJournalMode::Wal)
            // Safe from corruption; may lose the last write on power loss
            .synchronous(SqliteSynchronous::Normal))
    }

    fn pool_size(&self) -> u32 {
        if self.database_path.is_some() {
            FILE_POOL_SIZE
        } else {
            1
        }
    }
}

/// Handle to the opened, migrated database.
///
/// Cloning is cheap: clones share the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if needed) the database and applies pending
    /// migrations.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        match &config.database_path {
            Some(path) => info!(path = %path.display(), "Opening database"),
            None => info!("Opening in-memory database"),
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size())
            .connect_with(config.connect_options()?)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        migrations::run_migrations(&pool).await?;

        Ok(Database { pool })
    }

    /// Returns the key-value repository.
    pub fn kv(&self) -> KvRepository {
        KvRepository::new(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "storefront-db-{}-{}-{}",
            name,
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn test_in_memory_database_is_migrated() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert_eq!(db.kv().get("cart-storage").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let a = Database::new(DbConfig::in_memory()).await.unwrap();
        let b = Database::new(DbConfig::in_memory()).await.unwrap();

        a.kv().set("k", "v").await.unwrap();
        assert_eq!(b.kv().get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_path_with_url_characters() {
        let dir = scratch_dir("url-chars").join("my ?shop #1 100%");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("store?.db");

        {
            let db = Database::new(DbConfig::new(&path)).await.unwrap();
            db.kv().set("cart-storage", "kept").await.unwrap();
        }

        assert!(path.exists(), "database created at the literal path");
        let db = Database::new(DbConfig::new(&path)).await.unwrap();
        assert_eq!(db.kv().get("cart-storage").await.unwrap().as_deref(), Some("kept"));

        drop(db);
        let _ = std::fs::remove_dir_all(dir.parent().unwrap_or(&dir));
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(DbConfig::new("/tmp/x.db").pool_size(), FILE_POOL_SIZE);
        assert_eq!(DbConfig::in_memory().pool_size(), 1);
    }
}
