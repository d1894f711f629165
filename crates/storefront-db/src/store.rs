//! # Key-Value Store Abstraction
//!
//! The durable backing store the client persists state into, behind one
//! trait so the cart store does not care where bytes land.
//!
//! ## Backends
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        KeyValueStore                                    │
//! │                  get(key) / set(key, value) / remove(key)               │
//! │                                                                         │
//! │        ┌──────────────────────┐          ┌──────────────────────┐       │
//! │        │      Database        │          │     MemoryStore      │       │
//! │        │  SQLite kv_store     │          │  HashMap in a Mutex  │       │
//! │        │  survives restarts   │          │  tests, ephemeral    │       │
//! │        └──────────────────────┘          └──────────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `set` replaces the whole value atomically from the caller's point of
//! view. There is no cross-process coordination; the last writer wins.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::DbResult;
use crate::pool::Database;

/// A string-keyed store of string values.
pub trait KeyValueStore: Send + Sync {
    /// Reads the value under `key`, or `None` when absent.
    fn get(&self, key: &str) -> impl Future<Output = DbResult<Option<String>>> + Send;

    /// Replaces the value under `key`.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = DbResult<()>> + Send;

    /// Deletes `key`. Returns true if something was removed.
    fn remove(&self, key: &str) -> impl Future<Output = DbResult<bool>> + Send;
}

impl KeyValueStore for Database {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        self.kv().get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.kv().set(key, value).await
    }

    async fn remove(&self, key: &str) -> DbResult<bool> {
        self.kv().remove(key).await
    }
}

impl<S: KeyValueStore> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> impl Future<Output = DbResult<Option<String>>> + Send {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> impl Future<Output = DbResult<()>> + Send {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> impl Future<Output = DbResult<bool>> + Send {
        (**self).remove(key)
    }
}

// =============================================================================
// In-Memory Store
// =============================================================================

/// Process-local store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.lock().insert(key.into(), value.into());
        store
    }

    /// Synchronous read, for assertions.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    /// Number of keys held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // A panic elsewhere cannot leave a HashMap half-updated here.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> DbResult<Option<String>> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str) -> DbResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> DbResult<bool> {
        Ok(self.lock().remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    async fn exercise<S: KeyValueStore>(store: &S) {
        assert_eq!(store.get("cart-storage").await.unwrap(), None);

        store.set("cart-storage", "one").await.unwrap();
        store.set("cart-storage", "two").await.unwrap();
        assert_eq!(
            store.get("cart-storage").await.unwrap().as_deref(),
            Some("two")
        );

        assert!(store.remove("cart-storage").await.unwrap());
        assert!(!store.remove("cart-storage").await.unwrap());
        assert_eq!(store.get("cart-storage").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_contract() {
        exercise(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_database_store_contract() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        exercise(&db).await;
    }

    #[tokio::test]
    async fn test_arc_store_shares_state() {
        let store = Arc::new(MemoryStore::new());
        let handle = Arc::clone(&store);

        handle.set("k", "v").await.unwrap();
        assert_eq!(store.peek("k").as_deref(), Some("v"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_entry() {
        let store = MemoryStore::with_entry("k", "v");
        assert_eq!(store.peek("k").as_deref(), Some("v"));
        assert!(!store.is_empty());
    }
}
