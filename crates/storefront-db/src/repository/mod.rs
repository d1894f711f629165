//! # Repository Module
//!
//! Repository implementations over the SQLite pool.
//!
//! ## Available Repositories
//!
//! - [`KvRepository`](kv::KvRepository) - Namespaced key-value storage

pub mod kv;
