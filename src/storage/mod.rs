//! Storage Module
//!
//! The state the dispatcher reads and writes belongs to the host. This module
//! defines that capability and ships an in-memory implementation for tests,
//! benchmarks and embedding without a ledger.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │ CommandHandler  │
//! └────────┬────────┘
//!          │ put / get
//!          ▼
//! ┌─────────────────┐      ┌──────────────────────────┐
//! │  StateStore     │◄─────│ host ledger state        │
//! │  (trait)        │◄─────│ MemoryStore (sharded)    │
//! └─────────────────┘      └──────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use simple_asset::storage::{MemoryStore, StateStore, StoreConfig};
//! use bytes::Bytes;
//!
//! let store = MemoryStore::with_config(StoreConfig::default().with_shards(4));
//! store.put("name", Bytes::from("Ariz")).unwrap();
//!
//! assert_eq!(store.get("name").unwrap(), Some(Bytes::from("Ariz")));
//! assert_eq!(store.stats().writes, 1);
//! ```

pub mod config;
pub mod memory;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use memory::{MemoryStore, StoreStats};
pub use store::{StateStore, StoreError};
