//! Sharded In-Memory State Store
//!
//! `MemoryStore` is the in-process stand-in for the host's ledger state.
//! It keeps the same contract a real host provides (last write wins, empty
//! keys rejected, missing keys read as `None`) so command logic can be
//! exercised without a host runtime.
//!
//! ## Concurrency Model
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      MemoryStore                            │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐           │
//! │  │ Shard 0 │ │ Shard 1 │ │ Shard 2 │ │ Shard N │           │
//! │  │ RwLock  │ │ RwLock  │ │ RwLock  │ │ RwLock  │           │
//! │  │ HashMap │ │ HashMap │ │ HashMap │ │ HashMap │           │
//! │  └─────────┘ └─────────┘ └─────────┘ └─────────┘           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys are distributed across shards by hash, so hosts that share one store
//! between threads only contend on keys that land in the same shard.

use crate::storage::config::StoreConfig;
use crate::storage::store::{StateStore, StoreError};
use bytes::Bytes;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use tracing::trace;

/// A single shard containing a portion of the key-value pairs.
#[derive(Debug, Default)]
struct Shard {
    data: RwLock<HashMap<String, Bytes>>,
}

/// In-memory [`StateStore`] backed by sharded `RwLock<HashMap>`s.
///
/// # Example
///
/// ```
/// use simple_asset::storage::{MemoryStore, StateStore};
/// use bytes::Bytes;
///
/// let store = MemoryStore::new();
/// store.put("color", Bytes::from("blue")).unwrap();
///
/// assert_eq!(store.get("color").unwrap(), Some(Bytes::from("blue")));
/// assert_eq!(store.get("size").unwrap(), None);
/// ```
pub struct MemoryStore {
    shards: Vec<Shard>,

    /// Statistics: number of distinct keys stored
    key_count: AtomicU64,

    /// Statistics: total reads
    read_count: AtomicU64,

    /// Statistics: total writes
    write_count: AtomicU64,

    /// Statistics: reads that found no value
    miss_count: AtomicU64,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("shards", &self.shards.len())
            .field("key_count", &self.key_count.load(Ordering::Relaxed))
            .field("read_count", &self.read_count.load(Ordering::Relaxed))
            .field("write_count", &self.write_count.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Creates a store with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store with the given configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        let shards = (0..config.shards.max(1)).map(|_| Shard::default()).collect();

        Self {
            shards,
            key_count: AtomicU64::new(0),
            read_count: AtomicU64::new(0),
            write_count: AtomicU64::new(0),
            miss_count: AtomicU64::new(0),
        }
    }

    #[inline]
    fn shard(&self, key: &str) -> &Shard {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        &self.shards[(hasher.finish() as usize) % self.shards.len()]
    }

    /// Returns the number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    /// Returns the number of keys in the store.
    pub fn len(&self) -> u64 {
        self.key_count.load(Ordering::Relaxed)
    }

    /// Returns true if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns store statistics.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            keys: self.key_count.load(Ordering::Relaxed),
            reads: self.read_count.load(Ordering::Relaxed),
            writes: self.write_count.load(Ordering::Relaxed),
            misses: self.miss_count.load(Ordering::Relaxed),
        }
    }
}

impl StateStore for MemoryStore {
    fn put(&self, key: &str, value: Bytes) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let mut data = self
            .shard(key)
            .data
            .write()
            .map_err(|_| StoreError::Poisoned)?;
        self.write_count.fetch_add(1, Ordering::Relaxed);

        trace!(key, len = value.len(), "put");
        if data.insert(key.to_string(), value).is_none() {
            self.key_count.fetch_add(1, Ordering::Relaxed);
        }
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        if key.is_empty() {
            return Err(StoreError::EmptyKey);
        }
        let data = self
            .shard(key)
            .data
            .read()
            .map_err(|_| StoreError::Poisoned)?;
        self.read_count.fetch_add(1, Ordering::Relaxed);

        let value = data.get(key).cloned();
        trace!(key, found = value.is_some(), "get");
        if value.is_none() {
            self.miss_count.fetch_add(1, Ordering::Relaxed);
        }
        Ok(value)
    }
}

/// Store statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    /// Number of keys currently stored
    pub keys: u64,
    /// Total reads
    pub reads: u64,
    /// Total writes
    pub writes: u64,
    /// Reads that found no value
    pub misses: u64,
}

impl StoreStats {
    /// Total store operations performed.
    pub fn operations(&self) -> u64 {
        self.reads + self.writes
    }
}
