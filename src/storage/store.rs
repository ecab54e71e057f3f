//! State Store Capability
//!
//! The dispatcher never owns its data. Every read and write goes through a
//! `StateStore` supplied by the host that runs the component, so the same
//! command logic works against a ledger, a database or the in-memory
//! [`MemoryStore`](crate::storage::MemoryStore) used in tests.

use bytes::Bytes;
use std::sync::Arc;
use thiserror::Error;

/// Errors reported by a state store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Keys must not be empty
    #[error("key must not be an empty string")]
    EmptyKey,

    /// A lock guarding store data was poisoned by a panicking writer
    #[error("store lock poisoned")]
    Poisoned,

    /// Failure reported by a host-provided backend
    #[error("{0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a backend error from any displayable message.
    pub fn backend(msg: impl Into<String>) -> Self {
        StoreError::Backend(msg.into())
    }
}

/// Key/value state provided by the host runtime.
///
/// Implementations decide durability, isolation and ordering. A write
/// replaces whatever value the key held before.
pub trait StateStore: Send + Sync {
    /// Writes `value` under `key`.
    fn put(&self, key: &str, value: Bytes) -> Result<(), StoreError>;

    /// Reads the value under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError>;
}

impl<T: StateStore + ?Sized> StateStore for Arc<T> {
    fn put(&self, key: &str, value: Bytes) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        (**self).get(key)
    }
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn put(&self, key: &str, value: Bytes) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<Bytes>, StoreError> {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_error_display() {
        assert_eq!(
            StoreError::EmptyKey.to_string(),
            "key must not be an empty string"
        );
        assert_eq!(StoreError::Poisoned.to_string(), "store lock poisoned");
        assert_eq!(StoreError::backend("disk full").to_string(), "disk full");
    }

    #[test]
    fn test_arc_delegates() {
        let store = Arc::new(MemoryStore::new());
        let shared: Arc<dyn StateStore> = store.clone();

        shared.put("key", Bytes::from("value")).unwrap();
        assert_eq!(store.get("key").unwrap(), Some(Bytes::from("value")));
    }

    #[test]
    fn test_reference_delegates() {
        let store = MemoryStore::new();
        let borrowed = &store;

        StateStore::put(&borrowed, "key", Bytes::from("value")).unwrap();
        assert_eq!(
            StateStore::get(&borrowed, "key").unwrap(),
            Some(Bytes::from("value"))
        );
    }
}
