//! Configuration for the in-memory store.

use tracing::warn;

/// Environment variable read by [`StoreConfig::from_env`].
pub const SHARDS_ENV: &str = "SIMPLE_ASSET_SHARDS";

/// Default number of shards.
pub const DEFAULT_SHARDS: usize = 64;

/// Configuration for [`MemoryStore`](crate::storage::MemoryStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Number of independently locked shards (default: 64)
    pub shards: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            shards: DEFAULT_SHARDS,
        }
    }
}

impl StoreConfig {
    /// Returns a copy of this config with the given shard count.
    ///
    /// A shard count of zero is clamped to one.
    pub fn with_shards(mut self, shards: usize) -> Self {
        self.shards = shards.max(1);
        self
    }

    /// Builds a config from the process environment.
    ///
    /// Missing, unparsable or zero values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(SHARDS_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(shards) if shards > 0 => config.shards = shards,
                _ => warn!(value = %raw, "ignoring invalid {}", SHARDS_ENV),
            }
        }

        config
    }
}
