//! Cache Statistics Module
//!
//! Point-in-time snapshot of the cache contents and its settings.

use serde::Serialize;

// == Cache Stats ==
/// Derived, read-only view of a cache store. Recomputed on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of entries physically held, expired-but-unread included
    pub size: usize,
    /// Every key currently held, in no particular order
    pub keys: Vec<String>,
    /// Whether caching is enabled right now
    pub is_enabled: bool,
    /// Default TTL in milliseconds
    pub default_ttl: u64,
}

impl CacheStats {
    /// Returns true if `key` is among the held keys.
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }
}
