//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with lazy TTL expiration.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats};
use crate::config::SettingsHandle;

// == Cache Store ==
/// Typed key-value storage with per-entry TTL.
///
/// Every operation reads the live settings first: with caching disabled,
/// reads miss and writes are dropped. A single mutex guards the map, so an
/// expiry check and its eviction never interleave with a concurrent write.
#[derive(Debug)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    /// Live configuration
    settings: SettingsHandle,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates an empty store reading the given settings.
    pub fn new(settings: SettingsHandle) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            settings,
        }
    }

    /// Settings this store reads on every operation.
    pub fn settings(&self) -> &SettingsHandle {
        &self.settings
    }

    // == Set ==
    /// Stores a value, overwriting any existing entry for `key`.
    ///
    /// `ttl_ms` defaults to the configured cache timeout. No-op when caching
    /// is disabled.
    pub fn set(&self, key: impl Into<String>, value: V, ttl_ms: Option<u64>) {
        let settings = self.settings.snapshot();
        if !settings.enable_caching {
            return;
        }

        let ttl = ttl_ms.unwrap_or(settings.cache_timeout_ms);
        let entry = CacheEntry::new(value, ttl);
        self.entries.lock().insert(key.into(), entry);
    }

    // == Get ==
    /// Retrieves a live value.
    ///
    /// An expired entry is removed by this call and reported as a miss.
    pub fn get(&self, key: &str) -> Option<V> {
        if !self.settings.is_caching_enabled() {
            return None;
        }

        let mut entries = self.entries.lock();
        let expired = entries.get(key)?.is_expired();
        if expired {
            entries.remove(key);
            debug!(key, "Evicted expired cache entry on read");
            return None;
        }

        entries.get(key).map(|entry| entry.value.clone())
    }

    // == Has ==
    /// Reports whether a live value exists, with the same eviction as `get`.
    pub fn has(&self, key: &str) -> bool {
        if !self.settings.is_caching_enabled() {
            return false;
        }

        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                debug!(key, "Evicted expired cache entry on read");
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    // == Delete ==
    /// Removes an entry. Absent keys are ignored.
    pub fn delete(&self, key: &str) {
        self.entries.lock().remove(key);
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    // == Keys ==
    /// Returns every held key, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    // == Stats ==
    /// Returns a snapshot of the store and its settings.
    pub fn stats(&self) -> CacheStats {
        let settings = self.settings.snapshot();
        let entries = self.entries.lock();

        CacheStats {
            size: entries.len(),
            keys: entries.keys().cloned().collect(),
            is_enabled: settings.enable_caching,
            default_ttl: settings.cache_timeout_ms,
        }
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&self) -> usize {
        let now = current_timestamp_ms();
        let mut entries = self.entries.lock();

        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired_at(now));
        before - entries.len()
    }

    // == Length ==
    /// Returns the number of entries held, expired-but-unread included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
