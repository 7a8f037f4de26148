//! Cache Module
//!
//! Provides in-memory caching with lazy TTL expiration and memoization.

mod entry;
mod key;
mod memo;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use key::{create_cache_key, KEY_DELIMITER};
pub use memo::memoize;
pub use stats::CacheStats;
pub use store::CacheStore;
