//! Memoization on top of [`CacheStore`].

use std::sync::Arc;

use tracing::debug;

use crate::cache::CacheStore;

/// Wraps `func` so its results are cached in `store` under `key_of(args)`.
///
/// The returned closure calls `func` at most once per distinct key within
/// one TTL window. With caching disabled it simply forwards to `func`.
/// `func` must be a pure function of its arguments.
pub fn memoize<A, V, F, K>(
    store: Arc<CacheStore<V>>,
    func: F,
    key_of: K,
    ttl_ms: Option<u64>,
) -> impl Fn(&A) -> V
where
    A: ?Sized,
    V: Clone,
    F: Fn(&A) -> V,
    K: Fn(&A) -> String,
{
    move |args: &A| {
        let key = key_of(args);
        if let Some(value) = store.get(&key) {
            debug!(key = %key, "Memoized value served from cache");
            return value;
        }

        let value = func(args);
        store.set(key, value.clone(), ttl_ms);
        value
    }
}
