//! TTL Sweep Task
//!
//! Reads only evict the entry they touch; this task reclaims entries that
//! are never looked up again.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a task that calls [`CacheStore::cleanup_expired`] every
/// `every_secs` seconds (minimum one).
///
/// The first sweep happens one full period after spawning. Abort the
/// returned handle to stop it.
///
/// ```ignore
/// let handle = spawn_cleanup_task(state.cache.clone(), config.cleanup_interval);
/// // on shutdown
/// handle.abort();
/// ```
pub fn spawn_cleanup_task<V>(cache: Arc<CacheStore<V>>, every_secs: u64) -> JoinHandle<()>
where
    V: Clone + Send + 'static,
{
    let period = Duration::from_secs(every_secs.max(1));

    tokio::spawn(async move {
        info!(period_secs = period.as_secs(), "TTL sweep task started");

        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval() yields immediately on the first tick
        ticker.tick().await;

        loop {
            ticker.tick().await;

            match cache.cleanup_expired() {
                0 => debug!("TTL sweep found nothing to remove"),
                removed => info!(
                    removed,
                    remaining = cache.len(),
                    "TTL sweep removed expired entries"
                ),
            }
        }
    })
}
