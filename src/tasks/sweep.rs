//! Background Sweep Task
//!
//! Periodically evicts expired entries from a memo cache.
//!
//! The cache already sweeps lazily on every `with_cache` call; this task only
//! matters for caches that go quiet while holding entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::MemoCache;

/// Spawns a background task that sweeps `cache` every `interval`.
///
/// The task runs until aborted through the returned handle.
///
/// # Example
/// ```ignore
/// let cache = MemoCache::new(Duration::from_secs(300));
/// let sweeper = spawn_sweep_task(cache.clone(), Duration::from_secs(60));
/// // Later, during shutdown:
/// sweeper.abort();
/// ```
pub fn spawn_sweep_task(cache: MemoCache, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting memo sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let evicted = cache.sweep_now().await;
            if evicted == 0 {
                debug!("Background sweep: nothing to evict");
            }
        }
    })
}
