//! Memo Cache Module
//!
//! Shared, async memoization handle over a `MemoStore`.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::{CacheStats, MemoEntry, MemoStore};
use crate::config::Config;
use crate::error::CacheError;
use crate::tasks::spawn_sweep_task;

// == Memo Cache ==
/// Cloneable handle to a memoization cache.
///
/// Every clone shares the same underlying store. Construct one per process
/// (or per test) and hand clones to callers.
#[derive(Clone, Debug)]
pub struct MemoCache {
    inner: Arc<RwLock<MemoStore>>,
}

impl MemoCache {
    /// Creates a cache whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoStore::new(ttl))),
        }
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ttl())
    }

    /// Starts the background sweeper if the configuration enables it.
    ///
    /// The returned handle must be aborted to stop the task.
    pub fn spawn_sweeper_from_config(&self, config: &Config) -> Option<JoinHandle<()>> {
        config
            .sweep_interval()
            .map(|interval| spawn_sweep_task(self.clone(), interval))
    }

    // == With Cache ==
    /// Returns the memoized outcome for `(store, key)`, running `producer` on a miss.
    ///
    /// Every call first gives the store a chance to sweep expired entries.
    /// A live success is returned as `Ok`, a live cached failure as `Err`
    /// with the original error. On a miss the producer runs with no lock
    /// held; its success is always stored, its failure only when
    /// `cache_exceptions` is true.
    ///
    /// Concurrent misses for the same key each run the producer and the last
    /// one to finish wins.
    ///
    /// # Errors
    /// - The producer's own error, unchanged
    /// - `CacheError::InvalidArgument` (converted into `E`) for an empty store or key
    /// - `CacheError::TypeMismatch` (converted into `E`) when the live entry
    ///   was stored with a different `Result<T, E>` type
    pub async fn with_cache<T, E, F, Fut>(
        &self,
        store: &str,
        key: &str,
        producer: F,
        cache_exceptions: bool,
    ) -> Result<T, E>
    where
        T: Clone + Send + Sync + 'static,
        E: Clone + Send + Sync + 'static + From<CacheError>,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        validate_coordinates(store, key)?;

        let cached = {
            let mut guard = self.inner.write().await;
            let now = Instant::now();
            guard.maybe_sweep(now);
            guard
                .lookup(store, key, now)
                .map(|entry| entry.outcome::<T, E>())
        };

        if let Some(hit) = cached {
            return hit.ok_or_else(|| CacheError::type_mismatch(store, key))?;
        }

        let outcome = producer().await;

        let mut guard = self.inner.write().await;
        if outcome.is_ok() || cache_exceptions {
            guard.insert(store, key, MemoEntry::new(outcome.clone()));
        } else {
            debug!(store, key, "producer failed, failure not cached");
            guard.record_uncached_failure();
        }
        outcome
    }

    // == Reset ==
    /// Clears every namespace and entry immediately.
    pub async fn reset(&self) {
        self.inner.write().await.reset();
    }

    /// Sweeps expired entries now, ignoring the throttle.
    ///
    /// Returns the number of evicted entries.
    pub async fn sweep_now(&self) -> usize {
        self.inner.write().await.sweep(Instant::now())
    }

    /// Returns true if an entry is held for `(store, key)`.
    ///
    /// Does not sweep and does not count as a lookup; an expired entry still
    /// awaiting a sweep is reported as present.
    pub async fn contains(&self, store: &str, key: &str) -> bool {
        self.inner.read().await.contains(store, key)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.read().await.stats()
    }

    pub async fn ttl(&self) -> Duration {
        self.inner.read().await.ttl()
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

// == Validation ==
fn validate_coordinates(store: &str, key: &str) -> Result<(), CacheError> {
    if store.is_empty() {
        return Err(CacheError::InvalidArgument(
            "store must not be empty".to_string(),
        ));
    }
    if key.is_empty() {
        return Err(CacheError::InvalidArgument(
            "key must not be empty".to_string(),
        ));
    }
    Ok(())
}
