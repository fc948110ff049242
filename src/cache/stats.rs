//! Cache Statistics Module
//!
//! Tracks memoization metrics including hits, misses, and evictions.

use serde::Serialize;

// == Cache Stats ==
/// Tracks memo cache metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Lookups answered from a live entry
    pub hits: u64,
    /// Lookups that found nothing live and ran the producer
    pub misses: u64,
    /// Outcomes written to the cache
    pub stored: u64,
    /// Producer failures returned without being cached
    pub uncached_failures: u64,
    /// Entries removed by sweeps
    pub evictions: u64,
    /// Sweeps that actually ran
    pub sweeps: u64,
    /// Current number of entries across all namespaces
    pub total_entries: usize,
    /// Current number of namespaces
    pub namespaces: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_store(&mut self) {
        self.stored += 1;
    }

    pub fn record_uncached_failure(&mut self) {
        self.uncached_failures += 1;
    }

    // == Record Sweep ==
    /// Counts one sweep and the entries it evicted.
    pub fn record_sweep(&mut self, evicted: usize) {
        self.sweeps += 1;
        self.evictions += evicted as u64;
    }

    // == Update Sizes ==
    /// Updates the entry and namespace counts.
    pub fn set_sizes(&mut self, total_entries: usize, namespaces: usize) {
        self.total_entries = total_entries;
        self.namespaces = namespaces;
    }
}
