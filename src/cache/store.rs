//! Memo Store Module
//!
//! Two-level namespace/key storage with throttled expiry sweeps.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, trace};

use crate::cache::{CacheStats, MemoEntry};

// == Memo Store ==
/// Namespaced entry storage with a sweep clock.
///
/// Not synchronized on its own; `MemoCache` guards it with a lock.
#[derive(Debug)]
pub struct MemoStore {
    /// namespace -> key -> entry
    namespaces: HashMap<String, HashMap<String, MemoEntry>>,
    /// Maximum entry age
    ttl: Duration,
    /// When the last sweep ran
    last_sweep: Instant,
    /// Usage statistics
    stats: CacheStats,
}

impl MemoStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            namespaces: HashMap::new(),
            ttl,
            last_sweep: Instant::now(),
            stats: CacheStats::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Lookup ==
    /// Returns the live entry for `(store, key)`, recording a hit or miss.
    ///
    /// Entries at or past the TTL are never returned, even if no sweep has
    /// removed them yet.
    pub fn lookup(&mut self, store: &str, key: &str, now: Instant) -> Option<&MemoEntry> {
        let ttl = self.ttl;
        let live = self
            .namespaces
            .get(store)
            .and_then(|entries| entries.get(key))
            .filter(|entry| !entry.is_expired(ttl, now));

        match live {
            Some(entry) => {
                trace!(store, key, success = entry.is_success(), "memo hit");
                self.stats.record_hit();
            }
            None => {
                trace!(store, key, "memo miss");
                self.stats.record_miss();
            }
        }
        live
    }

    // == Insert ==
    /// Stores an entry, replacing any previous one for the same key.
    ///
    /// The namespace is created on first use.
    pub fn insert(&mut self, store: &str, key: &str, entry: MemoEntry) {
        self.namespaces
            .entry(store.to_string())
            .or_default()
            .insert(key.to_string(), entry);
        self.stats.record_store();
        self.refresh_sizes();
    }

    /// Counts a producer failure that was returned without being stored.
    pub fn record_uncached_failure(&mut self) {
        self.stats.record_uncached_failure();
    }

    // == Maybe Sweep ==
    /// Runs a sweep if at least one TTL has passed since the previous one.
    ///
    /// Returns the number of evicted entries, or None when the sweep was skipped.
    pub fn maybe_sweep(&mut self, now: Instant) -> Option<usize> {
        if now.saturating_duration_since(self.last_sweep) < self.ttl {
            return None;
        }
        Some(self.sweep(now))
    }

    // == Sweep ==
    /// Removes every expired entry in every namespace.
    ///
    /// Namespaces are kept even when they end up empty. The sweep clock is
    /// reset to `now` regardless of how many entries were evicted.
    pub fn sweep(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let mut evicted = 0;

        for entries in self.namespaces.values_mut() {
            let before = entries.len();
            entries.retain(|_, entry| !entry.is_expired(ttl, now));
            evicted += before - entries.len();
        }

        self.last_sweep = now;
        self.stats.record_sweep(evicted);
        self.refresh_sizes();

        if evicted > 0 {
            info!("Memo sweep: evicted {} expired entries", evicted);
        } else {
            debug!("Memo sweep: no expired entries found");
        }
        evicted
    }

    // == Reset ==
    /// Drops all namespaces, entries and statistics.
    pub fn reset(&mut self) {
        self.namespaces.clear();
        self.last_sweep = Instant::now();
        self.stats = CacheStats::new();
        debug!("Memo store reset");
    }

    /// Returns true if an entry is held for `(store, key)`, expired or not.
    pub fn contains(&self, store: &str, key: &str) -> bool {
        self.namespaces
            .get(store)
            .is_some_and(|entries| entries.contains_key(key))
    }

    /// Returns the number of entries across all namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    // == Stats ==
    /// Returns current statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.clone()
    }

    fn refresh_sizes(&mut self) {
        let total = self.len();
        let namespaces = self.namespaces.len();
        self.stats.set_sizes(total, namespaces);
    }
}
