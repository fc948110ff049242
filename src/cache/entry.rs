//! Memo Entry Module
//!
//! Defines the memoized outcome of a single producer run.

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

// == Memo Entry ==
/// One memoized outcome, success or failure, for a single key.
///
/// The outcome is stored type-erased so one cache can hold producers of
/// different result types in different stores. Entries are never mutated
/// after creation; a newer outcome replaces the whole entry.
#[derive(Clone)]
pub struct MemoEntry {
    /// The `Result<T, E>` produced, behind `dyn Any`
    outcome: Arc<dyn Any + Send + Sync>,
    /// Whether the outcome is `Ok`
    success: bool,
    /// When the producer finished
    created_at: Instant,
}

impl MemoEntry {
    // == Constructor ==
    /// Creates an entry from a producer outcome, stamped with the current instant.
    pub fn new<T, E>(outcome: Result<T, E>) -> Self
    where
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        Self::with_created_at(outcome, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn with_created_at<T, E>(outcome: Result<T, E>, created_at: Instant) -> Self
    where
        T: Send + Sync + 'static,
        E: Send + Sync + 'static,
    {
        Self {
            success: outcome.is_ok(),
            outcome: Arc::new(outcome),
            created_at,
        }
    }

    /// Returns true if the producer succeeded.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Instant the producer finished.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Age of the entry at `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks if the entry has reached the TTL.
    ///
    /// Boundary condition: an entry whose age equals the TTL is expired.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) >= ttl
    }

    // == Outcome ==
    /// Replays the stored outcome as `Result<T, E>`.
    ///
    /// Returns None when the entry was stored with a different result type.
    pub fn outcome<T, E>(&self) -> Option<Result<T, E>>
    where
        T: Clone + 'static,
        E: Clone + 'static,
    {
        self.outcome.downcast_ref::<Result<T, E>>().cloned()
    }
}

impl std::fmt::Debug for MemoEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoEntry")
            .field("success", &self.success)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}
