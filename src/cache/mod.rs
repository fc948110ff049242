//! Cache Module
//!
//! Provides namespaced memoization of async producers with TTL expiry and
//! opt-in failure caching.

mod entry;
mod memo;
mod stats;
mod store;


// Re-export public types
pub use entry::MemoEntry;
pub use memo::MemoCache;
pub use stats::CacheStats;
pub use store::MemoStore;
