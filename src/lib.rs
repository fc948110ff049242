//! Session Memo - A per-session memoization cache
//!
//! Memoizes the outcome of async producers by `(store, key)` with TTL expiry,
//! lazy throttled sweeps and opt-in caching of failures.

pub mod cache;
pub mod config;
pub mod error;
pub mod session;
pub mod tasks;

pub use cache::{CacheStats, MemoCache};
pub use config::Config;
pub use error::CacheError;
pub use session::{SessionDetails, SessionDetailsSource, SessionError, SessionResolver};
pub use tasks::spawn_sweep_task;
