//! Session Module
//!
//! Memoized lookup of remote browser session metadata, one cache namespace
//! keyed by browser session GUID.

mod details;
mod resolver;

pub use details::{SessionDetails, SessionError};
pub use resolver::{SessionDetailsSource, SessionResolver};

/// Cache namespace holding session details.
pub const SESSION_STORE: &str = "sessionId";
