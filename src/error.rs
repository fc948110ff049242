//! Error types for the memo cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised by the cache itself.
///
/// Producer failures are never wrapped in this type; they reach the caller
/// unchanged. `CacheError` is converted into the caller's error type through
/// `From<CacheError>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Store or key argument rejected before any state was touched
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A live entry exists but holds an outcome of a different type
    #[error("Type mismatch for '{store}/{key}': entry holds a different outcome type")]
    TypeMismatch { store: String, key: String },
}

impl CacheError {
    /// Creates a type mismatch error for the given coordinates.
    pub fn type_mismatch(store: impl Into<String>, key: impl Into<String>) -> Self {
        CacheError::TypeMismatch {
            store: store.into(),
            key: key.into(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
