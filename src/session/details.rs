//! Session details payload and errors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::error::CacheError;

/// Metadata a remote browser reports for one automation session.
///
/// Only `hashed_id` is interpreted; every other field is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetails {
    /// Public session identifier
    pub hashed_id: String,
    /// Remaining fields of the payload
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionDetails {
    /// Creates details carrying only a session id.
    pub fn new(hashed_id: impl Into<String>) -> Self {
        Self {
            hashed_id: hashed_id.into(),
            extra: Map::new(),
        }
    }

    /// Parses a raw JSON payload.
    pub fn from_json(payload: &str) -> Result<Self, SessionError> {
        serde_json::from_str(payload).map_err(|e| SessionError::InvalidPayload(e.to_string()))
    }
}

/// Errors raised while resolving session details.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The remote browser could not be queried
    #[error("Could not fetch session details for '{guid}': {message}")]
    Fetch { guid: String, message: String },

    /// The remote browser answered with something that isn't session details
    #[error("Invalid session details payload: {0}")]
    InvalidPayload(String),
}
