//! Session details resolver backed by a memo cache.

use std::future::Future;

use tracing::debug;

use crate::cache::MemoCache;
use crate::session::{SessionDetails, SessionError, SESSION_STORE};

/// Fetches session details from the remote browser.
///
/// Implemented by the browser driver layer. Each call is a cross-process
/// round trip, which is what `SessionResolver` avoids repeating.
pub trait SessionDetailsSource: Send + Sync {
    fn fetch(
        &self,
        session_guid: &str,
    ) -> impl Future<Output = Result<SessionDetails, SessionError>> + Send;
}

/// Resolves session details at most once per session per TTL window.
///
/// Fetch failures are not cached; the next call asks the browser again.
pub struct SessionResolver<S> {
    cache: MemoCache,
    source: S,
}

impl<S: SessionDetailsSource> SessionResolver<S> {
    pub fn new(cache: MemoCache, source: S) -> Self {
        Self { cache, source }
    }

    /// Returns the details for `session_guid`, fetching them on a miss.
    pub async fn resolve(&self, session_guid: &str) -> Result<SessionDetails, SessionError> {
        self.cache
            .with_cache(
                SESSION_STORE,
                session_guid,
                || {
                    debug!(session_guid, "fetching session details");
                    self.source.fetch(session_guid)
                },
                false,
            )
            .await
    }

    /// Returns the public session id for `session_guid`.
    pub async fn session_id(&self, session_guid: &str) -> Result<String, SessionError> {
        Ok(self.resolve(session_guid).await?.hashed_id)
    }

    pub fn cache(&self) -> &MemoCache {
        &self.cache
    }
}
