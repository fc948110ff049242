//! Configuration Module
//!
//! Loads memo cache settings from environment variables.

use std::env;
use std::time::Duration;

/// Default entry TTL: five minutes.
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Memo cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum entry age in milliseconds
    pub ttl_ms: u64,
    /// Background sweep interval in milliseconds, 0 = no background task
    pub sweep_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CACHE_TTL_MS` - Entry TTL in milliseconds (default: 300000)
    /// - `MEMO_CACHE_SWEEP_INTERVAL_MS` - Background sweep interval (default: 0, disabled)
    pub fn from_env() -> Self {
        Self {
            ttl_ms: env::var("MEMO_CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TTL_MS),
            sweep_interval_ms: env::var("MEMO_CACHE_SWEEP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        }
    }

    /// Entry TTL as a Duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Background sweep interval, or None when the task is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_ms > 0).then(|| Duration::from_millis(self.sweep_interval_ms))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_TTL_MS,
            sweep_interval_ms: 0,
        }
    }
}
