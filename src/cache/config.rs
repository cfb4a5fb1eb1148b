//! Cache configuration.

use std::time::Duration;

/// Configuration for a cache instance.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries; `None` never evicts for size.
    pub max_capacity: Option<u64>,

    /// Time-to-live for cache entries.
    pub ttl: Option<Duration>,

    /// Time-to-idle for cache entries.
    /// Entries are evicted if not touched within this duration.
    pub tti: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: Some(10_000),
            ttl: None,
            tti: None,
        }
    }
}

impl CacheConfig {
    /// Config for conversation sessions.
    ///
    /// Unbounded, so a live session is never evicted to make room; expires
    /// only after `idle` without activity, when set.
    pub fn session(idle: Option<Duration>) -> Self {
        Self {
            max_capacity: None,
            ttl: None,
            tti: idle,
        }
    }
}
