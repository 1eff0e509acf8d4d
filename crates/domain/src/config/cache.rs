use crate::audit_cache::DEFAULT_CACHE_CAPACITY;
use serde::{Deserialize, Serialize};

/// In-memory audit cache configuration.
///
/// The TTL is fixed at five minutes and deliberately not configurable.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum number of cached audits before FIFO eviction (default: 50)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

fn default_capacity() -> usize {
    DEFAULT_CACHE_CAPACITY
}
