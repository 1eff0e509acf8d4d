use std::sync::Arc;
use storylight_domain::CacheEntry;

use crate::ports::AuditCache;

#[derive(Debug, Clone)]
pub struct CacheSnapshot {
    pub size: usize,
    pub capacity: usize,
    pub entries: Vec<CacheEntry>,
}

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn AuditCache>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn AuditCache>) -> Self {
        Self { cache }
    }

    pub fn size(&self) -> usize {
        self.cache.size()
    }

    /// Every stored entry in insertion order, including expired ones.
    pub fn execute(&self) -> CacheSnapshot {
        let entries = self.cache.entries();
        CacheSnapshot {
            size: entries.len(),
            capacity: self.cache.capacity(),
            entries,
        }
    }
}
