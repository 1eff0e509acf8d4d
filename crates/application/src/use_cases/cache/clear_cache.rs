use std::sync::Arc;
use tracing::info;

use crate::ports::AuditCache;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearedCache {
    pub previous_size: usize,
    pub current_size: usize,
}

pub struct ClearAuditCacheUseCase {
    cache: Arc<dyn AuditCache>,
}

impl ClearAuditCacheUseCase {
    pub fn new(cache: Arc<dyn AuditCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> ClearedCache {
        let previous_size = self.cache.clear();
        let current_size = self.cache.size();

        info!(previous_size, current_size, "Audit cache cleared");

        ClearedCache {
            previous_size,
            current_size,
        }
    }
}
