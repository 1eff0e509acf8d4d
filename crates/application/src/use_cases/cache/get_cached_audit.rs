use std::sync::Arc;
use storylight_domain::{AuditOptions, CacheKey, CacheLookup, TtlPolicy};
use tracing::{debug, instrument};

use crate::ports::{AuditCache, Clock};

/// Read-only lookup that never triggers a run and reports expiry separately.
pub struct GetCachedAuditUseCase {
    cache: Arc<dyn AuditCache>,
    clock: Arc<dyn Clock>,
    ttl: TtlPolicy,
}

impl GetCachedAuditUseCase {
    pub fn new(cache: Arc<dyn AuditCache>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache,
            clock,
            ttl: TtlPolicy::default(),
        }
    }

    #[instrument(skip(self, options))]
    pub fn execute(&self, url: &str, options: &AuditOptions) -> CacheLookup {
        let key = CacheKey::for_audit(url, options);
        let lookup = self.ttl.classify(self.cache.get(&key), self.clock.now());

        match &lookup {
            CacheLookup::Fresh { age_ms, .. } => {
                debug!(age_secs = age_ms / 1000, "Returning cached result")
            }
            CacheLookup::Expired { age_ms } => debug!(age_secs = age_ms / 1000, "Cache expired"),
            CacheLookup::NotFound => debug!("No cache found"),
        }

        lookup
    }
}
