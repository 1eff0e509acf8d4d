use std::sync::Arc;
use storylight_domain::{
    validate_audit_url, AuditOptions, AuditOutcome, CacheKey, DomainError, TtlPolicy,
};
use tracing::{info, instrument};

use crate::ports::{AuditCache, Clock};
use crate::services::AuditRunner;

/// Single audit behind the result cache.
///
/// `skip_cache` only bypasses the read; a fresh result is always written back.
/// Concurrent identical requests are not coalesced and each run the tool.
pub struct RunAuditUseCase {
    runner: Arc<AuditRunner>,
    cache: Arc<dyn AuditCache>,
    clock: Arc<dyn Clock>,
    ttl: TtlPolicy,
    base_options: AuditOptions,
}

impl RunAuditUseCase {
    pub fn new(runner: Arc<AuditRunner>, cache: Arc<dyn AuditCache>, clock: Arc<dyn Clock>) -> Self {
        Self {
            runner,
            cache,
            clock,
            ttl: TtlPolicy::default(),
            base_options: AuditOptions::desktop(),
        }
    }

    #[instrument(skip(self, options))]
    pub async fn execute(
        &self,
        url: &str,
        options: AuditOptions,
        skip_cache: bool,
    ) -> Result<AuditOutcome, DomainError> {
        validate_audit_url(Some(url))?;
        let key = CacheKey::for_audit(url, &options);

        if skip_cache {
            info!("Skipping cache - running fresh audit");
        } else if let Some((entry, age_ms)) = self
            .ttl
            .classify(self.cache.get(&key), self.clock.now())
            .fresh()
        {
            info!(age_secs = age_ms / 1000, "Serving cached audit");
            return Ok(AuditOutcome::from_cache(entry.result, age_ms));
        }

        let merged = self.base_options.merged(&options);
        let result = self.runner.audit(url, &merged).await?;

        self.cache.set(key, result.clone(), self.clock.now());

        Ok(AuditOutcome::fresh(result))
    }
}
