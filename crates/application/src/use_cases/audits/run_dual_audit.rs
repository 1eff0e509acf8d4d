use std::sync::Arc;
use storylight_domain::{
    validate_audit_url, AuditOptions, AuditOutcome, AuditResult, CacheKey, DomainError,
    DualAuditOutcome, FormFactor, TtlPolicy,
};
use tracing::{info, instrument};

use crate::ports::{AuditCache, Clock};
use crate::services::AuditRunner;

/// Desktop then mobile against one browser.
///
/// The pair is cached all-or-nothing: it is served from cache only when both
/// halves are fresh, otherwise both are re-run, and both are stored only once
/// both succeed.
pub struct RunDualAuditUseCase {
    runner: Arc<AuditRunner>,
    cache: Arc<dyn AuditCache>,
    clock: Arc<dyn Clock>,
    ttl: TtlPolicy,
}

impl RunDualAuditUseCase {
    pub fn new(runner: Arc<AuditRunner>, cache: Arc<dyn AuditCache>, clock: Arc<dyn Clock>) -> Self {
        Self {
            runner,
            cache,
            clock,
            ttl: TtlPolicy::default(),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, url: &str, skip_cache: bool) -> Result<DualAuditOutcome, DomainError> {
        validate_audit_url(Some(url))?;

        let desktop_key = CacheKey::for_profile(url, FormFactor::Desktop);
        let mobile_key = CacheKey::for_profile(url, FormFactor::Mobile);

        if skip_cache {
            info!("Skipping cache - running fresh dual audit");
        } else if let Some(cached) = self.cached_pair(&desktop_key, &mobile_key) {
            return Ok(cached);
        }

        let results = self
            .runner
            .audit_profiles(
                url,
                &[
                    (FormFactor::Desktop, AuditOptions::desktop()),
                    (FormFactor::Mobile, AuditOptions::mobile()),
                ],
            )
            .await?;

        let [desktop, mobile]: [AuditResult; 2] = results.try_into().map_err(|_| {
            DomainError::AuditFailed("Dual audit returned an incomplete result pair".to_string())
        })?;

        let stored_at = self.clock.now();
        self.cache.set(desktop_key, desktop.clone(), stored_at);
        self.cache.set(mobile_key, mobile.clone(), stored_at);

        info!("Dual audit complete");

        Ok(DualAuditOutcome {
            desktop: AuditOutcome::fresh(desktop),
            mobile: AuditOutcome::fresh(mobile),
        })
    }

    fn cached_pair(&self, desktop_key: &CacheKey, mobile_key: &CacheKey) -> Option<DualAuditOutcome> {
        let now = self.clock.now();
        let (desktop, desktop_age) = self.ttl.classify(self.cache.get(desktop_key), now).fresh()?;
        let (mobile, mobile_age) = self.ttl.classify(self.cache.get(mobile_key), now).fresh()?;

        info!(
            age_secs = desktop_age.max(mobile_age) / 1000,
            "Serving cached dual audit"
        );

        Some(DualAuditOutcome {
            desktop: AuditOutcome::from_cache(desktop.result, desktop_age),
            mobile: AuditOutcome::from_cache(mobile.result, mobile_age),
        })
    }
}
