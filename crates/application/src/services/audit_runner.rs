use std::sync::Arc;
use std::time::Duration;
use storylight_domain::{AuditOptions, AuditResult, DomainError, FormFactor};
use tracing::{error, info, instrument};

use crate::ports::{AuditEngine, BrowserLauncher, Clock};

/// Executes Lighthouse runs inside a browser scope.
///
/// Every public method acquires one browser, runs against it and releases it
/// before returning, whether the runs succeeded, failed or timed out. A
/// failed launch returns early since there is nothing to release.
pub struct AuditRunner {
    launcher: Arc<dyn BrowserLauncher>,
    engine: Arc<dyn AuditEngine>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
}

impl AuditRunner {
    pub fn new(
        launcher: Arc<dyn BrowserLauncher>,
        engine: Arc<dyn AuditEngine>,
        clock: Arc<dyn Clock>,
        timeout: Duration,
    ) -> Self {
        Self {
            launcher,
            engine,
            clock,
            timeout,
        }
    }

    /// Single run with fully merged options.
    #[instrument(skip(self, options))]
    pub async fn audit(&self, url: &str, options: &AuditOptions) -> Result<AuditResult, DomainError> {
        info!("Running Lighthouse audit");

        let session = self.launcher.launch().await?;
        let outcome = self.run_once(url, session.debugging_port(), options).await;
        session.release().await;

        match &outcome {
            Ok(result) => info!(
                performance = result.scores.performance,
                accessibility = result.scores.accessibility,
                "Audit complete"
            ),
            Err(e) => error!(error = %e, "Lighthouse audit failed"),
        }
        outcome
    }

    /// Runs `profiles` in order against one shared browser. Stops at the
    /// first failure; later profiles are never attempted.
    #[instrument(skip(self, profiles), fields(profiles = profiles.len()))]
    pub async fn audit_profiles(
        &self,
        url: &str,
        profiles: &[(FormFactor, AuditOptions)],
    ) -> Result<Vec<AuditResult>, DomainError> {
        let session = self.launcher.launch().await?;
        let outcome = self
            .run_sequence(url, session.debugging_port(), profiles)
            .await;
        session.release().await;
        outcome
    }

    async fn run_sequence(
        &self,
        url: &str,
        port: u16,
        profiles: &[(FormFactor, AuditOptions)],
    ) -> Result<Vec<AuditResult>, DomainError> {
        let mut results = Vec::with_capacity(profiles.len());

        for (step, (form_factor, options)) in profiles.iter().enumerate() {
            info!(
                step = step + 1,
                total = profiles.len(),
                form_factor = %form_factor,
                "Running profile audit"
            );

            let result = self.run_once(url, port, options).await.map_err(|e| {
                error!(form_factor = %form_factor, error = %e, "Profile audit failed");
                e
            })?;

            info!(
                form_factor = %form_factor,
                performance = result.scores.performance,
                "Profile audit complete"
            );
            results.push(result.with_form_factor(*form_factor));
        }

        Ok(results)
    }

    async fn run_once(
        &self,
        url: &str,
        port: u16,
        options: &AuditOptions,
    ) -> Result<AuditResult, DomainError> {
        let report = tokio::time::timeout(self.timeout, self.engine.run(url, port, options))
            .await
            .map_err(|_| DomainError::AuditTimeout(self.timeout.as_secs()))??;

        report.ensure_complete()?;
        Ok(report.normalize(url, self.clock.now()))
    }
}
