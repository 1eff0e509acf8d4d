use async_trait::async_trait;
use storylight_domain::{AuditOptions, DomainError, LighthouseReport};

/// Runs Lighthouse against a browser that is already listening on `port`.
#[async_trait]
pub trait AuditEngine: Send + Sync {
    /// # Errors
    ///
    /// * `DomainError::AuditFailed` - the tool failed or produced no report
    async fn run(
        &self,
        url: &str,
        port: u16,
        options: &AuditOptions,
    ) -> Result<LighthouseReport, DomainError>;
}
