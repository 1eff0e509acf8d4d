use async_trait::async_trait;
use storylight_domain::DomainError;

/// Starts a headless browser that an audit engine can attach to.
#[async_trait]
pub trait BrowserLauncher: Send + Sync {
    /// # Errors
    ///
    /// * `DomainError::ResourceLaunchFailed` - the browser could not be started
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, DomainError>;
}

/// A running browser process owned by exactly one audit scope.
#[async_trait]
pub trait BrowserSession: Send + Sync {
    /// Remote debugging port the audit engine connects to.
    fn debugging_port(&self) -> u16;

    /// Terminates the browser. Consumes the session so it can only run once.
    async fn release(self: Box<Self>);
}
