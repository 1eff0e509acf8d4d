use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("URL is required")]
    UrlRequired,

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    AuditFailed(String),

    #[error("Lighthouse audit timed out after {0}s")]
    AuditTimeout(u64),

    #[error("Failed to launch browser: {0}")]
    ResourceLaunchFailed(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DomainError {
    /// True for errors caused by the caller's request rather than the audit itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DomainError::UrlRequired | DomainError::InvalidUrl(_) | DomainError::InvalidInput(_)
        )
    }
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::IoError(e.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(e: serde_json::Error) -> Self {
        DomainError::SerializationError(e.to_string())
    }
}
