use crate::DomainError;
use url::Url;

/// Validates an audit target the way the audit endpoints require it:
/// present, non-empty and parseable as an absolute URL.
pub fn validate_audit_url(url: Option<&str>) -> Result<Url, DomainError> {
    let raw = match url {
        Some(u) if !u.trim().is_empty() => u,
        _ => return Err(DomainError::UrlRequired),
    };

    Url::parse(raw).map_err(|e| DomainError::InvalidUrl(format!("{raw}: {e}")))
}
