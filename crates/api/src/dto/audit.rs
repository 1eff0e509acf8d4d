use serde::Deserialize;
use serde_json::Value;
use storylight_domain::{AuditOptions, DomainError};

/// Request DTO for a single audit.
///
/// Fields are kept as raw JSON so wrongly typed values surface as
/// validation errors instead of body rejections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditRequest {
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub options: Option<Value>,
    #[serde(default)]
    pub skip_cache: Option<Value>,
}

impl AuditRequest {
    pub fn url(&self) -> Result<String, DomainError> {
        parse_url(self.url.as_ref())
    }

    pub fn skip_cache(&self) -> Result<bool, DomainError> {
        parse_skip_cache(self.skip_cache.as_ref())
    }

    pub fn audit_options(&self) -> Result<AuditOptions, DomainError> {
        parse_options(self.options.clone())
    }
}

/// Request DTO for a desktop + mobile audit pair
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DualAuditRequest {
    #[serde(default)]
    pub url: Option<Value>,
    #[serde(default)]
    pub skip_cache: Option<Value>,
}

impl DualAuditRequest {
    pub fn url(&self) -> Result<String, DomainError> {
        parse_url(self.url.as_ref())
    }

    pub fn skip_cache(&self) -> Result<bool, DomainError> {
        parse_skip_cache(self.skip_cache.as_ref())
    }
}

/// Missing or `null` becomes an empty string, which validation reports as
/// required; any other non-string is an invalid URL.
fn parse_url(value: Option<&Value>) -> Result<String, DomainError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(url)) => Ok(url.clone()),
        Some(other) => Err(DomainError::InvalidUrl(other.to_string())),
    }
}

fn parse_skip_cache(value: Option<&Value>) -> Result<bool, DomainError> {
    match value {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(skip)) => Ok(*skip),
        Some(other) => Err(DomainError::InvalidInput(format!(
            "skipCache must be a boolean, got {other}"
        ))),
    }
}

/// `?options=<json>` on the cache lookup route
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheLookupQuery {
    pub options: Option<String>,
}

impl CacheLookupQuery {
    pub fn audit_options(&self) -> Result<AuditOptions, DomainError> {
        match self.options.as_deref() {
            None | Some("") => Ok(AuditOptions::new()),
            Some(raw) => {
                let value = serde_json::from_str(raw)
                    .map_err(|e| DomainError::InvalidInput(format!("options: {e}")))?;
                parse_options(Some(value))
            }
        }
    }
}

fn parse_options(value: Option<Value>) -> Result<AuditOptions, DomainError> {
    AuditOptions::from_value(value.unwrap_or(Value::Null))
        .ok_or_else(|| DomainError::InvalidInput("options must be a JSON object".to_string()))
}
