use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use storylight_domain::{CategoryScores, DomainError};

/// JSON error body shared by every endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Zeroed scores on single-audit failures so clients can still render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<CategoryScores>,
}

#[derive(Debug, Clone)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorResponse,
}

impl ApiError {
    fn new(status: StatusCode, error: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse {
                error: error.to_string(),
                message: message.into(),
                scores: None,
            },
        }
    }

    /// 400 for request problems; `None` when the error is not the caller's fault.
    pub fn bad_request(err: &DomainError) -> Option<Self> {
        let status = StatusCode::BAD_REQUEST;
        match err {
            DomainError::UrlRequired => Some(Self::new(
                status,
                "URL is required",
                "Please provide a URL to audit",
            )),
            DomainError::InvalidUrl(_) => {
                Some(Self::new(status, "Invalid URL", "Please provide a valid URL"))
            }
            DomainError::InvalidInput(msg) => Some(Self::new(status, "Invalid input", msg.clone())),
            _ => None,
        }
    }

    pub fn audit_failed(err: &DomainError) -> Self {
        Self::bad_request(err).unwrap_or_else(|| {
            let mut api = Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Audit failed", err.to_string());
            api.body.scores = Some(CategoryScores::default());
            api
        })
    }

    pub fn dual_audit_failed(err: &DomainError) -> Self {
        Self::bad_request(err).unwrap_or_else(|| {
            Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Dual audit failed", err.to_string())
        })
    }

    pub fn cache_expired() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "Cache expired",
            "Cached result is older than 5 minutes",
        )
    }

    pub fn not_cached() -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found", "No cached result for this URL")
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "Invalid input", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_map_to_400() {
        let api = ApiError::audit_failed(&DomainError::UrlRequired);
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.body.error, "URL is required");
        assert!(api.body.scores.is_none());
    }

    #[test]
    fn test_timeout_maps_to_500_with_zero_scores() {
        let api = ApiError::audit_failed(&DomainError::AuditTimeout(60));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.message, "Lighthouse audit timed out after 60s");
        assert_eq!(api.body.scores, Some(CategoryScores::default()));
    }

    #[test]
    fn test_dual_failure_has_no_scores() {
        let api = ApiError::dual_audit_failed(&DomainError::ResourceLaunchFailed("boom".into()));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.body.error, "Dual audit failed");
        assert!(api.body.scores.is_none());
    }
}
