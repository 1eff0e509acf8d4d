use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use storylight_domain::{validate_audit_url, AuditOutcome, DualAuditOutcome};
use tracing::{error, field, instrument, Span};

use crate::{
    dto::{ApiError, AuditRequest, DualAuditRequest},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/lighthouse", post(run_audit))
        .route("/api/lighthouse/dual", post(run_dual_audit))
}

#[instrument(skip_all, name = "api_run_audit", fields(url = field::Empty))]
async fn run_audit(
    State(state): State<AppState>,
    body: Result<Json<AuditRequest>, JsonRejection>,
) -> Result<Json<AuditOutcome>, ApiError> {
    let Json(req) = body?;
    let url = req.url().map_err(|e| ApiError::audit_failed(&e))?;
    Span::current().record("url", url.as_str());

    validate_audit_url(Some(&url)).map_err(|e| ApiError::audit_failed(&e))?;
    let skip_cache = req.skip_cache().map_err(|e| ApiError::audit_failed(&e))?;
    let options = req
        .audit_options()
        .map_err(|e| ApiError::audit_failed(&e))?;

    match state.run_audit.execute(&url, options, skip_cache).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) if e.is_invalid_input() => Err(ApiError::audit_failed(&e)),
        Err(e) => {
            error!(error = %e, "Error running Lighthouse");
            Err(ApiError::audit_failed(&e))
        }
    }
}

#[instrument(skip_all, name = "api_run_dual_audit", fields(url = field::Empty))]
async fn run_dual_audit(
    State(state): State<AppState>,
    body: Result<Json<DualAuditRequest>, JsonRejection>,
) -> Result<Json<DualAuditOutcome>, ApiError> {
    let Json(req) = body?;
    let url = req.url().map_err(|e| ApiError::dual_audit_failed(&e))?;
    Span::current().record("url", url.as_str());

    validate_audit_url(Some(&url)).map_err(|e| ApiError::dual_audit_failed(&e))?;
    let skip_cache = req
        .skip_cache()
        .map_err(|e| ApiError::dual_audit_failed(&e))?;

    match state.run_dual_audit.execute(&url, skip_cache).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e) if e.is_invalid_input() => Err(ApiError::dual_audit_failed(&e)),
        Err(e) => {
            error!(error = %e, "Error running dual audit");
            Err(ApiError::dual_audit_failed(&e))
        }
    }
}
