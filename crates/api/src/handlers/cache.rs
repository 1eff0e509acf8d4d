use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use storylight_domain::{AuditOutcome, CacheLookup};
use tracing::{debug, info, instrument};

use crate::{
    dto::{ApiError, CacheListingResponse, CacheLookupQuery, ClearCacheResponse},
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/lighthouse/cache",
            get(list_cached_audits).delete(clear_cache),
        )
        .route("/api/lighthouse/cache/{url}", get(get_cached_audit))
}

#[instrument(skip(state, query), name = "api_get_cached_audit")]
async fn get_cached_audit(
    State(state): State<AppState>,
    Path(url): Path<String>,
    Query(query): Query<CacheLookupQuery>,
) -> Result<Json<AuditOutcome>, ApiError> {
    let options = query
        .audit_options()
        .map_err(|e| ApiError::audit_failed(&e))?;

    match state.get_cached_audit.execute(&url, &options) {
        CacheLookup::Fresh { entry, age_ms } => {
            Ok(Json(AuditOutcome::from_cache(entry.result, age_ms)))
        }
        CacheLookup::Expired { .. } => Err(ApiError::cache_expired()),
        CacheLookup::NotFound => Err(ApiError::not_cached()),
    }
}

#[instrument(skip(state), name = "api_list_cached_audits")]
async fn list_cached_audits(State(state): State<AppState>) -> Json<CacheListingResponse> {
    let snapshot = state.cache_stats.execute();
    debug!(size = snapshot.size, "Listing cached audits");
    Json(snapshot.into())
}

#[instrument(skip(state), name = "api_clear_cache")]
async fn clear_cache(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let cleared = state.clear_cache.execute();
    info!(previous_size = cleared.previous_size, "Cache cleared via API");
    Json(cleared.into())
}
