use axum::{extract::State, response::Json, routing::get, Router};
use tracing::debug;

use crate::{dto::HealthResponse, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/lighthouse/health", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: "ok",
        service: "lighthouse-api",
        version: env!("CARGO_PKG_VERSION"),
        cache_size: state.cache_stats.size(),
    })
}
