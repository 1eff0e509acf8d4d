use anyhow::Context;
use axum::http::HeaderValue;
use std::io::ErrorKind;
use std::net::SocketAddr;
use storylight_api::{create_api_routes, AppState};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

pub async fn start_web_server(
    bind_addr: SocketAddr,
    state: AppState,
    cors_allowed_origins: &[String],
) -> anyhow::Result<()> {
    let app = create_api_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_allowed_origins));

    let listener = match TcpListener::bind(bind_addr).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == ErrorKind::AddrInUse => {
            error!(port = bind_addr.port(), "Port is already in use");
            anyhow::bail!(
                "Port {} is already in use; stop the other process or set LIGHTHOUSE_API_PORT",
                bind_addr.port()
            );
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to bind {}", bind_addr));
        }
    };

    info!(address = %bind_addr, "Lighthouse API listening");
    info!("  POST   /api/lighthouse");
    info!("  POST   /api/lighthouse/dual");
    info!("  GET    /api/lighthouse/cache/{{url}}");
    info!("  GET    /api/lighthouse/cache");
    info!("  DELETE /api/lighthouse/cache");
    info!("  GET    /api/lighthouse/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Lighthouse API stopped");
    Ok(())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if allowed_origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    base.allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down Lighthouse API");
}
