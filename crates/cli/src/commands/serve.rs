use std::net::SocketAddr;
use storylight_domain::audit_cache::AUDIT_CACHE_TTL_MS;
use storylight_domain::Config;
use tracing::info;

use crate::di::UseCases;
use crate::server::start_web_server;

pub async fn run(config: &Config, use_cases: &UseCases) -> anyhow::Result<()> {
    let bind_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.port).parse()?;

    info!(
        cache_capacity = config.cache.capacity,
        ttl_secs = AUDIT_CACHE_TTL_MS / 1000,
        "Starting Lighthouse API"
    );

    start_web_server(
        bind_addr,
        use_cases.app_state(),
        &config.server.cors_allowed_origins,
    )
    .await
}
