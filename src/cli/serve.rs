//! `serve` command: run the HTTP relay

use std::net::SocketAddr;
use std::sync::Arc;

use crate::audit::Auditor;
use crate::config::{Config, UpstreamErrorPolicy};
use crate::error::{ConfigError, Result};
use crate::web::{AppState, build_router};

/// Run the relay until Ctrl-C
pub async fn run(
    mut config: Config,
    bind: Option<String>,
    upstream_errors: Option<UpstreamErrorPolicy>,
) -> Result<()> {
    if let Some(bind) = bind {
        config.bind = bind;
    }
    if let Some(policy) = upstream_errors {
        config.upstream_errors = policy;
    }

    let addr: SocketAddr = config
        .bind
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("invalid bind address: {}", config.bind)))?;

    let auditor = Auditor::from_config(&config)?;
    let state = AppState {
        auditor: Arc::new(auditor),
    };
    let app = build_router(state, &config.allowed_origins);

    if config.api_key.is_none() {
        log::warn!("No PageSpeed API key configured; requests use the anonymous quota");
    }
    log::info!(
        "Listening on {} (cache TTL {}s, upstream errors: {:?})",
        addr,
        config.cache_ttl_secs,
        config.upstream_errors
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
