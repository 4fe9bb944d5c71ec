//! Listener bootstrap

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::error::Result;
use crate::handler::{create_router, AppState};

/// Bind the configured address and serve until the listener fails
pub async fn serve(config: ServerConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let state = AppState::shared(config)?;
    let router = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %addr,
        max_body_size = state.config.max_body_size,
        cors_enabled = state.config.cors_enabled,
        version = env!("CARGO_PKG_VERSION"),
        "Starting ScamSense server"
    );

    axum::serve(listener, router).await?;
    Ok(())
}
