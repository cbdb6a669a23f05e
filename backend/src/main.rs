//! HTTP server for the archive index API.

mod auth;
mod config;
mod error;
mod handlers;
mod request_context;
mod routes;
mod state;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::ServerConfig::from_env()?;

    tracing::info!("Starting archive backend server");
    tracing::info!("Database path: {}", config.db_path.display());
    if config.admin_token.is_none() {
        tracing::warn!("ADMIN_TOKEN is not set; archive mutations are open to every caller");
    }

    let app_state = state::AppState::from_config(&config)?;
    let app = routes::create_router(app_state, config.cors_allow_origin.as_deref());

    let addr = config.listen_addr();
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
