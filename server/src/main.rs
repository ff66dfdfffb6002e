//! Wheel server binary.
//!
//! Starts the axum HTTP + WebSocket server that owns the draw session
//! and streams spin frames to connected renderer clients.

mod app;
mod config;
mod server;

use tracing_subscriber::EnvFilter;

use crate::app::SharedState;
use crate::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        port = config.server_port,
        source = %config.source_url,
        "Starting wheel server"
    );

    let state = SharedState::new(config);
    server::start_server(state).await?;
    Ok(())
}
