pub mod api;
pub mod router;
pub mod websocket;

use anyhow::Result;

use crate::app::SharedState;

/// Start the axum HTTP + WebSocket server.
pub async fn start_server(state: SharedState) -> Result<()> {
    let port = state.config().server_port;
    let app = router::create_router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Wheel server listening on http://{addr}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}
