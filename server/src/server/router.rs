use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;

use super::{api, websocket};
use crate::app::SharedState;

/// Create the axum router with all routes.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        // --- Core ---
        .route("/status", get(status_handler))
        .route("/ws", get(websocket::ws_handler))
        // --- Wheel ---
        .route("/api/fetch", get(api::wheel::fetch_wheel))
        .route("/api/spin", post(api::wheel::spin_wheel))
        .route("/api/winners", get(api::wheel::get_winners))
        .route("/api/reset", post(api::wheel::reset_wheel))
        // --- Middleware ---
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn status_handler() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
