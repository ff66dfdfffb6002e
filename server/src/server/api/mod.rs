//! REST API handlers.

pub mod wheel;

use axum::Json;
use serde_json::{Value, json};

pub type ApiResult = Result<Json<Value>, (axum::http::StatusCode, Json<Value>)>;

/// Standard error response.
pub fn err_json(status: u16, message: &str) -> (axum::http::StatusCode, Json<Value>) {
    (
        axum::http::StatusCode::from_u16(status)
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
        Json(json!({ "status": "error", "error": message })),
    )
}
