//! Wheel API: load from the entry source, spin, winners, reset.
//!
//! A spin runs server-side: the handler arms the session and spawns a
//! drive task that steps it at a fixed frame interval, broadcasting
//! every snapshot to the renderer clients over the WebSocket channel.
//! The `spin_started` and `winner` messages double as the clients'
//! audio and confetti cues; a client failing to play them cannot
//! affect the session.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};
use tokio::sync::broadcast;

use wheel_core::{DrawRecord, Renderer, Sector, WheelError};
use wheel_source::{EntrySource, SourceError};

use super::{ApiResult, err_json};
use crate::app::SharedState;

/// Renderer that broadcasts immutable snapshots to every connected
/// WebSocket client.
pub struct BroadcastRenderer {
    ws_tx: broadcast::Sender<String>,
}

impl BroadcastRenderer {
    pub fn new(ws_tx: broadcast::Sender<String>) -> Self {
        Self { ws_tx }
    }

    fn send(&self, message: Value) {
        // send only fails when no client is subscribed
        let _ = self.ws_tx.send(message.to_string());
    }
}

impl Renderer for BroadcastRenderer {
    fn wheel_updated(&mut self, sectors: &[Sector]) {
        self.send(wheel_message(sectors));
    }

    fn highlight(&mut self, rotation: f64, name: &str) {
        self.send(frame_message(rotation, name));
    }

    fn highlight_cleared(&mut self) {
        self.send(json!({ "type": "highlight_cleared" }));
    }

    fn winner_chosen(&mut self, record: &DrawRecord) {
        self.send(winner_message(record));
    }
}

/// GET /api/fetch
///
/// Pulls the participant list from the source, loads it into the
/// session, and returns the laid-out sectors.
pub async fn fetch_wheel(State(state): State<SharedState>) -> ApiResult {
    let entries = state.source().fetch().await.map_err(map_source_error)?;

    let mut renderer = BroadcastRenderer::new(state.ws_sender().clone());
    let mut session = state.session().write().await;
    session
        .load(entries, &mut renderer)
        .map_err(map_wheel_error)?;

    Ok(Json(Value::Array(sectors_payload(session.sectors()))))
}

/// POST /api/spin
///
/// Arms a spin and returns immediately; frames and the winner arrive
/// over the WebSocket.
pub async fn spin_wheel(State(state): State<SharedState>) -> ApiResult {
    let duration = state.config().spin_duration();
    {
        let mut session = state.session().write().await;
        session.start_spin(duration).map_err(map_wheel_error)?;
    }

    let renderer = BroadcastRenderer::new(state.ws_sender().clone());
    renderer.send(json!({
        "type": "spin_started",
        "data": { "duration_ms": duration.as_millis() as u64 }
    }));

    tokio::spawn(drive_spin(state.clone()));

    Ok(Json(json!({ "success": true, "message": "Spin started" })))
}

/// GET /api/winners
pub async fn get_winners(State(state): State<SharedState>) -> ApiResult {
    let session = state.session().read().await;
    Ok(Json(json!({ "winners": session.winners() })))
}

/// POST /api/reset
pub async fn reset_wheel(State(state): State<SharedState>) -> ApiResult {
    let mut renderer = BroadcastRenderer::new(state.ws_sender().clone());
    let mut session = state.session().write().await;
    session.reset(&mut renderer);

    Ok(Json(json!({
        "success": true,
        "participants": session.pool().len(),
    })))
}

/// Step the armed spin to completion at the configured frame interval.
async fn drive_spin(state: SharedState) {
    let mut renderer = BroadcastRenderer::new(state.ws_sender().clone());
    let started = tokio::time::Instant::now();
    let mut ticker = tokio::time::interval(state.config().frame_interval());
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        let mut session = state.session().write().await;
        match session.step(started.elapsed(), &mut renderer) {
            Ok(Some(record)) => {
                tracing::info!(winner = %record.name, "Spin settled");
                break;
            }
            Ok(None) => {
                // a reset while in flight leaves the session idle
                if !session.is_spinning() {
                    break;
                }
            }
            Err(error) => {
                tracing::warn!(%error, "Spin step failed");
                break;
            }
        }
    }
}

fn sectors_payload(sectors: &[Sector]) -> Vec<Value> {
    sectors
        .iter()
        .map(|s| {
            json!({
                "name": s.entry.name,
                "tickets": s.entry.tickets,
                "proportion": s.span / wheel_core::FULL_TURN,
                "start_angle": s.start_angle,
                "end_angle": s.end_angle,
                "angle_degrees": s.span,
            })
        })
        .collect()
}

fn wheel_message(sectors: &[Sector]) -> Value {
    json!({
        "type": "wheel",
        "data": { "sectors": sectors_payload(sectors) }
    })
}

fn frame_message(rotation: f64, name: &str) -> Value {
    json!({
        "type": "frame",
        "data": { "rotation": rotation, "highlight": name }
    })
}

fn winner_message(record: &DrawRecord) -> Value {
    json!({
        "type": "winner",
        "data": {
            "name": record.name,
            "tickets": record.tickets,
            "drawn_at": record.drawn_at,
        }
    })
}

fn map_wheel_error(error: WheelError) -> (axum::http::StatusCode, Json<Value>) {
    let status = match error {
        WheelError::AlreadySpinning => 409,
        WheelError::InvalidSpin => 500,
        WheelError::EmptySource
        | WheelError::InvalidEntry { .. }
        | WheelError::DuplicateEntry { .. }
        | WheelError::EmptyPool => 400,
    };
    err_json(status, &error.to_string())
}

fn map_source_error(error: SourceError) -> (axum::http::StatusCode, Json<Value>) {
    match error {
        SourceError::Empty => err_json(400, &error.to_string()),
        SourceError::Http(_) | SourceError::Json(_) => err_json(502, &error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wheel_core::{Entry, layout};

    #[test]
    fn sectors_payload_matches_fetch_contract() {
        let sectors = layout(&[Entry::new("A", 3), Entry::new("B", 1)]).unwrap();
        let payload = sectors_payload(&sectors);

        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0]["name"], "A");
        assert_eq!(payload[0]["tickets"], 3);
        assert_eq!(payload[0]["proportion"], 0.75);
        assert_eq!(payload[0]["start_angle"], 0.0);
        assert_eq!(payload[0]["end_angle"], 270.0);
        assert_eq!(payload[0]["angle_degrees"], 270.0);
        assert_eq!(payload[1]["start_angle"], 270.0);
        assert_eq!(payload[1]["end_angle"], 360.0);
    }

    #[test]
    fn frame_message_carries_rotation_and_highlight() {
        let msg = frame_message(123.5, "alice");
        assert_eq!(msg["type"], "frame");
        assert_eq!(msg["data"]["rotation"], 123.5);
        assert_eq!(msg["data"]["highlight"], "alice");
    }

    #[test]
    fn winner_message_carries_the_record() {
        let record = DrawRecord {
            name: "bob".into(),
            tickets: 2,
            drawn_at: "2025-01-01T00:00:00+00:00".into(),
        };
        let msg = winner_message(&record);
        assert_eq!(msg["type"], "winner");
        assert_eq!(msg["data"]["name"], "bob");
        assert_eq!(msg["data"]["tickets"], 2);
        assert_eq!(msg["data"]["drawn_at"], "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn wheel_errors_map_to_rejections() {
        let (status, _) = map_wheel_error(WheelError::EmptyPool);
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);

        let (status, _) = map_wheel_error(WheelError::AlreadySpinning);
        assert_eq!(status, axum::http::StatusCode::CONFLICT);
    }

    #[test]
    fn empty_source_maps_to_bad_request() {
        let (status, _) = map_source_error(SourceError::Empty);
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    }
}
