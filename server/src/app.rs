//! Application shared state accessible from every axum handler.

use std::sync::Arc;

use tokio::sync::{RwLock, broadcast};
use wheel_core::DrawSession;
use wheel_source::HttpEntrySource;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Broadcast channel for WebSocket messages
    ws_tx: broadcast::Sender<String>,
    /// The one draw session this server owns
    session: RwLock<DrawSession>,
    /// Participant list endpoint
    source: HttpEntrySource,
    config: AppConfig,
}

impl SharedState {
    pub fn new(config: AppConfig) -> Self {
        let (ws_tx, _) = broadcast::channel(2048);
        let source = HttpEntrySource::new(config.source_url.clone());

        Self {
            inner: Arc::new(SharedStateInner {
                ws_tx,
                session: RwLock::new(DrawSession::new()),
                source,
                config,
            }),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn source(&self) -> &HttpEntrySource {
        &self.inner.source
    }

    pub fn session(&self) -> &RwLock<DrawSession> {
        &self.inner.session
    }

    pub fn ws_sender(&self) -> &broadcast::Sender<String> {
        &self.inner.ws_tx
    }

    pub fn subscribe_ws(&self) -> broadcast::Receiver<String> {
        self.inner.ws_tx.subscribe()
    }
}
