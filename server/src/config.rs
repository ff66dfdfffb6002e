//! Runtime configuration from environment variables.

use std::time::Duration;

/// Runtime configuration, environment-driven with usable defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    /// Endpoint returning the JSON participant records.
    pub source_url: String,
    pub spin_duration_ms: u64,
    pub frame_interval_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 8080,
            source_url: "http://127.0.0.1:5000/api/fetch".into(),
            spin_duration_ms: 9_500,
            frame_interval_ms: 16,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("SERVER_PORT") {
            if let Ok(port) = v.parse() {
                config.server_port = port;
            }
        }
        if let Ok(v) = std::env::var("SOURCE_URL") {
            if !v.trim().is_empty() {
                config.source_url = v;
            }
        }
        if let Ok(v) = std::env::var("SPIN_DURATION_MS") {
            if let Ok(ms) = v.parse::<u64>() {
                config.spin_duration_ms = ms.max(1);
            }
        }
        if let Ok(v) = std::env::var("FRAME_INTERVAL_MS") {
            if let Ok(ms) = v.parse::<u64>() {
                config.frame_interval_ms = ms.max(1);
            }
        }

        config
    }

    pub fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}
