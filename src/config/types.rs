use std::{net::SocketAddr, time::Duration};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth_source: Option<String>,
    pub name: String,
    pub collection: String,
    pub app_name: Option<String>,
    pub server_selection_timeout_ms: u64,
}

impl DatabaseSettings {
    pub fn server_selection_timeout(&self) -> Duration {
        Duration::from_millis(self.server_selection_timeout_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub tracing_endpoint: String,
    pub tracing_sampling_rate: f64,
    pub metrics_endpoint: String,
    pub stdout_tracing: bool,
    pub tracing: bool,
    pub metrics: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}
