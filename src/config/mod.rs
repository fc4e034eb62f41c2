pub(crate) mod types;

use std::net::SocketAddr;

use config::{Config, Environment, File};
use serde::Deserialize;
pub(crate) use types::{DatabaseSettings, ServerConfig, TelemetryConfig};

use crate::{init::StartupError, trace_err};

#[derive(Clone, Deserialize)]
pub struct Settings {
    pub(crate) database: DatabaseSettings,
    pub(crate) telemetry: TelemetryConfig,
    pub(crate) server: ServerConfig,
}

impl Settings {
    pub fn new() -> Result<Self, StartupError> {
        dotenv::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or("development".into());

        Settings::from_file(&run_mode)
    }

    pub fn from_file(file_name: &str) -> Result<Self, StartupError> {
        trace_err!(
            Config::builder()
                .add_source(File::with_name("config/default"))
                .add_source(File::with_name(&format!("config/{file_name}")).required(false))
                .add_source(Environment::with_prefix("APP").separator("__"))
                .build()?
                .try_deserialize(),
            "failed to build app settings"
        )
        .map_err(Into::into)
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server.addr
    }

    pub fn tracing_enabled(&self) -> bool {
        self.telemetry.tracing
    }

    pub fn metrics_enabled(&self) -> bool {
        self.telemetry.metrics
    }
}

// Credentials stay out of logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("server", &self.server)
            .field("database.host", &self.database.host)
            .field("database.port", &self.database.port)
            .field("database.name", &self.database.name)
            .field("database.collection", &self.database.collection)
            .field("database.username", &self.database.username)
            .field("telemetry", &self.telemetry)
            .finish_non_exhaustive()
    }
}
