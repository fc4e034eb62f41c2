mod app;
mod config;
pub(crate) mod handlers;
mod init;
pub(crate) mod middleware;
pub(crate) mod service;
pub(crate) mod storage;
pub(crate) mod utils;

mod docs;

pub use config::Settings;
pub use handlers::error::AppError;
pub use init::{init_stdout_tracing, StartupError};
pub use service::Service;

use axum::Router;
use opentelemetry_sdk::{metrics::SdkMeterProvider, trace::SdkTracerProvider};

#[cfg(feature = "integration_tests")]
pub use app::build_app;

#[cfg(feature = "integration_tests")]
pub use init::init_storage;

#[cfg(feature = "integration_tests")]
pub use storage::{CandidateTodo, MemoryStorage, StorageError, Todo, TodoId};

#[cfg(feature = "integration_tests")]
pub use storage::test_util::{TestStorageBuilder, SCENARIO_TODO_ID};

use tracing::{info, instrument};

pub struct TracingProviderGuard {
    provider: SdkTracerProvider,
}

impl TracingProviderGuard {
    pub fn new(settings: &Settings) -> Result<Self, StartupError> {
        Ok(Self {
            provider: init::init_tracer_provider(settings)?,
        })
    }
}

impl Drop for TracingProviderGuard {
    fn drop(&mut self) {
        let _ = self.provider.shutdown();
    }
}

pub struct MetricsProviderGuard {
    provider: SdkMeterProvider,
}

impl MetricsProviderGuard {
    pub fn new(settings: &Settings) -> Result<Self, StartupError> {
        Ok(Self {
            provider: init::init_metrics_provider(settings)?,
        })
    }
}

impl Drop for MetricsProviderGuard {
    fn drop(&mut self) {
        let _ = self.provider.shutdown();
    }
}

/// Connects to the database and wires the router. Never fails on an
/// unreachable database; see [`init::init_storage`].
#[instrument(name = "init_app", skip_all)]
pub async fn init_app(settings: Settings) -> (Router, Service) {
    info!(settings = ?settings, "init_app with settings");

    let service = init::init_storage(&settings).await;

    (app::build_app(service.clone()), service)
}
