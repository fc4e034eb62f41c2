mod observability;
mod storage;

use thiserror::Error;

pub use observability::{init_metrics_provider, init_stdout_tracing, init_tracer_provider};
pub use storage::init_storage;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load configs")]
    LoadConfig(#[from] config::ConfigError),

    #[error("Failed to init tracing")]
    InitTracing(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("Failed to set global tracing provider")]
    SetGlobalTracingProvider(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Failed to bridge log records into tracing")]
    SetLogger(#[from] tracing_log::log::SetLoggerError),
}
