//! Telemetry setup

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::AppError;

/// Installs the global JSON subscriber. `RUST_LOG` wins over `default_filter`.
pub fn init_telemetry(default_filter: &str) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().json().with_target(true))
        .try_init()
        .map_err(|e| AppError::TelemetryError(e.to_string()))
}
