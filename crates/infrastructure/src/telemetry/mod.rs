//! Logging and tracing setup
//!
//! Installs a global `tracing` subscriber with an `EnvFilter` and a console
//! `fmt` layer in text or JSON format.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ServerConfig};

/// Telemetry initialization errors
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

/// Build the event filter, preferring `RUST_LOG` over the configured directive
pub fn build_filter(default_directive: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_directive).map_err(|e| TelemetryError::Filter(e.to_string()))
}

/// Initialize the global tracing subscriber
///
/// Must be called at most once per process.
pub fn init_tracing(config: &ServerConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(&config.log_filter)?;

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    tracing::info!(format = ?config.log_format, "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_filter_accepts_directives() {
        assert!(build_filter("info,skycache_server=debug").is_ok());
    }

    #[test]
    fn telemetry_error_display() {
        let err = TelemetryError::Init("already set".to_string());
        assert_eq!(err.to_string(), "Failed to initialize tracing: already set");
    }

    #[test]
    fn second_init_fails() {
        let config = ServerConfig::default();
        // The first call may race with other tests installing a subscriber
        let _ = init_tracing(&config);
        assert!(matches!(
            init_tracing(&config),
            Err(TelemetryError::Init(_))
        ));
    }
}
