// ABOUTME: Public API for attune logging infrastructure built on tokio-tracing
// ABOUTME: Provides centralized configuration and initialization for structured logging

pub mod config;
pub mod layers;
pub mod performance;
pub mod subscriber;


// Re-export tracing macros for convenience
pub use tracing::{Level, Span, debug, error, info, instrument, span, trace, warn};

pub use config::{LogLevel, LoggingConfig};
pub use performance::PerfTimer;
pub use subscriber::{LoggingGuard, init_subscriber};

use anyhow::Result;

/// Initialize logging with the default configuration plus environment overrides.
pub fn init_logging() -> Result<LoggingGuard> {
    let config = LoggingConfig::from_env()?;
    init_subscriber(config)
}

/// Initialize logging with a custom configuration.
///
/// Environment overrides (`ATTUNE_LOG`, `RUST_LOG`, `ATTUNE_LOG_JSON`,
/// `ATTUNE_LOG_NO_CONSOLE`, `ATTUNE_LOG_NO_FILE`) are applied on top.
pub fn init_logging_with_config(mut config: LoggingConfig) -> Result<LoggingGuard> {
    config.apply_env_overrides()?;
    init_subscriber(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macros_available() {
        info!("Test info message");
        debug!("Test debug message");
        warn!("Test warning message");
        error!("Test error message");
    }

    #[test]
    fn test_file_logging_with_structured_fields() {
        use std::sync::Arc;
        use tempfile::tempdir;
        use tracing_subscriber::{fmt, prelude::*};

        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("isolated_attune.log");
        let log_file = std::fs::File::create(&log_path).expect("Failed to create test log file");

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(Arc::new(log_file)),
        );

        tracing::subscriber::with_default(subscriber, || {
            info!(workspace = "ops", "Resolved theme tokens");
            warn!(field = "cognitive.confirmDestructiveActions", "Safety-critical setting relaxed");
        });

        let contents = std::fs::read_to_string(&log_path).expect("Failed to read test log file");
        assert!(contents.contains("Resolved theme tokens"), "{contents}");
        assert!(contents.contains("workspace"), "{contents}");
        assert!(contents.contains("Safety-critical setting relaxed"), "{contents}");
    }
}
