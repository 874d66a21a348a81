// ABOUTME: Layer constructors for the console, rolling file and JSON log outputs
// ABOUTME: Each output is boxed so the subscriber can compose whichever set is enabled

use anyhow::{Context, Result};
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
};

use crate::config::{FileConfig, LoggingConfig, OutputConfig};

pub type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Create a console output layer writing to stderr.
pub fn create_console_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.console {
        return None;
    }

    let layer = if config.pretty_console {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::CLOSE)
            .pretty()
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .boxed()
    };

    Some(layer)
}

/// Create a daily rolling file layer.
///
/// The returned guard flushes buffered lines when dropped and must be held
/// for as long as logging should reach the file.
pub fn create_file_layer(config: &FileConfig) -> Result<(BoxedLayer, WorkerGuard)> {
    let directory = config
        .path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));

    fs::create_dir_all(directory).context(format!(
        "Failed to create log directory: {}",
        directory.display()
    ))?;

    let file_name = config
        .path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Invalid log file path")?;

    let file_appender = rolling::daily(directory, file_name);
    let (writer, guard) = non_blocking(file_appender);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .boxed();

    Ok((layer, guard))
}

/// Create a JSON output layer for structured logging on stderr.
pub fn create_json_layer(config: &OutputConfig) -> Option<BoxedLayer> {
    if !config.json {
        return None;
    }

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::CLOSE)
        .boxed();

    Some(layer)
}

/// Filter built from the configured global and per-target levels.
pub fn create_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    let directives = config.directives();
    EnvFilter::try_new(&directives).context(format!("Invalid filter directives '{directives}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;
    use tempfile::tempdir;
    use tracing::Level;

    #[test]
    fn test_create_console_layer() {
        let config = OutputConfig {
            console: true,
            ..Default::default()
        };
        assert!(create_console_layer(&config).is_some());

        let config = OutputConfig {
            console: false,
            ..Default::default()
        };
        assert!(create_console_layer(&config).is_none());
    }

    #[test]
    fn test_create_json_layer() {
        let config = OutputConfig {
            json: true,
            ..Default::default()
        };
        assert!(create_json_layer(&config).is_some());
        assert!(create_json_layer(&OutputConfig::default()).is_none());
    }

    #[test]
    fn test_create_file_layer_makes_directory() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("nested").join("attune.log");

        let config = FileConfig { path: log_path };
        let result = create_file_layer(&config);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("nested").is_dir());
    }

    #[test]
    fn test_create_env_filter_with_modules() {
        let mut config = LoggingConfig {
            level: LogLevel(Level::WARN),
            ..Default::default()
        };
        config
            .module_levels
            .insert("attune_engine".to_string(), LogLevel(Level::TRACE));

        assert!(create_env_filter(&config).is_ok());
    }
}
