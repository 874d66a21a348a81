// ABOUTME: Tracing subscriber initialization and layer composition
// ABOUTME: Stacks the enabled output layers under one env filter and installs them globally

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{prelude::*, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::layers::{
    BoxedLayer, create_console_layer, create_env_filter, create_file_layer, create_json_layer,
};

/// Keeps background log writers alive. Dropping it flushes the log file.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    pub fn writes_file(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Build the enabled layers for `config`.
pub(crate) fn build_layers(config: &LoggingConfig) -> Result<(Vec<BoxedLayer>, Option<WorkerGuard>)> {
    let mut layers = Vec::new();
    let mut file_guard = None;

    if let Some(console) = create_console_layer(&config.output) {
        layers.push(console);
    }

    if let Some(json) = create_json_layer(&config.output) {
        layers.push(json);
    }

    if config.output.file {
        let (file, guard) =
            create_file_layer(&config.file).context("Failed to set up file logging")?;
        layers.push(file);
        file_guard = Some(guard);
    }

    Ok((layers, file_guard))
}

/// Initialize the global tracing subscriber with the given configuration.
pub fn init_subscriber(config: LoggingConfig) -> Result<LoggingGuard> {
    let env_filter = create_env_filter(&config).context("Failed to create environment filter")?;
    let (layers, file_guard) = build_layers(&config)?;

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::info!(
        log_level = %config.level.0,
        console_output = config.output.console,
        file_output = config.output.file,
        json_output = config.output.json,
        file_path = %config.file.path.display(),
        "Attune logging initialized"
    );

    Ok(LoggingGuard { file_guard })
}
