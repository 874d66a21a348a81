// ABOUTME: Configuration structures and environment variable parsing for logging
// ABOUTME: Handles log levels, output targets, and the rolling log file location

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use tracing::Level;

/// Level names accepted in config files and env vars, in severity order.
const LEVEL_NAMES: [(&str, Level); 5] = [
    ("trace", Level::TRACE),
    ("debug", Level::DEBUG),
    ("info", Level::INFO),
    ("warn", Level::WARN),
    ("error", Level::ERROR),
];

/// A `tracing::Level` that reads and writes as its lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LogLevel(pub Level);

impl LogLevel {
    pub fn name(self) -> &'static str {
        LEVEL_NAMES
            .iter()
            .find(|(_, level)| *level == self.0)
            .map_or("info", |(name, _)| *name)
    }
}

impl TryFrom<String> for LogLevel {
    type Error = String;

    fn try_from(name: String) -> std::result::Result<Self, Self::Error> {
        parse_log_level(&name)
            .map(LogLevel)
            .map_err(|err| err.to_string())
    }
}

impl From<LogLevel> for String {
    fn from(level: LogLevel) -> Self {
        level.name().to_string()
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        LogLevel(level)
    }
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Logging setup for the attune crates. Every field may be omitted in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,

    /// Keyed by target, e.g. `attune_engine = "debug"`
    pub module_levels: BTreeMap<String, LogLevel>,

    pub output: OutputConfig,

    pub file: FileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// stderr, human readable
    pub console: bool,
    /// Daily rolling file under [`FileConfig::path`]
    pub file: bool,
    /// stderr as JSON lines; replaces the human readable layer
    pub json: bool,
    pub pretty_console: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Base name for the rolling file; the date is appended on rotation.
    pub path: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(Level::INFO),
            module_levels: BTreeMap::new(),
            output: OutputConfig::default(),
            file: FileConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            console: true,
            file: true,
            json: false,
            pretty_console: false,
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            path: default_log_file_path(),
        }
    }
}

impl LoggingConfig {
    /// Defaults with `ATTUNE_LOG*` and `RUST_LOG` applied.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Console only at `level`; what the CLI uses unless file logging is asked for.
    pub fn console_only(level: Level) -> Self {
        let mut config = Self {
            level: LogLevel(level),
            ..Self::default()
        };
        config.output.file = false;
        config
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        match (env::var("ATTUNE_LOG"), env::var("RUST_LOG")) {
            (Ok(level), _) => {
                self.level = LogLevel(parse_log_level(&level).context("Invalid ATTUNE_LOG level")?);
            }
            (Err(_), Ok(directives)) => self.parse_rust_log(&directives)?,
            (Err(_), Err(_)) => {}
        }

        let flag = |name: &str| env::var_os(name).is_some();
        self.output.json |= flag("ATTUNE_LOG_JSON");
        self.output.console &= !flag("ATTUNE_LOG_NO_CONSOLE");
        self.output.file &= !flag("ATTUNE_LOG_NO_FILE");

        Ok(())
    }

    /// Apply `info,attune_engine=debug` style directives. A bare level sets
    /// the global one; `target=level` adds a module override.
    pub fn parse_rust_log(&mut self, rust_log: &str) -> Result<()> {
        for directive in rust_log.split(',').map(str::trim).filter(|d| !d.is_empty()) {
            match directive.split_once('=') {
                Some((target, level)) => {
                    let level = parse_log_level(level)
                        .with_context(|| format!("Invalid level for target '{target}'"))?;
                    self.module_levels.insert(target.to_string(), LogLevel(level));
                }
                None => {
                    self.level = LogLevel(
                        parse_log_level(directive).context("Invalid global log level")?,
                    );
                }
            }
        }
        Ok(())
    }

    /// The same settings as an `EnvFilter` directive string.
    pub fn directives(&self) -> String {
        std::iter::once(self.level.name().to_string())
            .chain(
                self.module_levels
                    .iter()
                    .map(|(target, level)| format!("{target}={}", level.name())),
            )
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// `<config dir>/attune/attune.log`, or `attune.log` in the working directory.
pub fn default_log_file_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join("attune"))
        .unwrap_or_default()
        .join("attune.log")
}

/// Case-insensitive; `warning` is accepted for `warn`.
pub fn parse_log_level(name: &str) -> Result<Level> {
    let name = name.trim().to_ascii_lowercase();
    let name = if name == "warning" { "warn" } else { name.as_str() };
    LEVEL_NAMES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, level)| *level)
        .with_context(|| {
            format!("Invalid log level: {name}. Must be one of: trace, debug, info, warn, error")
        })
}
