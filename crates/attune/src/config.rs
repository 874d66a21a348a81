// ABOUTME: Loads attune.toml: logging, forced system preferences and resolver options
// ABOUTME: Missing file means defaults; out-of-range values are sanitized with a warning

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use attune_engine::{
    EnvSystemDefaults, InvalidOverridePolicy, ResolverOptions, SystemDefaultProvider,
};
use attune_logging::{Level, LogLevel, LoggingConfig, warn};
use attune_types::SystemDefaults;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "attune.toml";

const MIN_FONT_SIZE: f32 = 8.0;
const MAX_FONT_SIZE: f32 = 72.0;
const DEFAULT_FONT_SIZE: f32 = 16.0;
const DEFAULT_SLOW_RESOLVE_MS: u64 = 16;

fn default_true() -> bool {
    true
}

fn default_slow_resolve_ms() -> u64 {
    DEFAULT_SLOW_RESOLVE_MS
}

/// `[logging]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingSection {
    /// trace, debug, info, warn or error. `-v` flags take precedence.
    #[serde(default)]
    pub level: Option<String>,

    #[serde(default)]
    pub json: bool,

    /// Also write the rolling log file
    #[serde(default)]
    pub file: bool,
}

/// `[system]`: values forced over what the environment reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemSection {
    #[serde(default)]
    pub prefers_dark_mode: Option<bool>,
    #[serde(default)]
    pub prefers_reduced_motion: Option<bool>,
    #[serde(default)]
    pub prefers_high_contrast: Option<bool>,
    #[serde(default)]
    pub prefers_reduced_transparency: Option<bool>,
    /// Base font size in pixels
    #[serde(default)]
    pub font_size: Option<f32>,
}

impl SystemSection {
    /// Layer the forced values over `detected`.
    pub fn apply(&self, detected: SystemDefaults) -> SystemDefaults {
        SystemDefaults {
            prefers_dark_mode: self.prefers_dark_mode.unwrap_or(detected.prefers_dark_mode),
            prefers_reduced_motion: self
                .prefers_reduced_motion
                .unwrap_or(detected.prefers_reduced_motion),
            prefers_high_contrast: self
                .prefers_high_contrast
                .unwrap_or(detected.prefers_high_contrast),
            prefers_reduced_transparency: self
                .prefers_reduced_transparency
                .unwrap_or(detected.prefers_reduced_transparency),
            system_font_size: self.font_size.unwrap_or(detected.system_font_size),
        }
    }
}

/// `[resolver]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverSection {
    #[serde(default = "default_true")]
    pub memoize: bool,

    /// Workspace overlay to apply when none is given on the command line
    #[serde(default)]
    pub default_workspace: Option<String>,

    #[serde(default = "default_slow_resolve_ms")]
    pub slow_resolve_warn_ms: u64,

    /// Reject invalid overrides instead of clamping them
    #[serde(default = "default_true")]
    pub reject_invalid_overrides: bool,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            memoize: true,
            default_workspace: None,
            slow_resolve_warn_ms: DEFAULT_SLOW_RESOLVE_MS,
            reject_invalid_overrides: true,
        }
    }
}

impl ResolverSection {
    pub fn options(&self) -> ResolverOptions {
        ResolverOptions {
            memoize: self.memoize,
            slow_resolve_warn: std::time::Duration::from_millis(self.slow_resolve_warn_ms),
        }
    }

    pub fn policy(&self) -> InvalidOverridePolicy {
        if self.reject_invalid_overrides {
            InvalidOverridePolicy::Reject
        } else {
            InvalidOverridePolicy::Clamp
        }
    }
}

/// Contents of attune.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingSection,

    #[serde(default)]
    pub system: SystemSection,

    #[serde(default)]
    pub resolver: ResolverSection,
}

impl Config {
    /// Load from `path` if given (it must exist), else from the default location.
    ///
    /// Values are not checked yet; call [`LoadedConfig::checked`] once logging
    /// is up so sanitizing warnings reach a subscriber.
    pub fn load(path: Option<&Path>) -> Result<LoadedConfig> {
        match path {
            Some(path) => Self::load_file(path),
            None => match default_config_dir() {
                Some(dir) => Self::load_from_dir(&dir),
                None => Ok(LoadedConfig::default()),
            },
        }
    }

    /// Load attune.toml from `dir`, falling back to defaults when absent.
    pub fn load_from_dir(dir: &Path) -> Result<LoadedConfig> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_file(&path)
        } else {
            Ok(LoadedConfig::default())
        }
    }

    pub fn load_file(path: &Path) -> Result<LoadedConfig> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config =
            toml::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))?;

        Ok(LoadedConfig {
            config,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(size) = self.system.font_size
            && !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size)
        {
            return Err(format!(
                "System font size {size} must be between {MIN_FONT_SIZE} and {MAX_FONT_SIZE}"
            ));
        }

        if self.resolver.slow_resolve_warn_ms == 0 {
            return Err("Slow resolve threshold must be greater than 0".to_string());
        }

        if let Some(level) = &self.logging.level
            && attune_logging::config::parse_log_level(level).is_err()
        {
            return Err(format!("Unknown log level '{level}'"));
        }

        Ok(())
    }

    /// Copy with every invalid value replaced by its default.
    pub fn sanitized(&self) -> Self {
        let mut config = self.clone();

        if let Some(size) = config.system.font_size
            && !(MIN_FONT_SIZE..=MAX_FONT_SIZE).contains(&size)
        {
            warn!(
                original_size = size,
                "System font size out of range, using {DEFAULT_FONT_SIZE}"
            );
            config.system.font_size = Some(DEFAULT_FONT_SIZE);
        }

        if config.resolver.slow_resolve_warn_ms == 0 {
            config.resolver.slow_resolve_warn_ms = DEFAULT_SLOW_RESOLVE_MS;
        }

        if let Some(level) = &config.logging.level
            && attune_logging::config::parse_log_level(level).is_err()
        {
            config.logging.level = None;
        }

        config
    }

    /// Logging setup for this run. A non-zero `verbosity` overrides the
    /// configured level.
    pub fn logging_config(&self, verbosity: u8) -> LoggingConfig {
        let configured = self
            .logging
            .level
            .as_deref()
            .and_then(|level| attune_logging::config::parse_log_level(level).ok());

        let level = match verbosity {
            0 => configured.unwrap_or(Level::WARN),
            1 => Level::INFO,
            2 => Level::DEBUG,
            _3_or_more => Level::TRACE,
        };

        let mut config = LoggingConfig::console_only(level);
        config.output.json = self.logging.json;
        config.output.file = self.logging.file;
        config.level = LogLevel(level);
        config
    }

    pub fn system_provider(&self) -> ConfiguredSystemDefaults {
        ConfiguredSystemDefaults {
            overrides: self.system,
        }
    }
}

/// A parsed but not yet validated configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedConfig {
    pub config: Config,
    /// File it came from; `None` when defaults were used
    pub path: Option<PathBuf>,
}

impl LoadedConfig {
    /// Validate the loaded values. Invalid ones are logged and replaced
    /// with their defaults.
    pub fn checked(self) -> Config {
        match self.config.validate() {
            Ok(()) => self.config,
            Err(message) => {
                warn!(
                    config_path = %self.path.as_deref().unwrap_or(Path::new("<defaults>")).display(),
                    error = %message,
                    "Invalid configuration - using sanitized values"
                );
                self.config.sanitized()
            }
        }
    }
}

/// Environment detection with the `[system]` section layered on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfiguredSystemDefaults {
    overrides: SystemSection,
}

impl SystemDefaultProvider for ConfiguredSystemDefaults {
    fn detect(&self) -> SystemDefaults {
        self.overrides.apply(EnvSystemDefaults.detect())
    }
}

/// `<config dir>/attune`
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("attune"))
}
