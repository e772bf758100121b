//! Shell configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the terminal shell.
#[derive(Debug, Clone, PartialEq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShellConfig {
    /// Seconds counted down before each game.
    #[serde(default = "default_countdown_secs")]
    countdown_secs: f32,

    /// Milliseconds between frames.
    #[serde(default = "default_tick_ms")]
    tick_ms: u64,

    /// File that receives the log output.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

/// Longest accepted countdown, one hour.
pub const MAX_COUNTDOWN_SECS: f32 = 3600.0;

fn default_countdown_secs() -> f32 {
    5.0
}

fn default_tick_ms() -> u64 {
    16
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            countdown_secs: default_countdown_secs(),
            tick_ms: default_tick_ms(),
            log_file: default_log_file(),
        }
    }
}

impl ShellConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides and validates the result.
    pub fn with_overrides(
        mut self,
        countdown_secs: Option<f32>,
        tick_ms: Option<u64>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(secs) = countdown_secs {
            self.countdown_secs = secs;
        }
        if let Some(ms) = tick_ms {
            self.tick_ms = ms;
        }
        if let Some(path) = log_file {
            self.log_file = path;
        }
        self.validate()?;
        Ok(self)
    }

    /// Rejects settings the shell cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_COUNTDOWN_SECS).contains(&self.countdown_secs) {
            return Err(ConfigError::new(format!(
                "countdown_secs must be between 0 and {}, got {}",
                MAX_COUNTDOWN_SECS, self.countdown_secs
            )));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Countdown as a duration. Values that fail validation count as zero.
    pub fn countdown(&self) -> Duration {
        Duration::try_from_secs_f32(self.countdown_secs).unwrap_or_default()
    }

    /// Frame interval as a duration.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
