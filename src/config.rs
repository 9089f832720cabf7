//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File consulted when no `--config` path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Settings for a tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name of player one (`X`).
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name of player two (`O`).
    #[serde(default = "default_player_two")]
    player_two: String,

    /// Log file used while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_one = %config.player_one, player_two = %config.player_two, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists, else defaults.
    ///
    /// An explicitly requested file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces player names with any given on the command line.
    pub fn with_player_names(mut self, player_one: Option<String>, player_two: Option<String>) -> Self {
        if let Some(name) = player_one {
            self.player_one = name;
        }
        if let Some(name) = player_two {
            self.player_two = name;
        }
        self
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
    /// Creates a new configuration error.
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
