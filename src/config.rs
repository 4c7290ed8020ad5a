//! Runtime configuration loaded from TOML.

use crate::games::tictactoe::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for the `play` and `simulate` commands.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DuelConfig {
    /// Mode the first game starts in.
    #[serde(default)]
    default_mode: Mode,

    /// Seed for the machine's random choices. `None` draws fresh entropy.
    #[serde(default)]
    seed: Option<u64>,

    /// Where the terminal front-end writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Number of games `simulate` plays.
    #[serde(default = "default_simulate_games")]
    simulate_games: u32,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_duel.log")
}

#[instrument]
fn default_simulate_games() -> u32 {
    100
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::default(),
            seed: None,
            log_file: default_log_file(),
            simulate_games: default_simulate_games(),
        }
    }
}

impl DuelConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = ?config.default_mode, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        mode: Option<Mode>,
        seed: Option<u64>,
        games: Option<u32>,
    ) -> Self {
        if let Some(mode) = mode {
            self.default_mode = mode;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(games) = games {
            self.simulate_games = games;
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
