//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use minimax_tictactoe::Player as Mark;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Which side opens the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human moves first.
    #[default]
    Human,
    /// The engine moves first.
    Engine,
}

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side that moves first.
    #[serde(default)]
    first_player: FirstPlayer,

    /// Mark the engine plays; the human gets the other one.
    #[serde(default = "default_engine_mark")]
    engine_mark: Mark,

    /// Display name for the human.
    #[serde(default = "default_human_name")]
    human_name: String,

    /// Display name for the engine.
    #[serde(default = "default_engine_name")]
    engine_name: String,

    /// Log destination while the terminal UI owns the screen.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_engine_mark() -> Mark {
    Mark::X
}

fn default_human_name() -> String {
    "Human".to_string()
}

fn default_engine_name() -> String {
    "Minimax".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_minimax.log")
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::default(),
            engine_mark: default_engine_mark(),
            human_name: default_human_name(),
            engine_name: default_engine_name(),
            log_file: default_log_file(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            first_player = %config.first_player,
            engine_mark = %config.engine_mark,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides which side opens.
    pub fn with_first_player(mut self, first_player: FirstPlayer) -> Self {
        self.first_player = first_player;
        self
    }

    /// Overrides the engine's mark.
    pub fn with_engine_mark(mut self, engine_mark: Mark) -> Self {
        self.engine_mark = engine_mark;
        self
    }

    /// The human's mark.
    pub fn human_mark(&self) -> Mark {
        self.engine_mark.opponent()
    }

    /// The mark that moves first.
    pub fn first_mark(&self) -> Mark {
        match self.first_player {
            FirstPlayer::Human => self.human_mark(),
            FirstPlayer::Engine => self.engine_mark,
        }
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
