//! Game configuration loaded from TOML and overridden from the command line.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_sos::{BoardSize, GameMode, Letter};
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "sos.toml";

/// Log file used when none is configured.
pub const DEFAULT_LOG_FILE: &str = "strictly_sos.log";

/// Startup configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the first board.
    #[serde(default)]
    board_size: BoardSize,

    /// Mode preselected for new games.
    #[serde(default)]
    mode: GameMode,

    /// Letter preselected for the first move.
    #[serde(default)]
    letter: Letter,

    /// Where tracing output is written.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_log_file() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_FILE)
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BoardSize::DEFAULT,
            mode: GameMode::default(),
            letter: Letter::default(),
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

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(board_size = %config.board_size, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the named file, or [`DEFAULT_CONFIG_FILE`] if it exists, or the defaults.
    ///
    /// A file named explicitly must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        board_size: Option<usize>,
        mode: Option<GameMode>,
        letter: Option<Letter>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        if let Some(size) = board_size {
            self.board_size = BoardSize::new(size)
                .map_err(|e| ConfigError::new(format!("Invalid --size: {}", e)))?;
        }
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(letter) = letter {
            self.letter = letter;
        }
        if let Some(log_file) = log_file {
            self.log_file = log_file;
        }
        Ok(self)
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
