//! Application settings, loadable from TOML

use std::path::Path;

use crate::board::{Board, Piece, MAX_DIMENSION};
use crate::engine::DEFAULT_DEPTH;
use crate::error::ConfigError;

/// Highest difficulty offered in the UI
pub const MAX_DIFFICULTY: u8 = 10;

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board rows
    pub rows: usize,
    /// Board columns
    pub cols: usize,
    /// AI search depth, 1..=MAX_DIFFICULTY
    pub difficulty: u8,
    /// Color of the human player in a new game (red moves first)
    pub human_plays: Piece,
    /// Fallback tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            rows: 6,
            cols: 7,
            difficulty: DEFAULT_DEPTH,
            human_plays: Piece::Red,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_DIMENSION).contains(&self.rows) {
            return Err(ConfigError::Validation(format!(
                "rows must be in 1..={MAX_DIMENSION}"
            )));
        }
        if !(1..=MAX_DIMENSION).contains(&self.cols) {
            return Err(ConfigError::Validation(format!(
                "cols must be in 1..={MAX_DIMENSION}"
            )));
        }
        if !(1..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(ConfigError::Validation(format!(
                "difficulty must be in 1..={MAX_DIFFICULTY}"
            )));
        }
        Ok(())
    }

    /// Empty board with the configured dimensions
    pub fn new_board(&self) -> Result<Board, ConfigError> {
        Board::with_size(self.rows, self.cols)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}
