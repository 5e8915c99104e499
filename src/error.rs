//! Error types shared across the engine, the game shell and configuration

use std::path::PathBuf;

use crate::rules::GameOutcome;

/// A move request the board refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {col}) is off the board")]
    CellOutOfRange { row: usize, col: usize },
}

/// Errors building a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {rows}x{cols} (each side must be 1..={max})")]
    InvalidDimensions { rows: usize, cols: usize, max: usize },

    #[error("failed to parse board: {0}")]
    Parse(String),
}

/// Caller-side precondition violations when asking the engine for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no legal moves: the board is full")]
    NoLegalMoves,

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("game is already decided: {0:?}")]
    GameOver(GameOutcome),
}

/// Errors raised by the interactive game shell when a human tries to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlayError {
    #[error("game is over")]
    GameOver,

    #[error("AI is thinking")]
    AiThinking,

    #[error("not your turn")]
    NotYourTurn,

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
