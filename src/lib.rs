//! Connect Four decision engine
//!
//! Gravity-drop Connect Four on a configurable grid (6x7 by default) with a
//! depth-limited minimax AI:
//! - Pieces fall to the lowest empty cell of the chosen column
//! - Four in a row horizontally, vertically or diagonally wins
//! - A full board with no four is a draw
//!
//! # Architecture
//!
//! - [`board`]: Grid representation and the text board format
//! - [`rules`]: Win detection, local and full-board
//! - [`eval`]: Heuristic position scoring
//! - [`search`]: Minimax with alpha-beta pruning
//! - [`engine`]: Depth-configured facade used by the GUI
//! - [`config`]: TOML settings for the application
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use connect_four::{AIEngine, Board, Piece};
//!
//! let mut board = Board::new();
//! board.drop_piece(3, Piece::Red).unwrap();
//!
//! let engine = AIEngine::with_depth(4);
//! let col = engine.get_move(&board, Piece::Yellow).unwrap();
//! let pos = board.drop_piece(col, Piece::Yellow).unwrap();
//! println!("AI plays column {} (row {})", col, pos.row);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Piece, Pos, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{BoardError, ConfigError, EngineError, MoveError, PlayError};
pub use eval::{evaluate, EvalScore};
pub use rules::{check_win_at, scan_outcome, GameOutcome, WIN_LENGTH};
pub use search::{choose_move, search, SearchResult};
