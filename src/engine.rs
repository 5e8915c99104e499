//! Main AI Engine wrapping the search with a difficulty setting
//!
//! The engine runs [`search`] on a scratch copy of the caller's board, so a
//! caller holding only `&Board` (the GUI, a worker thread) can ask for a
//! move. Difficulty is the search depth: each extra ply multiplies the work
//! by roughly the number of open columns.
//!
//! # Example
//!
//! ```
//! use connect_four::{AIEngine, Board, Piece};
//!
//! let engine = AIEngine::with_depth(4);
//! let mut board = Board::new();
//! board.drop_piece(3, Piece::Red).unwrap();
//!
//! let result = engine.get_move_with_stats(&board, Piece::Yellow).unwrap();
//! println!("Best column: {}", result.column);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Piece};
use crate::error::EngineError;
use crate::search::{search, SearchResult};

/// Default difficulty (search depth)
pub const DEFAULT_DEPTH: u8 = 5;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Column to play
    pub column: usize,
    /// Minimax score of the position from the mover's point of view
    pub score: i64,
    /// Depth searched
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    /// Create a result from a root search
    #[inline]
    fn from_search(result: SearchResult, column: usize, time_ms: u64) -> Self {
        Self {
            column,
            score: result.score,
            depth: result.depth,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
            time_ms,
        }
    }
}

/// Main AI Engine for Connect Four.
///
/// Holds only the configured depth; every call is independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AIEngine {
    /// Search depth in plies
    depth: u8,
}

impl AIEngine {
    /// Create a new AI engine at the default depth of 5.
    #[must_use]
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }

    /// Create an AI engine searching `depth` plies.
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self { depth }
    }

    /// Set search depth
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    #[must_use]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Get the best column for `color`.
    ///
    /// # Errors
    ///
    /// Fails on the same preconditions as [`search`]: zero depth, a full
    /// board, or a game that is already decided.
    pub fn get_move(&self, board: &Board, color: Piece) -> Result<usize, EngineError> {
        self.get_move_with_stats(board, color).map(|r| r.column)
    }

    /// Get the best column with search statistics.
    pub fn get_move_with_stats(&self, board: &Board, color: Piece) -> Result<MoveResult, EngineError> {
        let start = Instant::now();

        let mut work_board = board.clone();
        let result = search(&mut work_board, self.depth, color)?;
        let column = result.best_move.ok_or(EngineError::NoLegalMoves)?;
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            ?color,
            depth = self.depth,
            column,
            score = result.score,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            time_ms,
            "engine picked move"
        );

        Ok(MoveResult::from_search(result, column, time_ms))
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
