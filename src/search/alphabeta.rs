//! Minimax search with alpha-beta pruning
//!
//! This module implements the core search algorithm for the Connect Four AI.
//! It explores every legal column to a fixed depth, scoring decided games and
//! depth-limit leaves with [`evaluate`].
//!
//! # Features
//!
//! - Plain minimax with alpha-beta cutoffs (no move ordering beyond
//!   ascending columns, so results are reproducible)
//! - Ties keep the lowest column explored
//! - Trial drops are undone by a guard on every exit path, pruning included
//!
//! # Example
//!
//! ```
//! use connect_four::board::{Board, Piece};
//! use connect_four::search::choose_move;
//!
//! let mut board = Board::new();
//! board.drop_piece(3, Piece::Red).unwrap();
//!
//! let col = choose_move(&mut board, 4, Piece::Yellow).unwrap();
//! board.drop_piece(col, Piece::Yellow).unwrap();
//! ```

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Piece, Pos};
use crate::error::{EngineError, MoveError};
use crate::eval::evaluate;
use crate::rules::{scan_outcome, GameOutcome};

/// Infinity score for alpha-beta bounds
const INF: i64 = i64::MAX;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Times the remaining columns of a node were skipped
    pub cutoffs: u64,
}

/// Search result containing the best column found and its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best column found; `None` only when nothing was explored
    pub best_move: Option<usize>,
    /// Minimax score from the maximizing side's point of view
    pub score: i64,
    /// Depth searched
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// A piece placed on a borrowed board for the length of one trial.
/// Dropping the guard clears the cell again.
struct TrialDrop<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TrialDrop<'a> {
    #[inline]
    fn place(board: &'a mut Board, pos: Pos, piece: Piece) -> Result<Self, MoveError> {
        board.place_piece(pos, piece)?;
        Ok(Self { board, pos })
    }
}

impl Deref for TrialDrop<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialDrop<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialDrop<'_> {
    fn drop(&mut self) {
        self.board.remove_piece(self.pos);
    }
}

/// Per-call search state. Nothing survives between calls.
struct Minimax {
    maximizing: Piece,
    stats: SearchStats,
}

impl Minimax {
    fn new(maximizing: Piece) -> Self {
        Self {
            maximizing,
            stats: SearchStats::default(),
        }
    }

    /// Returns `(score, best column)` for the node.
    fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i64,
        mut beta: i64,
        maximizing_turn: bool,
    ) -> (i64, Option<usize>) {
        self.stats.nodes += 1;

        if depth == 0 || scan_outcome(board) != GameOutcome::InProgress {
            return (evaluate(board, self.maximizing), None);
        }

        let to_move = if maximizing_turn {
            self.maximizing
        } else {
            self.maximizing.opponent()
        };

        let mut best_score = if maximizing_turn { -INF } else { INF };
        let mut best_move = None;

        for col in board.legal_moves() {
            let Some(row) = board.lowest_empty_row(col) else {
                continue;
            };

            let (score, _) = {
                let Ok(mut trial) = TrialDrop::place(board, Pos::new(row, col), to_move) else {
                    continue;
                };
                self.search(&mut trial, depth - 1, alpha, beta, !maximizing_turn)
            };

            if maximizing_turn {
                if score > best_score {
                    best_score = score;
                    best_move = Some(col);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(col);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        // Hand-built boards can have every column capped over empty cells
        if best_move.is_none() {
            return (evaluate(board, self.maximizing), None);
        }

        (best_score, best_move)
    }
}

/// Search `depth` plies ahead for the best column for `maximizing`, who is
/// to move.
///
/// The board is borrowed mutably for trial drops and is identical to its
/// input state when this returns.
///
/// # Errors
///
/// - [`EngineError::ZeroDepth`] if `depth` is 0
/// - [`EngineError::NoLegalMoves`] if every column is full
/// - [`EngineError::GameOver`] if someone has already won
pub fn search(board: &mut Board, depth: u8, maximizing: Piece) -> Result<SearchResult, EngineError> {
    if depth == 0 {
        return Err(EngineError::ZeroDepth);
    }
    if board.legal_moves().is_empty() {
        return Err(EngineError::NoLegalMoves);
    }
    let outcome = scan_outcome(board);
    if outcome.is_over() {
        return Err(EngineError::GameOver(outcome));
    }

    let mut minimax = Minimax::new(maximizing);
    let (score, best_move) = minimax.search(board, depth, -INF, INF, true);

    tracing::trace!(
        depth,
        ?best_move,
        score,
        nodes = minimax.stats.nodes,
        cutoffs = minimax.stats.cutoffs,
        "minimax finished"
    );

    Ok(SearchResult {
        best_move,
        score,
        depth,
        stats: minimax.stats,
    })
}

/// Column `maximizing` should play. See [`search`] for the contract.
pub fn choose_move(board: &mut Board, depth: u8, maximizing: Piece) -> Result<usize, EngineError> {
    search(board, depth, maximizing)?
        .best_move
        .ok_or(EngineError::NoLegalMoves)
}
