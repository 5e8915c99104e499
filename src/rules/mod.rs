//! Game rules for Connect Four
//!
//! Four in a row wins; a full board with no four is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_win_at, scan_outcome, winning_line, wins_if_placed, GameOutcome, WIN_LENGTH,
};
