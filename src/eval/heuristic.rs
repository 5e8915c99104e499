//! Heuristic evaluation function for Connect Four board positions
//!
//! This module provides the leaf evaluation for the minimax search.
//! It evaluates board positions based on:
//! - Win/loss/draw detection
//! - Run potential of every piece (sliding 7-cell window per axis)
//! - Immediate winning threats for either side
//!
//! The heuristic is simple and exploitable. What matters is that it is
//! deterministic and scans every direction the same way.

use crate::board::{Board, Piece, Pos};
use crate::rules::{scan_outcome, wins_if_placed, GameOutcome};

use super::patterns::{run_bonus, EvalScore};

/// Axis scan order for run potential. The window counter depends on scan
/// order, so the anti-diagonal is walked down-left here.
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↙
];

/// Evaluate the board from the perspective of `maximizing`.
///
/// Returns:
/// - `EvalScore::WIN` if `maximizing` has four in a row
/// - `EvalScore::LOSS` if the opponent has
/// - `EvalScore::DRAW` on a full board without a winner
/// - otherwise the run potential of `maximizing` minus that of the
///   opponent, adjusted by `EvalScore::IMMEDIATE_THREAT` for each side that
///   can win on its next drop
#[must_use]
pub fn evaluate(board: &Board, maximizing: Piece) -> i64 {
    match scan_outcome(board) {
        GameOutcome::Win(piece) if piece == maximizing => return EvalScore::WIN,
        GameOutcome::Win(_) => return EvalScore::LOSS,
        GameOutcome::Draw => return EvalScore::DRAW,
        GameOutcome::InProgress => {}
    }

    let mut score: i64 = board
        .pieces()
        .map(|(pos, piece)| {
            let potential = evaluate_cell(board, pos, piece);
            if piece == maximizing {
                potential
            } else {
                -potential
            }
        })
        .sum();

    if has_immediate_win(board, maximizing) {
        score += EvalScore::IMMEDIATE_THREAT;
    }
    if has_immediate_win(board, maximizing.opponent()) {
        score -= EvalScore::IMMEDIATE_THREAT;
    }

    score
}

/// Run potential of `piece` at `pos`, summed over the four axes.
pub fn evaluate_cell(board: &Board, pos: Pos, piece: Piece) -> i64 {
    DIRECTIONS
        .iter()
        .map(|&(dr, dc)| evaluate_direction(board, pos, piece, dr, dc))
        .sum()
}

/// Slide a 7-cell window (offsets -3..=3) through `pos` along `(dr, dc)`.
///
/// The counter goes up on a `piece` cell and down on anything else,
/// off-board cells included. Each step scores `run_bonus(counter)`.
pub fn evaluate_direction(board: &Board, pos: Pos, piece: Piece, dr: isize, dc: isize) -> i64 {
    let mut score = 0;
    let mut counter = 0i32;

    for step in -EvalScore::WINDOW_REACH..=EvalScore::WINDOW_REACH {
        let matches = pos
            .offset(dr, dc, step, board.rows(), board.cols())
            .is_some_and(|p| board.get(p) == Some(piece));

        if matches {
            counter += 1;
        } else {
            counter -= 1;
        }
        score += run_bonus(counter);
    }

    score
}

/// Can `piece` complete four in a row with its next drop?
pub fn has_immediate_win(board: &Board, piece: Piece) -> bool {
    (0..board.cols()).any(|col| {
        board
            .lowest_empty_row(col)
            .is_some_and(|row| wins_if_placed(board, Pos::new(row, col), piece))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_neutral() {
        let b = Board::new();
        assert_eq!(evaluate(&b, Piece::Red), 0);
        assert_eq!(evaluate(&b, Piece::Yellow), 0);
    }

    #[test]
    fn test_isolated_piece_scores_nothing() {
        // Three mismatches open every window, so the counter never turns positive
        let mut b = Board::new();
        b.drop_piece(3, Piece::Red).unwrap();
        assert_eq!(evaluate_cell(&b, Pos::new(5, 3), Piece::Red), 0);
        assert_eq!(evaluate(&b, Piece::Red), 0);
    }

    #[test]
    fn test_direction_window_counter() {
        let b = board(
            ".......\n\
             .......\n\
             .......\n\
             .......\n\
             .......\n\
             RR.R...",
        );
        // +1 +1 -1 +1 -1 -1 -1 => counters 1,2,1,2,1,0,-1
        assert_eq!(evaluate_direction(&b, Pos::new(5, 3), Piece::Red, 0, 1), 230);
        assert_eq!(evaluate_direction(&b, Pos::new(5, 3), Piece::Red, 1, 0), 0);
    }

    #[test]
    fn test_threat_bonus_and_run_potential() {
        let b = board(
            ".......\n\
             .......\n\
             .......\n\
             .......\n\
             .......\n\
             RR.R...",
        );
        assert!(has_immediate_win(&b, Piece::Red));
        assert!(!has_immediate_win(&b, Piece::Yellow));
        assert_eq!(evaluate(&b, Piece::Red), 230 + EvalScore::IMMEDIATE_THREAT);
        assert_eq!(evaluate(&b, Piece::Yellow), -230 - EvalScore::IMMEDIATE_THREAT);
    }

    #[test]
    fn test_in_progress_evaluation_is_antisymmetric() {
        let b = board(
            ".......\n\
             .......\n\
             ...Y...\n\
             ..YR...\n\
             .RRY...\n\
             YRYRR..",
        );
        assert_eq!(scan_outcome(&b), GameOutcome::InProgress);
        assert_eq!(evaluate(&b, Piece::Red), -evaluate(&b, Piece::Yellow));
    }

    #[test]
    fn test_win_sentinels() {
        let b = board(
            ".......\n\
             .......\n\
             .......\n\
             .......\n\
             YYY....\n\
             RRRR...",
        );
        assert_eq!(evaluate(&b, Piece::Red), EvalScore::WIN);
        assert_eq!(evaluate(&b, Piece::Yellow), EvalScore::LOSS);
    }

    #[test]
    fn test_draw_is_zero() {
        let b = board(
            "RRYYRRY\n\
             YYRRYYR\n\
             RRYYRRY\n\
             YYRRYYR\n\
             RRYYRRY\n\
             YYRRYYR",
        );
        assert_eq!(evaluate(&b, Piece::Red), EvalScore::DRAW);
        assert_eq!(evaluate(&b, Piece::Yellow), EvalScore::DRAW);
    }

    #[test]
    fn test_immediate_win_needs_reachable_cell() {
        // Yellow's gap sits above an empty cell, so it cannot be filled yet
        let b = board(
            ".......\n\
             .......\n\
             .......\n\
             .......\n\
             YY.Y...\n\
             RRYRR..",
        );
        assert!(has_immediate_win(&b, Piece::Yellow));

        let b = board(
            ".......\n\
             .......\n\
             .......\n\
             YY.Y...\n\
             RR.RR..\n\
             RRYRY..",
        );
        assert!(!has_immediate_win(&b, Piece::Yellow));
    }

    #[test]
    fn test_evaluate_does_not_touch_board() {
        let b = board(
            ".......\n\
             .......\n\
             .......\n\
             .......\n\
             .......\n\
             RR.R...",
        );
        let before = b.clone();
        let _ = evaluate(&b, Piece::Red);
        assert_eq!(b, before);
    }
}
