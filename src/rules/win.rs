//! Win and draw detection
//!
//! Two views of the same "four in a row" definition:
//! - [`check_win_at`]: local check through the last-placed piece
//! - [`scan_outcome`]: full-board scan that does not need a last move
//!
//! The search uses the full scan at every node because ancestors of the
//! newest move must also be recognised as decided.

use crate::board::{Board, Piece, Pos};

/// Pieces needed in a row to win
pub const WIN_LENGTH: usize = 4;

/// Axis directions: horizontal, vertical, diagonal ↘, diagonal ↗
const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal ↘
    (-1, 1), // Diagonal ↗
];

/// State of a game, derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win(Piece),
    Draw,
}

impl GameOutcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != GameOutcome::InProgress
    }

    #[inline]
    pub fn winner(self) -> Option<Piece> {
        match self {
            GameOutcome::Win(piece) => Some(piece),
            _ => None,
        }
    }
}

/// Count `piece` cells next to `pos` along one axis, at most three each
/// way, plus `pos` itself.
#[inline]
fn run_through(board: &Board, pos: Pos, piece: Piece, dr: isize, dc: isize) -> usize {
    let reach = WIN_LENGTH as isize - 1;
    let mut count = 1;
    for sign in [1, -1] {
        for step in 1..=reach {
            match pos.offset(dr, dc, sign * step, board.rows(), board.cols()) {
                Some(p) if board.get(p) == Some(piece) => count += 1,
                _ => break,
            }
        }
    }
    count
}

/// True if `piece` standing on `pos` completes four in a row. The board is
/// read as-is everywhere else, so `pos` may still be empty.
#[inline]
pub fn wins_if_placed(board: &Board, pos: Pos, piece: Piece) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_through(board, pos, piece, dr, dc) >= WIN_LENGTH)
}

/// Fast win check through the most recently placed piece.
#[inline]
pub fn check_win_at(board: &Board, pos: Pos) -> bool {
    match board.get(pos) {
        Some(piece) => wins_if_placed(board, pos, piece),
        None => false,
    }
}

/// Four cells of `piece` starting at `pos` and stepping `(dr, dc)`
fn four_from(board: &Board, pos: Pos, piece: Piece, dr: isize, dc: isize) -> bool {
    (1..WIN_LENGTH as isize).all(|step| {
        pos.offset(dr, dc, step, board.rows(), board.cols())
            .is_some_and(|p| board.get(p) == Some(piece))
    })
}

/// Full-board outcome scan.
///
/// Valid for any board, including positions that alternating play could not
/// reach. If both colors somehow hold a four, the first found in row-major
/// order is reported.
pub fn scan_outcome(board: &Board) -> GameOutcome {
    for (pos, piece) in board.pieces() {
        for &(dr, dc) in &DIRECTIONS {
            if four_from(board, pos, piece, dr, dc) {
                return GameOutcome::Win(piece);
            }
        }
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Cells of a winning run through `pos`, for highlighting.
///
/// Returns the first four cells of the run in axis order.
pub fn winning_line(board: &Board, pos: Pos) -> Option<[Pos; WIN_LENGTH]> {
    let piece = board.get(pos)?;

    for &(dr, dc) in &DIRECTIONS {
        // Walk back to the start of the run
        let mut start = pos;
        while let Some(prev) = start.offset(dr, dc, -1, board.rows(), board.cols()) {
            if board.get(prev) != Some(piece) {
                break;
            }
            start = prev;
        }

        if four_from(board, start, piece, dr, dc) {
            let mut line = [start; WIN_LENGTH];
            for (step, cell) in line.iter_mut().enumerate().skip(1) {
                *cell = start.offset(dr, dc, step as isize, board.rows(), board.cols())?;
            }
            return Some(line);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_horizontal_win() {
        let b = board(
            ".......\n\
             .......\n\
             .......\n\
             .......\n\
             ...YYY.\n\
             .RRRR..",
        );
        assert_eq!(scan_outcome(&b), GameOutcome::Win(Piece::Red));
        assert!(check_win_at(&b, Pos::new(5, 1)));
        assert!(check_win_at(&b, Pos::new(5, 4)));
        assert!(!check_win_at(&b, Pos::new(4, 4)));
    }

    #[test]
    fn test_vertical_win() {
        let b = board(
            ".......\n\
             .......\n\
             ..Y....\n\
             ..Y.R..\n\
             ..Y.R..\n\
             ..Y.R..",
        );
        assert_eq!(scan_outcome(&b), GameOutcome::Win(Piece::Yellow));
        assert!(check_win_at(&b, Pos::new(2, 2)));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let b = board(
            ".......\n\
             .......\n\
             R......\n\
             YR.....\n\
             YYR....\n\
             YYRR...",
        );
        assert_eq!(scan_outcome(&b), GameOutcome::Win(Piece::Red));
        assert!(check_win_at(&b, Pos::new(2, 0)));
        assert!(check_win_at(&b, Pos::new(5, 3)));
    }

    #[test]
    fn test_diagonal_up_right_win() {
        let b = board(
            ".......\n\
             .......\n\
             ......Y\n\
             .....YR\n\
             ....YRR\n\
             ...YRRY",
        );
        assert_eq!(scan_outcome(&b), GameOutcome::Win(Piece::Yellow));
        assert!(check_win_at(&b, Pos::new(5, 3)));
        assert!(check_win_at(&b, Pos::new(2, 6)));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let b = board(
            ".......\n\
             .......\n\
             .......\n\
             .......\n\
             .......\n\
             RRR.YYY",
        );
        assert_eq!(scan_outcome(&b), GameOutcome::InProgress);
        assert!(!check_win_at(&b, Pos::new(5, 2)));
        assert!(!check_win_at(&b, Pos::new(5, 4)));
    }

    #[test]
    fn test_middle_placement_completes_run() {
        // RR.R with the gap filled last
        let mut b = board(
            ".......\n\
             .......\n\
             .......\n\
             .......\n\
             .......\n\
             RR.R...",
        );
        assert!(wins_if_placed(&b, Pos::new(5, 2), Piece::Red));
        assert!(!wins_if_placed(&b, Pos::new(5, 2), Piece::Yellow));
        b.place_piece(Pos::new(5, 2), Piece::Red).unwrap();
        assert!(check_win_at(&b, Pos::new(5, 2)));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let b = Board::new();
        assert!(!check_win_at(&b, Pos::new(5, 3)));
        assert_eq!(scan_outcome(&b), GameOutcome::InProgress);
    }

    #[test]
    fn test_full_board_draw() {
        // Column pairs alternate so no line of four exists anywhere
        let b = board(
            "RRYYRRY\n\
             YYRRYYR\n\
             RRYYRRY\n\
             YYRRYYR\n\
             RRYYRRY\n\
             YYRRYYR",
        );
        assert!(b.is_full());
        assert_eq!(scan_outcome(&b), GameOutcome::Draw);
        assert!(GameOutcome::Draw.is_over());
        assert_eq!(GameOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let b = board(
            "RRRRYYR\n\
             YYRRYYR\n\
             RRYYRRY\n\
             YYRRYYR\n\
             RRYYRRY\n\
             YYRRYYR",
        );
        assert_eq!(scan_outcome(&b), GameOutcome::Win(Piece::Red));
    }

    #[test]
    fn test_non_alternating_board_scanned() {
        // Floating pieces with no support still count for the global scan
        let mut b = Board::new();
        for col in 2..6 {
            b.place_piece(Pos::new(0, col), Piece::Yellow).unwrap();
        }
        assert_eq!(scan_outcome(&b), GameOutcome::Win(Piece::Yellow));
    }

    #[test]
    fn test_small_board_cannot_win() {
        let b = board("RRR\nRRR\nRRR");
        assert_eq!(scan_outcome(&b), GameOutcome::Draw);
        assert!(!check_win_at(&b, Pos::new(1, 1)));
    }

    #[test]
    fn test_winning_line_vertical() {
        let b = board(
            ".......\n\
             .......\n\
             ..Y....\n\
             ..Y.R..\n\
             ..Y.R..\n\
             ..Y.R..",
        );
        let line = winning_line(&b, Pos::new(4, 2)).unwrap();
        assert_eq!(
            line,
            [Pos::new(2, 2), Pos::new(3, 2), Pos::new(4, 2), Pos::new(5, 2)]
        );
        assert_eq!(winning_line(&b, Pos::new(5, 4)), None);
        assert_eq!(winning_line(&b, Pos::new(0, 0)), None);
    }

    #[test]
    fn test_winning_line_diagonal_up() {
        let b = board(
            ".......\n\
             .......\n\
             ......Y\n\
             .....YR\n\
             ....YRR\n\
             ...YRRY",
        );
        let line = winning_line(&b, Pos::new(4, 4)).unwrap();
        assert_eq!(
            line,
            [Pos::new(5, 3), Pos::new(4, 4), Pos::new(3, 5), Pos::new(2, 6)]
        );
    }
}
