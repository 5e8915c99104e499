//! Grid storage and the structural queries the rules and search build on

use std::fmt;
use std::str::FromStr;

use super::{Piece, Pos, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION};
use crate::error::{BoardError, MoveError};

/// Connect Four grid of `rows` x `cols` cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Piece>>,
}

impl Board {
    /// Standard 6x7 board
    pub fn new() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![None; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }

    /// Empty board with custom dimensions (each side 1..=16)
    pub fn with_size(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if !(1..=MAX_DIMENSION).contains(&rows) || !(1..=MAX_DIMENSION).contains(&cols) {
            return Err(BoardError::InvalidDimensions {
                rows,
                cols,
                max: MAX_DIMENSION,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell index, or `None` when `pos` is off the board
    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Get piece at position. Off-board positions read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_none()
    }

    /// Put a piece on a cell directly, ignoring gravity.
    /// Use `drop_piece` for game moves.
    #[inline]
    pub fn place_piece(&mut self, pos: Pos, piece: Piece) -> Result<(), MoveError> {
        let idx = self.index(pos).ok_or(MoveError::CellOutOfRange {
            row: pos.row,
            col: pos.col,
        })?;
        self.cells[idx] = Some(piece);
        Ok(())
    }

    /// Clear a cell, returning what was on it. Off-board positions are left
    /// alone.
    #[inline]
    pub fn remove_piece(&mut self, pos: Pos) -> Option<Piece> {
        let idx = self.index(pos)?;
        self.cells[idx].take()
    }

    /// True iff the top cell of `col` is occupied. Columns outside the
    /// board count as full since nothing can be dropped there.
    #[inline]
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || !self.is_empty(Pos::new(0, col))
    }

    /// Row a piece dropped into `col` would land on, scanning from the bottom.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.is_empty(Pos::new(row, col)))
    }

    /// Non-full columns in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece into a column. Returns where it landed.
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<Pos, MoveError> {
        if col >= self.cols {
            return Err(MoveError::ColumnOutOfRange {
                col,
                cols: self.cols,
            });
        }
        let row = self.lowest_empty_row(col).ok_or(MoveError::ColumnFull(col))?;
        let pos = Pos::new(row, col);
        self.place_piece(pos, piece)?;
        Ok(pos)
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Iterate over occupied cells in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.map(|p| (Pos::new(idx / cols, idx % cols), p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let c = self.get(Pos::new(row, col)).map_or('.', Piece::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the `Display` layout: one line per row, top row first, `.` for
/// empty cells and `R`/`Y` for pieces. Blank lines and spaces are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, Vec::len);
        let mut board = Board::with_size(rows, cols)?;

        for (row, line) in lines.iter().enumerate() {
            if line.len() != cols {
                return Err(BoardError::Parse(format!(
                    "row {row} has {} cells, expected {cols}",
                    line.len()
                )));
            }
            for (col, &c) in line.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(c).ok_or_else(|| {
                    BoardError::Parse(format!("unexpected character {c:?} at ({row}, {col})"))
                })?;
                board
                    .place_piece(Pos::new(row, col), piece)
                    .map_err(|e| BoardError::Parse(e.to_string()))?;
            }
        }

        Ok(board)
    }
}
