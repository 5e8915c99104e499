//! Board representation for Connect Four

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default number of rows (6x7 grid)
pub const DEFAULT_ROWS: usize = 6;
/// Default number of columns
pub const DEFAULT_COLS: usize = 7;
/// Largest supported side length
pub const MAX_DIMENSION: usize = 16;

/// Piece colors. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Red,
    Yellow,
}

impl Piece {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Piece {
        match self {
            Piece::Red => Piece::Yellow,
            Piece::Yellow => Piece::Red,
        }
    }

    /// Single-character symbol used by the text board format
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Piece::Red => 'R',
            Piece::Yellow => 'Y',
        }
    }

    #[inline]
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            'R' | 'r' => Some(Piece::Red),
            'Y' | 'y' => Some(Piece::Yellow),
            _ => None,
        }
    }
}

/// Cell position. Row 0 is the top row; pieces settle toward the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along direction `(dr, dc)`, or `None` when that
    /// leaves the `rows` x `cols` grid.
    #[inline]
    pub fn offset(self, dr: isize, dc: isize, steps: isize, rows: usize, cols: usize) -> Option<Pos> {
        let r = self.row as isize + dr * steps;
        let c = self.col as isize + dc * steps;
        if r >= 0 && (r as usize) < rows && c >= 0 && (c as usize) < cols {
            Some(Pos::new(r as usize, c as usize))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
