use super::*;
use crate::error::{BoardError, MoveError};

#[test]
fn test_piece_opponent() {
    assert_eq!(Piece::Red.opponent(), Piece::Yellow);
    assert_eq!(Piece::Yellow.opponent(), Piece::Red);
}

#[test]
fn test_board_constants() {
    assert_eq!(DEFAULT_ROWS, 6);
    assert_eq!(DEFAULT_COLS, 7);
    let board = Board::new();
    assert_eq!(board.rows(), 6);
    assert_eq!(board.cols(), 7);
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_with_size_rejects_bad_dimensions() {
    assert!(Board::with_size(4, 5).is_ok());
    assert_eq!(
        Board::with_size(0, 7),
        Err(BoardError::InvalidDimensions { rows: 0, cols: 7, max: MAX_DIMENSION })
    );
    assert!(Board::with_size(6, MAX_DIMENSION + 1).is_err());
}

#[test]
fn test_pos_offset_bounds() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.offset(1, 1, 2, 6, 7), Some(Pos::new(2, 2)));
    assert_eq!(pos.offset(-1, 0, 1, 6, 7), None);
    assert_eq!(Pos::new(5, 6).offset(0, 1, 1, 6, 7), None);
    assert_eq!(Pos::new(5, 6).offset(-1, -1, 3, 6, 7), Some(Pos::new(2, 3)));
    assert_eq!(Pos::new(5, 6).offset(1, -1, -3, 6, 7), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 6) < Pos::new(1, 0));
    assert!(Pos::new(2, 1) < Pos::new(2, 3));
}

#[test]
fn test_drop_piece_falls_to_bottom() {
    let mut board = Board::new();
    assert_eq!(board.drop_piece(3, Piece::Red), Ok(Pos::new(5, 3)));
    assert_eq!(board.drop_piece(3, Piece::Yellow), Ok(Pos::new(4, 3)));
    assert_eq!(board.get(Pos::new(5, 3)), Some(Piece::Red));
    assert_eq!(board.get(Pos::new(4, 3)), Some(Piece::Yellow));
    assert_eq!(board.lowest_empty_row(3), Some(3));
    assert_eq!(board.piece_count(), 2);
}

#[test]
fn test_full_column_rejected_without_mutation() {
    let mut board = Board::new();
    for i in 0..6 {
        let piece = if i % 2 == 0 { Piece::Red } else { Piece::Yellow };
        board.drop_piece(0, piece).unwrap();
    }
    assert!(board.is_column_full(0));
    assert_eq!(board.lowest_empty_row(0), None);

    let before = board.clone();
    assert_eq!(board.drop_piece(0, Piece::Red), Err(MoveError::ColumnFull(0)));
    assert_eq!(board, before);
}

#[test]
fn test_out_of_range_column() {
    let mut board = Board::new();
    assert!(board.is_column_full(7));
    assert_eq!(board.lowest_empty_row(7), None);
    assert_eq!(
        board.drop_piece(7, Piece::Red),
        Err(MoveError::ColumnOutOfRange { col: 7, cols: 7 })
    );
    assert_eq!(board.piece_count(), 0);
}

#[test]
fn test_legal_moves_ascending() {
    let mut board = Board::new();
    assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);

    for _ in 0..6 {
        board.drop_piece(2, Piece::Red).unwrap();
        board.drop_piece(5, Piece::Yellow).unwrap();
    }
    assert_eq!(board.legal_moves(), vec![0, 1, 3, 4, 6]);
}

#[test]
fn test_is_full() {
    let mut board = Board::with_size(2, 2).unwrap();
    assert!(!board.is_full());
    for col in 0..2 {
        board.drop_piece(col, Piece::Red).unwrap();
        board.drop_piece(col, Piece::Yellow).unwrap();
    }
    assert!(board.is_full());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_text_round_trip() {
    let text = "\
        .......\n\
        .......\n\
        .......\n\
        .......\n\
        ...Y...\n\
        ..RRY..\n";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.get(Pos::new(5, 2)), Some(Piece::Red));
    assert_eq!(board.get(Pos::new(4, 3)), Some(Piece::Yellow));
    assert_eq!(board.piece_count(), 4);
    assert_eq!(board.to_string(), text);
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(matches!("...\n..".parse::<Board>(), Err(BoardError::Parse(_))));
    assert!(matches!("..X\n...".parse::<Board>(), Err(BoardError::Parse(_))));
    assert!(matches!("".parse::<Board>(), Err(BoardError::InvalidDimensions { .. })));
}

#[test]
fn test_pieces_iterates_row_major() {
    let board: Board = "R..\n.Y.\n..R".parse().unwrap();
    let pieces: Vec<_> = board.pieces().collect();
    assert_eq!(
        pieces,
        vec![
            (Pos::new(0, 0), Piece::Red),
            (Pos::new(1, 1), Piece::Yellow),
            (Pos::new(2, 2), Piece::Red),
        ]
    );
}

#[test]
fn test_off_board_cells_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.place_piece(Pos::new(0, 7), Piece::Red),
        Err(MoveError::CellOutOfRange { row: 0, col: 7 })
    );
    assert_eq!(
        board.place_piece(Pos::new(6, 0), Piece::Red),
        Err(MoveError::CellOutOfRange { row: 6, col: 0 })
    );
    // Column 7 of row 0 must not wrap onto (1, 0)
    assert_eq!(board, Board::new());
    assert_eq!(board.get(Pos::new(0, 7)), None);
    assert_eq!(board.remove_piece(Pos::new(0, 7)), None);

    board.place_piece(Pos::new(1, 0), Piece::Yellow).unwrap();
    assert_eq!(board.get(Pos::new(0, 7)), None);
    assert_eq!(board.remove_piece(Pos::new(0, 7)), None);
    assert_eq!(board.get(Pos::new(1, 0)), Some(Piece::Yellow));
    assert_eq!(board.remove_piece(Pos::new(1, 0)), Some(Piece::Yellow));
    assert_eq!(board, Board::new());
}
