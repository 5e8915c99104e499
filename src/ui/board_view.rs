//! Board rendering for the Connect Four GUI

use crate::{Board, Piece, Pos, WIN_LENGTH};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    cols: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
            cols: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Piece,
        last_move: Option<Pos>,
        suggested_column: Option<usize>,
        winning_line: Option<[Pos; WIN_LENGTH]>,
        accepting_input: bool,
    ) -> Option<usize> {
        let available = ui.available_size() - Vec2::splat(20.0);
        let (rows, cols) = (board.rows() as f32, board.cols() as f32);

        // Square cells, one extra row on top for the drop preview
        self.cell_size = ((available.x - 2.0 * BOARD_MARGIN) / cols)
            .min((available.y - 2.0 * BOARD_MARGIN) / (rows + 1.0))
            .max(8.0);
        self.cols = board.cols();

        let size = Vec2::new(
            cols * self.cell_size + 2.0 * BOARD_MARGIN,
            (rows + 1.0) * self.cell_size + 2.0 * BOARD_MARGIN,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());

        self.board_rect = Rect::from_min_size(
            response.rect.min + Vec2::new(0.0, self.cell_size),
            Vec2::new(size.x, size.y - self.cell_size),
        );

        let hovered_col = response
            .hover_pos()
            .and_then(|p| self.screen_to_column(p))
            .filter(|_| accepting_input);

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        if let Some(col) = hovered_col {
            self.draw_column_highlight(&painter, board, col);
        }

        self.draw_discs(&painter, board);

        if let Some(pos) = last_move {
            painter.circle_filled(self.cell_center(pos), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if let Some(col) = suggested_column {
            self.draw_suggestion(&painter, col);
        }

        let mut clicked_col = None;

        if let Some(col) = hovered_col {
            if !board.is_column_full(col) {
                painter.circle_filled(
                    self.preview_center(col),
                    self.disc_radius(),
                    preview_color(current_turn),
                );
                if response.clicked() {
                    clicked_col = Some(col);
                }
            }
        }

        clicked_col
    }

    #[inline]
    fn disc_radius(&self) -> f32 {
        self.cell_size * DISC_RADIUS_RATIO
    }

    fn draw_column_highlight(&self, painter: &Painter, board: &Board, col: usize) {
        let left = self.board_rect.min.x + BOARD_MARGIN + col as f32 * self.cell_size;
        let rect = Rect::from_min_size(
            Pos2::new(left, self.board_rect.min.y + BOARD_MARGIN),
            Vec2::new(self.cell_size, board.rows() as f32 * self.cell_size),
        );
        painter.rect_filled(rect, CornerRadius::same(4), COLUMN_HOVER);
    }

    /// Draw every hole, filled or empty
    fn draw_discs(&self, painter: &Painter, board: &Board) {
        let radius = self.disc_radius();

        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let pos = Pos::new(row, col);
                let center = self.cell_center(pos);

                match board.get(pos) {
                    Some(piece) => {
                        painter.circle_filled(
                            center + Vec2::new(1.5, 1.5),
                            radius,
                            Color32::from_rgba_unmultiplied(0, 0, 0, 70),
                        );
                        painter.circle_filled(center, radius, disc_color(piece));
                        painter.circle_stroke(
                            center,
                            radius * 0.75,
                            Stroke::new(radius * 0.08, disc_highlight(piece)),
                        );
                    }
                    None => {
                        painter.circle_filled(center, radius, HOLE);
                    }
                }
            }
        }
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment([self.cell_center(pair[0]), self.cell_center(pair[1])], stroke);
        }

        for pos in line {
            painter.circle_stroke(self.cell_center(*pos), self.disc_radius() + 3.0, stroke);
        }
    }

    /// Arrow above the suggested column
    fn draw_suggestion(&self, painter: &Painter, col: usize) {
        let center = self.preview_center(col);
        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            "▼",
            egui::FontId::proportional(self.cell_size * 0.5),
            SUGGESTION,
        );
    }

    /// Convert a screen position to a column, if it is over the board
    pub fn screen_to_column(&self, screen_pos: Pos2) -> Option<usize> {
        let x = screen_pos.x - self.board_rect.min.x - BOARD_MARGIN;
        if x < 0.0 || screen_pos.y > self.board_rect.max.y {
            return None;
        }
        let col = (x / self.cell_size).floor() as usize;
        (col < self.cols).then_some(col)
    }

    /// Center of a board cell on screen
    pub fn cell_center(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }

    /// Center of the preview slot above a column
    fn preview_center(&self, col: usize) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (col as f32 + 0.5) * self.cell_size;
        Pos2::new(x, self.board_rect.min.y - self.cell_size * 0.5)
    }
}
