//! Theme constants for the Connect Four GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(30, 80, 180);
pub const HOLE: Color32 = Color32::from_rgb(20, 24, 36);
pub const COLUMN_HOVER: Color32 = Color32::from_rgb(55, 110, 210);

// Disc colors
pub const RED_DISC: Color32 = Color32::from_rgb(220, 45, 45);
pub const RED_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(250, 110, 100);
pub const YELLOW_DISC: Color32 = Color32::from_rgb(245, 205, 40);
pub const YELLOW_DISC_HIGHLIGHT: Color32 = Color32::from_rgb(255, 235, 130);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 250, 252);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const SUGGESTION: Color32 = Color32::from_rgb(80, 200, 120);

// Panel text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// AI timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const DISC_RADIUS_RATIO: f32 = 0.4;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

pub fn disc_color(piece: crate::Piece) -> Color32 {
    match piece {
        crate::Piece::Red => RED_DISC,
        crate::Piece::Yellow => YELLOW_DISC,
    }
}

pub fn disc_highlight(piece: crate::Piece) -> Color32 {
    match piece {
        crate::Piece::Red => RED_DISC_HIGHLIGHT,
        crate::Piece::Yellow => YELLOW_DISC_HIGHLIGHT,
    }
}

/// Translucent disc previewing a drop
pub fn preview_color(piece: crate::Piece) -> Color32 {
    let [r, g, b, _] = disc_color(piece).to_array();
    Color32::from_rgba_unmultiplied(r, g, b, 110)
}
