//! Evaluation module for Connect Four positions
//!
//! The evaluation considers:
//! - Decided games (win/loss sentinels, draw)
//! - Per-piece run potential along the four axes
//! - One-move winning threats for either side

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_cell, evaluate_direction, has_immediate_win};
pub use patterns::EvalScore;
