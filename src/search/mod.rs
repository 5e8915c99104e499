//! Search module for the Connect Four AI
//!
//! Depth-limited minimax with alpha-beta pruning over legal columns.

pub mod alphabeta;

pub use alphabeta::{choose_move, search, SearchResult, SearchStats};
