//! Terminal output formatting
//!
//! Coloured tiles, keyboard and banners for line-mode play.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, write_board, write_game_over};
