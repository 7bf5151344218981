//! Core domain types for the game
//!
//! Words, the scorer and keyboard aggregation. Everything here is pure:
//! no I/O, no randomness, no game state.

mod keyboard;
mod verdict;
mod word;

pub use keyboard::{KeyboardVerdicts, aggregate};
pub use verdict::{Verdict, is_solved, row_to_emoji, score};
pub use word::{Letter, Word, WordError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Rows on the board
pub const MAX_GUESSES: usize = 6;
