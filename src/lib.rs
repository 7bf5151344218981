//! Wordle Game
//!
//! Guess the hidden five-letter word in six tries, with per-letter feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Word, Verdict, score};
//!
//! let guess = Word::new("trace").unwrap();
//! let solution = Word::new("crane").unwrap();
//!
//! let verdicts = score(&guess, &solution);
//! assert_eq!(verdicts[1], Verdict::Correct);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
