//! Interactive TUI
//!
//! Full-screen game: board, reveal animation and on-screen keyboard.

mod app;
mod rendering;

pub use app::{App, Statistics, run_tui};
