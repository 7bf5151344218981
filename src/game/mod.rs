//! Turn-based game state machine
//!
//! - [`GameState`]: board, cursor, keyboard colours, status and notice
//! - [`Action`] / [`Effect`]: what goes in, what the frontend should animate
//! - [`apply`]: the pure reducer
//! - [`Game`]: owns the state plus word lists and randomness

mod action;
mod reducer;
mod session;
mod state;

pub use action::{Action, Effect};
pub use reducer::apply;
pub use session::Game;
pub use state::{CellState, Cursor, GameState, Notice, Row, Status};
