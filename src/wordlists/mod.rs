//! Word lists for the game
//!
//! Embedded lists compiled into the binary, file loading, the guessable-word
//! lookup and the solution pool.

mod embedded;
pub mod loader;
mod lookup;
mod pool;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use lookup::WordLookup;
pub use pool::SolutionPool;

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing word lists at startup
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is empty")]
    Empty(&'static str),
}
