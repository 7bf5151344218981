//! Solution pool
//!
//! The candidate secret words. One is drawn uniformly at random per game,
//! both at startup and on every new game.

use super::WordListError;
use crate::core::Word;
use rand::Rng;

/// Non-empty list of possible solutions
#[derive(Debug, Clone)]
pub struct SolutionPool {
    words: Vec<Word>,
}

impl SolutionPool {
    /// Create a pool from candidate words
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if `words` is empty; a game cannot
    /// start without at least one possible solution.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty("solution pool"));
        }
        Ok(Self { words })
    }

    /// Draw a solution uniformly at random
    ///
    /// Consecutive draws may repeat.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Word {
        self.words[rng.random_range(0..self.words.len())]
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: emptiness is rejected at construction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
