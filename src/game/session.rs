//! The Game component
//!
//! Owns a [`GameState`] together with everything the reducer needs from the
//! outside world: the guessable-word lookup, the solution pool and a random
//! source for drawing solutions.

use super::action::{Action, Effect};
use super::reducer::apply;
use super::state::{GameState, Status};
use crate::wordlists::{SolutionPool, WordLookup};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A running game session
pub struct Game<R: Rng = StdRng> {
    state: GameState,
    lookup: WordLookup,
    pool: SolutionPool,
    rng: R,
}

impl Game<StdRng> {
    /// Session with a seeded generator, or one seeded from the OS
    #[must_use]
    pub fn seeded(lookup: WordLookup, pool: SolutionPool, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::new(lookup, pool, rng)
    }
}

impl<R: Rng> Game<R> {
    /// Start a session and draw the first solution
    pub fn new(lookup: WordLookup, pool: SolutionPool, mut rng: R) -> Self {
        let solution = pool.draw(&mut rng);
        tracing::debug!(%solution, pool = pool.len(), "New game");

        Self {
            state: GameState::new(solution),
            lookup,
            pool,
            rng,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one action through the state machine
    pub fn dispatch(&mut self, action: Action) -> Option<Effect> {
        let was_over = self.state.is_over();
        let (state, effect) = apply(self.state.clone(), action, &self.lookup);
        self.state = state;

        match effect {
            Some(Effect::Rejected { row }) => {
                tracing::debug!(row, "Guess rejected: not in word list");
            }
            Some(Effect::Accepted { row }) => {
                tracing::debug!(row, "Guess accepted");
            }
            Some(Effect::Typed { .. }) | None => {}
        }

        if !was_over && self.state.is_over() {
            let guesses = self.state.guesses_used();
            match self.state.status() {
                Status::Won => tracing::info!(guesses, "Game won"),
                Status::Lost => tracing::info!(guesses, "Game lost"),
                Status::InProgress => {}
            }
        }

        effect
    }

    /// Abandon the current game and start another from the same pool
    pub fn new_game(&mut self) {
        let solution = self.pool.draw(&mut self.rng);
        tracing::debug!(%solution, "New game");
        self.dispatch(Action::Reset(solution));
    }
}
