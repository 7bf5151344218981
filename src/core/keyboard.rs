//! Keyboard feedback
//!
//! Folds per-cell verdicts into the best verdict known for each letter.
//! Priority is correct > present > absent, and nothing is ever downgraded.

use super::{Letter, Verdict, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Best known verdict per letter across all submitted guesses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardVerdicts(FxHashMap<Letter, Verdict>);

impl KeyboardVerdicts {
    /// Empty map: no letter tried yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verdict shown for a key, if the letter has been tried
    #[must_use]
    pub fn get(&self, letter: Letter) -> Option<Verdict> {
        self.0.get(&letter).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold one scored row in, cell by cell, left to right
    #[must_use]
    pub fn with_row(self, guess: &Word, verdicts: &[Verdict; WORD_LENGTH]) -> Self {
        guess
            .letters()
            .iter()
            .zip(verdicts)
            .fold(self, |map, (&letter, &verdict)| aggregate(map, letter, verdict))
    }

    /// Rebuild the map from a history of scored cells
    ///
    /// The TUI uses this to colour only the cells whose reveal has finished.
    pub fn from_cells(cells: impl IntoIterator<Item = (Letter, Verdict)>) -> Self {
        cells
            .into_iter()
            .fold(Self::new(), |map, (letter, verdict)| {
                aggregate(map, letter, verdict)
            })
    }
}

/// Record `verdict` for `letter`, keeping whichever is better
///
/// # Examples
/// ```
/// use wordle_game::core::{KeyboardVerdicts, Letter, Verdict, aggregate};
///
/// let a = Letter::from_char('a').unwrap();
/// let map = aggregate(KeyboardVerdicts::new(), a, Verdict::Correct);
/// let map = aggregate(map, a, Verdict::Absent);
/// assert_eq!(map.get(a), Some(Verdict::Correct));
/// ```
#[must_use]
pub fn aggregate(mut map: KeyboardVerdicts, letter: Letter, verdict: Verdict) -> KeyboardVerdicts {
    let slot = map.0.entry(letter).or_insert(verdict);
    if verdict > *slot {
        *slot = verdict;
    }
    map
}
