//! Guessable-word membership

use crate::core::{Letter, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;

/// Set of words accepted on submit
///
/// Words are normalised on the way in, so membership is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WordLookup {
    words: FxHashSet<Word>,
}

impl WordLookup {
    #[must_use]
    pub fn new<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        Self {
            words: words.into_iter().copied().collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Check a completed board row
    #[must_use]
    pub fn contains_letters(&self, letters: &[Letter; WORD_LENGTH]) -> bool {
        self.contains(&Word::from_letters(*letters))
    }

    /// Check raw text of either case; anything that is not a word is rejected
    #[must_use]
    pub fn contains_text(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains(&word))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> FromIterator<&'a Word> for WordLookup {
    fn from_iter<I: IntoIterator<Item = &'a Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn membership_is_case_insensitive() {
        let lookup = WordLookup::new(&words_from_slice(&["crane", "slate"]));

        assert!(lookup.contains_text("crane"));
        assert!(lookup.contains_text("CRANE"));
        assert!(lookup.contains_text("SlAtE"));
        assert!(!lookup.contains_text("zzzzz"));
    }

    #[test]
    fn invalid_text_is_not_a_member() {
        let lookup = WordLookup::new(&words_from_slice(&["crane"]));
        assert!(!lookup.contains_text("cran"));
        assert!(!lookup.contains_text("cranes"));
        assert!(!lookup.contains_text(""));
    }

    #[test]
    fn duplicates_collapse() {
        let lookup = WordLookup::new(&words_from_slice(&["crane", "CRANE", "crane"]));
        assert_eq!(lookup.len(), 1);
        assert!(!lookup.is_empty());
    }

    #[test]
    fn contains_letters_matches_contains() {
        let words = words_from_slice(&["robot"]);
        let lookup: WordLookup = words.iter().collect();
        assert!(lookup.contains_letters(words[0].letters()));
    }
}
