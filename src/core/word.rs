//! Letters and words
//!
//! A [`Word`] is exactly [`WORD_LENGTH`] uppercase ASCII letters. Input of
//! either case is accepted and normalised, so lookups are case-insensitive.

use super::WORD_LENGTH;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single uppercase letter `A`-`Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Normalise an ASCII letter of either case
    ///
    /// Returns `None` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Letter::from_char('Q'));
    /// assert!(Letter::from_char('7').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            Some(Self((ch as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// The uppercase character
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl TryFrom<char> for Letter {
    type Error = WordError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(WordError::InvalidCharacters)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A five-letter word, stored uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: [Letter; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from text of either case
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut letters = [Letter(b'A'); WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::from_char(ch).ok_or(WordError::InvalidCharacters)?;
        }

        Ok(Self { letters })
    }

    /// Build a word from an already-validated row of letters
    #[inline]
    #[must_use]
    pub const fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        Self { letters }
    }

    /// The letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Get the count of each letter in the word
    ///
    /// Used by the scorer to budget duplicate letters.
    #[inline]
    pub(crate) fn letter_counts(&self) -> FxHashMap<Letter, u8> {
        let mut counts = FxHashMap::default();
        for &letter in &self.letters {
            *counts.entry(letter).or_insert(0) += 1;
        }
        counts
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::new(text)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.to_string()
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.letters {
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
