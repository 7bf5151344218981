//! Guess scoring
//!
//! Each guessed letter gets one [`Verdict`]:
//! - Correct (green): right letter, right position
//! - Present (yellow): letter is in the word, wrong position
//! - Absent (gray): letter not in the word, or every occurrence already used up
//!
//! Verdicts are ordered `Absent < Present < Correct`, which is the priority
//! the keyboard aggregation relies on.

use super::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Absent,
    Present,
    Correct,
}

impl Verdict {
    /// Emoji square for this verdict
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Score `guess` against `solution`
///
/// Implements the duplicate-aware two-pass rule:
/// 1. First pass: mark exact matches and remove them from the solution's letter budget
/// 2. Second pass: mark misplaced letters while budget for that letter remains
///
/// The first pass must finish before the second starts, otherwise an early
/// yellow could consume a letter that a later green needs.
///
/// # Examples
/// ```
/// use wordle_game::core::{Verdict, Word, score};
///
/// let guess = Word::new("crane").unwrap();
/// let solution = Word::new("slate").unwrap();
///
/// // C(gray) R(gray) A(green) N(gray) E(green)
/// assert_eq!(
///     score(&guess, &solution),
///     [Verdict::Absent, Verdict::Absent, Verdict::Correct, Verdict::Absent, Verdict::Correct],
/// );
/// ```
#[must_use]
pub fn score(guess: &Word, solution: &Word) -> [Verdict; WORD_LENGTH] {
    let mut result = [Verdict::Absent; WORD_LENGTH];
    let mut available = solution.letter_counts();

    // Index needed to read both words and write result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        let letter = guess.letter_at(i);
        if letter == solution.letter_at(i) {
            result[i] = Verdict::Correct;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&guess.letter_at(i))
            && *count > 0
        {
            result[i] = Verdict::Present;
            *count -= 1;
        }
    }

    result
}

/// Check whether every position came back green
#[must_use]
pub fn is_solved(verdicts: &[Verdict; WORD_LENGTH]) -> bool {
    verdicts.iter().all(|&v| v == Verdict::Correct)
}

/// Render a scored row as emoji squares
///
/// # Examples
/// ```
/// use wordle_game::core::{Verdict, row_to_emoji};
///
/// let row = [Verdict::Correct, Verdict::Present, Verdict::Absent, Verdict::Correct, Verdict::Present];
/// assert_eq!(row_to_emoji(&row), "🟩🟨⬜🟩🟨");
/// ```
#[must_use]
pub fn row_to_emoji(verdicts: &[Verdict]) -> String {
    verdicts.iter().map(|v| v.symbol()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;
    use Verdict::{Absent, Correct, Present};

    fn scored(guess: &str, solution: &str) -> [Verdict; WORD_LENGTH] {
        score(&Word::new(guess).unwrap(), &Word::new(solution).unwrap())
    }

    #[test]
    fn all_absent() {
        assert_eq!(scored("abcde", "fghij"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn all_correct() {
        let verdicts = scored("crane", "crane");
        assert!(is_solved(&verdicts));
    }

    #[test]
    fn trace_against_crane() {
        // T absent, R and A in place, C misplaced, E in place
        assert_eq!(
            scored("trace", "crane"),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn duplicate_letters_both_present() {
        // ERASE has two E's, neither at positions 2 or 3
        assert_eq!(
            scored("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // FLOOR has two O's; the second guessed O is green, the first yellow
        assert_eq!(
            scored("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn later_green_not_starved_by_earlier_yellow() {
        // Only one L in SLATE, and it is matched at position 1
        assert_eq!(
            scored("llama", "slate"),
            [Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn excess_duplicates_are_absent() {
        // ABBEY has two B's; the third guessed B gets nothing
        assert_eq!(
            scored("bbbxx", "abbey"),
            [Absent, Correct, Correct, Absent, Absent]
        );
    }

    #[test]
    fn marks_never_exceed_solution_count() {
        let words = [
            "speed", "erase", "robot", "floor", "aaaaa", "abbey", "llama", "eerie", "geese",
            "crane", "trace", "melee",
        ];
        for guess in words {
            for solution in words {
                let g = Word::new(guess).unwrap();
                let s = Word::new(solution).unwrap();
                let verdicts = score(&g, &s);

                for letter in g.letters() {
                    let marked = g
                        .letters()
                        .iter()
                        .zip(&verdicts)
                        .filter(|&(l, v)| l == letter && *v != Absent)
                        .count();
                    let available = s.letters().iter().filter(|&l| l == letter).count();
                    assert!(
                        marked <= available,
                        "{guess} vs {solution}: {letter} marked {marked} times, only {available} in solution"
                    );
                }
            }
        }
    }

    #[test]
    fn solved_only_for_identical_words() {
        let words = ["crane", "caner", "nacre", "rance", "crank", "crane"];
        for guess in words {
            for solution in words {
                let verdicts = scored(guess, solution);
                assert_eq!(is_solved(&verdicts), guess == solution);
            }
        }
    }

    #[test]
    fn present_needs_letter_in_solution() {
        let verdicts = scored("zebra", "crane");
        let z = Letter::from_char('z').unwrap();
        assert!(!Word::new("crane").unwrap().has_letter(z));
        assert_eq!(verdicts[0], Absent);
    }

    #[test]
    fn verdict_priority_order() {
        assert!(Correct > Present);
        assert!(Present > Absent);
    }

    #[test]
    fn emoji_row() {
        assert_eq!(row_to_emoji(&scored("trace", "crane")), "⬜🟩🟩🟨🟩");
    }
}
