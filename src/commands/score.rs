//! One-shot scoring command
//!
//! Scores a guess against a chosen solution without starting a game.

use crate::core::{Verdict, WORD_LENGTH, Word, WordError, is_solved, score};
use serde::Serialize;

/// Result of scoring one guess
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub guess: Word,
    pub solution: Word,
    pub verdicts: [Verdict; WORD_LENGTH],
    pub solved: bool,
}

/// Score `guess` against `solution`
///
/// Neither word has to be in a word list; any five letters will do.
///
/// # Errors
///
/// Returns an error if either input is not five ASCII letters.
pub fn score_words(guess: &str, solution: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let verdicts = score(&guess, &solution);

    Ok(ScoreResult {
        guess,
        solution,
        verdicts,
        solved: is_solved(&verdicts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_case_insensitively() {
        let lower = score_words("trace", "crane").unwrap();
        let upper = score_words("TRACE", "Crane").unwrap();
        assert_eq!(lower.verdicts, upper.verdicts);
        assert!(!lower.solved);
    }

    #[test]
    fn exact_match_is_solved() {
        assert!(score_words("robot", "ROBOT").unwrap().solved);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            score_words("tr4ce", "crane").unwrap_err(),
            WordError::InvalidCharacters
        );
        assert_eq!(
            score_words("trace", "cranes").unwrap_err(),
            WordError::InvalidLength(6)
        );
    }

    #[test]
    fn serializes_to_json() {
        let result = score_words("trace", "crane").unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["guess"], "TRACE");
        assert_eq!(json["solved"], false);
        assert_eq!(
            json["verdicts"],
            serde_json::json!(["absent", "correct", "correct", "present", "correct"])
        );
    }
}
