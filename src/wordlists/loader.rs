//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordListError;
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are ignored. Entries that are not valid five-letter words are
/// skipped with a warning rather than failing the whole list.
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_lines(&content);
    tracing::info!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                tracing::warn!(entry = line, %err, "Skipping word list entry");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].to_string(), "CRANE");
        assert_eq!(words[2].to_string(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].to_string(), "SLATE");
    }

    #[test]
    fn parse_lines_ignores_blanks_and_whitespace() {
        let words = parse_lines("crane\n\n  slate \r\nno\n");
        assert_eq!(words, words_from_slice(&["crane", "slate"]));
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_game_loader_{}.txt", std::process::id()));
        fs::write(&path, "crane\nTRACE\nbad!!\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, words_from_slice(&["crane", "trace"]));
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
