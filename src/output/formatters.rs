//! Formatting utilities for terminal output

use crate::core::{KeyboardVerdicts, Letter, Verdict, WORD_LENGTH, Word};
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Colour a single tile by its verdict
#[must_use]
pub fn tile(text: &str, verdict: Option<Verdict>) -> ColoredString {
    let padded = format!(" {text} ");
    match verdict {
        Some(Verdict::Correct) => padded.black().on_green().bold(),
        Some(Verdict::Present) => padded.black().on_yellow().bold(),
        Some(Verdict::Absent) => padded.white().on_bright_black(),
        None => padded.normal(),
    }
}

/// A scored guess as coloured tiles
#[must_use]
pub fn colored_row(guess: &Word, verdicts: &[Verdict; WORD_LENGTH]) -> String {
    guess
        .letters()
        .iter()
        .zip(verdicts)
        .map(|(letter, &verdict)| tile(&letter.to_string(), Some(verdict)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The keyboard, one line per row, coloured with what is known so far
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardVerdicts) -> Vec<String> {
    KEY_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: Vec<String> = row
                .chars()
                .filter_map(Letter::from_char)
                .map(|letter| tile(&letter.to_string(), keyboard.get(letter)).to_string())
                .collect();
            format!("{}{}", " ".repeat(i * 2), keys.join(""))
        })
        .collect()
}

/// Share-style summary, one emoji row per guess
#[must_use]
pub fn emoji_grid<'a>(rows: impl IntoIterator<Item = &'a [Verdict; WORD_LENGTH]>) -> String {
    rows.into_iter()
        .map(|verdicts| crate::core::row_to_emoji(verdicts))
        .collect::<Vec<_>>()
        .join("\n")
}
