//! Player actions and the effects they produce

use crate::core::{Letter, Word};

/// Logical input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a letter into the next cell
    Letter(Letter),
    /// Erase the last typed cell
    Delete,
    /// Submit the current row
    Submit,
    /// Start over with the given solution
    Reset(Word),
    /// Clear a transient notice
    DismissNotice,
}

impl Action {
    /// Map a key label to an action
    ///
    /// Accepts the labels of the on-screen keyboard: a single ASCII letter of
    /// either case, `"Enter"` or `"Backspace"`. Anything else is ignored.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::Action;
    ///
    /// assert_eq!(Action::from_key("Enter"), Some(Action::Submit));
    /// assert_eq!(Action::from_key("Backspace"), Some(Action::Delete));
    /// assert!(matches!(Action::from_key("q"), Some(Action::Letter(_))));
    /// assert_eq!(Action::from_key("Tab"), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Letter::from_char(ch).map(Self::Letter),
                    _ => None,
                }
            }
        }
    }
}

/// Animation intent emitted by a transition
///
/// The frontend decides what to play; the state is already final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A letter landed in this cell
    Typed { row: usize, col: usize },
    /// Row submitted but not a word; shake it
    Rejected { row: usize },
    /// Row scored; reveal its verdicts
    Accepted { row: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_of_either_case() {
        let upper = Action::from_key("A");
        assert_eq!(upper, Action::from_key("a"));
        assert_eq!(upper, Letter::from_char('A').map(Action::Letter));
    }

    #[test]
    fn other_keys_ignored() {
        for key in ["", "1", "Escape", "ab", " ", "Shift", "é"] {
            assert_eq!(Action::from_key(key), None, "{key:?} should be ignored");
        }
    }
}
