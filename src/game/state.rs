//! Game state value
//!
//! Everything the presentation layer needs to draw a frame lives here, in a
//! plain serializable value. Only the reducer changes it.

use crate::core::{KeyboardVerdicts, Letter, MAX_GUESSES, Verdict, WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One board row; `None` is an empty cell
pub type Row = [Option<Letter>; WORD_LENGTH];

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// Message shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// Submitted row is not a guessable word; auto-dismissed by the frontend
    NotInWordList,
    Won,
    Lost,
}

impl Notice {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::NotInWordList => "Not in word list",
            Self::Won => "You Win!",
            Self::Lost => "Game Over!",
        }
    }

    /// Whether the notice should disappear on its own after a short delay
    #[must_use]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::NotInWordList)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Next writable cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// What a single board cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// Typed but not yet submitted
    Pending,
    Correct,
    Present,
    Absent,
}

impl From<Verdict> for CellState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Self::Correct,
            Verdict::Present => Self::Present,
            Verdict::Absent => Self::Absent,
        }
    }
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(super) solution: Word,
    pub(super) board: [Row; MAX_GUESSES],
    pub(super) verdicts: [Option<[Verdict; WORD_LENGTH]>; MAX_GUESSES],
    pub(super) cursor: Cursor,
    pub(super) keyboard: KeyboardVerdicts,
    pub(super) status: Status,
    pub(super) notice: Option<Notice>,
}

impl GameState {
    /// Fresh game with an empty board
    #[must_use]
    pub fn new(solution: Word) -> Self {
        Self {
            solution,
            board: [[None; WORD_LENGTH]; MAX_GUESSES],
            verdicts: [None; MAX_GUESSES],
            cursor: Cursor::default(),
            keyboard: KeyboardVerdicts::new(),
            status: Status::InProgress,
            notice: None,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &[Row; MAX_GUESSES] {
        &self.board
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardVerdicts {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn notice(&self) -> Option<Notice> {
        self.notice
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != Status::InProgress
    }

    /// The solution, but only once the game has ended
    #[must_use]
    pub fn revealed_solution(&self) -> Option<Word> {
        self.is_over().then_some(self.solution)
    }

    /// Verdicts for a submitted row
    #[must_use]
    pub fn row_verdicts(&self, row: usize) -> Option<&[Verdict; WORD_LENGTH]> {
        self.verdicts.get(row)?.as_ref()
    }

    /// Number of rows submitted so far
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.verdicts.iter().filter(|row| row.is_some()).count()
    }

    /// What the cell at (`row`, `col`) should display
    ///
    /// # Panics
    /// Panics if `row >= MAX_GUESSES` or `col >= WORD_LENGTH`
    #[must_use]
    pub fn cell_state(&self, row: usize, col: usize) -> CellState {
        match (self.board[row][col], self.verdicts[row]) {
            (None, _) => CellState::Empty,
            (Some(_), None) => CellState::Pending,
            (Some(_), Some(verdicts)) => verdicts[col].into(),
        }
    }

    /// Letters of `row` if every cell is filled
    #[must_use]
    pub fn filled_row(&self, row: usize) -> Option<[Letter; WORD_LENGTH]> {
        let letters: Vec<Letter> = self.board.get(row)?.iter().copied().collect::<Option<_>>()?;
        letters.try_into().ok()
    }

    /// Submitted guesses paired with their verdicts, top to bottom
    pub fn scored_rows(&self) -> impl Iterator<Item = (Word, [Verdict; WORD_LENGTH])> + '_ {
        self.verdicts
            .iter()
            .enumerate()
            .filter_map(|(row, verdicts)| {
                let verdicts = (*verdicts)?;
                Some((Word::from_letters(self.filled_row(row)?), verdicts))
            })
    }
}
