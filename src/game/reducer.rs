//! Game state machine
//!
//! [`apply`] is a pure function from (state, action) to the next state and an
//! optional [`Effect`]. Actions whose preconditions do not hold return the
//! state untouched.

use super::action::{Action, Effect};
use super::state::{Cursor, GameState, Notice, Status};
use crate::core::{Letter, MAX_GUESSES, WORD_LENGTH, Word, is_solved, score};
use crate::wordlists::WordLookup;

/// Apply one action
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::{Action, GameState, Status, apply};
/// use wordle_game::wordlists::WordLookup;
///
/// let solution = Word::new("crane").unwrap();
/// let lookup = WordLookup::new([&solution]);
///
/// let mut state = GameState::new(solution);
/// for key in ["C", "R", "A", "N", "E", "Enter"] {
///     state = apply(state, Action::from_key(key).unwrap(), &lookup).0;
/// }
/// assert_eq!(state.status(), Status::Won);
/// ```
#[must_use]
pub fn apply(state: GameState, action: Action, lookup: &WordLookup) -> (GameState, Option<Effect>) {
    match action {
        Action::Reset(solution) => (GameState::new(solution), None),
        Action::DismissNotice => (dismiss_notice(state), None),
        _ if state.is_over() => (state, None),
        Action::Letter(letter) => type_letter(state, letter),
        Action::Delete => (delete(state), None),
        Action::Submit => submit(state, lookup),
    }
}

fn type_letter(mut state: GameState, letter: Letter) -> (GameState, Option<Effect>) {
    let Cursor { row, col } = state.cursor;
    if col >= WORD_LENGTH {
        return (state, None);
    }

    state.board[row][col] = Some(letter);
    state.cursor.col += 1;
    (state, Some(Effect::Typed { row, col }))
}

fn delete(mut state: GameState) -> GameState {
    if state.cursor.col == 0 {
        return state;
    }

    state.cursor.col -= 1;
    let Cursor { row, col } = state.cursor;
    state.board[row][col] = None;
    state
}

fn submit(mut state: GameState, lookup: &WordLookup) -> (GameState, Option<Effect>) {
    let row = state.cursor.row;
    if state.cursor.col != WORD_LENGTH {
        return (state, None);
    }
    let Some(letters) = state.filled_row(row) else {
        return (state, None);
    };

    if !lookup.contains_letters(&letters) {
        state.notice = Some(Notice::NotInWordList);
        return (state, Some(Effect::Rejected { row }));
    }

    let guess = Word::from_letters(letters);
    let verdicts = score(&guess, &state.solution);
    state.verdicts[row] = Some(verdicts);
    state.keyboard = std::mem::take(&mut state.keyboard).with_row(&guess, &verdicts);
    state.notice = None;

    if is_solved(&verdicts) {
        state.status = Status::Won;
        state.notice = Some(Notice::Won);
    } else if row + 1 >= MAX_GUESSES {
        state.status = Status::Lost;
        state.notice = Some(Notice::Lost);
    } else {
        state.cursor = Cursor { row: row + 1, col: 0 };
    }

    (state, Some(Effect::Accepted { row }))
}

fn dismiss_notice(mut state: GameState) -> GameState {
    if state.notice.is_some_and(Notice::is_transient) {
        state.notice = None;
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict;
    use crate::game::CellState;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn lookup() -> WordLookup {
        WordLookup::new(&words_from_slice(&[
            "crane", "trace", "slate", "robot", "floor", "audio", "speed", "erase",
        ]))
    }

    fn type_word(mut state: GameState, text: &str, lookup: &WordLookup) -> GameState {
        for ch in text.chars() {
            let letter = Letter::from_char(ch).unwrap();
            state = apply(state, Action::Letter(letter), lookup).0;
        }
        state
    }

    fn guess(state: GameState, text: &str, lookup: &WordLookup) -> (GameState, Option<Effect>) {
        let state = type_word(state, text, lookup);
        apply(state, Action::Submit, lookup)
    }

    #[test]
    fn typing_fills_cells_and_advances_cursor() {
        let lookup = lookup();
        let (state, effect) = apply(
            GameState::new(word("crane")),
            Action::from_key("s").unwrap(),
            &lookup,
        );

        assert_eq!(effect, Some(Effect::Typed { row: 0, col: 0 }));
        assert_eq!(state.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(state.cell_state(0, 0), CellState::Pending);
        assert_eq!(state.cell_state(0, 1), CellState::Empty);
    }

    #[test]
    fn typing_past_row_end_is_noop() {
        let lookup = lookup();
        let full = type_word(GameState::new(word("crane")), "slate", &lookup);
        let (after, effect) = apply(full.clone(), Action::from_key("x").unwrap(), &lookup);

        assert_eq!(after, full);
        assert_eq!(effect, None);
    }

    #[test]
    fn delete_clears_last_cell() {
        let lookup = lookup();
        let state = type_word(GameState::new(word("crane")), "sl", &lookup);
        let (state, effect) = apply(state, Action::Delete, &lookup);

        assert_eq!(effect, None);
        assert_eq!(state.cursor(), Cursor { row: 0, col: 1 });
        assert_eq!(state.board()[0][1], None);
        assert_eq!(state.board()[0][0], Letter::from_char('s'));
    }

    #[test]
    fn delete_at_column_zero_is_noop() {
        let lookup = lookup();
        let fresh = GameState::new(word("crane"));
        let (after, _) = apply(fresh.clone(), Action::Delete, &lookup);
        assert_eq!(after, fresh);
    }

    #[test]
    fn submit_incomplete_row_is_noop() {
        let lookup = lookup();
        let partial = type_word(GameState::new(word("crane")), "sla", &lookup);
        let (after, effect) = apply(partial.clone(), Action::Submit, &lookup);

        assert_eq!(after, partial);
        assert_eq!(effect, None);
    }

    #[test]
    fn unknown_word_is_rejected_without_moving() {
        let lookup = lookup();
        let typed = type_word(GameState::new(word("crane")), "zzzzz", &lookup);
        let (after, effect) = apply(typed.clone(), Action::Submit, &lookup);

        assert_eq!(effect, Some(Effect::Rejected { row: 0 }));
        assert_eq!(after.notice(), Some(Notice::NotInWordList));
        assert_eq!(after.board(), typed.board());
        assert_eq!(after.cursor(), typed.cursor());
        assert_eq!(after.status(), Status::InProgress);
        assert!(after.row_verdicts(0).is_none());
        assert!(after.keyboard().is_empty());
    }

    #[test]
    fn rejected_row_can_be_edited_and_resubmitted() {
        let lookup = lookup();
        let (state, _) = guess(GameState::new(word("crane")), "slatx", &lookup);
        let (state, _) = apply(state, Action::Delete, &lookup);
        let (state, effect) = guess(state, "e", &lookup);

        assert_eq!(effect, Some(Effect::Accepted { row: 0 }));
        assert_eq!(state.notice(), None);
        assert_eq!(state.cursor(), Cursor { row: 1, col: 0 });
    }

    #[test]
    fn accepted_guess_scores_row_and_keyboard() {
        let lookup = lookup();
        let (state, effect) = guess(GameState::new(word("crane")), "trace", &lookup);

        assert_eq!(effect, Some(Effect::Accepted { row: 0 }));
        assert_eq!(
            state.row_verdicts(0),
            Some(&[
                Verdict::Absent,
                Verdict::Correct,
                Verdict::Correct,
                Verdict::Present,
                Verdict::Correct
            ])
        );
        assert_eq!(state.cell_state(0, 3), CellState::Present);
        assert_eq!(
            state.keyboard().get(Letter::from_char('t').unwrap()),
            Some(Verdict::Absent)
        );
        assert_eq!(
            state.keyboard().get(Letter::from_char('c').unwrap()),
            Some(Verdict::Present)
        );
        assert_eq!(state.cursor(), Cursor { row: 1, col: 0 });
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn exact_guess_wins_immediately() {
        let lookup = lookup();
        let (state, _) = guess(GameState::new(word("crane")), "slate", &lookup);
        let (state, _) = guess(state, "crane", &lookup);

        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.notice(), Some(Notice::Won));
        assert_eq!(state.revealed_solution(), Some(word("crane")));
        assert_eq!(state.guesses_used(), 2);
    }

    #[test]
    fn six_misses_lose() {
        let lookup = lookup();
        let mut state = GameState::new(word("crane"));
        for (i, attempt) in ["slate", "robot", "floor", "audio", "speed", "erase"]
            .into_iter()
            .enumerate()
        {
            assert_eq!(state.revealed_solution(), None);
            let (next, effect) = guess(state, attempt, &lookup);
            assert_eq!(effect, Some(Effect::Accepted { row: i }));
            state = next;
        }

        assert_eq!(state.status(), Status::Lost);
        assert_eq!(state.notice(), Some(Notice::Lost));
        assert_eq!(state.revealed_solution(), Some(word("crane")));
        assert_eq!(state.cursor().row, MAX_GUESSES - 1);
    }

    #[test]
    fn actions_after_game_over_are_noops() {
        let lookup = lookup();
        let (won, _) = guess(GameState::new(word("crane")), "crane", &lookup);

        for action in [
            Action::from_key("a").unwrap(),
            Action::Delete,
            Action::Submit,
            Action::DismissNotice,
        ] {
            let (after, effect) = apply(won.clone(), action, &lookup);
            assert_eq!(after, won, "{action:?} changed a finished game");
            assert_eq!(effect, None);
        }
    }

    #[test]
    fn reset_clears_everything() {
        let lookup = lookup();
        let (state, _) = guess(GameState::new(word("crane")), "slate", &lookup);
        let state = type_word(state, "ro", &lookup);

        let (state, effect) = apply(state, Action::Reset(word("robot")), &lookup);

        assert_eq!(effect, None);
        assert_eq!(state, GameState::new(word("robot")));
    }

    #[test]
    fn reset_after_loss_starts_over() {
        let lookup = lookup();
        let mut state = GameState::new(word("crane"));
        for attempt in ["slate", "robot", "floor", "audio", "speed", "erase"] {
            state = guess(state, attempt, &lookup).0;
        }
        assert!(state.is_over());

        let (state, _) = apply(state, Action::Reset(word("crane")), &lookup);
        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.cursor(), Cursor::default());
        assert!(state.keyboard().is_empty());
    }

    #[test]
    fn dismiss_only_clears_transient_notice() {
        let lookup = lookup();
        let (rejected, _) = guess(GameState::new(word("crane")), "zzzzz", &lookup);
        let (dismissed, _) = apply(rejected, Action::DismissNotice, &lookup);
        assert_eq!(dismissed.notice(), None);

        let (won, _) = guess(GameState::new(word("crane")), "crane", &lookup);
        let (still_won, _) = apply(won, Action::DismissNotice, &lookup);
        assert_eq!(still_won.notice(), Some(Notice::Won));
    }

    #[test]
    fn submitted_rows_are_never_rewritten() {
        let lookup = lookup();
        let (state, _) = guess(GameState::new(word("crane")), "slate", &lookup);
        let first_row = state.board()[0];

        let state = type_word(state, "robot", &lookup);
        let (state, _) = apply(state, Action::Delete, &lookup);
        let (state, _) = apply(state, Action::Delete, &lookup);

        assert_eq!(state.board()[0], first_row);
        assert_eq!(state.cursor(), Cursor { row: 1, col: 3 });
    }
}
