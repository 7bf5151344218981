//! Simple line-mode game
//!
//! Text-based play without the TUI: type a whole word per line.

use crate::core::{MAX_GUESSES, WORD_LENGTH, Word};
use crate::game::{Action, Effect, Game};
use crate::output::{write_board, write_game_over};
use anyhow::Result;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(game: &mut Game<R>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Drive `game` from `input`, writing everything to `out`
///
/// Commands: `quit` to exit, `new` to start over. Returns at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R: Rng, I: BufRead, W: Write>(
    game: &mut Game<R>,
    input: &mut I,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║               WORDLE                 ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries. Commands: 'new', 'quit'."
    )?;

    loop {
        if game.state().is_over() {
            write_game_over(out, game.state())?;
            match prompt(input, out, "Play again? (yes/no)")?.as_deref() {
                Some("yes" | "y") => {
                    game.new_game();
                    writeln!(out, "\n🔄 New game started!")?;
                    continue;
                }
                _ => break,
            }
        }

        write_board(out, game.state())?;
        let label = format!("Guess {}/{MAX_GUESSES}", game.state().cursor().row + 1);
        let Some(line) = prompt(input, out, &label)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                game.new_game();
                writeln!(out, "\n🔄 New game started!")?;
            }
            text => {
                if let Err(err) = Word::new(text) {
                    writeln!(out, "❌ {err}")?;
                    continue;
                }
                if matches!(submit_word(game, text), Some(Effect::Rejected { .. })) {
                    writeln!(out, "❌ Not in word list")?;
                    clear_row(game);
                }
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn submit_word<R: Rng>(game: &mut Game<R>, text: &str) -> Option<Effect> {
    for ch in text.chars() {
        game.dispatch(Action::from_key(ch.encode_utf8(&mut [0; 4]))?);
    }
    let effect = game.dispatch(Action::Submit);
    game.dispatch(Action::DismissNotice);
    effect
}

fn clear_row<R: Rng>(game: &mut Game<R>) {
    while game.state().cursor().col > 0 {
        game.dispatch(Action::Delete);
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
