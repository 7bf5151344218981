//! Display functions for line-mode play and command results

use super::formatters::{colored_row, emoji_grid, keyboard_lines, tile};
use crate::commands::ScoreResult;
use crate::core::{MAX_GUESSES, Verdict, WORD_LENGTH};
use crate::game::{GameState, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring a single guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{}  vs  {}",
        result.guess.to_string().bright_white().bold(),
        result.solution.to_string().bright_yellow().bold()
    );
    println!("{}", colored_row(&result.guess, &result.verdicts));

    if result.solved {
        println!("{}", "✅ Solved!".green().bold());
    } else {
        let hits = result
            .verdicts
            .iter()
            .filter(|&&v| v == Verdict::Correct)
            .count();
        println!("{hits}/{WORD_LENGTH} in place");
    }
}

/// Write the submitted rows, then the keyboard
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    writeln!(out)?;
    for (guess, verdicts) in state.scored_rows() {
        writeln!(out, "  {}", colored_row(&guess, &verdicts))?;
    }
    for _ in state.guesses_used()..MAX_GUESSES {
        let empty: Vec<String> = (0..WORD_LENGTH).map(|_| tile("·", None).to_string()).collect();
        writeln!(out, "  {}", empty.join(" "))?;
    }

    writeln!(out)?;
    for line in keyboard_lines(state.keyboard()) {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Write the end-of-game banner
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_game_over<W: Write>(out: &mut W, state: &GameState) -> io::Result<()> {
    let Some(solution) = state.revealed_solution() else {
        return Ok(());
    };

    let banner = match state.status() {
        Status::Won => "🎉 You Win!".green().bold(),
        _ => "❌ Game Over!".red().bold(),
    };
    writeln!(out, "{}", "═".repeat(40).bright_cyan())?;
    writeln!(out, "  {banner}")?;
    writeln!(out, "  Solution: {}", solution.to_string().bright_yellow().bold())?;

    let grid = emoji_grid(state.scored_rows().map(|(_, v)| v).collect::<Vec<_>>().iter());
    let score = if state.status() == Status::Won {
        state.guesses_used().to_string()
    } else {
        "X".to_string()
    };
    writeln!(out, "\n  {score}/{MAX_GUESSES}")?;
    for line in grid.lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())
}
