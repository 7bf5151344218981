//! Wordle Game - CLI
//!
//! Full-screen TUI by default, plus a line-mode game and a one-shot scorer.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_game::{
    commands::{run_simple, score_words},
    core::Word,
    game::Game,
    output::print_score_result,
    wordlists::{
        ALLOWED, ANSWERS, SolutionPool, WordLookup,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solution pool file, one word per line (default: embedded answers)
    #[arg(short, long, global = true)]
    answers: Option<PathBuf>,

    /// Guessable words file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    allowed: Option<PathBuf>,

    /// Seed for solution selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs here (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-mode game without the TUI
    Simple,

    /// Score a guess against a solution
    Score {
        /// The guessed word
        guess: String,

        /// The solution to score against
        solution: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_tracing(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => {
            let game = load_game(cli.answers.as_deref(), cli.allowed.as_deref(), cli.seed)?;
            run_play_command(game)
        }
        Commands::Simple => {
            let mut game = load_game(cli.answers.as_deref(), cli.allowed.as_deref(), cli.seed)?;
            run_simple(&mut game)
        }
        Commands::Score {
            guess,
            solution,
            json,
        } => run_score_command(&guess, &solution, json),
    }
}

/// Set up `tracing` with `RUST_LOG` filtering (default `warn`)
///
/// Logs go to `log_file` when given. Otherwise the TUI gets no log output at
/// all, since stderr would corrupt the screen, and other commands log to stderr.
fn init_tracing(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();
    } else if tui {
        tracing_subscriber::registry().with(env_filter).init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(env_filter)
            .init();
    }

    Ok(())
}

/// Load the word lists and start a session
///
/// The lookup also accepts every solution, so the hidden word is always guessable.
fn load_game(answers: Option<&Path>, allowed: Option<&Path>, seed: Option<u64>) -> Result<Game> {
    let solutions = load_list(answers, ANSWERS)?;
    let guessable = load_list(allowed, ALLOWED)?;

    let lookup = WordLookup::new(guessable.iter().chain(&solutions));
    let pool = SolutionPool::new(solutions)?;
    tracing::info!(
        solutions = pool.len(),
        guessable = lookup.len(),
        "Word lists ready"
    );

    Ok(Game::seeded(lookup, pool, seed))
}

fn load_list(path: Option<&Path>, embedded: &[&str]) -> Result<Vec<Word>> {
    match path {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(words_from_slice(embedded)),
    }
}

fn run_play_command(game: Game) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    run_tui(App::new(game))
}

fn run_score_command(guess: &str, solution: &str, json: bool) -> Result<()> {
    let result = score_words(guess, solution)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_score_result(&result);
    }
    Ok(())
}
