//! TUI application state and event loop
//!
//! The [`Game`] commits every transition immediately. This layer only
//! decides how to *show* it: rows flip cell by cell after a submit, rejected
//! rows shake, and the "not in word list" notice disappears on its own.

use crate::core::{KeyboardVerdicts, Letter, MAX_GUESSES, Verdict, WORD_LENGTH};
use crate::game::{Action, CellState, Effect, Game, Notice, Status};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Delay between the start of consecutive cell flips
pub const FLIP_STAGGER: Duration = Duration::from_millis(300);
/// Time from a cell starting to flip to showing its colour
pub const FLIP_DURATION: Duration = Duration::from_millis(400);
/// Extra pause after the last flip before the row settles
pub const SETTLE_DELAY: Duration = Duration::from_millis(500);
/// How long a transient notice stays up
pub const NOTICE_TIMEOUT: Duration = Duration::from_millis(1500);
/// Length of the rejected-row shake
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);
/// Length of the typed-letter pop
pub const POP_DURATION: Duration = Duration::from_millis(100);

const FRAME: Duration = Duration::from_millis(16);

/// A row being revealed after an accepted submit
#[derive(Debug, Clone, Copy)]
pub struct Reveal {
    pub row: usize,
    pub started: Instant,
}

impl Reveal {
    /// How far along the flip of `col` is at `now`
    #[must_use]
    pub fn phase(&self, col: usize, now: Instant) -> FlipPhase {
        let elapsed = now.saturating_duration_since(self.started);
        let flip_start = FLIP_STAGGER * col as u32;

        if elapsed < flip_start {
            FlipPhase::Waiting
        } else if elapsed < flip_start + FLIP_DURATION {
            FlipPhase::Flipping
        } else {
            FlipPhase::Revealed
        }
    }

    /// Whether the whole row has finished and the game may move on
    #[must_use]
    pub fn is_settled(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started)
            >= FLIP_STAGGER * WORD_LENGTH as u32 + SETTLE_DELAY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    Waiting,
    Flipping,
    Revealed,
}

/// A short-lived highlight on a row or cell
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub row: usize,
    pub col: Option<usize>,
    pub started: Instant,
}

/// What the renderer should draw in one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: Option<Letter>,
    pub state: CellState,
    pub flipping: bool,
    pub popping: bool,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by the number of guesses taken
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    fn record(&mut self, status: Status, guesses: usize) {
        self.total_games += 1;
        if status == Status::Won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Application state
pub struct App {
    pub game: Game,
    pub reveal: Option<Reveal>,
    pub shake: Option<Flash>,
    pub pop: Option<Flash>,
    pub notice_deadline: Option<Instant>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Time the current frame is drawn for
    pub clock: Instant,
}

impl App {
    #[must_use]
    pub fn new(game: Game) -> Self {
        Self {
            game,
            reveal: None,
            shake: None,
            pop: None,
            notice_deadline: None,
            stats: Statistics::default(),
            should_quit: false,
            clock: Instant::now(),
        }
    }

    /// Advance timers to `now`
    pub fn tick(&mut self, now: Instant) {
        self.clock = now;

        if self.reveal.is_some_and(|r| r.is_settled(now)) {
            self.reveal = None;
        }
        if self.shake.is_some_and(|s| now.saturating_duration_since(s.started) >= SHAKE_DURATION) {
            self.shake = None;
        }
        if self.pop.is_some_and(|p| now.saturating_duration_since(p.started) >= POP_DURATION) {
            self.pop = None;
        }
        if self.notice_deadline.is_some_and(|deadline| now >= deadline) {
            self.notice_deadline = None;
            self.game.dispatch(Action::DismissNotice);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        self.tick(now);

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Enter if self.is_game_over_shown() => {
                self.new_game();
            }
            // Other chords are not typing
            _ if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            code => {
                if let Some(action) = key_action(code) {
                    self.play(action, now);
                }
            }
        }
    }

    /// Feed a letter/delete/submit through the game
    ///
    /// Dropped while a row is still being revealed, so nothing can touch
    /// the board until the reveal settles.
    pub fn play(&mut self, action: Action, now: Instant) {
        if self.reveal.is_some() {
            return;
        }

        match self.game.dispatch(action) {
            Some(Effect::Typed { row, col }) => {
                self.pop = Some(Flash {
                    row,
                    col: Some(col),
                    started: now,
                });
            }
            Some(Effect::Rejected { row }) => {
                self.shake = Some(Flash {
                    row,
                    col: None,
                    started: now,
                });
                // Each rejection re-arms the timer, so the newest notice gets its full time
                self.notice_deadline = Some(now + NOTICE_TIMEOUT);
            }
            Some(Effect::Accepted { row }) => {
                self.reveal = Some(Reveal { row, started: now });
                self.notice_deadline = None;
                let state = self.game.state();
                if state.is_over() {
                    self.stats.record(state.status(), state.guesses_used());
                }
            }
            None => {}
        }
    }

    /// Start over; always allowed, cancels any animation in flight
    pub fn new_game(&mut self) {
        self.game.new_game();
        self.reveal = None;
        self.shake = None;
        self.pop = None;
        self.notice_deadline = None;
    }

    /// Game over and the final row has finished revealing
    #[must_use]
    pub fn is_game_over_shown(&self) -> bool {
        self.game.state().is_over() && self.reveal.is_none()
    }

    #[must_use]
    pub fn cell_view(&self, row: usize, col: usize) -> CellView {
        let state = self.game.state();
        let letter = state.board()[row][col];
        let mut cell_state = state.cell_state(row, col);
        let mut flipping = false;

        if let Some(reveal) = self.reveal.filter(|r| r.row == row) {
            match reveal.phase(col, self.clock) {
                FlipPhase::Waiting => cell_state = CellState::Pending,
                FlipPhase::Flipping => {
                    cell_state = CellState::Pending;
                    flipping = true;
                }
                FlipPhase::Revealed => {}
            }
        }

        let popping = self
            .pop
            .is_some_and(|p| p.row == row && p.col == Some(col));

        CellView {
            letter,
            state: cell_state,
            flipping,
            popping,
        }
    }

    /// Horizontal offset for a shaking row
    #[must_use]
    pub fn shake_offset(&self, row: usize) -> u16 {
        match self.shake {
            Some(shake) if shake.row == row => {
                let ticks = self.clock.saturating_duration_since(shake.started).as_millis() / 50;
                if ticks % 2 == 0 { 0 } else { 2 }
            }
            _ => 0,
        }
    }

    /// Keyboard colours for the cells whose reveal has finished
    #[must_use]
    pub fn keyboard(&self) -> KeyboardVerdicts {
        let Some(reveal) = self.reveal else {
            return self.game.state().keyboard().clone();
        };

        let mut cells: Vec<(Letter, Verdict)> = Vec::new();
        for (row, (guess, verdicts)) in self.game.state().scored_rows().enumerate() {
            for (col, (&letter, &verdict)) in guess.letters().iter().zip(&verdicts).enumerate() {
                if row != reveal.row || reveal.phase(col, self.clock) == FlipPhase::Revealed {
                    cells.push((letter, verdict));
                }
            }
        }
        KeyboardVerdicts::from_cells(cells)
    }

    /// Notice to display; the end-of-game notice waits for the reveal
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self.game.state().notice() {
            Some(Notice::Won | Notice::Lost) if self.reveal.is_some() => None,
            notice => notice,
        }
    }
}

/// Translate a terminal key into a game action
fn key_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Enter => Action::from_key("Enter"),
        KeyCode::Backspace => Action::from_key("Backspace"),
        KeyCode::Char(ch) => Action::from_key(ch.encode_utf8(&mut [0; 4])),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(%err, "TUI exited with error");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so animations keep running without input
        if event::poll(FRAME)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
