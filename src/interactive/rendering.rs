//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, notices and session statistics.

use super::app::{App, CellView};
use crate::core::{Letter, MAX_GUESSES, Verdict, WORD_LENGTH};
use crate::game::{CellState, Notice};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// On-screen keyboard, as laid out on a physical QWERTY board
const KEY_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                             // Header
            Constraint::Length(MAX_GUESSES as u16 * 2 + 1),    // Board
            Constraint::Length(3),                             // Notice
            Constraint::Length(8),                             // Keyboard
            Constraint::Min(0),                                // Spacer
            Constraint::Length(1),                             // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_notice(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_GUESSES * 2);

    for row in 0..MAX_GUESSES {
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2 + 1);
        // Trailing pad keeps the line width fixed so only the letters move
        let offset = usize::from(app.shake_offset(row));
        spans.push(Span::raw(" ".repeat(offset)));
        for col in 0..WORD_LENGTH {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(cell_span(app.cell_view(row, col)));
        }
        spans.push(Span::raw(" ".repeat(2 - offset.min(2))));

        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(board, area);
}

fn cell_span(cell: CellView) -> Span<'static> {
    let text = match cell.letter {
        Some(letter) => format!(" {letter} "),
        None => " · ".to_string(),
    };

    let mut style = cell_style(cell.state);
    if cell.flipping {
        style = Style::default().fg(Color::Black).bg(Color::Gray);
    }
    if cell.popping {
        style = style.add_modifier(Modifier::UNDERLINED);
    }

    Span::styled(text, style)
}

fn cell_style(state: CellState) -> Style {
    match state {
        CellState::Empty => Style::default().fg(Color::DarkGray),
        CellState::Pending => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        CellState::Correct => verdict_style(Verdict::Correct),
        CellState::Present => verdict_style(Verdict::Present),
        CellState::Absent => verdict_style(Verdict::Absent),
    }
}

fn verdict_style(verdict: Verdict) -> Style {
    let bg = match verdict {
        Verdict::Correct => Color::Green,
        Verdict::Present => Color::Yellow,
        Verdict::Absent => Color::DarkGray,
    };
    Style::default()
        .fg(Color::Black)
        .bg(bg)
        .add_modifier(Modifier::BOLD)
}

fn render_notice(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    if let Some(notice) = app.notice() {
        let color = match notice {
            Notice::Won => Color::Green,
            Notice::Lost => Color::Red,
            Notice::NotInWordList => Color::Yellow,
        };
        lines.push(Line::from(Span::styled(
            notice.text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    if app.is_game_over_shown()
        && let Some(solution) = app.game.state().revealed_solution()
    {
        lines.push(Line::from(vec![
            Span::raw("Solution: "),
            Span::styled(
                solution.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Enter: New Game", Style::default().fg(Color::DarkGray)),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.keyboard();
    let mut lines = Vec::with_capacity(KEY_ROWS.len() * 2);

    for (i, row) in KEY_ROWS.iter().enumerate() {
        let mut spans = Vec::new();
        if i == KEY_ROWS.len() - 1 {
            spans.push(Span::styled(" ↵ ", key_style(None)));
            spans.push(Span::raw(" "));
        }
        for letter in row.chars().filter_map(Letter::from_char) {
            spans.push(Span::styled(
                format!(" {letter} "),
                key_style(keyboard.get(letter)),
            ));
            spans.push(Span::raw(" "));
        }
        if i == KEY_ROWS.len() - 1 {
            spans.push(Span::styled(" ⌫ ", key_style(None)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(paragraph, area);
}

fn key_style(verdict: Option<Verdict>) -> Style {
    verdict.map_or_else(
        || Style::default().fg(Color::White).bg(Color::Rgb(80, 80, 80)),
        verdict_style,
    )
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Esc: Quit | Ctrl+N: New Game")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
