//! UI rendering using ratatui
//!
//! One screen: header with guesses left, the gallows, the masked word,
//! guessed letters, feedback and a key hint footer.

use crate::app::format::{masked_word, pluralize, sorted_guesses};
use crate::app::App;
use crate::game::{GameSession, GameStatus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Gallows drawings from empty to complete. Intermediate stages are picked
/// in proportion to the guesses used, so any budget ends on the last one.
const GALLOWS: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Render the game screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Gallows + word
            Constraint::Length(2), // Guessed letters
            Constraint::Length(2), // Feedback
            Constraint::Length(2), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], app);
    render_board(frame, layout[1], app.session());
    render_guessed(frame, layout[2], app.session());
    render_feedback(frame, layout[3], app);
    render_footer(frame, layout[4], app.is_game_over());
}

/// Render the header: title, record, guesses left
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // Title
            Constraint::Min(20),    // Record
            Constraint::Length(20), // Guesses left
        ])
        .split(inner);

    let title = Paragraph::new("GALLOWS")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let record = Paragraph::new(format!("W {}  L {}", app.record.won, app.record.lost))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(record, header_layout[1]);

    let left = app.session().guesses_left();
    let left_color = match left {
        0 | 1 => Color::Red,
        2 | 3 => Color::Yellow,
        _ => Color::Green,
    };
    let guesses = Paragraph::new(format!("{} left", pluralize("guess", left as usize)))
        .style(Style::default().fg(left_color).bold())
        .alignment(Alignment::Right);
    frame.render_widget(guesses, header_layout[2]);
}

/// Render the gallows next to the masked word
fn render_board(frame: &mut Frame, area: Rect, session: &GameSession) {
    let board_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Gallows
            Constraint::Min(20),    // Word
        ])
        .split(area);

    let gallows = Paragraph::new(gallows_stage(session)).style(Style::default().fg(Color::White));
    frame.render_widget(gallows, board_layout[0]);

    let (word, style) = match session.status() {
        GameStatus::Lost => (
            spaced(session.secret_word().as_str()),
            Style::default().fg(Color::Red).bold(),
        ),
        GameStatus::Won => (masked_word(session), Style::default().fg(Color::Green).bold()),
        GameStatus::InProgress => (masked_word(session), Style::default().fg(Color::Cyan).bold()),
    };

    let word_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(board_layout[1]);

    let word_widget = Paragraph::new(word).style(style).alignment(Alignment::Center);
    frame.render_widget(word_widget, word_area[1]);
}

/// Render guessed letters in alphabetical order
fn render_guessed(frame: &mut Frame, area: Rect, session: &GameSession) {
    let text = if session.letters_guessed().is_empty() {
        "Type a letter to guess".to_string()
    } else {
        format!("Already guessed: {}", sorted_guesses(session))
    };
    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let color = match app.session().status() {
        GameStatus::Won => Color::Green,
        GameStatus::Lost => Color::Red,
        GameStatus::InProgress => Color::Yellow,
    };
    let widget = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, area: Rect, game_over: bool) {
    let hint = if game_over {
        "Enter New game  Esc Quit"
    } else {
        "A-Z Guess  Esc Quit"
    };
    let footer = Paragraph::new(hint)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Pick the gallows drawing for the guesses used so far
fn gallows_stage(session: &GameSession) -> &'static str {
    let last = GALLOWS.len() - 1;
    let used = session.incorrect_guesses() as usize;
    let allowed = session.guesses_allowed() as usize;
    GALLOWS[(used * last).div_ceil(allowed).min(last)]
}

/// Space out letters: "BEVO" -> "B E V O"
fn spaced(word: &str) -> String {
    word.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
