//! Terminal UI components using ratatui

mod terminal;
mod ui;

use crate::app::App;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

pub use terminal::Tui;
pub use ui::render;

/// Run the full-screen game until the player quits.
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    loop {
        terminal.draw(|frame| render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}

/// Apply one key event to the app
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (not release)
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Raw mode swallows SIGINT, so Ctrl+C arrives as a key
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) {
            app.quit();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => app.on_submit(),
        KeyCode::Char(c) => app.on_char(c),
        _ => {}
    }
}
