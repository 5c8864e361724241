//! Application state for the full-screen front end

use super::format::{guess_feedback, outcome_message};
use crate::game::{GameConfig, GameSession, GameStatus};

/// Wins and losses across the games played this run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Record {
    pub won: u32,
    pub lost: u32,
}

impl Record {
    pub fn played(&self) -> u32 {
        self.won + self.lost
    }
}

/// Main application state
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Feedback message from the last guess
    pub feedback: String,
    /// Results of finished games
    pub record: Record,
    config: GameConfig,
    session: GameSession,
}

impl App {
    /// Create an application and start the first game
    pub fn new(config: GameConfig) -> Self {
        let session = config.create_session();
        Self {
            should_quit: false,
            feedback: String::new(),
            record: Record::default(),
            config,
            session,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Signal the application to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Handle a typed character as a guess (locked once the game is over)
    pub fn on_char(&mut self, c: char) {
        if self.is_game_over() {
            return;
        }

        let input = c.to_string();
        let result = self.session.make_guess(&input);
        self.feedback = guess_feedback(&input, &result);

        match self.session.status() {
            GameStatus::Won => self.record.won += 1,
            GameStatus::Lost => self.record.lost += 1,
            GameStatus::InProgress => return,
        }
        if let Some(message) = outcome_message(&self.session) {
            self.feedback = message;
        }
    }

    /// Handle Enter: start the next game once the current one is over
    pub fn on_submit(&mut self) {
        if self.is_game_over() {
            self.new_game();
        }
    }

    /// Check if the current game has finished
    pub fn is_game_over(&self) -> bool {
        self.session.status().is_over()
    }

    /// Throw away the current session and draw a new word
    pub fn new_game(&mut self) {
        self.session = self.config.create_session();
        self.feedback.clear();
        log::debug!("new game started ({} played)", self.record.played());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameOptions;

    fn app(words: &[&str], guesses: u32) -> App {
        let options = GameOptions::default()
            .with_words(words.iter().copied())
            .with_max_incorrect_guesses(guesses);
        App::new(GameConfig::new(options).unwrap())
    }

    #[test]
    fn test_new_app() {
        let app = app(&["bevo"], 3);
        assert!(!app.should_quit);
        assert!(app.feedback.is_empty());
        assert_eq!(app.record, Record::default());
        assert_eq!(app.session().secret_word().as_str(), "BEVO");
        assert!(!app.is_game_over());
    }

    #[test]
    fn test_quit() {
        let mut app = app(&["bevo"], 3);
        app.quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_correct_and_wrong_feedback() {
        let mut app = app(&["bevo"], 3);
        app.on_char('b');
        assert_eq!(app.feedback, "Correct! You found 1 letter!");
        app.on_char('x');
        assert_eq!(app.feedback, "Wrong!");
        app.on_char('X');
        assert_eq!(app.feedback, "\"X\" has already been guessed.");
        app.on_char('7');
        assert_eq!(app.feedback, "\"7\" is not a letter. Must be a single character: A-Z.");
        assert_eq!(app.session().guesses_left(), 2);
    }

    #[test]
    fn test_win_records_and_locks_input() {
        let mut app = app(&["bevo"], 3);
        for c in "BEVO".chars() {
            app.on_char(c);
        }
        assert!(app.is_game_over());
        assert_eq!(app.record, Record { won: 1, lost: 0 });
        assert_eq!(app.feedback, "Congratulations! You guessed BEVO in 4 guesses.");

        app.on_char('q');
        assert_eq!(app.session().guesses_made(), 4);
        assert_eq!(app.record.played(), 1);
    }

    #[test]
    fn test_loss_then_new_game() {
        let mut app = app(&["bevo"], 1);
        app.on_char('z');
        assert!(app.is_game_over());
        assert_eq!(app.record, Record { won: 0, lost: 1 });
        assert_eq!(app.feedback, "Too bad, you failed to guess BEVO.");

        app.on_submit();
        assert!(!app.is_game_over());
        assert!(app.feedback.is_empty());
        assert_eq!(app.session().guesses_made(), 0);
        assert_eq!(app.record.played(), 1);
    }

    #[test]
    fn test_submit_mid_game_does_nothing() {
        let mut app = app(&["bevo"], 3);
        app.on_char('b');
        app.on_submit();
        assert_eq!(app.session().letters_guessed(), "B");
    }
}
