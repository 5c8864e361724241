//! Game logic: word pools, configuration, sessions, guess validation

pub mod config;
pub mod dictionary;
pub mod error;
pub mod session;
pub mod validation;
pub mod words;

pub use config::{GameConfig, GameOptions, DEFAULT_GUESSES};
pub use error::GameError;
pub use session::{GameSession, GameStatus};
pub use words::{load_words_from_file, load_words_from_str, normalize, Word, WordPool};
