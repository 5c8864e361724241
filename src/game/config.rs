//! Game configuration: the guess budget and the word pool
//!
//! A [`GameConfig`] is built once and spawns any number of independent
//! [`GameSession`]s.

use super::dictionary::default_pool;
use super::error::GameError;
use super::session::GameSession;
use super::words::{normalize, WordPool};
use rand::Rng;

/// Incorrect guesses allowed when the caller doesn't say otherwise
pub const DEFAULT_GUESSES: u32 = 9;

/// Options for [`GameConfig::new`]. Everything defaults.
#[derive(Debug, Clone, Default)]
pub struct GameOptions {
    /// Incorrect guesses allowed per session. Defaults to [`DEFAULT_GUESSES`].
    /// Anything above 25 lets the player win every time.
    pub max_incorrect_guesses: Option<u32>,
    /// Raw candidate words. `None` or an empty list selects the bundled pool.
    pub words: Option<Vec<String>>,
}

impl GameOptions {
    pub fn with_max_incorrect_guesses(mut self, guesses: u32) -> Self {
        self.max_incorrect_guesses = Some(guesses);
        self
    }

    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = Some(words.into_iter().map(Into::into).collect());
        self
    }
}

/// The rules for a run of games
#[derive(Debug, Clone)]
pub struct GameConfig {
    max_incorrect_guesses: u32,
    /// Caller-supplied pool; `None` means the bundled one
    words: Option<WordPool>,
}

impl GameConfig {
    /// Validate the options and build a configuration.
    ///
    /// Fails with [`GameError::InvalidGuessBudget`] for a budget below one,
    /// and with [`GameError::EmptyWordList`] when supplied words are all
    /// invalid.
    pub fn new(options: GameOptions) -> Result<Self, GameError> {
        let max_incorrect_guesses = options.max_incorrect_guesses.unwrap_or(DEFAULT_GUESSES);
        if max_incorrect_guesses < 1 {
            return Err(GameError::InvalidGuessBudget {
                given: max_incorrect_guesses,
            });
        }

        let words = match options.words {
            Some(raw) if !raw.is_empty() => Some(normalize(raw)?),
            _ => None,
        };

        log::debug!(
            "configured {} incorrect guesses over {} words",
            max_incorrect_guesses,
            words.as_ref().map_or_else(|| default_pool().len(), WordPool::len)
        );

        Ok(Self {
            max_incorrect_guesses,
            words,
        })
    }

    /// The pool secret words are drawn from.
    pub fn words(&self) -> &WordPool {
        match &self.words {
            Some(words) => words,
            None => default_pool(),
        }
    }

    pub fn max_incorrect_guesses(&self) -> u32 {
        self.max_incorrect_guesses
    }

    /// Start a new game for a random word from [`words`](Self::words).
    pub fn create_session(&self) -> GameSession {
        self.create_session_with_rng(&mut rand::rng())
    }

    /// Start a new game using a specific RNG (for testing/seeding).
    ///
    /// Each call draws independently and uniformly from the pool.
    pub fn create_session_with_rng<R: Rng>(&self, rng: &mut R) -> GameSession {
        let pool = self.words().as_slice();
        let word = pool[rng.random_range(0..pool.len())].clone();
        GameSession::new(word, self.max_incorrect_guesses)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_incorrect_guesses: DEFAULT_GUESSES,
            words: None,
        }
    }
}
