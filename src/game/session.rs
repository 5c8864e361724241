//! A single game against one secret word
//!
//! The session accepts letter guesses until the word is solved (won) or the
//! incorrect-guess budget is spent (lost). Failed guesses never change state.

use super::error::GameError;
use super::validation::parse_letter;
use super::words::Word;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses are still being accepted
    InProgress,
    /// Every letter of the word has been guessed
    Won,
    /// The incorrect-guess budget is spent
    Lost,
}

impl GameStatus {
    /// True for `Won` and `Lost`
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One game of guessing letters in a secret word.
///
/// Created by [`GameConfig::create_session`](super::GameConfig::create_session).
/// A basic game loop:
///
/// ```
/// use gallows::game::{GameConfig, GameError, GameOptions};
///
/// let config = GameConfig::new(GameOptions::default()).unwrap();
/// let mut session = config.create_session();
/// for letter in "ETAOINSHRDLUCMFWYPVBGKQJXZ".chars() {
///     if !session.can_guess() {
///         break;
///     }
///     match session.make_guess(&letter.to_string()) {
///         Ok(_) | Err(GameError::AlreadyGuessed { .. }) => {}
///         Err(e) => panic!("unexpected: {e}"),
///     }
/// }
/// assert!(session.status().is_over());
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    word: Word,
    max_incorrect_guesses: u32,
    /// Uppercase letters in the order they were guessed, no repeats
    guessed: String,
    incorrect_guesses: u32,
}

impl GameSession {
    pub(crate) fn new(word: Word, max_incorrect_guesses: u32) -> Self {
        log::info!(
            "new session: {} letters, {} incorrect guesses allowed",
            word.len(),
            max_incorrect_guesses
        );
        Self {
            word,
            max_incorrect_guesses,
            guessed: String::new(),
            incorrect_guesses: 0,
        }
    }

    /// Guess a letter.
    ///
    /// Returns the number of times the letter appears in the secret word;
    /// zero counts as an incorrect guess.
    ///
    /// Checks in order:
    /// 1. `letter` is a single ASCII letter ([`GameError::NotALetter`])
    /// 2. The word isn't solved yet ([`GameError::AlreadySolved`])
    /// 3. Incorrect guesses remain ([`GameError::NoGuessesRemaining`])
    /// 4. The letter is new ([`GameError::AlreadyGuessed`])
    pub fn make_guess(&mut self, letter: &str) -> Result<usize, GameError> {
        let letter = parse_letter(letter)?;

        if self.is_solved() {
            return Err(GameError::AlreadySolved);
        }
        if !self.can_guess() {
            return Err(GameError::NoGuessesRemaining);
        }
        if self.guessed.contains(letter) {
            return Err(GameError::AlreadyGuessed { letter });
        }

        self.guessed.push(letter);
        let count = self.word.occurrences(letter);
        if count == 0 {
            self.incorrect_guesses += 1;
        }
        log::debug!(
            "guess {}: {} occurrence(s), {} guesses left",
            letter,
            count,
            self.guesses_left()
        );

        match self.status() {
            GameStatus::Won => log::info!("session won in {} guesses", self.guesses_made()),
            GameStatus::Lost => log::info!("session lost, word was {}", self.word),
            GameStatus::InProgress => {}
        }

        Ok(count)
    }

    /// True if at least one incorrect guess remains and the word isn't solved.
    pub fn can_guess(&self) -> bool {
        self.incorrect_guesses < self.max_incorrect_guesses && !self.is_solved()
    }

    /// True if every letter in the secret word has been guessed.
    pub fn is_solved(&self) -> bool {
        self.word.letters().all(|c| self.guessed.contains(c))
    }

    pub fn status(&self) -> GameStatus {
        if self.is_solved() {
            GameStatus::Won
        } else if self.incorrect_guesses >= self.max_incorrect_guesses {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Check whether a letter has been guessed, in either case.
    ///
    /// Fails with [`GameError::NotALetter`] on anything but a single ASCII
    /// letter.
    pub fn has_guessed(&self, letter: &str) -> Result<bool, GameError> {
        let letter = parse_letter(letter)?;
        Ok(self.guessed.contains(letter))
    }

    /// Letters guessed so far, in guess order.
    pub fn letters_guessed(&self) -> &str {
        &self.guessed
    }

    /// Incorrect guesses still available.
    pub fn guesses_left(&self) -> u32 {
        self.max_incorrect_guesses - self.incorrect_guesses
    }

    /// Accepted guesses so far, right or wrong.
    pub fn guesses_made(&self) -> usize {
        self.guessed.len()
    }

    pub fn guesses_allowed(&self) -> u32 {
        self.max_incorrect_guesses
    }

    pub fn incorrect_guesses(&self) -> u32 {
        self.incorrect_guesses
    }

    pub fn secret_word(&self) -> &Word {
        &self.word
    }

    /// The word as the player knows it: `Some(letter)` where guessed,
    /// `None` where still hidden.
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.word
            .letters()
            .map(|c| self.guessed.contains(c).then_some(c))
            .collect()
    }
}
