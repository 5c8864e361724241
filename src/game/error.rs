//! Errors raised by the game core
//!
//! Every failure is local and synchronous. None of them leave a session
//! partially updated.

use thiserror::Error;

/// Everything that can go wrong while building a game or playing one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No entry survived word-list normalization
    #[error("no valid words in word list")]
    EmptyWordList,
    /// The incorrect-guess budget was below one
    #[error("must allow at least one guess (got {given})")]
    InvalidGuessBudget { given: u32 },
    /// The input was not exactly one ASCII letter; carries the raw input
    #[error("not a single letter: \"{letter}\"")]
    NotALetter { letter: String },
    /// The letter was guessed earlier in this session
    #[error("\"{letter}\" has already been guessed")]
    AlreadyGuessed { letter: char },
    /// Every letter of the word has already been found
    #[error("word has already been solved")]
    AlreadySolved,
    /// The incorrect-guess budget is spent
    #[error("no guesses remaining")]
    NoGuessesRemaining,
}

impl GameError {
    /// The letter (or raw input) the error is about, if any.
    pub fn letter(&self) -> Option<String> {
        match self {
            GameError::NotALetter { letter } => Some(letter.clone()),
            GameError::AlreadyGuessed { letter } => Some(letter.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_letter_message() {
        let err = GameError::NotALetter {
            letter: "jay".to_string(),
        };
        assert_eq!(err.to_string(), "not a single letter: \"jay\"");
        assert_eq!(err.letter(), Some("jay".to_string()));
    }

    #[test]
    fn test_already_guessed_message() {
        let err = GameError::AlreadyGuessed { letter: 'K' };
        assert_eq!(err.to_string(), "\"K\" has already been guessed");
        assert_eq!(err.letter(), Some("K".to_string()));
    }

    #[test]
    fn test_letterless_errors() {
        assert_eq!(GameError::AlreadySolved.letter(), None);
        assert_eq!(GameError::NoGuessesRemaining.letter(), None);
        assert_eq!(GameError::EmptyWordList.letter(), None);
        assert_eq!(GameError::InvalidGuessBudget { given: 0 }.letter(), None);
    }

    #[test]
    fn test_invalid_guess_budget_message() {
        assert_eq!(
            GameError::InvalidGuessBudget { given: 0 }.to_string(),
            "must allow at least one guess (got 0)"
        );
    }
}
