//! Player-facing text shared by the console and terminal front ends

use crate::game::{GameError, GameSession, GameStatus};

/// `"1 guess"`, `"2 guesses"`, `"0 letters"`...
///
/// Only knows the plurals this game prints.
pub fn pluralize(word: &str, count: usize) -> String {
    let plural = match word {
        "guess" => "guesses".to_string(),
        _ => format!("{}s", word),
    };
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}", count, plural)
    }
}

/// The secret word with unguessed letters as `_`, space separated.
pub fn masked_word(session: &GameSession) -> String {
    session
        .revealed()
        .into_iter()
        .map(|c| c.unwrap_or('_').to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Guessed letters in alphabetical order, space separated.
pub fn sorted_guesses(session: &GameSession) -> String {
    let mut letters: Vec<char> = session.letters_guessed().chars().collect();
    letters.sort_unstable();
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `"You have N guesses left."`
pub fn guesses_left_line(session: &GameSession) -> String {
    format!(
        "You have {} left.",
        pluralize("guess", session.guesses_left() as usize)
    )
}

/// Feedback for one guess attempt. `input` is what the player typed.
pub fn guess_feedback(input: &str, result: &Result<usize, GameError>) -> String {
    match result {
        Ok(0) => "Wrong!".to_string(),
        Ok(count) => format!("Correct! You found {}!", pluralize("letter", *count)),
        Err(GameError::NotALetter { .. }) => format!(
            "\"{}\" is not a letter. Must be a single character: A-Z.",
            input
        ),
        Err(GameError::AlreadyGuessed { .. }) => format!("\"{}\" has already been guessed.", input),
        Err(GameError::AlreadySolved) => "You already solved it!".to_string(),
        Err(GameError::NoGuessesRemaining) => "No guesses remaining.".to_string(),
        Err(e) => e.to_string(),
    }
}

/// End-of-game line, or `None` while the game is still going.
pub fn outcome_message(session: &GameSession) -> Option<String> {
    match session.status() {
        GameStatus::Won => Some(format!(
            "Congratulations! You guessed {} in {}.",
            session.secret_word(),
            pluralize("guess", session.guesses_made())
        )),
        GameStatus::Lost => Some(format!(
            "Too bad, you failed to guess {}.",
            session.secret_word()
        )),
        GameStatus::InProgress => None,
    }
}
