//! Line-based console game
//!
//! Prompts for one letter per line until the word is solved or the guesses
//! run out. Reads from any `BufRead` and writes to any `Write`, so a game can
//! be scripted.

use crate::app::format::{guess_feedback, guesses_left_line, masked_word, outcome_message, sorted_guesses};
use crate::game::{GameSession, GameStatus};
use std::io::{self, BufRead, Write};

/// Play `session` to the end (or until input runs out).
///
/// Returns the session's status when the loop stopped.
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    reader: &mut R,
    out: &mut W,
) -> io::Result<GameStatus> {
    while session.can_guess() {
        writeln!(out, "{}", guesses_left_line(session))?;
        if !session.letters_guessed().is_empty() {
            writeln!(out, "Already guessed: {}", sorted_guesses(session))?;
        }
        writeln!(out, "Secret word: {}", masked_word(session))?;

        let Some(guess) = read_guess(reader, out)? else {
            log::debug!("input closed mid-game");
            return Ok(session.status());
        };

        let result = session.make_guess(&guess);
        writeln!(out, "{}", guess_feedback(&guess, &result))?;
    }

    if let Some(message) = outcome_message(session) {
        writeln!(out, "{}", message)?;
    }
    Ok(session.status())
}

/// Prompt and read one line, without its line ending. `None` at EOF.
fn read_guess<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> io::Result<Option<String>> {
    write!(out, "Choose a letter: ")?;
    out.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    let len = input.trim_end_matches(['\r', '\n']).len();
    input.truncate(len);
    Ok(Some(input))
}
