//! Input validation for guesses and word-list entries
//!
//! Validates:
//! - Guesses: exactly one ASCII letter, any case
//! - Words: one or more uppercase letters A-Z, nothing else

use super::error::GameError;

/// Validate a single-letter guess and normalize it to uppercase.
///
/// The input must be exactly one character and that character must be an
/// ASCII letter. Anything else, including the empty string and non-ASCII
/// letters like `é`, fails with [`GameError::NotALetter`] carrying the raw
/// input unchanged.
pub fn parse_letter(input: &str) -> Result<char, GameError> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(GameError::NotALetter {
            letter: input.to_string(),
        }),
    }
}

/// Check that a candidate is a guessable word: `^[A-Z]+$`.
pub fn is_word(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_letter_uppercased() {
        assert_eq!(parse_letter("q"), Ok('Q'));
        assert_eq!(parse_letter("Q"), Ok('Q'));
    }

    #[test]
    fn test_rejects_multiple_characters() {
        assert_eq!(
            parse_letter("pea"),
            Err(GameError::NotALetter {
                letter: "pea".to_string()
            })
        );
    }

    #[test]
    fn test_rejects_non_letters() {
        for input in ["", "2", " ", "_", "[", "`", "é", " a"] {
            assert!(
                matches!(parse_letter(input), Err(GameError::NotALetter { ref letter }) if letter == input),
                "Expected NotALetter for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_is_word() {
        assert!(is_word("BEVO"));
        assert!(is_word("A"));
        assert!(!is_word(""));
        assert!(!is_word("bevo"));
        assert!(!is_word("SWAMP THING"));
        assert!(!is_word("O.M.A.C."));
        assert!(!is_word("2FACE"));
        assert!(!is_word("ÉCLAIR"));
    }
}
