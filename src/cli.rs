//! Command-line options
//!
//! Flags for the guess budget, a replacement word file and the plain
//! console mode.

use crate::game::{load_words_from_file, GameOptions};
use clap::Parser;
use std::io;
use std::path::PathBuf;

/// Guess the secret word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of incorrect guesses allowed (default 9)
    #[arg(short = 'g', long = "guesses")]
    pub guesses: Option<u32>,

    /// Path to a newline-delimited word file to use instead of the bundled list
    #[arg(short = 'w', long = "words")]
    pub words_path: Option<PathBuf>,

    /// Play with plain line-based prompts instead of the full-screen UI
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Turn the flags into game options, reading the word file if given.
    pub fn game_options(&self) -> io::Result<GameOptions> {
        let words = match &self.words_path {
            Some(path) => Some(load_words_from_file(path)?),
            None => None,
        };
        Ok(GameOptions {
            max_incorrect_guesses: self.guesses,
            words,
        })
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let cli = Cli::try_parse_from(["gallows"]).unwrap();
        assert_eq!(cli.guesses, None);
        assert!(cli.words_path.is_none());
        assert!(!cli.plain);
    }

    #[test]
    fn test_parse_all_args() {
        let cli = Cli::try_parse_from(["gallows", "-g", "5", "--words", "list.txt", "--plain"]).unwrap();
        assert_eq!(cli.guesses, Some(5));
        assert_eq!(cli.words_path, Some(PathBuf::from("list.txt")));
        assert!(cli.plain);
    }

    #[test]
    fn test_parse_rejects_negative_guesses() {
        assert!(Cli::try_parse_from(["gallows", "--guesses", "-1"]).is_err());
    }

    #[test]
    fn test_game_options_without_file() {
        let cli = Cli::try_parse_from(["gallows", "--guesses", "3"]).unwrap();
        let options = cli.game_options().unwrap();
        assert_eq!(options.max_incorrect_guesses, Some(3));
        assert!(options.words.is_none());
    }

    #[test]
    fn test_game_options_reads_file() {
        let path = std::env::temp_dir().join(format!("gallows_cli_words_{}.txt", std::process::id()));
        std::fs::write(&path, "Ricky\nEarl\n").unwrap();

        let path_arg = path.to_string_lossy().into_owned();
        let cli = Cli::try_parse_from(["gallows", "-w", path_arg.as_str()]).unwrap();
        let options = cli.game_options();
        let _ = std::fs::remove_file(&path);

        assert_eq!(
            options.unwrap().words,
            Some(vec!["Ricky".to_string(), "Earl".to_string()])
        );
    }

    #[test]
    fn test_game_options_missing_file() {
        let cli = Cli::try_parse_from(["gallows", "-w", "/nonexistent/gallows/words.txt"]).unwrap();
        assert!(cli.game_options().is_err());
    }
}
