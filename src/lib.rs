//! gallows - guess the word one letter at a time
//!
//! The [`game`] module is the engine; [`app`], [`console`] and [`tui`] are
//! the front ends the `gallows` binary drives.

pub mod app;
pub mod cli;
pub mod console;
pub mod game;
pub mod tui;

pub use game::{GameConfig, GameError, GameOptions, GameSession, GameStatus};
