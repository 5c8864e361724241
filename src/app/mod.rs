//! Application state and player-facing text

pub mod format;
pub mod state;

pub use state::{App, Record};
