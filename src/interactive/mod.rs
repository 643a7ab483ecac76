//! Interactive TUI interface
//!
//! A ratatui front-end for the modes that need no hidden setup at the
//! keyboard. AI turns are played automatically between human guesses.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
