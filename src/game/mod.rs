//! Game state machine and its configuration
//!
//! Five modes share one state machine: a set of seats taking turns at cracking
//! a secret, each with its own attempt budget. Games are created with
//! [`create_game`] and advanced with [`GameState::make_guess`] for humans and
//! [`GameState::play_ai_turn`] for the AI.

mod config;
mod error;
mod history;
mod mode;
mod snapshot;
mod state;

pub use config::{GameConfig, GameMode};
pub use error::{ConfigError, GameError};
pub use history::{GameStatus, HistoryEntry};
pub use mode::AI_NAME;
pub use snapshot::{ColorView, GameSnapshot, HistoryView, PlayerSummary, SecretView};
pub use state::{GameState, create_game, create_game_with};
