//! Game setup and play errors
//!
//! Every variant is user-correctable: the game state is never modified
//! before all checks pass.

use crate::core::{CodeError, ValidationError};
use derive_more::{Display, Error};

/// Invalid game-setup parameters
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("Unsupported palette size {size}; choose one of {supported}")]
    UnsupportedPalette { size: usize, supported: String },
    #[display("Code length must be between 1 and {max}, got {length}")]
    LengthOutOfRange { length: usize, max: usize },
    #[display("The attempt budget must be at least 1")]
    NoAttempts,
    #[display("This mode needs {required} player names, got {supplied}")]
    MissingPlayers { required: usize, supplied: usize },
    #[display("Player names must differ: '{name}' is used twice")]
    DuplicatePlayer { name: String },
    #[display("This mode needs {required} secret codes, got {supplied}")]
    MissingSecrets { required: usize, supplied: usize },
    #[display("{owner}'s secret code is invalid: {source}")]
    InvalidSecret {
        owner: String,
        source: ValidationError,
    },
    #[display("Mode '{mode}' is only available in the console")]
    ModeUnavailable { mode: String },
    #[display("{source}")]
    Code { source: CodeError },
}

impl From<CodeError> for ConfigError {
    fn from(source: CodeError) -> Self {
        Self::Code { source }
    }
}

/// Errors from submitting a guess
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The guess broke an input rule; nothing was recorded
    #[display("{source}")]
    Validation { source: ValidationError },
    /// The game already finished
    #[display("The game is over; start a new game")]
    GameOver,
    /// Someone other than the active player tried to move
    #[display("It is {expected}'s turn, not {claimed}'s")]
    WrongTurn { expected: String, claimed: String },
}

impl From<ValidationError> for GameError {
    fn from(source: ValidationError) -> Self {
        Self::Validation { source }
    }
}
