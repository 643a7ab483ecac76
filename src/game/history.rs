//! Guess history

use crate::core::{Code, Feedback};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One evaluated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// 1-based position in the game's history
    pub index: usize,
    pub player: String,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Ongoing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ongoing => "ongoing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}
