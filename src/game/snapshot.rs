//! Serializable view of a game
//!
//! Front-ends render from a [`GameSnapshot`] rather than poking at the state
//! machine. Secrets only appear once the game is over.

use super::{GameMode, GameState, GameStatus};
use crate::core::{Code, Symbol};
use serde::Serialize;

/// A symbol with its display name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorView {
    pub code: Symbol,
    pub name: &'static str,
}

impl ColorView {
    fn of(code: &Code) -> Vec<Self> {
        code.symbols().iter().copied().map(Self::from).collect()
    }
}

impl From<Symbol> for ColorView {
    fn from(code: Symbol) -> Self {
        Self {
            code,
            name: code.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryView {
    pub index: usize,
    pub player: String,
    pub guess: Vec<ColorView>,
    pub exact: usize,
    pub color_only: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSummary {
    pub name: String,
    pub remaining: usize,
    pub total: usize,
    pub is_active: bool,
}

/// A revealed secret
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretView {
    pub owner: String,
    pub code: Vec<Symbol>,
    /// Colour names, e.g. `Red, Green, Blue, Yellow`
    pub text: String,
}

impl SecretView {
    fn new(owner: &str, code: &Code) -> Self {
        Self {
            owner: owner.to_string(),
            code: code.symbols().to_vec(),
            text: code.text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub mode: GameMode,
    pub mode_label: &'static str,
    pub length: usize,
    pub max_attempts: usize,
    pub allow_repeats: bool,
    pub palette: Vec<ColorView>,
    pub history: Vec<HistoryView>,
    pub status: GameStatus,
    pub message: String,
    pub winner: Option<String>,
    pub active_player: Option<String>,
    pub attempts_left: Option<usize>,
    pub players: Vec<PlayerSummary>,
    /// The single secret of a one-secret mode, once the game is over
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<SecretView>,
    /// Every secret with its owner, once the game is over
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<SecretView>,
    /// Codes the AI still considers possible, in modes with an AI guesser
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_candidates: Option<usize>,
}

impl GameState {
    /// Build a serializable view of the current state
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        let mode = self.mode();
        let secrets = self.revealed_secrets();
        let secret = self.revealed_secret().map(|code| {
            let owner = secrets.first().map_or("", |(owner, _)| *owner);
            SecretView::new(owner, code)
        });

        GameSnapshot {
            mode,
            mode_label: mode.label(),
            length: self.length(),
            max_attempts: self.max_attempts(),
            allow_repeats: self.space().allow_repeats(),
            palette: self
                .space()
                .palette()
                .symbols()
                .iter()
                .copied()
                .map(ColorView::from)
                .collect(),
            history: self
                .history()
                .iter()
                .map(|entry| HistoryView {
                    index: entry.index,
                    player: entry.player.clone(),
                    guess: ColorView::of(&entry.guess),
                    exact: entry.feedback.exact,
                    color_only: entry.feedback.color_only,
                })
                .collect(),
            status: self.status(),
            message: self.message().to_string(),
            winner: self.winner().map(str::to_string),
            active_player: self.active_player().map(str::to_string),
            attempts_left: self.attempts_left(),
            players: self
                .seat_summaries()
                .into_iter()
                .map(|(name, remaining, is_active)| PlayerSummary {
                    name: name.to_string(),
                    remaining,
                    total: self.max_attempts(),
                    is_active,
                })
                .collect(),
            secret,
            secrets: secrets
                .iter()
                .map(|(owner, code)| SecretView::new(owner, code))
                .collect(),
            ai_candidates: self.ai_candidates(),
        }
    }
}
