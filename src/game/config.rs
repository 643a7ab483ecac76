//! Game modes and setup parameters

use super::{AI_NAME, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which game variant is being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// The AI picks a secret, one player guesses
    #[default]
    PlayerVsAi,
    /// The AI picks a secret, two players take turns guessing it
    PvpOneByOne,
    /// The player picks a secret, the AI guesses
    AiGuesses,
    /// Player and AI each pick a secret and race to crack the other's
    Versus,
    /// Two players each pick a secret and race to crack the other's
    PvpDuel,
}

impl GameMode {
    pub const ALL: [Self; 5] = [
        Self::PlayerVsAi,
        Self::PvpOneByOne,
        Self::AiGuesses,
        Self::Versus,
        Self::PvpDuel,
    ];

    /// Stable identifier used in snapshots and on the wire
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::PlayerVsAi => "player_vs_ai",
            Self::PvpOneByOne => "pvp_one_by_one",
            Self::AiGuesses => "ai_guesses",
            Self::Versus => "versus",
            Self::PvpDuel => "pvp_duel",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PlayerVsAi => "Player vs AI",
            Self::PvpOneByOne => "Player vs Player (one by one)",
            Self::AiGuesses => "AI guesses your code",
            Self::Versus => "Player vs AI: duel",
            Self::PvpDuel => "Player vs Player: duel",
        }
    }

    /// Parse a mode key, accepting `-` in place of `_`
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = key.trim().to_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|mode| mode.key() == normalized)
    }

    /// Number of human players taking part
    #[must_use]
    pub const fn human_players(self) -> usize {
        match self {
            Self::PvpOneByOne | Self::PvpDuel => 2,
            Self::PlayerVsAi | Self::AiGuesses | Self::Versus => 1,
        }
    }

    /// Number of player names that must be supplied
    ///
    /// Single-player modes fall back to a default name.
    #[must_use]
    pub const fn required_names(self) -> usize {
        match self {
            Self::PvpOneByOne | Self::PvpDuel => 2,
            Self::PlayerVsAi | Self::AiGuesses | Self::Versus => 0,
        }
    }

    /// Number of human-chosen secret codes the mode needs
    #[must_use]
    pub const fn required_secrets(self) -> usize {
        match self {
            Self::PlayerVsAi | Self::PvpOneByOne => 0,
            Self::AiGuesses | Self::Versus => 1,
            Self::PvpDuel => 2,
        }
    }

    /// Whether an AI seat guesses, so the game needs a solver
    #[must_use]
    pub const fn has_ai_guesser(self) -> bool {
        matches!(self, Self::AiGuesses | Self::Versus)
    }

    /// Modes that only make sense with someone at the keyboard picking secrets
    #[must_use]
    pub const fn is_console_only(self) -> bool {
        !matches!(self, Self::PlayerVsAi | Self::PvpOneByOne)
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Parameters for starting a game
///
/// Missing fields take their defaults when deserialized, so hosts can send
/// only what the player changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub length: usize,
    #[serde(alias = "color_count")]
    pub palette_size: usize,
    pub max_attempts: usize,
    /// Player names in turn order
    pub players: Vec<String>,
    /// Human-chosen secrets in player order, for the modes that need them
    pub secrets: Vec<String>,
    pub allow_repeats: bool,
}

impl GameConfig {
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Trimmed human player names in turn order, with defaults for blanks
    ///
    /// # Errors
    /// `MissingPlayers` when a two-player mode has fewer than two entries and
    /// `DuplicatePlayer` when two names clash or a human takes the AI's name.
    pub fn player_names(&self) -> Result<Vec<String>, ConfigError> {
        let required = self.mode.required_names();
        if self.players.len() < required {
            return Err(ConfigError::MissingPlayers {
                required,
                supplied: self.players.len(),
            });
        }

        let humans = self.mode.human_players();
        let names: Vec<String> = (0..humans)
            .map(|i| {
                let given = self.players.get(i).map_or("", |name| name.trim());
                if !given.is_empty() {
                    given.to_string()
                } else if humans == 1 {
                    "Player".to_string()
                } else {
                    format!("Player {}", i + 1)
                }
            })
            .collect();

        let ai_seat = self.mode.has_ai_guesser();
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) || (ai_seat && name == AI_NAME) {
                return Err(ConfigError::DuplicatePlayer { name: name.clone() });
            }
        }
        Ok(names)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsAi,
            length: 4,
            palette_size: 6,
            max_attempts: 10,
            players: Vec::new(),
            secrets: Vec::new(),
            allow_repeats: false,
        }
    }
}
