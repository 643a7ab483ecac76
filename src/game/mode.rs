//! Per-mode game state
//!
//! Every mode is a small set of seats taking turns. Each seat has its own
//! attempt counter and a secret it is trying to crack; AI seats also carry
//! their solver. The state machine in `state.rs` only talks to seats through
//! the accessors here, so adding a mode means adding a variant and its arms.

use super::GameMode;
use crate::core::Code;
use crate::solver::Solver;

/// Name used for the AI seat and as the owner of AI-generated secrets
pub const AI_NAME: &str = "AI";

/// One participant's turn bookkeeping
#[derive(Debug, Clone)]
pub(crate) struct Seat {
    pub name: String,
    pub used: usize,
}

impl Seat {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            used: 0,
        }
    }

    pub(crate) fn remaining(&self, max_attempts: usize) -> usize {
        max_attempts.saturating_sub(self.used)
    }
}

/// A seat played by the solver
#[derive(Debug, Clone)]
pub(crate) struct AiSeat {
    pub seat: Seat,
    pub solver: Solver,
}

/// Mode-specific payload of a game
#[derive(Debug, Clone)]
pub(crate) enum ModeState {
    PlayerVsAi {
        player: Seat,
        secret: Code,
    },
    PvpOneByOne {
        players: [Seat; 2],
        secret: Code,
        turn: usize,
    },
    AiGuesses {
        ai: AiSeat,
        /// Name of the human who chose the secret
        owner: String,
        secret: Code,
    },
    Versus {
        player: Seat,
        ai: AiSeat,
        /// Chosen by the player, cracked by the AI
        player_secret: Code,
        /// Generated by the AI, cracked by the player
        ai_secret: Code,
        turn: usize,
    },
    PvpDuel {
        players: [Seat; 2],
        /// `secrets[i]` belongs to `players[i]`
        secrets: [Code; 2],
        turn: usize,
    },
}

impl ModeState {
    pub(crate) const fn mode(&self) -> GameMode {
        match self {
            Self::PlayerVsAi { .. } => GameMode::PlayerVsAi,
            Self::PvpOneByOne { .. } => GameMode::PvpOneByOne,
            Self::AiGuesses { .. } => GameMode::AiGuesses,
            Self::Versus { .. } => GameMode::Versus,
            Self::PvpDuel { .. } => GameMode::PvpDuel,
        }
    }

    pub(crate) const fn seat_count(&self) -> usize {
        match self {
            Self::PlayerVsAi { .. } | Self::AiGuesses { .. } => 1,
            Self::PvpOneByOne { .. } | Self::Versus { .. } | Self::PvpDuel { .. } => 2,
        }
    }

    /// Seat whose turn it is
    pub(crate) const fn turn(&self) -> usize {
        match self {
            Self::PlayerVsAi { .. } | Self::AiGuesses { .. } => 0,
            Self::PvpOneByOne { turn, .. } | Self::Versus { turn, .. } | Self::PvpDuel { turn, .. } => {
                *turn
            }
        }
    }

    fn set_turn(&mut self, next: usize) {
        match self {
            Self::PlayerVsAi { .. } | Self::AiGuesses { .. } => {}
            Self::PvpOneByOne { turn, .. } | Self::Versus { turn, .. } | Self::PvpDuel { turn, .. } => {
                *turn = next;
            }
        }
    }

    pub(crate) fn seat(&self, index: usize) -> &Seat {
        match self {
            Self::PlayerVsAi { player, .. } => player,
            Self::AiGuesses { ai, .. } => &ai.seat,
            Self::PvpOneByOne { players, .. } | Self::PvpDuel { players, .. } => &players[index],
            Self::Versus { player, ai, .. } => {
                if index == 0 {
                    player
                } else {
                    &ai.seat
                }
            }
        }
    }

    pub(crate) fn seat_mut(&mut self, index: usize) -> &mut Seat {
        match self {
            Self::PlayerVsAi { player, .. } => player,
            Self::AiGuesses { ai, .. } => &mut ai.seat,
            Self::PvpOneByOne { players, .. } | Self::PvpDuel { players, .. } => {
                &mut players[index]
            }
            Self::Versus { player, ai, .. } => {
                if index == 0 {
                    player
                } else {
                    &mut ai.seat
                }
            }
        }
    }

    pub(crate) fn seats(&self) -> impl Iterator<Item = &Seat> {
        (0..self.seat_count()).map(|i| self.seat(i))
    }

    /// Solver driving seat `index`, if that seat is played by the AI
    pub(crate) fn solver_mut(&mut self, index: usize) -> Option<&mut Solver> {
        match self {
            Self::AiGuesses { ai, .. } => Some(&mut ai.solver),
            Self::Versus { ai, .. } if index == 1 => Some(&mut ai.solver),
            _ => None,
        }
    }

    pub(crate) const fn is_ai(&self, index: usize) -> bool {
        match self {
            Self::AiGuesses { .. } => true,
            Self::Versus { .. } => index == 1,
            Self::PlayerVsAi { .. } | Self::PvpOneByOne { .. } | Self::PvpDuel { .. } => false,
        }
    }

    /// The secret seat `index` is trying to crack
    pub(crate) fn target(&self, index: usize) -> &Code {
        match self {
            Self::PlayerVsAi { secret, .. }
            | Self::PvpOneByOne { secret, .. }
            | Self::AiGuesses { secret, .. } => secret,
            Self::Versus {
                player_secret,
                ai_secret,
                ..
            } => {
                if index == 0 {
                    ai_secret
                } else {
                    player_secret
                }
            }
            Self::PvpDuel { secrets, .. } => &secrets[1 - index],
        }
    }

    /// The one secret everybody is after, in single-secret modes
    pub(crate) const fn shared_secret(&self) -> Option<&Code> {
        match self {
            Self::PlayerVsAi { secret, .. }
            | Self::PvpOneByOne { secret, .. }
            | Self::AiGuesses { secret, .. } => Some(secret),
            Self::Versus { .. } | Self::PvpDuel { .. } => None,
        }
    }

    /// Every secret in the game with the name of whoever chose it
    pub(crate) fn secrets(&self) -> Vec<(&str, &Code)> {
        match self {
            Self::PlayerVsAi { secret, .. } | Self::PvpOneByOne { secret, .. } => {
                vec![(AI_NAME, secret)]
            }
            Self::AiGuesses { owner, secret, .. } => vec![(owner.as_str(), secret)],
            Self::Versus {
                player,
                ai,
                player_secret,
                ai_secret,
                ..
            } => vec![
                (player.name.as_str(), player_secret),
                (ai.seat.name.as_str(), ai_secret),
            ],
            Self::PvpDuel {
                players, secrets, ..
            } => vec![
                (players[0].name.as_str(), &secrets[0]),
                (players[1].name.as_str(), &secrets[1]),
            ],
        }
    }

    pub(crate) fn all_exhausted(&self, max_attempts: usize) -> bool {
        self.seats().all(|seat| seat.used >= max_attempts)
    }

    /// Pass the turn to the next seat that still has attempts left
    pub(crate) fn advance_turn(&mut self, max_attempts: usize) {
        let count = self.seat_count();
        let current = self.turn();
        let next = (1..=count)
            .map(|step| (current + step) % count)
            .find(|&i| self.seat(i).used < max_attempts);
        if let Some(next) = next {
            self.set_turn(next);
        }
    }

    /// Status line once every seat has run out of attempts
    pub(crate) fn out_of_attempts_message(&self) -> String {
        match self {
            Self::PlayerVsAi { secret, .. } => format!(
                "Out of attempts. The secret code was {} ({}).",
                secret.pretty(),
                secret.text()
            ),
            Self::PvpOneByOne { secret, .. } => format!(
                "Nobody found the secret code. It was {} ({}).",
                secret.pretty(),
                secret.text()
            ),
            Self::AiGuesses { owner, secret, .. } => format!(
                "The AI ran out of attempts without cracking {owner}'s code {}.",
                secret.pretty()
            ),
            Self::Versus { .. } | Self::PvpDuel { .. } => {
                let codes = self
                    .secrets()
                    .iter()
                    .map(|(owner, code)| format!("{owner}'s code: {}", code.pretty()))
                    .collect::<Vec<_>>()
                    .join(" | ");
                format!("Draw! Nobody cracked their opponent's code. {codes}")
            }
        }
    }
}
