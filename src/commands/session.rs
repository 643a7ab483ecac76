//! JSON-lines session host
//!
//! Serves many games over a line-oriented JSON protocol on stdin/stdout. Each
//! request is one JSON object with an `op` field; each response is one JSON
//! object carrying the session key, the game snapshot (or `null`) and an
//! `error` message on failure. Games live in a [`GameStore`] keyed by session.

use crate::core::{Symbol, available_palettes};
use crate::game::{ConfigError, GameConfig, GameSnapshot, create_game};
use crate::store::{EvictionPolicy, GameStore};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// A guess as free text (`"RGBY"`) or one entry per peg (`["R", "G", "B", "Y"]`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum GuessInput {
    Text(String),
    Symbols(Vec<String>),
}

/// One protocol request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Start (or restart) a game; a session key is issued when none is given
    Start {
        #[serde(default)]
        session: Option<String>,
        #[serde(default)]
        config: GameConfig,
    },
    Guess {
        session: String,
        guess: GuessInput,
        #[serde(default)]
        player: Option<String>,
    },
    State {
        session: String,
    },
    /// Drop the session's game
    Reset {
        session: String,
    },
    Palettes,
}

/// One protocol response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
    pub state: Option<GameSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palettes: Option<BTreeMap<usize, Vec<Symbol>>>,
}

impl Response {
    fn failure(session: Option<String>, error: impl ToString) -> Self {
        Self {
            session,
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}

/// Request dispatcher over a session store
pub struct SessionHost<P: EvictionPolicy> {
    store: GameStore<P>,
}

impl<P: EvictionPolicy> SessionHost<P> {
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self {
            store: GameStore::new(policy),
        }
    }

    #[must_use]
    pub const fn store(&self) -> &GameStore<P> {
        &self.store
    }

    /// Parse and handle one request line
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(request) => self.handle(request),
            Err(err) => {
                warn!(error = %err, "Malformed request");
                Response::failure(None, format!("Invalid request: {err}"))
            }
        }
    }

    #[instrument(skip(self))]
    pub fn handle(&mut self, request: Request) -> Response {
        match request {
            Request::Start { session, config } => self.start(session, &config),
            Request::Guess {
                session,
                guess,
                player,
            } => self.guess(session, &guess, player.as_deref()),
            Request::State { session } => {
                let state = self.store.get(&session).map(|game| game.snapshot());
                Response {
                    session: Some(session),
                    state,
                    ..Response::default()
                }
            }
            Request::Reset { session } => {
                if self.store.remove(&session).is_some() {
                    info!(%session, "Session reset");
                }
                Response {
                    session: Some(session),
                    ..Response::default()
                }
            }
            Request::Palettes => Response {
                palettes: Some(available_palettes()),
                ..Response::default()
            },
        }
    }

    fn start(&mut self, session: Option<String>, config: &GameConfig) -> Response {
        if config.mode.is_console_only() {
            let err = ConfigError::ModeUnavailable {
                mode: config.mode.key().to_string(),
            };
            warn!(error = %err, "Rejected game setup");
            return Response::failure(session, err);
        }

        match create_game(config) {
            Ok(game) => {
                let session = session
                    .filter(|key| !key.trim().is_empty())
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let state = Some(game.snapshot());
                self.store.insert(session.clone(), game);
                info!(%session, mode = %config.mode, "Session started");
                Response {
                    session: Some(session),
                    state,
                    ..Response::default()
                }
            }
            Err(err) => {
                warn!(error = %err, "Rejected game setup");
                Response::failure(session, err)
            }
        }
    }

    fn guess(&mut self, session: String, guess: &GuessInput, player: Option<&str>) -> Response {
        let Some(game) = self.store.get_mut(&session) else {
            return Response::failure(Some(session), "No active game for this session");
        };

        let outcome = match guess {
            GuessInput::Text(text) => game.make_guess(text, player),
            GuessInput::Symbols(entries) => game.make_guess_symbols(entries.as_slice(), player),
        };
        let state = Some(game.snapshot());
        Response {
            session: Some(session),
            state,
            error: outcome.err().map(|err| err.to_string()),
            palettes: None,
        }
    }
}

/// Serve requests line by line until the input ends
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_session<P: EvictionPolicy, R: BufRead, W: Write>(
    policy: P,
    input: R,
    mut output: W,
) -> Result<()> {
    let mut host = SessionHost::new(policy);
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = host.handle_line(&line);
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        output.flush()?;
    }
    info!(sessions = host.store().len(), "Session host finished");
    Ok(())
}
