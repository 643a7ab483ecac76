//! The game state machine
//!
//! A [`GameState`] is created from a validated [`GameConfig`] and only changes
//! through [`GameState::make_guess`] and [`GameState::play_ai_turn`]. All
//! checks run before anything is mutated, so a rejected submission leaves the
//! history, counters and turn untouched.

use super::mode::{AI_NAME, AiSeat, ModeState, Seat};
use super::{ConfigError, GameConfig, GameError, GameMode, GameStatus, HistoryEntry};
use crate::core::{Code, CodeSpace, Feedback, Palette};
use crate::solver::Solver;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

/// A live game
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    space: CodeSpace,
    max_attempts: usize,
    history: Vec<HistoryEntry>,
    status: GameStatus,
    winner: Option<String>,
    message: String,
    mode: ModeState,
}

/// Start a new game using the thread-local generator for AI secrets
///
/// # Errors
/// Returns a `ConfigError` for an unsupported palette size, a code length
/// outside `1..=palette size`, a zero attempt budget, missing or duplicate
/// player names, or missing or invalid player-chosen secrets.
pub fn create_game(config: &GameConfig) -> Result<GameState, ConfigError> {
    create_game_with(config, &mut rand::rng())
}

/// Start a new game drawing AI secrets from `rng`
///
/// # Errors
/// Same as [`create_game`].
#[instrument(skip(config, rng), fields(mode = %config.mode))]
pub fn create_game_with<R: Rng + ?Sized>(
    config: &GameConfig,
    rng: &mut R,
) -> Result<GameState, ConfigError> {
    let palette =
        Palette::for_size(config.palette_size).ok_or_else(|| ConfigError::UnsupportedPalette {
            size: config.palette_size,
            supported: Palette::SUPPORTED_SIZES
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" or "),
        })?;
    if config.length == 0 || config.length > palette.size() {
        return Err(ConfigError::LengthOutOfRange {
            length: config.length,
            max: palette.size(),
        });
    }
    if config.max_attempts < 1 {
        return Err(ConfigError::NoAttempts);
    }
    let space = CodeSpace::new(config.length, palette, config.allow_repeats)?;
    if config.mode.has_ai_guesser() {
        Solver::check_space(&space)?;
    }

    let names = config.player_names()?;
    let secrets = player_secrets(config, &names, &space)?;
    let mode = build_mode(config.mode, names, secrets, space, rng);

    let mut game = GameState {
        config: GameConfig {
            secrets: Vec::new(),
            ..config.clone()
        },
        space,
        max_attempts: config.max_attempts,
        history: Vec::new(),
        status: GameStatus::Ongoing,
        winner: None,
        message: String::new(),
        mode,
    };
    game.message = game.opening_message();

    info!(
        length = config.length,
        palette = config.palette_size,
        max_attempts = config.max_attempts,
        allow_repeats = config.allow_repeats,
        "Game created"
    );
    Ok(game)
}

/// Player-chosen secrets, validated like guesses
fn player_secrets(
    config: &GameConfig,
    names: &[String],
    space: &CodeSpace,
) -> Result<Vec<Code>, ConfigError> {
    let required = config.mode.required_secrets();
    if config.secrets.len() < required {
        return Err(ConfigError::MissingSecrets {
            required,
            supplied: config.secrets.len(),
        });
    }
    if config.secrets.len() > required {
        debug!(
            supplied = config.secrets.len(),
            required, "Ignoring extra secrets"
        );
    }

    config
        .secrets
        .iter()
        .take(required)
        .zip(names)
        .map(|(raw, owner)| {
            space.parse(raw).map_err(|source| ConfigError::InvalidSecret {
                owner: owner.clone(),
                source,
            })
        })
        .collect()
}

fn build_mode<R: Rng + ?Sized>(
    mode: GameMode,
    names: Vec<String>,
    secrets: Vec<Code>,
    space: CodeSpace,
    rng: &mut R,
) -> ModeState {
    let mut names = names.into_iter();
    let mut secrets = secrets.into_iter();
    let mut next_name = || names.next().unwrap_or_default();
    let mut next_secret = |rng: &mut R| secrets.next().unwrap_or_else(|| space.generate_with(rng));
    let ai = |space: CodeSpace| AiSeat {
        seat: Seat::new(AI_NAME),
        solver: Solver::new(space),
    };

    match mode {
        GameMode::PlayerVsAi => ModeState::PlayerVsAi {
            player: Seat::new(next_name()),
            secret: space.generate_with(rng),
        },
        GameMode::PvpOneByOne => ModeState::PvpOneByOne {
            players: [Seat::new(next_name()), Seat::new(next_name())],
            secret: space.generate_with(rng),
            turn: 0,
        },
        GameMode::AiGuesses => ModeState::AiGuesses {
            ai: ai(space),
            owner: next_name(),
            secret: next_secret(rng),
        },
        GameMode::Versus => ModeState::Versus {
            player: Seat::new(next_name()),
            ai: ai(space),
            player_secret: next_secret(rng),
            ai_secret: space.generate_with(rng),
            turn: 0,
        },
        GameMode::PvpDuel => ModeState::PvpDuel {
            players: [Seat::new(next_name()), Seat::new(next_name())],
            secrets: [next_secret(rng), next_secret(rng)],
            turn: 0,
        },
    }
}

impl GameState {
    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode.mode()
    }

    /// The configuration the game was created from, minus player-chosen secrets
    ///
    /// Secrets are only ever revealed through [`GameState::revealed_secrets`]
    /// once the game is over.
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }

    #[must_use]
    pub const fn length(&self) -> usize {
        self.space.length()
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Name of the seat to move, or `None` once the game is over
    #[must_use]
    pub fn active_player(&self) -> Option<&str> {
        (!self.is_over()).then(|| self.mode.seat(self.mode.turn()).name.as_str())
    }

    /// Attempts left for the active seat, or `None` once the game is over
    #[must_use]
    pub fn attempts_left(&self) -> Option<usize> {
        (!self.is_over()).then(|| {
            self.mode
                .seat(self.mode.turn())
                .remaining(self.max_attempts)
        })
    }

    /// Whether the seat to move is played by the AI
    #[must_use]
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over() && self.mode.is_ai(self.mode.turn())
    }

    /// `(name, remaining, is_active)` for every seat in turn order
    #[must_use]
    pub fn seat_summaries(&self) -> Vec<(&str, usize, bool)> {
        let turn = self.mode.turn();
        self.mode
            .seats()
            .enumerate()
            .map(|(i, seat)| {
                (
                    seat.name.as_str(),
                    seat.remaining(self.max_attempts),
                    !self.is_over() && i == turn,
                )
            })
            .collect()
    }

    /// Secrets with their owners, only once the game is over
    #[must_use]
    pub fn revealed_secrets(&self) -> Vec<(&str, &Code)> {
        if self.is_over() {
            self.mode.secrets()
        } else {
            Vec::new()
        }
    }

    /// The single secret of a one-secret mode, only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Code> {
        if self.is_over() {
            self.mode.shared_secret()
        } else {
            None
        }
    }

    /// Candidates left for the AI seat, if one is in play
    #[must_use]
    pub fn ai_candidates(&self) -> Option<usize> {
        match &self.mode {
            ModeState::AiGuesses { ai, .. } | ModeState::Versus { ai, .. } => {
                Some(ai.solver.candidate_count())
            }
            _ => None,
        }
    }

    /// Submit a human guess typed as text, e.g. `"RGBY"` or `"r g b y"`
    ///
    /// `player` is the name the submitter claims; `None` means "whoever is to
    /// move".
    ///
    /// # Errors
    /// `GameOver` once the game has finished, `WrongTurn` if the claimed player
    /// is not the one to move or the AI is to move, and `Validation` for a
    /// malformed guess. Nothing is recorded on error.
    #[instrument(skip(self), fields(mode = %self.mode()))]
    pub fn make_guess(&mut self, raw: &str, player: Option<&str>) -> Result<Feedback, GameError> {
        let seat = self.check_human_turn(player)?;
        let guess = self.space.parse(raw).inspect_err(|err| {
            warn!(error = %err, "Rejected guess");
        })?;
        Ok(self.apply(seat, guess))
    }

    /// Submit a human guess given as one entry per peg, e.g. `["R", "G", "B", "Y"]`
    ///
    /// # Errors
    /// Same as [`GameState::make_guess`].
    #[instrument(skip(self, entries), fields(mode = %self.mode()))]
    pub fn make_guess_symbols<S: AsRef<str>>(
        &mut self,
        entries: &[S],
        player: Option<&str>,
    ) -> Result<Feedback, GameError> {
        let seat = self.check_human_turn(player)?;
        let guess = self.space.parse_symbols(entries).inspect_err(|err| {
            warn!(error = %err, "Rejected guess");
        })?;
        Ok(self.apply(seat, guess))
    }

    /// Let the AI make its move
    ///
    /// # Errors
    /// `GameOver` once the game has finished and `WrongTurn` when a human is
    /// to move.
    pub fn play_ai_turn(&mut self) -> Result<Feedback, GameError> {
        self.play_ai_turn_with(&mut rand::rng())
    }

    /// Let the AI make its move, drawing its guess from `rng`
    ///
    /// # Errors
    /// Same as [`GameState::play_ai_turn`].
    #[instrument(skip(self, rng), fields(mode = %self.mode()))]
    pub fn play_ai_turn_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Feedback, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let seat = self.mode.turn();
        let Some(solver) = self.mode.solver_mut(seat) else {
            let expected = self.mode.seat(seat).name.clone();
            warn!(%expected, "AI asked to move out of turn");
            return Err(GameError::WrongTurn {
                expected,
                claimed: AI_NAME.to_string(),
            });
        };

        let guess = solver.next_guess_with(rng);
        let feedback = self.apply(seat, guess.clone());
        if let Some(solver) = self.mode.solver_mut(seat) {
            solver.apply_feedback(&guess, feedback);
        }
        Ok(feedback)
    }

    /// Play AI moves until a human is to move or the game ends
    ///
    /// Returns how many moves the AI made.
    pub fn run_ai_turns(&mut self) -> usize {
        let mut moves = 0;
        while self.is_ai_turn() {
            if self.play_ai_turn().is_err() {
                break;
            }
            moves += 1;
        }
        moves
    }

    fn check_human_turn(&self, player: Option<&str>) -> Result<usize, GameError> {
        if self.is_over() {
            warn!("Guess submitted after the game ended");
            return Err(GameError::GameOver);
        }

        let seat = self.mode.turn();
        let expected = &self.mode.seat(seat).name;
        let claimed = player.map(str::trim).filter(|name| !name.is_empty());

        if self.mode.is_ai(seat) {
            warn!(%expected, "Human guess submitted on the AI's turn");
            return Err(GameError::WrongTurn {
                expected: expected.clone(),
                claimed: claimed.unwrap_or("player").to_string(),
            });
        }
        if let Some(claimed) = claimed
            && claimed != expected
        {
            warn!(%expected, %claimed, "Guess submitted out of turn");
            return Err(GameError::WrongTurn {
                expected: expected.clone(),
                claimed: claimed.to_string(),
            });
        }
        Ok(seat)
    }

    /// Score an already-validated guess for `seat` and advance the game
    fn apply(&mut self, seat: usize, guess: Code) -> Feedback {
        let feedback = Feedback::calculate(self.mode.target(seat), &guess);
        let name = self.mode.seat(seat).name.clone();
        let length = self.length();

        debug!(
            player = %name,
            guess = %guess,
            exact = feedback.exact,
            color_only = feedback.color_only,
            "Guess scored"
        );
        self.history.push(HistoryEntry {
            index: self.history.len() + 1,
            player: name.clone(),
            guess,
            feedback,
        });
        self.mode.seat_mut(seat).used += 1;

        if feedback.is_solved(length) {
            let used = self.mode.seat(seat).used;
            self.status = GameStatus::Won;
            self.message = format!("{name} cracked the code on attempt {used}!");
            info!(winner = %name, attempts = used, "Game won");
            self.winner = Some(name);
        } else if self.mode.all_exhausted(self.max_attempts) {
            self.status = GameStatus::Lost;
            self.message = self.mode.out_of_attempts_message();
            info!(guesses = self.history.len(), "Game lost");
        } else {
            self.mode.advance_turn(self.max_attempts);
            let next = self.mode.seat(self.mode.turn());
            let remaining = next.remaining(self.max_attempts);
            self.message = if self.mode.seat_count() > 1 {
                format!("{feedback}. Next: {} with {remaining} attempts left.", next.name)
            } else {
                format!("{feedback}. {remaining} attempts left.")
            };
        }
        feedback
    }

    fn opening_message(&self) -> String {
        let first = &self.mode.seat(0).name;
        match &self.mode {
            ModeState::PlayerVsAi { player, .. } => format!(
                "{}, you have {} attempts to crack the secret code.",
                player.name, self.max_attempts
            ),
            ModeState::PvpOneByOne { .. } => {
                format!("Game on! {first} makes the first guess.")
            }
            ModeState::AiGuesses { owner, .. } => format!(
                "The AI has {} attempts to crack {owner}'s code.",
                self.max_attempts
            ),
            ModeState::Versus { .. } | ModeState::PvpDuel { .. } => {
                format!("Both codes are set. {first} guesses first.")
            }
        }
    }
}

#[cfg(test)]
impl GameState {
    /// Replace the AI-generated secret so tests can aim at it
    pub(crate) fn rig_secret(&mut self, text: &str) {
        let fixed = self.space.parse(text).unwrap();
        match &mut self.mode {
            ModeState::PlayerVsAi { secret, .. }
            | ModeState::PvpOneByOne { secret, .. }
            | ModeState::AiGuesses { secret, .. } => *secret = fixed,
            ModeState::Versus { ai_secret, .. } => *ai_secret = fixed,
            ModeState::PvpDuel { .. } => panic!("duel secrets come from the config"),
        }
    }

    /// Point the AI seat at a code its next guess from `rng` cannot solve
    pub(crate) fn rig_ai_target<R: Rng + Clone>(&mut self, rng: &R) {
        let mut ahead = self.clone();
        ahead.play_ai_turn_with(&mut rng.clone()).unwrap();
        let guess = ahead.history.last().unwrap().guess.clone();
        let target = self
            .space
            .enumerate()
            .into_iter()
            .find(|code| *code != guess)
            .unwrap();
        match &mut self.mode {
            ModeState::AiGuesses { secret, .. } => *secret = target,
            ModeState::Versus { player_secret, .. } => *player_secret = target,
            _ => panic!("no AI seat in this mode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(mode: GameMode, max_attempts: usize) -> GameConfig {
        GameConfig {
            max_attempts,
            ..GameConfig::new(mode)
        }
    }

    fn code(game: &GameState, text: &str) -> Code {
        game.space().parse(text).unwrap()
    }

    #[test]
    fn scenario_exact_guess_wins() {
        let mut game = create_game(&config(GameMode::PlayerVsAi, 10)).unwrap();
        game.rig_secret("RGBY");

        let fb = game.make_guess("RGBY", None).unwrap();
        assert_eq!(fb, Feedback::new(4, 0));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.winner(), Some("Player"));
        assert_eq!(game.active_player(), None);
        assert_eq!(game.attempts_left(), None);
    }

    #[test]
    fn scenario_feedback_values() {
        let mut game = create_game(&config(GameMode::PlayerVsAi, 10)).unwrap();
        game.rig_secret("RGBY");

        assert_eq!(game.make_guess("GRYB", None).unwrap(), Feedback::new(0, 4));
        assert_eq!(game.make_guess("RBGY", None).unwrap(), Feedback::new(2, 2));
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.attempts_left(), Some(8));
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.history()[1].index, 2);
        assert!(game.message().contains("8 attempts left"));
    }

    #[test]
    fn scenario_single_attempt_loss_reveals_secret() {
        let mut game = create_game(&config(GameMode::PlayerVsAi, 1)).unwrap();
        game.rig_secret("RGBY");
        assert!(game.revealed_secret().is_none());

        game.make_guess("OPRG", None).unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.winner(), None);
        assert_eq!(game.revealed_secret().map(ToString::to_string).as_deref(), Some("RGBY"));
        assert!(game.message().contains("R G B Y"));
    }

    #[test]
    fn scenario_pvp_one_by_one_win_on_second_guess() {
        let mut cfg = config(GameMode::PvpOneByOne, 3);
        cfg.players = vec!["Ada".into(), "Bob".into()];
        let mut game = create_game(&cfg).unwrap();
        game.rig_secret("RGBY");

        assert_eq!(game.active_player(), Some("Ada"));
        game.make_guess("OPRG", Some("Ada")).unwrap();
        assert_eq!(game.active_player(), Some("Bob"));
        game.make_guess("OPGR", Some("Bob")).unwrap();
        game.make_guess("RGBY", Some("Ada")).unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.winner(), Some("Ada"));
        let seats = game.seat_summaries();
        assert_eq!(seats, vec![("Ada", 1, false), ("Bob", 2, false)]);
    }

    #[test]
    fn terminal_game_rejects_guesses_without_mutation() {
        let mut game = create_game(&config(GameMode::PlayerVsAi, 1)).unwrap();
        game.rig_secret("RGBY");
        game.make_guess("RGBY", None).unwrap();

        let seats = |game: &GameState| -> Vec<(String, usize, bool)> {
            game.seat_summaries()
                .into_iter()
                .map(|(name, left, active)| (name.to_string(), left, active))
                .collect()
        };
        let history_len = game.history().len();
        let message = game.message().to_string();
        let before = seats(&game);
        assert_eq!(before, vec![("Player".to_string(), 0, false)]);

        assert_eq!(game.make_guess("RGBY", None), Err(GameError::GameOver));
        assert_eq!(game.make_guess("XXXX", None), Err(GameError::GameOver));
        assert_eq!(
            game.make_guess_symbols(&["R", "G", "B", "Y"], None),
            Err(GameError::GameOver)
        );
        assert_eq!(game.play_ai_turn(), Err(GameError::GameOver));
        assert_eq!(game.run_ai_turns(), 0);
        assert_eq!(game.history().len(), history_len);
        assert_eq!(game.message(), message);
        assert_eq!(seats(&game), before);
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.winner(), Some("Player"));
    }

    #[test]
    fn invalid_guess_consumes_nothing() {
        let mut game = create_game(&config(GameMode::PlayerVsAi, 5)).unwrap();

        for bad in ["RGB", "RGBW", "RGRY", "R1BY"] {
            let err = game.make_guess(bad, None).unwrap_err();
            assert!(matches!(err, GameError::Validation { .. }), "{bad}: {err:?}");
        }
        assert!(game.history().is_empty());
        assert_eq!(game.attempts_left(), Some(5));
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn guess_as_symbol_list() {
        let mut game = create_game(&config(GameMode::PlayerVsAi, 5)).unwrap();
        game.rig_secret("RGBY");

        let fb = game.make_guess_symbols(&["r", "g", "y", "b"], None).unwrap();
        assert_eq!(fb, Feedback::new(2, 2));
        assert!(matches!(
            game.make_guess_symbols(&["R", "G"], None),
            Err(GameError::Validation { .. })
        ));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn wrong_player_rejected() {
        let mut cfg = config(GameMode::PvpOneByOne, 3);
        cfg.players = vec!["Ada".into(), "Bob".into()];
        let mut game = create_game(&cfg).unwrap();

        let err = game.make_guess("RGBY", Some("Bob")).unwrap_err();
        assert_eq!(
            err,
            GameError::WrongTurn {
                expected: "Ada".into(),
                claimed: "Bob".into()
            }
        );
        assert!(game.history().is_empty());
        assert_eq!(game.active_player(), Some("Ada"));

        // Blank claims count as "whoever is to move"
        game.make_guess("OPRG", Some("  ")).unwrap();
        assert_eq!(game.active_player(), Some("Bob"));
    }

    #[test]
    fn single_player_mode_checks_claimed_name() {
        let mut cfg = config(GameMode::PlayerVsAi, 3);
        cfg.players = vec!["  Ada ".into()];
        let mut game = create_game(&cfg).unwrap();
        assert_eq!(game.active_player(), Some("Ada"));
        assert!(matches!(
            game.make_guess("RGBY", Some("Eve")),
            Err(GameError::WrongTurn { .. })
        ));
    }

    #[test]
    fn pvp_one_by_one_loses_when_both_exhausted() {
        let mut cfg = config(GameMode::PvpOneByOne, 2);
        cfg.players = vec!["Ada".into(), "Bob".into()];
        let mut game = create_game(&cfg).unwrap();
        game.rig_secret("RGBY");

        for _ in 0..3 {
            game.make_guess("OPRG", None).unwrap();
            assert_eq!(game.status(), GameStatus::Ongoing);
        }
        game.make_guess("OPRG", None).unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.history().len(), 4);
        assert!(game.message().starts_with("Nobody found the secret code"));
    }

    #[test]
    fn pvp_names_default_and_must_differ() {
        let mut cfg = config(GameMode::PvpOneByOne, 3);
        cfg.players = vec![String::new(), " ".into()];
        let game = create_game(&cfg).unwrap();
        let names: Vec<_> = game.seat_summaries().iter().map(|s| s.0.to_string()).collect();
        assert_eq!(names, vec!["Player 1", "Player 2"]);

        cfg.players = vec!["Ada".into(), " Ada".into()];
        assert_eq!(
            create_game(&cfg).unwrap_err(),
            ConfigError::DuplicatePlayer { name: "Ada".into() }
        );

        cfg.players = vec!["Ada".into()];
        assert_eq!(
            create_game(&cfg).unwrap_err(),
            ConfigError::MissingPlayers {
                required: 2,
                supplied: 1
            }
        );
    }

    #[test]
    fn config_validation() {
        let cfg = GameConfig {
            palette_size: 7,
            ..GameConfig::default()
        };
        assert!(matches!(
            create_game(&cfg),
            Err(ConfigError::UnsupportedPalette { size: 7, .. })
        ));

        let cfg = GameConfig {
            length: 7,
            ..GameConfig::default()
        };
        assert_eq!(
            create_game(&cfg).unwrap_err(),
            ConfigError::LengthOutOfRange { length: 7, max: 6 }
        );

        let cfg = GameConfig {
            length: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            create_game(&cfg),
            Err(ConfigError::LengthOutOfRange { .. })
        ));

        let cfg = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert_eq!(create_game(&cfg).unwrap_err(), ConfigError::NoAttempts);

        let cfg = GameConfig {
            palette_size: 8,
            length: 8,
            ..GameConfig::default()
        };
        assert!(create_game(&cfg).is_ok());
    }

    #[test]
    fn secrets_are_required_and_validated() {
        let cfg = config(GameMode::AiGuesses, 10);
        assert_eq!(
            create_game(&cfg).unwrap_err(),
            ConfigError::MissingSecrets {
                required: 1,
                supplied: 0
            }
        );

        let mut cfg = config(GameMode::PvpDuel, 10);
        cfg.players = vec!["Ada".into(), "Bob".into()];
        cfg.secrets = vec!["RGBY".into(), "RRGB".into()];
        match create_game(&cfg).unwrap_err() {
            ConfigError::InvalidSecret { owner, source } => {
                assert_eq!(owner, "Bob");
                assert!(matches!(
                    source,
                    crate::core::ValidationError::RepeatedSymbol { .. }
                ));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn ai_guesses_mode_solves_players_code() {
        let mut cfg = config(GameMode::AiGuesses, 12);
        cfg.players = vec!["Ada".into()];
        cfg.secrets = vec!["OPBY".into()];
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = create_game_with(&cfg, &mut rng).unwrap();

        assert!(game.is_ai_turn());
        assert_eq!(game.active_player(), Some(AI_NAME));
        assert!(matches!(
            game.make_guess("RGBY", None),
            Err(GameError::WrongTurn { .. })
        ));

        let start = game.ai_candidates().unwrap();
        assert_eq!(start, 360);
        while !game.is_over() {
            game.play_ai_turn_with(&mut rng).unwrap();
            if !game.is_over() {
                assert!(game.ai_candidates().unwrap() < start);
            }
        }
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.winner(), Some(AI_NAME));
        assert_eq!(
            game.revealed_secrets(),
            vec![("Ada", &code(&game, "OPBY"))]
        );
    }

    #[test]
    fn ai_guesses_mode_can_run_out_of_attempts() {
        let mut cfg = config(GameMode::AiGuesses, 1);
        cfg.secrets = vec!["OPBY".into()];
        let mut rng = StdRng::seed_from_u64(21);
        let mut game = create_game_with(&cfg, &mut rng).unwrap();
        game.rig_ai_target(&rng);

        game.play_ai_turn_with(&mut rng).unwrap();
        assert!(!game.is_ai_turn());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.winner(), None);
        assert!(game.message().contains("Player's code"));
        assert_eq!(game.run_ai_turns(), 0);
    }

    #[test]
    fn versus_alternates_player_and_ai() {
        let mut cfg = config(GameMode::Versus, 10);
        cfg.players = vec!["Ada".into()];
        cfg.secrets = vec!["RGBY".into()];
        let mut rng = StdRng::seed_from_u64(8);
        let mut game = create_game_with(&cfg, &mut rng).unwrap();
        game.rig_secret("OPRG");

        assert_eq!(game.active_player(), Some("Ada"));
        assert!(matches!(game.play_ai_turn(), Err(GameError::WrongTurn { .. })));

        game.make_guess("RGBY", Some("Ada")).unwrap();
        // No exact pegs, so the turn passes to the AI
        assert!(game.is_ai_turn());
        assert!(matches!(
            game.make_guess("OPRG", Some("Ada")),
            Err(GameError::WrongTurn { .. })
        ));

        game.rig_ai_target(&rng);
        let fb = game.play_ai_turn_with(&mut rng).unwrap();
        assert!(!fb.is_solved(4));
        assert_eq!(game.history()[1].player, AI_NAME);
        assert_eq!(game.active_player(), Some("Ada"));

        game.make_guess("OPRG", None).unwrap();
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.winner(), Some("Ada"));
        let owners: Vec<_> = game.revealed_secrets().iter().map(|s| s.0).collect();
        assert_eq!(owners, vec!["Ada", AI_NAME]);
    }

    #[test]
    fn versus_draw_after_both_budgets() {
        let mut cfg = config(GameMode::Versus, 1);
        cfg.secrets = vec!["RGBY".into()];
        let mut rng = StdRng::seed_from_u64(13);
        let mut game = create_game_with(&cfg, &mut rng).unwrap();
        game.rig_secret("OPRG");

        game.make_guess("RGBY", None).unwrap();
        game.rig_ai_target(&rng);
        let fb = game.play_ai_turn_with(&mut rng).unwrap();
        assert!(!fb.is_solved(4));
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.winner(), None);
        assert!(game.message().starts_with("Draw!"));
        assert_eq!(game.revealed_secrets().len(), 2);
    }

    #[test]
    fn stored_config_drops_player_secrets() {
        let mut cfg = config(GameMode::Versus, 4);
        cfg.secrets = vec!["RGBY".into()];
        let game = create_game(&cfg).unwrap();
        assert!(game.config().secrets.is_empty());
        assert_eq!(game.config().max_attempts, 4);
        assert!(game.revealed_secrets().is_empty());
    }

    #[test]
    fn ai_modes_refuse_spaces_too_large_to_enumerate() {
        let mut cfg = GameConfig {
            palette_size: 8,
            length: 8,
            allow_repeats: true,
            secrets: vec!["RRGGBBYY".into()],
            ..config(GameMode::AiGuesses, 10)
        };
        assert!(matches!(
            create_game(&cfg),
            Err(ConfigError::Code {
                source: crate::core::CodeError::SpaceTooLarge {
                    size: 16_777_216,
                    ..
                }
            })
        ));

        // Six pegs from eight colours stays under the limit
        cfg.length = 6;
        cfg.secrets = vec!["RRGGBB".into()];
        let game = create_game(&cfg).unwrap();
        assert_eq!(game.ai_candidates(), Some(262_144));

        // Modes without an AI guesser never enumerate
        cfg.mode = GameMode::PlayerVsAi;
        cfg.length = 8;
        assert!(create_game(&cfg).is_ok());
    }

    #[test]
    fn versus_rejects_player_named_like_ai() {
        let mut cfg = config(GameMode::Versus, 5);
        cfg.players = vec![AI_NAME.into()];
        cfg.secrets = vec!["RGBY".into()];
        assert!(matches!(
            create_game(&cfg),
            Err(ConfigError::DuplicatePlayer { .. })
        ));
    }

    #[test]
    fn pvp_duel_each_player_targets_opponent() {
        let mut cfg = config(GameMode::PvpDuel, 3);
        cfg.players = vec!["Ada".into(), "Bob".into()];
        cfg.secrets = vec!["RGBY".into(), "OPRG".into()];
        let mut game = create_game(&cfg).unwrap();

        // Ada aims at Bob's OPRG, Bob aims at Ada's RGBY
        assert_eq!(game.make_guess("RGBY", Some("Ada")).unwrap(), Feedback::new(0, 2));
        assert_eq!(game.make_guess("RGBY", Some("Bob")).unwrap(), Feedback::new(4, 0));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.winner(), Some("Bob"));
        assert_eq!(game.revealed_secrets().len(), 2);
        assert!(game.revealed_secret().is_none());
    }

    #[test]
    fn uneven_budgets_skip_exhausted_seat() {
        let mut cfg = config(GameMode::PvpDuel, 2);
        cfg.players = vec!["Ada".into(), "Bob".into()];
        cfg.secrets = vec!["RGBY".into(), "OPRG".into()];
        let mut game = create_game(&cfg).unwrap();

        // Drain Ada manually to simulate an uneven split
        game.mode.seat_mut(0).used = 2;
        game.mode.advance_turn(2);
        assert_eq!(game.active_player(), Some("Bob"));
        game.make_guess("YBOP", None).unwrap();
        assert_eq!(game.active_player(), Some("Bob"));
        game.make_guess("YBOP", None).unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn repeats_policy_flows_through_game() {
        let mut cfg = config(GameMode::PlayerVsAi, 5);
        cfg.allow_repeats = true;
        let mut game = create_game(&cfg).unwrap();
        game.rig_secret("RRGG");
        assert_eq!(game.make_guess("GGRR", None).unwrap(), Feedback::new(0, 4));
    }

    #[test]
    fn opening_messages() {
        let game = create_game(&config(GameMode::PlayerVsAi, 7)).unwrap();
        assert_eq!(
            game.message(),
            "Player, you have 7 attempts to crack the secret code."
        );

        let mut cfg = config(GameMode::PvpOneByOne, 3);
        cfg.players = vec!["Ada".into(), "Bob".into()];
        let game = create_game(&cfg).unwrap();
        assert_eq!(game.message(), "Game on! Ada makes the first guess.");
    }
}
