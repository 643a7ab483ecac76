//! Simple interactive console mode
//!
//! Text-based game loop without the TUI. Covers every game mode, including the
//! ones where players pick secrets at the keyboard.

use crate::game::{ConfigError, GameConfig, GameMode, GameState, create_game};
use crate::output::{format_history, format_outcome, format_palette, format_players};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Settings for a console session
#[derive(Debug, Clone, Default)]
pub struct SimpleConfig {
    /// Base game settings; names and secrets given here skip their prompts
    pub game: GameConfig,
    /// Skip the mode menu
    pub mode: Option<GameMode>,
}

/// Text console over arbitrary input and output streams
struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompt and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Keep asking until one of `choices` is entered
    fn choose(&mut self, prompt: &str, choices: &[&str]) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            if choices.contains(&answer.as_str()) {
                return Ok(Some(answer));
            }
            self.say("Invalid choice.".yellow())?;
        }
    }

    fn choose_mode(&mut self) -> Result<Option<GameMode>> {
        self.say("\nGame modes:")?;
        self.say("  1) Player vs AI: the AI picks the secret, you guess")?;
        self.say("  2) AI guesses: you pick the secret, the AI guesses")?;
        self.say("  3) Player vs AI duel: both sides pick a secret")?;
        self.say("  4) Player vs Player")?;

        let mode = match self.choose("Your choice (1/2/3/4)", &["1", "2", "3", "4"])?.as_deref() {
            None => return Ok(None),
            Some("1") => GameMode::PlayerVsAi,
            Some("2") => GameMode::AiGuesses,
            Some("3") => GameMode::Versus,
            Some(_) => {
                self.say("\nPlayer vs Player:")?;
                self.say("  1) Duel: each player picks a secret for the other")?;
                self.say("  2) One by one: shared secret, take turns guessing")?;
                match self.choose("Your choice (1/2)", &["1", "2"])?.as_deref() {
                    None => return Ok(None),
                    Some("1") => GameMode::PvpDuel,
                    Some(_) => GameMode::PvpOneByOne,
                }
            }
        };
        Ok(Some(mode))
    }

    /// Ask for any names the config does not already carry
    fn fill_players(&mut self, config: &mut GameConfig) -> Result<bool> {
        let humans = config.mode.human_players();
        for i in config.players.len()..humans {
            let default = if humans == 1 {
                "Player".to_string()
            } else {
                format!("Player {}", i + 1)
            };
            let Some(name) = self.ask(&format!("{default} name ({default})"))? else {
                return Ok(false);
            };
            config
                .players
                .push(if name.is_empty() { default } else { name });
        }
        Ok(true)
    }

    /// Ask for a secret, replacing whatever was there for that player
    fn ask_secret(&mut self, config: &mut GameConfig, index: usize) -> Result<bool> {
        let owner = config
            .players
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Player {}", index + 1));
        if config.mode == GameMode::PvpDuel {
            let other = config.players.get(1 - index).map_or("the other player", String::as_str);
            self.say(format!("\n{owner}, enter your secret code. {other}, look away!"))?;
        }
        let Some(secret) = self.ask(&format!("{owner}, your secret code"))? else {
            return Ok(false);
        };
        config.secrets.truncate(index);
        config.secrets.push(secret);
        Ok(true)
    }

    /// Prompt for setup until a game can be created; `None` if input ran out
    fn start_game(&mut self, config: &mut GameConfig) -> Result<Option<GameState>> {
        loop {
            if !self.fill_players(config)? {
                return Ok(None);
            }
            if let Err(err) = config.player_names() {
                let ConfigError::DuplicatePlayer { name } = &err else {
                    return Err(err.into());
                };
                self.say(format!("Error: {err}").red())?;
                // Ask again from the clashing name on
                let index = config
                    .players
                    .iter()
                    .rposition(|p| p.trim() == name)
                    .unwrap_or(0);
                config.players.truncate(index);
                continue;
            }

            for i in config.secrets.len()..config.mode.required_secrets() {
                if !self.ask_secret(config, i)? {
                    return Ok(None);
                }
            }

            match create_game(config) {
                Ok(game) => return Ok(Some(game)),
                Err(ConfigError::InvalidSecret { owner, source }) => {
                    self.say(format!("Error: {source}").red())?;
                    let index = config
                        .players
                        .iter()
                        .position(|p| p.trim() == owner)
                        .unwrap_or(0);
                    // Later secrets are asked for again as well
                    config.secrets.truncate(index);
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn intro(&mut self, game: &GameState) -> Result<()> {
        let snapshot = game.snapshot();
        self.say(format!("\n=== {} ===", snapshot.mode_label).bright_cyan().bold())?;
        self.say(format!("Code length  : {}", snapshot.length))?;
        self.say(format!("Colours      : {}", format_palette(&snapshot.palette)))?;
        self.say(format!("Attempts     : {}", snapshot.max_attempts))?;
        if snapshot.allow_repeats {
            self.say("Colours may repeat.")?;
        } else {
            self.say("Each colour may be used only once.")?;
        }
        self.say("Exact = right colour, right place. Colour = right colour, wrong place.")?;
        self.say(format!("\n{}", snapshot.message))
    }

    /// Play one game; `false` if the player quit
    fn play(&mut self, game: &mut GameState) -> Result<bool> {
        self.intro(game)?;

        while !game.is_over() {
            if game.is_ai_turn() {
                let feedback = game.play_ai_turn()?;
                let last = game.history().len();
                self.say(format!(
                    "\n🤖 AI guess {last}: {} → {feedback}",
                    game.history()[last - 1].guess.pretty()
                ))?;
                if let Some(left) = game.ai_candidates() {
                    self.say(format!("   {left} candidates left").bright_black())?;
                }
                continue;
            }

            let snapshot = game.snapshot();
            let active = snapshot.active_player.clone().unwrap_or_default();
            let left = snapshot.attempts_left.unwrap_or(0);
            let Some(raw) = self.ask(&format!("\n{active}, your guess ({left} left)"))? else {
                return Ok(false);
            };
            match raw.to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Ok(false),
                "players" => {
                    self.say(format_players(&snapshot))?;
                    continue;
                }
                _ => {}
            }

            match game.make_guess(&raw, None) {
                Ok(_) => {
                    let snapshot = game.snapshot();
                    self.say(format!("\n{}", format_history(&snapshot)))?;
                    if !game.is_over() {
                        self.say(&snapshot.message)?;
                    }
                }
                Err(err) => self.say(format!("Error: {err}").red())?,
            }
        }

        let snapshot = game.snapshot();
        self.say(format!("\n{}", format_history(&snapshot)))?;
        self.say(format_outcome(&snapshot))?;
        Ok(true)
    }
}

/// Run the console game loop over stdin and stdout
///
/// # Errors
///
/// Returns an error on I/O failure or if the base settings cannot start a game.
pub fn run_simple(config: SimpleConfig) -> Result<()> {
    let stdin = std::io::stdin();
    run_simple_with(config, stdin.lock(), std::io::stdout())
}

/// Run the console game loop over the given streams
///
/// # Errors
///
/// Returns an error on I/O failure or if the base settings cannot start a game.
pub fn run_simple_with<R: BufRead, W: Write>(
    config: SimpleConfig,
    input: R,
    output: W,
) -> Result<()> {
    let mut console = Console { input, output };
    console.say("=== Colour Code: Mastermind ===".bright_cyan().bold())?;

    let mode = match config.mode {
        Some(mode) => mode,
        None => match console.choose_mode()? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };
    let mut base = GameConfig {
        mode,
        ..config.game
    };

    loop {
        let mut setup = base.clone();
        let Some(mut game) = console.start_game(&mut setup)? else {
            break;
        };
        // Keep names for rematches; secrets are chosen afresh each game
        base.players.clone_from(&setup.players);
        base.secrets.clear();

        if !console.play(&mut game)? {
            break;
        }
        match console.ask("\nPlay again? (yes/no)")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => break,
        }
    }

    console.say("\n👋 Thanks for playing!")
}
