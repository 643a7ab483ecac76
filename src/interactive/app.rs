//! TUI application state and logic

use crate::game::{ConfigError, GameConfig, GameSnapshot, GameState, GameStatus, create_game};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

/// Application state
pub struct App {
    /// Setup for rematches; may hold player-chosen secrets
    config: GameConfig,
    pub game: GameState,
    /// Rendered view of `game`, refreshed after every change
    pub snapshot: GameSnapshot,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl App {
    /// Start the first game from `config`
    ///
    /// # Errors
    ///
    /// Returns the configuration error if no game can be created.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let game = create_game(&config)?;
        let snapshot = game.snapshot();
        let mut app = Self {
            config,
            game,
            snapshot,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message("Type a code (e.g. RGBY) and press Enter.", MessageStyle::Info);
        app.after_move();
        Ok(app)
    }

    /// Let the AI move if it is its turn, then refresh the view
    fn after_move(&mut self) {
        let moves = self.game.run_ai_turns();
        if moves > 0 {
            debug!(moves, "AI moved");
        }
        let was_over = self.snapshot.status.is_over();
        self.snapshot = self.game.snapshot();

        let message = self.snapshot.message.clone();
        match self.snapshot.status {
            GameStatus::Ongoing => self.add_message(&message, MessageStyle::Info),
            status if !was_over => {
                self.stats.total_games += 1;
                if status == GameStatus::Won {
                    self.stats.games_won += 1;
                    self.add_message(&message, MessageStyle::Success);
                } else {
                    self.add_message(&message, MessageStyle::Error);
                }
                self.add_message("Press 'n' for a new game or 'q' to quit.", MessageStyle::Info);
            }
            _ => {}
        }
    }

    pub fn submit_guess(&mut self) {
        if self.game.is_over() {
            self.add_message("The game is over. Press 'n' for a new game.", MessageStyle::Error);
            return;
        }
        let input = std::mem::take(&mut self.input_buffer);
        match self.game.make_guess(&input, None) {
            Ok(_) => self.after_move(),
            Err(err) => {
                self.input_buffer = input;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        match create_game(&self.config) {
            Ok(game) => {
                self.game = game;
                self.snapshot = self.game.snapshot();
                self.input_buffer.clear();
                self.messages.clear();
                self.add_message("New game started!", MessageStyle::Info);
                self.after_move();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n' | 'N') => self.new_game(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if !self.game.is_over() && self.input_buffer.len() < self.snapshot.length {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
