//! Mastermind
//!
//! A colour code-breaking game with a candidate-elimination AI, playable in
//! five modes from a console, a TUI or a JSON-lines session host.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use mastermind::core::{CodeSpace, Feedback, Palette};
//! use mastermind::game::{GameConfig, create_game};
//!
//! // Score a guess against a secret
//! let space = CodeSpace::new(4, Palette::standard(), false).unwrap();
//! let secret = space.parse("RGBY").unwrap();
//! let guess = space.parse("GRBO").unwrap();
//! println!("{}", Feedback::calculate(&secret, &guess));
//!
//! // Play against the AI's secret
//! let mut game = create_game(&GameConfig::default()).unwrap();
//! game.make_guess("RGBY", None).unwrap();
//! println!("{}", game.message());
//! ```

// Core domain types
pub mod core;

// Code-breaking AI
pub mod solver;

// Game state machine
pub mod game;

// Session storage for multi-game hosts
pub mod store;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
