//! Core domain types for Mastermind
//!
//! Symbols, palettes, codes and the peg feedback between them. Everything here
//! is pure apart from random secret generation.

mod code;
mod error;
mod feedback;
mod symbol;

pub use code::{Code, CodeSpace, MAX_CODE_LENGTH};
pub use error::{CodeError, ValidationError};
pub use feedback::Feedback;
pub use symbol::{Palette, Symbol, available_palettes};
