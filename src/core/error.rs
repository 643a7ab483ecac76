//! Error types for code construction, validation and scoring

use super::Symbol;
use derive_more::{Display, Error};

/// Structural errors in codes and code spaces
///
/// These indicate bad setup parameters or caller bugs rather than bad player input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CodeError {
    /// Codes must contain at least one symbol
    #[display("Code length must be at least 1")]
    EmptyCode,
    /// Codes are stored inline and cannot exceed a fixed length
    #[display("Code length {length} exceeds the maximum of {max}")]
    TooLong { length: usize, max: usize },
    /// Too many codes for the solver to enumerate
    #[display("{size} possible codes is more than the AI can track (at most {max})")]
    SpaceTooLarge { size: usize, max: usize },
    /// Not enough distinct symbols to build a code without repeats
    #[display("Not enough colours for a code of length {length}: the palette has {available}")]
    InsufficientPalette { length: usize, available: usize },
    /// Secret and guess handed to the scorer differ in length
    #[display("Cannot score codes of different lengths ({secret} vs {guess})")]
    LengthMismatch { secret: usize, guess: usize },
}

/// A guess (or chosen secret) that breaks one of the input rules
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ValidationError {
    #[display("A code must contain exactly {expected} colours, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[display("'{input}' is not an allowed colour. Allowed: {allowed}")]
    UnknownSymbol { input: String, allowed: String },
    #[display("{symbol} ({}) is used more than once; each colour may appear at most once", symbol.name())]
    RepeatedSymbol { symbol: Symbol },
}
