//! Colour symbols and the palettes they are drawn from
//!
//! A symbol is a single uppercase ASCII letter standing for one peg colour.
//! Palettes are fixed, ordered sets of distinct symbols selected by size.

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single peg colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    pub const RED: Self = Self(b'R');
    pub const GREEN: Self = Self(b'G');
    pub const BLUE: Self = Self(b'B');
    pub const YELLOW: Self = Self(b'Y');
    pub const ORANGE: Self = Self(b'O');
    pub const PURPLE: Self = Self(b'P');
    pub const CYAN: Self = Self(b'C');
    pub const WHITE: Self = Self(b'W');

    /// Look up the symbol for a character, case-insensitively
    ///
    /// Returns `None` for characters that are not part of any palette.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let upper = ch.to_ascii_uppercase();
        ALL_SYMBOLS
            .iter()
            .copied()
            .find(|symbol| symbol.as_char() == upper)
    }

    /// The symbol's letter
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Human-readable colour name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            b'R' => "Red",
            b'G' => "Green",
            b'B' => "Blue",
            b'Y' => "Yellow",
            b'O' => "Orange",
            b'P' => "Purple",
            b'C' => "Cyan",
            b'W' => "White",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

static ALL_SYMBOLS: [Symbol; 8] = [
    Symbol::RED,
    Symbol::GREEN,
    Symbol::BLUE,
    Symbol::YELLOW,
    Symbol::ORANGE,
    Symbol::PURPLE,
    Symbol::CYAN,
    Symbol::WHITE,
];

/// An ordered set of distinct symbols available to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    symbols: &'static [Symbol],
}

impl Palette {
    /// Palette sizes a game may be created with
    pub const SUPPORTED_SIZES: [usize; 2] = [6, 8];

    /// The palette with `size` colours, if that size is supported
    #[must_use]
    pub fn for_size(size: usize) -> Option<Self> {
        Self::SUPPORTED_SIZES
            .contains(&size)
            .then(|| Self {
                symbols: &ALL_SYMBOLS[..size],
            })
    }

    /// The six-colour palette used by default
    #[must_use]
    pub fn standard() -> Self {
        Self {
            symbols: &ALL_SYMBOLS[..6],
        }
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &'static [Symbol] {
        self.symbols
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Position of `symbol` within the palette
    #[must_use]
    pub fn index_of(&self, symbol: Symbol) -> Option<usize> {
        self.symbols.iter().position(|&s| s == symbol)
    }

    /// Legend such as `R = Red, G = Green, ...`
    #[must_use]
    pub fn describe(&self) -> String {
        self.symbols
            .iter()
            .map(|s| format!("{s} = {}", s.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Compact alphabet listing such as `R (Red), G (Green), ...`
    ///
    /// Used in validation errors so the caller can show the legal symbols.
    #[must_use]
    pub fn alphabet(&self) -> String {
        self.symbols
            .iter()
            .map(|s| format!("{s} ({})", s.name()))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

/// All supported palettes keyed by size
#[must_use]
pub fn available_palettes() -> BTreeMap<usize, Vec<Symbol>> {
    Palette::SUPPORTED_SIZES
        .iter()
        .filter_map(|&size| Palette::for_size(size).map(|p| (size, p.symbols().to_vec())))
        .collect()
}
