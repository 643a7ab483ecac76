//! Codes and the space they are drawn from
//!
//! A [`CodeSpace`] fixes the code length, the palette and the repeat policy.
//! It is the single place that generates secrets, validates player input and
//! enumerates every possible code for the solver, so all three always agree
//! on what a legal code is.

use super::{CodeError, Palette, Symbol, ValidationError};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Serialize, Serializer};
use std::fmt;

/// Longest code a [`CodeSpace`] accepts
pub const MAX_CODE_LENGTH: usize = 8;

/// An ordered sequence of symbols: a secret or a guess
///
/// Symbols are stored inline, so a candidate set of codes is one flat
/// allocation. Slots past `len` always hold the same filler symbol, which
/// keeps the derived equality and hashing exact.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Code {
    symbols: [Symbol; MAX_CODE_LENGTH],
    len: u8,
}

impl Code {
    /// Build a code from its symbols
    ///
    /// # Errors
    /// Returns `CodeError::TooLong` for more than [`MAX_CODE_LENGTH`] symbols.
    pub fn new(symbols: &[Symbol]) -> Result<Self, CodeError> {
        if symbols.len() > MAX_CODE_LENGTH {
            return Err(CodeError::TooLong {
                length: symbols.len(),
                max: MAX_CODE_LENGTH,
            });
        }
        Ok(Self::inline(symbols))
    }

    /// Caller guarantees `symbols.len() <= MAX_CODE_LENGTH`
    fn inline(symbols: &[Symbol]) -> Self {
        let mut inline = [Symbol::RED; MAX_CODE_LENGTH];
        inline[..symbols.len()].copy_from_slice(symbols);
        Self {
            symbols: inline,
            len: symbols.len() as u8,
        }
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols[..usize::from(self.len)]
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any symbol appears more than once
    #[must_use]
    pub fn has_repeats(&self) -> bool {
        first_repeat(self.symbols()).is_some()
    }

    /// Space separated letters, e.g. `R G B Y`
    #[must_use]
    pub fn pretty(&self) -> String {
        self.symbols()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Colour names, e.g. `Red, Green, Blue, Yellow`
    #[must_use]
    pub fn text(&self) -> String {
        self.symbols()
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code({self})")
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.symbols())
    }
}

fn first_repeat(symbols: &[Symbol]) -> Option<Symbol> {
    symbols
        .iter()
        .enumerate()
        .find(|&(i, s)| symbols[..i].contains(s))
        .map(|(_, &s)| s)
}

/// Length, palette and repeat policy shared by a game's secrets, guesses and solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSpace {
    length: usize,
    palette: Palette,
    allow_repeats: bool,
}

impl CodeSpace {
    /// Create a code space
    ///
    /// # Errors
    /// Returns `CodeError::EmptyCode` for a zero length, `CodeError::TooLong`
    /// past [`MAX_CODE_LENGTH`], and `CodeError::InsufficientPalette` when
    /// repeats are forbidden and the palette has fewer than `length` symbols.
    pub fn new(length: usize, palette: Palette, allow_repeats: bool) -> Result<Self, CodeError> {
        if length == 0 {
            return Err(CodeError::EmptyCode);
        }
        if length > MAX_CODE_LENGTH {
            return Err(CodeError::TooLong {
                length,
                max: MAX_CODE_LENGTH,
            });
        }
        if !allow_repeats && length > palette.size() {
            return Err(CodeError::InsufficientPalette {
                length,
                available: palette.size(),
            });
        }
        Ok(Self {
            length,
            palette,
            allow_repeats,
        })
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn palette(&self) -> Palette {
        self.palette
    }

    #[inline]
    #[must_use]
    pub const fn allow_repeats(&self) -> bool {
        self.allow_repeats
    }

    /// Generate a random secret using the thread-local generator
    #[must_use]
    pub fn generate(&self) -> Code {
        self.generate_with(&mut rand::rng())
    }

    /// Generate a random secret from `rng`
    ///
    /// Without repeats this samples `length` distinct symbols without
    /// replacement, so every permutation is equally likely.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        let symbols = self.palette.symbols();
        let code: Vec<Symbol> = if self.allow_repeats {
            (0..self.length)
                .map(|_| symbols[rng.random_range(0..symbols.len())])
                .collect()
        } else {
            symbols.choose_multiple(rng, self.length).copied().collect()
        };
        Code::inline(&code)
    }

    /// Parse raw text into a code
    ///
    /// Whitespace and commas are ignored and letters are case-insensitive,
    /// so `"r g b y"`, `"RGBY"` and `"R,G,B,Y"` are equivalent.
    ///
    /// # Errors
    /// Returns a `ValidationError` for a wrong length, a symbol outside the
    /// palette, or a repeated symbol when repeats are forbidden (checked in
    /// that order).
    pub fn parse(&self, raw: &str) -> Result<Code, ValidationError> {
        let cleaned: Vec<char> = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if cleaned.len() != self.length {
            return Err(ValidationError::WrongLength {
                expected: self.length,
                actual: cleaned.len(),
            });
        }

        let symbols = cleaned
            .iter()
            .map(|&c| self.lookup(&c.to_string()))
            .collect::<Result<Vec<_>, _>>()?;
        self.finish(symbols)
    }

    /// Parse a list of per-peg entries such as `["R", "g", " B "]`
    ///
    /// # Errors
    /// Same rules as [`CodeSpace::parse`]; an entry that is not exactly one
    /// palette letter is reported as an unknown symbol.
    pub fn parse_symbols<S: AsRef<str>>(&self, entries: &[S]) -> Result<Code, ValidationError> {
        if entries.len() != self.length {
            return Err(ValidationError::WrongLength {
                expected: self.length,
                actual: entries.len(),
            });
        }

        let symbols = entries
            .iter()
            .map(|entry| self.lookup(entry.as_ref().trim()))
            .collect::<Result<Vec<_>, _>>()?;
        self.finish(symbols)
    }

    fn lookup(&self, entry: &str) -> Result<Symbol, ValidationError> {
        let mut chars = entry.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(ch), None) => Symbol::from_char(ch).filter(|&s| self.palette.contains(s)),
            _ => None,
        };
        symbol.ok_or_else(|| ValidationError::UnknownSymbol {
            input: entry.to_uppercase(),
            allowed: self.palette.alphabet(),
        })
    }

    fn finish(&self, symbols: Vec<Symbol>) -> Result<Code, ValidationError> {
        if !self.allow_repeats
            && let Some(symbol) = first_repeat(&symbols)
        {
            return Err(ValidationError::RepeatedSymbol { symbol });
        }
        Ok(Code::inline(&symbols))
    }

    /// Whether `code` belongs to this space
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        code.len() == self.length
            && code.symbols().iter().all(|&s| self.palette.contains(s))
            && (self.allow_repeats || !code.has_repeats())
    }

    /// Number of codes in the space
    ///
    /// `n!/(n-k)!` without repeats, `n^k` with repeats.
    #[must_use]
    pub fn size(&self) -> usize {
        let n = self.palette.size();
        if self.allow_repeats {
            (0..self.length).fold(1, |acc, _| acc.saturating_mul(n))
        } else {
            (n - self.length + 1..=n).fold(1, usize::saturating_mul)
        }
    }

    /// Every code in the space, in palette order
    #[must_use]
    pub fn enumerate(&self) -> Vec<Code> {
        let symbols = self.palette.symbols();
        let mut codes = Vec::with_capacity(self.size());
        let mut current = Vec::with_capacity(self.length);
        let mut used = vec![false; symbols.len()];
        self.extend_codes(symbols, &mut current, &mut used, &mut codes);
        codes
    }

    fn extend_codes(
        &self,
        symbols: &[Symbol],
        current: &mut Vec<Symbol>,
        used: &mut [bool],
        out: &mut Vec<Code>,
    ) {
        if current.len() == self.length {
            out.push(Code::inline(current));
            return;
        }
        for (i, &symbol) in symbols.iter().enumerate() {
            if used[i] {
                continue;
            }
            if !self.allow_repeats {
                used[i] = true;
            }
            current.push(symbol);
            self.extend_codes(symbols, current, used, out);
            current.pop();
            used[i] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn space(length: usize, colours: usize) -> CodeSpace {
        CodeSpace::new(length, Palette::for_size(colours).unwrap(), false).unwrap()
    }

    #[test]
    fn code_space_rejects_bad_lengths() {
        let six = Palette::standard();
        assert_eq!(CodeSpace::new(0, six, false), Err(CodeError::EmptyCode));
        assert_eq!(
            CodeSpace::new(7, six, false),
            Err(CodeError::InsufficientPalette {
                length: 7,
                available: 6
            })
        );
        // Repeats make longer codes possible, up to the inline limit
        assert!(CodeSpace::new(7, six, true).is_ok());
        assert!(CodeSpace::new(MAX_CODE_LENGTH, six, true).is_ok());
        assert_eq!(
            CodeSpace::new(MAX_CODE_LENGTH + 1, six, true),
            Err(CodeError::TooLong { length: 9, max: 8 })
        );
    }

    #[test]
    fn code_new_checks_length_and_compares_by_symbols() {
        let nine = [Symbol::RED; MAX_CODE_LENGTH + 1];
        assert_eq!(
            Code::new(&nine),
            Err(CodeError::TooLong { length: 9, max: 8 })
        );

        // A short code never equals a longer one sharing its prefix
        let short = Code::new(&[Symbol::GREEN, Symbol::RED]).unwrap();
        let long = Code::new(&[Symbol::GREEN, Symbol::RED, Symbol::RED]).unwrap();
        assert_ne!(short, long);
        assert_eq!(short.symbols(), &[Symbol::GREEN, Symbol::RED]);
        assert_eq!(format!("{short:?}"), "Code(GR)");
    }

    #[test]
    fn generated_secret_has_distinct_palette_symbols() {
        let space = space(4, 6);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let code = space.generate_with(&mut rng);
            assert_eq!(code.len(), 4);
            assert!(!code.has_repeats());
            assert!(space.contains(&code));
        }
    }

    #[test]
    fn generated_secret_can_use_whole_palette() {
        let space = space(6, 6);
        let code = space.generate();
        let mut sorted = code.symbols().to_vec();
        sorted.sort();
        let mut palette = Palette::standard().symbols().to_vec();
        palette.sort();
        assert_eq!(sorted, palette);
    }

    #[test]
    fn generated_secret_with_repeats_stays_in_palette() {
        let space = CodeSpace::new(8, Palette::standard(), true).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let code = space.generate_with(&mut rng);
        assert_eq!(code.len(), 8);
        // Eight pegs from six colours must repeat something
        assert!(code.has_repeats());
        assert!(space.contains(&code));
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let space = space(4, 6);
        let expected = Code::new(&[
            Symbol::RED,
            Symbol::GREEN,
            Symbol::BLUE,
            Symbol::YELLOW,
        ])
        .unwrap();
        assert_eq!(space.parse("RGBY").unwrap(), expected);
        assert_eq!(space.parse("  r g b y ").unwrap(), expected);
        assert_eq!(space.parse("R,G,B,Y").unwrap(), expected);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let space = space(4, 6);
        assert_eq!(
            space.parse("RGB"),
            Err(ValidationError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
        assert!(matches!(
            space.parse(""),
            Err(ValidationError::WrongLength { actual: 0, .. })
        ));
    }

    #[test]
    fn parse_rejects_symbol_outside_palette() {
        let space = space(4, 6);
        // W exists in the 8-colour palette only
        let err = space.parse("RGBW").unwrap_err();
        match &err {
            ValidationError::UnknownSymbol { input, allowed } => {
                assert_eq!(input, "W");
                assert!(allowed.contains("P (Purple)"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("Allowed: R (Red)"));

        assert!(matches!(
            space.parse("RG1Y"),
            Err(ValidationError::UnknownSymbol { .. })
        ));
    }

    #[test]
    fn parse_rejects_repeats_under_canonical_policy() {
        let space = space(4, 6);
        assert_eq!(
            space.parse("RGRY"),
            Err(ValidationError::RepeatedSymbol {
                symbol: Symbol::RED
            })
        );
    }

    #[test]
    fn parse_accepts_repeats_when_allowed() {
        let space = CodeSpace::new(4, Palette::standard(), true).unwrap();
        let code = space.parse("RRGG").unwrap();
        assert!(code.has_repeats());
    }

    #[test]
    fn parse_symbols_list_form() {
        let space = space(4, 8);
        let code = space.parse_symbols(&["r", " G ", "c", "W"]).unwrap();
        assert_eq!(code.to_string(), "RGCW");

        assert!(matches!(
            space.parse_symbols(&["R", "G", "B"]),
            Err(ValidationError::WrongLength { .. })
        ));
        assert!(matches!(
            space.parse_symbols(&["R", "G", "BY", "O"]),
            Err(ValidationError::UnknownSymbol { .. })
        ));
        assert!(matches!(
            space.parse_symbols(&["R", "G", "", "O"]),
            Err(ValidationError::UnknownSymbol { .. })
        ));
        assert!(matches!(
            space.parse_symbols(&["R", "G", "R", "O"]),
            Err(ValidationError::RepeatedSymbol { .. })
        ));
    }

    #[test]
    fn size_matches_enumeration() {
        for (length, colours) in [(1, 6), (3, 6), (4, 6), (4, 8), (6, 6)] {
            let space = space(length, colours);
            assert_eq!(space.enumerate().len(), space.size());
        }
        let repeats = CodeSpace::new(3, Palette::standard(), true).unwrap();
        assert_eq!(repeats.size(), 216);
        assert_eq!(repeats.enumerate().len(), 216);
    }

    #[test]
    fn permutation_counts() {
        assert_eq!(space(4, 6).size(), 360);
        assert_eq!(space(4, 8).size(), 1680);
        assert_eq!(space(6, 6).size(), 720);
        assert_eq!(space(6, 8).size(), 20160);
    }

    #[test]
    fn enumeration_is_unique_and_ordered() {
        let codes = space(3, 6).enumerate();
        assert_eq!(codes.first().unwrap().to_string(), "RGB");
        assert_eq!(codes.last().unwrap().to_string(), "POY");
        let mut deduped = codes.clone();
        deduped.sort_by_key(ToString::to_string);
        deduped.dedup();
        assert_eq!(deduped.len(), codes.len());
        assert!(codes.iter().all(|c| !c.has_repeats()));
    }

    #[test]
    fn code_display_forms() {
        let code = space(4, 6).parse("RGBY").unwrap();
        assert_eq!(code.to_string(), "RGBY");
        assert_eq!(code.pretty(), "R G B Y");
        assert_eq!(code.text(), "Red, Green, Blue, Yellow");
        assert_eq!(serde_json::to_string(&code).unwrap(), r#"["R","G","B","Y"]"#);
    }
}
