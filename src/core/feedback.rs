//! Peg feedback calculation and representation
//!
//! Feedback for a guess is a pair of peg counts:
//! - exact: right colour in the right position
//! - color only: right colour in the wrong position
//!
//! No secret or guess position is ever counted twice.

use super::{Code, CodeError};
use serde::Serialize;
use std::fmt;

/// Peg feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Feedback {
    pub exact: usize,
    pub color_only: usize,
}

impl Feedback {
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color_only: usize) -> Self {
        Self { exact, color_only }
    }

    /// Feedback for a fully solved code of `length` pegs
    #[inline]
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        Self::new(length, 0)
    }

    /// Whether every peg of a `length`-peg code is exact
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact == length
    }

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and consume both positions
    /// 2. Second pass: for each unconsumed guess position in order, consume the
    ///    first unconsumed secret position holding the same symbol
    ///
    /// The first-match-wins scan keeps the count correct even when codes
    /// repeat symbols.
    ///
    /// # Panics
    /// Panics if the codes differ in length. Validated input never does, so a
    /// mismatch is a caller bug.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{CodeSpace, Feedback, Palette};
    ///
    /// let space = CodeSpace::new(4, Palette::standard(), false).unwrap();
    /// let secret = space.parse("RGBY").unwrap();
    /// let guess = space.parse("RBGY").unwrap();
    ///
    /// assert_eq!(Feedback::calculate(&secret, &guess), Feedback::new(2, 2));
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        match Self::try_calculate(secret, guess) {
            Ok(feedback) => feedback,
            Err(err) => panic!("{err}"),
        }
    }

    /// Calculate feedback, reporting a length mismatch instead of panicking
    ///
    /// # Errors
    /// Returns `CodeError::LengthMismatch` if the codes differ in length.
    pub fn try_calculate(secret: &Code, guess: &Code) -> Result<Self, CodeError> {
        let secret = secret.symbols();
        let guess = guess.symbols();
        if secret.len() != guess.len() {
            return Err(CodeError::LengthMismatch {
                secret: secret.len(),
                guess: guess.len(),
            });
        }

        let n = secret.len();
        let mut used_secret = vec![false; n];
        let mut used_guess = vec![false; n];

        // First pass: exact matches
        // Allow: Index needed to set both used arrays
        let mut exact = 0;
        #[allow(clippy::needless_range_loop)]
        for i in 0..n {
            if guess[i] == secret[i] {
                exact += 1;
                used_secret[i] = true;
                used_guess[i] = true;
            }
        }

        // Second pass: colour-only matches from the remaining positions
        let mut color_only = 0;
        for i in 0..n {
            if used_guess[i] {
                continue;
            }
            if let Some(j) = (0..n).find(|&j| !used_secret[j] && secret[j] == guess[i]) {
                color_only += 1;
                used_secret[j] = true;
                used_guess[i] = true;
            }
        }

        Ok(Self { exact, color_only })
    }

    /// Peg string such as `●●○·` for a 4-peg code: exact, colour-only, miss
    #[must_use]
    pub fn pegs(self, length: usize) -> String {
        let misses = length.saturating_sub(self.exact + self.color_only);
        format!(
            "{}{}{}",
            "●".repeat(self.exact),
            "○".repeat(self.color_only),
            "·".repeat(misses)
        )
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exact: {}, colour: {}", self.exact, self.color_only)
    }
}
