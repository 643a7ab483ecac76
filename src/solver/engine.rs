//! Candidate-elimination code breaker

use crate::core::{Code, CodeError, CodeSpace, Feedback};
use rand::Rng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use tracing::debug;

/// AI code breaker
///
/// Keeps every code still consistent with the feedback seen so far and
/// guesses one of them at random. The candidate set only ever shrinks.
#[derive(Debug, Clone)]
pub struct Solver {
    space: CodeSpace,
    candidates: Vec<Code>,
    last_guess: Option<Code>,
}

impl Solver {
    /// Largest code space the solver will enumerate
    ///
    /// Covers every space without repeats and repeat spaces up to `8^6`.
    pub const MAX_CANDIDATES: usize = 1 << 20;

    /// Check that `space` is small enough to hand to [`Solver::new`]
    ///
    /// # Errors
    /// Returns `CodeError::SpaceTooLarge` past [`Solver::MAX_CANDIDATES`].
    pub fn check_space(space: &CodeSpace) -> Result<(), CodeError> {
        let size = space.size();
        if size > Self::MAX_CANDIDATES {
            return Err(CodeError::SpaceTooLarge {
                size,
                max: Self::MAX_CANDIDATES,
            });
        }
        Ok(())
    }

    /// Create a solver over the whole code space
    ///
    /// Enumerates the space once up front; later rounds only filter. Spaces
    /// built from user settings go through [`Solver::check_space`] first.
    #[must_use]
    pub fn new(space: CodeSpace) -> Self {
        let candidates = space.enumerate();
        debug!(candidates = candidates.len(), "Solver initialised");
        Self {
            space,
            candidates,
            last_guess: None,
        }
    }

    /// Pick the next guess using the thread-local generator
    pub fn next_guess(&mut self) -> Code {
        self.next_guess_with(&mut rand::rng())
    }

    /// Pick the next guess from `rng`
    ///
    /// Returns a uniformly random candidate. If inconsistent feedback has
    /// emptied the candidate set, falls back to a fresh random code.
    pub fn next_guess_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Code {
        let guess = match self.candidates.choose(rng) {
            Some(candidate) => candidate.clone(),
            None => {
                debug!("Candidate set exhausted, guessing a random code");
                self.space.generate_with(rng)
            }
        };
        self.last_guess = Some(guess.clone());
        guess
    }

    /// Remove every candidate that would not have produced `feedback` for `guess`
    pub fn apply_feedback(&mut self, guess: &Code, feedback: Feedback) {
        let before = self.candidates.len();
        self.candidates = self
            .candidates
            .par_iter()
            .filter(|candidate| Feedback::calculate(candidate, guess) == feedback)
            .cloned()
            .collect();
        debug!(
            guess = %guess,
            exact = feedback.exact,
            color_only = feedback.color_only,
            before,
            after = self.candidates.len(),
            "Candidates narrowed"
        );
    }

    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub const fn last_guess(&self) -> Option<&Code> {
        self.last_guess.as_ref()
    }

    #[must_use]
    pub const fn space(&self) -> &CodeSpace {
        &self.space
    }
}
