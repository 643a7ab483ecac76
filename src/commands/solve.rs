//! Code solving command
//!
//! Lets the AI crack a known secret and records how each guess narrowed the
//! candidate set.

use crate::core::{Code, CodeSpace, Feedback, ValidationError};
use crate::solver::Solver;
use rand::Rng;

/// Configuration for solving a code
pub struct SolveConfig {
    pub secret: String,
    pub space: CodeSpace,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String, space: CodeSpace) -> Self {
        Self {
            secret,
            space,
            max_guesses: 10,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret with a fresh solver
///
/// # Errors
///
/// Returns an error if the secret is not a legal code for the configured space.
pub fn solve_code(config: SolveConfig) -> Result<SolveResult, ValidationError> {
    solve_code_with(config, &mut rand::rng())
}

/// Solve a specific secret, drawing the solver's guesses from `rng`
///
/// # Errors
///
/// Returns an error if the secret is not a legal code for the configured space.
pub fn solve_code_with<R: Rng + ?Sized>(
    config: SolveConfig,
    rng: &mut R,
) -> Result<SolveResult, ValidationError> {
    let secret = config.space.parse(&config.secret)?;
    let mut solver = Solver::new(config.space);
    let mut guesses = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = solver.candidate_count();
        let guess = solver.next_guess_with(rng);
        let feedback = Feedback::calculate(&secret, &guess);
        solver.apply_feedback(&guess, feedback);

        guesses.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: solver.candidate_count(),
        });

        if feedback.is_solved(secret.len()) {
            return Ok(SolveResult {
                success: true,
                guesses,
                secret,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Palette;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn space() -> CodeSpace {
        CodeSpace::new(4, Palette::standard(), false).unwrap()
    }

    #[test]
    fn solve_code_succeeds() {
        let mut rng = StdRng::seed_from_u64(7);
        let config = SolveConfig::new("OPBY".to_string(), space());
        let result = solve_code_with(config, &mut rng).unwrap();

        assert!(result.success);
        let last = result.guesses.last().unwrap();
        assert_eq!(last.guess, result.secret);
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn solve_records_narrowing() {
        let config = SolveConfig::new("rgby".to_string(), space());
        let result = solve_code(config).unwrap();

        assert!(!result.guesses.is_empty());
        assert_eq!(result.guesses[0].candidates_before, 360);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in result.guesses.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let config = SolveConfig::new("RRGB".to_string(), space());
        assert!(matches!(
            solve_code(config),
            Err(ValidationError::RepeatedSymbol { .. })
        ));

        let config = SolveConfig::new("RGB".to_string(), space());
        assert!(solve_code(config).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let mut config = SolveConfig::new("OPBY".to_string(), space());
        config.max_guesses = 1;
        let result = solve_code(config).unwrap();

        assert_eq!(result.guesses.len(), 1);
        assert_eq!(result.success, result.guesses[0].guess == result.secret);
    }

    #[test]
    fn solve_with_repeats() {
        let space = CodeSpace::new(3, Palette::standard(), true).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let mut config = SolveConfig::new("RRR".to_string(), space);
        config.max_guesses = 30;
        let result = solve_code_with(config, &mut rng).unwrap();
        assert!(result.success);
    }
}
