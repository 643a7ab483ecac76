//! Benchmark command
//!
//! Runs the solver against many random secrets in parallel.

use crate::core::{CodeSpace, Feedback};
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Settings for a benchmark run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub space: CodeSpace,
    pub games: usize,
    /// Guesses allowed per game before it counts as failed
    pub max_guesses: usize,
    /// Seed for reproducible runs; a random one is drawn otherwise
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(space: CodeSpace, games: usize) -> Self {
        Self {
            space,
            games,
            max_guesses: 10,
            seed: None,
            show_progress: false,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guesses needed → number of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Play one game to completion; `Some(guesses)` if the code was cracked
fn play_one(space: CodeSpace, max_guesses: usize, seed: u64) -> Option<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let secret = space.generate_with(&mut rng);
    let mut solver = Solver::new(space);

    for turn in 1..=max_guesses {
        let guess = solver.next_guess_with(&mut rng);
        let feedback = Feedback::calculate(&secret, &guess);
        if feedback.is_solved(space.length()) {
            return Some(turn);
        }
        solver.apply_feedback(&guess, feedback);
    }
    None
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );
    pb
}

/// Run the solver against `config.games` random secrets
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn run_benchmark(config: &BenchmarkConfig) -> BenchmarkResult {
    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    let pb = progress_bar(config.games, config.show_progress);
    pb.set_message(format!("{} codes in play", config.space.size()));

    let start = Instant::now();
    let outcomes: Vec<Option<usize>> = (0..config.games)
        .into_par_iter()
        .map(|i| {
            let seed = base_seed.wrapping_add(i as u64);
            let outcome = play_one(config.space, config.max_guesses, seed);
            pb.inc(1);
            outcome
        })
        .collect();
    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for guesses in outcomes.iter().flatten() {
        *distribution.entry(*guesses).or_insert(0) += 1;
    }
    let solved = outcomes.iter().flatten().count();
    let total_guesses = outcomes
        .iter()
        .map(|outcome| outcome.unwrap_or(config.max_guesses))
        .sum();
    let min_guesses = distribution.keys().copied().min().unwrap_or(0);
    let max_guesses = if solved < config.games {
        config.max_guesses
    } else {
        distribution.keys().copied().max().unwrap_or(0)
    };

    BenchmarkResult {
        total_games: config.games,
        solved,
        total_guesses,
        average_guesses: if config.games == 0 {
            0.0
        } else {
            total_guesses as f64 / config.games as f64
        },
        min_guesses,
        max_guesses,
        distribution,
        duration,
        games_per_second: config.games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
