//! Code-breaking AI
//!
//! A naive generate-and-filter solver: enumerate every legal code, guess one at
//! random, and discard everything inconsistent with the feedback.

mod engine;

pub use engine::Solver;
