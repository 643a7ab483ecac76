//! Terminal output formatting
//!
//! Display utilities for games, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    format_history, format_outcome, format_palette, format_players, print_benchmark_result,
    print_solve_result,
};
