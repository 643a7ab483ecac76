//! Command implementations

pub mod benchmark;
pub mod session;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use session::{Request, Response, SessionHost, run_session};
pub use simple::{SimpleConfig, run_simple, run_simple_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_code, solve_code_with};
