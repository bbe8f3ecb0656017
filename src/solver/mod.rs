mod collector;
mod combination;
pub mod constants;
mod core;
mod errors;

pub use collector::Solution;
pub use core::{ExpressionSolver, SolverConfig, SweepEntry};
pub use errors::SolverError;
