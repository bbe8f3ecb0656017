//! Quadrix - A library for finding every arithmetic expression over a handful of digits
//!
//! This library combines single digits with `+`, `-`, `*` and `/` under any
//! parenthesization and reports each structurally distinct expression that
//! evaluates to a target value.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, parse_expression};
pub use solver::{ExpressionSolver, Solution, SolverConfig, SolverError, SweepEntry};
pub use utils::{UtilsError, validate_digit_string};

/// Find every expression over the four given digits that evaluates to the target
///
/// This is a convenience function that uses a default solver: four leaves and
/// a tolerance of `1e-4`.
///
/// # Arguments
///
/// * `digits` - A string of exactly four ASCII digits
/// * `target` - The target value to match
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Matching expressions, shortest first; empty when none exists
/// * `Err(SolverError)` - If the input is not four digits
///
/// # Errors
///
/// This function will return an error if:
/// * The input digit string is empty
/// * The input digit string does not hold exactly four characters
/// * The input digit string contains non-digit characters
///
/// # Examples
///
/// ```
/// use quadrix::solve;
///
/// match solve("3333", 18.0) {
///     Ok(solutions) if solutions.is_empty() => println!("No solutions found."),
///     Ok(solutions) => solutions.iter().for_each(|s| println!("{}", s)),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn solve(digits: &str, target: f64) -> Result<Vec<String>, SolverError> {
    ExpressionSolver::default().solve_digits(digits, target)
}
