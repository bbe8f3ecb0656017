use thiserror::Error;

use crate::expression::ExpressionError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Expression evaluation error: {0}")]
    ExpressionError(#[from] ExpressionError),
    #[error("Invalid input: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),
    #[error("Expected between 1 and {max} leaves, got {actual}")]
    LeafCount { actual: usize, max: usize },
    #[error("'{expression}' evaluates to {value}, not {target}")]
    Mismatch {
        expression: String,
        value: f64,
        target: f64,
    },
}
