use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Non-finite result")]
    NonFinite,
    #[error("Cannot parse expression '{input}': {reason}")]
    Parse { input: String, reason: String },
}
