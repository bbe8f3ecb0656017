//! Expression trees over single digits: rendering, evaluation, parsing and
//! canonical structure keys

mod ast;
pub mod canonical;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub use parse::parse_expression;

#[cfg(test)]
mod tests;
