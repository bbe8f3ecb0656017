use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

impl Expression {
    /// # Errors
    ///
    /// Returns an error when a divisor evaluates to exactly zero or an
    /// intermediate result is not finite.
    pub fn evaluate(&self) -> Result<f64, ExpressionError> {
        let result = match self {
            Expression::Digit(d) => Ok(f64::from(*d)),
            Expression::Binary(op, l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                match op.apply(left, right) {
                    Some(value) => Ok(value),
                    None if *op == Operator::Div && right == 0.0 => {
                        debug!("Division by zero attempted in {}", self);
                        Err(ExpressionError::DivisionByZero)
                    }
                    None => Err(ExpressionError::NonFinite),
                }
            }
        };

        if let Err(e) = &result {
            debug!("Expression evaluation failed: {}", e);
        }

        result
    }
}
