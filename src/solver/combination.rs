use crate::expression::canonical::{combined_key, leaf_key, should_swap};
use crate::expression::{Expression, Operator};

/// One way of combining the leaves of a mask
#[derive(Debug, Clone)]
pub struct Combination {
    pub value: f64,
    pub expression: Expression,
    pub text: String,
    pub key: String,
}

impl Combination {
    pub fn leaf(digit: u8) -> Self {
        Self {
            value: f64::from(digit),
            expression: Expression::Digit(digit),
            text: digit.to_string(),
            key: leaf_key(digit),
        }
    }

    /// Combine two records with `op`, placing commutative operands in
    /// canonical order. Returns `None` for an exactly-zero divisor or a
    /// non-finite value.
    pub fn combine(op: Operator, left: &Combination, right: &Combination) -> Option<Self> {
        let (left, right) = if should_swap(op, &left.key, &right.key) {
            (right, left)
        } else {
            (left, right)
        };

        let value = op.apply(left.value, right.value)?;
        let expression = Expression::binary(op, left.expression.clone(), right.expression.clone());
        let text = expression.to_string();
        let key = combined_key(op, &left.key, &right.key);

        Some(Self {
            value,
            expression,
            text,
            key,
        })
    }
}
