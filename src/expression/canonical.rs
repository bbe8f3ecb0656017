//! Structure keys identify an expression's shape up to reordering the
//! operands of `+` and `*`.
//!
//! A digit is tagged by its value, not by the position it came from, so two
//! equal digits are interchangeable. Composite keys wrap both operand keys in
//! parentheses around the operator symbol, with the lexicographically smaller
//! key first for commutative operators.

use crate::expression::ast::{Expression, Operator};

pub fn leaf_key(digit: u8) -> String {
    format!("n{}", digit)
}

pub fn combined_key(op: Operator, left_key: &str, right_key: &str) -> String {
    format!("({}{}{})", left_key, op.symbol(), right_key)
}

/// Whether the operands of `op` must be swapped to reach canonical order.
pub fn should_swap(op: Operator, left_key: &str, right_key: &str) -> bool {
    op.is_commutative() && right_key < left_key
}

impl Expression {
    /// Rebuild the tree with commutative operands in canonical order and
    /// return it with its structure key.
    pub fn canonicalize(&self) -> (Expression, String) {
        match self {
            Expression::Digit(d) => (Expression::Digit(*d), leaf_key(*d)),
            Expression::Binary(op, l, r) => {
                let (left, left_key) = l.canonicalize();
                let (right, right_key) = r.canonicalize();
                if should_swap(*op, &left_key, &right_key) {
                    let key = combined_key(*op, &right_key, &left_key);
                    (Expression::binary(*op, right, left), key)
                } else {
                    let key = combined_key(*op, &left_key, &right_key);
                    (Expression::binary(*op, left, right), key)
                }
            }
        }
    }

    pub fn structure_key(&self) -> String {
        self.canonicalize().1
    }
}
