use std::fmt;

use crate::expression::ast::{Expression, Operator};

/// Whether `operand` must be wrapped when placed under `outer`.
///
/// `-` and `/` do not associate, so an equal-precedence right operand keeps
/// its parentheses.
fn needs_parens(operand: &Expression, outer: Operator, is_right: bool) -> bool {
    let inner = operand.precedence();
    let outer_prec = outer.precedence();
    inner < outer_prec
        || (is_right && matches!(outer, Operator::Sub | Operator::Div) && inner == outer_prec)
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_with_parens(
            f: &mut fmt::Formatter,
            expr: &Expression,
            need_parens: bool,
        ) -> fmt::Result {
            if need_parens {
                write!(f, "(")?;
                fmt_expression(f, expr)?;
                write!(f, ")")
            } else {
                fmt_expression(f, expr)
            }
        }

        fn fmt_expression(f: &mut fmt::Formatter, expr: &Expression) -> fmt::Result {
            match expr {
                Expression::Digit(d) => write!(f, "{}", d),
                Expression::Binary(op, l, r) => {
                    write_with_parens(f, l, needs_parens(l, *op, false))?;
                    write!(f, "{}", op)?;
                    write_with_parens(f, r, needs_parens(r, *op, true))
                }
            }
        }

        fmt_expression(f, self)
    }
}
