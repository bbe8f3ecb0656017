/// The four binary operators an expression may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const ALL: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Mul)
    }

    /// Apply the operator, returning `None` for an exactly-zero divisor or a
    /// non-finite result.
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        let value = match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => {
                if right == 0.0 {
                    return None;
                }
                left / right
            }
        };
        value.is_finite().then_some(value)
    }
}

/// Represents an arithmetic expression built from single digits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Digit(u8),
    Binary(Operator, Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn binary(op: Operator, left: Expression, right: Expression) -> Self {
        Expression::Binary(op, Box::new(left), Box::new(right))
    }

    /// Precedence of the top-level operator; digits bind tighter than anything.
    pub fn precedence(&self) -> u8 {
        match self {
            Expression::Digit(_) => 3,
            Expression::Binary(op, _, _) => op.precedence(),
        }
    }

    /// Digits in left-to-right order
    pub fn digits(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr {
                Expression::Digit(d) => out.push(*d),
                Expression::Binary(_, l, r) => {
                    stack.push(r);
                    stack.push(l);
                }
            }
        }
        out
    }
}
