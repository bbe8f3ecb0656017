use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, multispace0, one_of, satisfy},
    combinator::{all_consuming, map, map_opt},
    multi::fold_many0,
    sequence::{delimited, pair, preceded, terminated},
};

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Operator> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' | '×' => Some(Operator::Mul),
            '/' | '÷' => Some(Operator::Div),
            _ => None,
        }
    }
}

fn parse_digit(input: &str) -> IResult<&str, Expression> {
    map(
        preceded(multispace0, satisfy(|c| c.is_ascii_digit())),
        |c: char| Expression::Digit(c as u8 - b'0'),
    )(input)
}

fn parse_parens(input: &str) -> IResult<&str, Expression> {
    delimited(
        preceded(multispace0, char('(')),
        parse_sum,
        preceded(multispace0, char(')')),
    )(input)
}

fn parse_atom(input: &str) -> IResult<&str, Expression> {
    alt((parse_digit, parse_parens))(input)
}

fn parse_product(input: &str) -> IResult<&str, Expression> {
    let (input, init) = parse_atom(input)?;

    fold_many0(
        pair(
            preceded(multispace0, map_opt(one_of("*/×÷"), Operator::from_symbol)),
            parse_atom,
        ),
        move || init.clone(),
        |acc, (op, rhs)| Expression::binary(op, acc, rhs),
    )(input)
}

fn parse_sum(input: &str) -> IResult<&str, Expression> {
    let (input, init) = parse_product(input)?;

    fold_many0(
        pair(
            preceded(multispace0, map_opt(one_of("+-"), Operator::from_symbol)),
            parse_product,
        ),
        move || init.clone(),
        |acc, (op, rhs)| Expression::binary(op, acc, rhs),
    )(input)
}

/// Parse an expression over single-digit literals with the usual precedence
/// and left associativity.
///
/// # Errors
///
/// Returns [`ExpressionError::Parse`] when the input is not a complete
/// expression. Multi-digit literals and unary minus are rejected.
pub fn parse_expression(input: &str) -> Result<Expression, ExpressionError> {
    all_consuming(terminated(parse_sum, multispace0))(input)
        .map(|(_, expr)| expr)
        .map_err(|e| ExpressionError::Parse {
            input: input.to_string(),
            reason: e.to_string(),
        })
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_expression(s)
    }
}
