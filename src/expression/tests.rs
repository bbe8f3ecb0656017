use crate::expression::{Expression, ExpressionError, Operator, parse_expression};

fn digit(d: u8) -> Expression {
    Expression::Digit(d)
}

fn bin(op: Operator, l: Expression, r: Expression) -> Expression {
    Expression::binary(op, l, r)
}

#[test]
fn test_display_digit() {
    assert_eq!(format!("{}", digit(7)), "7");
}

#[test]
fn test_display_left_associative_chain_has_no_parens() {
    let expr = bin(
        Operator::Sub,
        bin(
            Operator::Mul,
            bin(Operator::Mul, digit(3), digit(3)),
            digit(3),
        ),
        bin(Operator::Mul, digit(3), digit(3)),
    );
    assert_eq!(format!("{}", expr), "3*3*3-3*3");
}

#[test]
fn test_display_lower_precedence_operand_is_wrapped() {
    let expr = bin(
        Operator::Mul,
        bin(Operator::Add, digit(1), digit(2)),
        digit(3),
    );
    assert_eq!(format!("{}", expr), "(1+2)*3");

    let expr = bin(
        Operator::Div,
        digit(8),
        bin(Operator::Sub, digit(3), digit(1)),
    );
    assert_eq!(format!("{}", expr), "8/(3-1)");
}

#[test]
fn test_display_right_operand_of_sub_keeps_parens() {
    let expr = bin(
        Operator::Sub,
        digit(9),
        bin(Operator::Sub, digit(5), digit(2)),
    );
    assert_eq!(format!("{}", expr), "9-(5-2)");

    let expr = bin(
        Operator::Sub,
        digit(9),
        bin(Operator::Add, digit(5), digit(2)),
    );
    assert_eq!(format!("{}", expr), "9-(5+2)");
}

#[test]
fn test_display_right_operand_of_add_drops_parens() {
    let expr = bin(
        Operator::Add,
        digit(9),
        bin(Operator::Sub, digit(5), digit(2)),
    );
    assert_eq!(format!("{}", expr), "9+5-2");
}

#[test]
fn test_display_right_operand_of_div_keeps_parens() {
    let expr = bin(
        Operator::Div,
        digit(8),
        bin(Operator::Mul, digit(2), digit(2)),
    );
    assert_eq!(format!("{}", expr), "8/(2*2)");

    let expr = bin(
        Operator::Mul,
        digit(8),
        bin(Operator::Div, digit(2), digit(2)),
    );
    assert_eq!(format!("{}", expr), "8*2/2");
}

#[test]
fn test_evaluate_respects_tree_shape() {
    let expr = bin(
        Operator::Div,
        digit(6),
        bin(Operator::Sub, digit(1), bin(Operator::Div, digit(3), digit(4))),
    );
    let result = expr.evaluate();
    assert!(result.is_ok());
    if let Ok(value) = result {
        assert!((value - 24.0).abs() < 1e-9);
    }
}

#[test]
fn test_evaluate_division_by_zero() {
    let expr = bin(
        Operator::Div,
        digit(1),
        bin(Operator::Sub, digit(2), digit(2)),
    );
    assert_eq!(expr.evaluate(), Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_operator_apply_filters_degenerate_results() {
    assert_eq!(Operator::Div.apply(1.0, 0.0), None);
    assert_eq!(Operator::Div.apply(0.0, 0.0), None);
    assert_eq!(Operator::Mul.apply(f64::MAX, 2.0), None);
    assert_eq!(Operator::Sub.apply(1.0, 3.0), Some(-2.0));
}

#[test]
fn test_parse_follows_precedence() {
    let result = parse_expression("3*3*3-3*3");
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.evaluate(), Ok(18.0));
        assert_eq!(format!("{}", expr), "3*3*3-3*3");
    }
}

#[test]
fn test_parse_is_left_associative() {
    let result = parse_expression("8-4-2");
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.evaluate(), Ok(2.0));
    }

    let result = parse_expression("8/4/2");
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.evaluate(), Ok(1.0));
    }
}

#[test]
fn test_parse_parentheses_and_whitespace() {
    let result: Result<Expression, _> = " ( 1 + 2 ) * ( 9 - 3 ) ".parse();
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(expr.evaluate(), Ok(18.0));
        assert_eq!(format!("{}", expr), "(1+2)*(9-3)");
    }
}

#[test]
fn test_parse_accepts_typographic_operators() {
    let result = parse_expression("6×3÷1");
    assert!(result.is_ok());
    if let Ok(expr) = result {
        assert_eq!(format!("{}", expr), "6*3/1");
    }
}

#[test]
fn test_parse_rejects_malformed_input() {
    for input in ["", "12", "1+", "-1+2", "(1+2", "1+2)", "1 2", "a+1", "1^2"] {
        let result = parse_expression(input);
        assert!(
            matches!(result, Err(ExpressionError::Parse { .. })),
            "expected parse failure for {:?}",
            input
        );
    }
}

#[test]
fn test_render_then_parse_preserves_value() {
    let expr = bin(
        Operator::Div,
        bin(Operator::Sub, digit(9), bin(Operator::Sub, digit(7), digit(4))),
        bin(Operator::Div, digit(1), digit(3)),
    );
    let text = format!("{}", expr);
    assert_eq!(text, "(9-(7-4))/(1/3)");
    let reparsed = parse_expression(&text);
    assert!(reparsed.is_ok());
    if let (Ok(original), Ok(Ok(again))) = (expr.evaluate(), reparsed.map(|e| e.evaluate())) {
        assert!((original - again).abs() < 1e-9);
    }
}

#[test]
fn test_canonicalize_orders_commutative_operands() {
    let (canonical, key) = bin(Operator::Add, digit(5), digit(2)).canonicalize();
    assert_eq!(format!("{}", canonical), "2+5");
    assert_eq!(key, "(n2+n5)");

    let (canonical, _) = bin(Operator::Sub, digit(5), digit(2)).canonicalize();
    assert_eq!(format!("{}", canonical), "5-2");
}

#[test]
fn test_structure_key_ignores_commutative_order() {
    let a = bin(
        Operator::Mul,
        bin(Operator::Add, digit(1), digit(2)),
        digit(6),
    );
    let b = bin(
        Operator::Mul,
        digit(6),
        bin(Operator::Add, digit(2), digit(1)),
    );
    assert_eq!(a.structure_key(), b.structure_key());

    let c = bin(
        Operator::Div,
        digit(6),
        bin(Operator::Add, digit(2), digit(1)),
    );
    assert_ne!(a.structure_key(), c.structure_key());
}

#[test]
fn test_digits_in_order() {
    let expr = bin(
        Operator::Sub,
        bin(Operator::Mul, digit(4), digit(7)),
        bin(Operator::Add, digit(1), digit(9)),
    );
    assert_eq!(expr.digits(), vec![4, 7, 1, 9]);
}
