// tests/parser_tests.rs

use el_lang::ast::{BinaryOp, Expression, ExpressionNode, Literal, UnaryOp};
use el_lang::lexer::{Lexer, Location};
use el_lang::parser::{parse_lenient, parse_strict, ParseMode, Parser, ParserOptions};
use el_lang::ErrorKind;

fn parse(input: &str) -> ExpressionNode {
    parse_strict(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"))
}

fn number(node: &ExpressionNode) -> f64 {
    match node.expression() {
        Expression::Literal(Literal::Number(n)) => *n,
        other => panic!("Expected number literal, got {other:?}"),
    }
}

fn variable(node: &ExpressionNode) -> &str {
    match node.expression() {
        Expression::Variable(name) => name,
        other => panic!("Expected variable, got {other:?}"),
    }
}

fn binary(node: &ExpressionNode) -> (BinaryOp, &ExpressionNode, &ExpressionNode) {
    match node.expression() {
        Expression::Binary { op, left, right } => (*op, &**left, &**right),
        other => panic!("Expected binary expression, got {other:?}"),
    }
}

fn unary(node: &ExpressionNode) -> (UnaryOp, &ExpressionNode) {
    match node.expression() {
        Expression::Unary { op, operand } => (*op, &**operand),
        other => panic!("Expected unary expression, got {other:?}"),
    }
}

// ============================================================================
// Literals and Primitives
// ============================================================================

#[test]
fn test_parse_number() {
    assert_eq!(number(&parse("123")), 123.0);
}

#[test]
fn test_parse_decimal() {
    assert!((number(&parse("1.5")) - 1.5).abs() < f64::EPSILON);
}

#[test]
fn test_parse_string() {
    let expr = parse(r#""abc""#);
    assert!(matches!(expr.expression(), Expression::Literal(Literal::String(s)) if s == "abc"));
}

#[test]
fn test_parse_string_unescapes() {
    let expr = parse(r#""say \"hi\" \\o/""#);
    assert_eq!(
        expr.expression(),
        &Expression::Literal(Literal::String(r#"say "hi" \o/"#.to_string()))
    );
}

#[test]
fn test_single_quote_escape_keeps_backslash() {
    let expr = parse(r"'it\'s'");
    assert_eq!(
        expr.expression(),
        &Expression::Literal(Literal::String(r"it\'s".to_string()))
    );
}

#[test]
fn test_parse_booleans_and_null() {
    assert!(matches!(parse("true").expression(), Expression::Literal(Literal::Boolean(true))));
    assert!(matches!(parse("false").expression(), Expression::Literal(Literal::Boolean(false))));
    assert!(matches!(parse("null").expression(), Expression::Literal(Literal::Null)));
}

#[test]
fn test_keyword_prefixed_word_is_not_a_variable() {
    let err = parse_strict("trueish").unwrap_err();
    assert_eq!(
        err.message(),
        "Expected end of file, but got variable (raw data: 'ish')"
    );
    assert_eq!(err.location(), Location::new(1, 5));

    let expr = parse_lenient("nullable").unwrap();
    assert!(matches!(expr.expression(), Expression::Literal(Literal::Null)));
}

#[test]
fn test_parse_variable() {
    assert_eq!(variable(&parse("spawnflags")), "spawnflags");
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_no_precedence() {
    // (1 + 2) * 3, not 1 + (2 * 3)
    let node = parse("1 + 2 * 3");
    let (op, left, right) = binary(&node);
    assert_eq!(op, BinaryOp::Multiplication);
    assert_eq!(number(right), 3.0);

    let (op, left_left, left_right) = binary(left);
    assert_eq!(op, BinaryOp::Addition);
    assert_eq!(number(left_left), 1.0);
    assert_eq!(number(left_right), 2.0);
}

#[test]
fn test_parentheses() {
    let node = parse("(1 + 2) * 3");
    let (op, left, right) = binary(&node);
    assert_eq!(op, BinaryOp::Multiplication);
    assert_eq!(number(right), 3.0);

    let (group, inner) = unary(left);
    assert_eq!(group, UnaryOp::Group);
    assert_eq!(binary(inner).0, BinaryOp::Addition);
}

#[test]
fn test_parentheses_on_the_right() {
    let node = parse("1 + (2 * 3)");
    let (op, left, right) = binary(&node);
    assert_eq!(op, BinaryOp::Addition);
    assert_eq!(number(left), 1.0);
    let (group, inner) = unary(right);
    assert_eq!(group, UnaryOp::Group);
    assert_eq!(binary(inner).0, BinaryOp::Multiplication);
}

#[test]
fn test_every_binary_operator() {
    let test_cases = vec![
        ("a + b", BinaryOp::Addition),
        ("a - b", BinaryOp::Subtraction),
        ("a * b", BinaryOp::Multiplication),
        ("a / b", BinaryOp::Division),
        ("a % b", BinaryOp::Modulus),
        ("a && b", BinaryOp::LogicalAnd),
        ("a || b", BinaryOp::LogicalOr),
        ("a & b", BinaryOp::BitwiseAnd),
        ("a | b", BinaryOp::BitwiseOr),
        ("a ^ b", BinaryOp::BitwiseXOr),
        ("a << b", BinaryOp::BitwiseShiftLeft),
        ("a >> b", BinaryOp::BitwiseShiftRight),
        ("a < b", BinaryOp::Less),
        ("a <= b", BinaryOp::LessOrEqual),
        ("a > b", BinaryOp::Greater),
        ("a >= b", BinaryOp::GreaterOrEqual),
        ("a == b", BinaryOp::Equal),
        ("a != b", BinaryOp::NotEqual),
        ("a -> b", BinaryOp::Case),
    ];

    for (input, expected) in test_cases {
        let expr = parse(input);
        let (op, left, right) = binary(&expr);
        assert_eq!(op, expected, "Failed for input: {}", input);
        assert_eq!(variable(left), "a");
        assert_eq!(variable(right), "b");
    }
}

#[test]
fn test_comparison_chains_left_to_right() {
    let node = parse("a < b && c");
    let (op, left, right) = binary(&node);
    assert_eq!(op, BinaryOp::LogicalAnd);
    assert_eq!(binary(left).0, BinaryOp::Less);
    assert_eq!(variable(right), "c");
}

#[test]
fn test_unary_operators() {
    let test_cases = vec![
        ("+x", UnaryOp::Plus),
        ("-x", UnaryOp::Minus),
        ("!x", UnaryOp::LogicalNegation),
        ("~x", UnaryOp::BitwiseNegation),
    ];

    for (input, expected) in test_cases {
        let expr = parse(input);
        let (op, operand) = unary(&expr);
        assert_eq!(op, expected, "Failed for input: {}", input);
        assert_eq!(variable(operand), "x");
    }
}

#[test]
fn test_unary_binds_to_single_term() {
    let node = parse("-a + b");
    let (op, left, right) = binary(&node);
    assert_eq!(op, BinaryOp::Addition);
    assert_eq!(unary(left).0, UnaryOp::Minus);
    assert_eq!(variable(right), "b");
}

#[test]
fn test_double_negation() {
    let node = parse("!!flag");
    let (outer, operand) = unary(&node);
    assert_eq!(outer, UnaryOp::LogicalNegation);
    let (inner, operand) = unary(operand);
    assert_eq!(inner, UnaryOp::LogicalNegation);
    assert_eq!(variable(operand), "flag");
}

#[test]
fn test_unary_applies_to_subscript() {
    let node = parse("-list[0]");
    let (op, operand) = unary(&node);
    assert_eq!(op, UnaryOp::Minus);
    assert!(matches!(operand.expression(), Expression::Subscript { .. }));
}

#[test]
fn test_case_outside_switch_is_accepted() {
    assert_eq!(binary(&parse("x -> 1")).0, BinaryOp::Case);
}

// ============================================================================
// Arrays and Maps
// ============================================================================

#[test]
fn test_array_literal() {
    let expr = parse("[1, 2, 3]");
    match expr.expression() {
        Expression::Array(elements) => {
            let values: Vec<f64> = elements.iter().map(number).collect();
            assert_eq!(values, vec![1.0, 2.0, 3.0]);
        }
        other => panic!("Expected array, got {other:?}"),
    }
}

#[test]
fn test_empty_array() {
    assert_eq!(parse("[]").expression(), &Expression::Array(vec![]));
}

#[test]
fn test_array_with_bounded_range() {
    let expr = parse("[0, 2..4]");
    let Expression::Array(elements) = expr.expression() else {
        panic!("Expected array");
    };
    assert_eq!(elements.len(), 2);
    let (op, low, high) = binary(&elements[1]);
    assert_eq!(op, BinaryOp::BoundedRange);
    assert_eq!(number(low), 2.0);
    assert_eq!(number(high), 4.0);
}

#[test]
fn test_array_rejects_open_range() {
    assert!(parse_strict("[1..]").is_err());
    assert!(parse_strict("[..1]").is_err());
}

#[test]
fn test_nested_arrays() {
    let expr = parse("[[1], []]");
    let Expression::Array(elements) = expr.expression() else {
        panic!("Expected array");
    };
    assert!(matches!(elements[0].expression(), Expression::Array(inner) if inner.len() == 1));
    assert!(matches!(elements[1].expression(), Expression::Array(inner) if inner.is_empty()));
}

#[test]
fn test_map_literal() {
    let expr = parse(r#"{ "a": 1, "b": 2 }"#);
    let Expression::Map(entries) = expr.expression() else {
        panic!("Expected map");
    };
    assert_eq!(entries.len(), 2);
    assert_eq!(number(&entries["a"]), 1.0);
    assert_eq!(number(&entries["b"]), 2.0);
}

#[test]
fn test_map_last_key_wins() {
    let expr = parse(r#"{ "a": 1, "a": 2 }"#);
    let Expression::Map(entries) = expr.expression() else {
        panic!("Expected map");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(number(&entries["a"]), 2.0);
}

#[test]
fn test_map_name_keys() {
    let expr = parse("{ red: 1, 'green': 0.5 }");
    let Expression::Map(entries) = expr.expression() else {
        panic!("Expected map");
    };
    assert!(entries.contains_key("red"));
    assert!(entries.contains_key("green"));
}

#[test]
fn test_map_string_keys_are_unescaped() {
    let expr = parse(r#"{ "say \"hi\"": 1 }"#);
    let Expression::Map(entries) = expr.expression() else {
        panic!("Expected map");
    };
    assert!(entries.contains_key(r#"say "hi""#));
}

#[test]
fn test_empty_map() {
    assert!(matches!(parse("{}").expression(), Expression::Map(entries) if entries.is_empty()));
}

#[test]
fn test_nested_map_needs_space_before_closing() {
    assert!(parse_strict("{ a: { b: 1 } }").is_ok());
    assert!(parse_strict("{ a: { b: 1 }}").is_err());
}

// ============================================================================
// Subscripts
// ============================================================================

#[test]
fn test_subscript() {
    let expr = parse("a[1]");
    match expr.expression() {
        Expression::Subscript { target, index } => {
            assert_eq!(variable(target), "a");
            assert_eq!(number(index), 1.0);
        }
        other => panic!("Expected subscript, got {other:?}"),
    }
}

#[test]
fn test_multi_index_subscript() {
    let expr = parse("a[1,2]");
    let Expression::Subscript { index, .. } = expr.expression() else {
        panic!("Expected subscript");
    };
    match index.expression() {
        Expression::Array(indices) => {
            assert_eq!(indices.iter().map(number).collect::<Vec<_>>(), vec![1.0, 2.0]);
        }
        other => panic!("Expected array index, got {other:?}"),
    }
}

#[test]
fn test_range_subscripts() {
    let expr = parse("a[1..3]");
    let Expression::Subscript { index, .. } = expr.expression() else {
        panic!("Expected subscript");
    };
    assert_eq!(binary(index).0, BinaryOp::BoundedRange);

    let expr = parse("a[2..]");
    let Expression::Subscript { index, .. } = expr.expression() else {
        panic!("Expected subscript");
    };
    let (op, operand) = unary(index);
    assert_eq!(op, UnaryOp::LeftBoundedRange);
    assert_eq!(number(operand), 2.0);

    let expr = parse("a[..2]");
    let Expression::Subscript { index, .. } = expr.expression() else {
        panic!("Expected subscript");
    };
    assert_eq!(unary(index).0, UnaryOp::RightBoundedRange);
}

#[test]
fn test_mixed_indices() {
    let expr = parse("a[..1, 3, 5..]");
    let Expression::Subscript { index, .. } = expr.expression() else {
        panic!("Expected subscript");
    };
    let Expression::Array(indices) = index.expression() else {
        panic!("Expected array index");
    };
    assert_eq!(unary(&indices[0]).0, UnaryOp::RightBoundedRange);
    assert_eq!(number(&indices[1]), 3.0);
    assert_eq!(unary(&indices[2]).0, UnaryOp::LeftBoundedRange);
}

#[test]
fn test_chained_subscripts() {
    let expr = parse("a[1][2]");
    let Expression::Subscript { target, index } = expr.expression() else {
        panic!("Expected subscript");
    };
    assert_eq!(number(index), 2.0);
    let Expression::Subscript { target, index } = target.expression() else {
        panic!("Expected inner subscript");
    };
    assert_eq!(variable(target), "a");
    assert_eq!(number(index), 1.0);
}

#[test]
fn test_subscript_on_literals() {
    assert!(matches!(parse("'text'[0]").expression(), Expression::Subscript { .. }));
    assert!(matches!(parse("[1, 2][0]").expression(), Expression::Subscript { .. }));
}

#[test]
fn test_subscript_binds_before_operators() {
    let node = parse("a[0] + b[1]");
    let (op, left, right) = binary(&node);
    assert_eq!(op, BinaryOp::Addition);
    assert!(matches!(left.expression(), Expression::Subscript { .. }));
    assert!(matches!(right.expression(), Expression::Subscript { .. }));
}

#[test]
fn test_range_outside_brackets_is_rejected() {
    assert!(parse_strict("1..2").is_err());
}

// ============================================================================
// Switches
// ============================================================================

#[test]
fn test_switch() {
    let expr = parse("{{ x -> 1, y -> 2, 3 }}");
    let Expression::Switch(branches) = expr.expression() else {
        panic!("Expected switch");
    };
    assert_eq!(branches.len(), 3);

    let (op, condition, result) = binary(&branches[0]);
    assert_eq!(op, BinaryOp::Case);
    assert_eq!(variable(condition), "x");
    assert_eq!(number(result), 1.0);

    assert_eq!(binary(&branches[1]).0, BinaryOp::Case);
    assert_eq!(number(&branches[2]), 3.0);
}

#[test]
fn test_empty_switch() {
    assert_eq!(parse("{{}}").expression(), &Expression::Switch(vec![]));
}

#[test]
fn test_switch_condition_chains_into_case() {
    // ((flags & 1) -> "red")
    let expr = parse(r#"{{ flags & 1 -> "red" }}"#);
    let Expression::Switch(branches) = expr.expression() else {
        panic!("Expected switch");
    };
    let (op, condition, _) = binary(&branches[0]);
    assert_eq!(op, BinaryOp::Case);
    assert_eq!(binary(condition).0, BinaryOp::BitwiseAnd);
}

#[test]
fn test_switch_as_operand() {
    let node = parse("1 + {{ a -> 2, 3 }}");
    let (op, left, right) = binary(&node);
    assert_eq!(op, BinaryOp::Addition);
    assert_eq!(number(left), 1.0);
    assert!(matches!(right.expression(), Expression::Switch(branches) if branches.len() == 2));
}

#[test]
fn test_switch_rejects_trailing_comma() {
    assert!(parse_strict("{{ 1, }}").is_err());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unterminated_string_is_lexical() {
    let err = parse_strict("\"unterminated").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
}

#[test]
fn test_dangling_operator() {
    let err = parse_strict("1 +").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntactic);
    assert!(err.message().contains("but got end of file"), "{}", err.message());
    assert_eq!(err.location(), Location::new(1, 4));
}

#[test]
fn test_expected_names_in_message() {
    let err = parse_strict("[1 2]").unwrap_err();
    assert_eq!(
        err.message(),
        "Expected ']' or ',', but got number (raw data: '2')"
    );
}

#[test]
fn test_map_key_must_be_string_or_name() {
    let err = parse_strict("{ 1: 2 }").unwrap_err();
    assert_eq!(
        err.message(),
        "Expected variable or string, but got number (raw data: '1')"
    );
}

#[test]
fn test_missing_close_paren() {
    let err = parse_strict("(1 + 2").unwrap_err();
    assert!(err.message().starts_with("Expected ')'"), "{}", err.message());
}

#[test]
fn test_empty_input() {
    let err = parse_strict("").unwrap_err();
    assert!(err.message().contains("end of file"));
}

#[test]
fn test_malformed_number_fails_parse() {
    let err = parse_strict("[1.2.3]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
}

#[test]
fn test_number_overflow_is_rejected() {
    let err = parse_strict("x + 1e400").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Lexical);
    assert_eq!(err.message(), "Malformed number literal: '1e400'");
    assert_eq!(err.location(), Location::new(1, 5));

    assert!(parse_strict("[1, 2e308]").is_err());
    assert_eq!(number(&parse("1e308")), 1e308);
}

// ============================================================================
// Strict and Lenient Modes
// ============================================================================

#[test]
fn test_strict_rejects_trailing_content() {
    let err = parse_strict("1 2").unwrap_err();
    assert_eq!(
        err.message(),
        "Expected end of file, but got number (raw data: '2')"
    );
    assert_eq!(err.location(), Location::new(1, 3));
}

#[test]
fn test_lenient_accepts_trailing_content() {
    let expr = parse_lenient("1 2").unwrap();
    assert_eq!(number(&expr), 1.0);
}

#[test]
fn test_lenient_resume_position() {
    let text = "color + 1 }, other";
    let mut parser = Parser::new(ParseMode::Lenient, Lexer::new(text));
    let expr = parser.parse().unwrap();
    assert_eq!(binary(&expr).0, BinaryOp::Addition);
    assert_eq!(&text[parser.lexer_state().offset()..], " }, other");
}

#[test]
fn test_lenient_still_reports_errors() {
    assert!(parse_lenient("1 + ,").is_err());
}

#[test]
fn test_embedded_locations() {
    let options = ParserOptions {
        mode: ParseMode::Lenient,
        line: 40,
        column: 15,
        ..ParserOptions::default()
    };
    let expr = Parser::with_options("a + b", options).parse().unwrap();
    assert_eq!(expr.location(), Location::new(40, 17));
    let (_, left, right) = binary(&expr);
    assert_eq!(left.location(), Location::new(40, 15));
    assert_eq!(right.location(), Location::new(40, 19));
}

// ============================================================================
// Idempotence
// ============================================================================

#[test]
fn test_parsing_twice_yields_equal_trees() {
    let input = r#"{{ a[1..2] == [1, 2] -> { x: -b }, !c }}"#;
    assert_eq!(parse(input), parse(input));
}

#[test]
fn test_equality_ignores_location() {
    let a = parse("x + 1");
    let b = parse("\n\n   x    +    1");
    assert_eq!(a, b);
    assert_ne!(a.location(), b.location());
}
