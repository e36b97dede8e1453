// tests/parser_tests.rs

use calc_lang::ast::{BinOp, Expr};
use calc_lang::lexer::{LexError, Lexer};
use calc_lang::parser::{MAX_DEPTH, ParseError, Parser};

fn parse(input: &str) -> Result<Option<Expr>, ParseError> {
    let lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer)?;
    parser.parse()
}

fn parse_ok(input: &str) -> Expr {
    parse(input)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", input, e))
        .unwrap_or_else(|| panic!("No expression in {}", input))
}

fn num(n: f64) -> Expr {
    Expr::Number(n)
}

// ============================================================================
// Simple tests
// ============================================================================

#[test]
fn test_single_number() {
    assert_eq!(parse_ok("16"), num(16.0));
}

#[test]
fn test_addition_with_whitespace() {
    assert_eq!(
        parse_ok("16\t +32"),
        Expr::binary(BinOp::Add, num(16.0), num(32.0))
    );
}

#[test]
fn test_arithmetic() {
    // Should be: Add(Multiply(16, 64), 32)
    match parse_ok("16*64\t + \t\t32") {
        Expr::BinaryOp {
            op: BinOp::Add,
            left,
            right,
        } => {
            match *left {
                Expr::BinaryOp {
                    op: BinOp::Multiply,
                    ..
                } => {} // Good!
                _ => panic!("Expected multiplication in left"),
            }
            assert!(matches!(*right, Expr::Number(n) if n == 32.0));
        }
        _ => panic!("Expected addition"),
    }
}

#[test]
fn test_parentheses() {
    assert_eq!(
        parse_ok("(\t\t16 + 64\t) *\t 32"),
        Expr::binary(
            BinOp::Multiply,
            Expr::binary(BinOp::Add, num(16.0), num(64.0)),
            num(32.0)
        )
    );
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(
        parse_ok("16 ** 32 \t** 64\t"),
        Expr::binary(
            BinOp::Power,
            num(16.0),
            Expr::binary(BinOp::Power, num(32.0), num(64.0))
        )
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        parse_ok("10 - 4 - 3"),
        Expr::binary(
            BinOp::Subtract,
            Expr::binary(BinOp::Subtract, num(10.0), num(4.0)),
            num(3.0)
        )
    );
}

#[test]
fn test_unary_minus() {
    assert_eq!(
        parse_ok("-x * 2"),
        Expr::binary(
            BinOp::Multiply,
            Expr::Negate(Box::new(Expr::Identifier("x".to_string()))),
            num(2.0)
        )
    );
}

#[test]
fn test_text_and_identifier_primaries() {
    assert_eq!(
        parse_ok("name + 'x'"),
        Expr::binary(
            BinOp::Add,
            Expr::Identifier("name".to_string()),
            Expr::Text("x".to_string())
        )
    );
}

// ============================================================================
// Comparison and logical tier
// ============================================================================

#[test]
fn test_comparisons_group_under_logical() {
    assert_eq!(
        parse_ok("a < b && c != d"),
        Expr::binary(
            BinOp::And,
            Expr::binary(
                BinOp::LessThan,
                Expr::Identifier("a".to_string()),
                Expr::Identifier("b".to_string())
            ),
            Expr::binary(
                BinOp::NotEqual,
                Expr::Identifier("c".to_string()),
                Expr::Identifier("d".to_string())
            )
        )
    );
}

#[test]
fn test_chained_comparison_folds_left() {
    assert_eq!(
        parse_ok("1 < 2 < 3"),
        Expr::binary(
            BinOp::LessThan,
            Expr::binary(BinOp::LessThan, num(1.0), num(2.0)),
            num(3.0)
        )
    );
}

#[test]
fn test_and_or_share_precedence() {
    // Same level, left to right: (a || b) && c
    let expr = parse_ok("a || b && c");
    assert!(matches!(expr, Expr::BinaryOp { op: BinOp::And, .. }));
}

#[test]
fn test_comparison_operators() {
    let cases = vec![
        ("1 == 2", BinOp::Equal),
        ("1 != 2", BinOp::NotEqual),
        ("1 < 2", BinOp::LessThan),
        ("1 <= 2", BinOp::LessEqual),
        ("1 > 2", BinOp::GreaterThan),
        ("1 >= 2", BinOp::GreaterEqual),
    ];

    for (input, expected) in cases {
        match parse_ok(input) {
            Expr::BinaryOp { op, .. } => assert_eq!(op, expected, "Failed for {}", input),
            other => panic!("Expected binary op for {}, got {:?}", input, other),
        }
    }
}

// ============================================================================
// Ternary
// ============================================================================

#[test]
fn test_ternary() {
    assert_eq!(
        parse_ok("x > 1 ? 'big' : 'small'"),
        Expr::ternary(
            Expr::binary(
                BinOp::GreaterThan,
                Expr::Identifier("x".to_string()),
                num(1.0)
            ),
            Expr::Text("big".to_string()),
            Expr::Text("small".to_string())
        )
    );
}

#[test]
fn test_ternary_is_right_associative() {
    assert_eq!(
        parse_ok("a ? 1 : b ? 2 : 3"),
        Expr::ternary(
            Expr::Identifier("a".to_string()),
            num(1.0),
            Expr::ternary(Expr::Identifier("b".to_string()), num(2.0), num(3.0))
        )
    );
}

#[test]
fn test_ternary_missing_colon() {
    assert_eq!(
        parse("a ? 1 2"),
        Err(ParseError::ExpectedColon { position: 6 })
    );
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_empty_input_is_no_expression() {
    assert_eq!(parse(""), Ok(None));
    assert_eq!(parse(" \t\n"), Ok(None));
}

#[test]
fn test_missing_closing_paren() {
    let err = parse("32 * (16 + 64").unwrap_err();
    assert_eq!(err, ParseError::ExpectedClosingParen { position: 13 });
    assert_eq!(err.position(), 13);
    assert!(err.to_string().contains("')'"));
}

#[test]
fn test_double_plus() {
    let err = parse("16 ++ 32").unwrap_err();
    assert!(matches!(err, ParseError::ExpectedPrimary { position: 4, .. }));
    assert!(err.to_string().starts_with("expected number | '('"));
}

#[test]
fn test_trailing_tokens() {
    let err = parse("16 32").unwrap_err();
    assert!(matches!(err, ParseError::TrailingInput { position: 3, .. }));
    assert!(err.to_string().starts_with("failed to parse expression"));

    assert!(matches!(
        parse("(1) )"),
        Err(ParseError::TrailingInput { .. })
    ));
}

#[test]
fn test_lex_error_surfaces() {
    assert_eq!(
        parse("'abc"),
        Err(ParseError::Lex(LexError::UnterminatedText {
            quote: '\'',
            position: 0
        }))
    );
}

#[test]
fn test_power_exponent_cannot_be_negated() {
    assert!(matches!(
        parse("2 ** -1"),
        Err(ParseError::ExpectedPrimary { .. })
    ));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_round_trip() {
    let sources = vec![
        "2 ** 3 ** 2",
        "16 + 64 * 32",
        "-(a + 1) * 'txt'",
        "a < b && c != d ? \"it's\" : 'no'",
        "x ? y ? 1 : 2 : 3",
    ];

    for source in sources {
        let expr = parse_ok(source);
        let printed = expr.to_string();
        assert_eq!(parse_ok(&printed), expr, "Round trip failed via {}", printed);
    }
}

#[test]
fn test_display_grouping() {
    assert_eq!(parse_ok("2 ** 3 ** 2").to_string(), "(2 ** (3 ** 2))");
    assert_eq!(parse_ok("-x").to_string(), "-x");
    assert_eq!(parse_ok("c ? 'a' : 0.5").to_string(), "(c ? 'a' : 0.5)");
}

#[test]
fn test_display_infinite_number_parses_back() {
    let huge = "9".repeat(400);
    let expr = parse_ok(&huge);
    assert_eq!(expr, num(f64::INFINITY));

    let printed = expr.to_string();
    assert_eq!(parse_ok(&printed), expr, "Round trip failed via {}", printed);

    let sum = Expr::binary(BinOp::Add, Expr::Identifier("x".to_string()), num(f64::INFINITY));
    assert_eq!(parse_ok(&sum.to_string()), sum);
}

#[test]
fn test_display_nan_number() {
    let printed = num(f64::NAN).to_string();
    assert_eq!(printed, "(0 / 0)");
    assert_eq!(
        parse_ok(&printed),
        Expr::binary(BinOp::Divide, num(0.0), num(0.0))
    );
}

// ============================================================================
// Nesting limit
// ============================================================================

fn nested_parens(levels: usize) -> String {
    format!("{}1{}", "(".repeat(levels), ")".repeat(levels))
}

fn chain(op: &str, terms: usize) -> String {
    vec!["1"; terms].join(op)
}

#[test]
fn test_parens_at_limit_parse() {
    assert_eq!(parse_ok(&nested_parens(MAX_DEPTH)), num(1.0));
}

#[test]
fn test_parens_past_limit() {
    let err = parse(&nested_parens(MAX_DEPTH + 1)).unwrap_err();
    assert_eq!(err, ParseError::TooDeep { position: MAX_DEPTH });
    assert_eq!(err.position(), MAX_DEPTH);
    assert!(err.to_string().contains("nested too deeply"));

    assert!(matches!(
        parse(&nested_parens(500)),
        Err(ParseError::TooDeep { .. })
    ));
}

#[test]
fn test_unclosed_deep_parens() {
    assert!(matches!(
        parse(&"(".repeat(10_000)),
        Err(ParseError::TooDeep { .. })
    ));
}

#[test]
fn test_left_fold_chain_limit() {
    // n terms fold n - 1 times
    assert!(parse(&chain(" + ", MAX_DEPTH + 1)).is_ok());
    assert!(matches!(
        parse(&chain(" + ", MAX_DEPTH + 2)),
        Err(ParseError::TooDeep { .. })
    ));

    for op in [" + ", " * ", " < ", " && "] {
        assert!(
            matches!(parse(&chain(op, 20_000)), Err(ParseError::TooDeep { .. })),
            "Failed for chain of {}",
            op
        );
    }
}

#[test]
fn test_chain_limit_reports_operator_position() {
    // `+` number k (from 1) sits at 2 + 4 * (k - 1)
    let err = parse(&chain(" + ", MAX_DEPTH + 2)).unwrap_err();
    assert_eq!(err.position(), 2 + 4 * MAX_DEPTH);
}

#[test]
fn test_right_recursive_chains_limit() {
    assert!(matches!(
        parse(&chain(" ** ", 20_000)),
        Err(ParseError::TooDeep { .. })
    ));

    let ternaries = format!("{}0", "a ? 1 : ".repeat(20_000));
    assert!(matches!(parse(&ternaries), Err(ParseError::TooDeep { .. })));
}

#[test]
fn test_closed_group_releases_depth() {
    // Each fold adds one level; the groups themselves do not accumulate
    let group = nested_parens(MAX_DEPTH - 3);
    let source = vec![group.as_str(); 4].join(" + ");
    assert!(parse(&source).is_ok());
}
