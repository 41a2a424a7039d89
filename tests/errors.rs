//! Every failure is a `ParsingError` with the same message

use calc::diagnostic::Span;
use calc::{evaluate, ParsingError, TokenKind};

fn parse_error(source: &str) -> ParsingError {
    evaluate(source).expect_err("evaluation should fail")
}

#[test]
fn test_missing_left_operand() {
    let err = parse_error("+5");
    assert_eq!(err.to_string(), "Error parsing input");
    assert_eq!(err.expected, Some(TokenKind::Integer));
    assert_eq!(err.span, Span::new(0, 1));
}

#[test]
fn test_missing_plus() {
    let err = parse_error("35");
    assert_eq!(err.expected, Some(TokenKind::Plus));
}

#[test]
fn test_invalid_operator() {
    let err = parse_error("3&5");
    assert_eq!(err.to_string(), "Error parsing input");
    assert_eq!(err.expected, None);
}

#[test]
fn test_unsupported_operators() {
    for source in ["3-5", "3*5", "3/5"] {
        assert!(evaluate(source).is_err(), "{} should fail", source);
    }
}

#[test]
fn test_empty_input() {
    let err = parse_error("");
    assert_eq!(err.found.as_deref(), Some("EOF"));
    assert_eq!(err.span, Span::new(0, 0));
}

#[test]
fn test_incomplete_expressions() {
    for source in ["3", "3+", "+", "++"] {
        assert!(evaluate(source).is_err(), "{} should fail", source);
    }
}

#[test]
fn test_whitespace_rejected() {
    assert!(evaluate("3 + 5").is_err());
    assert!(evaluate(" 3+5").is_err());
}

#[test]
fn test_invalid_trailing_character() {
    let err = parse_error("3+5&");
    assert_eq!(err.span, Span::new(3, 4));
}

#[test]
fn test_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(parse_error("x"));
    assert_eq!(err.to_string(), "Error parsing input");
}
