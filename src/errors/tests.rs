//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorPhase, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        10,
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_line() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        42,
    );

    assert_eq!(error.get_line(), 42);
}

#[test]
fn test_error_display_includes_line() {
    let error = Error::new(ErrorImpl::UnterminatedString, 3);

    assert_eq!(error.to_string(), "line 3: unterminated string literal");
}

#[test]
fn test_lex_phase() {
    let unknown = Error::new(ErrorImpl::UnrecognisedToken { token: "$".to_string() }, 1);
    let unterminated = Error::new(ErrorImpl::UnterminatedString, 1);
    let utf8 = Error::new(ErrorImpl::InvalidUtf8, 1);

    assert_eq!(unknown.phase(), ErrorPhase::Lex);
    assert_eq!(unterminated.phase(), ErrorPhase::Lex);
    assert_eq!(utf8.phase(), ErrorPhase::Lex);
}

#[test]
fn test_parse_phase() {
    let error = Error::new(
        ErrorImpl::UnsupportedChainDepth { depth: 5, max: 4 },
        7,
    );

    assert_eq!(error.phase(), ErrorPhase::Parse);
    assert_eq!(error.get_error_name(), "UnsupportedChainDepth");
}

#[test]
fn test_trailing_comma_error() {
    let error = Error::new(
        ErrorImpl::TrailingComma {
            context: "array literal".to_string(),
        },
        0,
    );

    assert_eq!(error.get_error_name(), "TrailingComma");
    assert_eq!(
        error.get_tip().to_string(),
        "Remove the trailing `,` in the array literal"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        0,
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        0,
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_detailed_error_message() {
    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            token: "=".to_string(),
            message: "expected ':' after if condition".to_string(),
        },
        2,
    );

    assert_eq!(
        error.to_string(),
        "line 2: unexpected token (expected ':' after if condition): \"=\""
    );
}

#[test]
fn test_nesting_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 8 }, 1);

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.get_impl(), &ErrorImpl::NestingTooDeep { limit: 8 });
}
