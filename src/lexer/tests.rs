//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric literals (integers and floats)
//! - String literals and their escapes
//! - Operators and punctuation
//! - Comments and line tracking
//! - Error cases

use pretty_assertions::assert_eq;

use super::{
    lexer::{tokenize, tokenize_bytes, unescape},
    tokens::TokenKind,
};
use crate::errors::errors::{ErrorImpl, ErrorPhase};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).unwrap().iter().map(|t| t.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "func let if else for while end return switch case default try catch print in use as int string true false";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Func);
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Else);
    assert_eq!(tokens[4].kind, TokenKind::For);
    assert_eq!(tokens[5].kind, TokenKind::While);
    assert_eq!(tokens[6].kind, TokenKind::End);
    assert_eq!(tokens[7].kind, TokenKind::Return);
    assert_eq!(tokens[8].kind, TokenKind::Switch);
    assert_eq!(tokens[9].kind, TokenKind::Case);
    assert_eq!(tokens[10].kind, TokenKind::Default);
    assert_eq!(tokens[11].kind, TokenKind::Try);
    assert_eq!(tokens[12].kind, TokenKind::Catch);
    assert_eq!(tokens[13].kind, TokenKind::Print);
    assert_eq!(tokens[14].kind, TokenKind::In);
    assert_eq!(tokens[15].kind, TokenKind::Use);
    assert_eq!(tokens[16].kind, TokenKind::As);
    assert_eq!(tokens[17].kind, TokenKind::IntType);
    assert_eq!(tokens[18].kind, TokenKind::StringType);
    assert_eq!(tokens[19].kind, TokenKind::True);
    assert_eq!(tokens[20].kind, TokenKind::False);
    assert_eq!(tokens[21].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_capitalised_booleans() {
    assert_eq!(
        kinds("True False"),
        vec![TokenKind::True, TokenKind::False, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar baz_123 _underscore CamelCase").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text.as_deref(), Some("foo"));
    assert_eq!(tokens[1].text.as_deref(), Some("bar"));
    assert_eq!(tokens[2].text.as_deref(), Some("baz_123"));
    assert_eq!(tokens[3].text.as_deref(), Some("_underscore"));
    assert_eq!(tokens[4].text.as_deref(), Some("CamelCase"));
    assert_eq!(tokens[5].kind, TokenKind::EOF);
    assert_eq!(tokens[5].text, None);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 .5").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text.as_deref(), Some("42"));
    assert_eq!(tokens[1].kind, TokenKind::Float);
    assert_eq!(tokens[1].text.as_deref(), Some("3.14"));
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[3].kind, TokenKind::Float);
    assert_eq!(tokens[3].text.as_deref(), Some(".5"));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_dot_before_letter_is_member_access() {
    assert_eq!(
        kinds("a.b"),
        vec![TokenKind::Identifier, TokenKind::Dot, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_number_followed_by_member() {
    assert_eq!(
        kinds("1.x"),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Identifier, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_strings_keep_lexeme() {
    let tokens = tokenize(r#""hello" "multiple words""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text.as_deref(), Some("\"hello\""));
    assert_eq!(tokens[1].text.as_deref(), Some("\"multiple words\""));
    assert_eq!(tokens[2].kind, TokenKind::EOF);
}

#[test]
fn test_unescape() {
    assert_eq!(unescape(r#""hello\nworld""#), "hello\nworld");
    assert_eq!(unescape(r#""tab\there""#), "tab\there");
    assert_eq!(unescape(r#""backslash\\""#), "backslash\\");
    assert_eq!(unescape(r#""quote\"test""#), "quote\"test");
    assert_eq!(unescape(r#""other\q""#), "otherq");
    assert_eq!(unescape(r#""""#), "");
}

#[test]
fn test_escaped_quote_does_not_close_string() {
    let tokens = tokenize(r#""quote\"test" x"#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text.as_deref(), Some(r#""quote\"test""#));
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn test_unterminated_string() {
    let error = tokenize("\"abc").unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::UnterminatedString);
    assert_eq!(error.get_line(), 1);
    assert_eq!(error.phase(), ErrorPhase::Lex);
}

#[test]
fn test_unterminated_string_reports_opening_line() {
    let error = tokenize("let a = 1;\nlet b = \"open\n\n").unwrap_err();

    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % == != < > <= >= = and or"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::Equals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::Greater,
            TokenKind::LessEquals,
            TokenKind::GreaterEquals,
            TokenKind::Assignment,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_and_or_need_word_boundary() {
    let tokens = tokenize("android order and_x or(").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].text.as_deref(), Some("and_x"));
    assert_eq!(tokens[3].kind, TokenKind::Or);
    assert_eq!(tokens[4].kind, TokenKind::OpenParen);
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] . , ; : ? -> =>"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Dot,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Question,
            TokenKind::Arrow,
            TokenKind::Lambda,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_minus_without_space_is_operator() {
    assert_eq!(
        kinds("x-1"),
        vec![TokenKind::Identifier, TokenKind::Dash, TokenKind::Number, TokenKind::EOF]
    );
}

#[test]
fn test_tokenize_path() {
    let tokens = tokenize("use ./lib/math.myco as math").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Use);
    assert_eq!(tokens[1].kind, TokenKind::Path);
    assert_eq!(tokens[1].text.as_deref(), Some("./lib/math.myco"));
    assert_eq!(tokens[2].kind, TokenKind::As);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("let x = 5; # this is a comment\nlet y = 10;").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::Let);
    assert_eq!(tokens[5].line, 2);
    assert_eq!(tokens[6].text.as_deref(), Some("y"));
}

#[test]
fn test_block_comment_spans_lines() {
    let tokens = tokenize("a /* one\ntwo\nthree */ b").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].text.as_deref(), Some("b"));
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn test_block_comment_first_close_wins() {
    let tokens = tokenize("/* a /* b */ c */").unwrap();

    // `c` survives, then the dangling `*/` lexes as operators.
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text.as_deref(), Some("c"));
    assert_eq!(tokens[1].kind, TokenKind::Star);
    assert_eq!(tokens[2].kind, TokenKind::Slash);
}

#[test]
fn test_unterminated_block_comment_runs_to_end() {
    assert_eq!(kinds("x /* never closed"), vec![TokenKind::Identifier, TokenKind::EOF]);
}

#[test]
fn test_tokenize_simple_program() {
    let tokens = tokenize("let x = 42;").unwrap();

    assert_eq!(tokens.len(), 6); // let, x, =, 42, ;, EOF
    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_function_definition() {
    let tokens = tokenize("let add(a: int, b: int) -> int:").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].text.as_deref(), Some("add"));
    assert_eq!(tokens[2].kind, TokenKind::OpenParen);
    assert_eq!(tokens[4].kind, TokenKind::Colon);
    assert_eq!(tokens[5].kind, TokenKind::IntType);
    assert_eq!(tokens[10].kind, TokenKind::CloseParen);
    assert_eq!(tokens[11].kind, TokenKind::Arrow);
    assert_eq!(tokens[12].kind, TokenKind::IntType);
    assert_eq!(tokens[13].kind, TokenKind::Colon);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let error = tokenize("let x = @").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedToken { token: "@".to_string() }
    );
}

#[test]
fn test_lone_bang_is_error() {
    let error = tokenize("\n!x").unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnrecognisedToken { token: "!".to_string() }
    );
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_tokenize_newlines() {
    let tokens = tokenize("let x = 1;\nlet y = 2;\n").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[5].kind, TokenKind::Let);
    assert_eq!(tokens[5].line, 2);
    assert_eq!(tokens.last().unwrap().line, 3);
}

#[test]
fn test_multiline_string_advances_line() {
    let tokens = tokenize("\"a\nb\" x").unwrap();

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn test_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_bytes_invalid_utf8() {
    let error = tokenize_bytes(b"let a = 1;\nlet b = \xff;").unwrap_err();

    assert_eq!(error.get_impl(), &ErrorImpl::InvalidUtf8);
    assert_eq!(error.get_line(), 2);
}

#[test]
fn test_tokenize_bytes_valid() {
    let tokens = tokenize_bytes(b"print(1);").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Print);
    assert_eq!(tokens.len(), 6);
}
