#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use ast::ast::{Node, NodeKind};
pub use errors::errors::{LexError, ParseError};
pub use lexer::{
    lexer::{tokenize, tokenize_bytes},
    tokens::{Token, TokenKind},
};
pub use parser::parser::{parse, parse_source, parse_with_config, BracketAccess, ParserConfig};

/// Returns the 1-based `line` of `source`, without its terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    let index = (line as usize).checked_sub(1)?;
    source.lines().nth(index)
}

/// Renders a diagnostic for `error` raised while reading `file`.
///
/// ```text
/// Error: UnexpectedTokenDetailed (Unexpected token: `;`, expected expression)
/// -> demo.myco:2
///   |
/// 2 | let b = ;
///   |
/// ```
pub fn format_error(error: &Error, file: &str, source: &str) -> String {
    let mut output = match error.get_tip() {
        ErrorTip::None => format!("Error: {} ({})\n", error.get_error_name(), error.get_impl()),
        tip => format!("Error: {} ({})\n", error.get_error_name(), tip),
    };

    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;

    output.push_str(&format!("-> {}:{}\n", file, line_string));

    if let Some(line_text) = get_source_line(source, error.get_line()) {
        output.push_str(&format!("{:>padding$}\n", "|"));
        output.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        output.push_str(&format!("{:>padding$}\n", "|"));
    }

    output
}

pub fn display_error(error: &Error, file: &str, source: &str) {
    eprint!("{}", format_error(error, file, source));
}
