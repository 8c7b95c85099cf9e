//! Type annotation parsing.
//!
//! Myco only annotates function parameters and return values, with one of
//! the two marker keywords `int` and `string`.

use crate::{ast::types::TypeMarker, errors::errors::Error, lexer::tokens::TokenKind};

use super::parser::Parser;

/// Consumes a type marker keyword.
pub fn parse_type_marker(parser: &mut Parser) -> Result<TypeMarker, Error> {
    match TypeMarker::from_token_kind(parser.current_token_kind()) {
        Some(marker) => {
            parser.advance();
            Ok(marker)
        }
        None => Err(parser.unexpected("expected type annotation ('int' or 'string')")),
    }
}

/// True when `kind` is a type marker keyword.
pub fn is_type_marker(kind: TokenKind) -> bool {
    TypeMarker::from_token_kind(kind).is_some()
}
