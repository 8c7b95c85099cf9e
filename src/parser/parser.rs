//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the parsing entry points.
//! Statements are parsed by recursive descent through the statement lookup
//! table, expressions by precedence climbing over the binding power table
//! (see [`super::lookups`]).

use log::debug;

use crate::{
    ast::ast::Node,
    errors::errors::{Error, ErrorImpl, ParseError},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
};

use super::stmt::parse_stmt;

/// Returned for reads past the end of the token slice.
static EOF_TOKEN: Token = Token::eof(0);

/// How a trailing `[..]` is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketAccess {
    /// Identifier and dot-chain bases give `PropertyAccess` / `IndexAssign`
    /// keyed semantics, any other base gives `IndexAccess`.
    #[default]
    Keyed,
    /// Every bracket is an `IndexAccess`, left for the evaluator to resolve.
    Unified,
}

/// Tunables for a single parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest `a.b.c = v` chain accepted. `None` accepts any depth.
    pub max_chain_depth: Option<usize>,
    pub bracket_access: BracketAccess,
    /// Deepest expression/block nesting before the parse is refused.
    pub max_nesting: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_chain_depth: Some(4),
            bracket_access: BracketAccess::Keyed,
            max_nesting: 256,
        }
    }
}

/// The main parser structure that maintains parsing state.
///
/// Holds the borrowed token stream and a single cursor into it. Lookahead
/// goes through [`Parser::peek`] and never moves the cursor.
pub struct Parser<'a> {
    /// The list of tokens to parse
    tokens: &'a [Token],
    /// Current position in the token stream
    pos: usize,
    config: ParserConfig,
    /// Current expression/block nesting
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], config: ParserConfig) -> Self {
        Parser {
            tokens,
            pos: 0,
            config,
            depth: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Kind of the token `offset` places after the cursor.
    pub fn peek(&self, offset: usize) -> TokenKind {
        self.tokens
            .get(self.pos + offset)
            .map_or(TokenKind::EOF, |token| token.kind)
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current_token();
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Line of the current token, falling back to the last token's line
    /// once the cursor runs off the end.
    pub fn line(&self) -> u32 {
        match self.tokens.get(self.pos) {
            Some(token) => token.line,
            None => self.tokens.last().map_or(1, |token| token.line),
        }
    }

    /// Expects a token of the specified kind, failing with `message`.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        message: &str,
    ) -> Result<&'a Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(self.unexpected(message));
        }
        Ok(self.advance())
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<&'a Token, Error> {
        if self.current_token_kind() != expected_kind {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.current_token().lexeme().to_string(),
                },
                self.line(),
            ));
        }
        Ok(self.advance())
    }

    /// Builds an "expected X" error pointing at the current token.
    pub fn unexpected(&self, message: &str) -> Error {
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: self.current_token().lexeme().to_string(),
                message: message.to_string(),
            },
            self.line(),
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::EOF
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Enters one nesting level, refusing past `max_nesting`.
    pub fn descend(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > self.config.max_nesting {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    limit: self.config.max_nesting,
                },
                self.line(),
            ));
        }
        Ok(())
    }

    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Parses a stream of tokens into the root `Block`.
///
/// This is the main entry point for parsing, using the default configuration.
pub fn parse(tokens: &[Token]) -> Result<Node, ParseError> {
    parse_with_config(tokens, ParserConfig::default())
}

pub fn parse_with_config(tokens: &[Token], config: ParserConfig) -> Result<Node, ParseError> {
    let mut parser = Parser::new(tokens, config);
    let mut body = vec![];

    while parser.has_tokens() {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
            continue;
        }
        body.push(parse_stmt(&mut parser)?);
    }

    debug!("parsed {} top-level statements", body.len());
    Ok(Node::block(body, 1))
}

/// Tokenizes and parses `source` in one step.
pub fn parse_source(source: &str) -> Result<Node, Error> {
    let tokens = tokenize(source)?;
    parse(&tokens)
}
