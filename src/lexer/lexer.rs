use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl, LexError}, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

impl RegexPattern {
    fn new(pattern: &str, handler: RegexHandler) -> Self {
        RegexPattern {
            regex: Regex::new(pattern).unwrap(),
            handler,
        }
    }
}

lazy_static! {
    // Order matters: the first pattern matching at the cursor wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern::new("^[ \\t\\r]+", skip_handler),
        RegexPattern::new("^\\n", newline_handler),
        RegexPattern::new("^#[^\\n]*", skip_handler),
        RegexPattern::new("^/\\*", block_comment_handler),
        RegexPattern::new("^\\./\\S*", path_handler),
        RegexPattern::new("^\\.[0-9]+", number_handler),
        RegexPattern::new("^\\.", MK_DEFAULT_HANDLER!(TokenKind::Dot, ".")),
        RegexPattern::new("^(and|or)\\b", word_operator_handler),
        RegexPattern::new("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        RegexPattern::new("^[0-9]+(\\.[0-9]+)?", number_handler),
        RegexPattern::new("^\"", string_handler),
        RegexPattern::new("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        RegexPattern::new("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        RegexPattern::new("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        RegexPattern::new("^==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        RegexPattern::new("^=>", MK_DEFAULT_HANDLER!(TokenKind::Lambda, "=>")),
        RegexPattern::new("^->", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->")),
        RegexPattern::new("^<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        RegexPattern::new("^>", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        RegexPattern::new("^=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        RegexPattern::new("^-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        RegexPattern::new("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        RegexPattern::new("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        RegexPattern::new("^/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        RegexPattern::new("^%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
        RegexPattern::new("^\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
        RegexPattern::new("^:", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        RegexPattern::new("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        RegexPattern::new("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        RegexPattern::new("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        RegexPattern::new("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        RegexPattern::new("^\\[", MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[")),
        RegexPattern::new("^\\]", MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]")),
        RegexPattern::new("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        RegexPattern::new("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Consumes `n` bytes, advancing the line counter over any newlines.
    fn consume_counting_lines(&mut self, n: usize) {
        let consumed = &self.source[self.pos..self.pos + n];
        self.line += consumed.matches('\n').count() as u32;
        self.pos += n;
    }

    fn matched(&self, regex: &Regex) -> &'a str {
        regex.find(self.remainder()).map_or("", |m| m.as_str())
    }
}

fn skip_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex).len();
    lexer.advance_n(matched);
    Ok(())
}

fn newline_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    lexer.line += 1;
    lexer.advance_n(1);
    Ok(())
}

fn block_comment_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    // No nesting: the first `*/` closes. Unterminated comments run to the end.
    let body = &lexer.remainder()[2..];
    let length = match body.find("*/") {
        Some(close) => close + 4,
        None => body.len() + 2,
    };
    lexer.consume_counting_lines(length);
    Ok(())
}

fn path_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let line = lexer.line;
    lexer.push(MK_TOKEN!(TokenKind::Path, matched.to_string(), line));
    lexer.advance_n(matched.len());
    Ok(())
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Number
    };
    let line = lexer.line;
    lexer.push(MK_TOKEN!(kind, matched.to_string(), line));
    lexer.advance_n(matched.len());
    Ok(())
}

fn word_operator_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = lexer.matched(regex);
    let kind = if matched == "and" {
        TokenKind::And
    } else {
        TokenKind::Or
    };
    let line = lexer.line;
    lexer.push(MK_TOKEN!(kind, matched.to_string(), line));
    lexer.advance_n(matched.len());
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let value = lexer.matched(regex);
    let kind = RESERVED_LOOKUP
        .get(value)
        .copied()
        .unwrap_or(TokenKind::Identifier);
    let line = lexer.line;
    lexer.push(MK_TOKEN!(kind, value.to_string(), line));
    lexer.advance_n(value.len());
    Ok(())
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let start_line = lexer.line;
    let remainder = lexer.remainder();

    let mut chars = remainder.char_indices().skip(1);
    let mut closing = None;
    while let Some((index, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '"' => {
                closing = Some(index);
                break;
            }
            _ => {}
        }
    }

    let Some(closing) = closing else {
        return Err(Error::new(ErrorImpl::UnterminatedString, start_line));
    };

    let literal = &remainder[..=closing];
    lexer.push(MK_TOKEN!(TokenKind::String, literal.to_string(), start_line));
    lexer.consume_counting_lines(literal.len());
    Ok(())
}

/// Decodes a string literal lexeme (with or without its surrounding quotes).
///
/// `\n`, `\t`, `\\` and `\"` are translated; any other escaped character is
/// kept literally without the backslash.
pub fn unescape(raw: &str) -> String {
    let inner = raw
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(raw);

    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some(other) => result.push(other),
            None => result.push('\\'), // Keep the lone backslash
        }
    }

    result
}

/// Converts source text into tokens, terminated by a single EOF token.
///
/// On error no tokens are returned; the error carries the failing line.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let pattern = PATTERNS
            .iter()
            .find(|pattern| pattern.regex.is_match(remainder));

        match pattern {
            Some(pattern) => (pattern.handler)(&mut lex, &pattern.regex)?,
            None => {
                let token = lex.at().map(String::from).unwrap_or_default();
                return Err(Error::new(ErrorImpl::UnrecognisedToken { token }, lex.line));
            }
        }
    }

    let line = lex.line;
    lex.push(Token::eof(line));
    debug!("tokenized {} tokens over {} lines", lex.tokens.len(), line);
    Ok(lex.tokens)
}

/// Like [`tokenize`], but accepts raw bytes; invalid UTF-8 is a lex error.
pub fn tokenize_bytes(source: &[u8]) -> Result<Vec<Token>, LexError> {
    match std::str::from_utf8(source) {
        Ok(text) => tokenize(text),
        Err(error) => {
            let valid = &source[..error.valid_up_to()];
            let line = 1 + valid.iter().filter(|byte| **byte == b'\n').count() as u32;
            Err(Error::new(ErrorImpl::InvalidUtf8, line))
        }
    }
}
