use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("func", TokenKind::Func);
        map.insert("let", TokenKind::Let);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("end", TokenKind::End);
        map.insert("return", TokenKind::Return);
        map.insert("switch", TokenKind::Switch);
        map.insert("case", TokenKind::Case);
        map.insert("default", TokenKind::Default);
        map.insert("try", TokenKind::Try);
        map.insert("catch", TokenKind::Catch);
        map.insert("print", TokenKind::Print);
        map.insert("in", TokenKind::In);
        map.insert("use", TokenKind::Use);
        map.insert("as", TokenKind::As);
        map.insert("int", TokenKind::IntType);
        map.insert("string", TokenKind::StringType);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("True", TokenKind::True);
        map.insert("False", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Float,
    String,
    Identifier,
    Path,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Dot,
    Semicolon,
    Colon,
    Question,
    Comma,
    Arrow,  // ->
    Lambda, // =>

    Plus,
    Dash,
    Slash,
    Star,
    Percent,

    // Reserved
    Func,
    Let,
    If,
    Else,
    For,
    While,
    End,
    Return,
    Switch,
    Case,
    Default,
    Try,
    Catch,
    Print,
    In,
    Use,
    As,
    IntType,
    StringType,
    True,
    False,
}

impl TokenKind {
    /// Operators that may join two operands in an expression.
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Or
                | TokenKind::And
                | TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
                | TokenKind::Plus
                | TokenKind::Dash
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
        )
    }

    pub fn is_numeric_literal(&self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Float)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified lexeme. `text` is the exact source slice, `None` only for
/// the end-of-input marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Option<String>,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\ntext: {}}}", self.kind, self.lexeme())
    }
}

impl Token {
    pub const fn eof(line: u32) -> Token {
        Token {
            kind: TokenKind::EOF,
            text: None,
            line,
        }
    }

    /// The lexeme, or `"end of input"` for the terminator. Used in messages.
    pub fn lexeme(&self) -> &str {
        self.text.as_deref().unwrap_or("end of input")
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Number,
            TokenKind::Float,
            TokenKind::Path,
        ]) {
            println!("{} ({}) @{}", self.kind, self.lexeme(), self.line);
        } else {
            println!("{} () @{}", self.kind, self.line);
        }
    }
}
