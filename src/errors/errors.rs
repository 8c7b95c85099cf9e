use std::fmt::Display;

use thiserror::Error;

/// The stage of the front end that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPhase {
    Lex,
    Parse,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("line {line}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    line: u32,
}

/// Errors produced by `tokenize`. Always in the [`ErrorPhase::Lex`] phase.
pub type LexError = Error;
/// Errors produced by `parse`. Always in the [`ErrorPhase::Parse`] phase.
pub type ParseError = Error;

impl Error {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_line(&self) -> u32 {
        self.line
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn phase(&self) -> ErrorPhase {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::InvalidUtf8 => ErrorPhase::Lex,
            _ => ErrorPhase::Parse,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InvalidUtf8 => "InvalidUtf8",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::TrailingComma { .. } => "TrailingComma",
            ErrorImpl::UnsupportedChainDepth { .. } => "UnsupportedChainDepth",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::InvalidUtf8 => {
                ErrorTip::Suggestion(String::from("Source must be valid UTF-8"))
            }
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::TrailingComma { context } => {
                ErrorTip::Suggestion(format!("Remove the trailing `,` in the {}", context))
            }
            ErrorImpl::UnsupportedChainDepth { depth, max } => ErrorTip::Suggestion(format!(
                "Property assignment is {} levels deep, at most {} are supported",
                depth, max
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Constructs may be nested at most {} levels deep",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("source is not valid UTF-8")]
    InvalidUtf8,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("trailing comma in {context}")]
    TrailingComma { context: String },
    #[error("property assignment depth {depth} exceeds the supported maximum of {max}")]
    UnsupportedChainDepth { depth: usize, max: usize },
    #[error("nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: usize },
}
