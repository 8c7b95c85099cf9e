//! Error types and error handling for the front end.
//!
//! This module defines the single error type shared by the lexer and the
//! parser. It includes:
//!
//! - The error structure with its source line
//! - Specific error variants for the lexing and parsing phases
//! - Error names and suggestions used by the diagnostic printer

pub mod errors;

#[cfg(test)]
mod tests;
