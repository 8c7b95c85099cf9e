//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into the root `Block` node. Expressions are parsed by precedence
//! climbing over a binding power table; statements by recursive descent
//! dispatched on the leading token. It handles:
//!
//! - Statement parsing (bindings, functions, control flow, imports)
//! - Expression parsing (binary ops, unary minus, calls, member and bracket access)
//! - Array, object and lambda literals
//! - Bounded lookahead for assignment chains, lambdas and for-loop steps
//!
//! Parsing stops at the first error; no partial tree is returned.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
