use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::ast::Node, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Logical,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Primary,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Node, Error>;
pub type LEDHandler = fn(&mut Parser, Node, BindingPower) -> Result<Node, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

lazy_static! {
    pub static ref BP_LOOKUP: BPLookup = {
        let mut map = HashMap::new();
        // Logical
        map.insert(TokenKind::And, BindingPower::Logical);
        map.insert(TokenKind::Or, BindingPower::Logical);

        // Equality
        map.insert(TokenKind::Equals, BindingPower::Equality);
        map.insert(TokenKind::NotEquals, BindingPower::Equality);

        // Relational
        map.insert(TokenKind::Less, BindingPower::Relational);
        map.insert(TokenKind::LessEquals, BindingPower::Relational);
        map.insert(TokenKind::Greater, BindingPower::Relational);
        map.insert(TokenKind::GreaterEquals, BindingPower::Relational);

        // Additive and multiplicative
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Dash, BindingPower::Additive);
        map.insert(TokenKind::Star, BindingPower::Multiplicative);
        map.insert(TokenKind::Slash, BindingPower::Multiplicative);
        map.insert(TokenKind::Percent, BindingPower::Multiplicative);
        map
    };

    pub static ref LED_LOOKUP: LEDLookup = {
        let mut map: LEDLookup = HashMap::new();
        for kind in BP_LOOKUP.keys() {
            map.insert(*kind, parse_binary_expr);
        }
        map
    };

    pub static ref NUD_LOOKUP: NUDLookup = {
        let mut map: NUDLookup = HashMap::new();
        // Literals and symbols
        map.insert(TokenKind::Number, parse_primary_expr);
        map.insert(TokenKind::Float, parse_primary_expr);
        map.insert(TokenKind::String, parse_primary_expr);
        map.insert(TokenKind::True, parse_primary_expr);
        map.insert(TokenKind::False, parse_primary_expr);
        map.insert(TokenKind::Identifier, parse_primary_expr);
        map.insert(TokenKind::OpenParen, parse_primary_expr);
        map.insert(TokenKind::OpenBracket, parse_primary_expr);
        map.insert(TokenKind::OpenCurly, parse_primary_expr);
        map.insert(TokenKind::Dash, parse_prefix_expr);
        map
    };

    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::Let, parse_let_stmt);
        map.insert(TokenKind::Func, parse_func_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::While, parse_while_stmt);
        map.insert(TokenKind::For, parse_for_stmt);
        map.insert(TokenKind::Switch, parse_switch_stmt);
        map.insert(TokenKind::Try, parse_try_stmt);
        map.insert(TokenKind::Return, parse_return_stmt);
        map.insert(TokenKind::Print, parse_print_stmt);
        map.insert(TokenKind::Use, parse_use_stmt);
        map.insert(TokenKind::Identifier, parse_identifier_stmt);
        map
    };
}
