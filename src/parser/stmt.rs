use log::trace;

use crate::{
    ast::{ast::Node, types::LiteralKind},
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::unescape, tokens::TokenKind},
};

use super::{
    expr::{is_lambda_ahead, parse_delimited, parse_expr, parse_lambda_expr},
    lookups::{BindingPower, STMT_LOOKUP},
    parser::Parser,
    types::{is_type_marker, parse_type_marker},
};

/// The keyword that stopped a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEnd {
    /// `end`, which the block consumed.
    End,
    Else,
    Catch,
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let kind = parser.current_token_kind();
    trace!("statement at line {}: {}", parser.line(), kind);

    match STMT_LOOKUP.get(&kind) {
        Some(handler) => handler(parser),
        None => Err(parser.unexpected("expected statement")),
    }
}

/// Parses statements up to `end` (consumed) or one of `stops` (left in
/// place). Stray semicolons between statements are skipped.
pub fn parse_block(parser: &mut Parser, stops: &[BlockEnd]) -> Result<(Node, BlockEnd), Error> {
    parser.descend()?;
    let line = parser.line();
    let mut statements = vec![];

    let terminator = loop {
        let terminator = match parser.current_token_kind() {
            TokenKind::Semicolon => {
                parser.advance();
                continue;
            }
            TokenKind::End => BlockEnd::End,
            TokenKind::Else => BlockEnd::Else,
            TokenKind::Catch => BlockEnd::Catch,
            TokenKind::EOF => return Err(parser.unexpected("expected 'end'")),
            _ => {
                statements.push(parse_stmt(parser)?);
                continue;
            }
        };

        if terminator == BlockEnd::End {
            parser.advance();
            break terminator;
        }
        if stops.contains(&terminator) {
            break terminator;
        }
        return Err(parser.unexpected("expected 'end'"));
    };

    parser.ascend();
    Ok((Node::block(statements, line), terminator))
}

/// A block that can only be closed by `end`.
pub fn parse_body(parser: &mut Parser) -> Result<Node, Error> {
    let (block, _) = parse_block(parser, &[])?;
    Ok(block)
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;
    let name = parser
        .expect_error(TokenKind::Identifier, "expected variable name after 'let'")?
        .lexeme();

    if parser.current_token_kind() == TokenKind::OpenParen {
        return parse_function_rest(parser, name, line);
    }

    parser.expect_error(TokenKind::Assignment, "expected '=' after variable name")?;

    let value = if is_lambda_ahead(parser) {
        parse_lambda_expr(parser)?
    } else {
        parse_expr(parser, BindingPower::Default)?
    };

    parser.expect_error(TokenKind::Semicolon, "expected ';' after variable declaration")?;

    Ok(Node::let_binding(name, value, line))
}

/// `func name(params) [: type | -> [type]] : body end`
pub fn parse_func_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;
    let name = parser
        .expect_error(TokenKind::Identifier, "expected function name")?
        .lexeme();

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Err(parser.unexpected("expected '(' after function name"));
    }

    parse_function_rest(parser, name, line)
}

/// Everything after the function name, starting at `(`.
fn parse_function_rest(parser: &mut Parser, name: &str, line: u32) -> Result<Node, Error> {
    let parameters = parse_delimited(parser, TokenKind::CloseParen, "parameter list", |p| {
        let param = p.expect_error(TokenKind::Identifier, "expected parameter name")?;
        let type_marker = if p.current_token_kind() == TokenKind::Colon {
            p.advance();
            Some(parse_type_marker(p)?)
        } else {
            None
        };
        Ok(Node::parameter(param.lexeme(), type_marker, param.line))
    })?;

    let return_type = match parser.current_token_kind() {
        TokenKind::Arrow => {
            parser.advance();
            if parser.current_token_kind() == TokenKind::Colon {
                None
            } else {
                Some(parse_type_marker(parser)?)
            }
        }
        TokenKind::Colon if is_type_marker(parser.peek(1)) => {
            parser.advance();
            Some(parse_type_marker(parser)?)
        }
        _ => None,
    };

    parser.expect_error(TokenKind::Colon, "expected ':' after function signature")?;
    let body = parse_body(parser)?;

    Ok(Node::function_def(name, parameters, return_type, body, line))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::Colon, "expected ':' after if condition")?;

    let (then_block, _) = parse_block(parser, &[BlockEnd::Else])?;

    // `else` may follow the stop directly or come after the then-block's `end`.
    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect_error(TokenKind::Colon, "expected ':' after else")?;
        Some(parse_body(parser)?)
    } else {
        None
    };

    Ok(Node::if_stmt(condition, then_block, else_block, line))
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::Colon, "expected ':' after while condition")?;
    let body = parse_body(parser)?;

    Ok(Node::while_stmt(condition, body, line))
}

/// A colon after the range end introduces a step only when a number, or
/// `-` and a number, follows it.
fn is_step_ahead(parser: &Parser) -> bool {
    let found = match parser.peek(0) {
        TokenKind::Number | TokenKind::Float => true,
        TokenKind::Dash => parser.peek(1).is_numeric_literal(),
        _ => false,
    };

    trace!("for-step lookahead at line {}: {}", parser.line(), found);
    found
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let variable = parser
        .expect_error(TokenKind::Identifier, "expected loop variable after 'for'")?
        .lexeme();
    parser.expect_error(TokenKind::In, "expected 'in' after loop variable")?;

    let start = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::Colon, "expected ':' after range start")?;
    let end = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::Colon, "expected ':' after range end")?;

    let step = if is_step_ahead(parser) {
        let step = parse_expr(parser, BindingPower::Default)?;
        parser.expect_error(TokenKind::Colon, "expected ':' after step")?;
        Some(step)
    } else {
        None
    };

    let body = parse_body(parser)?;

    Ok(Node::for_stmt(variable, start, end, step, body, line))
}

/// Every `case`/`default` body is a block closed by its own `end`. A final
/// `end` after the last clause closes the switch and may be left out.
pub fn parse_switch_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let subject = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::Colon, "expected ':' after switch expression")?;

    let mut clauses = vec![];
    loop {
        let clause_line = parser.line();
        match parser.current_token_kind() {
            TokenKind::Case => {
                parser.advance();
                let value = parse_expr(parser, BindingPower::Default)?;
                parser.expect_error(TokenKind::Colon, "expected ':' after case expression")?;
                clauses.push(Node::case(value, parse_body(parser)?, clause_line));
            }
            TokenKind::Default => {
                parser.advance();
                parser.expect_error(TokenKind::Colon, "expected ':' after default")?;
                clauses.push(Node::default_case(parse_body(parser)?, clause_line));
            }
            _ => break,
        }
    }

    if parser.current_token_kind() == TokenKind::End {
        parser.advance();
    }

    Ok(Node::switch(subject, clauses, line))
}

pub fn parse_try_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;
    parser.expect_error(TokenKind::Colon, "expected ':' after try")?;

    let (try_block, terminator) = parse_block(parser, &[BlockEnd::Catch])?;
    if terminator != BlockEnd::Catch {
        return Err(parser.unexpected("expected 'catch'"));
    }
    parser.advance();

    let variable = parser
        .expect_error(TokenKind::Identifier, "expected error variable name after 'catch'")?
        .lexeme();
    parser.expect_error(TokenKind::Colon, "expected ':' after catch variable")?;
    let catch_block = parse_body(parser)?;

    Ok(Node::try_catch(try_block, variable, catch_block, line))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let value = if parser.current_token_kind() == TokenKind::Semicolon {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    parser.expect_error(TokenKind::Semicolon, "expected ';' after return statement")?;

    Ok(Node::return_stmt(value, line))
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    if parser.current_token_kind() != TokenKind::OpenParen {
        return Err(parser.unexpected("expected '(' after print"));
    }
    let arguments = parse_delimited(parser, TokenKind::CloseParen, "print arguments", |p| {
        parse_expr(p, BindingPower::Default)
    })?;

    if arguments.is_empty() {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: String::from(")"),
                message: String::from("print requires at least one argument"),
            },
            line,
        ));
    }

    parser.expect_error(TokenKind::Semicolon, "expected ';' after print statement")?;

    Ok(Node::print(arguments, line))
}

/// `use <path|string|identifier> as alias [;]`
pub fn parse_use_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.advance().line;

    let token = parser.current_token();
    let source = match token.kind {
        TokenKind::Path => Node::literal(LiteralKind::Path, token.lexeme(), token.line),
        TokenKind::String => {
            Node::literal(LiteralKind::String, unescape(token.lexeme()), token.line)
        }
        TokenKind::Identifier => Node::identifier(token.lexeme(), token.line),
        _ => return Err(parser.unexpected("expected module path or name after 'use'")),
    };
    parser.advance();

    parser.expect_error(TokenKind::As, "expected 'as' after module path")?;
    let alias = parser
        .expect_error(TokenKind::Identifier, "expected identifier after 'as'")?
        .lexeme();

    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
    }

    Ok(Node::module_use(source, alias, line))
}

/// Number of names in the `a.b.c` chain starting at the cursor.
fn chain_depth_ahead(parser: &Parser) -> usize {
    let mut depth = 1;
    while parser.peek(2 * depth - 1) == TokenKind::Dot
        && parser.peek(2 * depth) == TokenKind::Identifier
    {
        depth += 1;
    }
    depth
}

/// Offset of the `]` matching the `[` at `open`, if the brackets close.
fn matching_bracket_ahead(parser: &Parser, open: usize) -> Option<usize> {
    let mut nesting = 0usize;
    let mut offset = open;
    loop {
        match parser.peek(offset) {
            TokenKind::OpenBracket => nesting += 1,
            TokenKind::CloseBracket => {
                nesting -= 1;
                if nesting == 0 {
                    return Some(offset);
                }
            }
            TokenKind::EOF => return None,
            _ => {}
        }
        offset += 1;
    }
}

/// A statement led by a name: chain assignment, bracket assignment, or an
/// expression statement ending in `;`.
pub fn parse_identifier_stmt(parser: &mut Parser) -> Result<Node, Error> {
    let depth = chain_depth_ahead(parser);
    let after_chain = parser.peek(2 * depth - 1);

    if after_chain == TokenKind::Assignment {
        trace!("assignment chain of depth {} at line {}", depth, parser.line());
        return parse_chain_assignment(parser, depth);
    }

    if depth == 1 && after_chain == TokenKind::OpenBracket {
        let assigns = matching_bracket_ahead(parser, 1)
            .is_some_and(|close| parser.peek(close + 1) == TokenKind::Assignment);
        if assigns {
            return parse_index_assignment(parser);
        }
    }

    let line = parser.line();
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::Semicolon, "expected ';' after expression")?;

    Ok(Node::expression_stmt(expression, line))
}

/// `name = v;` or `base.p1...pn = v;`, with the cursor on the first name and
/// the chain already measured.
fn parse_chain_assignment(parser: &mut Parser, depth: usize) -> Result<Node, Error> {
    let line = parser.line();

    if depth == 1 {
        let name = parser.advance().lexeme();
        parser.advance();
        let value = parse_expr(parser, BindingPower::Default)?;
        parser.expect_error(TokenKind::Semicolon, "expected ';' after assignment")?;
        return Ok(Node::assign(name, value, line));
    }

    if let Some(max) = parser.config().max_chain_depth {
        if depth > max {
            return Err(Error::new(ErrorImpl::UnsupportedChainDepth { depth, max }, line));
        }
    }

    let base = parser.advance();
    let base = Node::identifier(base.lexeme(), base.line);
    let mut path = Vec::with_capacity(depth - 1);
    for _ in 1..depth {
        parser.advance();
        let name = parser.advance();
        path.push(Node::property_name(name.lexeme(), name.line));
    }
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::Semicolon, "expected ';' after assignment")?;

    Ok(Node::property_assign(base, path, value, line))
}

/// `name[key] = v;`
fn parse_index_assignment(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.line();
    let base = parser.advance();
    let base = Node::identifier(base.lexeme(), base.line);

    parser.advance();
    let key = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::CloseBracket, "expected ']'")?;
    parser.expect_error(TokenKind::Assignment, "expected '='")?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::Semicolon, "expected ';' after assignment")?;

    Ok(Node::index_assign(base, key, value, line))
}
