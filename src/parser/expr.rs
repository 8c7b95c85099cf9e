use log::trace;

use crate::{
    ast::{
        ast::{Node, NodeKind},
        types::{BinaryOp, LiteralKind},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::unescape,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{BindingPower, BP_LOOKUP, LED_LOOKUP, NUD_LOOKUP},
    parser::{BracketAccess, Parser},
};

/// Precedence climbing: parses an operand, then folds in every operator
/// binding tighter than `bp`. Equal binding power associates left.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Node, Error> {
    parser.descend()?;

    let nud = match NUD_LOOKUP.get(&parser.current_token_kind()) {
        Some(nud) => *nud,
        None => return Err(parser.unexpected("expected expression")),
    };
    let mut left = nud(parser)?;

    while let Some(&next_bp) = BP_LOOKUP.get(&parser.current_token_kind()) {
        if next_bp <= bp {
            break;
        }
        let led = match LED_LOOKUP.get(&parser.current_token_kind()) {
            Some(led) => *led,
            None => break,
        };
        left = led(parser, left, next_bp)?;
    }

    parser.ascend();
    Ok(left)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Node, bp: BindingPower) -> Result<Node, Error> {
    let operator = parser.advance();
    let op = BinaryOp::from_token_kind(operator.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator.lexeme().to_string(),
            },
            operator.line,
        )
    })?;

    let right = parse_expr(parser, bp)?;

    Ok(Node::binary(op, left, right, operator.line))
}

/// `-` with no left operand. Before a number it folds into the literal,
/// otherwise it negates the following unary operand.
pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Node, Error> {
    let minus = parser.advance();
    let next = parser.current_token();

    if next.kind.is_numeric_literal() {
        parser.advance();
        let literal = numeric_literal(next, format!("-{}", next.lexeme()))?;
        return parse_postfix(parser, literal);
    }

    let operand = parse_expr(parser, BindingPower::Unary)?;
    Ok(Node::unary_minus(operand, minus.line))
}

/// Literals, names, groupings and collection literals, followed by their
/// postfix extensions.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<Node, Error> {
    let token = parser.current_token();

    let base = match token.kind {
        TokenKind::Number | TokenKind::Float => {
            parser.advance();
            numeric_literal(token, token.lexeme().to_string())?
        }
        TokenKind::String => {
            parser.advance();
            Node::literal(LiteralKind::String, unescape(token.lexeme()), token.line)
        }
        TokenKind::True => {
            parser.advance();
            Node::literal(LiteralKind::Bool, "true", token.line)
        }
        TokenKind::False => {
            parser.advance();
            Node::literal(LiteralKind::Bool, "false", token.line)
        }
        TokenKind::Identifier => {
            parser.advance();
            Node::identifier(token.lexeme(), token.line)
        }
        TokenKind::OpenParen => parse_grouping_expr(parser)?,
        TokenKind::OpenBracket => parse_array_literal(parser)?,
        TokenKind::OpenCurly => parse_object_literal(parser)?,
        _ => return Err(parser.unexpected("expected expression")),
    };

    parse_postfix(parser, base)
}

fn numeric_literal(token: &Token, text: String) -> Result<Node, Error> {
    let (kind, valid) = match token.kind {
        TokenKind::Float => (LiteralKind::Float, text.parse::<f64>().is_ok()),
        _ => (LiteralKind::Number, text.parse::<i64>().is_ok()),
    };

    if !valid {
        return Err(Error::new(ErrorImpl::NumberParseError { token: text }, token.line));
    }

    Ok(Node::literal(kind, text, token.line))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Node, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect_error(TokenKind::CloseParen, "expected ')'")?;

    Ok(expr)
}

/// Extends a primary in fixed order: a dot chain, one bracket access,
/// then one call.
fn parse_postfix(parser: &mut Parser, base: Node) -> Result<Node, Error> {
    let mut node = base;
    let mut chained = false;

    while parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        let member = parser.expect_error(TokenKind::Identifier, "expected identifier after '.'")?;
        node = Node::member_access(node, member.lexeme(), member.line);
        chained = true;
    }

    if parser.current_token_kind() == TokenKind::OpenBracket {
        let line = parser.advance().line;
        let key = parse_expr(parser, BindingPower::Default)?;
        parser.expect_error(TokenKind::CloseBracket, "expected ']'")?;

        let keyed_base = chained || node.kind == NodeKind::Identifier;
        node = match parser.config().bracket_access {
            BracketAccess::Keyed if keyed_base => Node::property_access(node, key, line),
            _ => Node::index_access(node, key, line),
        };
    }

    if parser.current_token_kind() == TokenKind::OpenParen {
        let line = parser.line();
        let arguments = parse_delimited(parser, TokenKind::CloseParen, "argument list", |p| {
            parse_expr(p, BindingPower::Default)
        })?;
        node = Node::call(node, arguments, line);
    }

    Ok(node)
}

/// Parses `open item (, item)* close` with the cursor on `open`.
/// A comma directly before `close` is rejected.
pub fn parse_delimited(
    parser: &mut Parser,
    close: TokenKind,
    context: &str,
    mut item: impl FnMut(&mut Parser) -> Result<Node, Error>,
) -> Result<Vec<Node>, Error> {
    parser.advance();
    let mut items = vec![];

    while parser.current_token_kind() != close {
        items.push(item(parser)?);

        match parser.current_token_kind() {
            TokenKind::Comma => {
                let comma_line = parser.advance().line;
                if parser.current_token_kind() == close {
                    return Err(Error::new(
                        ErrorImpl::TrailingComma {
                            context: context.to_string(),
                        },
                        comma_line,
                    ));
                }
            }
            kind if kind == close => {}
            _ => {
                return Err(parser.unexpected(&format!(
                    "expected ',' or '{}' in {}",
                    closing_symbol(close),
                    context
                )))
            }
        }
    }

    parser.advance();
    Ok(items)
}

fn closing_symbol(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::CloseBracket => "]",
        TokenKind::CloseCurly => "}",
        _ => ")",
    }
}

pub fn parse_array_literal(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.line();
    let elements = parse_delimited(parser, TokenKind::CloseBracket, "array literal", |p| {
        parse_expr(p, BindingPower::Default)
    })?;

    Ok(Node::array_literal(elements, line))
}

pub fn parse_object_literal(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.line();
    let fields = parse_delimited(parser, TokenKind::CloseCurly, "object literal", |p| {
        let name =
            p.expect_error(TokenKind::Identifier, "expected property name in object literal")?;
        p.expect_error(TokenKind::Colon, "expected ':' after property name")?;
        let value = parse_expr(p, BindingPower::Default)?;
        Ok(Node::object_field(name.lexeme(), value, name.line))
    })?;

    Ok(Node::object_literal(fields, line))
}

/// True when the cursor sits on `x =>` or `(a, b, ...) =>`.
/// Only peeks; the cursor is left where it was.
pub fn is_lambda_ahead(parser: &Parser) -> bool {
    let found = match parser.peek(0) {
        TokenKind::Identifier => parser.peek(1) == TokenKind::Lambda,
        TokenKind::OpenParen => {
            let mut offset = 1;
            if parser.peek(offset) != TokenKind::CloseParen {
                loop {
                    if parser.peek(offset) != TokenKind::Identifier {
                        return false;
                    }
                    offset += 1;
                    match parser.peek(offset) {
                        TokenKind::Comma => offset += 1,
                        TokenKind::CloseParen => break,
                        _ => return false,
                    }
                }
            }
            parser.peek(offset + 1) == TokenKind::Lambda
        }
        _ => false,
    };

    trace!("lambda lookahead at line {}: {}", parser.line(), found);
    found
}

pub fn parse_lambda_expr(parser: &mut Parser) -> Result<Node, Error> {
    let line = parser.line();

    let parameters = if parser.current_token_kind() == TokenKind::Identifier {
        let name = parser.advance();
        vec![Node::parameter(name.lexeme(), None, name.line)]
    } else {
        parse_delimited(parser, TokenKind::CloseParen, "parameter list", |p| {
            let name = p.expect_error(TokenKind::Identifier, "expected parameter name")?;
            Ok(Node::parameter(name.lexeme(), None, name.line))
        })?
    };

    parser.expect_error(TokenKind::Lambda, "expected '=>'")?;
    let body = parse_expr(parser, BindingPower::Default)?;

    Ok(Node::lambda(parameters, body, line))
}
