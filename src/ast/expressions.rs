//! Constructors for expression nodes.
//!
//! Each constructor consumes the child nodes it is given, so a subexpression
//! ends up owned by exactly one parent.

use super::{
    ast::{Node, NodeKind},
    types::{BinaryOp, LiteralKind, TypeMarker},
};

impl Node {
    // LITERALS

    pub fn literal(kind: LiteralKind, text: impl Into<String>, line: u32) -> Node {
        Node::leaf(NodeKind::Literal(kind), text, line)
    }

    pub fn identifier(name: impl Into<String>, line: u32) -> Node {
        Node::leaf(NodeKind::Identifier, name, line)
    }

    /// `[e1, e2, ...]`
    pub fn array_literal(elements: Vec<Node>, line: u32) -> Node {
        Node::new_leaf(NodeKind::ArrayLiteral, None, line).with_children(elements)
    }

    /// `{name: value, ...}`; `fields` are `ObjectField` nodes.
    pub fn object_literal(fields: Vec<Node>, line: u32) -> Node {
        Node::new_leaf(NodeKind::ObjectLiteral, None, line).with_children(fields)
    }

    pub fn object_field(name: impl Into<String>, value: Node, line: u32) -> Node {
        Node::leaf(NodeKind::ObjectField, name, line).with_child(value)
    }

    // OPERATORS

    pub fn binary(op: BinaryOp, left: Node, right: Node, line: u32) -> Node {
        Node::leaf(NodeKind::BinaryExpr(op), op.symbol(), line)
            .with_child(left)
            .with_child(right)
    }

    pub fn unary_minus(operand: Node, line: u32) -> Node {
        Node::leaf(NodeKind::UnaryMinus, "-", line).with_child(operand)
    }

    // POSTFIX

    pub fn call(callee: Node, arguments: Vec<Node>, line: u32) -> Node {
        Node::new_leaf(NodeKind::Call, None, line)
            .with_child(callee)
            .with_children(arguments)
    }

    /// `object.member`
    pub fn member_access(object: Node, member: impl Into<String>, line: u32) -> Node {
        Node::leaf(NodeKind::MemberAccess, member, line).with_child(object)
    }

    /// `base[index]` resolved as positional indexing.
    pub fn index_access(base: Node, index: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::IndexAccess, None, line)
            .with_child(base)
            .with_child(index)
    }

    /// `base[key]` resolved as keyed access on an object.
    pub fn property_access(base: Node, key: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::PropertyAccess, None, line)
            .with_child(base)
            .with_child(key)
    }

    // FUNCTIONS

    pub fn parameter(name: impl Into<String>, type_marker: Option<TypeMarker>, line: u32) -> Node {
        Node::leaf(NodeKind::Parameter { type_marker }, name, line)
    }

    /// `params => body`; `parameters` are `Parameter` nodes.
    pub fn lambda(parameters: Vec<Node>, body: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::Lambda, None, line)
            .with_children(parameters)
            .with_child(body)
    }
}
