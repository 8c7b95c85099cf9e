//! Constructors for statement nodes.

use super::{
    ast::{Node, NodeKind},
    types::{ForKind, TypeMarker},
};

impl Node {
    pub fn block(statements: Vec<Node>, line: u32) -> Node {
        Node::new_leaf(NodeKind::Block, None, line).with_children(statements)
    }

    pub fn let_binding(name: impl Into<String>, value: Node, line: u32) -> Node {
        Node::leaf(NodeKind::Let, name, line).with_child(value)
    }

    pub fn assign(name: impl Into<String>, value: Node, line: u32) -> Node {
        Node::leaf(NodeKind::Assign, name, line).with_child(value)
    }

    /// `base.p1.p2... = value`, flattened into
    /// `[base, PropertyName(p1), PropertyName(p2), ..., value]`.
    pub fn property_assign(base: Node, path: Vec<Node>, value: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::PropertyAssign, None, line)
            .with_child(base)
            .with_children(path)
            .with_child(value)
    }

    pub fn property_name(name: impl Into<String>, line: u32) -> Node {
        Node::leaf(NodeKind::PropertyName, name, line)
    }

    /// `base[key] = value`
    pub fn index_assign(base: Node, key: Node, value: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::IndexAssign, None, line)
            .with_child(base)
            .with_child(key)
            .with_child(value)
    }

    pub fn function_def(
        name: impl Into<String>,
        parameters: Vec<Node>,
        return_type: Option<TypeMarker>,
        body: Node,
        line: u32,
    ) -> Node {
        Node::leaf(NodeKind::FunctionDef { return_type }, name, line)
            .with_children(parameters)
            .with_child(body)
    }

    pub fn if_stmt(condition: Node, then_block: Node, else_block: Option<Node>, line: u32) -> Node {
        Node::new_leaf(NodeKind::If, None, line)
            .with_child(condition)
            .with_child(then_block)
            .with_children(else_block)
    }

    pub fn while_stmt(condition: Node, body: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::While, None, line)
            .with_child(condition)
            .with_child(body)
    }

    /// The loop form follows from whether a step is present.
    pub fn for_stmt(
        variable: impl Into<String>,
        start: Node,
        end: Node,
        step: Option<Node>,
        body: Node,
        line: u32,
    ) -> Node {
        let kind = match step {
            Some(_) => ForKind::Step,
            None => ForKind::Range,
        };
        Node::leaf(NodeKind::For(kind), variable, line)
            .with_child(start)
            .with_child(end)
            .with_children(step)
            .with_child(body)
    }

    pub fn switch(subject: Node, clauses: Vec<Node>, line: u32) -> Node {
        Node::new_leaf(NodeKind::Switch, None, line)
            .with_child(subject)
            .with_children(clauses)
    }

    pub fn case(value: Node, body: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::Case, None, line)
            .with_child(value)
            .with_child(body)
    }

    pub fn default_case(body: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::Default, None, line).with_child(body)
    }

    pub fn try_catch(
        try_block: Node,
        catch_variable: impl Into<String>,
        catch_block: Node,
        line: u32,
    ) -> Node {
        Node::leaf(NodeKind::Try, catch_variable, line)
            .with_child(try_block)
            .with_child(catch_block)
    }

    pub fn return_stmt(value: Option<Node>, line: u32) -> Node {
        Node::new_leaf(NodeKind::Return, None, line).with_children(value)
    }

    pub fn print(arguments: Vec<Node>, line: u32) -> Node {
        Node::new_leaf(NodeKind::Print, None, line).with_children(arguments)
    }

    pub fn module_use(source: Node, alias: impl Into<String>, line: u32) -> Node {
        Node::leaf(NodeKind::ModuleUse, alias, line).with_child(source)
    }

    pub fn expression_stmt(expression: Node, line: u32) -> Node {
        Node::new_leaf(NodeKind::ExpressionStmt, None, line).with_child(expression)
    }
}
