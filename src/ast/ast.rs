use std::fmt::Display;

use super::types::{BinaryOp, ForKind, LiteralKind, TypeMarker};

/// Node Kinds
///
/// Every grammar shape the parser can produce. Payloads that change how a
/// node is read (operator, literal form, loop form, type annotations) live
/// on the kind; names and lexemes live in `Node::text`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Block,
    Let,
    Assign,
    FunctionDef { return_type: Option<TypeMarker> },
    Parameter { type_marker: Option<TypeMarker> },
    Lambda,
    If,
    While,
    For(ForKind),
    Switch,
    Case,
    Default,
    Try,
    Return,
    Print,
    ModuleUse,
    ExpressionStmt,

    BinaryExpr(BinaryOp),
    UnaryMinus,
    Literal(LiteralKind),
    Identifier,
    Call,
    MemberAccess,
    IndexAccess,
    PropertyAccess,
    PropertyAssign,
    PropertyName,
    IndexAssign,
    ArrayLiteral,
    ObjectLiteral,
    ObjectField,
}

impl NodeKind {
    /// Kinds rendered as their bare text.
    fn is_atom(&self) -> bool {
        matches!(
            self,
            NodeKind::Identifier | NodeKind::PropertyName | NodeKind::Literal(_)
        )
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::BinaryExpr(op) => write!(f, "{}", op),
            NodeKind::UnaryMinus => write!(f, "neg"),
            NodeKind::For(ForKind::Range) => write!(f, "For"),
            NodeKind::For(ForKind::Step) => write!(f, "ForStep"),
            NodeKind::FunctionDef {
                return_type: Some(marker),
            } => write!(f, "FunctionDef->{}", marker),
            NodeKind::FunctionDef { return_type: None } => write!(f, "FunctionDef"),
            NodeKind::Parameter {
                type_marker: Some(marker),
            } => write!(f, "Parameter:{}", marker),
            NodeKind::Parameter { type_marker: None } => write!(f, "Parameter"),
            NodeKind::Literal(kind) => write!(f, "{:?}", kind),
            other => write!(f, "{:?}", other),
        }
    }
}

/// AST Node
///
/// A node exclusively owns its children. Moving a node into a parent with
/// [`Node::attach`] consumes it, so a child can never be reached from two
/// places.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub text: Option<String>,
    pub children: Vec<Node>,
    pub line: u32,
}

impl Node {
    /// Creates a node with no children.
    pub fn new_leaf(kind: NodeKind, text: Option<String>, line: u32) -> Self {
        Node {
            kind,
            text,
            children: Vec::new(),
            line,
        }
    }

    /// Shorthand for a leaf carrying text.
    pub fn leaf(kind: NodeKind, text: impl Into<String>, line: u32) -> Self {
        Node::new_leaf(kind, Some(text.into()), line)
    }

    /// Moves `child` to the end of this node's children.
    pub fn attach(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Builder form of [`Node::attach`].
    pub fn with_child(mut self, child: Node) -> Self {
        self.attach(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Releases the whole subtree and clears the text.
    ///
    /// Works on partially built trees and is a no-op on an emptied node.
    /// Walks with an explicit stack so depth does not grow the call stack.
    pub fn free_tree(&mut self) {
        self.text = None;
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }

    /// Number of nodes in this subtree, including itself.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        if !self.children.is_empty() {
            self.free_tree();
        }
    }
}

enum Render<'a> {
    Node(&'a Node),
    Space,
    Close,
}

/// Renders the tree as an S-expression, e.g. `(+ 1 (* 2 3))`.
///
/// Walks with an explicit stack, like [`Node::free_tree`], so long operator
/// chains print without growing the call stack.
impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Render::Node(self)];

        while let Some(step) = pending.pop() {
            let node = match step {
                Render::Space => {
                    write!(f, " ")?;
                    continue;
                }
                Render::Close => {
                    write!(f, ")")?;
                    continue;
                }
                Render::Node(node) => node,
            };

            if node.kind.is_atom() {
                match (&node.kind, &node.text) {
                    (NodeKind::Literal(LiteralKind::String), Some(text)) => {
                        write!(f, "{:?}", text)?
                    }
                    _ => write!(f, "{}", node.text())?,
                }
                continue;
            }

            write!(f, "({}", node.kind)?;
            let show_text = !matches!(node.kind, NodeKind::BinaryExpr(_) | NodeKind::UnaryMinus);
            if let (true, Some(text)) = (show_text, &node.text) {
                write!(f, " {}", text)?;
            }

            pending.push(Render::Close);
            for child in node.children.iter().rev() {
                pending.push(Render::Node(child));
                pending.push(Render::Space);
            }
        }

        Ok(())
    }
}
