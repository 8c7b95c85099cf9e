/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The owned node type, its kinds and the tree primitives
/// - expressions: Constructors for expression nodes
/// - statements: Constructors for statement nodes
/// - types: Payload enums (operators, literal forms, type markers)
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
