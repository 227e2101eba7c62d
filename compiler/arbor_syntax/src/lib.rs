//! Arbor Syntax - a small expression language over `arbor_tree`
//!
//! This crate is one concrete schema for the tree engine, in the form a
//! schema generator would emit:
//! - [`SyntaxKind`] and the static shape table
//! - [`factory`]: green constructors, one per kind
//! - [`nodes`]: typed red nodes with accessors, `update`, and `with_*`
//! - [`visit`]: visitors in four arities, the walker, and the rewriter
//!
//! # Example
//!
//! ```text
//! let green = factory::assign(
//!     factory::identifier("x"),
//!     factory::add(factory::number_literal(1), factory::number_literal(2)),
//! );
//! let root = AssignExpr::new_root(green).unwrap();
//! assert_eq!(root.target().name(), "x");
//! ```

pub mod factory;
mod kind;
pub mod nodes;
pub mod visit;

pub use arbor_tree::{init_tracing, AstNode, NodeList};
pub use kind::SyntaxKind;
pub use nodes::{
    AssignExpr, BinaryExpr, Block, BoolLiteral, CallExpr, Expr, ExprStmt, FloatLiteral,
    Identifier, IfStmt, NumberLiteral, ParenExpr, ReturnStmt, SourceFile, Stmt, StringLiteral,
    UnaryExpr,
};
pub use visit::{Rewriter, Visitor, Visitor1, Visitor2, Visitor3, Walker};

/// Canonical node of this schema.
pub type GreenNode = arbor_tree::GreenNode<SyntaxKind>;

/// Positioned node of this schema.
pub type SyntaxNode = arbor_tree::SyntaxNode<SyntaxKind>;

/// Green node cache for this schema.
pub type GreenCache = arbor_tree::GreenCache<SyntaxKind>;
