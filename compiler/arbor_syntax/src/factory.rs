//! Green node constructors, one per kind.
//!
//! Children are built first and passed in, so trees grow bottom-up. List
//! slots take anything implementing [`IntoGreenList`]: a finished list node,
//! a `Vec` of elements, or a [`GreenListBuilder`](arbor_tree::GreenListBuilder).
//!
//! Each constructor checks its arguments against the kind's shape in debug
//! builds (see [`arbor_tree::GreenNode::new`]).

use arbor_tree::{IntoGreenList, Payload};

use crate::{GreenNode, SyntaxKind};

fn leaf(kind: SyntaxKind, value: Payload) -> GreenNode {
    GreenNode::new(kind, Vec::new(), vec![value])
}

fn node(kind: SyntaxKind, slots: Vec<Option<GreenNode>>) -> GreenNode {
    GreenNode::new(kind, slots, Vec::new())
}

pub fn list(elements: impl IntoIterator<Item = GreenNode>) -> GreenNode {
    GreenNode::list(elements)
}

pub fn identifier(name: &str) -> GreenNode {
    leaf(SyntaxKind::Identifier, Payload::text(name))
}

pub fn number_literal(value: i64) -> GreenNode {
    leaf(SyntaxKind::NumberLiteral, Payload::Int(value))
}

pub fn float_literal(value: f64) -> GreenNode {
    leaf(SyntaxKind::FloatLiteral, Payload::float(value))
}

pub fn string_literal(value: &str) -> GreenNode {
    leaf(SyntaxKind::StringLiteral, Payload::text(value))
}

pub fn bool_literal(value: bool) -> GreenNode {
    leaf(SyntaxKind::BoolLiteral, Payload::Bool(value))
}

/// Binary expression of `kind`, one of the four arithmetic kinds.
pub fn binary(kind: SyntaxKind, left: GreenNode, right: GreenNode) -> GreenNode {
    debug_assert!(kind.is_binary(), "{kind:?} is not a binary operator");
    node(kind, vec![Some(left), Some(right)])
}

pub fn add(left: GreenNode, right: GreenNode) -> GreenNode {
    binary(SyntaxKind::Add, left, right)
}

pub fn subtract(left: GreenNode, right: GreenNode) -> GreenNode {
    binary(SyntaxKind::Subtract, left, right)
}

pub fn multiply(left: GreenNode, right: GreenNode) -> GreenNode {
    binary(SyntaxKind::Multiply, left, right)
}

pub fn divide(left: GreenNode, right: GreenNode) -> GreenNode {
    binary(SyntaxKind::Divide, left, right)
}

/// Unary expression of `kind`, `Negate` or `Not`.
pub fn unary(kind: SyntaxKind, operand: GreenNode) -> GreenNode {
    debug_assert!(kind.is_unary(), "{kind:?} is not a unary operator");
    node(kind, vec![Some(operand)])
}

pub fn negate(operand: GreenNode) -> GreenNode {
    unary(SyntaxKind::Negate, operand)
}

pub fn not(operand: GreenNode) -> GreenNode {
    unary(SyntaxKind::Not, operand)
}

pub fn parenthesized(expr: GreenNode) -> GreenNode {
    node(SyntaxKind::Parenthesized, vec![Some(expr)])
}

pub fn call(callee: GreenNode, arguments: impl IntoGreenList<SyntaxKind>) -> GreenNode {
    node(
        SyntaxKind::Call,
        vec![Some(callee), Some(arguments.into_green_list())],
    )
}

pub fn assign(target: GreenNode, value: GreenNode) -> GreenNode {
    node(SyntaxKind::Assign, vec![Some(target), Some(value)])
}

pub fn expression_statement(expr: GreenNode) -> GreenNode {
    node(SyntaxKind::ExpressionStatement, vec![Some(expr)])
}

pub fn return_statement(value: Option<GreenNode>) -> GreenNode {
    node(SyntaxKind::Return, vec![value])
}

pub fn block(statements: impl IntoGreenList<SyntaxKind>) -> GreenNode {
    node(SyntaxKind::Block, vec![Some(statements.into_green_list())])
}

pub fn if_statement(
    condition: GreenNode,
    then_branch: GreenNode,
    else_branch: Option<GreenNode>,
) -> GreenNode {
    node(
        SyntaxKind::If,
        vec![Some(condition), Some(then_branch), else_branch],
    )
}

pub fn source_file(statements: impl IntoGreenList<SyntaxKind>) -> GreenNode {
    node(
        SyntaxKind::SourceFile,
        vec![Some(statements.into_green_list())],
    )
}
