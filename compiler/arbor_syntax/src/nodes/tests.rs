#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use super::*;
use crate::factory as f;
use crate::{NodeList, SyntaxNode};

fn call_f_1_2() -> CallExpr {
    CallExpr::new_root(f::call(
        f::identifier("f"),
        vec![f::number_literal(1), f::number_literal(2)],
    ))
    .unwrap()
}

#[test]
fn test_leaf_accessors() {
    assert_eq!(Identifier::new_root(f::identifier("x")).unwrap().name(), "x");
    assert_eq!(NumberLiteral::new_root(f::number_literal(-3)).unwrap().value(), -3);
    assert_eq!(FloatLiteral::new_root(f::float_literal(2.5)).unwrap().value(), 2.5);
    assert_eq!(
        StringLiteral::new_root(f::string_literal("hi")).unwrap().value(),
        "hi"
    );
    assert!(BoolLiteral::new_root(f::bool_literal(true)).unwrap().value());
}

#[test]
fn test_new_root_rejects_other_kinds() {
    assert!(Identifier::new_root(f::number_literal(1)).is_none());
    assert!(BinaryExpr::new_root(f::negate(f::number_literal(1))).is_none());
}

#[test]
fn test_cast_by_category() {
    let node = SyntaxNode::new_root(f::multiply(f::number_literal(2), f::identifier("y")));
    let expr = Expr::cast(node.clone()).unwrap();
    assert!(matches!(expr, Expr::Binary(_)));
    assert!(Stmt::cast(node.clone()).is_none());
    assert!(expr.syntax().ptr_eq(&node));

    let binary = expr.as_binary().unwrap();
    assert_eq!(binary.operator(), SyntaxKind::Multiply);
    assert_eq!(binary.left().as_number_literal().unwrap().value(), 2);
    assert_eq!(binary.right().as_identifier().unwrap().name(), "y");
}

#[test]
fn test_leaf_update_same_value_returns_self() {
    let literal = NumberLiteral::new_root(f::number_literal(1)).unwrap();
    assert_eq!(literal.update(1), literal);
    let changed = literal.with_value(5);
    assert_ne!(changed, literal);
    assert_eq!(changed.value(), 5);
    assert_eq!(literal.value(), 1);
}

#[test]
fn test_binary_with_left_shares_right() {
    let root = BinaryExpr::new_root(f::add(f::number_literal(1), f::identifier("a"))).unwrap();
    let replacement = NumberLiteral::new_root(f::number_literal(9)).unwrap();
    let edited = root.with_left(replacement);

    assert_eq!(edited.operator(), SyntaxKind::Add);
    assert_eq!(edited.left().as_number_literal().unwrap().value(), 9);
    assert!(edited.right().green().ptr_eq(root.right().green()));
    assert!(edited.syntax().is_root());
}

#[test]
fn test_unchanged_update_returns_self() {
    let root = call_f_1_2();
    assert_eq!(root.update(root.callee(), &root.arguments()), root);
    assert_eq!(root.with_callee(root.callee()), root);
}

#[test]
fn test_call_arguments() {
    let root = call_f_1_2();
    let args: Vec<i64> = root
        .arguments()
        .iter()
        .map(|arg| arg.as_number_literal().unwrap().value())
        .collect();
    assert_eq!(args, vec![1, 2]);

    let fewer: NodeList<Expr> = NodeList::from_green(f::list([f::number_literal(7)]));
    let edited = root.with_arguments(&fewer);
    assert_eq!(edited.arguments().len(), 1);
    assert!(edited.callee().green().ptr_eq(root.callee().green()));
}

#[test]
fn test_call_without_arguments() {
    let root = CallExpr::new_root(f::call(f::identifier("g"), f::list([]))).unwrap();
    assert!(root.arguments().is_empty());
    assert!(root.arguments().first().is_none());
}

#[test]
fn test_return_value_is_optional() {
    let bare = ReturnStmt::new_root(f::return_statement(None)).unwrap();
    assert!(bare.value().is_none());
    assert_eq!(bare.with_value(None), bare);

    let value = NumberLiteral::new_root(f::number_literal(3)).unwrap();
    let with_value = bare.with_value(Some(value.into()));
    assert_eq!(
        with_value.value().unwrap().as_number_literal().unwrap().value(),
        3
    );
    assert!(with_value.with_value(None).value().is_none());
}

#[test]
fn test_if_else_chain() {
    let inner_if = f::if_statement(f::bool_literal(false), f::block(f::list([])), None);
    let root = IfStmt::new_root(f::if_statement(
        f::identifier("c"),
        f::block(vec![f::expression_statement(f::number_literal(1))]),
        Some(inner_if),
    ))
    .unwrap();

    assert_eq!(root.then_branch().statements().len(), 1);
    let Some(Stmt::If(nested)) = root.else_branch() else {
        panic!("expected an else-if");
    };
    assert!(nested.else_branch().is_none());
    assert!(nested.syntax().parent().unwrap().ptr_eq(root.syntax()));

    let without_else = root.with_else_branch(None);
    assert!(without_else.else_branch().is_none());
    assert!(without_else
        .then_branch()
        .green()
        .ptr_eq(root.then_branch().green()));
}

#[test]
fn test_source_file_statements() {
    let root = SourceFile::new_root(f::source_file(vec![
        f::expression_statement(f::identifier("a")),
        f::return_statement(Some(f::number_literal(0))),
    ]))
    .unwrap();

    let kinds: Vec<SyntaxKind> = root.statements().iter().map(|stmt| stmt.kind()).collect();
    assert_eq!(kinds, vec![SyntaxKind::ExpressionStatement, SyntaxKind::Return]);
    let last = root.statements().last().unwrap();
    assert!(matches!(last, Stmt::Return(_)));
    assert_eq!(root.with_statements(&root.statements()), root);
}

#[test]
fn test_unparenthesized() {
    let expr = Expr::cast(SyntaxNode::new_root(f::parenthesized(f::parenthesized(
        f::identifier("z"),
    ))))
    .unwrap();
    assert!(matches!(expr, Expr::Paren(_)));
    assert_eq!(expr.unparenthesized().as_identifier().unwrap().name(), "z");
    assert!(!expr.is_literal());
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "does not accept `NumberLiteral`")]
fn test_factory_rejects_wrong_child_kind() {
    f::assign(f::number_literal(1), f::number_literal(2));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "does not accept `Block`")]
fn test_factory_rejects_statement_in_expression_slot() {
    f::add(f::block(f::list([])), f::number_literal(1));
}
