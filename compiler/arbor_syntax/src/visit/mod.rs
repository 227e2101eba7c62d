//! Dispatch-by-kind traversal.
//!
//! Three families of traits share one set of per-node handlers:
//!
//! - [`Visitor`], [`Visitor1`], [`Visitor2`], [`Visitor3`]: plain double
//!   dispatch with zero to three extra context arguments threaded through
//!   every call. Handlers default to `default_visit`, which returns
//!   `R::default()`. Visiting an absent node also returns `R::default()`.
//! - [`Walker`]: handlers default to recursing into every child, under a
//!   recursion-depth guard.
//! - [`Rewriter`]: handlers return a possibly different node and default to
//!   rebuilding the node from its rewritten children, sharing every subtree
//!   that did not change.
//!
//! Handlers exist per typed node, not per kind: the four binary operator
//! kinds all arrive at `visit_binary_expr`.

use crate::nodes::{
    AssignExpr, BinaryExpr, Block, BoolLiteral, CallExpr, ExprStmt, FloatLiteral, Identifier,
    IfStmt, NumberLiteral, ParenExpr, ReturnStmt, SourceFile, StringLiteral, UnaryExpr,
};
use crate::{SyntaxKind, SyntaxNode};

/// Expands to `dispatch` plus one handler per typed node.
///
/// Every handler defaults to `default_visit`, which the enclosing trait
/// defines.
macro_rules! node_handlers {
    ($ret:ty; $($arg:ident: $ty:ty),*) => {
        /// Route a present node to its handler.
        fn dispatch(&mut self, node: &SyntaxNode $(, $arg: $ty)*) -> $ret {
            match node.kind() {
                SyntaxKind::List => self.default_visit(node $(, $arg)*),
                SyntaxKind::Identifier => {
                    self.visit_identifier(&Identifier(node.clone()) $(, $arg)*)
                }
                SyntaxKind::NumberLiteral => {
                    self.visit_number_literal(&NumberLiteral(node.clone()) $(, $arg)*)
                }
                SyntaxKind::FloatLiteral => {
                    self.visit_float_literal(&FloatLiteral(node.clone()) $(, $arg)*)
                }
                SyntaxKind::StringLiteral => {
                    self.visit_string_literal(&StringLiteral(node.clone()) $(, $arg)*)
                }
                SyntaxKind::BoolLiteral => {
                    self.visit_bool_literal(&BoolLiteral(node.clone()) $(, $arg)*)
                }
                SyntaxKind::Add
                | SyntaxKind::Subtract
                | SyntaxKind::Multiply
                | SyntaxKind::Divide => {
                    self.visit_binary_expr(&BinaryExpr(node.clone()) $(, $arg)*)
                }
                SyntaxKind::Negate | SyntaxKind::Not => {
                    self.visit_unary_expr(&UnaryExpr(node.clone()) $(, $arg)*)
                }
                SyntaxKind::Parenthesized => {
                    self.visit_paren_expr(&ParenExpr(node.clone()) $(, $arg)*)
                }
                SyntaxKind::Call => self.visit_call_expr(&CallExpr(node.clone()) $(, $arg)*),
                SyntaxKind::Assign => {
                    self.visit_assign_expr(&AssignExpr(node.clone()) $(, $arg)*)
                }
                SyntaxKind::ExpressionStatement => {
                    self.visit_expr_stmt(&ExprStmt(node.clone()) $(, $arg)*)
                }
                SyntaxKind::Return => {
                    self.visit_return_stmt(&ReturnStmt(node.clone()) $(, $arg)*)
                }
                SyntaxKind::Block => self.visit_block(&Block(node.clone()) $(, $arg)*),
                SyntaxKind::If => self.visit_if_stmt(&IfStmt(node.clone()) $(, $arg)*),
                SyntaxKind::SourceFile => {
                    self.visit_source_file(&SourceFile(node.clone()) $(, $arg)*)
                }
            }
        }

        fn visit_identifier(&mut self, node: &Identifier $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_number_literal(&mut self, node: &NumberLiteral $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_float_literal(&mut self, node: &FloatLiteral $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_string_literal(&mut self, node: &StringLiteral $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_bool_literal(&mut self, node: &BoolLiteral $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_binary_expr(&mut self, node: &BinaryExpr $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_unary_expr(&mut self, node: &UnaryExpr $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_paren_expr(&mut self, node: &ParenExpr $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_call_expr(&mut self, node: &CallExpr $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_assign_expr(&mut self, node: &AssignExpr $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_expr_stmt(&mut self, node: &ExprStmt $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_return_stmt(&mut self, node: &ReturnStmt $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_block(&mut self, node: &Block $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_if_stmt(&mut self, node: &IfStmt $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }

        fn visit_source_file(&mut self, node: &SourceFile $(, $arg: $ty)*) -> $ret {
            self.default_visit(&node.0 $(, $arg)*)
        }
    };
}

mod rewriter;
mod walker;

pub use rewriter::{rewrite_children, Rewriter};
pub use walker::{walk_children, Walker};

/// Visitor without extra arguments.
///
/// # Example
///
/// ```text
/// struct CountLiterals(usize);
///
/// impl Visitor for CountLiterals {
///     fn visit_number_literal(&mut self, _node: &NumberLiteral) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait Visitor<R: Default = ()> {
    fn visit(&mut self, node: Option<&SyntaxNode>) -> R {
        match node {
            Some(node) => self.dispatch(node),
            None => R::default(),
        }
    }

    fn default_visit(&mut self, node: &SyntaxNode) -> R {
        let _ = node;
        R::default()
    }

    node_handlers!(R;);
}

/// Visitor threading one context argument.
pub trait Visitor1<A, R: Default = ()> {
    fn visit(&mut self, node: Option<&SyntaxNode>, a: &mut A) -> R {
        match node {
            Some(node) => self.dispatch(node, a),
            None => R::default(),
        }
    }

    fn default_visit(&mut self, node: &SyntaxNode, a: &mut A) -> R {
        let _ = (node, a);
        R::default()
    }

    node_handlers!(R; a: &mut A);
}

/// Visitor threading two context arguments.
pub trait Visitor2<A, B, R: Default = ()> {
    fn visit(&mut self, node: Option<&SyntaxNode>, a: &mut A, b: &mut B) -> R {
        match node {
            Some(node) => self.dispatch(node, a, b),
            None => R::default(),
        }
    }

    fn default_visit(&mut self, node: &SyntaxNode, a: &mut A, b: &mut B) -> R {
        let _ = (node, a, b);
        R::default()
    }

    node_handlers!(R; a: &mut A, b: &mut B);
}

/// Visitor threading three context arguments.
pub trait Visitor3<A, B, C, R: Default = ()> {
    fn visit(&mut self, node: Option<&SyntaxNode>, a: &mut A, b: &mut B, c: &mut C) -> R {
        match node {
            Some(node) => self.dispatch(node, a, b, c),
            None => R::default(),
        }
    }

    fn default_visit(&mut self, node: &SyntaxNode, a: &mut A, b: &mut B, c: &mut C) -> R {
        let _ = (node, a, b, c);
        R::default()
    }

    node_handlers!(R; a: &mut A, b: &mut B, c: &mut C);
}
