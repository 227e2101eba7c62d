//! Typed red nodes.
//!
//! One newtype per shape wraps a [`SyntaxNode`] of a matching kind, plus the
//! [`Expr`] and [`Stmt`] category enums. Accessors read children and payload
//! through `arbor_tree::support`; `update` and `with_*` return the node
//! itself when nothing changes and otherwise the root of a new tree.

pub use expr::{
    AssignExpr, BinaryExpr, BoolLiteral, CallExpr, FloatLiteral, Identifier, NumberLiteral,
    ParenExpr, StringLiteral, UnaryExpr,
};
pub use stmt::{Block, ExprStmt, IfStmt, ReturnStmt, SourceFile};

use arbor_tree::AstNode;

use crate::{SyntaxKind, SyntaxNode};

/// Newtype over `SyntaxNode` for one shape, with its `AstNode` impl and the
/// four `accept` entry points.
macro_rules! ast_node {
    ($(#[$meta:meta])* $name:ident, $visit:ident, $($kind:ident)|+) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub(crate) $crate::SyntaxNode);

        impl ::arbor_tree::AstNode for $name {
            type Kind = $crate::SyntaxKind;

            fn can_cast(kind: $crate::SyntaxKind) -> bool {
                matches!(kind, $($crate::SyntaxKind::$kind)|+)
            }

            fn cast(node: $crate::SyntaxNode) -> Option<Self> {
                <Self as ::arbor_tree::AstNode>::can_cast(node.kind()).then(|| $name(node))
            }

            fn syntax(&self) -> &$crate::SyntaxNode {
                &self.0
            }
        }

        impl $name {
            /// Wrap `green` as the root of a new tree, if it has a matching kind.
            pub fn new_root(green: $crate::GreenNode) -> Option<Self> {
                ::arbor_tree::AstNode::cast($crate::SyntaxNode::new_root(green))
            }

            pub fn accept<V, R>(&self, visitor: &mut V) -> R
            where
                V: $crate::visit::Visitor<R> + ?Sized,
                R: Default,
            {
                visitor.$visit(self)
            }

            pub fn accept1<V, A, R>(&self, visitor: &mut V, a: &mut A) -> R
            where
                V: $crate::visit::Visitor1<A, R> + ?Sized,
                R: Default,
            {
                visitor.$visit(self, a)
            }

            pub fn accept2<V, A, B, R>(&self, visitor: &mut V, a: &mut A, b: &mut B) -> R
            where
                V: $crate::visit::Visitor2<A, B, R> + ?Sized,
                R: Default,
            {
                visitor.$visit(self, a, b)
            }

            pub fn accept3<V, A, B, C, R>(
                &self,
                visitor: &mut V,
                a: &mut A,
                b: &mut B,
                c: &mut C,
            ) -> R
            where
                V: $crate::visit::Visitor3<A, B, C, R> + ?Sized,
                R: Default,
            {
                visitor.$visit(self, a, b, c)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }
    };
}

/// Category enum over several typed nodes, dispatching `accept*` through
/// `visit`.
macro_rules! ast_enum {
    ($(#[$meta:meta])* $name:ident, $is_member:ident { $($variant:ident($node:ident)),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($node),)+
        }

        impl ::arbor_tree::AstNode for $name {
            type Kind = $crate::SyntaxKind;

            fn can_cast(kind: $crate::SyntaxKind) -> bool {
                kind.$is_member()
            }

            fn cast(node: $crate::SyntaxNode) -> Option<Self> {
                $(
                    if <$node as ::arbor_tree::AstNode>::can_cast(node.kind()) {
                        return Some($name::$variant($node(node)));
                    }
                )+
                None
            }

            fn syntax(&self) -> &$crate::SyntaxNode {
                match self {
                    $($name::$variant(node) => &node.0,)+
                }
            }
        }

        impl $name {
            pub fn accept<V, R>(&self, visitor: &mut V) -> R
            where
                V: $crate::visit::Visitor<R> + ?Sized,
                R: Default,
            {
                visitor.visit(Some(::arbor_tree::AstNode::syntax(self)))
            }

            pub fn accept1<V, A, R>(&self, visitor: &mut V, a: &mut A) -> R
            where
                V: $crate::visit::Visitor1<A, R> + ?Sized,
                R: Default,
            {
                visitor.visit(Some(::arbor_tree::AstNode::syntax(self)), a)
            }

            pub fn accept2<V, A, B, R>(&self, visitor: &mut V, a: &mut A, b: &mut B) -> R
            where
                V: $crate::visit::Visitor2<A, B, R> + ?Sized,
                R: Default,
            {
                visitor.visit(Some(::arbor_tree::AstNode::syntax(self)), a, b)
            }

            pub fn accept3<V, A, B, C, R>(
                &self,
                visitor: &mut V,
                a: &mut A,
                b: &mut B,
                c: &mut C,
            ) -> R
            where
                V: $crate::visit::Visitor3<A, B, C, R> + ?Sized,
                R: Default,
            {
                visitor.visit(Some(::arbor_tree::AstNode::syntax(self)), a, b, c)
            }
        }

        $(
            impl From<$node> for $name {
                fn from(node: $node) -> Self {
                    $name::$variant(node)
                }
            }
        )+

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $($name::$variant(node) => ::std::fmt::Debug::fmt(node, f),)+
                }
            }
        }
    };
}

mod expr;
mod stmt;

/// A typed child as the slot value `update` expects.
fn present<N: AstNode<Kind = SyntaxKind>>(node: &N) -> Option<SyntaxNode> {
    Some(node.syntax().clone())
}

ast_enum! {
    /// Any expression.
    Expr, is_expression {
        Identifier(Identifier),
        NumberLiteral(NumberLiteral),
        FloatLiteral(FloatLiteral),
        StringLiteral(StringLiteral),
        BoolLiteral(BoolLiteral),
        Binary(BinaryExpr),
        Unary(UnaryExpr),
        Paren(ParenExpr),
        Call(CallExpr),
        Assign(AssignExpr),
    }
}

ast_enum! {
    /// Any statement.
    Stmt, is_statement {
        Expr(ExprStmt),
        Return(ReturnStmt),
        Block(Block),
        If(IfStmt),
    }
}

#[cfg(test)]
mod tests;
