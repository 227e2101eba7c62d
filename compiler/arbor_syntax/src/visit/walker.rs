//! Depth-first traversal of every node.

use arbor_stack::{with_depth_guard, DepthTracked};

use crate::nodes::{
    AssignExpr, BinaryExpr, Block, BoolLiteral, CallExpr, ExprStmt, FloatLiteral, Identifier,
    IfStmt, NumberLiteral, ParenExpr, ReturnStmt, SourceFile, StringLiteral, UnaryExpr,
};
use crate::{SyntaxKind, SyntaxNode};

/// Visitor whose handlers recurse into all children by default.
///
/// Override a handler to act on one kind of node; call [`walk_children`]
/// from the override to keep descending. Each level of recursion is counted
/// in the walker's [`RecursionDepth`](arbor_stack::RecursionDepth), and
/// levels past its threshold check for stack space first, so arbitrarily
/// deep trees do not overflow the thread stack.
///
/// ```text
/// struct Names {
///     depth: RecursionDepth,
///     seen: Vec<String>,
/// }
///
/// impl DepthTracked for Names {
///     fn recursion_depth(&mut self) -> &mut RecursionDepth {
///         &mut self.depth
///     }
/// }
///
/// impl Walker for Names {
///     fn visit_identifier(&mut self, node: &Identifier) {
///         self.seen.push(node.name().to_owned());
///     }
/// }
/// ```
pub trait Walker: DepthTracked {
    fn visit(&mut self, node: Option<&SyntaxNode>) {
        if let Some(node) = node {
            with_depth_guard(self, |walker| walker.dispatch(node));
        }
    }

    fn default_visit(&mut self, node: &SyntaxNode) {
        walk_children(self, node);
    }

    node_handlers!((););
}

/// Visit each logical child of `node`, left to right.
pub fn walk_children<W: Walker + ?Sized>(walker: &mut W, node: &SyntaxNode) {
    for child in node.child_nodes() {
        walker.visit(Some(&child));
    }
}
