//! Tree-to-tree transformation that keeps unchanged subtrees shared.

use arbor_stack::{with_depth_guard, DepthTracked};
use arbor_tree::{rewrite_list, update, AstNode, Kind, NodeList, SlotArity};

use crate::nodes::{
    AssignExpr, BinaryExpr, Block, BoolLiteral, CallExpr, ExprStmt, FloatLiteral, Identifier,
    IfStmt, NumberLiteral, ParenExpr, ReturnStmt, SourceFile, StringLiteral, UnaryExpr,
};
use crate::{SyntaxKind, SyntaxNode};

/// Visitor that returns a replacement for each node it visits.
///
/// A handler returns the node to put in its place: the input itself for no
/// change, a different node, or `None` to delete it. Deleting is only
/// meaningful inside a list or an optional slot; a required child rewritten
/// to `None` panics.
///
/// Handlers default to [`rewrite_children`], which rebuilds the node through
/// `update`. A node whose children all come back unchanged is returned as
/// is, so a rewriter that changes nothing returns the original root, and a
/// single edit allocates only the path from the edited node to the root.
pub trait Rewriter: DepthTracked {
    fn visit(&mut self, node: Option<&SyntaxNode>) -> Option<SyntaxNode> {
        let node = node?;
        with_depth_guard(self, |rewriter| rewriter.dispatch(node))
    }

    fn default_visit(&mut self, node: &SyntaxNode) -> Option<SyntaxNode> {
        Some(rewrite_children(self, node))
    }

    /// Rewrite each element of `list`.
    ///
    /// Elements rewritten to `None` are dropped. The list is reallocated
    /// only if some element changed, starting from a copy of the unchanged
    /// prefix.
    ///
    /// # Panics
    ///
    /// Panics if an element is replaced by a node that is not an `N`.
    fn visit_list<N>(&mut self, list: &NodeList<N>) -> NodeList<N>
    where
        N: AstNode<Kind = SyntaxKind>,
        Self: Sized,
    {
        rewrite_list(list, |element| {
            let rewritten = self.visit(Some(element.syntax()))?;
            let kind = rewritten.kind();
            match N::cast(rewritten) {
                Some(element) => Some(element),
                None => panic!("list element rewritten to {kind:?}, which the list cannot hold"),
            }
        })
    }

    node_handlers!(Option<SyntaxNode>;);
}

/// Rebuild `node` from the rewritten form of each of its slots.
///
/// Returns `node` itself when every slot comes back unchanged.
///
/// # Panics
///
/// Panics if a required slot is rewritten to `None`.
pub fn rewrite_children<R: Rewriter + ?Sized>(rewriter: &mut R, node: &SyntaxNode) -> SyntaxNode {
    let Some(shape) = node.kind().shape() else {
        // A bare list node, reached only when a list is itself the root.
        let list: NodeList<SyntaxNode> = NodeList::new(Some(node.clone()));
        let rewritten = rewrite_list(&list, |element| rewriter.visit(Some(element)));
        return match rewritten.syntax() {
            Some(list) => list.clone(),
            None => node.clone(),
        };
    };

    let slots = shape
        .slots
        .iter()
        .enumerate()
        .map(|(slot, spec)| match spec.arity {
            SlotArity::List => {
                let list = node.list(slot);
                let rewritten = rewrite_list(&list, |element| rewriter.visit(Some(element)));
                rewritten.syntax().cloned()
            }
            SlotArity::Optional => rewriter.visit(node.child(slot).as_ref()),
            SlotArity::Required => match rewriter.visit(node.child(slot).as_ref()) {
                Some(child) => Some(child),
                None => panic!(
                    "required slot `{}` of {:?} rewritten to nothing",
                    spec.name,
                    node.kind()
                ),
            },
        })
        .collect();

    let rebuilt = update(node, slots, node.payload().to_vec());
    if !rebuilt.ptr_eq(node) {
        tracing::trace!(kind = ?node.kind(), "rebuilt node from rewritten children");
    }
    rebuilt
}
