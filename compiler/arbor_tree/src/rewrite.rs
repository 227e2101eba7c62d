//! Identity-preserving updates.
//!
//! [`update`] is what every typed `update`/`with_*` method bottoms out in,
//! and [`rewrite_list`] is the list half of a rewriter. Both return their
//! input unchanged (same allocation) when nothing changed, so untouched
//! subtrees stay shared all the way up.

use crate::{AstNode, GreenListBuilder, GreenNode, Kind, NodeList, Payload, SyntaxNode};

/// Rebuild `node` from new slot contents and payload.
///
/// Each new slot is compared with the current child by identity, payload
/// by value. An empty list matches an absent slot. If nothing differs,
/// `node` itself is returned. Otherwise a new green node of the same kind is
/// built from the arguments' green nodes and wrapped as the root of a new
/// tree.
pub fn update<K: Kind>(
    node: &SyntaxNode<K>,
    slots: Vec<Option<SyntaxNode<K>>>,
    payload: Vec<Payload>,
) -> SyntaxNode<K> {
    debug_assert_eq!(
        slots.len(),
        node.green().arity(),
        "update of {:?} with the wrong number of slots",
        node.kind()
    );

    let unchanged = payload.as_slice() == node.payload()
        && slots.iter().enumerate().all(|(slot, new)| {
            match (node.child(slot), new) {
                (Some(current), Some(new)) => current.ptr_eq(new),
                (None, None) => true,
                (None, Some(new)) => new.kind().is_list() && new.green().arity() == 0,
                (Some(_), None) => false,
            }
        });
    if unchanged {
        return node.clone();
    }

    let slots = slots
        .into_iter()
        .map(|slot| slot.map(|child| child.green().clone()))
        .collect();
    SyntaxNode::new_root(GreenNode::new(node.kind(), slots, payload))
}

/// Rewrite each element of `list` with `rewrite`.
///
/// Elements that rewrite to `None` are dropped. If every element comes
/// back as itself, `list` is returned unchanged. Otherwise the replacement
/// is built once: the unchanged prefix is copied from the old green list,
/// then each later element is appended.
pub fn rewrite_list<N: AstNode>(
    list: &NodeList<N>,
    mut rewrite: impl FnMut(&N) -> Option<N>,
) -> NodeList<N> {
    let mut builder: Option<GreenListBuilder<N::Kind>> = None;

    for (index, element) in list.iter().enumerate() {
        let rewritten = rewrite(&element);

        if let Some(builder) = builder.as_mut() {
            if let Some(node) = rewritten {
                builder.push(node.green().clone());
            }
            continue;
        }

        let same = rewritten
            .as_ref()
            .is_some_and(|node| node.syntax().ptr_eq(element.syntax()));
        if same {
            continue;
        }

        tracing::trace!(index, len = list.len(), "list element changed, rebuilding list");
        let mut replacement = GreenListBuilder::with_capacity(list.len());
        if let Some(green) = list.green() {
            replacement.extend_from_list(green, 0..index);
        }
        if let Some(node) = rewritten {
            replacement.push(node.green().clone());
        }
        builder = Some(replacement);
    }

    match builder {
        Some(mut builder) => NodeList::from_green(builder.finish()),
        None => list.clone(),
    }
}
