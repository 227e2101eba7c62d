//! Positioned (red) nodes.
//!
//! A [`SyntaxNode`] wraps one green node together with its parent, so it
//! knows where in one particular tree it sits. Red children are created on
//! first access and cached in a write-once slot per child.
//!
//! # Ownership
//!
//! Each node owns its materialized children; a child refers to its parent
//! through a `Weak`. Every `SyntaxNode` handle also holds the tree's root,
//! which keeps the whole materialized tree (and so every parent link)
//! alive. There are no reference cycles, and a handle stays navigable after
//! the caller drops everything else.
//!
//! # Concurrency
//!
//! Child slots are `once_cell::race::OnceBox`: set-if-empty by compare and
//! swap, never blocking. Threads racing on the same slot may each build a
//! wrapper; exactly one is installed and the others are dropped. The losers
//! wrapped the same green node under the same parent, so no caller can tell
//! which attempt won.
//!
//! # Lists
//!
//! A list-valued slot materializes as a red node of kind [`Kind::LIST`],
//! which caches the element wrappers. Elements report the list's owner as
//! their parent, so the list never appears in `ancestors()`,
//! `child_nodes()`, or `descendant_nodes()`.

mod list;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::sync::{Arc, Weak};

use once_cell::race::OnceBox;
use smallvec::SmallVec;

use crate::green::{locate, SlotPosition};
use crate::{AstNode, GreenNode, Kind, Payload};

pub use list::{NodeList, NodeListIter};

/// Parent-aware view of a green node. Compared by identity.
pub struct SyntaxNode<K: Kind> {
    root: Arc<NodeData<K>>,
    data: Arc<NodeData<K>>,
}

struct NodeData<K: Kind> {
    green: GreenNode<K>,
    parent: Option<Weak<NodeData<K>>>,
    /// Slot in the parent holding this node (or holding its list).
    slot: usize,
    /// Element index when this node sits in a list slot of `parent`.
    list_index: Option<usize>,
    children: Box<[OnceBox<Arc<NodeData<K>>>]>,
}

impl<K: Kind> NodeData<K> {
    fn new(
        green: GreenNode<K>,
        parent: Option<Weak<NodeData<K>>>,
        slot: usize,
        list_index: Option<usize>,
    ) -> Self {
        let children = (0..green.arity()).map(|_| OnceBox::new()).collect();
        NodeData {
            green,
            parent,
            slot,
            list_index,
            children,
        }
    }
}

/// Release materialized children iteratively so dropping a deep tree does
/// not recurse.
impl<K: Kind> Drop for NodeData<K> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        detach_children(&mut self.children, &mut stack);
        while let Some(node) = stack.pop() {
            if let Ok(mut data) = Arc::try_unwrap(node) {
                detach_children(&mut data.children, &mut stack);
            }
        }
    }
}

fn detach_children<K: Kind>(
    children: &mut Box<[OnceBox<Arc<NodeData<K>>>]>,
    stack: &mut Vec<Arc<NodeData<K>>>,
) {
    for cell in std::mem::take(children).iter() {
        if let Some(child) = cell.get() {
            stack.push(Arc::clone(child));
        }
    }
}

impl<K: Kind> SyntaxNode<K> {
    /// Wrap a green node as the root of a new tree.
    pub fn new_root(green: GreenNode<K>) -> Self {
        let data = Arc::new(NodeData::new(green, None, 0, None));
        SyntaxNode {
            root: Arc::clone(&data),
            data,
        }
    }

    fn with_data(&self, data: Arc<NodeData<K>>) -> Self {
        SyntaxNode {
            root: Arc::clone(&self.root),
            data,
        }
    }

    #[inline]
    pub fn green(&self) -> &GreenNode<K> {
        &self.data.green
    }

    #[inline]
    pub fn kind(&self) -> K {
        self.data.green.kind()
    }

    #[inline]
    pub fn payload(&self) -> &[Payload] {
        self.data.green.payload()
    }

    /// Slot of the parent that holds this node (or holds its list).
    #[inline]
    pub fn slot_index(&self) -> usize {
        self.data.slot
    }

    /// Position within the parent's list slot, if this node is a list element.
    #[inline]
    pub fn list_index(&self) -> Option<usize> {
        self.data.list_index
    }

    pub fn parent(&self) -> Option<SyntaxNode<K>> {
        let parent = self.data.parent.as_ref()?.upgrade();
        debug_assert!(parent.is_some(), "parent dropped while its tree is alive");
        parent.map(|data| self.with_data(data))
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.data.parent.is_none()
    }

    pub fn root(&self) -> SyntaxNode<K> {
        self.with_data(Arc::clone(&self.root))
    }

    /// Whether both handles are the same node of the same tree.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Structural equivalence of the underlying green nodes.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.green().is_equivalent_to(other.green())
    }

    /// Red child in slot `slot`, materializing it on first access.
    ///
    /// For a list-valued slot this is the list node; use [`SyntaxNode::list`]
    /// for element access.
    pub fn child(&self, slot: usize) -> Option<SyntaxNode<K>> {
        self.materialize(slot).map(|data| self.with_data(data))
    }

    fn materialize(&self, slot: usize) -> Option<Arc<NodeData<K>>> {
        debug_assert!(
            slot < self.data.children.len(),
            "slot {slot} out of range for {:?} with {} slots",
            self.kind(),
            self.data.children.len(),
        );
        let cell = self.data.children.get(slot)?;
        if let Some(child) = cell.get() {
            return Some(Arc::clone(child));
        }

        let green = self.data.green.slot(slot)?.clone();
        let candidate = match (&self.data.parent, self.kind().is_list()) {
            // Elements of a list hang off the list's owner.
            (Some(owner), true) => {
                NodeData::new(green, Some(Weak::clone(owner)), self.data.slot, Some(slot))
            }
            _ => NodeData::new(green, Some(Arc::downgrade(&self.data)), slot, None),
        };

        if cell.set(Box::new(Arc::new(candidate))).is_err() {
            tracing::trace!(kind = ?self.kind(), slot, "lost materialization race");
        }
        cell.get().map(Arc::clone)
    }

    /// Logical child `index`, flattening list slots.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.green().slot_count()`.
    pub fn child_at(&self, index: usize) -> SyntaxNode<K> {
        let position = locate(self.green().slots(), index);
        let child = match position {
            Some(SlotPosition::Slot(slot)) => self.child(slot),
            Some(SlotPosition::InList(slot, element)) => {
                self.child(slot).and_then(|list| list.child(element))
            }
            None => None,
        };
        match child {
            Some(child) => child,
            None => panic!(
                "child index {index} out of range for {:?} with {} children",
                self.kind(),
                self.green().slot_count(),
            ),
        }
    }

    /// Facade over the list in slot `slot`. An absent slot is an empty list.
    pub fn list(&self, slot: usize) -> NodeList<SyntaxNode<K>> {
        NodeList::new(self.child(slot))
    }

    /// Direct logical children, skipping absent slots and flattening lists.
    pub fn child_nodes(&self) -> SyntaxChildren<K> {
        SyntaxChildren::new(self.clone())
    }

    /// Parent, grandparent, and so on up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = SyntaxNode<K>> {
        iter::successors(self.parent(), SyntaxNode::parent)
    }

    pub fn ancestors_and_self(&self) -> impl Iterator<Item = SyntaxNode<K>> {
        iter::successors(Some(self.clone()), SyntaxNode::parent)
    }

    /// Nearest node on the parent chain (starting at `self`) matching `predicate`.
    pub fn find_ancestor_or_self(
        &self,
        mut predicate: impl FnMut(&SyntaxNode<K>) -> bool,
    ) -> Option<SyntaxNode<K>> {
        self.ancestors_and_self().find(|node| predicate(node))
    }

    /// Nearest node on the parent chain (starting at `self`) that casts to
    /// `N` and matches `predicate`.
    pub fn first_ancestor_or_self<N>(&self, mut predicate: impl FnMut(&N) -> bool) -> Option<N>
    where
        N: AstNode<Kind = K>,
    {
        self.ancestors_and_self()
            .filter_map(N::cast)
            .find(|node| predicate(node))
    }

    /// Whether `other` is `self` or one of its descendants.
    pub fn contains(&self, other: &SyntaxNode<K>) -> bool {
        if !Arc::ptr_eq(&self.root, &other.root) {
            return false;
        }
        match self.data.parent.as_ref() {
            // Elements of a non-root list hang off its owner, so the list
            // itself never shows up on their parent chain.
            Some(owner) if self.kind().is_list() => other.ancestors_and_self().any(|node| {
                node.ptr_eq(self)
                    || (node.data.list_index.is_some()
                        && node.data.slot == self.data.slot
                        && node
                            .data
                            .parent
                            .as_ref()
                            .is_some_and(|parent| parent.ptr_eq(owner)))
            }),
            _ => other.ancestors_and_self().any(|node| node.ptr_eq(self)),
        }
    }

    /// Descendants in pre-order, not including `self`.
    pub fn descendant_nodes(&self) -> SyntaxDescendants<K> {
        let mut stack: Vec<_> = self.child_nodes().collect();
        stack.reverse();
        SyntaxDescendants { stack }
    }

    /// `self` followed by its descendants in pre-order.
    pub fn descendant_nodes_and_self(&self) -> SyntaxDescendants<K> {
        SyntaxDescendants {
            stack: vec![self.clone()],
        }
    }

    /// Substitute `replacement` for this node and rebuild the spine.
    ///
    /// Returns the root of a new tree. Every subtree off the path from this
    /// node to the root is shared with the old tree.
    pub fn replace_with(&self, replacement: GreenNode<K>) -> SyntaxNode<K> {
        let mut green = replacement;
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            let slot = current.data.slot;
            let child = match current.data.list_index {
                Some(index) => match parent.green().slot(slot) {
                    Some(list) => list.with_slot(index, Some(green)),
                    None => panic!(
                        "list slot {slot} of {:?} vanished under a live element",
                        parent.kind()
                    ),
                },
                None => green,
            };
            green = parent.green().with_slot(slot, Some(child));
            current = parent;
        }
        SyntaxNode::new_root(green)
    }
}

impl<K: Kind> Clone for SyntaxNode<K> {
    #[inline]
    fn clone(&self) -> Self {
        SyntaxNode {
            root: Arc::clone(&self.root),
            data: Arc::clone(&self.data),
        }
    }
}

impl<K: Kind> PartialEq for SyntaxNode<K> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl<K: Kind> Eq for SyntaxNode<K> {}

impl<K: Kind> Hash for SyntaxNode<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Arc::as_ptr(&self.data).hash(state);
    }
}

impl<K: Kind> fmt::Debug for SyntaxNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntaxNode")
            .field("kind", &self.kind())
            .field("slot", &self.data.slot)
            .field("list_index", &self.data.list_index)
            .field("payload", &self.payload())
            .finish()
    }
}

/// Iterator over a red node's logical children, materializing as it goes.
#[derive(Clone)]
pub struct SyntaxChildren<K: Kind> {
    stack: SmallVec<[(SyntaxNode<K>, usize); 2]>,
}

impl<K: Kind> SyntaxChildren<K> {
    fn new(node: SyntaxNode<K>) -> Self {
        let mut stack = SmallVec::new();
        stack.push((node, 0));
        SyntaxChildren { stack }
    }
}

impl<K: Kind> Iterator for SyntaxChildren<K> {
    type Item = SyntaxNode<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, next_slot) = self.stack.last_mut()?;
            if *next_slot >= node.green().arity() {
                self.stack.pop();
                continue;
            }
            let slot = *next_slot;
            *next_slot += 1;
            let Some(child) = node.child(slot) else {
                continue;
            };
            if child.kind().is_list() {
                self.stack.push((child, 0));
            } else {
                return Some(child);
            }
        }
    }
}

/// Pre-order iterator over red descendants, using an explicit stack.
pub struct SyntaxDescendants<K: Kind> {
    stack: Vec<SyntaxNode<K>>,
}

impl<K: Kind> Iterator for SyntaxDescendants<K> {
    type Item = SyntaxNode<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(node.child_nodes());
        // Reverse so the leftmost child is popped first.
        self.stack[start..].reverse();
        Some(node)
    }
}

#[cfg(test)]
mod tests;
