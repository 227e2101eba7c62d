//! Facade over a red node's list-valued slot.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::SyntaxNode;
use crate::{AstNode, GreenNode, Kind};

/// Typed view of the elements in one list slot.
///
/// Not a node of its own: indexing goes through the occupancy of the
/// underlying green list and materialization through the red list node.
/// Two facades are equal when they view the same red list (or are both
/// empty because the slot is absent).
pub struct NodeList<N: AstNode> {
    list: Option<SyntaxNode<N::Kind>>,
    _element: PhantomData<fn() -> N>,
}

impl<N: AstNode> NodeList<N> {
    /// View over `list`, which must be a list node if present.
    pub fn new(list: Option<SyntaxNode<N::Kind>>) -> Self {
        debug_assert!(
            list.as_ref().map_or(true, |list| list.kind().is_list()),
            "NodeList over non-list node {:?}",
            list.as_ref().map(SyntaxNode::kind),
        );
        NodeList {
            list,
            _element: PhantomData,
        }
    }

    /// View over a freshly built green list, as the root of its own tree.
    pub fn from_green(list: GreenNode<N::Kind>) -> Self {
        Self::new(Some(SyntaxNode::new_root(list)))
    }

    pub fn empty() -> Self {
        Self::new(None)
    }

    /// The red list node, `None` for an absent slot.
    #[inline]
    pub fn syntax(&self) -> Option<&SyntaxNode<N::Kind>> {
        self.list.as_ref()
    }

    #[inline]
    pub fn green(&self) -> Option<&GreenNode<N::Kind>> {
        self.list.as_ref().map(SyntaxNode::green)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.green().map_or(0, GreenNode::slot_count)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<N> {
        if index < self.len() {
            Some(self.element(index))
        } else {
            None
        }
    }

    /// Element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn element(&self, index: usize) -> N {
        let node = self
            .list
            .as_ref()
            .filter(|_| index < self.len())
            .and_then(|list| list.child(index));
        match node {
            Some(node) => cast_element(node),
            None => panic!(
                "list index {index} out of range for list of length {}",
                self.len()
            ),
        }
    }

    pub fn first(&self) -> Option<N> {
        self.get(0)
    }

    pub fn last(&self) -> Option<N> {
        self.len().checked_sub(1).map(|index| self.element(index))
    }

    pub fn iter(&self) -> NodeListIter<N> {
        NodeListIter {
            list: self.clone(),
            front: 0,
            back: self.len(),
        }
    }
}

fn cast_element<N: AstNode>(node: SyntaxNode<N::Kind>) -> N {
    let kind = node.kind();
    match N::cast(node) {
        Some(element) => element,
        None => panic!("list element of kind {kind:?} does not fit the list's element type"),
    }
}

impl<N: AstNode> Clone for NodeList<N> {
    fn clone(&self) -> Self {
        NodeList {
            list: self.list.clone(),
            _element: PhantomData,
        }
    }
}

impl<N: AstNode> Default for NodeList<N> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<N: AstNode> PartialEq for NodeList<N> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.list, &other.list) {
            (Some(left), Some(right)) => left.ptr_eq(right),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<N: AstNode> Eq for NodeList<N> {}

impl<N: AstNode> fmt::Debug for NodeList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|element| element.syntax().clone()))
            .finish()
    }
}

impl<N: AstNode> IntoIterator for &NodeList<N> {
    type Item = N;
    type IntoIter = NodeListIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N: AstNode> IntoIterator for NodeList<N> {
    type Item = N;
    type IntoIter = NodeListIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        let back = self.len();
        NodeListIter {
            list: self,
            front: 0,
            back,
        }
    }
}

/// Double-ended iterator over a [`NodeList`]; `.rev()` walks it backwards.
pub struct NodeListIter<N: AstNode> {
    list: NodeList<N>,
    front: usize,
    back: usize,
}

impl<N: AstNode> Iterator for NodeListIter<N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        if self.front >= self.back {
            return None;
        }
        let element = self.list.element(self.front);
        self.front += 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<N: AstNode> DoubleEndedIterator for NodeListIter<N> {
    fn next_back(&mut self) -> Option<N> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.list.element(self.back))
    }
}

impl<N: AstNode> ExactSizeIterator for NodeListIter<N> {}

impl<N: AstNode> FusedIterator for NodeListIter<N> {}
