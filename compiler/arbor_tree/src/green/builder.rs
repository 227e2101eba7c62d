//! Incremental construction of green list nodes.

use std::ops::Range;

use super::GreenNode;
use crate::Kind;

/// Append-only accumulator producing a green list node.
///
/// A rewrite that changes one element of a long list copies the untouched
/// prefix with [`GreenListBuilder::extend_from_list`] and pushes the rest,
/// instead of rebuilding the list once per edited element.
#[derive(Clone, Debug)]
pub struct GreenListBuilder<K: Kind> {
    elements: Vec<Option<GreenNode<K>>>,
}

impl<K: Kind> GreenListBuilder<K> {
    pub fn new() -> Self {
        GreenListBuilder {
            elements: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        GreenListBuilder {
            elements: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: GreenNode<K>) {
        debug_assert!(
            !element.kind().is_list(),
            "list elements cannot themselves be lists"
        );
        self.elements.push(Some(element));
    }

    /// Copy elements `range` of an existing list.
    ///
    /// Elements are shared, not cloned deeply.
    pub fn extend_from_list(&mut self, list: &GreenNode<K>, range: Range<usize>) {
        debug_assert!(
            list.kind().is_list(),
            "extend_from_list expects a list, got {:?}",
            list.kind()
        );
        self.elements.extend_from_slice(&list.slots()[range]);
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Build the list node and leave the builder empty for reuse.
    pub fn finish(&mut self) -> GreenNode<K> {
        let elements = std::mem::take(&mut self.elements);
        GreenNode::new(K::LIST, elements, Vec::new())
    }
}

impl<K: Kind> Default for GreenListBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kind> Extend<GreenNode<K>> for GreenListBuilder<K> {
    fn extend<I: IntoIterator<Item = GreenNode<K>>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<K: Kind> FromIterator<GreenNode<K>> for GreenListBuilder<K> {
    fn from_iter<I: IntoIterator<Item = GreenNode<K>>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}

/// Anything a factory accepts where a list slot is expected.
pub trait IntoGreenList<K: Kind> {
    fn into_green_list(self) -> GreenNode<K>;
}

impl<K: Kind> IntoGreenList<K> for GreenNode<K> {
    fn into_green_list(self) -> GreenNode<K> {
        debug_assert!(
            self.kind().is_list(),
            "expected a list node, got {:?}",
            self.kind()
        );
        self
    }
}

impl<K: Kind> IntoGreenList<K> for GreenListBuilder<K> {
    fn into_green_list(mut self) -> GreenNode<K> {
        self.finish()
    }
}

impl<K: Kind> IntoGreenList<K> for &mut GreenListBuilder<K> {
    fn into_green_list(self) -> GreenNode<K> {
        self.finish()
    }
}

impl<K: Kind> IntoGreenList<K> for Vec<GreenNode<K>> {
    fn into_green_list(self) -> GreenNode<K> {
        GreenNode::list(self)
    }
}
