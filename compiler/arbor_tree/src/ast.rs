//! Typed views over red nodes.
//!
//! A schema wraps `SyntaxNode` in one newtype per shape (or an enum per
//! category) and implements [`AstNode`] for it. The [`support`] functions
//! are what those typed accessors are built from.

use crate::{GreenNode, Kind, SyntaxNode};

/// A typed red node.
pub trait AstNode: Clone {
    type Kind: Kind;

    fn can_cast(kind: Self::Kind) -> bool;

    fn cast(node: SyntaxNode<Self::Kind>) -> Option<Self>;

    fn syntax(&self) -> &SyntaxNode<Self::Kind>;

    #[inline]
    fn kind(&self) -> Self::Kind {
        self.syntax().kind()
    }

    #[inline]
    fn green(&self) -> &GreenNode<Self::Kind> {
        self.syntax().green()
    }
}

/// Every red node is trivially a typed node of itself.
impl<K: Kind> AstNode for SyntaxNode<K> {
    type Kind = K;

    fn can_cast(_kind: K) -> bool {
        true
    }

    fn cast(node: SyntaxNode<K>) -> Option<Self> {
        Some(node)
    }

    fn syntax(&self) -> &SyntaxNode<K> {
        self
    }
}

/// Building blocks for typed accessors.
///
/// A child of the wrong kind, a missing required child, or a payload field
/// of the wrong type means the tree was built outside its shape. These
/// panic rather than return a value.
pub mod support {
    use crate::{AstNode, Kind, NodeList, SyntaxNode};

    fn cast<N: AstNode>(node: SyntaxNode<N::Kind>) -> N {
        let kind = node.kind();
        match N::cast(node) {
            Some(node) => node,
            None => panic!("node of kind {kind:?} does not fit the requested type"),
        }
    }

    /// Typed child in slot `slot`, if present.
    pub fn child<N: AstNode>(parent: &SyntaxNode<N::Kind>, slot: usize) -> Option<N> {
        parent.child(slot).map(cast::<N>)
    }

    /// Typed child in a required slot.
    pub fn required<N: AstNode>(parent: &SyntaxNode<N::Kind>, slot: usize) -> N {
        match child(parent, slot) {
            Some(node) => node,
            None => panic!("required slot {slot} of {:?} is absent", parent.kind()),
        }
    }

    /// Typed facade over a list slot.
    pub fn list<N: AstNode>(parent: &SyntaxNode<N::Kind>, slot: usize) -> NodeList<N> {
        NodeList::new(parent.child(slot))
    }

    pub fn int<K: Kind>(node: &SyntaxNode<K>, field: usize) -> i64 {
        match node.green().payload_at(field).as_int() {
            Some(value) => value,
            None => panic!("payload field {field} of {:?} is not an Int", node.kind()),
        }
    }

    pub fn float<K: Kind>(node: &SyntaxNode<K>, field: usize) -> f64 {
        match node.green().payload_at(field).as_float() {
            Some(value) => value,
            None => panic!("payload field {field} of {:?} is not a Float", node.kind()),
        }
    }

    pub fn boolean<K: Kind>(node: &SyntaxNode<K>, field: usize) -> bool {
        match node.green().payload_at(field).as_bool() {
            Some(value) => value,
            None => panic!("payload field {field} of {:?} is not a Bool", node.kind()),
        }
    }

    pub fn text<K: Kind>(node: &SyntaxNode<K>, field: usize) -> &str {
        match node.green().payload_at(field).as_text() {
            Some(value) => value,
            None => panic!("payload field {field} of {:?} is not Text", node.kind()),
        }
    }
}
