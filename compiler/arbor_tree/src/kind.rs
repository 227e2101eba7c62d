//! Node kinds and the static shape table.
//!
//! A schema supplies a closed `Copy` enum implementing [`Kind`]. Each kind
//! except the list kind maps to a [`Shape`]: the ordered list of child slots
//! and payload fields that nodes of that kind carry. Several kinds may share
//! one shape (e.g. every binary operator).

use std::fmt;
use std::hash::Hash;

use crate::payload::PayloadType;

/// Closed enumeration of node categories.
pub trait Kind: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The kind carried by every green list node.
    const LIST: Self;

    /// Shape of nodes of this kind. `None` only for [`Kind::LIST`].
    fn shape(self) -> Option<&'static Shape<Self>>;

    /// Display name used in diagnostics.
    fn name(self) -> &'static str;

    #[inline]
    fn is_list(self) -> bool {
        self == Self::LIST
    }
}

/// Static layout of a node: which kinds use it, its slots, and its payload.
#[derive(Debug)]
pub struct Shape<K: 'static> {
    pub name: &'static str,
    /// Kinds that may be constructed with this shape.
    pub kinds: &'static [K],
    pub slots: &'static [SlotSpec<K>],
    pub payload: &'static [PayloadSpec],
}

impl<K: Kind> Shape<K> {
    #[inline]
    pub fn arity(&self) -> usize {
        self.slots.len()
    }

    pub fn allows_kind(&self, kind: K) -> bool {
        self.kinds.contains(&kind)
    }

    /// Index of the slot called `name`.
    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name == name)
    }

    /// Index of the payload field called `name`.
    pub fn payload_index(&self, name: &str) -> Option<usize> {
        self.payload.iter().position(|field| field.name == name)
    }
}

/// How many children a slot holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotArity {
    /// Exactly one node, never absent.
    Required,
    /// Zero or one node.
    Optional,
    /// A list node. Absent means empty, and an empty list is stored as absent.
    List,
}

/// One child slot of a shape.
#[derive(Debug)]
pub struct SlotSpec<K: 'static> {
    pub name: &'static str,
    pub arity: SlotArity,
    /// Kinds a child (or list element) may have. Empty accepts any kind.
    pub accepts: &'static [K],
}

impl<K> SlotSpec<K> {
    pub const fn required(name: &'static str, accepts: &'static [K]) -> Self {
        SlotSpec {
            name,
            arity: SlotArity::Required,
            accepts,
        }
    }

    pub const fn optional(name: &'static str, accepts: &'static [K]) -> Self {
        SlotSpec {
            name,
            arity: SlotArity::Optional,
            accepts,
        }
    }

    pub const fn list(name: &'static str, accepts: &'static [K]) -> Self {
        SlotSpec {
            name,
            arity: SlotArity::List,
            accepts,
        }
    }
}

impl<K: Kind> SlotSpec<K> {
    pub fn accepts_kind(&self, kind: K) -> bool {
        self.accepts.is_empty() || self.accepts.contains(&kind)
    }
}

/// One scalar payload field of a shape.
#[derive(Debug)]
pub struct PayloadSpec {
    pub name: &'static str,
    pub ty: PayloadType,
}

impl PayloadSpec {
    pub const fn new(name: &'static str, ty: PayloadType) -> Self {
        PayloadSpec { name, ty }
    }
}
