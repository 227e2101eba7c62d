//! Canonical (green) nodes.
//!
//! A green node is immutable and knows nothing about its position: no
//! parent, no offset. Children are themselves green nodes behind an `Arc`,
//! so a subtree can be shared by any number of trees at once. Equality is
//! structural (kind + payload + children, order-sensitive); identity is
//! available separately through [`GreenNode::ptr_eq`].
//!
//! # Slots and occupancy
//!
//! A node has a fixed number of slots, set by its shape. A slot is absent,
//! holds a single node, or holds a list node (kind [`Kind::LIST`]). The
//! logical children of a node are its slots flattened: a list slot
//! contributes its elements, an absent slot contributes nothing. See
//! [`occupancy`].

mod builder;
mod cache;
mod validate;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;
use smallvec::SmallVec;

use crate::{Kind, Payload};

pub use builder::{GreenListBuilder, IntoGreenList};
pub use cache::GreenCache;
pub use validate::ShapeError;

/// Immutable, position-free, shareable tree node.
///
/// Cloning is an `Arc` bump.
pub struct GreenNode<K: Kind>(Arc<GreenNodeData<K>>);

struct GreenNodeData<K: Kind> {
    kind: K,
    slots: Box<[Option<GreenNode<K>>]>,
    payload: Box<[Payload]>,
    /// Sum of slot occupancies, fixed at construction.
    slot_count: usize,
    /// Structural hash, fixed at construction.
    hash: u64,
}

/// Number of logical children a slot contributes.
///
/// `0` when absent, the element count for a list, `1` otherwise. Every
/// logical index computation (green and red) goes through this.
#[inline]
pub fn occupancy<K: Kind>(slot: Option<&GreenNode<K>>) -> usize {
    match slot {
        None => 0,
        Some(node) if node.kind().is_list() => node.slot_count(),
        Some(_) => 1,
    }
}

/// Where a logical child index lands in a node's slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum SlotPosition {
    /// The slot holds the child directly.
    Slot(usize),
    /// The slot holds a list; the child is the element at the given index.
    InList(usize, usize),
}

/// Map a logical child index onto a slot, skipping absent slots and
/// expanding list slots.
pub(crate) fn locate<K: Kind>(
    slots: &[Option<GreenNode<K>>],
    mut index: usize,
) -> Option<SlotPosition> {
    for (slot, child) in slots.iter().enumerate() {
        let Some(child) = child else { continue };
        let count = occupancy(Some(child));
        if index < count {
            return Some(if child.kind().is_list() {
                SlotPosition::InList(slot, index)
            } else {
                SlotPosition::Slot(slot)
            });
        }
        index -= count;
    }
    None
}

impl<K: Kind> GreenNode<K> {
    /// Construct a node.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the node does not fit its kind's shape:
    /// wrong kind for the shape, wrong slot or payload count, a required
    /// child absent, a child of a kind its slot does not accept.
    pub fn new(kind: K, slots: Vec<Option<GreenNode<K>>>, payload: Vec<Payload>) -> Self {
        if cfg!(debug_assertions) {
            if let Err(err) = validate::check(kind, &slots, &payload) {
                panic!("malformed green node: {err}");
            }
        }
        Self::build(kind, slots.into_boxed_slice(), payload.into_boxed_slice())
    }

    /// Construct a node, reporting shape violations as a value.
    ///
    /// Runs the same checks as [`GreenNode::new`] in every build profile.
    pub fn try_new(
        kind: K,
        slots: Vec<Option<GreenNode<K>>>,
        payload: Vec<Payload>,
    ) -> Result<Self, ShapeError> {
        validate::check(kind, &slots, &payload)?;
        Ok(Self::build(
            kind,
            slots.into_boxed_slice(),
            payload.into_boxed_slice(),
        ))
    }

    /// Construct a list node from its elements.
    pub fn list(elements: impl IntoIterator<Item = GreenNode<K>>) -> Self {
        let slots: Vec<_> = elements.into_iter().map(Some).collect();
        Self::new(K::LIST, slots, Vec::new())
    }

    fn build(kind: K, mut slots: Box<[Option<GreenNode<K>>]>, payload: Box<[Payload]>) -> Self {
        // An empty list slot is stored as absent, so the two spellings of
        // "no elements" are the same tree.
        if !kind.is_list() {
            for slot in slots.iter_mut() {
                if slot.as_ref().is_some_and(|child| child.kind().is_list() && child.arity() == 0) {
                    *slot = None;
                }
            }
        }

        let slot_count = slots.iter().map(|slot| occupancy(slot.as_ref())).sum();

        let mut hasher = FxHasher::default();
        kind.hash(&mut hasher);
        payload.hash(&mut hasher);
        for slot in &*slots {
            slot.as_ref().map(|child| child.0.hash).hash(&mut hasher);
        }

        GreenNode(Arc::new(GreenNodeData {
            kind,
            slots,
            payload,
            slot_count,
            hash: hasher.finish(),
        }))
    }

    #[inline]
    pub fn kind(&self) -> K {
        self.0.kind
    }

    /// Raw slots in declaration order.
    #[inline]
    pub fn slots(&self) -> &[Option<GreenNode<K>>] {
        &self.0.slots
    }

    /// Number of declared slots (for a list: number of elements).
    #[inline]
    pub fn arity(&self) -> usize {
        self.0.slots.len()
    }

    /// Child in slot `index`, or `None` if the slot is absent.
    ///
    /// Slot indices come from code that knows the node's shape; an index
    /// past the arity is a contract violation.
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&GreenNode<K>> {
        debug_assert!(
            index < self.arity(),
            "slot {index} out of range for {:?} with {} slots",
            self.kind(),
            self.arity(),
        );
        self.0.slots.get(index).and_then(Option::as_ref)
    }

    /// Number of logical children: the sum of each slot's [`occupancy`].
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.0.slot_count
    }

    #[inline]
    pub fn payload(&self) -> &[Payload] {
        &self.0.payload
    }

    /// Payload field `index`.
    ///
    /// # Panics
    ///
    /// Panics if the node has no such field.
    pub fn payload_at(&self, index: usize) -> &Payload {
        match self.0.payload.get(index) {
            Some(payload) => payload,
            None => panic!(
                "payload field {index} out of range for {:?} with {} fields",
                self.kind(),
                self.0.payload.len(),
            ),
        }
    }

    /// Hash of kind, payload, and children, computed once at construction.
    #[inline]
    pub fn structural_hash(&self) -> u64 {
        self.0.hash
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Logical child `index`, flattening list slots.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.slot_count()`.
    pub fn child_at(&self, index: usize) -> &GreenNode<K> {
        match locate(&self.0.slots, index) {
            Some(SlotPosition::Slot(slot)) => self.slot_node(slot),
            Some(SlotPosition::InList(slot, element)) => self.slot_node(slot).child_at(element),
            None => panic!(
                "child index {index} out of range for {:?} with {} children",
                self.kind(),
                self.slot_count(),
            ),
        }
    }

    /// Slot known to be present.
    fn slot_node(&self, slot: usize) -> &GreenNode<K> {
        match self.slot(slot) {
            Some(node) => node,
            None => panic!("slot {slot} of {:?} is absent", self.kind()),
        }
    }

    /// Direct logical children, skipping absent slots and flattening lists.
    pub fn child_nodes(&self) -> GreenChildren<'_, K> {
        GreenChildren::new(self)
    }

    /// All descendants in pre-order, not including `self`.
    pub fn descendants(&self) -> GreenDescendants<'_, K> {
        GreenDescendants::new(self)
    }

    /// Deep structural comparison.
    ///
    /// Shared subtrees short-circuit on identity; differing hashes reject
    /// without descending. Uses an explicit stack, so depth is unbounded.
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        let mut stack: SmallVec<[(&GreenNode<K>, &GreenNode<K>); 16]> = SmallVec::new();
        stack.push((self, other));

        while let Some((left, right)) = stack.pop() {
            if left.ptr_eq(right) {
                continue;
            }
            if left.0.hash != right.0.hash
                || left.0.kind != right.0.kind
                || left.0.slot_count != right.0.slot_count
                || left.0.slots.len() != right.0.slots.len()
                || left.0.payload != right.0.payload
            {
                return false;
            }
            for pair in left.0.slots.iter().zip(right.0.slots.iter()) {
                match pair {
                    (Some(l), Some(r)) => stack.push((l, r)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }

    /// Copy of this node with slot `index` replaced.
    pub fn with_slot(&self, index: usize, child: Option<GreenNode<K>>) -> Self {
        let mut slots = self.0.slots.to_vec();
        debug_assert!(
            index < slots.len(),
            "slot {index} out of range for {:?} with {} slots",
            self.kind(),
            slots.len(),
        );
        slots[index] = child;
        Self::new(self.kind(), slots, self.0.payload.to_vec())
    }

    /// Copy of this node with its payload replaced.
    pub fn with_payload(&self, payload: Vec<Payload>) -> Self {
        Self::new(self.kind(), self.0.slots.to_vec(), payload)
    }
}

/// Release children iteratively so dropping a deep tree does not recurse.
impl<K: Kind> Drop for GreenNodeData<K> {
    fn drop(&mut self) {
        let mut stack: Vec<GreenNode<K>> = std::mem::take(&mut self.slots)
            .into_vec()
            .into_iter()
            .flatten()
            .collect();
        while let Some(node) = stack.pop() {
            if let Ok(mut data) = Arc::try_unwrap(node.0) {
                stack.extend(std::mem::take(&mut data.slots).into_vec().into_iter().flatten());
            }
        }
    }
}

impl<K: Kind> Clone for GreenNode<K> {
    #[inline]
    fn clone(&self) -> Self {
        GreenNode(Arc::clone(&self.0))
    }
}

/// Structural equality; see [`GreenNode::is_equivalent_to`].
impl<K: Kind> PartialEq for GreenNode<K> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equivalent_to(other)
    }
}

impl<K: Kind> Eq for GreenNode<K> {}

impl<K: Kind> Hash for GreenNode<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.hash);
    }
}

/// Nesting depth past which `Debug` output elides subtrees.
const DEBUG_DEPTH_LIMIT: usize = 64;

impl<K: Kind> fmt::Debug for GreenNode<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        DebugAtDepth {
            node: self,
            depth: 0,
        }
        .fmt(f)
    }
}

struct DebugAtDepth<'a, K: Kind> {
    node: &'a GreenNode<K>,
    depth: usize,
}

impl<K: Kind> fmt::Debug for DebugAtDepth<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.node;
        if self.depth >= DEBUG_DEPTH_LIMIT && node.arity() > 0 {
            return write!(f, "{}(..{} children)", node.kind().name(), node.slot_count());
        }
        let mut tuple = f.debug_tuple(node.kind().name());
        for payload in node.payload() {
            tuple.field(payload);
        }
        for slot in node.slots() {
            match slot {
                Some(child) => tuple.field(&DebugAtDepth {
                    node: child,
                    depth: self.depth + 1,
                }),
                None => tuple.field(&format_args!("_")),
            };
        }
        tuple.finish()
    }
}

/// Iterator over a green node's logical children.
///
/// Cheap to clone; a clone restarts from the clone point.
#[derive(Clone)]
pub struct GreenChildren<'a, K: Kind> {
    stack: SmallVec<[std::slice::Iter<'a, Option<GreenNode<K>>>; 2]>,
}

impl<'a, K: Kind> GreenChildren<'a, K> {
    fn new(node: &'a GreenNode<K>) -> Self {
        let mut stack = SmallVec::new();
        stack.push(node.0.slots.iter());
        GreenChildren { stack }
    }
}

impl<'a, K: Kind> Iterator for GreenChildren<'a, K> {
    type Item = &'a GreenNode<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                None => {
                    self.stack.pop();
                }
                Some(None) => {}
                Some(Some(child)) if child.kind().is_list() => {
                    self.stack.push(child.0.slots.iter());
                }
                Some(Some(child)) => return Some(child),
            }
        }
    }
}

/// Pre-order iterator over a green node's descendants.
///
/// Children are pushed in reverse so they pop in source order.
pub struct GreenDescendants<'a, K: Kind> {
    stack: Vec<&'a GreenNode<K>>,
}

impl<'a, K: Kind> GreenDescendants<'a, K> {
    fn new(root: &'a GreenNode<K>) -> Self {
        let mut stack: Vec<_> = root.child_nodes().collect();
        stack.reverse();
        GreenDescendants { stack }
    }
}

impl<'a, K: Kind> Iterator for GreenDescendants<'a, K> {
    type Item = &'a GreenNode<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let start = self.stack.len();
        self.stack.extend(node.child_nodes());
        self.stack[start..].reverse();
        Some(node)
    }
}
