//! Deduplication of structurally equal green nodes.
//!
//! Leaves repeat heavily (the same identifier, the same literal), and a
//! subtree built twice from equal inputs is equivalent anyway. Interning
//! through a cache collapses the copies into one allocation, which also
//! turns later equivalence checks into pointer comparisons.

use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::GreenNode;
use crate::{Kind, Payload};

/// Thread-safe green node cache keyed by structural hash.
pub struct GreenCache<K: Kind> {
    buckets: Mutex<FxHashMap<u64, SmallVec<[GreenNode<K>; 1]>>>,
    hits: AtomicUsize,
}

impl<K: Kind> GreenCache<K> {
    pub fn new() -> Self {
        GreenCache {
            buckets: Mutex::new(FxHashMap::default()),
            hits: AtomicUsize::new(0),
        }
    }

    /// Return the cached node equivalent to `node`, caching `node` if none.
    pub fn intern(&self, node: GreenNode<K>) -> GreenNode<K> {
        let mut buckets = self.buckets.lock();
        let bucket = buckets.entry(node.structural_hash()).or_default();
        if let Some(existing) = bucket.iter().find(|cached| cached.is_equivalent_to(&node)) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(kind = ?node.kind(), "green cache hit");
            return existing.clone();
        }
        bucket.push(node.clone());
        node
    }

    /// Build a node and intern it.
    pub fn node(
        &self,
        kind: K,
        slots: Vec<Option<GreenNode<K>>>,
        payload: Vec<Payload>,
    ) -> GreenNode<K> {
        self.intern(GreenNode::new(kind, slots, payload))
    }

    /// Number of distinct nodes held.
    pub fn len(&self) -> usize {
        self.buckets.lock().values().map(SmallVec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.lock().is_empty()
    }

    /// Number of `intern` calls answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        let mut buckets = self.buckets.lock();
        tracing::debug!(
            nodes = buckets.values().map(SmallVec::len).sum::<usize>(),
            hits = self.hits.load(Ordering::Relaxed),
            "clearing green cache"
        );
        buckets.clear();
    }
}

impl<K: Kind> Default for GreenCache<K> {
    fn default() -> Self {
        Self::new()
    }
}
