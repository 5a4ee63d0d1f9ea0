//! Vertex identity layer.
//!
//! Caller keys are mapped to dense [`VertexId`] slots once, at insertion; all
//! adjacency and edge bookkeeping is expressed against those slots. The key
//! itself is kept only so results can hand back the caller's own values.

use crate::{
    edge::EdgeId,
    slot_list::{ListHandle, SlotList},
};

/// Dense slot index of a registered vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct VertexId(pub(crate) usize);

/// Registry entry for one vertex.
#[derive(Clone, Debug)]
pub(crate) struct VertexEntry<V> {
    pub(crate) key: V,
    /// Position of this vertex in the graph's insertion-order list.
    pub(crate) order: ListHandle,
    pub(crate) adjacency: SlotList<EdgeId>,
}

impl<V> VertexEntry<V> {
    pub(crate) const fn new(key: V, order: ListHandle) -> Self {
        Self {
            key,
            order,
            adjacency: SlotList::new(),
        }
    }

    pub(crate) const fn degree(&self) -> usize {
        self.adjacency.len()
    }
}
