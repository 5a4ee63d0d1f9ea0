//! Edge records and the unordered vertex pair used to index them.

use crate::{slot_list::ListHandle, vertex::VertexId};

/// Edge weight type.
///
/// `0` doubles as the "no such edge" answer of [`crate::WuGraph::weight`].
pub type Weight = i64;

/// Slot index of an [`EdgeRecord`] in the graph's edge arena.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct EdgeId(pub(crate) usize);

/// Unordered pair of vertex slots, stored as `(min, max)`.
///
/// Canonical storage makes `VertexPair::new(u, v) == VertexPair::new(v, u)`
/// and gives both orders the same hash.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct VertexPair {
    low: VertexId,
    high: VertexId,
}

impl VertexPair {
    pub(crate) fn new(left: VertexId, right: VertexId) -> Self {
        if left <= right {
            Self {
                low: left,
                high: right,
            }
        } else {
            Self {
                low: right,
                high: left,
            }
        }
    }

    pub(crate) fn is_loop(self) -> bool {
        self.low == self.high
    }
}

/// One stored direction of a logical edge.
///
/// A non-self edge is stored twice, once in each endpoint's adjacency list,
/// and the two records name each other through `twin`. A self-edge is stored
/// once with no twin.
#[derive(Clone, Debug)]
pub(crate) struct EdgeRecord {
    pub(crate) endpoints: (VertexId, VertexId),
    pub(crate) weight: Weight,
    pub(crate) twin: Option<EdgeId>,
    /// Vertex whose adjacency list holds this record.
    pub(crate) owner: VertexId,
    /// Node of this record inside the owner's adjacency list.
    pub(crate) entry: ListHandle,
}

impl EdgeRecord {
    pub(crate) fn pair(&self) -> VertexPair {
        VertexPair::new(self.endpoints.0, self.endpoints.1)
    }

    /// Returns the endpoint opposite `vertex`, or `vertex` itself for a
    /// self-edge.
    pub(crate) fn opposite(&self, vertex: VertexId) -> VertexId {
        let (left, right) = self.endpoints;
        if left == vertex { right } else { left }
    }

    pub(crate) fn touches(&self, vertex: VertexId) -> bool {
        self.endpoints.0 == vertex || self.endpoints.1 == vertex
    }
}
