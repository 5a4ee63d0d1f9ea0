//! Weighted undirected graph store.
//!
//! [`WuGraph`] keeps three structures in step:
//!
//! - a vertex registry mapping caller keys to dense slots, each slot owning
//!   the vertex's adjacency list, plus an insertion-order list of slots;
//! - an edge arena holding [`EdgeRecord`]s, one per stored direction;
//! - an edge index from unordered vertex pairs to one record of each logical
//!   edge.
//!
//! A non-self edge is stored as two twin records (one per endpoint) so that
//! each endpoint's degree and neighbour scan stay O(d); a self-edge is stored
//! once. Invalid requests never fail: queries answer `false`, `0` or `None`
//! and mutators leave the graph untouched.

mod invariants;
mod neighbors;

use std::{collections::HashMap, hash::Hash};

use tracing::{debug, error, trace};

use crate::{
    arena::Arena,
    edge::{EdgeId, EdgeRecord, VertexPair, Weight},
    slot_list::SlotList,
    vertex::{VertexEntry, VertexId},
};

pub use self::neighbors::Neighbors;

/// A weighted, undirected graph over caller-supplied vertex keys.
///
/// Self-edges are permitted and count once towards both degree and edge
/// count. Adding an existing edge updates its weight.
///
/// # Examples
/// ```
/// use wugraph_core::WuGraph;
///
/// let mut graph = WuGraph::new();
/// graph.add_vertex("a");
/// graph.add_vertex("b");
/// graph.add_edge(&"a", &"b", 4);
///
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.weight(&"b", &"a"), 4);
/// assert_eq!(graph.degree(&"a"), 1);
/// ```
#[derive(Clone, Debug)]
pub struct WuGraph<V> {
    index: HashMap<V, VertexId>,
    vertices: Arena<VertexEntry<V>>,
    order: SlotList<VertexId>,
    edges: Arena<EdgeRecord>,
    edge_index: HashMap<VertexPair, EdgeId>,
}

impl<V> Default for WuGraph<V> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            vertices: Arena::new(),
            order: SlotList::new(),
            edges: Arena::new(),
            edge_index: HashMap::new(),
        }
    }
}

impl<V> WuGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates a graph with no vertices or edges.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` vertices and `edges`
    /// logical edges before reallocating.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            index: HashMap::with_capacity(vertices),
            vertices: Arena::with_capacity(vertices),
            order: SlotList::with_capacity(vertices),
            edges: Arena::with_capacity(edges.saturating_mul(2)),
            edge_index: HashMap::with_capacity(edges),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.index.len()
    }

    /// Returns the number of logical edges; twin records count once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns every vertex key exactly once, in insertion order.
    ///
    /// # Examples
    /// ```
    /// use wugraph_core::WuGraph;
    ///
    /// let mut graph = WuGraph::new();
    /// for city in ["oslo", "lima", "pune"] {
    ///     graph.add_vertex(city);
    /// }
    /// graph.remove_vertex(&"lima");
    /// assert_eq!(graph.vertices(), vec!["oslo", "pune"]);
    /// ```
    #[must_use]
    pub fn vertices(&self) -> Vec<V> {
        self.order
            .iter()
            .filter_map(|(_, id)| self.entry(*id))
            .map(|entry| entry.key.clone())
            .collect()
    }

    /// Registers `vertex` with no incident edges. Does nothing if it is
    /// already present.
    pub fn add_vertex(&mut self, vertex: V) {
        if self.index.contains_key(&vertex) {
            return;
        }
        let key = vertex.clone();
        let order = &mut self.order;
        let slot = self
            .vertices
            .insert_with(|slot| VertexEntry::new(key, order.push_back(VertexId(slot))));
        self.index.insert(vertex, VertexId(slot));
        trace!(vertex = slot, "added vertex");
    }

    /// Removes `vertex` together with every edge incident on it. Does nothing
    /// if it is not present.
    pub fn remove_vertex(&mut self, vertex: &V) {
        let Some(&id) = self.index.get(vertex) else {
            return;
        };
        let incident: Vec<VertexPair> = self.entry(id).map_or_else(Vec::new, |entry| {
            entry
                .adjacency
                .iter()
                .filter_map(|(_, edge)| self.edges.get(edge.0))
                .map(EdgeRecord::pair)
                .collect()
        });
        let degree = incident.len();
        for pair in incident {
            self.remove_pair(pair);
        }

        self.index.remove(vertex);
        match self.vertices.remove(id.0) {
            Some(entry) => {
                self.order.remove(entry.order);
            }
            None => invariant_breach("registered vertex has no slot", id.0),
        }
        debug!(vertex = id.0, degree, "removed vertex");
    }

    /// Returns `true` when `vertex` is registered.
    #[must_use]
    pub fn is_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Returns the number of edges incident on `vertex`, or `0` when it is not
    /// registered. A self-edge adds one.
    #[must_use]
    pub fn degree(&self, vertex: &V) -> usize {
        self.lookup(vertex).map_or(0, |(_, entry)| entry.degree())
    }

    /// Lists the neighbours of `vertex` with the weight of each connecting
    /// edge, in adjacency order.
    ///
    /// Returns `None` when `vertex` is not registered or has degree zero. A
    /// self-edge reports `vertex` itself as the neighbour.
    ///
    /// # Examples
    /// ```
    /// use wugraph_core::WuGraph;
    ///
    /// let mut graph = WuGraph::new();
    /// graph.add_vertex(1);
    /// graph.add_vertex(2);
    /// assert!(graph.neighbors(&1).is_none());
    ///
    /// graph.add_edge(&1, &2, 9);
    /// graph.add_edge(&1, &1, 3);
    /// let neighbors = graph.neighbors(&1).expect("vertex 1 has edges");
    /// assert_eq!(neighbors.neighbors(), &[2, 1]);
    /// assert_eq!(neighbors.weights(), &[9, 3]);
    /// ```
    #[must_use]
    pub fn neighbors(&self, vertex: &V) -> Option<Neighbors<V>> {
        let (id, entry) = self.lookup(vertex)?;
        if entry.adjacency.is_empty() {
            return None;
        }
        let mut neighbors = Neighbors::with_capacity(entry.degree());
        for (_, edge) in entry.adjacency.iter() {
            let Some(record) = self.edges.get(edge.0) else {
                invariant_breach("adjacency entry has no edge record", edge.0);
                continue;
            };
            let other = record.opposite(id);
            let Some(other_entry) = self.entry(other) else {
                invariant_breach("edge endpoint is not registered", other.0);
                continue;
            };
            neighbors.push(other_entry.key.clone(), record.weight);
        }
        Some(neighbors)
    }

    /// Adds the edge `(u, v)` with `weight`, or updates its weight if it
    /// already exists. Does nothing unless both vertices are registered.
    ///
    /// # Examples
    /// ```
    /// use wugraph_core::WuGraph;
    ///
    /// let mut graph = WuGraph::new();
    /// graph.add_vertex('x');
    /// graph.add_vertex('y');
    /// graph.add_edge(&'x', &'y', 1);
    /// graph.add_edge(&'y', &'x', 6);
    /// assert_eq!(graph.edge_count(), 1);
    /// assert_eq!(graph.weight(&'x', &'y'), 6);
    ///
    /// graph.add_edge(&'x', &'z', 2);
    /// assert!(!graph.is_edge(&'x', &'z'));
    /// ```
    pub fn add_edge(&mut self, u: &V, v: &V, weight: Weight) {
        let (Some(&left), Some(&right)) = (self.index.get(u), self.index.get(v)) else {
            return;
        };
        let pair = VertexPair::new(left, right);
        if let Some(&edge) = self.edge_index.get(&pair) {
            self.set_weight(edge, weight);
            trace!(left = left.0, right = right.0, weight, "updated edge weight");
            return;
        }

        let Some(primary) = self.attach(left, (left, right), weight) else {
            return;
        };
        if left != right {
            let Some(twin) = self.attach(right, (left, right), weight) else {
                self.detach(primary);
                return;
            };
            self.link_twins(primary, twin);
        }
        self.edge_index.insert(pair, primary);
        trace!(left = left.0, right = right.0, weight, "added edge");
    }

    /// Removes the edge `(u, v)`. Does nothing unless both vertices are
    /// registered and the edge exists.
    pub fn remove_edge(&mut self, u: &V, v: &V) {
        let Some(pair) = self.pair_of(u, v) else {
            return;
        };
        if self.remove_pair(pair) {
            trace!("removed edge");
        }
    }

    /// Returns `true` when an edge joins `u` and `v`, in either order.
    #[must_use]
    pub fn is_edge(&self, u: &V, v: &V) -> bool {
        self.pair_of(u, v)
            .is_some_and(|pair| self.edge_index.contains_key(&pair))
    }

    /// Returns the weight of the edge `(u, v)`.
    ///
    /// Returns `0` when there is no such edge. The zero is a sentinel only: it
    /// does not mean an edge of weight zero exists, so check
    /// [`Self::is_edge`] when the distinction matters.
    #[must_use]
    pub fn weight(&self, u: &V, v: &V) -> Weight {
        self.pair_of(u, v)
            .and_then(|pair| self.edge_index.get(&pair))
            .and_then(|edge| self.edges.get(edge.0))
            .map_or(0, |record| record.weight)
    }

    /// Lists every logical edge once as `(u, v, weight)`.
    ///
    /// Edges are grouped by the vertex they were first added from, following
    /// vertex insertion order, and keep the endpoint order of that first
    /// `add_edge` call.
    #[must_use]
    pub fn edges(&self) -> Vec<(V, V, Weight)> {
        let mut listed = Vec::with_capacity(self.edge_count());
        for (_, id) in self.order.iter() {
            let Some(entry) = self.entry(*id) else {
                continue;
            };
            for (_, edge) in entry.adjacency.iter() {
                let Some(record) = self.edges.get(edge.0) else {
                    continue;
                };
                if self.edge_index.get(&record.pair()) != Some(edge) {
                    continue;
                }
                let (left, right) = record.endpoints;
                if let (Some(left), Some(right)) = (self.entry(left), self.entry(right)) {
                    listed.push((left.key.clone(), right.key.clone(), record.weight));
                }
            }
        }
        listed
    }

    /// Sums the weights of all logical edges.
    ///
    /// The sum is accumulated as `i128` so it cannot overflow for any graph
    /// that fits in memory.
    #[must_use]
    pub fn total_weight(&self) -> i128 {
        self.edge_index
            .values()
            .filter_map(|edge| self.edges.get(edge.0))
            .map(|record| i128::from(record.weight))
            .sum()
    }

    fn lookup(&self, vertex: &V) -> Option<(VertexId, &VertexEntry<V>)> {
        let id = *self.index.get(vertex)?;
        self.entry(id).map(|entry| (id, entry))
    }

    fn pair_of(&self, u: &V, v: &V) -> Option<VertexPair> {
        let left = self.index.get(u)?;
        let right = self.index.get(v)?;
        Some(VertexPair::new(*left, *right))
    }

    fn set_weight(&mut self, edge: EdgeId, weight: Weight) {
        let Some(record) = self.edges.get_mut(edge.0) else {
            invariant_breach("indexed edge has no record", edge.0);
            return;
        };
        record.weight = weight;
        let Some(twin) = record.twin else {
            return;
        };
        match self.edges.get_mut(twin.0) {
            Some(twin_record) => twin_record.weight = weight,
            None => invariant_breach("twin link has no record", twin.0),
        }
    }

    /// Stores a new record in `owner`'s adjacency list.
    fn attach(
        &mut self,
        owner: VertexId,
        endpoints: (VertexId, VertexId),
        weight: Weight,
    ) -> Option<EdgeId> {
        let Some(owner_entry) = self.vertices.get_mut(owner.0) else {
            invariant_breach("edge owner is not registered", owner.0);
            return None;
        };
        let slot = self.edges.insert_with(|slot| EdgeRecord {
            endpoints,
            weight,
            twin: None,
            owner,
            entry: owner_entry.adjacency.push_back(EdgeId(slot)),
        });
        Some(EdgeId(slot))
    }

    /// Drops a record and unlinks it from its owner's adjacency list.
    fn detach(&mut self, edge: EdgeId) -> Option<EdgeRecord> {
        let record = self.edges.remove(edge.0)?;
        let unlinked = self
            .vertices
            .get_mut(record.owner.0)
            .and_then(|owner| owner.adjacency.remove(record.entry));
        if unlinked != Some(edge) {
            invariant_breach("edge record was not in its owner's list", edge.0);
        }
        Some(record)
    }

    fn link_twins(&mut self, first: EdgeId, second: EdgeId) {
        if let Some(record) = self.edges.get_mut(first.0) {
            record.twin = Some(second);
        }
        if let Some(record) = self.edges.get_mut(second.0) {
            record.twin = Some(first);
        }
    }

    /// Removes the logical edge keyed by `pair`, both records included.
    /// Returns `false` when no such edge exists.
    fn remove_pair(&mut self, pair: VertexPair) -> bool {
        let Some(edge) = self.edge_index.remove(&pair) else {
            return false;
        };
        let Some(record) = self.detach(edge) else {
            invariant_breach("indexed edge has no record", edge.0);
            return true;
        };
        if let Some(twin) = record.twin {
            if self.detach(twin).is_none() {
                invariant_breach("twin link has no record", twin.0);
            }
        }
        true
    }

    fn entry(&self, id: VertexId) -> Option<&VertexEntry<V>> {
        self.vertices.get(id.0)
    }
}

/// Reports a broken internal invariant.
///
/// These indicate a defect in this module rather than bad input, so debug
/// builds stop immediately; release builds log and carry on with the
/// operation degraded to a no-op.
#[cold]
fn invariant_breach(context: &'static str, slot: usize) {
    error!(context, slot, "graph invariant breached");
    if cfg!(debug_assertions) {
        panic!("graph invariant breached: {context} (slot {slot})");
    }
}

#[cfg(test)]
mod property;
