//! Neighbour listing returned by [`super::WuGraph::neighbors`].

use crate::Weight;

/// Parallel lists of neighbour keys and connecting edge weights.
///
/// Entry `i` of [`Self::neighbors`] is joined to the queried vertex by an
/// edge of weight `weights()[i]`. Both lists always have the same length,
/// equal to the queried vertex's degree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Neighbors<V> {
    neighbors: Vec<V>,
    weights: Vec<Weight>,
}

impl<V> Neighbors<V> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            neighbors: Vec::with_capacity(capacity),
            weights: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, neighbor: V, weight: Weight) {
        self.neighbors.push(neighbor);
        self.weights.push(weight);
    }

    /// Returns the neighbour keys.
    #[must_use]
    #[rustfmt::skip]
    pub fn neighbors(&self) -> &[V] { &self.neighbors }

    /// Returns the edge weights, aligned with [`Self::neighbors`].
    #[must_use]
    #[rustfmt::skip]
    pub fn weights(&self) -> &[Weight] { &self.weights }

    /// Returns the number of incident edges listed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Always `false` for listings from [`super::WuGraph::neighbors`], which
    /// returns `None` for a vertex with no incident edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterates `(neighbor, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Weight)> {
        self.neighbors.iter().zip(self.weights.iter().copied())
    }

    /// Splits the listing into its neighbour and weight vectors.
    #[must_use]
    pub fn into_parts(self) -> (Vec<V>, Vec<Weight>) {
        (self.neighbors, self.weights)
    }
}
