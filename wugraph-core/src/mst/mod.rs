//! Minimum spanning tree construction.
//!
//! Implements Kruskal's algorithm over a [`WuGraph`]: gather every incident
//! edge through [`WuGraph::neighbors`], stable-sort the candidates by weight,
//! and keep each edge whose endpoints a union-find still places in different
//! components. The result is a new graph on the same vertex set; the input is
//! only read.

mod union_find;

use std::{collections::HashMap, hash::Hash};

use tracing::{debug, instrument};

use crate::{Weight, WuGraph};

use self::union_find::DisjointSet;

/// Selects which incidences of each edge enter Kruskal's working list.
///
/// Every non-self edge is visible from both endpoints. Both modes yield a
/// minimum spanning forest; they differ only in sort cost and, among
/// equal-weight alternatives, in which edge wins a tie.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeScan {
    /// Collect each edge from every endpoint, so non-self edges appear twice.
    /// The duplicate is rejected by the cycle check.
    #[default]
    AllIncidences,
    /// Collect each edge only from the endpoint that comes first in vertex
    /// insertion order, so every edge appears once.
    LowerIndexEndpoint,
}

/// Configured Kruskal runner.
///
/// # Examples
/// ```
/// use wugraph_core::{EdgeScan, Kruskal, WuGraph};
///
/// let mut graph = WuGraph::new();
/// for v in ["a", "b", "c"] {
///     graph.add_vertex(v);
/// }
/// graph.add_edge(&"a", &"b", 5);
/// graph.add_edge(&"b", &"c", 3);
/// graph.add_edge(&"a", &"c", 10);
///
/// let kruskal = Kruskal::builder()
///     .with_edge_scan(EdgeScan::LowerIndexEndpoint)
///     .build();
/// let tree = kruskal.run(&graph);
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.total_weight(), 8);
/// assert!(!tree.is_edge(&"a", &"c"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Kruskal {
    edge_scan: EdgeScan,
}

/// Configures [`Kruskal`] runners.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct KruskalBuilder {
    edge_scan: EdgeScan,
}

impl KruskalBuilder {
    /// Creates a builder with the default [`EdgeScan::AllIncidences`] scan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how candidate edges are collected.
    #[must_use]
    pub const fn with_edge_scan(mut self, edge_scan: EdgeScan) -> Self {
        self.edge_scan = edge_scan;
        self
    }

    /// Returns the configured edge scan.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_scan(&self) -> EdgeScan { self.edge_scan }

    /// Builds the runner.
    #[must_use]
    pub const fn build(self) -> Kruskal {
        Kruskal {
            edge_scan: self.edge_scan,
        }
    }
}

/// One entry of the working list: an edge between two dense vertex indices.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Candidate {
    weight: Weight,
    source: usize,
    target: usize,
}

impl Kruskal {
    /// Starts configuring a runner.
    #[must_use]
    pub fn builder() -> KruskalBuilder {
        KruskalBuilder::new()
    }

    /// Returns the configured edge scan.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_scan(&self) -> EdgeScan { self.edge_scan }

    /// Computes a minimum spanning forest of `graph`.
    ///
    /// The returned graph has exactly the vertices of `graph` (in the same
    /// insertion order) and a minimum-weight acyclic subset of its edges that
    /// spans every connected component. For a connected input that is a
    /// spanning tree with `vertex_count() - 1` edges. Self-edges never appear
    /// in the result. Connectivity is not reported; compare the edge count
    /// against `vertex_count() - 1` to detect a forest.
    #[instrument(
        name = "mst.kruskal",
        skip_all,
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            scan = ?self.edge_scan
        ),
    )]
    pub fn run<V>(&self, graph: &WuGraph<V>) -> WuGraph<V>
    where
        V: Eq + Hash + Clone,
    {
        let vertices = graph.vertices();
        let mut forest = WuGraph::with_capacity(vertices.len(), vertices.len().saturating_sub(1));
        let mut dense = HashMap::with_capacity(vertices.len());
        for (index, vertex) in vertices.iter().enumerate() {
            forest.add_vertex(vertex.clone());
            dense.insert(vertex, index);
        }

        let mut candidates = self.collect_candidates(graph, &vertices, &dense);
        // Stable: equal weights keep scan order.
        candidates.sort_by_key(|candidate| candidate.weight);

        let mut components = DisjointSet::new(vertices.len());
        let spanning = vertices.len().saturating_sub(1);
        let mut accepted = 0_usize;
        for candidate in &candidates {
            if accepted == spanning {
                break;
            }
            if !components.union(candidate.source, candidate.target) {
                continue;
            }
            if let (Some(source), Some(target)) =
                (vertices.get(candidate.source), vertices.get(candidate.target))
            {
                forest.add_edge(source, target, candidate.weight);
                accepted = accepted.saturating_add(1);
            }
        }

        debug!(
            candidates = candidates.len(),
            accepted,
            components = components.components(),
            "minimum spanning forest built"
        );
        forest
    }

    fn collect_candidates<V>(
        &self,
        graph: &WuGraph<V>,
        vertices: &[V],
        dense: &HashMap<&V, usize>,
    ) -> Vec<Candidate>
    where
        V: Eq + Hash + Clone,
    {
        let mut candidates = Vec::with_capacity(graph.edge_count().saturating_mul(2));
        for (source, vertex) in vertices.iter().enumerate() {
            let Some(neighbors) = graph.neighbors(vertex) else {
                continue;
            };
            for (neighbor, weight) in neighbors.iter() {
                let Some(&target) = dense.get(neighbor) else {
                    continue;
                };
                let keep = match self.edge_scan {
                    EdgeScan::AllIncidences => true,
                    EdgeScan::LowerIndexEndpoint => source <= target,
                };
                if keep {
                    candidates.push(Candidate {
                        weight,
                        source,
                        target,
                    });
                }
            }
        }
        candidates
    }
}

/// Computes a minimum spanning forest of `graph` with the default
/// configuration.
///
/// Equivalent to `Kruskal::default().run(graph)`. The input graph is not
/// modified.
///
/// # Examples
/// ```
/// use wugraph_core::{WuGraph, minimum_spanning_tree};
///
/// let mut graph = WuGraph::new();
/// graph.add_vertex(1);
/// graph.add_vertex(2);
/// graph.add_edge(&1, &1, 7);
/// graph.add_edge(&1, &2, 4);
///
/// let tree = minimum_spanning_tree(&graph);
/// assert_eq!(tree.vertices(), graph.vertices());
/// assert!(tree.is_edge(&1, &2));
/// assert!(!tree.is_edge(&1, &1));
/// ```
#[must_use]
pub fn minimum_spanning_tree<V>(graph: &WuGraph<V>) -> WuGraph<V>
where
    V: Eq + Hash + Clone,
{
    Kruskal::default().run(graph)
}

#[cfg(test)]
mod property;
