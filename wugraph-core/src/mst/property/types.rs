//! Fixture types for MST property tests.

use test_strategy::Arbitrary;

use crate::{Weight, WuGraph};

/// Topology and weight pattern of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum GraphShape {
    /// Random spanning path plus a few extra edges.
    #[weight(2)]
    Sparse,
    /// Most vertex pairs connected.
    #[weight(2)]
    Dense,
    /// Edges drawn from a pool of one to three weights, stressing ties.
    #[weight(3)]
    ManyIdentical,
    /// Two to four components with no edges between them.
    #[weight(2)]
    Disconnected,
    /// Sparse graph sprinkled with self-edges and repeated edges whose later
    /// weight overrides the earlier one.
    #[weight(2)]
    Noisy,
}

/// Generated input for an MST property.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// `add_edge` calls in application order; repeats update the weight.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Shape used during generation.
    pub shape: GraphShape,
}

impl MstFixture {
    /// Builds the graph by replaying the fixture through the public API.
    pub(super) fn build_graph(&self) -> WuGraph<usize> {
        let mut graph = WuGraph::with_capacity(self.vertex_count, self.edges.len());
        for vertex in 0..self.vertex_count {
            graph.add_vertex(vertex);
        }
        for (u, v, weight) in &self.edges {
            graph.add_edge(u, v, *weight);
        }
        graph
    }
}
