//! Seeded synthetic graphs for benchmarks.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first and the remaining edges join uniformly random distinct pairs.

use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wugraph_core::{Weight, WuGraph};

use crate::error::BenchSetupError;
use crate::params::GraphBenchParams;

/// Upper bound (inclusive) on generated edge weights.
const MAX_WEIGHT: Weight = 1_000;

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Number of distinct logical edges, at least `vertex_count - 1`.
    pub edge_count: usize,
    /// RNG seed; equal configs generate equal graphs.
    pub seed: u64,
}

/// A generated graph together with the edge list that built it.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    edges: Vec<(usize, usize, Weight)>,
    graph: WuGraph<usize>,
    params: GraphBenchParams,
}

impl SyntheticGraph {
    /// Generates a connected graph with exactly the requested sizes.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when `vertex_count` is zero or the edge
    /// count cannot be met with distinct non-self pairs.
    ///
    /// # Examples
    /// ```
    /// use wugraph_benches::source::{SyntheticGraph, SyntheticGraphConfig};
    ///
    /// let synthetic = SyntheticGraph::generate(&SyntheticGraphConfig {
    ///     vertex_count: 50,
    ///     edge_count: 120,
    ///     seed: 7,
    /// })?;
    /// assert_eq!(synthetic.graph().edge_count(), 120);
    /// # Ok::<(), wugraph_benches::error::BenchSetupError>(())
    /// ```
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, BenchSetupError> {
        let SyntheticGraphConfig {
            vertex_count,
            edge_count,
            seed,
        } = *config;
        if vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        let required = vertex_count - 1;
        if edge_count < required {
            return Err(BenchSetupError::TooFewEdges {
                requested: edge_count,
                vertices: vertex_count,
            });
        }
        let available = required
            .checked_mul(vertex_count)
            .map(|pairs| pairs >> 1)
            .ok_or(BenchSetupError::PairCountOverflow {
                vertices: vertex_count,
            })?;
        if edge_count > available {
            return Err(BenchSetupError::TooManyEdges {
                requested: edge_count,
                available,
            });
        }

        let mut rng = SmallRng::seed_from_u64(seed);
        let mut seen = HashSet::with_capacity(edge_count);
        let mut edges = Vec::with_capacity(edge_count);
        for vertex in 1..vertex_count {
            let parent = rng.gen_range(0..vertex);
            seen.insert((parent, vertex));
            edges.push((parent, vertex, rng.gen_range(1..=MAX_WEIGHT)));
        }
        while edges.len() < edge_count {
            let u = rng.gen_range(0..vertex_count);
            let v = rng.gen_range(0..vertex_count);
            if u != v && seen.insert((u.min(v), u.max(v))) {
                edges.push((u, v, rng.gen_range(1..=MAX_WEIGHT)));
            }
        }

        let graph = build_graph(vertex_count, &edges);
        Ok(Self {
            edges,
            graph,
            params: GraphBenchParams {
                vertex_count,
                edge_count,
            },
        })
    }

    /// The generated graph.
    #[must_use]
    pub const fn graph(&self) -> &WuGraph<usize> {
        &self.graph
    }

    /// The edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[(usize, usize, Weight)] {
        &self.edges
    }

    /// Size label for benchmark IDs.
    #[must_use]
    pub const fn params(&self) -> GraphBenchParams {
        self.params
    }
}

/// Replays `edges` into a fresh graph on vertices `0..vertex_count`.
#[must_use]
pub fn build_graph(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> WuGraph<usize> {
    let mut graph = WuGraph::with_capacity(vertex_count, edges.len());
    for vertex in 0..vertex_count {
        graph.add_vertex(vertex);
    }
    for (u, v, weight) in edges {
        graph.add_edge(u, v, *weight);
    }
    graph
}
