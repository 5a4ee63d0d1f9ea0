//! Benchmark parameter labels.

use std::fmt;

/// Size of a synthetic benchmark graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GraphBenchParams {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of logical edges.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}
