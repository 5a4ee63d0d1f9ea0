//! Benchmark setup error type.

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum BenchSetupError {
    /// A zero value was passed where a non-zero count was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
    /// Too few edges were requested to connect every vertex.
    #[error("{requested} edges cannot connect {vertices} vertices")]
    TooFewEdges {
        /// Requested edge count.
        requested: usize,
        /// Vertex count of the graph.
        vertices: usize,
    },
    /// More edges were requested than distinct vertex pairs exist.
    #[error("{requested} edges exceed the {available} distinct pairs available")]
    TooManyEdges {
        /// Requested edge count.
        requested: usize,
        /// Distinct non-self pairs for the vertex count.
        available: usize,
    },
    /// The number of distinct vertex pairs does not fit in `usize`.
    #[error("pair count for {vertices} vertices overflows usize")]
    PairCountOverflow {
        /// Vertex count of the graph.
        vertices: usize,
    },
}
