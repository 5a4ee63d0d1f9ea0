//! Error types for the wugraph core library.
//!
//! Graph operations never fail; they answer with sentinels or leave the graph
//! unchanged. The only error surface is [`GraphInvariantViolation`], reported
//! by [`crate::WuGraph::validate`] when the internal representation has been
//! corrupted.

use std::fmt;

use thiserror::Error;

use crate::Weight;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A structural invariant of [`crate::WuGraph`] that does not hold.
///
/// Vertex and edge fields are internal slot indices; they are only meaningful
/// for diagnostics.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphInvariantViolation {
    /// The key lookup, the vertex slots and the insertion-order list disagree
    /// on how many vertices exist.
    #[error("vertex registry disagrees: {keys} keys, {slots} slots, {ordered} ordered entries")]
    VertexCountMismatch {
        /// Entries in the key lookup.
        keys: usize,
        /// Occupied vertex slots.
        slots: usize,
        /// Entries in the insertion-order list.
        ordered: usize,
    },
    /// A key or order entry names a vertex slot that is empty or belongs to a
    /// different vertex.
    #[error("vertex slot {vertex} is not registered consistently")]
    UnregisteredVertex {
        /// The vertex slot that failed to resolve.
        vertex: usize,
    },
    /// An edge record names an endpoint that is not a registered vertex.
    #[error("edge {edge} references unregistered vertex {vertex}")]
    DanglingEdge {
        /// The edge slot holding the record.
        edge: usize,
        /// The unregistered endpoint.
        vertex: usize,
    },
    /// An edge record is not reachable from its owner's adjacency list, or its
    /// owner is not one of its endpoints.
    #[error("edge {edge} is misplaced in the adjacency list of vertex {owner}")]
    MisplacedRecord {
        /// The edge slot holding the record.
        edge: usize,
        /// The vertex whose adjacency list should hold the record.
        owner: usize,
    },
    /// A non-self edge record has no twin, or a self-edge record has one.
    #[error("edge {edge} has a twin link inconsistent with its endpoints")]
    TwinShape {
        /// The edge slot holding the record.
        edge: usize,
    },
    /// Two twin records do not point at each other or disagree on endpoints.
    #[error("edges {edge} and {twin} are not mutual twins")]
    AsymmetricTwin {
        /// The edge slot holding the record.
        edge: usize,
        /// The slot the record names as its twin.
        twin: usize,
    },
    /// Twin records hold different weights.
    #[error("edge {edge} has weight {weight} but its twin {twin} has {twin_weight}")]
    WeightMismatch {
        /// The edge slot holding the record.
        edge: usize,
        /// The twin slot.
        twin: usize,
        /// Weight stored on `edge`.
        weight: Weight,
        /// Weight stored on `twin`.
        twin_weight: Weight,
    },
    /// An edge record has no matching entry in the edge index, or the index
    /// names a record that does not exist or covers a different pair.
    #[error("edge {edge} is not indexed consistently")]
    UnindexedEdge {
        /// The edge slot involved.
        edge: usize,
    },
    /// The number of stored records does not match the indexed edge count.
    #[error("{records} edge records stored but {expected} expected for {indexed} indexed edges")]
    EdgeCountMismatch {
        /// Records present in the edge arena.
        records: usize,
        /// Records implied by the edge index.
        expected: usize,
        /// Logical edges in the edge index.
        indexed: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphInvariantViolation`] variants.
    enum GraphInvariantCode for GraphInvariantViolation {
        /// Vertex registry structures disagree on the vertex count.
        VertexCountMismatch => VertexCountMismatch { .. } => "GRAPH_VERTEX_COUNT_MISMATCH",
        /// A vertex slot is not registered consistently.
        UnregisteredVertex => UnregisteredVertex { .. } => "GRAPH_UNREGISTERED_VERTEX",
        /// An edge references an unregistered vertex.
        DanglingEdge => DanglingEdge { .. } => "GRAPH_DANGLING_EDGE",
        /// An edge record is misplaced in its adjacency list.
        MisplacedRecord => MisplacedRecord { .. } => "GRAPH_MISPLACED_RECORD",
        /// A twin link is inconsistent with the edge's endpoints.
        TwinShape => TwinShape { .. } => "GRAPH_TWIN_SHAPE",
        /// Twin records do not point at each other.
        AsymmetricTwin => AsymmetricTwin { .. } => "GRAPH_ASYMMETRIC_TWIN",
        /// Twin records hold different weights.
        WeightMismatch => WeightMismatch { .. } => "GRAPH_WEIGHT_MISMATCH",
        /// An edge is not indexed consistently.
        UnindexedEdge => UnindexedEdge { .. } => "GRAPH_UNINDEXED_EDGE",
        /// Stored records do not match the indexed edge count.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "GRAPH_EDGE_COUNT_MISMATCH",
    }
}
