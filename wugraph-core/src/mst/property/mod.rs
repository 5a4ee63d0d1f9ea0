//! Property-based tests for Kruskal's minimum spanning forest.
//!
//! Generated graphs are checked two ways: structurally (same vertex set,
//! acyclic, `V - C` edges, only input edges, no self-edges) and against an
//! independent Prim oracle for total weight, under both edge-scan modes.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
