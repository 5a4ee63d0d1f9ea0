//! Benchmark support crate for wugraph.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks covering graph mutation and minimum spanning tree construction.

pub mod error;
pub mod params;
pub mod source;
