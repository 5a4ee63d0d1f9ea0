//! Weighted undirected graphs and minimum spanning trees.
//!
//! [`WuGraph`] stores a graph over caller-supplied vertex keys with O(1)
//! expected vertex and edge updates, O(d) neighbour enumeration and
//! insertion-ordered vertex listing. [`minimum_spanning_tree`] and the
//! configurable [`Kruskal`] runner build a minimum spanning forest as a new
//! graph on the same vertex set.
//!
//! ```
//! use wugraph_core::{WuGraph, minimum_spanning_tree};
//!
//! let mut graph = WuGraph::new();
//! for v in ["a", "b", "c"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_edge(&"a", &"b", 5);
//! graph.add_edge(&"b", &"c", 3);
//! graph.add_edge(&"a", &"c", 10);
//!
//! let tree = minimum_spanning_tree(&graph);
//! assert_eq!(tree.total_weight(), 8);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arena;
mod edge;
mod error;
mod graph;
mod mst;
mod slot_list;
mod vertex;

#[cfg(test)]
mod test_utils;

pub use crate::{
    edge::Weight,
    error::{GraphInvariantCode, GraphInvariantViolation},
    graph::{Neighbors, WuGraph},
    mst::{EdgeScan, Kruskal, KruskalBuilder, minimum_spanning_tree},
};
