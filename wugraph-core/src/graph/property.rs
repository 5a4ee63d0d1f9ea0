//! Model-based property tests for graph mutation.
//!
//! Random operation sequences run against [`WuGraph`] and a naive model built
//! from a vector and a map. After every step the graph must agree with the
//! model and pass [`WuGraph::validate`].

use std::collections::BTreeMap;

use proptest::prelude::*;
use test_strategy::Arbitrary;

use crate::test_utils::suite_proptest_config;
use crate::{Weight, WuGraph};

/// A small key space makes collisions and repeats frequent.
#[derive(Clone, Copy, Debug, Arbitrary)]
enum Op {
    #[weight(3)]
    AddVertex(#[strategy(0_u8..12)] u8),
    #[weight(1)]
    RemoveVertex(#[strategy(0_u8..12)] u8),
    #[weight(6)]
    AddEdge(
        #[strategy(0_u8..12)] u8,
        #[strategy(0_u8..12)] u8,
        #[strategy(-20_i64..20)] Weight,
    ),
    #[weight(2)]
    RemoveEdge(#[strategy(0_u8..12)] u8, #[strategy(0_u8..12)] u8),
}

#[derive(Default)]
struct Model {
    vertices: Vec<u8>,
    edges: BTreeMap<(u8, u8), Weight>,
}

fn key(u: u8, v: u8) -> (u8, u8) {
    (u.min(v), u.max(v))
}

impl Model {
    fn apply(&mut self, op: Op) {
        match op {
            Op::AddVertex(v) => {
                if !self.vertices.contains(&v) {
                    self.vertices.push(v);
                }
            }
            Op::RemoveVertex(v) => {
                self.vertices.retain(|&x| x != v);
                self.edges.retain(|&(a, b), _| a != v && b != v);
            }
            Op::AddEdge(u, v, weight) => {
                if self.vertices.contains(&u) && self.vertices.contains(&v) {
                    self.edges.insert(key(u, v), weight);
                }
            }
            Op::RemoveEdge(u, v) => {
                self.edges.remove(&key(u, v));
            }
        }
    }

    fn degree(&self, v: u8) -> usize {
        self.edges
            .keys()
            .filter(|&&(a, b)| a == v || b == v)
            .count()
    }
}

fn apply(graph: &mut WuGraph<u8>, op: Op) {
    match op {
        Op::AddVertex(v) => graph.add_vertex(v),
        Op::RemoveVertex(v) => graph.remove_vertex(&v),
        Op::AddEdge(u, v, weight) => graph.add_edge(&u, &v, weight),
        Op::RemoveEdge(u, v) => graph.remove_edge(&u, &v),
    }
}

fn check_agreement(graph: &WuGraph<u8>, model: &Model) -> Result<(), TestCaseError> {
    if let Err(violation) = graph.validate() {
        return Err(TestCaseError::fail(format!("graph invalid: {violation}")));
    }
    prop_assert_eq!(graph.vertices(), model.vertices.clone());
    prop_assert_eq!(graph.vertex_count(), model.vertices.len());
    prop_assert_eq!(graph.edge_count(), model.edges.len());

    let mut listed: Vec<((u8, u8), Weight)> = graph
        .edges()
        .into_iter()
        .map(|(u, v, weight)| (key(u, v), weight))
        .collect();
    listed.sort_unstable();
    let expected: Vec<((u8, u8), Weight)> = model.edges.iter().map(|(&k, &w)| (k, w)).collect();
    prop_assert_eq!(listed, expected);

    let expected_total: i128 = model.edges.values().map(|&w| i128::from(w)).sum();
    prop_assert_eq!(graph.total_weight(), expected_total);

    for &v in &model.vertices {
        let degree = model.degree(v);
        prop_assert_eq!(graph.degree(&v), degree);
        match graph.neighbors(&v) {
            None => prop_assert_eq!(degree, 0),
            Some(neighbors) => {
                prop_assert_eq!(neighbors.len(), degree);
                for (&other, weight) in neighbors.iter() {
                    prop_assert_eq!(model.edges.get(&key(v, other)).copied(), Some(weight));
                    prop_assert_eq!(graph.weight(&other, &v), weight);
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn graph_matches_model_after_every_operation(
        ops in proptest::collection::vec(any::<Op>(), 0..80)
    ) {
        let mut graph = WuGraph::new();
        let mut model = Model::default();
        for op in ops {
            apply(&mut graph, op);
            model.apply(op);
            check_agreement(&graph, &model)?;
        }
    }

    #[test]
    fn queries_on_absent_vertices_are_sentinels(
        ops in proptest::collection::vec(any::<Op>(), 0..40),
        probe in 12_u8..=255,
    ) {
        let mut graph = WuGraph::new();
        for op in ops {
            apply(&mut graph, op);
        }
        let before = graph.edges();
        prop_assert!(!graph.is_vertex(&probe));
        prop_assert_eq!(graph.degree(&probe), 0);
        prop_assert!(graph.neighbors(&probe).is_none());
        prop_assert_eq!(graph.weight(&probe, &0), 0);
        graph.add_edge(&probe, &0, 5);
        graph.remove_edge(&probe, &0);
        graph.remove_vertex(&probe);
        prop_assert_eq!(graph.edges(), before);
    }
}
