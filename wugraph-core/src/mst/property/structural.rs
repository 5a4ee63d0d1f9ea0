//! Structural properties of Kruskal's output.
//!
//! For any generated graph the forest must:
//!
//! - keep the input's vertex set and insertion order;
//! - contain only input edges, at their input weights;
//! - contain no self-edges;
//! - be acyclic;
//! - have exactly `V - C` edges for `C` input components;
//! - pass [`crate::WuGraph::validate`].

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EdgeScan, Kruskal};

use super::helpers::{component_count, find_root};
use super::types::MstFixture;

pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let input = fixture.build_graph();
    let input_edges = input.edges();
    let expected_edges = fixture.vertex_count - component_count(fixture.vertex_count, &input_edges);

    for scan in [EdgeScan::AllIncidences, EdgeScan::LowerIndexEndpoint] {
        let forest = Kruskal::builder().with_edge_scan(scan).build().run(&input);
        let context = format!(
            "shape={:?}, scan={scan:?}, vertices={}, edges={}",
            fixture.shape,
            fixture.vertex_count,
            input.edge_count(),
        );

        forest
            .validate()
            .map_err(|err| TestCaseError::fail(format!("forest invalid: {err} ({context})")))?;
        prop_assert_eq_ctx(forest.vertices(), input.vertices(), "vertex set", &context)?;

        let forest_edges = forest.edges();
        let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
        for &(u, v, weight) in &forest_edges {
            if u == v {
                return Err(TestCaseError::fail(format!("self-edge on {u} ({context})")));
            }
            if !input.is_edge(&u, &v) || input.weight(&u, &v) != weight {
                return Err(TestCaseError::fail(format!(
                    "edge ({u}, {v}, {weight}) is not an input edge ({context})"
                )));
            }
            let left = find_root(&mut parent, u);
            let right = find_root(&mut parent, v);
            if left == right {
                return Err(TestCaseError::fail(format!(
                    "edge ({u}, {v}) closes a cycle ({context})"
                )));
            }
            parent[right] = left;
        }

        prop_assert_eq_ctx(forest.edge_count(), expected_edges, "edge count", &context)?;
    }
    Ok(())
}

fn prop_assert_eq_ctx<T>(actual: T, expected: T, what: &str, context: &str) -> TestCaseResult
where
    T: PartialEq + std::fmt::Debug,
{
    if actual == expected {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{what} mismatch: got {actual:?}, expected {expected:?} ({context})"
        )))
    }
}
