//! Oracle equivalence: Kruskal's forest weighs exactly as much as Prim's.
//!
//! Minimum spanning forests need not be unique, but their total weight is.
//! Both edge-scan modes must match the oracle's weight, edge count and
//! component count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{EdgeScan, Kruskal};

use super::helpers::component_count;
use super::oracle::prim_forest;
use super::types::MstFixture;

pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let input = fixture.build_graph();
    let oracle = prim_forest(fixture.vertex_count, &input.edges());

    for scan in [EdgeScan::AllIncidences, EdgeScan::LowerIndexEndpoint] {
        let forest = Kruskal::builder().with_edge_scan(scan).build().run(&input);
        let forest_edges = forest.edges();
        let components = component_count(fixture.vertex_count, &forest_edges);

        let observed = (forest.total_weight(), forest.edge_count(), components);
        let expected = (oracle.total_weight, oracle.edge_count, oracle.component_count);
        if observed != expected {
            return Err(TestCaseError::fail(format!(
                "kruskal (weight, edges, components) = {observed:?} but oracle = {expected:?} \
                 (shape={:?}, scan={scan:?}, vertices={})",
                fixture.shape, fixture.vertex_count,
            )));
        }
    }
    Ok(())
}
