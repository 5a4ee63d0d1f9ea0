//! Structural self-check for [`WuGraph`].
//!
//! Walks the registry, the edge arena and the edge index and reports the
//! first inconsistency found. Property tests call this after every mutation.

use std::hash::Hash;

use tracing::{debug, trace};

use crate::{
    edge::{EdgeId, EdgeRecord},
    error::GraphInvariantViolation,
    vertex::VertexId,
};

use super::WuGraph;

impl<V> WuGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Verifies the internal representation.
    ///
    /// Checks that the vertex registry, adjacency lists, twin links and edge
    /// index all agree: every non-self edge has two mutually linked records of
    /// equal weight, every self-edge has one untwinned record, no record
    /// names an unregistered vertex, and the edge count matches the stored
    /// records. Runs in O(V + E).
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphInvariantViolation`] encountered. A graph
    /// modified only through its public API always validates.
    ///
    /// # Examples
    /// ```
    /// use wugraph_core::WuGraph;
    ///
    /// let mut graph = WuGraph::new();
    /// graph.add_vertex(0_u8);
    /// graph.add_vertex(1_u8);
    /// graph.add_edge(&0, &1, 2);
    /// graph.add_edge(&1, &1, 5);
    /// assert!(graph.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), GraphInvariantViolation> {
        trace!(
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "validating graph"
        );
        let outcome = self
            .check_registry()
            .and_then(|()| self.check_adjacency())
            .and_then(|()| self.check_records())
            .and_then(|()| self.check_index());
        if let Err(violation) = &outcome {
            debug!(code = %violation.code(), %violation, "graph failed validation");
        }
        outcome
    }

    fn check_registry(&self) -> Result<(), GraphInvariantViolation> {
        let keys = self.index.len();
        let slots = self.vertices.len();
        let ordered = self.order.len();
        if keys != slots || slots != ordered {
            return Err(GraphInvariantViolation::VertexCountMismatch {
                keys,
                slots,
                ordered,
            });
        }
        for (key, id) in &self.index {
            if self.entry(*id).is_none_or(|entry| &entry.key != key) {
                return Err(GraphInvariantViolation::UnregisteredVertex { vertex: id.0 });
            }
        }
        for (handle, id) in self.order.iter() {
            if self.entry(*id).is_none_or(|entry| entry.order != handle) {
                return Err(GraphInvariantViolation::UnregisteredVertex { vertex: id.0 });
            }
        }
        Ok(())
    }

    fn check_adjacency(&self) -> Result<(), GraphInvariantViolation> {
        let mut listed = 0_usize;
        for (slot, entry) in self.vertices.iter() {
            for (_, edge) in entry.adjacency.iter() {
                let owned = self
                    .edges
                    .get(edge.0)
                    .is_some_and(|record| record.owner == VertexId(slot));
                if !owned {
                    return Err(GraphInvariantViolation::MisplacedRecord {
                        edge: edge.0,
                        owner: slot,
                    });
                }
                listed = listed.saturating_add(1);
            }
        }
        let records = self.edges.len();
        if listed != records {
            return Err(GraphInvariantViolation::EdgeCountMismatch {
                records,
                expected: listed,
                indexed: self.edge_count(),
            });
        }
        Ok(())
    }

    fn check_records(&self) -> Result<(), GraphInvariantViolation> {
        for (slot, record) in self.edges.iter() {
            let edge = EdgeId(slot);
            self.check_endpoints(edge, record)?;
            self.check_twin(edge, record)?;

            let indexed = self.edge_index.get(&record.pair()).copied();
            let represents = indexed == Some(edge) || (indexed.is_some() && indexed == record.twin);
            if !represents {
                return Err(GraphInvariantViolation::UnindexedEdge { edge: slot });
            }
        }
        Ok(())
    }

    fn check_endpoints(
        &self,
        edge: EdgeId,
        record: &EdgeRecord,
    ) -> Result<(), GraphInvariantViolation> {
        let (left, right) = record.endpoints;
        for endpoint in [left, right] {
            if self.entry(endpoint).is_none() {
                return Err(GraphInvariantViolation::DanglingEdge {
                    edge: edge.0,
                    vertex: endpoint.0,
                });
            }
        }
        let placed = record.touches(record.owner)
            && self
                .entry(record.owner)
                .and_then(|owner| owner.adjacency.get(record.entry))
                == Some(&edge);
        if !placed {
            return Err(GraphInvariantViolation::MisplacedRecord {
                edge: edge.0,
                owner: record.owner.0,
            });
        }
        Ok(())
    }

    fn check_twin(&self, edge: EdgeId, record: &EdgeRecord) -> Result<(), GraphInvariantViolation> {
        let is_loop = record.pair().is_loop();
        let twin = match (record.twin, is_loop) {
            (None, true) => return Ok(()),
            (Some(twin), false) => twin,
            _ => return Err(GraphInvariantViolation::TwinShape { edge: edge.0 }),
        };
        let asymmetric = GraphInvariantViolation::AsymmetricTwin {
            edge: edge.0,
            twin: twin.0,
        };
        let Some(twin_record) = self.edges.get(twin.0) else {
            return Err(asymmetric);
        };
        let mutual = twin_record.twin == Some(edge)
            && twin_record.pair() == record.pair()
            && twin_record.owner == record.opposite(record.owner);
        if !mutual {
            return Err(asymmetric);
        }
        if twin_record.weight != record.weight {
            return Err(GraphInvariantViolation::WeightMismatch {
                edge: edge.0,
                twin: twin.0,
                weight: record.weight,
                twin_weight: twin_record.weight,
            });
        }
        Ok(())
    }

    fn check_index(&self) -> Result<(), GraphInvariantViolation> {
        let mut expected = 0_usize;
        for (pair, edge) in &self.edge_index {
            let matches = self
                .edges
                .get(edge.0)
                .is_some_and(|record| record.pair() == *pair);
            if !matches {
                return Err(GraphInvariantViolation::UnindexedEdge { edge: edge.0 });
            }
            expected = expected.saturating_add(if pair.is_loop() { 1 } else { 2 });
        }
        let records = self.edges.len();
        if records != expected {
            return Err(GraphInvariantViolation::EdgeCountMismatch {
                records,
                expected,
                indexed: self.edge_count(),
            });
        }
        Ok(())
    }
}
