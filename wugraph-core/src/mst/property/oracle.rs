//! Prim oracle for MST property verification.
//!
//! A quadratic, adjacency-matrix Prim that restarts in every unreached
//! component. It shares no code with the Kruskal path, so agreement on total
//! weight is independent evidence of minimality.

use crate::Weight;

/// Summary of the oracle's minimum spanning forest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    pub total_weight: i128,
    pub edge_count: usize,
    pub component_count: usize,
}

/// Computes a minimum spanning forest over vertices `0..vertex_count`.
///
/// `edges` must list each logical edge once; self-edges are ignored.
pub(super) fn prim_forest(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> OracleForest {
    let mut matrix = vec![vec![None; vertex_count]; vertex_count];
    for &(u, v, weight) in edges {
        if u != v {
            matrix[u][v] = Some(weight);
            matrix[v][u] = Some(weight);
        }
    }

    let mut in_tree = vec![false; vertex_count];
    let mut best: Vec<Option<Weight>> = vec![None; vertex_count];
    let mut forest = OracleForest {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
    };

    while let Some(next) = (0..vertex_count)
        .filter(|&v| !in_tree[v])
        .min_by_key(|&v| best[v].map_or((1_u8, 0), |w| (0, w)))
    {
        in_tree[next] = true;
        match best[next] {
            Some(weight) => {
                forest.total_weight += i128::from(weight);
                forest.edge_count += 1;
            }
            None => forest.component_count += 1,
        }
        for other in 0..vertex_count {
            let Some(weight) = matrix[next][other] else {
                continue;
            };
            if !in_tree[other] && best[other].is_none_or(|current| weight < current) {
                best[other] = Some(weight);
            }
        }
    }

    forest
}

#[cfg(test)]
mod tests {
    use super::prim_forest;

    #[test]
    fn oracle_handles_triangle() {
        let forest = prim_forest(3, &[(0, 1, 5), (1, 2, 3), (0, 2, 10)]);
        assert_eq!(forest.total_weight, 8);
        assert_eq!(forest.edge_count, 2);
        assert_eq!(forest.component_count, 1);
    }

    #[test]
    fn oracle_counts_isolated_vertices_as_components() {
        let forest = prim_forest(4, &[(0, 1, 2), (2, 2, 1)]);
        assert_eq!(forest.total_weight, 2);
        assert_eq!(forest.edge_count, 1);
        assert_eq!(forest.component_count, 3);
    }
}
