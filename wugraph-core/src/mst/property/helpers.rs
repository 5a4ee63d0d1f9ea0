//! Shared helpers for MST property tests.

use crate::Weight;

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Counts connected components of `0..vertex_count` under `edges`.
pub(super) fn component_count(vertex_count: usize, edges: &[(usize, usize, Weight)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(u, v, _) in edges {
        let left = find_root(&mut parent, u);
        let right = find_root(&mut parent, v);
        if left != right {
            parent[right] = left;
            components -= 1;
        }
    }
    components
}
