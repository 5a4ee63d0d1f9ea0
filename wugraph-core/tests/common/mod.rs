use wugraph_core::{Weight, WuGraph};

/// Builds a graph from string keys, adding vertices before edges.
#[must_use]
pub fn graph_from(
    vertices: &[&'static str],
    edges: &[(&'static str, &'static str, Weight)],
) -> WuGraph<&'static str> {
    let mut graph = WuGraph::with_capacity(vertices.len(), edges.len());
    for vertex in vertices {
        graph.add_vertex(*vertex);
    }
    for (u, v, weight) in edges {
        graph.add_edge(u, v, *weight);
    }
    graph
}

/// Sorted `(low, high, weight)` view of a graph's edges.
#[must_use]
pub fn canonical_edges(graph: &WuGraph<&'static str>) -> Vec<(&'static str, &'static str, Weight)> {
    let mut edges: Vec<_> = graph
        .edges()
        .into_iter()
        .map(|(u, v, w)| if u <= v { (u, v, w) } else { (v, u, w) })
        .collect();
    edges.sort_unstable();
    edges
}
