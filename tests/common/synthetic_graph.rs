use street_orientation::graph::{GraphEdge, GraphNode, StreetGraph};

/// Directed lattice of `n x n` intersections spaced `step_deg` apart around
/// `(lat0, lon0)`, every block connected both ways, like a one-way-free grid
/// city exported from a routing graph.
pub fn lattice_city(n: usize, lat0: f64, lon0: f64, step_deg: f64) -> StreetGraph {
    assert!(n >= 2, "lattice needs at least two nodes per side");
    let id = |r: usize, c: usize| (r * n + c) as u64 + 1;
    let mut nodes = Vec::with_capacity(n * n);
    for r in 0..n {
        for c in 0..n {
            nodes.push(GraphNode {
                id: id(r, c),
                lat: lat0 + r as f64 * step_deg,
                lon: lon0 + c as f64 * step_deg,
            });
        }
    }
    let mut edges = Vec::new();
    let mut link = |u: u64, v: u64| {
        for (a, b) in [(u, v), (v, u)] {
            edges.push(GraphEdge {
                u: a,
                v: b,
                key: 0,
                bearing: None,
                length: None,
            });
        }
    };
    for r in 0..n {
        for c in 0..n {
            if c + 1 < n {
                link(id(r, c), id(r, c + 1));
            }
            if r + 1 < n {
                link(id(r, c), id(r + 1, c));
            }
        }
    }
    StreetGraph {
        directed: true,
        nodes,
        edges,
    }
}

/// Undirected graph straight from `(bearing, length)` pairs.
pub fn segments(pairs: &[(f64, f64)]) -> StreetGraph {
    StreetGraph::from_segments(pairs.iter().copied())
}
