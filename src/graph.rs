//! Street-network data model handed over by a graph provider.
//!
//! A `StreetGraph` is a multigraph of intersections (`GraphNode`) joined by
//! street segments (`GraphEdge`). Edges may arrive with a precomputed bearing
//! and length; `annotate` fills in whatever is missing from node coordinates.
//! `to_undirected` collapses opposite directed edges into one segment so that
//! each physical street is counted once.
use crate::angle::{great_circle_distance, initial_bearing};
use crate::error::{OrientationError, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Intersection or dead end, located in WGS84 decimal degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: u64,
    pub lat: f64,
    pub lon: f64,
}

/// Street segment from node `u` to node `v`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub u: u64,
    pub v: u64,
    /// Distinguishes parallel edges between the same pair of nodes.
    #[serde(default)]
    pub key: u32,
    /// Compass bearing from `u` to `v` in degrees. `None` on self-loops.
    #[serde(default)]
    pub bearing: Option<f64>,
    /// Physical length (metres when derived from coordinates).
    #[serde(default)]
    pub length: Option<f64>,
}

impl GraphEdge {
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StreetGraph {
    #[serde(default)]
    pub directed: bool,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl StreetGraph {
    /// Builds an undirected graph straight from `(bearing, length)` pairs,
    /// one edge per pair, without node geometry.
    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let edges = segments
            .into_iter()
            .enumerate()
            .map(|(i, (bearing, length))| GraphEdge {
                u: 2 * i as u64,
                v: 2 * i as u64 + 1,
                key: 0,
                bearing: Some(bearing),
                length: Some(length),
            })
            .collect();
        Self {
            directed: false,
            nodes: Vec::new(),
            edges,
        }
    }

    /// Reads a graph serialized as JSON.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| OrientationError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&data).map_err(|e| OrientationError::Json {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Collapses opposite directed edges `u→v` / `v→u` sharing a key into a
    /// single segment, keeping the first one encountered. Undirected graphs
    /// are returned unchanged.
    pub fn to_undirected(&self) -> StreetGraph {
        if !self.directed {
            return self.clone();
        }
        let mut seen: HashSet<(u64, u64, u32)> = HashSet::with_capacity(self.edges.len());
        let mut edges = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            let pair = (edge.u.min(edge.v), edge.u.max(edge.v), edge.key);
            if seen.insert(pair) {
                edges.push(edge.clone());
            }
        }
        debug!(
            "StreetGraph::to_undirected {} directed edges -> {} segments",
            self.edges.len(),
            edges.len()
        );
        StreetGraph {
            directed: false,
            nodes: self.nodes.clone(),
            edges,
        }
    }

    /// Fills missing bearings and lengths from node coordinates.
    ///
    /// Self-loops have no defined bearing and keep `None`. Returns
    /// `UnknownNode` when a missing value needs a node that is not present.
    pub fn annotate(&mut self) -> Result<()> {
        let index: HashMap<u64, &GraphNode> = self.nodes.iter().map(|n| (n.id, n)).collect();
        let mut filled = Vec::with_capacity(self.edges.len());
        for edge in &self.edges {
            let mut bearing = edge.bearing;
            let mut length = edge.length;
            if length.is_none() {
                let (a, b) = (node_at(&index, edge.u)?, node_at(&index, edge.v)?);
                length = Some(great_circle_distance(a.lat, a.lon, b.lat, b.lon));
            }
            if bearing.is_none() && !edge.is_self_loop() {
                let (a, b) = (node_at(&index, edge.u)?, node_at(&index, edge.v)?);
                bearing = Some(initial_bearing(a.lat, a.lon, b.lat, b.lon));
            }
            filled.push((bearing, length));
        }
        for (edge, (bearing, length)) in self.edges.iter_mut().zip(filled) {
            edge.bearing = bearing;
            edge.length = length;
        }
        Ok(())
    }

    /// Latitude/longitude bounding box `(min_lat, max_lat, min_lon, max_lon)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.nodes.first()?;
        let init = (first.lat, first.lat, first.lon, first.lon);
        Some(self.nodes.iter().fold(init, |(a, b, c, d), n| {
            (a.min(n.lat), b.max(n.lat), c.min(n.lon), d.max(n.lon))
        }))
    }
}

fn node_at<'a>(index: &HashMap<u64, &'a GraphNode>, id: u64) -> Result<&'a GraphNode> {
    index
        .get(&id)
        .copied()
        .ok_or(OrientationError::UnknownNode { node: id })
}
