//! Graph acquisition seam.
//!
//! Downloading street networks is someone else's job; the pipeline only asks
//! a `GraphProvider` for the graph of a labelled place. `JsonGraphProvider`
//! serves graphs previously exported as JSON files, one per place.
use crate::config::PlaceQuery;
use crate::error::{OrientationError, Result};
use crate::graph::StreetGraph;
use log::debug;
use std::path::{Path, PathBuf};

pub trait GraphProvider {
    /// Street graph for `label`. `query` is passed through untouched.
    fn fetch(&self, label: &str, query: &PlaceQuery) -> Result<StreetGraph>;
}

/// Reads `<root>/<slug(label)>.json`.
#[derive(Clone, Debug)]
pub struct JsonGraphProvider {
    root: PathBuf,
}

impl JsonGraphProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, label: &str) -> PathBuf {
        self.root.join(format!("{}.json", slug(label)))
    }
}

impl GraphProvider for JsonGraphProvider {
    fn fetch(&self, label: &str, query: &PlaceQuery) -> Result<StreetGraph> {
        let path = self.path_for(label);
        debug!("JsonGraphProvider::fetch '{label}' query={query} path={}", path.display());
        if !path.is_file() {
            return Err(OrientationError::Graph {
                label: label.to_string(),
                message: format!("no graph file at {}", path.display()),
            });
        }
        StreetGraph::from_json_file(&path)
    }
}

/// Graphs held in memory, keyed by label. Handy for tests and for callers that
/// obtain graphs some other way.
#[derive(Clone, Debug, Default)]
pub struct InMemoryGraphProvider {
    graphs: std::collections::HashMap<String, StreetGraph>,
}

impl InMemoryGraphProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, graph: StreetGraph) {
        self.graphs.insert(label.into(), graph);
    }

    pub fn with(mut self, label: impl Into<String>, graph: StreetGraph) -> Self {
        self.insert(label, graph);
        self
    }
}

impl GraphProvider for InMemoryGraphProvider {
    fn fetch(&self, label: &str, _query: &PlaceQuery) -> Result<StreetGraph> {
        self.graphs
            .get(label)
            .cloned()
            .ok_or_else(|| OrientationError::Graph {
                label: label.to_string(),
                message: "no graph registered".to_string(),
            })
    }
}

/// File-system friendly form of a label: lower-case ASCII alphanumerics,
/// everything else collapsed to single underscores.
pub fn slug(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut pending_sep = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    if out.is_empty() {
        out.push('_');
    }
    out
}
