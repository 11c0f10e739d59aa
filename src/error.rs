//! Crate-wide error type.
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by bearing extraction, histogramming, layout, and the
/// I/O glue around them. Every variant is a precondition violation or an
/// external failure; nothing is retried.
#[derive(Debug, Error)]
pub enum OrientationError {
    #[error("n_bins must be a positive divisor of 360, got {n_bins}")]
    InvalidBinCount { n_bins: usize },

    #[error("no places to compose")]
    EmptyPlaceSet,

    #[error("place '{label}' given more than once")]
    DuplicatePlace { label: String },

    #[error("bearing {value} is not a compass bearing in [0, 360]")]
    InvalidBearing { value: f64 },

    #[error("edge length {value} is negative, non-finite, or too long to weight")]
    InvalidLength { value: f64 },

    #[error("cannot hold {requested} bearing samples")]
    TooManySamples { requested: usize },

    #[error("edge {u}->{v} has no {attribute}")]
    MissingAttribute {
        u: u64,
        v: u64,
        attribute: &'static str,
    },

    #[error("edge references unknown node {node}")]
    UnknownNode { node: u64 },

    #[error("graph for '{label}' unavailable: {message}")]
    Graph { label: String, message: String },

    #[error("I/O failure on {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("invalid JSON in {}: {message}", .path.display())]
    Json { path: PathBuf, message: String },

    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, OrientationError>;
