#![doc = include_str!("../README.md")]

// Numeric core
pub mod angle;
pub mod bearings;
pub mod error;
pub mod graph;
pub mod histogram;

// Layout and drawing
pub mod render;

// Glue around the core: inputs, outputs, orchestration.
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod pipeline;
pub mod provider;

// --- High-level re-exports -------------------------------------------------

pub use crate::bearings::{extract_bearings, BearingSet};
pub use crate::error::{OrientationError, Result};
pub use crate::graph::StreetGraph;
pub use crate::histogram::{CircularHistogram, HistogramBin};
pub use crate::pipeline::{run_orientation, OrientationOptions, OrientationRun};
pub use crate::render::{compose, render_panel, CompositeFigure, GridShape, PolarPanel};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use street_orientation::prelude::*;
///
/// let grid = StreetGraph::from_segments([(0.0, 120.0), (90.0, 80.0)]);
/// let bearings = extract_bearings(&grid, false).unwrap();
/// let hist = CircularHistogram::build(&bearings.samples, 36).unwrap();
/// let figure = compose([("Gridville", &hist)], "Orientation").unwrap();
/// assert_eq!(figure.shape, GridShape { nrows: 1, ncols: 1 });
/// ```
pub mod prelude {
    pub use crate::{
        compose, extract_bearings, CircularHistogram, GridShape, OrientationOptions,
        StreetGraph,
    };
}
