//! Serializable run report: what went into each panel and how long it took.
mod timing;

pub use self::timing::{StageTiming, TimingBreakdown};

use crate::histogram::HistogramBin;
use crate::pipeline::{OrientationRun, PlaceResult};
use crate::render::GridShape;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceSummary {
    pub label: String,
    pub edge_count: usize,
    pub dropped_edges: usize,
    pub sample_count: usize,
    /// Centre of the most populated sector, if any samples exist.
    pub dominant_bearing_deg: Option<f64>,
    pub bins: Vec<HistogramBin>,
}

impl From<&PlaceResult> for PlaceSummary {
    fn from(result: &PlaceResult) -> Self {
        Self {
            label: result.label.clone(),
            edge_count: result.bearings.edge_count,
            dropped_edges: result.bearings.dropped_edges,
            sample_count: result.bearings.len(),
            dominant_bearing_deg: result.histogram.dominant_bin().map(|b| b.center_deg),
            bins: result.histogram.bins().to_vec(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    pub title: String,
    pub n_bins: usize,
    pub weight_by_length: bool,
    pub grid: GridShape,
    pub places: Vec<PlaceSummary>,
    pub timing: TimingBreakdown,
}

impl From<&OrientationRun> for RunReport {
    fn from(run: &OrientationRun) -> Self {
        Self {
            title: run.figure.title.clone(),
            n_bins: run.options.n_bins,
            weight_by_length: run.options.weight_by_length,
            grid: run.figure.shape,
            places: run.results.values().map(PlaceSummary::from).collect(),
            timing: run.timing.clone(),
        }
    }
}
