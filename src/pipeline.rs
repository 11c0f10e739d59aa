//! End-to-end orientation run.
//!
//! Pipeline
//! - Acquisition: ask the `GraphProvider` for each place's street graph.
//! - Preparation: collapse to an undirected graph and fill in missing
//!   bearings and lengths from node coordinates.
//! - Extraction: bearings plus reciprocals, optionally length-weighted.
//! - Binning: compass-centred circular histogram per place.
//! - Composition: one polar panel per place on a near-square grid.
//!
//! Places are independent until composition. With the `parallel` feature the
//! extraction and binning stages run on the rayon pool; results are keyed by
//! label either way, so the figure does not depend on scheduling.
use crate::bearings::{extract_bearings, BearingSet};
use crate::config::PlaceList;
use crate::diagnostics::TimingBreakdown;
use crate::error::{OrientationError, Result};
use crate::graph::StreetGraph;
use crate::histogram::{validate_bin_count, CircularHistogram, DEFAULT_BINS};
use crate::provider::GraphProvider;
use crate::render::{compose, CompositeFigure};
use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Knobs of the numeric core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrientationOptions {
    pub n_bins: usize,
    pub weight_by_length: bool,
}

impl Default for OrientationOptions {
    fn default() -> Self {
        Self {
            n_bins: DEFAULT_BINS,
            weight_by_length: false,
        }
    }
}

/// Everything computed for one place.
#[derive(Clone, Debug)]
pub struct PlaceResult {
    pub label: String,
    /// Prepared (undirected, annotated) graph.
    pub graph: StreetGraph,
    pub bearings: BearingSet,
    pub histogram: CircularHistogram,
}

#[derive(Clone, Debug)]
pub struct OrientationRun {
    pub options: OrientationOptions,
    pub results: BTreeMap<String, PlaceResult>,
    pub figure: CompositeFigure,
    pub timing: TimingBreakdown,
}

/// Undirected copy of `graph` with bearings and lengths filled in.
pub fn prepare_graph(graph: &StreetGraph) -> Result<StreetGraph> {
    let mut prepared = graph.to_undirected();
    prepared.annotate()?;
    Ok(prepared)
}

/// Extraction and binning for a single place.
pub fn analyze_place(
    label: &str,
    graph: &StreetGraph,
    options: OrientationOptions,
) -> Result<PlaceResult> {
    let graph = prepare_graph(graph)?;
    let bearings = extract_bearings(&graph, options.weight_by_length)?;
    let histogram = CircularHistogram::build(&bearings.samples, options.n_bins)?;
    debug!(
        "analyze_place '{}' edges={} samples={} dominant={:?}",
        label,
        bearings.edge_count,
        bearings.len(),
        histogram.dominant_bin().map(|b| b.center_deg)
    );
    Ok(PlaceResult {
        label: label.to_string(),
        graph,
        bearings,
        histogram,
    })
}

/// Runs extraction and binning over already-fetched graphs.
pub fn analyze_places(
    graphs: Vec<(String, StreetGraph)>,
    options: OrientationOptions,
) -> Result<BTreeMap<String, PlaceResult>> {
    validate_bin_count(options.n_bins)?;
    if graphs.is_empty() {
        return Err(OrientationError::EmptyPlaceSet);
    }

    #[cfg(feature = "parallel")]
    let results: Vec<Result<PlaceResult>> = graphs
        .par_iter()
        .map(|(label, graph)| analyze_place(label, graph, options))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<Result<PlaceResult>> = graphs
        .iter()
        .map(|(label, graph)| analyze_place(label, graph, options))
        .collect();

    results
        .into_iter()
        .map(|r| r.map(|place| (place.label.clone(), place)))
        .collect()
}

/// Fetches every place's graph from `provider`, analyses it, and composes the
/// figure titled `title`.
pub fn run_orientation<P: GraphProvider + ?Sized>(
    places: &PlaceList,
    provider: &P,
    options: OrientationOptions,
    title: &str,
) -> Result<OrientationRun> {
    validate_bin_count(options.n_bins)?;
    if places.is_empty() {
        return Err(OrientationError::EmptyPlaceSet);
    }
    let mut timing = TimingBreakdown::default();

    let graphs = timing.measure("fetch", || {
        places
            .iter()
            .map(|(label, query)| {
                let graph = provider.fetch(label, query)?;
                info!("fetched '{}' ({} edges)", label, graph.edge_count());
                Ok((label.clone(), graph))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let results = timing.measure("analyze", || analyze_places(graphs, options))?;

    let figure = timing.measure("compose", || {
        compose(
            results.iter().map(|(label, r)| (label, &r.histogram)),
            title,
        )
    })?;

    info!(
        "composed {} panels on a {}x{} grid",
        figure.panels.len(),
        figure.shape.nrows,
        figure.shape.ncols
    );
    Ok(OrientationRun {
        options,
        results,
        figure,
        timing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bin_count_fails_before_any_work() {
        let options = OrientationOptions {
            n_bins: 7,
            weight_by_length: false,
        };
        let graphs = vec![("A".to_string(), StreetGraph::from_segments([(0.0, 1.0)]))];
        assert!(matches!(
            analyze_places(graphs, options),
            Err(OrientationError::InvalidBinCount { n_bins: 7 })
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            analyze_places(Vec::new(), OrientationOptions::default()),
            Err(OrientationError::EmptyPlaceSet)
        ));
    }

    #[test]
    fn results_are_keyed_by_label() {
        let graphs = vec![
            ("b".to_string(), StreetGraph::from_segments([(0.0, 1.0)])),
            ("a".to_string(), StreetGraph::from_segments([(90.0, 1.0)])),
        ];
        let results = analyze_places(graphs, OrientationOptions::default()).expect("analyze");
        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(results["a"].histogram.dominant_bin().map(|b| b.index), Some(9));
    }
}
