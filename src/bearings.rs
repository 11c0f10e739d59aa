//! Street bearings as histogram input.
//!
//! Every segment is treated as two-way: each bearing is emitted together with
//! its reciprocal. Length weighting is expressed by repetition: a segment
//! contributes `floor(length)` copies of each of its two bearings, so a
//! segment shorter than one length unit contributes nothing.
use crate::angle::reciprocal_bearing;
use crate::error::{OrientationError, Result};
use crate::graph::{GraphEdge, StreetGraph};
use log::debug;
use serde::Serialize;
use std::borrow::Cow;

/// Longest segment accepted under length weighting. Each unit of length
/// becomes one sample, so the bound keeps the sample buffer allocatable.
pub const MAX_WEIGHTED_LENGTH: f64 = 1.0e7;

/// Bearing samples for one place, in degrees.
///
/// Layout: all forward bearings in edge order, followed by all reciprocal
/// bearings in the same order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BearingSet {
    pub samples: Vec<f64>,
    /// Segments considered after collapsing to an undirected graph.
    pub edge_count: usize,
    /// Segments skipped because they carry no bearing (self-loops).
    pub dropped_edges: usize,
}

impl BearingSet {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Converts a street graph into bearing samples.
///
/// Directed graphs are collapsed first. Fails on bearings outside [0, 360],
/// and, when `weight_by_length` is set, on missing or invalid lengths and on
/// lengths above [`MAX_WEIGHTED_LENGTH`].
pub fn extract_bearings(graph: &StreetGraph, weight_by_length: bool) -> Result<BearingSet> {
    let graph = if graph.directed {
        Cow::Owned(graph.to_undirected())
    } else {
        Cow::Borrowed(graph)
    };

    let mut forward = Vec::with_capacity(graph.edges.len());
    let mut dropped_edges = 0usize;
    for edge in &graph.edges {
        let Some(bearing) = edge.bearing else {
            dropped_edges += 1;
            continue;
        };
        validate_bearing(bearing)?;
        let copies = if weight_by_length {
            multiplicity(edge)?
        } else {
            1
        };
        forward
            .try_reserve(copies)
            .map_err(|_| OrientationError::TooManySamples {
                requested: forward.len().saturating_add(copies),
            })?;
        forward.extend(std::iter::repeat(bearing).take(copies));
    }

    let total = forward.len().saturating_mul(2);
    let mut samples = Vec::new();
    samples
        .try_reserve_exact(total)
        .map_err(|_| OrientationError::TooManySamples { requested: total })?;
    samples.extend_from_slice(&forward);
    samples.extend(forward.iter().map(|&b| reciprocal_bearing(b)));

    debug!(
        "extract_bearings edges={} dropped={} samples={} weighted={}",
        graph.edges.len(),
        dropped_edges,
        samples.len(),
        weight_by_length
    );

    Ok(BearingSet {
        samples,
        edge_count: graph.edges.len(),
        dropped_edges,
    })
}

// 360 is North like 0; the histogram wraps it into bin 0.
fn validate_bearing(bearing: f64) -> Result<()> {
    if bearing.is_finite() && (0.0..=360.0).contains(&bearing) {
        Ok(())
    } else {
        Err(OrientationError::InvalidBearing { value: bearing })
    }
}

/// Integer sample multiplicity of a segment: its length truncated.
fn multiplicity(edge: &GraphEdge) -> Result<usize> {
    let length = edge.length.ok_or(OrientationError::MissingAttribute {
        u: edge.u,
        v: edge.v,
        attribute: "length",
    })?;
    if !length.is_finite() || !(0.0..=MAX_WEIGHTED_LENGTH).contains(&length) {
        return Err(OrientationError::InvalidLength { value: length });
    }
    Ok(length.floor() as usize)
}
