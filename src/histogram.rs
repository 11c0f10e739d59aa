//! Circular histogram over compass bearings [0°, 360°).
//!
//! Binning at the target resolution would put bin edges exactly on the
//! compass axes, so 359.9° and 0.1° would land in different sectors. Instead
//! the samples are counted at twice the resolution, the sub-bin sequence is
//! rotated right by one so the last sub-bin (just below 360°) leads, and
//! adjacent sub-bins are merged pairwise. Final bin `i` is then centred on
//! `i * 360 / n` and spans half a bin width on either side.
use crate::error::{OrientationError, Result};
use serde::Serialize;

/// Default number of sectors: 10° each.
pub const DEFAULT_BINS: usize = 36;

/// One angular sector of the histogram.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramBin {
    pub index: usize,
    pub center_deg: f64,
    /// Lower edge wrapped into [0, 360); bin 0 wraps, so its lower edge is
    /// greater than its upper edge.
    pub lower_deg: f64,
    pub upper_deg: f64,
    pub count: u64,
    /// `count / total`, or 0 when the histogram holds no samples.
    pub frequency: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CircularHistogram {
    bins: Vec<HistogramBin>,
    bin_width: f64,
    total: u64,
}

impl CircularHistogram {
    /// Bins `samples` (degrees) into `n_bins` compass-centred sectors.
    ///
    /// `n_bins` must divide 360. Samples at or above 360° wrap around;
    /// negative or non-finite samples are rejected.
    pub fn build(samples: &[f64], n_bins: usize) -> Result<Self> {
        validate_bin_count(n_bins)?;
        let counts = count_and_merge(samples, n_bins)?;
        let total: u64 = counts.iter().sum();
        let bin_width = 360.0 / n_bins as f64;
        let half = bin_width * 0.5;
        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(index, count)| {
                let center_deg = index as f64 * bin_width;
                HistogramBin {
                    index,
                    center_deg,
                    lower_deg: crate::angle::normalize_bearing(center_deg - half),
                    upper_deg: center_deg + half,
                    count,
                    frequency: if total == 0 {
                        0.0
                    } else {
                        count as f64 / total as f64
                    },
                }
            })
            .collect();
        Ok(Self {
            bins,
            bin_width,
            total,
        })
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn n_bins(&self) -> usize {
        self.bins.len()
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn frequencies(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.frequency).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.bins.iter().map(|b| b.count).collect()
    }

    pub fn max_frequency(&self) -> f64 {
        self.bins.iter().map(|b| b.frequency).fold(0.0, f64::max)
    }

    /// Most populated bin; the first one on ties. `None` when empty.
    pub fn dominant_bin(&self) -> Option<&HistogramBin> {
        if self.is_empty() {
            return None;
        }
        let mut best: Option<&HistogramBin> = None;
        for bin in &self.bins {
            if best.map_or(true, |b| bin.count > b.count) {
                best = Some(bin);
            }
        }
        best
    }

    /// Index of the final bin a bearing falls into.
    pub fn bin_index_of(&self, bearing_deg: f64) -> Result<usize> {
        let n_sub = self.bins.len() * 2;
        let sub = sub_bin_index(bearing_deg, n_sub)?;
        Ok(((sub + 1) % n_sub) / 2)
    }
}

impl AsRef<[HistogramBin]> for CircularHistogram {
    fn as_ref(&self) -> &[HistogramBin] {
        &self.bins
    }
}

/// Rejects bin counts that do not split the circle into equal whole-degree
/// divisions.
pub fn validate_bin_count(n_bins: usize) -> Result<()> {
    if n_bins == 0 || 360 % n_bins != 0 {
        return Err(OrientationError::InvalidBinCount { n_bins });
    }
    Ok(())
}

/// Double-resolution counts, rotated by one sub-bin and merged pairwise.
pub fn count_and_merge(samples: &[f64], n_bins: usize) -> Result<Vec<u64>> {
    validate_bin_count(n_bins)?;
    let n_sub = n_bins * 2;
    let mut sub_counts = vec![0u64; n_sub];
    for &sample in samples {
        sub_counts[sub_bin_index(sample, n_sub)?] += 1;
    }
    sub_counts.rotate_right(1);
    Ok(sub_counts.chunks_exact(2).map(|pair| pair[0] + pair[1]).collect())
}

/// Half-open sub-bin `[k·w, (k+1)·w)` containing `sample`, with edges computed
/// as `k * 360 / n_sub` so assignments are exact at the boundaries.
fn sub_bin_index(sample: f64, n_sub: usize) -> Result<usize> {
    if !sample.is_finite() || sample < 0.0 {
        return Err(OrientationError::InvalidBearing { value: sample });
    }
    let wrapped = if sample >= 360.0 {
        sample.rem_euclid(360.0)
    } else {
        sample
    };
    let width = 360.0 / n_sub as f64;
    let mut idx = ((wrapped / width) as usize).min(n_sub - 1);
    // Guess from the division, then settle against the exact edges.
    while idx > 0 && wrapped < sub_edge(idx, n_sub) {
        idx -= 1;
    }
    while idx + 1 < n_sub && wrapped >= sub_edge(idx + 1, n_sub) {
        idx += 1;
    }
    Ok(idx)
}

#[inline]
fn sub_edge(k: usize, n_sub: usize) -> f64 {
    k as f64 * 360.0 / n_sub as f64
}
