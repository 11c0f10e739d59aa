//! Polar bar-chart geometry for one place.
//!
//! Coordinates are compass-oriented: `x` points East, `y` points North, and
//! angles grow clockwise from North. Radii are normalised so that the
//! panel's largest frequency reaches 1.0; each panel is scaled on its own.
use crate::angle::compass_to_xy;
use crate::error::{OrientationError, Result};
use crate::histogram::{validate_bin_count, HistogramBin};
use serde::Serialize;

/// Unlabelled radial rings, evenly spaced from the centre to the rim.
pub const RING_COUNT: usize = 5;

/// Angular gridlines every 45°; only the cardinal ones carry a label.
const ANGULAR_TICKS: [(f64, Option<&str>); 8] = [
    (0.0, Some("N")),
    (45.0, None),
    (90.0, Some("E")),
    (135.0, None),
    (180.0, Some("S")),
    (225.0, None),
    (270.0, Some("W")),
    (315.0, None),
];

/// Max angular step when approximating a bar's outer arc.
const ARC_STEP_DEG: f64 = 2.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wedge {
    pub bin_index: usize,
    pub center_deg: f64,
    pub width_deg: f64,
    /// Bar height: the bin frequency.
    pub frequency: f64,
    /// Closed outline in normalised panel coordinates, starting at the
    /// centre. Empty for zero-height bars.
    pub outline: Vec<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngularTick {
    pub bearing_deg: f64,
    pub label: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolarPanel {
    pub label: String,
    pub title: String,
    /// Frequency mapped to the rim; 0 for a panel without samples.
    pub radial_max: f64,
    pub wedges: Vec<Wedge>,
    /// Normalised ring radii in (0, 1].
    pub rings: Vec<f64>,
    pub angular_ticks: Vec<AngularTick>,
}

impl PolarPanel {
    pub fn is_empty(&self) -> bool {
        self.radial_max <= 0.0
    }
}

/// Lays out one histogram as a compass-oriented polar bar chart.
///
/// Bars are centred on the bin centres and are `360 / bins.len()` degrees
/// wide. A histogram without samples yields a panel with no bar outlines.
pub fn render_panel(bins: &[HistogramBin], label: &str) -> Result<PolarPanel> {
    validate_bin_count(bins.len())?;
    if let Some(bin) = bins.iter().find(|b| !b.frequency.is_finite() || b.frequency < 0.0) {
        return Err(OrientationError::Render(format!(
            "bin {} of '{label}' has invalid frequency {}",
            bin.index, bin.frequency
        )));
    }
    let width_deg = 360.0 / bins.len() as f64;
    let radial_max = bins.iter().map(|b| b.frequency).fold(0.0, f64::max);

    let wedges = bins
        .iter()
        .map(|bin| {
            let radius = if radial_max > 0.0 {
                bin.frequency / radial_max
            } else {
                0.0
            };
            Wedge {
                bin_index: bin.index,
                center_deg: bin.center_deg,
                width_deg,
                frequency: bin.frequency,
                outline: wedge_outline(bin.center_deg, width_deg, radius),
            }
        })
        .collect();

    let rings = (1..RING_COUNT)
        .map(|i| i as f64 / (RING_COUNT - 1) as f64)
        .collect();
    let angular_ticks = ANGULAR_TICKS
        .iter()
        .map(|&(bearing_deg, label)| AngularTick {
            bearing_deg,
            label: label.map(str::to_string),
        })
        .collect();

    Ok(PolarPanel {
        label: label.to_string(),
        title: label.to_uppercase(),
        radial_max,
        wedges,
        rings,
        angular_ticks,
    })
}

fn wedge_outline(center_deg: f64, width_deg: f64, radius: f64) -> Vec<(f64, f64)> {
    if radius <= 0.0 {
        return Vec::new();
    }
    let steps = (width_deg / ARC_STEP_DEG).ceil().max(1.0) as usize;
    let start = center_deg - width_deg * 0.5;
    let mut outline = Vec::with_capacity(steps + 3);
    outline.push((0.0, 0.0));
    for k in 0..=steps {
        let (x, y) = compass_to_xy(start + width_deg * k as f64 / steps as f64);
        outline.push((x * radius, y * radius));
    }
    outline.push((0.0, 0.0));
    outline
}

/// Closed circle of the given normalised radius, for rings and the rim.
pub fn circle_outline(radius: f64) -> Vec<(f64, f64)> {
    let steps = (360.0 / ARC_STEP_DEG) as usize;
    (0..=steps)
        .map(|k| {
            let (x, y) = compass_to_xy(k as f64 * ARC_STEP_DEG);
            (x * radius, y * radius)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::histogram::CircularHistogram;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn tallest_bar_reaches_rim() {
        let hist = CircularHistogram::build(&[0.0, 0.0, 90.0, 180.0], 4).expect("hist");
        let panel = render_panel(hist.bins(), "Springfield").expect("panel");
        assert_eq!(panel.title, "SPRINGFIELD");
        assert!(approx_eq(panel.radial_max, 0.5));
        let north = &panel.wedges[0];
        assert!(approx_eq(north.width_deg, 90.0));
        let max_r = north
            .outline
            .iter()
            .map(|&(x, y)| (x * x + y * y).sqrt())
            .fold(0.0, f64::max);
        assert!(approx_eq(max_r, 1.0));
        let east = &panel.wedges[1];
        let east_r = east
            .outline
            .iter()
            .map(|&(x, y)| (x * x + y * y).sqrt())
            .fold(0.0, f64::max);
        assert!(approx_eq(east_r, 0.5));
        assert!(panel.wedges[3].outline.is_empty());
    }

    #[test]
    fn bars_are_centred_clockwise_from_north() {
        let hist = CircularHistogram::build(&[90.0], 36).expect("hist");
        let panel = render_panel(hist.bins(), "x").expect("panel");
        let east = &panel.wedges[9];
        let (sx, sy) = east.outline.iter().skip(1).fold((0.0f64, 0.0f64), |acc, p| {
            (acc.0 + p.0, acc.1 + p.1)
        });
        assert!(sx > 0.0, "bar should point East");
        assert!(sy.abs() < 1e-9, "bar should be symmetric about the East axis");
    }

    #[test]
    fn only_cardinals_are_labelled() {
        let hist = CircularHistogram::build(&[10.0], 36).expect("hist");
        let panel = render_panel(hist.bins(), "x").expect("panel");
        let labels: Vec<_> = panel
            .angular_ticks
            .iter()
            .filter_map(|t| t.label.as_deref())
            .collect();
        assert_eq!(labels, vec!["N", "E", "S", "W"]);
        assert_eq!(panel.rings.len(), RING_COUNT - 1);
        assert!(approx_eq(*panel.rings.last().expect("ring"), 1.0));
    }

    #[test]
    fn empty_histogram_renders_empty_panel() {
        let hist = CircularHistogram::build(&[], 36).expect("hist");
        let panel = render_panel(hist.bins(), "Nowhere").expect("panel");
        assert!(panel.is_empty());
        assert_eq!(panel.wedges.len(), 36);
        assert!(panel.wedges.iter().all(|w| w.outline.is_empty()));
    }

    #[test]
    fn rejects_irregular_bin_sequences() {
        let hist = CircularHistogram::build(&[10.0], 36).expect("hist");
        assert!(render_panel(&hist.bins()[..7], "x").is_err());
        assert!(render_panel(&[], "x").is_err());
    }
}
