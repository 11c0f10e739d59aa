//! Multi-panel layout: one polar panel per place on a near-square grid.
use super::panel::{render_panel, PolarPanel};
use crate::error::{OrientationError, Result};
use crate::histogram::HistogramBin;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Rows and columns of the panel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridShape {
    pub nrows: usize,
    pub ncols: usize,
}

impl GridShape {
    /// `ncols = ceil(sqrt(n))`, `nrows = ceil(n / ncols)`.
    pub fn for_count(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(OrientationError::EmptyPlaceSet);
        }
        let ncols = ceil_sqrt(n);
        let nrows = n.div_ceil(ncols);
        Ok(Self { nrows, ncols })
    }

    pub fn cells(&self) -> usize {
        self.nrows * self.ncols
    }

    /// Row-major `(row, col)` of the `index`-th cell.
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.ncols, index % self.ncols)
    }
}

/// Smallest `c` with `c * c >= n`, computed without floating point.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 1 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c
}

/// All panels of a run plus the shared title.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeFigure {
    pub title: String,
    pub shape: GridShape,
    /// Panels sorted by place label; panel `i` occupies grid cell `i`.
    pub panels: Vec<PolarPanel>,
}

impl CompositeFigure {
    /// Panel at a grid cell, or `None` for trailing blank cells.
    pub fn cell(&self, row: usize, col: usize) -> Option<&PolarPanel> {
        if row >= self.shape.nrows || col >= self.shape.ncols {
            return None;
        }
        self.panels.get(row * self.shape.ncols + col)
    }

    pub fn blank_cells(&self) -> usize {
        self.shape.cells() - self.panels.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.panels.iter().map(|p| p.label.as_str())
    }
}

/// Renders every place's bins to a panel and arranges them row-major in
/// ascending label order. Labels must be unique.
pub fn compose<K, B, I>(places: I, title: &str) -> Result<CompositeFigure>
where
    I: IntoIterator<Item = (K, B)>,
    K: AsRef<str>,
    B: AsRef<[HistogramBin]>,
{
    let mut sorted: BTreeMap<String, B> = BTreeMap::new();
    for (label, bins) in places {
        let label = label.as_ref();
        if sorted.insert(label.to_string(), bins).is_some() {
            return Err(OrientationError::DuplicatePlace {
                label: label.to_string(),
            });
        }
    }
    let shape = GridShape::for_count(sorted.len())?;
    let panels = sorted
        .iter()
        .map(|(label, bins)| render_panel(bins.as_ref(), label))
        .collect::<Result<Vec<_>>>()?;
    debug!(
        "compose '{}' places={} grid={}x{}",
        title,
        panels.len(),
        shape.nrows,
        shape.ncols
    );
    Ok(CompositeFigure {
        title: title.to_string(),
        shape,
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_sqrt_matches_definition() {
        for n in 1..2000usize {
            let c = ceil_sqrt(n);
            assert!(c * c >= n && (c - 1) * (c - 1) < n, "n={n} c={c}");
        }
    }

    #[test]
    fn shape_of_single_place() {
        assert_eq!(
            GridShape::for_count(1).expect("shape"),
            GridShape { nrows: 1, ncols: 1 }
        );
        assert_eq!(
            GridShape::for_count(2).expect("shape"),
            GridShape { nrows: 1, ncols: 2 }
        );
    }

    #[test]
    fn empty_place_set_is_rejected() {
        assert!(matches!(
            GridShape::for_count(0),
            Err(OrientationError::EmptyPlaceSet)
        ));
    }

    #[test]
    fn position_is_row_major() {
        let shape = GridShape::for_count(5).expect("shape");
        assert_eq!(shape.position(0), (0, 0));
        assert_eq!(shape.position(2), (0, 2));
        assert_eq!(shape.position(3), (1, 0));
    }
}
