//! Run configuration for the `street_orientation` binary.
use super::places::{load_places, PlaceList};
use crate::error::{OrientationError, Result};
use crate::histogram::DEFAULT_BINS;
use crate::render::FigureStyle;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "City Street Network Orientation";

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    pub places: PlacesSource,
    /// Directory searched by the JSON graph provider.
    pub graph_dir: PathBuf,
    #[serde(default = "default_title")]
    pub title: String,
    /// Weight bearing counts by street length.
    #[serde(default)]
    pub weight_by_length: bool,
    #[serde(default = "default_bins")]
    pub n_bins: usize,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub style: FigureStyle,
}

/// Places given inline or as a path to a place-list file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PlacesSource {
    File(PathBuf),
    Inline(PlaceList),
}

impl PlacesSource {
    pub fn resolve(&self) -> Result<PlaceList> {
        match self {
            PlacesSource::File(path) => load_places(path),
            PlacesSource::Inline(places) if places.is_empty() => Err(OrientationError::EmptyPlaceSet),
            PlacesSource::Inline(places) => Ok(places.clone()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub image_dir: PathBuf,
    /// Append `_MMDDYYYY-HHMM` to the figure file name.
    pub timestamp: bool,
    pub report_json: Option<PathBuf>,
    /// When set, each place's network is drawn to `<dir>/<slug>.png`.
    pub network_image_dir: Option<PathBuf>,
    pub network_image_px: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("images"),
            timestamp: false,
            report_json: None,
            network_image_dir: None,
            network_image_px: 800,
        }
    }
}

impl OutputConfig {
    pub fn figure_path(&self, title: &str, now: Option<NaiveDateTime>) -> PathBuf {
        let stamp = if self.timestamp { now } else { None };
        self.image_dir.join(figure_file_name(title, stamp))
    }
}

/// `<title lower-cased, spaces as underscores>[_MMDDYYYY-HHMM].png`
pub fn figure_file_name(title: &str, timestamp: Option<NaiveDateTime>) -> String {
    let stem = title.to_lowercase().replace(' ', "_");
    match timestamp {
        Some(ts) => format!("{stem}_{}.png", ts.format("%m%d%Y-%H%M")),
        None => format!("{stem}.png"),
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_bins() -> usize {
    DEFAULT_BINS
}

pub fn load_config(path: &Path) -> Result<RunConfig> {
    let data = fs::read_to_string(path).map_err(|e| OrientationError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&data).map_err(|e| OrientationError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
