//! Place list: label → opaque query handed to the graph provider.
use crate::error::{OrientationError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Provider-specific place query (a name, an address dict, a polygon id...).
/// Never interpreted by the crate.
pub type PlaceQuery = Value;

/// Places keyed by display label. Sorted, so iteration matches layout order.
pub type PlaceList = BTreeMap<String, PlaceQuery>;

#[derive(Debug, Deserialize)]
struct PlaceFile {
    #[serde(default)]
    places: Option<PlaceList>,
}

/// Reads `{"places": {label: query, ...}}`. A missing or empty `places` key
/// is an error.
pub fn load_places(path: &Path) -> Result<PlaceList> {
    let data = fs::read_to_string(path).map_err(|e| OrientationError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_places(&data).map_err(|message| OrientationError::Json {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_places(data: &str) -> std::result::Result<PlaceList, String> {
    let file: PlaceFile = serde_json::from_str(data).map_err(|e| e.to_string())?;
    match file.places {
        Some(places) if !places.is_empty() => Ok(places),
        _ => Err("can't find a non-empty \"places\" object".to_string()),
    }
}
