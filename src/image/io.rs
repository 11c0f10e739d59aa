//! Output helpers for rendered figures and JSON reports.
//!
//! - `save_rgb_png`: write an `RgbCanvas` to a PNG file.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{OrientationError, Result};
use crate::render::RgbCanvas;
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save an RGB canvas as PNG, creating parent directories.
pub fn save_rgb_png(canvas: &RgbCanvas, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    let image = RgbImage::from_raw(canvas.width, canvas.height, canvas.data.clone())
        .ok_or_else(|| OrientationError::Io {
            path: path.to_path_buf(),
            message: format!(
                "buffer of {} bytes does not match {}x{} RGB",
                canvas.data.len(),
                canvas.width,
                canvas.height
            ),
        })?;
    image.save(path).map_err(|e| OrientationError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| OrientationError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| OrientationError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| OrientationError::Io {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }
    Ok(())
}
