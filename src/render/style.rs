//! Visual styling, injectable through the run configuration.
//!
//! Colours are plain `[r, g, b]` triples so they round-trip through JSON.
use serde::{Deserialize, Serialize};

pub type Rgb = [u8; 3];

/// Look of a single polar panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelStyle {
    pub bar_color: Rgb,
    pub bar_alpha: f64,
    pub edge_color: Rgb,
    pub edge_width: u32,
    pub grid_color: Rgb,
    pub grid_alpha: f64,
    pub font_family: String,
    pub title_size: f64,
    pub tick_size: f64,
    /// Pixels kept free around the polar plot inside its cell.
    pub margin_px: u32,
}

impl Default for PanelStyle {
    fn default() -> Self {
        Self {
            bar_color: [0x00, 0x33, 0x66],
            bar_alpha: 0.7,
            edge_color: [0, 0, 0],
            edge_width: 1,
            grid_color: [0, 0, 0],
            grid_alpha: 0.2,
            font_family: "sans-serif".to_string(),
            title_size: 24.0,
            tick_size: 14.0,
            margin_px: 30,
        }
    }
}

/// Look of the composite figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    /// Side of each square grid cell in pixels.
    pub panel_px: u32,
    /// Height of the band above the grid holding the shared title.
    pub title_band_px: u32,
    pub title_size: f64,
    pub background: Rgb,
    pub text_color: Rgb,
    pub panel: PanelStyle,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            panel_px: 600,
            title_band_px: 140,
            title_size: 60.0,
            background: [255, 255, 255],
            text_color: [0, 0, 0],
            panel: PanelStyle::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let style: FigureStyle =
            serde_json::from_str(r#"{"panel_px": 300, "panel": {"bar_alpha": 0.5}}"#)
                .expect("parse style");
        assert_eq!(style.panel_px, 300);
        assert_eq!(style.title_band_px, FigureStyle::default().title_band_px);
        assert_eq!(style.panel.bar_alpha, 0.5);
        assert_eq!(style.panel.bar_color, [0x00, 0x33, 0x66]);
    }
}
