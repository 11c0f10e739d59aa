//! Rasterisation of figures and street networks with `plotters`.
//!
//! Drawing happens into an in-memory RGB buffer; writing it to disk is left to
//! `image::io`.
use super::grid::{CompositeFigure, GridShape};
use super::panel::{circle_outline, PolarPanel};
use super::style::{FigureStyle, PanelStyle, Rgb};
use crate::angle::compass_to_xy;
use crate::error::{OrientationError, Result};
use crate::graph::StreetGraph;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::collections::HashMap;

/// Room around the unit circle in chart units, for the N/E/S/W labels.
const CHART_EXTENT: f64 = 1.22;
const TICK_LABEL_RADIUS: f64 = 1.11;

/// Owned 8-bit RGB pixel buffer, row-major with no padding.
#[derive(Clone, Debug)]
pub struct RgbCanvas {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0u8; width as usize * height as usize * 3],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[i], self.data[i + 1], self.data[i + 2]])
    }
}

/// Pixel size of a figure: square cells under a title band.
pub fn figure_dimensions(shape: GridShape, style: &FigureStyle) -> (u32, u32) {
    let width = shape.ncols as u32 * style.panel_px;
    let height = shape.nrows as u32 * style.panel_px + style.title_band_px;
    (width, height)
}

fn render_err<E: std::fmt::Display>(err: E) -> OrientationError {
    OrientationError::Render(err.to_string())
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c[0], c[1], c[2])
}

/// Draws the whole composite figure. Cells past the last panel stay blank.
pub fn draw_figure(figure: &CompositeFigure, style: &FigureStyle) -> Result<RgbCanvas> {
    let (width, height) = figure_dimensions(figure.shape, style);
    let mut canvas = RgbCanvas::new(width, height);
    {
        let root =
            BitMapBackend::with_buffer(&mut canvas.data, (width, height)).into_drawing_area();
        root.fill(&rgb(style.background)).map_err(render_err)?;
        let (title_area, grid_area) = root.split_vertically(style.title_band_px);

        let title_font = (style.panel.font_family.as_str(), style.title_size)
            .into_font()
            .color(&rgb(style.text_color))
            .pos(Pos::new(HPos::Center, VPos::Center));
        title_area
            .draw(&Text::new(
                figure.title.as_str(),
                ((width / 2) as i32, (style.title_band_px / 2) as i32),
                title_font,
            ))
            .map_err(render_err)?;

        let cells = grid_area.split_evenly((figure.shape.nrows, figure.shape.ncols));
        for (cell, panel) in cells.iter().zip(&figure.panels) {
            draw_panel(cell, panel, &style.panel, rgb(style.text_color))?;
        }
        root.present().map_err(render_err)?;
    }
    Ok(canvas)
}

/// Draws one polar panel into `area`, keeping the plot circular.
pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PolarPanel,
    style: &PanelStyle,
    text_color: RGBColor,
) -> Result<()> {
    let title_font = (style.font_family.as_str(), style.title_size)
        .into_font()
        .color(&text_color);
    let inner = area.titled(&panel.title, title_font).map_err(render_err)?;
    let square = square_region(&inner, style.margin_px);

    let mut chart = ChartBuilder::on(&square)
        .build_cartesian_2d(-CHART_EXTENT..CHART_EXTENT, -CHART_EXTENT..CHART_EXTENT)
        .map_err(render_err)?;

    let grid = rgb(style.grid_color).mix(style.grid_alpha);
    chart
        .draw_series(
            panel
                .rings
                .iter()
                .map(|&r| PathElement::new(circle_outline(r), grid.stroke_width(1))),
        )
        .map_err(render_err)?;
    chart
        .draw_series(panel.angular_ticks.iter().map(|tick| {
            let (x, y) = compass_to_xy(tick.bearing_deg);
            PathElement::new(vec![(0.0, 0.0), (x, y)], grid.stroke_width(1))
        }))
        .map_err(render_err)?;

    let fill = rgb(style.bar_color).mix(style.bar_alpha).filled();
    let edge = rgb(style.edge_color).stroke_width(style.edge_width);
    let bars = panel.wedges.iter().filter(|w| !w.outline.is_empty());
    chart
        .draw_series(bars.clone().map(|w| Polygon::new(w.outline.clone(), fill)))
        .map_err(render_err)?;
    chart
        .draw_series(bars.map(|w| PathElement::new(w.outline.clone(), edge)))
        .map_err(render_err)?;

    let tick_font = (style.font_family.as_str(), style.tick_size)
        .into_font()
        .color(&text_color)
        .pos(Pos::new(HPos::Center, VPos::Center));
    chart
        .draw_series(panel.angular_ticks.iter().filter_map(|tick| {
            let label = tick.label.clone()?;
            let (x, y) = compass_to_xy(tick.bearing_deg);
            Some(Text::new(
                label,
                (x * TICK_LABEL_RADIUS, y * TICK_LABEL_RADIUS),
                tick_font.clone(),
            ))
        }))
        .map_err(render_err)?;
    Ok(())
}

/// Largest centred square inside `area`, shrunk by `margin` on every side.
fn square_region<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    margin: u32,
) -> DrawingArea<DB, Shift> {
    let (w, h) = area.dim_in_pixel();
    let side = w.min(h).saturating_sub(2 * margin);
    let pad_x = (w.saturating_sub(side)) / 2;
    let pad_y = (h.saturating_sub(side)) / 2;
    area.margin(pad_y, h - side - pad_y, pad_x, w - side - pad_x)
}

/// Draws a street network as straight node-to-node segments in an
/// equirectangular projection around the graph's centre latitude.
pub fn draw_network(graph: &StreetGraph, size_px: u32, style: &PanelStyle) -> Result<RgbCanvas> {
    let (min_lat, max_lat, min_lon, max_lon) = graph.bounds().ok_or_else(|| {
        OrientationError::Render("street network has no nodes to draw".to_string())
    })?;
    let lon_scale = ((min_lat + max_lat) * 0.5).to_radians().cos().max(1e-6);
    let span_x = ((max_lon - min_lon) * lon_scale).max(1e-9);
    let span_y = (max_lat - min_lat).max(1e-9);
    let (width, height) = if span_x >= span_y {
        (size_px, ((size_px as f64 * span_y / span_x).round() as u32).max(1))
    } else {
        (((size_px as f64 * span_x / span_y).round() as u32).max(1), size_px)
    };

    let nodes: HashMap<u64, (f64, f64)> = graph
        .nodes
        .iter()
        .map(|n| (n.id, ((n.lon - min_lon) * lon_scale, n.lat - min_lat)))
        .collect();

    let mut canvas = RgbCanvas::new(width, height);
    {
        let root =
            BitMapBackend::with_buffer(&mut canvas.data, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        let mut chart = ChartBuilder::on(&root)
            .build_cartesian_2d(0.0..span_x, 0.0..span_y)
            .map_err(render_err)?;
        let stroke = rgb(style.bar_color).stroke_width(1);
        chart
            .draw_series(graph.edges.iter().filter_map(|e| {
                let a = *nodes.get(&e.u)?;
                let b = *nodes.get(&e.v)?;
                Some(PathElement::new(vec![a, b], stroke))
            }))
            .map_err(render_err)?;
        root.present().map_err(render_err)?;
    }
    Ok(canvas)
}
