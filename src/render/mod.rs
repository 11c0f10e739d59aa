//! From histograms to pixels: panel geometry, grid layout, and drawing.
pub mod draw;
pub mod grid;
pub mod panel;
pub mod style;

pub use self::draw::{draw_figure, draw_network, figure_dimensions, RgbCanvas};
pub use self::grid::{compose, CompositeFigure, GridShape};
pub use self::panel::{render_panel, PolarPanel};
pub use self::style::{FigureStyle, PanelStyle};
