//! GUI module - Chart window

mod app;
mod chart_viewer;

pub use app::show_figure;
pub use chart_viewer::ChartViewer;
