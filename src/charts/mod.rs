//! Charts module - Figure model and rendering

mod chart;
mod figure;
mod plotter;
mod renderer;
mod style;

pub use chart::{ChartError, ChartRenderer};
pub use figure::{AxisRange, Figure, MarkerShape, Trace};
pub use plotter::ChartPlotter;
pub use renderer::StaticChartRenderer;
pub use style::ChartStyle;
