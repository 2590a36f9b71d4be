//! Chart Renderer
//! Turns a dataset into a figure and hands it to the viewer or the static renderer.

use crate::charts::{AxisRange, ChartStyle, Figure, StaticChartRenderer, Trace};
use crate::data::{Dataset, DatasetError};
use crate::gui;
use image::RgbImage;
use thiserror::Error;
use tracing::{debug, info, Level};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    InvalidInput(#[from] DatasetError),
    #[error("Failed to render chart: {0}")]
    Render(String),
    #[error("Failed to open chart window: {0}")]
    Display(String),
}

/// Builds one line+marker trace per series and displays the result.
#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    style: ChartStyle,
}

impl ChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    /// Build the figure for a dataset. Pure: same dataset, same figure.
    pub fn build_figure(&self, dataset: &Dataset) -> Figure {
        let style = &self.style;
        let labels: Vec<&str> = dataset.series().iter().map(|s| s.label()).collect();

        let traces: Vec<Trace> = dataset
            .series()
            .iter()
            .enumerate()
            .map(|(i, series)| Trace {
                label: series.label().to_string(),
                points: dataset.points(series),
                marker: ChartStyle::marker_for(i),
                color: ChartStyle::color_for(i),
                line_width: style.line_width,
                marker_size: style.marker_size,
            })
            .collect();

        let x_range = AxisRange::padded(dataset.x().iter().copied(), style.axis_margin);
        let y_range = AxisRange::padded(
            dataset.series().iter().flat_map(|s| s.values().iter().copied()),
            style.axis_margin,
        );

        let figure = Figure {
            title: style.title_for(&labels),
            width_in: style.width_in,
            height_in: style.height_in,
            dpi: style.dpi,
            x_label: style.x_label.clone(),
            y_label: style.y_label.clone(),
            x_range,
            y_range,
            traces,
            show_grid: style.show_grid,
            show_legend: style.show_legend,
        };

        debug!(
            traces = figure.traces.len(),
            points = dataset.len(),
            "Built figure '{}'",
            figure.title
        );
        if tracing::enabled!(Level::DEBUG) {
            if let Ok(json) = figure.to_json() {
                debug!("Figure snapshot:\n{}", json);
            }
        }

        figure
    }

    /// Validate raw columns, then build and show the figure.
    ///
    /// A length mismatch is returned before any window is created.
    pub fn render(&self, x: &[f64], columns: &[(&str, &[f64])]) -> Result<(), ChartError> {
        let dataset = Dataset::from_columns(x, columns)?;
        self.show(&dataset)
    }

    /// Build the figure and block until its window is closed.
    pub fn show(&self, dataset: &Dataset) -> Result<(), ChartError> {
        let figure = self.build_figure(dataset);
        info!("Displaying '{}'", figure.title);
        gui::show_figure(figure)
    }

    /// Render the figure into an in-memory bitmap without opening a window.
    pub fn snapshot(&self, dataset: &Dataset) -> Result<RgbImage, ChartError> {
        StaticChartRenderer::render(&self.build_figure(dataset))
    }
}
