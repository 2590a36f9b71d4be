//! Chart Plotter Module
//! Draws a figure interactively using egui_plot.

use crate::charts::{Figure, MarkerShape, Trace};
use egui::Color32;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints, PlotUi, Points};

/// Draws figures onto an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color(trace: &Trace) -> Color32 {
        Color32::from_rgb(trace.color[0], trace.color[1], trace.color[2])
    }

    pub fn marker_shape(marker: MarkerShape) -> egui_plot::MarkerShape {
        match marker {
            MarkerShape::Circle => egui_plot::MarkerShape::Circle,
            MarkerShape::Square => egui_plot::MarkerShape::Square,
            MarkerShape::TriangleUp => egui_plot::MarkerShape::Up,
            MarkerShape::Cross => egui_plot::MarkerShape::Cross,
        }
    }

    /// Draw all traces with gridlines, axis labels and legend.
    /// The initial view matches the figure's axis ranges.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure) {
        let mut plot = Plot::new(format!("figure_{}", figure.title))
            .x_axis_label(figure.x_label.clone())
            .y_axis_label(figure.y_label.clone())
            .show_grid(figure.show_grid)
            .allow_scroll(false)
            .include_x(figure.x_range.min)
            .include_x(figure.x_range.max)
            .include_y(figure.y_range.min)
            .include_y(figure.y_range.max);

        if figure.show_legend {
            plot = plot.legend(Legend::default().position(Corner::LeftTop));
        }

        plot.show(ui, |plot_ui| {
            for trace in &figure.traces {
                Self::draw_trace(plot_ui, trace);
            }
        });
    }

    /// Line and markers share the trace label so the legend shows one entry.
    fn draw_trace(plot_ui: &mut PlotUi, trace: &Trace) {
        let color = Self::color(trace);
        let points: Vec<[f64; 2]> = trace.points.iter().map(|&(x, y)| [x, y]).collect();

        plot_ui.line(
            Line::new(PlotPoints::from(points.clone()))
                .color(color)
                .width(trace.line_width as f32)
                .name(&trace.label),
        );

        plot_ui.points(
            Points::new(PlotPoints::from(points))
                .shape(Self::marker_shape(trace.marker))
                .radius(trace.marker_size as f32)
                .filled(true)
                .color(color)
                .name(&trace.label),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_mapping() {
        assert_eq!(
            ChartPlotter::marker_shape(MarkerShape::Circle),
            egui_plot::MarkerShape::Circle
        );
        assert_eq!(
            ChartPlotter::marker_shape(MarkerShape::Square),
            egui_plot::MarkerShape::Square
        );
    }

    #[test]
    fn trace_color() {
        let trace = Trace {
            label: "A".to_string(),
            points: vec![(1.0, 2.0)],
            marker: MarkerShape::Circle,
            color: [31, 119, 180],
            line_width: 1.5,
            marker_size: 3.0,
        };
        assert_eq!(ChartPlotter::color(&trace), Color32::from_rgb(31, 119, 180));
    }
}
