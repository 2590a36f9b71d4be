//! Static Chart Renderer
//! Draws a figure into an in-memory RGB bitmap with plotters.
//!
//! Layout:
//! 1. Title centered on top
//! 2. Plot area with mesh gridlines and axis descriptions
//! 3. One line + marker series per trace, in trace order
//! 4. Legend box in the upper left corner

use crate::charts::{ChartError, Figure, MarkerShape, Trace};
use image::RgbImage;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

const TITLE_FONT: (&str, u32) = ("sans-serif", 20);
const LABEL_FONT: (&str, u32) = ("sans-serif", 14);
const GRID: RGBColor = RGBColor(220, 220, 220); // Grid lines
const LEGEND_MID: i32 = 10;

type Chart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render the figure at its pixel size. Nothing is written to disk.
    pub fn render(figure: &Figure) -> Result<RgbImage, ChartError> {
        let (width, height) = figure.pixel_size();
        let mut buffer = vec![0u8; width as usize * height as usize * 3];

        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(render_error)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(&figure.title, TITLE_FONT)
                .margin(15)
                .x_label_area_size(45)
                .y_label_area_size(60)
                .build_cartesian_2d(
                    figure.x_range.min..figure.x_range.max,
                    figure.y_range.min..figure.y_range.max,
                )
                .map_err(render_error)?;

            Self::draw_mesh(&mut chart, figure)?;

            for trace in &figure.traces {
                Self::draw_trace(&mut chart, trace)?;
            }

            if figure.show_legend {
                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .label_font(LABEL_FONT)
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .draw()
                    .map_err(render_error)?;
            }

            root.present().map_err(render_error)?;
        }

        RgbImage::from_raw(width, height, buffer)
            .ok_or_else(|| ChartError::Render("bitmap size mismatch".to_string()))
    }

    fn draw_mesh(chart: &mut Chart<'_, '_>, figure: &Figure) -> Result<(), ChartError> {
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(figure.x_label.as_str())
            .y_desc(figure.y_label.as_str())
            .axis_desc_style(LABEL_FONT)
            .bold_line_style(GRID)
            .light_line_style(WHITE);

        if !figure.show_grid {
            mesh.disable_mesh();
        }

        mesh.draw().map_err(render_error)
    }

    fn draw_trace(chart: &mut Chart<'_, '_>, trace: &Trace) -> Result<(), ChartError> {
        let color = RGBColor(trace.color[0], trace.color[1], trace.color[2]);
        let stroke = (trace.line_width.round() as u32).max(1);
        let size = (trace.marker_size.round() as i32).max(1);
        let marker = trace.marker;

        // Solid line through the points in supplied order
        let anno = chart
            .draw_series(LineSeries::new(
                trace.points.iter().copied(),
                color.stroke_width(stroke),
            ))
            .map_err(render_error)?
            .label(trace.label.as_str());

        // Legend glyphs must not borrow the backend, so each shape gets its own closure
        match marker {
            MarkerShape::Circle => {
                anno.legend(move |(x, y)| Circle::new((x + LEGEND_MID, y), size, color.filled()));
            }
            MarkerShape::Square => {
                anno.legend(move |(x, y)| {
                    Rectangle::new(
                        [(x + LEGEND_MID - size, y - size), (x + LEGEND_MID + size, y + size)],
                        color.filled(),
                    )
                });
            }
            MarkerShape::TriangleUp => {
                anno.legend(move |(x, y)| {
                    TriangleMarker::new((x + LEGEND_MID, y), size, color.filled())
                });
            }
            MarkerShape::Cross => {
                anno.legend(move |(x, y)| {
                    Cross::new((x + LEGEND_MID, y), size, color.stroke_width(stroke))
                });
            }
        }

        // Markers on top of the line
        let points = trace.points.iter().copied();
        let fill = color.filled();
        let drawn = match marker {
            MarkerShape::Circle => chart.draw_series(points.map(|p| Circle::new(p, size, fill))),
            MarkerShape::Square => chart.draw_series(points.map(|p| {
                EmptyElement::at(p) + Rectangle::new([(-size, -size), (size, size)], fill)
            })),
            MarkerShape::TriangleUp => {
                chart.draw_series(points.map(|p| TriangleMarker::new(p, size, fill)))
            }
            MarkerShape::Cross => chart.draw_series(
                points.map(|p| Cross::new(p, size, color.stroke_width(stroke))),
            ),
        };
        drawn.map_err(render_error)?;

        Ok(())
    }
}

fn render_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartRenderer, ChartStyle};
    use crate::data::{sample, Dataset};

    /// Text needs a system font; pixel checks are skipped on hosts without one.
    fn system_font_available() -> bool {
        let mut buffer = vec![0u8; 32 * 32 * 3];
        let root = BitMapBackend::with_buffer(&mut buffer, (32, 32)).into_drawing_area();
        root.draw(&Text::new("n", (0, 0), ("sans-serif", 12).into_font()))
            .is_ok()
    }

    fn snapshot_of(dataset: &Dataset, style: ChartStyle) -> Option<RgbImage> {
        if !system_font_available() {
            eprintln!("skipping static render: no system font");
            return None;
        }
        match ChartRenderer::new(style).snapshot(dataset) {
            Ok(img) => Some(img),
            Err(e) => panic!("static render failed: {}", e),
        }
    }

    fn render_or_skip(style: ChartStyle) -> Option<RgbImage> {
        snapshot_of(&sample::sorting_comparison().unwrap(), style)
    }

    fn count_color(img: &RgbImage, color: [u8; 3]) -> usize {
        img.pixels().filter(|p| p.0 == color).count()
    }

    #[test]
    fn snapshot_is_pixel_identical() {
        let (Some(a), Some(b)) = (
            render_or_skip(ChartStyle::default()),
            render_or_skip(ChartStyle::default()),
        ) else {
            return;
        };

        assert_eq!(a.dimensions(), (800, 500));
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn snapshot_draws_every_trace() {
        let Some(img) = render_or_skip(ChartStyle::default()) else {
            return;
        };

        assert!(count_color(&img, ChartStyle::color_for(0)) > 0);
        assert!(count_color(&img, ChartStyle::color_for(1)) > 0);
    }

    #[test]
    fn grid_toggle_changes_output() {
        let with_grid = render_or_skip(ChartStyle::default());
        let without_grid = render_or_skip(ChartStyle {
            show_grid: false,
            ..ChartStyle::default()
        });
        let (Some(with_grid), Some(without_grid)) = (with_grid, without_grid) else {
            return;
        };

        let grid = [GRID.0, GRID.1, GRID.2];
        assert!(count_color(&with_grid, grid) > count_color(&without_grid, grid));
    }

    #[test]
    fn snapshot_draws_every_marker_shape() {
        let x = [1.0, 2.0, 3.0];
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 2.0, 1.0];
        let c = [2.0, 3.0, 2.0];
        let d = [1.5, 1.5, 2.5];
        let dataset = Dataset::from_columns(
            &x,
            &[("A", &a[..]), ("B", &b[..]), ("C", &c[..]), ("D", &d[..])],
        )
        .unwrap();

        let Some(img) = snapshot_of(&dataset, ChartStyle::default()) else {
            return;
        };

        for i in 0..4 {
            assert!(count_color(&img, ChartStyle::color_for(i)) > 0);
        }
    }
}
