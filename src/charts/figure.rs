//! Figure Module
//! Backend-independent description of a rendered chart.

use serde::Serialize;

/// Per-point marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerShape {
    Circle,
    Square,
    TriangleUp,
    Cross,
}

/// Visible range of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Data extent padded by `margin` times the span on each side.
    pub fn padded<I>(values: I, margin: f64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let (lo, hi) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });

        if lo > hi {
            return Self { min: 0.0, max: 1.0 };
        }

        let span = hi - lo;
        let pad = if span > 0.0 {
            span * margin
        } else if lo != 0.0 {
            lo.abs() * margin
        } else {
            margin
        };

        Self {
            min: lo - pad,
            max: hi + pad,
        }
    }
}

/// One line+marker trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub marker: MarkerShape,
    pub color: [u8; 3],
    pub line_width: f64,
    pub marker_size: f64,
}

/// Complete chart: traces, axes, legend and title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub title: String,
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub x_label: String,
    pub y_label: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub traces: Vec<Trace>,
    pub show_grid: bool,
    pub show_legend: bool,
}

impl Figure {
    /// Legend labels in trace order.
    pub fn legend_entries(&self) -> Vec<&str> {
        self.traces.iter().map(|t| t.label.as_str()).collect()
    }

    /// Size in pixels at the figure's DPI.
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round() as u32,
            (self.height_in * self.dpi).round() as u32,
        )
    }

    /// Structural snapshot for comparisons and debug logging.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn padded_range() {
        let r = AxisRange::padded([1000.0, 50000.0], 0.05);
        assert_relative_eq!(r.min, 1000.0 - 2450.0);
        assert_relative_eq!(r.max, 50000.0 + 2450.0);
    }

    #[test]
    fn padded_range_flat_data() {
        let r = AxisRange::padded([2.0, 2.0], 0.05);
        assert_relative_eq!(r.min, 1.9);
        assert_relative_eq!(r.max, 2.1);

        let zero = AxisRange::padded([0.0], 0.05);
        assert_relative_eq!(zero.min, -0.05);
        assert_relative_eq!(zero.max, 0.05);
    }

    #[test]
    fn padded_range_no_data() {
        assert_eq!(
            AxisRange::padded(std::iter::empty(), 0.05),
            AxisRange { min: 0.0, max: 1.0 }
        );
    }
}
