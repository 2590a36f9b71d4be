//! Chart Style Module
//! Compiled-in figure configuration: size, labels, palette and marker cycle.

use crate::charts::MarkerShape;

/// Trace colors, assigned in series order.
pub const PALETTE: [[u8; 3]; 10] = [
    [31, 119, 180],  // Blue
    [255, 127, 14],  // Orange
    [44, 160, 44],   // Green
    [214, 39, 40],   // Red
    [148, 103, 189], // Purple
    [140, 86, 75],   // Brown
    [227, 119, 194], // Pink
    [127, 127, 127], // Grey
    [188, 189, 34],  // Olive
    [23, 190, 207],  // Cyan
];

/// Marker per series: circle, then square, then the rest.
pub const MARKER_CYCLE: [MarkerShape; 4] = [
    MarkerShape::Circle,
    MarkerShape::Square,
    MarkerShape::TriangleUp,
    MarkerShape::Cross,
];

/// Figure settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    /// Figure width in inches
    pub width_in: f64,
    /// Figure height in inches
    pub height_in: f64,
    pub dpi: f64,
    /// Overrides the title derived from the series labels
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub show_grid: bool,
    pub show_legend: bool,
    pub line_width: f64,
    /// Marker radius in pixels
    pub marker_size: f64,
    /// Fraction of the data span added on each side of an axis
    pub axis_margin: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width_in: 8.0,
            height_in: 5.0,
            dpi: 100.0,
            title: None,
            x_label: "Number of Elements (n)".to_string(),
            y_label: "Time Taken (seconds)".to_string(),
            show_grid: true,
            show_legend: true,
            line_width: 1.5,
            marker_size: 3.0,
            axis_margin: 0.05,
        }
    }
}

impl ChartStyle {
    pub fn color_for(index: usize) -> [u8; 3] {
        PALETTE[index % PALETTE.len()]
    }

    pub fn marker_for(index: usize) -> MarkerShape {
        MARKER_CYCLE[index % MARKER_CYCLE.len()]
    }

    /// Title for the given series labels, unless overridden.
    pub fn title_for(&self, labels: &[&str]) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => format!("Sorting Time Comparison: {}", labels.join(" vs. ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_markers() {
        assert_eq!(ChartStyle::marker_for(0), MarkerShape::Circle);
        assert_eq!(ChartStyle::marker_for(1), MarkerShape::Square);
        assert_eq!(ChartStyle::marker_for(4), MarkerShape::Circle);
    }

    #[test]
    fn title_override() {
        let mut style = ChartStyle::default();
        assert_eq!(
            style.title_for(&["A", "B", "C"]),
            "Sorting Time Comparison: A vs. B vs. C"
        );
        style.title = Some("Custom".to_string());
        assert_eq!(style.title_for(&["A"]), "Custom");
    }
}
