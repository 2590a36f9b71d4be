//! Chart Viewer Widget
//! Central panel content: figure title above the interactive plot.

use crate::charts::{ChartPlotter, Figure};
use egui::RichText;

/// Shows one figure filling the available space.
pub struct ChartViewer {
    pub figure: Figure,
}

impl ChartViewer {
    pub fn new(figure: Figure) -> Self {
        Self { figure }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&self.figure.title).size(16.0).strong());
        });
        ui.add_space(6.0);

        ChartPlotter::draw_figure(ui, &self.figure);
    }
}
