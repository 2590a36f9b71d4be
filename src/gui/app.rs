//! Chart Window
//! Native window hosting a single figure.

use crate::charts::{ChartError, Figure};
use crate::gui::ChartViewer;
use eframe::egui;
use tracing::info;

/// Main application window.
pub struct ChartWindow {
    chart_viewer: ChartViewer,
}

impl ChartWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, figure: Figure) -> Self {
        Self {
            chart_viewer: ChartViewer::new(figure),
        }
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}

/// Open a window sized to the figure and block until it is closed.
pub fn show_figure(figure: Figure) -> Result<(), ChartError> {
    let (width, height) = figure.pixel_size();
    let title = figure.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_title(title.as_str()),
        ..Default::default()
    };

    info!(width, height, "Opening chart window");

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, figure)))),
    )
    .map_err(|e| ChartError::Display(e.to_string()))?;

    info!("Chart window closed");
    Ok(())
}
