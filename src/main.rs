//! Sortplot - Sorting Time Comparison Chart
//!
//! Plots recorded insertion sort and heap sort timings against input size.

use sortplot::charts::ChartRenderer;
use sortplot::data::sample;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sortplot=info")),
        )
        .init();

    let dataset = sample::sorting_comparison()?;
    info!("Sorting timings:\n{}", dataset.summary_table());

    // Blocks until the window is closed
    ChartRenderer::default().show(&dataset)?;

    Ok(())
}
