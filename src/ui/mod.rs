//! Native plot window.

pub mod panels;
pub mod plot;

use eframe::egui;
use log::info;

use crate::app::FigureWindow;
use crate::config::WindowConfig;
use crate::data::model::Dataset;
use crate::error::{ExplorerError, Result};
use crate::render::Figure;

/// Open a window showing `figure` and block until it is closed.
pub fn show_figure(figure: &Figure, dataset: &Dataset, config: &WindowConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    info!("Showing '{}' ({} points)", figure.title, figure.point_count());
    let window = FigureWindow::new(figure.clone(), dataset.clone());
    eframe::run_native(
        &figure.title,
        options,
        Box::new(move |_cc| Ok(Box::new(window))),
    )
    .map_err(|e| ExplorerError::Render(format!("cannot open plot window: {e}")))?;
    info!("Plot window closed");
    Ok(())
}
