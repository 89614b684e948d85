use eframe::egui;

use crate::data::model::Dataset;
use crate::render::Figure;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// A read-only window over one figure and the dataset behind it.
pub struct FigureWindow {
    pub figure: Figure,
    pub dataset: Dataset,
}

impl FigureWindow {
    pub fn new(figure: Figure, dataset: Dataset) -> Self {
        Self { figure, dataset }
    }
}

impl eframe::App for FigureWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and close ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.figure);
        });

        // ---- Left side panel: summary ----
        egui::SidePanel::left("summary_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.dataset, &self.figure);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::figure_plot(ui, &self.figure);
        });
    }
}
