use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::model::Dataset;
use crate::render::{Figure, PointColors};

// ---------------------------------------------------------------------------
// Left side panel – dataset summary and legend
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, dataset: &Dataset, figure: &Figure) {
    ui.heading("Dataset");
    ui.separator();

    let (rows, cols) = dataset.shape();
    ui.label(format!("{rows} rows × {cols} columns"));
    ui.add_space(4.0);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.strong("Columns");
            egui::Grid::new("column_summary")
                .striped(true)
                .num_columns(4)
                .show(ui, |ui: &mut Ui| {
                    ui.label("");
                    ui.label("min");
                    ui.label("max");
                    ui.label("mean");
                    ui.end_row();
                    for col in dataset.column_summary() {
                        ui.label(RichText::new(&col.name).strong());
                        ui.label(format!("{:.4}", col.min));
                        ui.label(format!("{:.4}", col.max));
                        ui.label(format!("{:.4}", col.mean));
                        ui.end_row();
                    }
                });
            ui.separator();

            ui.strong("Series");
            for series in &figure.scatters {
                match &series.colors {
                    PointColors::Uniform(key) => {
                        swatch(ui, key.color32(), &format!("{} ({} points)", series.name, series.len()));
                    }
                    PointColors::PerPoint(keys) => {
                        let mut distinct = keys.clone();
                        distinct.sort();
                        distinct.dedup();
                        for key in distinct {
                            let n = keys.iter().filter(|&&k| k == key).count();
                            swatch(ui, key.color32(), &format!("{key} ({n} points)"));
                        }
                    }
                }
            }
            for line in &figure.lines {
                swatch(ui, line.color.color32(), &format!("{} ({} samples)", line.name, line.x.len()));
            }
        });
}

fn swatch(ui: &mut Ui, color: Color32, text: &str) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("●").color(color));
        ui.label(text);
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, figure: &Figure) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.strong(&figure.title);
        ui.separator();
        ui.label(format!("{} points", figure.point_count()));
        ui.separator();
        if ui.button("Continue to inspector").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
        ui.label(RichText::new("Close the window to continue").color(Color32::GRAY));
    });
}
