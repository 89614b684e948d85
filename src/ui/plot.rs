use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::PaletteKey;
use crate::render::{Figure, LineStyle, PointColors, ScatterSeries};

// ---------------------------------------------------------------------------
// Figure plot (central panel)
// ---------------------------------------------------------------------------

const POINT_RADIUS: f32 = 3.5;

/// Render every series of `figure` into the central panel.
pub fn figure_plot(ui: &mut Ui, figure: &Figure) {
    Plot::new("figure_plot")
        .legend(Legend::default())
        .x_axis_label(figure.x_label.clone())
        .y_axis_label(figure.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &figure.scatters {
                for (key, points) in group_by_color(series) {
                    let name = if series_is_uniform(series) {
                        series.name.clone()
                    } else {
                        key.to_string()
                    };
                    plot_ui.points(
                        Points::new(PlotPoints::new(points))
                            .name(name)
                            .color(key.color32())
                            .shape(MarkerShape::Circle)
                            .filled(true)
                            .radius(POINT_RADIUS),
                    );
                }
            }

            for line in &figure.lines {
                let points: Vec<[f64; 2]> = line
                    .x
                    .iter()
                    .zip(line.y.iter())
                    .map(|(&x, &y)| [x, y])
                    .collect();

                if line.markers {
                    plot_ui.points(
                        Points::new(PlotPoints::new(points.clone()))
                            .color(line.color.color32())
                            .radius(POINT_RADIUS - 1.0),
                    );
                }

                plot_ui.line(
                    Line::new(PlotPoints::new(points))
                        .name(&line.name)
                        .color(line.color.color32())
                        .style(line_style(line.style))
                        .width(1.5),
                );
            }
        });
}

/// Points of one scatter series bucketed by palette key, in key order.
fn group_by_color(series: &ScatterSeries) -> BTreeMap<PaletteKey, Vec<[f64; 2]>> {
    let mut groups: BTreeMap<PaletteKey, Vec<[f64; 2]>> = BTreeMap::new();
    for (i, (&x, &y)) in series.x.iter().zip(series.y.iter()).enumerate() {
        if let Some(key) = series.color_key(i) {
            groups.entry(key).or_default().push([x, y]);
        }
    }
    groups
}

fn series_is_uniform(series: &ScatterSeries) -> bool {
    matches!(series.colors, PointColors::Uniform(_))
}

fn line_style(style: LineStyle) -> egui_plot::LineStyle {
    match style {
        LineStyle::Solid => egui_plot::LineStyle::Solid,
        LineStyle::Dashed => egui_plot::LineStyle::Dashed { length: 10.0 },
        LineStyle::Dotted => egui_plot::LineStyle::Dotted { spacing: 6.0 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_color_buckets_points() {
        let keys = [0, 1, 0]
            .iter()
            .map(|&l| PaletteKey::from_label(l).unwrap())
            .collect();
        let series = ScatterSeries {
            name: "X1 vs X0".to_string(),
            x: vec![0.1, 0.3, 0.5],
            y: vec![0.2, 0.4, 0.6],
            colors: PointColors::PerPoint(keys),
        };
        let groups = group_by_color(&series);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&PaletteKey::C0], vec![[0.1, 0.2], [0.5, 0.6]]);
        assert_eq!(groups[&PaletteKey::C1], vec![[0.3, 0.4]]);
    }
}
