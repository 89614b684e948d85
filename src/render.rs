//! Figure description built from derived vectors.
//!
//! A [`Figure`] is plain data: it is built and validated here and drawn by
//! the window in [`crate::ui`]. Nothing in this module touches a display.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::color::{keys_for_labels, PaletteKey};
use crate::data::model::DerivedVector;
use crate::error::{ExplorerError, Result};

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum PointColors {
    /// Every point drawn with the same key.
    Uniform(PaletteKey),
    /// One key per point, same length as the series.
    PerPoint(Vec<PaletteKey>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub colors: PointColors,
}

impl ScatterSeries {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Palette key of point `i`.
    pub fn color_key(&self, i: usize) -> Option<PaletteKey> {
        if i >= self.len() {
            return None;
        }
        match &self.colors {
            PointColors::Uniform(k) => Some(*k),
            PointColors::PerPoint(keys) => keys.get(i).copied(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: PaletteKey,
    pub style: LineStyle,
    pub markers: bool,
}

// ---------------------------------------------------------------------------
// Figure
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Figure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub scatters: Vec<ScatterSeries>,
    pub lines: Vec<LineSeries>,
}

impl Figure {
    pub fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        Figure {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            ..Default::default()
        }
    }

    /// Add a scatter of `y` against `x`.
    pub fn scatter(
        &mut self,
        x: &DerivedVector,
        y: &DerivedVector,
        colors: PointColors,
    ) -> Result<&mut Self> {
        check_lengths(x, y)?;
        if let PointColors::PerPoint(keys) = &colors {
            if keys.len() != x.len() {
                return Err(ExplorerError::Render(format!(
                    "{} colors for {} points",
                    keys.len(),
                    x.len()
                )));
            }
        }
        self.scatters.push(ScatterSeries {
            name: format!("{} vs {}", y.name, x.name),
            x: x.values.clone(),
            y: y.values.clone(),
            colors,
        });
        Ok(self)
    }

    /// Add a continuous curve through `(x, y)`, optionally marking every sample.
    pub fn line(
        &mut self,
        x: &DerivedVector,
        y: &DerivedVector,
        color: PaletteKey,
        style: LineStyle,
        markers: bool,
    ) -> Result<&mut Self> {
        check_lengths(x, y)?;
        self.lines.push(LineSeries {
            name: y.name.clone(),
            x: x.values.clone(),
            y: y.values.clone(),
            color,
            style,
            markers,
        });
        Ok(self)
    }

    /// Number of scattered points across all scatter series.
    pub fn point_count(&self) -> usize {
        self.scatters.iter().map(|s| s.len()).sum()
    }

    /// `(min_x, max_x, min_y, max_y)` over every series, None when empty.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let xs = self
            .scatters
            .iter()
            .flat_map(|s| s.x.iter())
            .chain(self.lines.iter().flat_map(|l| l.x.iter()));
        let ys = self
            .scatters
            .iter()
            .flat_map(|s| s.y.iter())
            .chain(self.lines.iter().flat_map(|l| l.y.iter()));
        let (x0, x1) = min_max(xs)?;
        let (y0, y1) = min_max(ys)?;
        Some((x0, x1, y0, y1))
    }
}

fn min_max<'a>(values: impl Iterator<Item = &'a f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

fn check_lengths(x: &DerivedVector, y: &DerivedVector) -> Result<()> {
    if x.len() != y.len() {
        return Err(ExplorerError::Render(format!(
            "'{}' has {} values but '{}' has {}",
            x.name,
            x.len(),
            y.name,
            y.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// The three fixed compositions
// ---------------------------------------------------------------------------

/// Scatter of `y` against `x`, nothing else.
pub fn regression(x: &DerivedVector, y: &DerivedVector, title: &str) -> Result<Figure> {
    let mut fig = Figure::new(title, &x.name, &y.name);
    fig.scatter(x, y, PointColors::Uniform(PaletteKey::C0))?;
    debug!("Regression figure with {} points", fig.point_count());
    Ok(fig)
}

/// Scatter of the samples plus a `C1` curve through `(xf, yf)`.
pub fn function_overlay(
    x: &DerivedVector,
    y: &DerivedVector,
    xf: &DerivedVector,
    yf: &DerivedVector,
    style: LineStyle,
    markers: bool,
    title: &str,
) -> Result<Figure> {
    let mut fig = Figure::new(title, &x.name, &y.name);
    fig.scatter(x, y, PointColors::Uniform(PaletteKey::C0))?;
    fig.line(xf, yf, PaletteKey::C1, style, markers)?;
    debug!(
        "Function figure with {} points and {} curve samples",
        fig.point_count(),
        xf.len()
    );
    Ok(fig)
}

/// Scatter of two feature columns colored by `C{label}`.
pub fn classification(
    x0: &DerivedVector,
    x1: &DerivedVector,
    labels: &[i64],
    title: &str,
) -> Result<Figure> {
    if labels.len() != x0.len() {
        return Err(ExplorerError::Render(format!(
            "{} labels for {} points",
            labels.len(),
            x0.len()
        )));
    }
    let keys = keys_for_labels(labels)?;
    let mut fig = Figure::new(title, &x0.name, &x1.name);
    fig.scatter(x0, x1, PointColors::PerPoint(keys))?;
    debug!("Classification figure with {} points", fig.point_count());
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(name: &str, values: &[f64]) -> DerivedVector {
        DerivedVector::new(name, values.to_vec())
    }

    #[test]
    fn test_regression_plots_every_point() {
        let fig = regression(&v("X", &[1.0, 3.0]), &v("y", &[2.0, 4.1]), "ex1").unwrap();
        assert_eq!(fig.point_count(), 2);
        assert!(fig.lines.is_empty());
        assert_eq!(fig.x_label, "X");
    }

    #[test]
    fn test_mismatched_lengths() {
        let err = regression(&v("X", &[1.0, 3.0]), &v("y", &[2.0]), "t").unwrap_err();
        assert!(matches!(err, ExplorerError::Render(_)));
    }

    #[test]
    fn test_function_overlay_line_style() {
        let fig = function_overlay(
            &v("X", &[0.0]),
            &v("y", &[1.0]),
            &v("Xf", &[0.0, 10.0]),
            &v("yf", &[0.3, 5.3]),
            LineStyle::Solid,
            false,
            "f",
        )
        .unwrap();
        assert_eq!(fig.lines.len(), 1);
        let line = &fig.lines[0];
        assert_eq!(line.color.to_string(), "C1");
        assert_eq!(line.style, LineStyle::Solid);
        assert!(!line.markers);
        assert_eq!(fig.bounds(), Some((0.0, 10.0, 0.3, 5.3)));
    }

    #[test]
    fn test_function_overlay_dashed_with_markers() {
        let fig = function_overlay(
            &v("X", &[0.0]),
            &v("y", &[1.0]),
            &v("Xf", &[0.0, 10.0]),
            &v("yf", &[0.3, 5.3]),
            LineStyle::Dashed,
            true,
            "f",
        )
        .unwrap();
        assert_eq!(fig.lines[0].style, LineStyle::Dashed);
        assert!(fig.lines[0].markers);
    }

    #[test]
    fn test_classification_color_keys() {
        let labels = [0, 1, 2, 1];
        let fig = classification(
            &v("X0", &[0.1, 0.3, 0.5, 0.7]),
            &v("X1", &[0.2, 0.4, 0.6, 0.8]),
            &labels,
            "ex4",
        )
        .unwrap();
        let s = &fig.scatters[0];
        for (i, label) in labels.iter().enumerate() {
            assert_eq!(s.color_key(i).unwrap().to_string(), format!("C{label}"));
        }
    }

    #[test]
    fn test_classification_rejects_unknown_label() {
        let err = classification(&v("a", &[0.0]), &v("b", &[0.0]), &[12], "t").unwrap_err();
        assert!(matches!(err, ExplorerError::Render(_)));
    }
}
