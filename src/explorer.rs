//! The load → render → inspect sequence shared by every entry point.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::config::ExplorerConfig;
use crate::data::derive::{labels_from_column, linspace, Quadratic};
use crate::data::loader;
use crate::data::model::Dataset;
use crate::error::{ExplorerError, Result};
use crate::inspect::{self, Binding, Namespace};
use crate::render::{self, Figure};
use crate::state::{RunState, Stage};
use crate::ui;

/// The three fixed plot compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Scatter of column 1 against column 0
    Regression,
    /// Regression scatter plus a sampled quadratic
    Function,
    /// Two feature columns colored by an integer label column
    Classification,
}

impl Variant {
    /// File each variant reads when no path is configured.
    pub fn default_data_path(self) -> &'static str {
        match self {
            Variant::Regression | Variant::Function => "data/ex1.dat",
            Variant::Classification => "data/ex4.dat",
        }
    }

    pub fn data_path(self, config: &ExplorerConfig) -> PathBuf {
        config
            .data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.default_data_path()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Regression => "regression",
            Variant::Function => "function",
            Variant::Classification => "classification",
        };
        write!(f, "{name}")
    }
}

/// A figure plus the bindings derived while building it.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub figure: Figure,
    pub namespace: Namespace,
}

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Load the variant's table.
pub fn load(variant: Variant, config: &ExplorerConfig) -> Result<Dataset> {
    loader::load_file(&variant.data_path(config))
}

/// Derive the variant's vectors from `dataset` and build its figure.
pub fn render(variant: Variant, dataset: &Dataset, config: &ExplorerConfig) -> Result<Rendered> {
    let mut ns = Namespace::new();
    ns.bind("data", Binding::Matrix(dataset.clone()));

    let title = config
        .window
        .title
        .clone()
        .unwrap_or_else(|| default_title(variant, &variant.data_path(config)));

    let mut figure = match variant {
        Variant::Regression => {
            let x = dataset.column(0, "X")?;
            let y = dataset.column(1, "y")?;
            let fig = render::regression(&x, &y, &title)?;
            ns.bind("X", Binding::Vector(x));
            ns.bind("y", Binding::Vector(y));
            fig
        }
        Variant::Function => {
            let x = dataset.column(0, "X")?;
            let y = dataset.column(1, "y")?;
            let f = &config.function;
            let (xf, yf) = Quadratic::from_coefficients(f.coefficients)
                .sample(linspace(f.x_start, f.x_end, f.samples));
            let fig =
                render::function_overlay(&x, &y, &xf, &yf, f.line_style, f.markers, &title)?;
            ns.bind("X", Binding::Vector(x));
            ns.bind("y", Binding::Vector(y));
            ns.bind("Xf", Binding::Vector(xf));
            ns.bind("yf", Binding::Vector(yf));
            fig
        }
        Variant::Classification => {
            let c = &config.classification;
            let label_col = match c.label_column {
                Some(j) => j,
                None => dataset.ncols().checked_sub(1).ok_or_else(|| {
                    ExplorerError::Render("dataset has no columns".to_string())
                })?,
            };
            let labels = labels_from_column(dataset, label_col)?;
            let [a, b] = c.feature_columns;
            let x0 = dataset.column(a, &format!("X{a}"))?;
            let x1 = dataset.column(b, &format!("X{b}"))?;
            let fig = render::classification(&x0, &x1, &labels, &title)?;

            let features = if label_col + 1 == dataset.ncols() {
                dataset.columns_except_last()?
            } else {
                let keep: Vec<usize> = (0..dataset.ncols()).filter(|&j| j != label_col).collect();
                dataset.select_columns(&keep)?
            };
            ns.bind("X", Binding::Matrix(features));
            ns.bind("y", Binding::Labels(labels));
            fig
        }
    };

    if let Some(label) = &config.window.x_label {
        figure.x_label = label.clone();
    }
    if let Some(label) = &config.window.y_label {
        figure.y_label = label.clone();
    }

    info!(
        "Rendered {variant} figure: {} points, {} curves",
        figure.point_count(),
        figure.lines.len()
    );
    Ok(Rendered {
        figure,
        namespace: ns,
    })
}

fn default_title(variant: Variant, path: &Path) -> String {
    let file = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    format!("{file} ({variant})")
}

// ---------------------------------------------------------------------------
// Whole run
// ---------------------------------------------------------------------------

/// Run load → render → inspect once. The returned state is always
/// `Terminated`; any step failing stops the run with that error.
pub fn run(variant: Variant, config: &ExplorerConfig) -> Result<RunState> {
    let mut state = RunState::default();
    let outcome = run_stages(&mut state, variant, config);
    state.terminate();
    match outcome {
        Ok(()) => Ok(state),
        Err(e) => {
            error!("{variant} run stopped: {e}");
            Err(e)
        }
    }
}

fn run_stages(state: &mut RunState, variant: Variant, config: &ExplorerConfig) -> Result<()> {
    let dataset = load(variant, config)?;
    state.set_dataset(dataset.clone())?;

    let rendered = render(variant, &dataset, config)?;
    if config.window.show {
        ui::show_figure(&rendered.figure, &dataset, &config.window)?;
    } else {
        info!("Plot window disabled; figure '{}' not shown", rendered.figure.title);
    }
    state.set_figure(rendered.figure, rendered.namespace)?;

    state.advance(Stage::Inspecting)?;
    inspect::inspect(&state.namespace, &config.inspect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::LineStyle;

    fn ex4() -> Dataset {
        Dataset::from_rows(vec![vec![0.1, 0.2, 0.0], vec![0.3, 0.4, 1.0]]).unwrap()
    }

    #[test]
    fn test_default_paths() {
        let config = ExplorerConfig::default();
        assert_eq!(Variant::Regression.data_path(&config), PathBuf::from("data/ex1.dat"));
        assert_eq!(Variant::Function.data_path(&config), PathBuf::from("data/ex1.dat"));
        assert_eq!(Variant::Classification.data_path(&config), PathBuf::from("data/ex4.dat"));
    }

    #[test]
    fn test_function_bindings() {
        let ds = Dataset::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.1]]).unwrap();
        let r = render(Variant::Function, &ds, &ExplorerConfig::headless()).unwrap();
        let names: Vec<&str> = r.namespace.names().collect();
        assert_eq!(names, vec!["data", "X", "y", "Xf", "yf"]);
        assert_eq!(r.namespace.get("yf").unwrap().len(), 200);
        assert_eq!(r.figure.title, "ex1.dat (function)");
    }

    #[test]
    fn test_function_line_style_from_config() {
        let ds = Dataset::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        let mut config = ExplorerConfig::headless();
        config.function.line_style = LineStyle::Dotted;
        config.function.markers = true;
        let r = render(Variant::Function, &ds, &config).unwrap();
        assert_eq!(r.figure.lines[0].style, LineStyle::Dotted);
        assert!(r.figure.lines[0].markers);
    }

    #[test]
    fn test_classification_bindings() {
        let r = render(Variant::Classification, &ex4(), &ExplorerConfig::headless()).unwrap();
        assert_eq!(r.namespace.get("X").unwrap().shape(), "(2, 2)");
        assert_eq!(r.namespace.get("y"), Some(&Binding::Labels(vec![0, 1])));
        assert_eq!(r.figure.x_label, "X0");
        assert_eq!(r.figure.y_label, "X1");
    }

    #[test]
    fn test_regression_needs_two_columns() {
        let ds = Dataset::from_rows(vec![vec![1.0], vec![2.0]]).unwrap();
        assert!(matches!(
            render(Variant::Regression, &ds, &ExplorerConfig::headless()),
            Err(ExplorerError::Render(_))
        ));
    }

    #[test]
    fn test_axis_label_override() {
        let mut config = ExplorerConfig::headless();
        config.window.x_label = Some("feature".to_string());
        let r = render(Variant::Regression, &ex4(), &config).unwrap();
        assert_eq!(r.figure.x_label, "feature");
        assert_eq!(r.figure.y_label, "y");
    }
}
