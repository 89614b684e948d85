//! End-to-end runs of the three variants without a display or terminal.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use dataset_explorer::explorer::{self, Variant};
use dataset_explorer::inspect::Binding;
use dataset_explorer::state::Stage;
use dataset_explorer::{ExplorerConfig, ExplorerError, InspectMode};

fn write_data(dir: &Path, name: &str, body: &str) -> PathBuf {
    let data_dir = dir.join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    let path = data_dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

fn headless(data: PathBuf) -> ExplorerConfig {
    let mut config = ExplorerConfig::headless();
    config.data_path = Some(data);
    config
}

// ---------------------------------------------------------------------------
// Regression
// ---------------------------------------------------------------------------

#[test]
fn regression_scenario_plots_two_points() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex1.dat", "1.0 2.0\n3.0 4.1\n");

    let state = explorer::run(Variant::Regression, &headless(path)).unwrap();

    assert_eq!(state.stage(), Stage::Terminated);
    let dataset = state.dataset.as_ref().unwrap();
    assert_eq!(dataset.shape(), (2, 2));
    assert_eq!(dataset.values(), &[1.0, 2.0, 3.0, 4.1]);
    let figure = state.figure.as_ref().unwrap();
    assert_eq!(figure.point_count(), 2);
    assert!(figure.lines.is_empty());
}

#[test]
fn missing_file_is_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = headless(dir.path().join("data/ex1.dat"));
    let err = explorer::run(Variant::Regression, &config).unwrap_err();
    assert!(matches!(err, ExplorerError::FileAccess { .. }));
}

#[test]
fn ragged_file_is_data_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex1.dat", "1.0 2.0\n3.0\n");
    let err = explorer::run(Variant::Regression, &headless(path)).unwrap_err();
    assert!(matches!(err, ExplorerError::DataFormat { line: 2, .. }));
}

// ---------------------------------------------------------------------------
// Function overlay
// ---------------------------------------------------------------------------

#[test]
fn function_curve_hits_known_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex1.dat", "1.0 2.0\n3.0 4.1\n");

    let state = explorer::run(Variant::Function, &headless(path)).unwrap();
    let line = &state.figure.as_ref().unwrap().lines[0];

    assert_eq!(line.x.len(), 200);
    assert_eq!(line.x[0], 0.0);
    assert_eq!(line.x[199], 10.0);
    assert_eq!(line.y[0], 0.3);
    assert_eq!(line.y[199], 5.3);
    assert_eq!(line.color.to_string(), "C1");
}

#[test]
fn function_coefficients_come_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex1.dat", "0 0\n");
    let mut config = headless(path);
    config.function.coefficients = [1.0, 0.0, 0.0];
    config.function.x_end = 2.0;
    config.function.samples = 3;

    let state = explorer::run(Variant::Function, &config).unwrap();
    match state.namespace.get("yf") {
        Some(Binding::Vector(yf)) => assert_eq!(yf.values, vec![0.0, 1.0, 4.0]),
        other => panic!("unexpected yf binding: {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn classification_scenario_colors_by_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex4.dat", "0.1 0.2 0\n0.3 0.4 1\n");

    let state = explorer::run(Variant::Classification, &headless(path)).unwrap();
    let scatter = &state.figure.as_ref().unwrap().scatters[0];

    assert_eq!(scatter.color_key(0).unwrap().to_string(), "C0");
    assert_eq!(scatter.color_key(1).unwrap().to_string(), "C1");
}

#[test]
fn classification_every_key_matches_label() {
    let dir = tempfile::tempdir().unwrap();
    let rows: String = (0..30)
        .map(|i| format!("{} {} {}\n", i as f64 * 0.1, i as f64 * 0.2, i % 7))
        .collect();
    let path = write_data(dir.path(), "ex4.dat", &rows);

    let state = explorer::run(Variant::Classification, &headless(path)).unwrap();
    let scatter = &state.figure.as_ref().unwrap().scatters[0];
    for i in 0..30 {
        assert_eq!(scatter.color_key(i).unwrap().to_string(), format!("C{}", i % 7));
    }
}

#[test]
fn classification_label_beyond_palette_is_render_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex4.dat", "0.1 0.2 0\n0.3 0.4 10\n");
    let err = explorer::run(Variant::Classification, &headless(path)).unwrap_err();
    assert!(matches!(err, ExplorerError::Render(_)));
}

// ---------------------------------------------------------------------------
// Inspection modes
// ---------------------------------------------------------------------------

#[test]
fn dump_mode_writes_all_bindings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex1.dat", "1.0 2.0\n3.0 4.1\n");
    let dump = dir.path().join("session.json");
    let mut config = headless(path);
    config.inspect.mode = InspectMode::Dump;
    config.inspect.dump_path = dump.clone();

    explorer::run(Variant::Function, &config).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&dump).unwrap()).unwrap();
    for name in ["data", "X", "y", "Xf", "yf"] {
        assert!(value.get(name).is_some(), "missing binding {name}");
    }
    assert_eq!(value["X"]["values"], serde_json::json!([1.0, 3.0]));
}

#[test]
fn interactive_mode_without_terminal_is_environment_unavailable() {
    // Under a terminal the session would block on input.
    if std::io::stdin().is_terminal() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex1.dat", "1.0 2.0\n3.0 4.1\n");
    let mut config = headless(path);
    config.inspect.mode = InspectMode::Interactive;

    let err = explorer::run(Variant::Regression, &config).unwrap_err();
    assert!(matches!(err, ExplorerError::EnvironmentUnavailable(_)));
}

#[test]
fn loading_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_data(dir.path(), "ex4.dat", "0.1 0.2 0\n0.3 0.4 1\n");
    let config = headless(path);
    let a = explorer::load(Variant::Classification, &config).unwrap();
    let b = explorer::load(Variant::Classification, &config).unwrap();
    assert_eq!(a, b);
}
