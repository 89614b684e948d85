//! Configuration types for the explorer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ExplorerError, Result};
use crate::render::LineStyle;

/// Parameters of the function-overlay curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionConfig {
    /// `[a, b, c]` of `a·x² + b·x + c`
    #[serde(default = "default_coefficients")]
    pub coefficients: [f64; 3],

    #[serde(default)]
    pub x_start: f64,

    #[serde(default = "default_x_end")]
    pub x_end: f64,

    /// Number of curve samples, endpoints included
    #[serde(default = "default_samples")]
    pub samples: usize,

    #[serde(default)]
    pub line_style: LineStyle,

    /// Draw a marker at every curve sample
    #[serde(default)]
    pub markers: bool,
}

fn default_coefficients() -> [f64; 3] {
    [0.1, -0.5, 0.3]
}

fn default_x_end() -> f64 {
    10.0
}

fn default_samples() -> usize {
    200
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            coefficients: default_coefficients(),
            x_start: 0.0,
            x_end: default_x_end(),
            samples: default_samples(),
            line_style: LineStyle::Solid,
            markers: false,
        }
    }
}

/// Which columns feed the classification scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationConfig {
    #[serde(default = "default_feature_columns")]
    pub feature_columns: [usize; 2],

    /// Label column; the last column when unset
    #[serde(default)]
    pub label_column: Option<usize>,
}

fn default_feature_columns() -> [usize; 2] {
    [0, 1]
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            feature_columns: default_feature_columns(),
            label_column: None,
        }
    }
}

/// Plot window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Open a window at all; false builds the figure and skips the display
    #[serde(default = "default_true")]
    pub show: bool,

    /// Window title; the data file name when unset
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,

    /// Axis labels; the vector names when unset
    #[serde(default)]
    pub x_label: Option<String>,

    #[serde(default)]
    pub y_label: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_width() -> f32 {
    1000.0
}

fn default_height() -> f32 {
    700.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            show: true,
            title: None,
            width: default_width(),
            height: default_height(),
            x_label: None,
            y_label: None,
        }
    }
}

/// How the inspection step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InspectMode {
    /// Command session on the attached terminal
    #[default]
    Interactive,
    /// Write all bindings to a JSON file and exit
    Dump,
    /// Skip inspection
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectConfig {
    #[serde(default)]
    pub mode: InspectMode,

    #[serde(default = "default_dump_path")]
    pub dump_path: PathBuf,
}

fn default_dump_path() -> PathBuf {
    PathBuf::from("session.json")
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            mode: InspectMode::default(),
            dump_path: default_dump_path(),
        }
    }
}

/// Complete explorer configuration.
///
/// `data_path` left unset means the variant's own default file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    #[serde(default)]
    pub function: FunctionConfig,

    #[serde(default)]
    pub classification: ClassificationConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub inspect: InspectConfig,
}

impl ExplorerConfig {
    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ExplorerError::file_access(path, e))?;
        serde_json::from_str(&content).map_err(|e| ExplorerError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Save configuration to a JSON file.
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|e| ExplorerError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ExplorerError::file_access(path, e))
    }

    /// Configuration that runs headless: no window, no terminal session.
    pub fn headless() -> Self {
        let mut config = Self::default();
        config.window.show = false;
        config.inspect.mode = InspectMode::None;
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_function_config() {
        let config = FunctionConfig::default();
        assert_eq!(config.coefficients, [0.1, -0.5, 0.3]);
        assert_eq!((config.x_start, config.x_end, config.samples), (0.0, 10.0, 200));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ExplorerConfig =
            serde_json::from_str(r#"{ "function": { "samples": 50 }, "inspect": { "mode": "dump" } }"#)
                .unwrap();
        assert_eq!(config.function.samples, 50);
        assert_eq!(config.function.coefficients, [0.1, -0.5, 0.3]);
        assert_eq!(config.inspect.mode, InspectMode::Dump);
        assert!(config.window.show);
        assert_eq!(config.data_path, None);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("explorer.json");
        let mut config = ExplorerConfig::headless();
        config.data_path = Some(PathBuf::from("data/ex4.dat"));
        config.to_json_file(&path).unwrap();
        assert_eq!(ExplorerConfig::from_json_file(&path).unwrap(), config);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ExplorerConfig::from_json_file(&path),
            Err(ExplorerError::Config { .. })
        ));
    }
}
