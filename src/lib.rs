//! Load a small numeric table, plot it, then inspect it.
//!
//! Every entry point runs the same three steps:
//! - load a whitespace-delimited table into a [`Dataset`]
//! - derive vectors and draw a scatter/line [`render::Figure`] in a window
//! - expose the dataset and derived vectors to an inspection session
//!
//! # Example
//!
//! ```no_run
//! use dataset_explorer::{explorer::{self, Variant}, ExplorerConfig};
//!
//! let config = ExplorerConfig::default();
//! explorer::run(Variant::Regression, &config).unwrap();
//! ```

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod explorer;
pub mod inspect;
pub mod render;
pub mod state;
pub mod ui;

pub use config::{ExplorerConfig, InspectMode};
pub use data::model::{Dataset, DerivedVector};
pub use error::{ExplorerError, Result};
pub use explorer::Variant;
