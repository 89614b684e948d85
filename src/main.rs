use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use dataset_explorer::explorer::{self, Variant};
use dataset_explorer::{ExplorerConfig, InspectMode};

#[derive(Parser)]
#[command(name = "dataset-explorer")]
#[command(about = "Load a numeric table, plot it, and inspect it", version)]
struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data file (overrides the variant's default)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Build the figure without opening a window
    #[arg(long, global = true)]
    no_window: bool,

    /// How to inspect the loaded values
    #[arg(long, value_enum, global = true)]
    inspect: Option<InspectMode>,

    /// Where `--inspect dump` writes
    #[arg(long, global = true)]
    dump_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scatter of column 1 against column 0
    Regression,

    /// Scatter plus a quadratic curve a·x² + b·x + c
    Function {
        /// Curve coefficients a b c
        #[arg(long, num_args = 3, allow_negative_numbers = true, value_names = ["A", "B", "C"])]
        coefficients: Option<Vec<f64>>,
        /// Sample range start end
        #[arg(long, num_args = 2, allow_negative_numbers = true, value_names = ["START", "END"])]
        range: Option<Vec<f64>>,
        /// Number of curve samples
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Two feature columns colored by an integer label column
    Classification {
        /// Label column (defaults to the last)
        #[arg(long)]
        label_column: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let cfg = ExplorerConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            info!("Loaded config from: {}", path.display());
            cfg
        }
        None => ExplorerConfig::default(),
    };

    if let Some(data) = cli.data {
        config.data_path = Some(data);
    }
    if cli.no_window {
        config.window.show = false;
    }
    if let Some(mode) = cli.inspect {
        config.inspect.mode = mode;
    }
    if let Some(path) = cli.dump_path {
        config.inspect.dump_path = path;
    }

    let variant = match cli.command {
        Commands::Regression => Variant::Regression,
        Commands::Function {
            coefficients,
            range,
            samples,
        } => {
            if let Some([a, b, c]) = coefficients.as_deref() {
                config.function.coefficients = [*a, *b, *c];
            }
            if let Some([start, end]) = range.as_deref() {
                config.function.x_start = *start;
                config.function.x_end = *end;
            }
            if let Some(n) = samples {
                config.function.samples = n;
            }
            Variant::Function
        }
        Commands::Classification { label_column } => {
            if label_column.is_some() {
                config.classification.label_column = label_column;
            }
            Variant::Classification
        }
    };

    explorer::run(variant, &config).with_context(|| format!("{variant} explorer failed"))?;
    Ok(())
}
