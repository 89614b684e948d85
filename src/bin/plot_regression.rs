//! Scatter of `data/ex1.dat`, then an interactive session over `data`, `X` and `y`.

use anyhow::{Context, Result};

use dataset_explorer::explorer::{self, Variant};
use dataset_explorer::ExplorerConfig;

fn main() -> Result<()> {
    env_logger::init();

    let variant = Variant::Regression;
    explorer::run(variant, &ExplorerConfig::default())
        .with_context(|| format!("{variant} explorer failed"))?;
    Ok(())
}
