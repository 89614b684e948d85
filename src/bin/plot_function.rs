//! `data/ex1.dat` against the curve 0.1·x² − 0.5·x + 0.3 sampled on [0, 10].

use anyhow::{Context, Result};

use dataset_explorer::explorer::{self, Variant};
use dataset_explorer::ExplorerConfig;

fn main() -> Result<()> {
    env_logger::init();

    let variant = Variant::Function;
    explorer::run(variant, &ExplorerConfig::default())
        .with_context(|| format!("{variant} explorer failed"))?;
    Ok(())
}
