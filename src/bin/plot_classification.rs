//! `data/ex4.dat` features colored by their integer label (C0, C1, …).

use anyhow::{Context, Result};

use dataset_explorer::explorer::{self, Variant};
use dataset_explorer::ExplorerConfig;

fn main() -> Result<()> {
    env_logger::init();

    let variant = Variant::Classification;
    explorer::run(variant, &ExplorerConfig::default())
        .with_context(|| format!("{variant} explorer failed"))?;
    Ok(())
}
