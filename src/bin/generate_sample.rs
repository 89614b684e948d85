use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use dataset_explorer::data::derive::{linspace, Quadratic};

/// Write synthetic `ex1.dat` and `ex4.dat` tables.
#[derive(Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Output directory
    #[arg(long, default_value = "data")]
    out_dir: PathBuf,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Samples in ex1.dat
    #[arg(long, default_value_t = 50)]
    regression_samples: usize,

    /// Points per class in ex4.dat
    #[arg(long, default_value_t = 40)]
    class_samples: usize,
}

/// Seeded Gaussian noise for the synthetic tables.
///
/// splitmix64 drives a polar Box-Muller draw; the second value of each
/// pair is kept for the next call.
struct Noise {
    state: u64,
    spare: Option<f64>,
}

impl Noise {
    fn seeded(seed: u64) -> Self {
        Noise { state: seed, spare: None }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[-1, 1)`.
    fn signed_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }

    /// Standard normal draw.
    fn standard(&mut self) -> f64 {
        if let Some(z) = self.spare.take() {
            return z;
        }
        loop {
            let u = self.signed_unit();
            let v = self.signed_unit();
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let k = (-2.0 * s.ln() / s).sqrt();
                self.spare = Some(v * k);
                return u * k;
            }
        }
    }

    /// `value` plus zero-mean noise of width `sigma`.
    fn jitter(&mut self, value: f64, sigma: f64) -> f64 {
        value + sigma * self.standard()
    }
}

/// Noisy samples of the default quadratic over [0, 10].
fn regression_table(noise: &mut Noise, n: usize) -> String {
    let f = Quadratic::new(0.1, -0.5, 0.3);
    let mut out = String::new();
    for x in linspace(0.0, 10.0, n) {
        let y = noise.jitter(f.eval(x), 0.4);
        let _ = writeln!(out, "{x:.6} {y:.6}");
    }
    out
}

/// Three Gaussian blobs, label in the last column.
fn classification_table(noise: &mut Noise, per_class: usize) -> String {
    let centers = [(1.0, 1.0), (3.0, 1.5), (2.0, 3.5)];
    let mut out = String::new();
    for (label, &(cx, cy)) in centers.iter().enumerate() {
        for _ in 0..per_class {
            let x0 = noise.jitter(cx, 0.45);
            let x1 = noise.jitter(cy, 0.45);
            let _ = writeln!(out, "{x0:.6} {x1:.6} {label}");
        }
    }
    out
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut noise = Noise::seeded(args.seed);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let ex1 = args.out_dir.join("ex1.dat");
    std::fs::write(&ex1, regression_table(&mut noise, args.regression_samples))
        .with_context(|| format!("writing {}", ex1.display()))?;

    let ex4 = args.out_dir.join("ex4.dat");
    std::fs::write(&ex4, classification_table(&mut noise, args.class_samples))
        .with_context(|| format!("writing {}", ex4.display()))?;

    println!(
        "Wrote {} regression samples to {} and {} labelled points to {}",
        args.regression_samples,
        ex1.display(),
        3 * args.class_samples,
        ex4.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_tables() {
        let a = regression_table(&mut Noise::seeded(7), 10);
        let b = regression_table(&mut Noise::seeded(7), 10);
        assert_eq!(a, b);
        assert_eq!(a.lines().count(), 10);
    }

    #[test]
    fn test_classification_table_labels() {
        let table = classification_table(&mut Noise::seeded(1), 4);
        let labels: Vec<&str> = table
            .lines()
            .map(|l| l.split_whitespace().last().unwrap())
            .collect();
        assert_eq!(labels, vec!["0", "0", "0", "0", "1", "1", "1", "1", "2", "2", "2", "2"]);
    }
}
