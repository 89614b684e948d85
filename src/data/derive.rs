use serde::{Deserialize, Serialize};

use super::model::{Dataset, DerivedVector};
use crate::error::{ExplorerError, Result};

// ---------------------------------------------------------------------------
// Synthetic ranges and closed-form curves
// ---------------------------------------------------------------------------

/// `n` evenly spaced samples over `[start, end]`, both endpoints included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// `a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Quadratic { a, b, c }
    }

    pub fn from_coefficients([a, b, c]: [f64; 3]) -> Self {
        Quadratic { a, b, c }
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.a * x.powi(2) + self.b * x + self.c
    }

    /// Sample the curve over `xs`, returning `(Xf, yf)`.
    pub fn sample(&self, xs: Vec<f64>) -> (DerivedVector, DerivedVector) {
        let ys = xs.iter().map(|&x| self.eval(x)).collect();
        (DerivedVector::new("Xf", xs), DerivedVector::new("yf", ys))
    }
}

// ---------------------------------------------------------------------------
// Category labels
// ---------------------------------------------------------------------------

/// Integer category labels cast from one column, truncating toward zero.
///
/// Non-finite cells have no integer value and are rejected.
pub fn labels_from_column(dataset: &Dataset, column: usize) -> Result<Vec<i64>> {
    let col = dataset.column(column, "y")?;
    col.values
        .iter()
        .enumerate()
        .map(|(row, &v)| {
            if v.is_finite() {
                Ok(v.trunc() as i64)
            } else {
                Err(ExplorerError::Render(format!(
                    "row {row}: label value {v} is not a finite number"
                )))
            }
        })
        .collect()
}
