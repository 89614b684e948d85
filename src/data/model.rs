use std::fmt;

use crate::error::{ExplorerError, Result};

// ---------------------------------------------------------------------------
// Dataset – the loaded 2-D table
// ---------------------------------------------------------------------------

/// A dense row-major table of `f64`. Rows are samples, columns are variables.
///
/// A single-column file still yields shape `(rows, 1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    nrows: usize,
    ncols: usize,
    values: Vec<f64>,
    /// Header names when the source carried them (CSV only).
    column_names: Option<Vec<String>>,
}

impl Dataset {
    /// Build from parsed rows. Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let ncols = rows.first().map_or(0, |r| r.len());
        let nrows = rows.len();
        if nrows > 0 && ncols == 0 {
            return Err(ExplorerError::Render(format!("{nrows} rows have no fields")));
        }
        let mut values = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(ExplorerError::Render(format!(
                    "row {i} has {} values, expected {ncols}",
                    row.len()
                )));
            }
            values.extend(row);
        }
        Ok(Dataset {
            nrows,
            ncols,
            values,
            column_names: None,
        })
    }

    pub fn with_column_names(mut self, names: Vec<String>) -> Self {
        if names.len() == self.ncols {
            self.column_names = Some(names);
        }
        self
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    pub fn column_names(&self) -> Option<&[String]> {
        self.column_names.as_deref()
    }

    /// Display name for column `j`: the header if present, else `col{j}`.
    pub fn column_label(&self, j: usize) -> String {
        self.column_names
            .as_ref()
            .and_then(|n| n.get(j).cloned())
            .unwrap_or_else(|| format!("col{j}"))
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i < self.nrows && j < self.ncols).then(|| self.values[i * self.ncols + j])
    }

    pub fn row(&self, i: usize) -> Option<&[f64]> {
        (i < self.nrows).then(|| &self.values[i * self.ncols..(i + 1) * self.ncols])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on 0; zero width only happens with zero rows.
        self.values.chunks_exact(self.ncols.max(1))
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Slice column `j` out as a vector named `name`.
    pub fn column(&self, j: usize, name: &str) -> Result<DerivedVector> {
        self.check_column(j)?;
        let values = self.rows().map(|r| r[j]).collect();
        Ok(DerivedVector::new(name, values))
    }

    /// A new dataset holding the listed columns in the given order.
    pub fn select_columns(&self, cols: &[usize]) -> Result<Dataset> {
        for &j in cols {
            self.check_column(j)?;
        }
        let rows = self
            .rows()
            .map(|r| cols.iter().map(|&j| r[j]).collect())
            .collect();
        let mut out = Dataset::from_rows(rows)?;
        if out.nrows == 0 {
            out.ncols = cols.len();
        }
        if let Some(names) = &self.column_names {
            out = out.with_column_names(cols.iter().map(|&j| names[j].clone()).collect());
        }
        Ok(out)
    }

    /// Every column but the last: the feature matrix of a labelled table.
    pub fn columns_except_last(&self) -> Result<Dataset> {
        if self.ncols < 2 {
            return Err(ExplorerError::Render(format!(
                "need at least 2 columns to split off labels, dataset has {}",
                self.ncols
            )));
        }
        let cols: Vec<usize> = (0..self.ncols - 1).collect();
        self.select_columns(&cols)
    }

    /// Per-column (min, max, mean). Empty tables yield NaN triples.
    pub fn column_summary(&self) -> Vec<ColumnSummary> {
        (0..self.ncols)
            .map(|j| {
                let col: Vec<f64> = self.rows().map(|r| r[j]).collect();
                ColumnSummary {
                    name: self.column_label(j),
                    min: stats::min(&col),
                    max: stats::max(&col),
                    mean: stats::mean(&col),
                }
            })
            .collect()
    }

    fn check_column(&self, j: usize) -> Result<()> {
        if j >= self.ncols {
            return Err(ExplorerError::Render(format!(
                "column {j} requested but dataset has {} columns",
                self.ncols
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

// ---------------------------------------------------------------------------
// DerivedVector – one named 1-D array fed to the plot
// ---------------------------------------------------------------------------

/// A 1-D array sliced or computed from a [`Dataset`].
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedVector {
    pub name: String,
    pub values: Vec<f64>,
}

impl DerivedVector {
    pub fn new(name: &str, values: Vec<f64>) -> Self {
        DerivedVector {
            name: name.to_string(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for DerivedVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

// ---------------------------------------------------------------------------
// Small reductions shared by the side panel and the inspector
// ---------------------------------------------------------------------------

pub mod stats {
    pub fn sum(v: &[f64]) -> f64 {
        v.iter().sum()
    }

    pub fn mean(v: &[f64]) -> f64 {
        if v.is_empty() {
            return f64::NAN;
        }
        sum(v) / v.len() as f64
    }

    /// Population standard deviation.
    pub fn std(v: &[f64]) -> f64 {
        let m = mean(v);
        if m.is_nan() {
            return f64::NAN;
        }
        let var = v.iter().map(|x| (x - m).powi(2)).sum::<f64>() / v.len() as f64;
        var.sqrt()
    }

    pub fn min(v: &[f64]) -> f64 {
        if v.is_empty() {
            return f64::NAN;
        }
        v.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    pub fn max(v: &[f64]) -> f64 {
        if v.is_empty() {
            return f64::NAN;
        }
        v.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }
}
