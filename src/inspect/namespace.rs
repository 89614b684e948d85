use std::fmt;
use std::path::Path;

use serde_json::{json, Value as JsonValue};

use crate::data::model::{Dataset, DerivedVector};
use crate::error::{ExplorerError, Result};

// ---------------------------------------------------------------------------
// Binding – one named value exposed to the session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Matrix(Dataset),
    Vector(DerivedVector),
    Labels(Vec<i64>),
}

impl Binding {
    pub fn kind(&self) -> &'static str {
        match self {
            Binding::Matrix(_) => "matrix",
            Binding::Vector(_) => "vector",
            Binding::Labels(_) => "labels",
        }
    }

    /// Shape as printed by `shape`: `(rows, cols)` or `(len,)`.
    pub fn shape(&self) -> String {
        match self {
            Binding::Matrix(ds) => format!("({}, {})", ds.nrows(), ds.ncols()),
            Binding::Vector(v) => format!("({},)", v.len()),
            Binding::Labels(l) => format!("({},)", l.len()),
        }
    }

    /// Leading dimension.
    pub fn len(&self) -> usize {
        match self {
            Binding::Matrix(ds) => ds.nrows(),
            Binding::Vector(v) => v.len(),
            Binding::Labels(l) => l.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every value flattened to `f64`, row-major for matrices.
    pub fn flat_values(&self) -> Vec<f64> {
        match self {
            Binding::Matrix(ds) => ds.values().to_vec(),
            Binding::Vector(v) => v.values.clone(),
            Binding::Labels(l) => l.iter().map(|&x| x as f64).collect(),
        }
    }

    /// First `n` rows (matrix) or values (vectors) as a new binding.
    pub fn head(&self, n: usize) -> Binding {
        match self {
            Binding::Matrix(ds) => {
                let rows = ds.rows().take(n).map(|r| r.to_vec()).collect();
                match Dataset::from_rows(rows) {
                    Ok(head) => Binding::Matrix(head),
                    Err(_) => Binding::Matrix(ds.clone()),
                }
            }
            Binding::Vector(v) => {
                Binding::Vector(DerivedVector::new(&v.name, v.values.iter().take(n).copied().collect()))
            }
            Binding::Labels(l) => Binding::Labels(l.iter().take(n).copied().collect()),
        }
    }

    fn to_json(&self) -> JsonValue {
        match self {
            Binding::Matrix(ds) => {
                let rows: Vec<&[f64]> = ds.rows().collect();
                json!({ "shape": [ds.nrows(), ds.ncols()], "values": rows })
            }
            Binding::Vector(v) => json!({ "shape": [v.len()], "values": v.values }),
            Binding::Labels(l) => json!({ "shape": [l.len()], "values": l }),
        }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Binding::Matrix(ds) => write!(f, "{ds}"),
            Binding::Vector(v) => write!(f, "{v}"),
            Binding::Labels(l) => {
                let items: Vec<String> = l.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Namespace – the bindings of one run, in insertion order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Namespace {
    entries: Vec<(String, Binding)>,
}

impl Namespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing an earlier binding of the same name.
    pub fn bind(&mut self, name: &str, value: Binding) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, b)| b)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.entries.iter().map(|(n, b)| (n.as_str(), b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> JsonValue {
        let map: serde_json::Map<String, JsonValue> = self
            .entries
            .iter()
            .map(|(n, b)| (n.clone(), b.to_json()))
            .collect();
        JsonValue::Object(map)
    }

    /// Write every binding to `path` as pretty JSON.
    pub fn dump(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(&self.to_json()).map_err(|e| ExplorerError::Dump {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, text).map_err(|e| ExplorerError::Dump {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace() -> Namespace {
        let ds = Dataset::from_rows(vec![vec![0.1, 0.2], vec![0.3, 0.4]]).unwrap();
        let mut ns = Namespace::new();
        ns.bind("data", Binding::Matrix(ds));
        ns.bind("y", Binding::Labels(vec![0, 1]));
        ns
    }

    #[test]
    fn test_bind_keeps_order_and_replaces() {
        let mut ns = namespace();
        ns.bind("y", Binding::Labels(vec![2]));
        assert_eq!(ns.names().collect::<Vec<_>>(), vec!["data", "y"]);
        assert_eq!(ns.get("y").unwrap().len(), 1);
    }

    #[test]
    fn test_shapes() {
        let ns = namespace();
        assert_eq!(ns.get("data").unwrap().shape(), "(2, 2)");
        assert_eq!(ns.get("y").unwrap().shape(), "(2,)");
    }

    #[test]
    fn test_dump_json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        namespace().dump(&path).unwrap();
        let value: JsonValue = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["data"]["shape"], json!([2, 2]));
        assert_eq!(value["data"]["values"][1][0], json!(0.3));
        assert_eq!(value["y"]["values"], json!([0, 1]));
    }
}
