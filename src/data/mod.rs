/// Data layer: core types, loading, and derivation.
///
/// Architecture:
/// ```text
///  .dat / .txt / .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  row-major f64 table, (rows, cols)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  derive   │  column slices, sampled curves, labels → DerivedVector
///   └──────────┘
/// ```

pub mod derive;
pub mod loader;
pub mod model;
