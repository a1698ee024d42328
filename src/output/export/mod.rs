//! Data export for benchmark timing results
//!
//! Currently CSV only; the module keeps its own namespace so additional
//! formats can slot in without touching callers.

pub mod csv;

// Re-export commonly used items for convenience
pub use csv::{export_timings_csv, export_timings_multi_csv, CsvConfig, CsvMetadata};
