//! Output module for benchmark results
//!
//! This module provides tools to output timing results in various formats:
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots and graphics
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── timings.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use lapbench_rs::output::visualization::{plot_timings, PlotConfig};
//!
//! // Generate PNG plot
//! plot_timings(&report, "timings.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use lapbench_rs::output::export::{export_timings_csv, CsvConfig};
//!
//! // Export to CSV
//! export_timings_csv(&report.samples, "timings.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (plots, graphs)
//! - **Export**: For programmatic analysis (CSV, ...)
//!
//! Both sub-modules work from `BenchmarkReport` data or plain `&[f64]`
//! slices; the benchmark core never depends on this module, matching the
//! message-passing boundary between the runner and whatever consumes its
//! results.

pub mod export;
pub mod visualization;

// Re-export commonly used items for convenience
pub use export::{export_timings_csv, export_timings_multi_csv, CsvConfig, CsvMetadata};
pub use visualization::{plot_timings, plot_timings_comparison, PlotConfig};
