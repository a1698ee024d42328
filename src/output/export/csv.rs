//! CSV export functionality for benchmark timing results
//!
//! This module provides tools to export timing data to CSV (Comma-Separated
//! Values) format, compatible with Excel, Python pandas, MATLAB, and most
//! data analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: Export with `&[f64]` slices
//! - **Metadata support**: Optional headers with run parameters
//! - **Customizable**: Delimiter, precision, format options
//! - **Multi-mode**: Export several runs side by side for comparison
//! - **Validation**: Checks for NaN, empty data, mismatched lengths
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use lapbench_rs::output::export::export_timings_csv;
//!
//! let samples = vec![12.5, 11.8, 11.9];
//! export_timings_csv(&samples, "timings.csv", None)?;
//! ```
//!
//! **Output** (`timings.csv`):
//! ```csv
//! Iteration,Elapsed (ms)
//! 0,12.500000
//! 1,11.800000
//! 2,11.900000
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use lapbench_rs::output::export::{export_timings_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata::from_report(&report);
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_timings_csv(&report.samples, "timings.csv", Some(&config))?;
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::bench::BenchmarkReport;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for elapsed times (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Custom header for the iteration column (default: "Iteration")
    pub iteration_header: String,

    /// Custom header for the elapsed column (default: "Elapsed (ms)")
    pub elapsed_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            iteration_header: "Iteration".to_string(),
            elapsed_header: "Elapsed (ms)".to_string(),
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields appear in the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Benchmark mode name (e.g., "pointer-array")
    pub mode_name: Option<String>,

    /// Layout strategy name (e.g., "shuffled row pointers")
    pub layout_name: Option<String>,

    /// Grid dimensions (e.g., "4096 x 4096")
    pub grid: Option<String>,

    /// Worker count the kernels executed with
    pub thread_count: Option<usize>,

    /// Timed iterations per run
    pub iterations: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from a benchmark report
    ///
    /// Pulls the mode, layout, grid and iteration entries when the report
    /// carries them; absent entries simply stay out of the header.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let metadata = CsvMetadata::from_report(&report);
    /// ```
    pub fn from_report(report: &BenchmarkReport) -> Self {
        Self {
            mode_name: report.metadata.get("mode").cloned(),
            layout_name: report.metadata.get("layout").cloned(),
            grid: report.metadata.get("grid").cloned(),
            thread_count: Some(report.thread_count),
            iterations: report
                .metadata
                .get("iterations")
                .and_then(|v| v.parse().ok()),
            custom: Vec::new(),
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Stencil Benchmark Data")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(mode) = &metadata.mode_name {
        writeln!(file, "# Mode: {}", mode)?;
    }
    if let Some(layout) = &metadata.layout_name {
        writeln!(file, "# Layout: {}", layout)?;
    }
    if let Some(grid) = &metadata.grid {
        writeln!(file, "# Grid: {}", grid)?;
    }
    if let Some(threads) = metadata.thread_count {
        writeln!(file, "# Threads: {}", threads)?;
    }
    if let Some(iterations) = metadata.iterations {
        writeln!(file, "# Iterations: {}", iterations)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export one run's timing samples to CSV
///
/// Writes iteration index and elapsed milliseconds with an optional
/// metadata header.
///
/// # Arguments
///
/// * `samples`     - Elapsed milliseconds, in iteration order
/// * `output_path` - Output file path
/// * `config`      - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty data
/// - NaN or Inf values
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_timings_csv(&report.samples, "pointer_array.csv", None)?;
/// ```
pub fn export_timings_csv(
    samples: &[f64],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {

    // ============================= Validation =============================

    if samples.is_empty() {
        return Err("Empty data: timing series must not be empty".into());
    }

    if samples.iter().any(|t| !t.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in timing series".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "{}{}{}",
        configuration.iteration_header, configuration.delimiter, configuration.elapsed_header
    )?;

    // ============================= Write Data =============================

    for (iteration, elapsed) in samples.iter().enumerate() {
        writeln!(
            file,
            "{}{}{}",
            iteration,
            configuration.delimiter,
            format_number(*elapsed, configuration)
        )?;
    }

    Ok(())
}

/// Export several runs' timing samples side by side
///
/// Writes one elapsed-time column per run, labelled by mode, so layouts can
/// be compared iteration by iteration.
///
/// # Arguments
///
/// * `sample_sets` - One timing series per run (all the same length)
/// * `labels`      - Column label per run (e.g., mode names)
/// * `output_path` - Output file path
/// * `config`      - Optional CSV configuration
///
/// # Example
///
/// ```rust,ignore
/// export_timings_multi_csv(
///     &[contiguous.samples, shuffled.samples],
///     &["contiguous-array", "shuffled-pointer-array"],
///     "comparison.csv",
///     None,
/// )?;
/// ```
pub fn export_timings_multi_csv(
    sample_sets: &[Vec<f64>],
    labels: &[&str],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {

    // ============================= Validation =============================

    if sample_sets.is_empty() {
        return Err("Empty data: no timing series provided".into());
    }

    if sample_sets.len() != labels.len() {
        return Err(format!(
            "Data length mismatch: {} timing series versus {} labels",
            sample_sets.len(),
            labels.len()
        )
        .into());
    }

    let iterations = sample_sets[0].len();
    if iterations == 0 {
        return Err("Empty data: timing series must not be empty".into());
    }

    for (i, series) in sample_sets.iter().enumerate() {
        if series.len() != iterations {
            return Err(format!(
                "Series [{}] length mismatch: {} samples vs {} in the first series",
                labels[i],
                series.len(),
                iterations
            )
            .into());
        }

        if series.iter().any(|t| !t.is_finite()) {
            return Err(format!("Invalid data: NaN or Inf detected in series {}", labels[i]).into());
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(file, "{}", configuration.iteration_header)?;
    for label in labels {
        write!(file, "{}{} (ms)", configuration.delimiter, label)?;
    }
    writeln!(file)?;

    // ============================= Write Data =============================

    for iteration in 0..iterations {
        write!(file, "{}", iteration)?;
        for series in sample_sets {
            write!(
                file,
                "{}{}",
                configuration.delimiter,
                format_number(series[iteration], configuration)
            )?;
        }
        writeln!(file)?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
