//! Benchmark modes, result reports and the host boundary
//!
//! # Design Philosophy
//!
//! This module follows the same pattern as `GridLayout`:
//! - Central enum `BenchmarkMode` defines what kind of measurement runs
//! - `BenchmarkReport` carries the outputs plus metadata for extensibility
//! - `Host` is the message boundary to whatever UI consumes the results

use std::collections::HashMap;

use crate::grid::GridLayout;
use crate::kernel::{FlippedKernel, RowMajorKernel, StencilKernel};

// =================================================================================================
// Central Benchmark Mode Enumeration
// =================================================================================================

/// Kernel/layout combination selected for one benchmark run
///
/// # Design Pattern
///
/// Each mode fixes two independent choices at once: the layout strategy
/// that allocates the grid and the kernel that sweeps it. The four modes
/// cover the interesting corners of that product:
///
/// | Mode                  | Layout                | Kernel    |
/// |-----------------------|-----------------------|-----------|
/// | `ContiguousArray`     | contiguous            | row major |
/// | `PointerArray`        | row pointers          | row major |
/// | `ShuffledPointerArray`| shuffled row pointers | row major |
/// | `FlippedLoopOrder`    | contiguous            | flipped   |
///
/// # Examples
///
/// ```rust
/// use lapbench_rs::bench::BenchmarkMode;
///
/// let mode = BenchmarkMode::ShuffledPointerArray;
/// assert_eq!(mode.name(), "shuffled-pointer-array");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchmarkMode {
    /// Contiguous grid, row-major sweep
    ContiguousArray,

    /// Row-pointer grid allocated in logical order, row-major sweep
    PointerArray,

    /// Row-pointer grid allocated in shuffled order, row-major sweep
    ShuffledPointerArray,

    /// Contiguous grid, flipped (column-outer) sweep
    FlippedLoopOrder,
}

impl BenchmarkMode {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            BenchmarkMode::ContiguousArray => "contiguous-array",
            BenchmarkMode::PointerArray => "pointer-array",
            BenchmarkMode::ShuffledPointerArray => "shuffled-pointer-array",
            BenchmarkMode::FlippedLoopOrder => "flipped-loop-order",
        }
    }

    /// Layout strategy this mode allocates the grid under
    ///
    /// The shuffled mode draws its permutation from entropy; runs that need
    /// a reproducible permutation allocate their grid directly with
    /// `GridLayout::ShuffledRowPointers { seed: Some(..) }`.
    pub fn layout(&self) -> GridLayout {
        match self {
            BenchmarkMode::ContiguousArray => GridLayout::Contiguous,
            BenchmarkMode::PointerArray => GridLayout::RowPointers,
            BenchmarkMode::ShuffledPointerArray => GridLayout::ShuffledRowPointers { seed: None },
            BenchmarkMode::FlippedLoopOrder => GridLayout::Contiguous,
        }
    }

    /// Kernel this mode sweeps the grid with
    pub fn kernel(&self) -> &'static dyn StencilKernel {
        static ROW_MAJOR: RowMajorKernel = RowMajorKernel;
        static FLIPPED: FlippedKernel = FlippedKernel;

        match self {
            BenchmarkMode::FlippedLoopOrder => &FLIPPED,
            _ => &ROW_MAJOR,
        }
    }

    /// All four modes in display order
    pub fn all() -> [BenchmarkMode; 4] {
        [
            BenchmarkMode::ContiguousArray,
            BenchmarkMode::PointerArray,
            BenchmarkMode::ShuffledPointerArray,
            BenchmarkMode::FlippedLoopOrder,
        ]
    }
}

impl std::fmt::Display for BenchmarkMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Benchmark Report
// =================================================================================================

/// Ordered timing results of one accepted benchmark run
///
/// # Design
///
/// One elapsed-time sample per iteration, in iteration order, plus the
/// thread count the run executed with. The metadata map carries
/// display/diagnostic context (mode, dimensions, iteration count) without
/// widening the structure for every new field.
///
/// # Examples
///
/// ```rust
/// use lapbench_rs::bench::BenchmarkReport;
///
/// let mut report = BenchmarkReport::new(vec![12.5, 11.8, 11.9], 4);
/// report.add_metadata("mode", "pointer-array");
///
/// assert_eq!(report.len(), 3);
/// assert_eq!(report.thread_count, 4);
/// assert_eq!(report.fastest(), 11.8);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    /// Elapsed milliseconds per iteration, in iteration order
    pub samples: Vec<f64>,

    /// Worker count the kernels executed with
    pub thread_count: usize,

    /// Diagnostic context (mode name, dimensions, ...)
    pub metadata: HashMap<String, String>,
}

impl BenchmarkReport {
    /// Create a report from ordered samples
    pub fn new(samples: Vec<f64>, thread_count: usize) -> Self {
        Self {
            samples,
            thread_count,
            metadata: HashMap::new(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check for an empty report
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Add metadata for diagnostics and reproducibility
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Arithmetic mean of the samples (0 for an empty report)
    pub fn mean(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Smallest sample (0 for an empty report)
    pub fn fastest(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples.iter().cloned().fold(f64::INFINITY, f64::min)
    }

    /// Largest sample (0 for an empty report)
    pub fn slowest(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        self.samples
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

// =================================================================================================
// Host Boundary
// =================================================================================================

/// External collaborator that launches runs and consumes their results
///
/// # Design
///
/// The benchmark worker runs on its own thread and talks to the host only
/// through this trait: it asks for the thread count, emits status text and
/// finally delivers the ordered result batch. The host owns everything on
/// the other side - display surfaces, event loops, their threading rules.
///
/// `thread_count` doubles as the binding step: an `Err` means the worker
/// could not reach the host context, and the run aborts before any grid is
/// allocated or any kernel executes.
pub trait Host: Send + Sync {
    /// Desired worker count for the run
    ///
    /// # Errors
    ///
    /// `Err` aborts the run before allocation; no results are reported.
    fn thread_count(&self) -> Result<usize, String>;

    /// Display a line of status/progress text
    fn append_to_view(&self, text: &str);

    /// Receive the ordered timing samples and the thread count used
    ///
    /// Called exactly once per accepted run, after all iterations finish.
    fn display_data(&self, timings: &[f64], thread_count: usize);
}

// =================================================================================================
// Tests
// =================================================================================================
