//! lapbench-rs: Memory-Layout Benchmarking for Parallel Stencil Kernels
//!
//! A framework for measuring how the physical memory layout of a 2-D grid
//! affects the throughput of a parallel 5-point Laplacian stencil sweep.
//! Built with Rust for performance and safety.
//!
//! # Architecture
//!
//! lapbench-rs is built on two core principles:
//!
//! 1. **Separation of Layout and Computation**
//!    - Layout strategies define where the bytes live (what is measured)
//!    - Stencil kernels define the sweep (how the work is done)
//!
//! 2. **Deterministic Measurement**
//!    - Every kernel/layout/thread-count combination produces identical
//!      numeric output, so timing differences are attributable to memory
//!      behaviour alone
//!    - A process-wide single-flight guard keeps concurrent runs from
//!      contending for the same cores
//!
//! # Quick Start
//!
//! ```rust
//! use lapbench_rs::grid::{Grid, GridDimensions, GridLayout};
//! use lapbench_rs::kernel::{RowMajorKernel, StencilKernel};
//!
//! # fn main() -> Result<(), String> {
//! // 1. Allocate input/output fields under a layout strategy
//! let dims = GridDimensions::new(64, 64);
//! let mut grid = Grid::allocate(dims, GridLayout::RowPointers)?;
//!
//! // 2. Fill the input field
//! grid.u.fill_with(|i, j| (i + j) as f32);
//!
//! // 3. Sweep with a chosen worker count
//! let kernel = RowMajorKernel::new();
//! kernel.apply(&grid.u, &mut grid.lu, 4)?;
//!
//! // 4. Inspect results
//! assert_eq!(grid.lu.get(1, 1), 0.0);
//! # Ok(())
//! # }
//! ```
//!
//! Full benchmark runs (grid allocation + timed iterations + result
//! delivery to a host) go through
//! [`BenchmarkRunner`](bench::BenchmarkRunner); see the [`bench`] module.
//!
//! # Modules
//!
//! - [`grid`]: Grid data model and memory-layout strategies
//! - [`kernel`]: Parallel stencil kernels
//! - [`bench`]: Timer, single-flight guard, benchmark orchestration
//! - [`output`]: Result visualization and export (optional)

// Core modules
pub mod grid;

pub mod bench;
pub mod kernel;

#[cfg(feature = "output")]
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use lapbench_rs::prelude::*;
    //! ```
    pub use crate::bench::{BenchmarkMode,
                           BenchmarkReport,
                           BenchmarkRunner,
                           Host,
                           RunGuard,
                           Timer};
    pub use crate::grid::{Grid,
                          GridData,
                          GridDimensions,
                          GridLayout};
    pub use crate::kernel::{FlippedKernel,
                            RowMajorKernel,
                            StencilKernel};
}
