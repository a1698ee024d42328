//! Grid data model
//!
//! This module provides the 2-D fields that stencil kernels operate on and
//! the memory-layout strategies that control their physical arrangement.
//!
//! # Core Concepts
//!
//! - **Grid Data**: a 2-D scalar field with pluggable physical storage
//! - **Grid Layout**: the strategy that decides how the storage is carved
//!   from the allocator (contiguous block, per-row buffers, per-row buffers
//!   allocated in shuffled order)
//! - **Grid**: the paired input/output fields of one benchmark run
//!
//! # Architecture
//!
//! Logical addressing is **separate from physical placement**:
//! - The data model answers `get(row, col)` identically for every layout
//! - The layout decides only where the bytes live
//!
//! This separation allows:
//! - The same kernel to sweep grids of any layout
//! - Layouts to be compared on identical logical content
//!
//! # Example
//!
//! ```rust
//! use lapbench_rs::grid::{Grid, GridDimensions, GridLayout};
//!
//! let dims = GridDimensions::new(64, 64);
//! let mut grid = Grid::allocate(dims, GridLayout::Contiguous).unwrap();
//!
//! grid.u.fill_with(|i, j| (i + j) as f32);
//! assert_eq!(grid.u.get(2, 3), 5.0);
//! ```

// module declaration
pub mod data;
pub mod layout;

// re-export commonly used types for convenience
pub use data::{GridData, GridDimensions};
pub use layout::{shuffled_order, Grid, GridLayout};
