//! Parallel 5-point Laplacian stencil kernels
//!
//! # Mathematical Background
//!
//! The discrete Laplacian approximates the continuous operator ∇²u on a
//! uniform grid with the classic 5-point stencil:
//!
//! ```text
//! Lu[i][j] = -4*u[i][j] + u[i+1][j] + u[i-1][j] + u[i][j+1] + u[i][j-1]
//! ```
//!
//! evaluated at every interior cell `1 ≤ i ≤ xdim-2`, `1 ≤ j ≤ ydim-2`.
//! Boundary cells have no full neighbor set and are left untouched.
//!
//! # Parallel Decomposition
//!
//! The row dimension is split into disjoint contiguous ranges, one per
//! worker. A worker writes only to its own output rows and reads only from
//! the input field, which is never mutated during a sweep, so the sweep
//! needs no locks, barriers, or atomics beyond the implicit join when all
//! workers finish.
//!
//! # Loop Orders
//!
//! Two loop-nest orders are provided and must produce identical numeric
//! results:
//!
//! - [`RowMajorKernel`] — `i` outer, `j` inner: each worker walks its rows
//!   in storage order, the cache-friendly traversal
//! - [`FlippedKernel`] — `j` outer, `i` inner: each worker walks columns
//!   across its row range, striding a full row length between consecutive
//!   reads
//!
//! The flip exists purely to probe cache-locality sensitivity; the stencil
//! expression is written with the same operand order in every code path so
//! results stay bit-identical.
//!
//! # Example
//!
//! ```rust
//! use lapbench_rs::grid::{Grid, GridDimensions, GridLayout};
//! use lapbench_rs::kernel::{RowMajorKernel, StencilKernel};
//!
//! let mut grid = Grid::allocate(GridDimensions::new(8, 8), GridLayout::Contiguous).unwrap();
//! grid.u.fill_with(|i, j| (i * 8 + j) as f32);
//!
//! let kernel = RowMajorKernel::new();
//! kernel.apply(&grid.u, &mut grid.lu, 2).unwrap();
//! ```

use rayon::prelude::*;

use crate::grid::GridData;

// =================================================================================================
// Stencil Kernel Trait
// =================================================================================================

/// Stencil computation over a grid, partitioned across a worker pool
///
/// # Thread Count
///
/// The worker count is supplied per call. Non-positive counts are clamped
/// to 1; counts above the available hardware parallelism are passed to the
/// pool unchanged (the upstream behaviour performs no validation, so the
/// clamp to a 1-worker minimum is this crate's documented choice).
///
/// # Storage
///
/// Implementations accept both [`GridData`] variants: over contiguous
/// storage they are the array-addressed kernels, over a row-pointer table
/// they address cells through the table. Equivalent logical content must
/// produce identical results either way.
pub trait StencilKernel {
    /// Compute the 5-point Laplacian of `u` into `lu` at every interior cell
    ///
    /// # Errors
    ///
    /// - dimensions of `u` and `lu` differ
    /// - `u` and `lu` use different storage variants
    /// - the worker pool cannot be built
    fn apply(&self, u: &GridData, lu: &mut GridData, thread_count: usize) -> Result<(), String>;

    /// Human-readable kernel name
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Kernel Implementations
// =================================================================================================

/// Row-major sweep: `i` outer, `j` inner within each worker's row range
#[derive(Debug, Clone, Copy, Default)]
pub struct RowMajorKernel;

impl RowMajorKernel {
    /// Create a new row-major kernel
    pub fn new() -> Self {
        Self
    }
}

impl StencilKernel for RowMajorKernel {
    fn apply(&self, u: &GridData, lu: &mut GridData, thread_count: usize) -> Result<(), String> {
        sweep(u, lu, thread_count, LoopOrder::RowMajor)
    }

    fn name(&self) -> &'static str {
        "Row Major"
    }
}

/// Flipped sweep: `j` outer, `i` inner within each worker's row range
///
/// Semantically identical to [`RowMajorKernel`]; exists to measure the cost
/// of a cache-hostile traversal order over the same data.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlippedKernel;

impl FlippedKernel {
    /// Create a new flipped-order kernel
    pub fn new() -> Self {
        Self
    }
}

impl StencilKernel for FlippedKernel {
    fn apply(&self, u: &GridData, lu: &mut GridData, thread_count: usize) -> Result<(), String> {
        sweep(u, lu, thread_count, LoopOrder::ColumnMajor)
    }

    fn name(&self) -> &'static str {
        "Flipped"
    }
}

// =================================================================================================
// Shared Sweep
// =================================================================================================

/// Loop-nest order of a sweep within one worker's row range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopOrder {
    RowMajor,
    ColumnMajor,
}

/// Partition the rows across a freshly built pool and run the sweep
///
/// Both kernels and both storage variants funnel through here so the
/// decomposition logic exists exactly once (WHAT to compute is the stencil
/// expression; HOW to iterate is the loop order — same separation the rest
/// of the crate uses).
fn sweep(
    u: &GridData,
    lu: &mut GridData,
    thread_count: usize,
    order: LoopOrder,
) -> Result<(), String> {
    // ====== Step 1: Validation ======

    let dims = u.dimensions();
    if dims != lu.dimensions() {
        return Err(format!(
            "Input grid ({}) and output grid ({}) dimensions must match",
            dims,
            lu.dimensions()
        ));
    }

    // Fewer than 3 rows or columns means no cell has a full neighbor set.
    if !dims.has_interior() {
        return Ok(());
    }

    // ====== Step 2: Worker pool ======

    // Clamp to a 1-worker minimum; the requested count is otherwise used
    // as-is. The pool is built per call so the count can change between
    // calls, matching how the thread count is supplied per invocation.
    let threads = thread_count.max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| format!("Failed to build a {}-worker pool: {}", threads, e))?;

    // Each worker owns a contiguous block of ceil(xdim / threads) rows.
    let rows_per_worker = dims.xdim.div_ceil(threads);

    // ====== Step 3: Partitioned sweep ======

    match (u, lu) {
        (GridData::Contiguous(input), GridData::Contiguous(output)) => {
            let input = input
                .as_slice()
                .ok_or_else(|| "Input field is not in standard row-major layout".to_string())?;
            let output = output
                .as_slice_mut()
                .ok_or_else(|| "Output field is not in standard row-major layout".to_string())?;

            pool.install(|| {
                output
                    .par_chunks_mut(rows_per_worker * dims.ydim)
                    .enumerate()
                    .for_each(|(chunk, out)| {
                        sweep_contiguous_rows(
                            input,
                            out,
                            chunk * rows_per_worker,
                            dims.xdim,
                            dims.ydim,
                            order,
                        );
                    });
            });
            Ok(())
        }

        (GridData::RowPointers(input), GridData::RowPointers(output)) => {
            pool.install(|| {
                output
                    .par_chunks_mut(rows_per_worker)
                    .enumerate()
                    .for_each(|(chunk, out)| {
                        sweep_pointer_rows(
                            input,
                            out,
                            chunk * rows_per_worker,
                            dims.xdim,
                            dims.ydim,
                            order,
                        );
                    });
            });
            Ok(())
        }

        (mixed_in, mixed_out) => Err(format!(
            "Input storage ({}) and output storage ({}) must use the same variant",
            mixed_in, mixed_out
        )),
    }
}

/// Sweep one worker's row block of a contiguous field
///
/// `output` is the worker's disjoint slice of the flat output buffer,
/// starting at logical row `first_row`; `input` is the whole flat input.
fn sweep_contiguous_rows(
    input: &[f32],
    output: &mut [f32],
    first_row: usize,
    xdim: usize,
    ydim: usize,
    order: LoopOrder,
) {
    let block_rows = output.len() / ydim;

    match order {
        LoopOrder::RowMajor => {
            for local in 0..block_rows {
                let i = first_row + local;
                if i == 0 || i + 1 >= xdim {
                    continue;
                }
                let center = i * ydim;
                let out_base = local * ydim;
                for j in 1..ydim - 1 {
                    output[out_base + j] = -4.0 * input[center + j]
                        + input[center + ydim + j]
                        + input[center - ydim + j]
                        + input[center + j + 1]
                        + input[center + j - 1];
                }
            }
        }
        LoopOrder::ColumnMajor => {
            for j in 1..ydim - 1 {
                for local in 0..block_rows {
                    let i = first_row + local;
                    if i == 0 || i + 1 >= xdim {
                        continue;
                    }
                    let center = i * ydim;
                    let out_base = local * ydim;
                    output[out_base + j] = -4.0 * input[center + j]
                        + input[center + ydim + j]
                        + input[center - ydim + j]
                        + input[center + j + 1]
                        + input[center + j - 1];
                }
            }
        }
    }
}

/// Sweep one worker's row block of a row-pointer field
///
/// `output` is the worker's disjoint slice of the row table, starting at
/// logical row `first_row`; `input` is the whole table, read-only.
fn sweep_pointer_rows(
    input: &[Vec<f32>],
    output: &mut [Vec<f32>],
    first_row: usize,
    xdim: usize,
    ydim: usize,
    order: LoopOrder,
) {
    match order {
        LoopOrder::RowMajor => {
            for local in 0..output.len() {
                let i = first_row + local;
                if i == 0 || i + 1 >= xdim {
                    continue;
                }
                let center = &input[i];
                let below = &input[i + 1];
                let above = &input[i - 1];
                let out = &mut output[local];
                for j in 1..ydim - 1 {
                    out[j] = -4.0 * center[j] + below[j] + above[j] + center[j + 1] + center[j - 1];
                }
            }
        }
        LoopOrder::ColumnMajor => {
            for j in 1..ydim - 1 {
                for local in 0..output.len() {
                    let i = first_row + local;
                    if i == 0 || i + 1 >= xdim {
                        continue;
                    }
                    output[local][j] = -4.0 * input[i][j]
                        + input[i + 1][j]
                        + input[i - 1][j]
                        + input[i][j + 1]
                        + input[i][j - 1];
                }
            }
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
