//! Memory-layout strategies and grid allocation
//!
//! # Design Philosophy
//!
//! A stencil sweep touches every cell of its input and output fields, so
//! throughput is dominated by how the hardware prefetcher and caches cope
//! with the *physical* placement of logically adjacent rows. This module
//! makes that placement an explicit, selectable strategy:
//!
//! - `Contiguous`: logically adjacent rows are physically adjacent
//! - `RowPointers`: rows are separate allocations, created in logical order,
//!   so the allocator usually still places them near each other
//! - `ShuffledRowPointers`: rows are separate allocations created in a
//!   uniformly random order, decoupling logical adjacency from physical
//!   adjacency
//!
//! The three strategies hold identical logical content; only the memory
//! traffic pattern of a sweep over them differs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::data::{GridData, GridDimensions};

// =================================================================================================
// Layout Strategy
// =================================================================================================

/// Physical memory arrangement chosen for a logically identical 2-D grid
///
/// # Examples
///
/// ```rust
/// use lapbench_rs::grid::GridLayout;
///
/// let layout = GridLayout::ShuffledRowPointers { seed: Some(42) };
/// assert_eq!(layout.name(), "shuffled row pointers");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridLayout {
    /// Single contiguous block per field, true 2-D addressing
    Contiguous,

    /// One allocation per row, rows allocated in ascending logical order
    RowPointers,

    /// One allocation per row, rows allocated in a uniformly random order
    ///
    /// With `seed: Some(s)` the permutation is reproducible; with `None` it
    /// is drawn from OS entropy.
    ShuffledRowPointers {
        seed: Option<u64>,
    },
}

impl GridLayout {
    /// Get name identifier
    pub fn name(&self) -> &'static str {
        match self {
            GridLayout::Contiguous => "contiguous",
            GridLayout::RowPointers => "row pointers",
            GridLayout::ShuffledRowPointers { .. } => "shuffled row pointers",
        }
    }
}

impl std::fmt::Display for GridLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =================================================================================================
// Shuffled Allocation Order
// =================================================================================================

/// Produce a uniform random permutation of `[0, count)` by drawing indices
/// without replacement from the full index set
///
/// Each draw picks a uniformly random element of the remaining pool and
/// removes it with a swap-remove, so every permutation is equally likely
/// and the draw order *is* the physical allocation order used by
/// [`GridLayout::ShuffledRowPointers`].
///
/// # Arguments
///
/// * `count` - Size of the index set (number of rows)
/// * `seed`  - `Some(s)` for a reproducible permutation, `None` for entropy
///
/// # Example
///
/// ```rust
/// use lapbench_rs::grid::shuffled_order;
///
/// let a = shuffled_order(100, Some(7));
/// let b = shuffled_order(100, Some(7));
/// assert_eq!(a, b);
/// ```
pub fn shuffled_order(count: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    // Draw without replacement from the shrinking pool. swap_remove keeps
    // each draw O(1) without disturbing the uniformity of later draws.
    let mut pool: Vec<usize> = (0..count).collect();
    let mut order = Vec::with_capacity(count);

    while !pool.is_empty() {
        let j = rng.gen_range(0..pool.len());
        order.push(pool.swap_remove(j));
    }

    order
}

// =================================================================================================
// Grid (paired input/output fields)
// =================================================================================================

/// Input and output fields of one benchmark run, allocated under a single
/// layout strategy
///
/// # Ownership
///
/// A `Grid` is exclusively owned by the benchmark run that allocated it:
/// created at run start, dropped at run end. Dropping the grid releases
/// every row buffer and the row table on all completion paths, including
/// early aborts.
///
/// # Examples
///
/// ```rust
/// use lapbench_rs::grid::{Grid, GridDimensions, GridLayout};
///
/// let grid = Grid::allocate(GridDimensions::new(16, 16), GridLayout::RowPointers).unwrap();
/// assert_eq!(grid.u.dimensions(), grid.lu.dimensions());
/// ```
#[derive(Debug)]
pub struct Grid {
    /// Input field, read-only during a sweep
    pub u: GridData,

    /// Output field, written at interior cells only
    pub lu: GridData,

    layout: GridLayout,
}

impl Grid {
    /// Allocate both fields under the requested layout strategy
    ///
    /// All cells start at zero. For `ShuffledRowPointers` the rows of `u`
    /// and `lu` are allocated interleaved in one shared shuffled order, so
    /// the permutation applies to the physical creation order of *both*
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns `Err` for zero-sized dimensions.
    pub fn allocate(dimensions: GridDimensions, layout: GridLayout) -> Result<Self, String> {
        dimensions.validate()?;

        let (u, lu) = match layout {
            GridLayout::Contiguous => (
                GridData::contiguous(dimensions),
                GridData::contiguous(dimensions),
            ),
            GridLayout::RowPointers => (
                GridData::row_pointers(dimensions),
                GridData::row_pointers(dimensions),
            ),
            GridLayout::ShuffledRowPointers { seed } => {
                Self::allocate_shuffled(dimensions, seed)?
            }
        };

        Ok(Self { u, lu, layout })
    }

    /// Allocate row-pointer fields whose rows are created in shuffled order
    ///
    /// The table entry for logical row `k` always ends up pointing at the
    /// buffer created for row `k`; only the *creation order* is permuted.
    fn allocate_shuffled(
        dimensions: GridDimensions,
        seed: Option<u64>,
    ) -> Result<(GridData, GridData), String> {
        let order = shuffled_order(dimensions.xdim, seed);

        let mut u_rows: Vec<Option<Vec<f32>>> = (0..dimensions.xdim).map(|_| None).collect();
        let mut lu_rows: Vec<Option<Vec<f32>>> = (0..dimensions.xdim).map(|_| None).collect();

        for &row in &order {
            u_rows[row] = Some(vec![0.0_f32; dimensions.ydim]);
            lu_rows[row] = Some(vec![0.0_f32; dimensions.ydim]);
        }

        // order is a permutation of [0, xdim), so every slot must be filled;
        // collect-to-Option keeps that assumption checked rather than assumed.
        let u = u_rows
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| "Shuffled allocation left an input row unassigned".to_string())?;
        let lu = lu_rows
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| "Shuffled allocation left an output row unassigned".to_string())?;

        Ok((GridData::from_rows(u), GridData::from_rows(lu)))
    }

    /// Layout strategy the fields were allocated under
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Logical dimensions shared by both fields
    pub fn dimensions(&self) -> GridDimensions {
        self.u.dimensions()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
