//! Grid data storage
//!
//! This module provides a storage container for 2-D scalar fields whose
//! *physical* memory arrangement can vary while the *logical* addressing
//! stays the same: `(row, col)` with row ∈ [0, xdim), col ∈ [0, ydim).

use ndarray::Array2;
use std::fmt;

// =================================================================================================
// Grid Dimensions
// =================================================================================================

/// Logical dimensions of a 2-D grid
///
/// Logical addressing is always `(row, col)` regardless of how the backing
/// storage arranges the rows in memory.
///
/// # Example
///
/// ```rust
/// use lapbench_rs::grid::GridDimensions;
///
/// let dims = GridDimensions::new(128, 256);
/// assert_eq!(dims.xdim, 128);
/// assert_eq!(dims.cell_count(), 128 * 256);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    /// Number of rows
    pub xdim: usize,

    /// Number of columns
    pub ydim: usize,
}

impl GridDimensions {
    /// Create dimensions from row and column counts
    pub fn new(xdim: usize, ydim: usize) -> Self {
        Self { xdim, ydim }
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.xdim * self.ydim
    }

    /// Check whether the grid has any interior cells
    ///
    /// A 5-point stencil needs at least one cell with four neighbors,
    /// which requires 3 rows and 3 columns.
    pub fn has_interior(&self) -> bool {
        self.xdim >= 3 && self.ydim >= 3
    }

    /// Validate that dimensions describe a usable grid
    pub fn validate(&self) -> Result<(), String> {
        if self.xdim == 0 || self.ydim == 0 {
            return Err(format!(
                "Grid dimensions must be non-zero, got {} x {}",
                self.xdim, self.ydim
            ));
        }
        Ok(())
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.xdim, self.ydim)
    }
}

// =================================================================================================
// Grid Data (Pluggable Storage)
// =================================================================================================

/// 2-D scalar field with pluggable physical storage
///
/// # Storage Types
///
/// - **Contiguous**: single row-major block, true 2-D addressing
/// - **RowPointers**: one independently allocated buffer per row, addressed
///   through a row table; table entry `k` is logical row `k`
///
/// Both variants hold the same logical content; only the physical placement
/// of rows differs. Stencil kernels accept either variant and must produce
/// identical results for identical logical content.
///
/// # Memory Layout
///
/// - **Contiguous[n×m]**: one 4nm-byte block, logically adjacent rows are
///   physically adjacent
/// - **RowPointers[n×m]**: n separate 4m-byte blocks whose relative
///   placement is up to the allocator (and, for the shuffled layout, up to
///   a random permutation of the allocation order)
///
/// # Examples
///
/// ```rust
/// use lapbench_rs::grid::{GridData, GridDimensions};
///
/// let dims = GridDimensions::new(8, 8);
/// let mut field = GridData::contiguous(dims);
///
/// field.set(3, 4, 1.5);
/// assert_eq!(field.get(3, 4), 1.5);
/// assert_eq!(field.dimensions(), dims);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GridData {
    /// Single contiguous row-major block - 4nm bytes
    Contiguous(Array2<f32>),

    /// Independently allocated row buffers behind a row table
    ///
    /// Table entry `k` always resolves to logical row `k`, regardless of
    /// the order in which the buffers were carved from the allocator.
    RowPointers(Vec<Vec<f32>>),
}

impl GridData {

    // ======================================= constructors =======================================

    /// Create a zero-filled contiguous field

    pub fn contiguous(dimensions: GridDimensions) -> Self {
        Self::Contiguous(Array2::zeros((dimensions.xdim, dimensions.ydim)))
    }

    /// Create a zero-filled row-pointer field
    ///
    /// Rows are allocated in ascending logical order.
    pub fn row_pointers(dimensions: GridDimensions) -> Self {
        let rows = (0..dimensions.xdim)
            .map(|_| vec![0.0_f32; dimensions.ydim])
            .collect();
        Self::RowPointers(rows)
    }

    /// Create from an existing 2-D array
    pub fn from_array(array: Array2<f32>) -> Self {
        Self::Contiguous(array)
    }

    /// Create from an existing row table
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        Self::RowPointers(rows)
    }

    // ========================================== Queries ==========================================

    /// Check storage is a contiguous block

    pub fn is_contiguous(&self) -> bool {
        matches!(self, Self::Contiguous(_))
    }

    /// Check storage is a row-pointer table
    pub fn is_row_pointers(&self) -> bool {
        matches!(self, Self::RowPointers(_))
    }

    /// Get logical dimensions
    ///
    /// For a row-pointer field with no rows, the column count is 0.
    pub fn dimensions(&self) -> GridDimensions {
        match self {
            GridData::Contiguous(a) => {
                let (x, y) = a.dim();
                GridDimensions::new(x, y)
            }
            GridData::RowPointers(rows) => {
                let ydim = rows.first().map(|r| r.len()).unwrap_or(0);
                GridDimensions::new(rows.len(), ydim)
            }
        }
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.dimensions().cell_count()
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Estimate memory usage of the cell data in bytes
    pub fn memory(&self) -> usize {
        4 * self.len()
    }

    // ====================================== Cell access ======================================

    /// Read the value at logical position `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics when the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        match self {
            GridData::Contiguous(a) => a[(row, col)],
            GridData::RowPointers(rows) => rows[row][col],
        }
    }

    /// Write `value` at logical position `(row, col)`
    ///
    /// # Panics
    ///
    /// Panics when the position is out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        match self {
            GridData::Contiguous(a) => a[(row, col)] = value,
            GridData::RowPointers(rows) => rows[row][col] = value,
        }
    }

    /// Fill every cell from a function of its logical position
    ///
    /// Visits cells row by row; used to set up deterministic test patterns
    /// like `u(i, j) = 6*i + j`.
    pub fn fill_with<F>(&mut self, f: F)
    where
        F: Fn(usize, usize) -> f32,
    {
        let dims = self.dimensions();
        for i in 0..dims.xdim {
            for j in 0..dims.ydim {
                self.set(i, j, f(i, j));
            }
        }
    }

    // ======================================== Extractions ========================================

    /// Extract as a contiguous array (panic if not)

    pub fn as_array(&self) -> &Array2<f32> {
        match self {
            GridData::Contiguous(value) => value,
            _ => panic!("Not a contiguous field"),
        }
    }

    /// Try to extract as a contiguous array

    pub fn try_as_array(&self) -> Option<&Array2<f32>> {
        match self {
            GridData::Contiguous(value) => Some(value),
            _ => None,
        }
    }

    /// Extract as a row table (panic if not)
    pub fn as_rows(&self) -> &[Vec<f32>] {
        match self {
            GridData::RowPointers(value) => value,
            _ => panic!("Not a row-pointer field"),
        }
    }

    /// Try to extract as a row table
    pub fn try_as_rows(&self) -> Option<&[Vec<f32>]> {
        match self {
            GridData::RowPointers(value) => Some(value),
            _ => None,
        }
    }
}

// ======================== Display ============================

impl fmt::Display for GridData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dims = self.dimensions();
        match self {
            GridData::Contiguous(_) => write!(f, "Contiguous [{}]", dims),
            GridData::RowPointers(_) => write!(f, "RowPointers [{}]", dims),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let dims = GridDimensions::new(4, 6);
        assert_eq!(dims.cell_count(), 24);
        assert!(dims.has_interior());
        assert!(dims.validate().is_ok());
    }

    #[test]
    fn test_dimensions_without_interior() {
        assert!(!GridDimensions::new(2, 10).has_interior());
        assert!(!GridDimensions::new(10, 2).has_interior());
        assert!(GridDimensions::new(3, 3).has_interior());
    }

    #[test]
    fn test_zero_dimensions_invalid() {
        assert!(GridDimensions::new(0, 5).validate().is_err());
        assert!(GridDimensions::new(5, 0).validate().is_err());
    }

    #[test]
    fn test_contiguous_creation() {
        let data = GridData::contiguous(GridDimensions::new(5, 7));
        assert!(data.is_contiguous());
        assert_eq!(data.dimensions(), GridDimensions::new(5, 7));
        assert_eq!(data.len(), 35);
        assert_eq!(data.memory(), 140);
    }

    #[test]
    fn test_row_pointers_creation() {
        let data = GridData::row_pointers(GridDimensions::new(5, 7));
        assert!(data.is_row_pointers());
        assert_eq!(data.dimensions(), GridDimensions::new(5, 7));
        assert_eq!(data.as_rows().len(), 5);
        assert_eq!(data.as_rows()[0].len(), 7);
    }

    #[test]
    fn test_get_set_round_trip() {
        for mut data in [
            GridData::contiguous(GridDimensions::new(4, 4)),
            GridData::row_pointers(GridDimensions::new(4, 4)),
        ] {
            data.set(2, 3, 9.25);
            assert_eq!(data.get(2, 3), 9.25);
            assert_eq!(data.get(0, 0), 0.0);
        }
    }

    #[test]
    fn test_fill_with_pattern() {
        let dims = GridDimensions::new(6, 6);
        let mut contiguous = GridData::contiguous(dims);
        let mut pointers = GridData::row_pointers(dims);

        contiguous.fill_with(|i, j| (6 * i + j) as f32);
        pointers.fill_with(|i, j| (6 * i + j) as f32);

        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(contiguous.get(i, j), (6 * i + j) as f32);
                assert_eq!(contiguous.get(i, j), pointers.get(i, j));
            }
        }
    }

    #[test]
    #[should_panic(expected = "Not a contiguous field")]
    fn test_as_array_panics_on_rows() {
        let data = GridData::row_pointers(GridDimensions::new(2, 2));
        data.as_array();
    }

    #[test]
    fn test_try_extractions() {
        let contiguous = GridData::contiguous(GridDimensions::new(2, 2));
        assert!(contiguous.try_as_array().is_some());
        assert!(contiguous.try_as_rows().is_none());

        let pointers = GridData::row_pointers(GridDimensions::new(2, 2));
        assert!(pointers.try_as_array().is_none());
        assert!(pointers.try_as_rows().is_some());
    }
}
