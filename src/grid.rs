//! Row-major grid container
//!
//! The grid owns one contiguous buffer of `rows * cols` elements. The element
//! at `(row, col)` lives at offset `row * cols + col`.

use std::mem;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::snapshot::RawGrid;
use crate::Dimensions;

/// A two-dimensional grid stored as one row-major buffer
///
/// Equality compares shape and cells only, so a moved-from grid equals any
/// other 0x0 grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "RawGrid<T>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Grid<T> {
    /// Number of rows
    rows: usize,
    /// Number of columns
    cols: usize,
    /// Cells in row-major order, `rows * cols` long
    cells: Vec<T>,
    /// Set once the buffer has been transferred to another grid
    #[serde(skip)]
    moved_from: bool,
}

impl<T> Grid<T> {
    /// Create a grid with every cell set to `T::default()`
    pub fn new_filled(rows: usize, cols: usize) -> Result<Self>
    where
        T: Default,
    {
        let (mut cells, len) = Self::allocate(rows, cols)?;
        cells.resize_with(len, T::default);
        Ok(Self::from_parts(rows, cols, cells))
    }

    /// Create a grid with every cell set to a clone of `value`
    pub fn new_with(rows: usize, cols: usize, value: T) -> Result<Self>
    where
        T: Clone,
    {
        let (mut cells, len) = Self::allocate(rows, cols)?;
        cells.resize(len, value);
        Ok(Self::from_parts(rows, cols, cells))
    }

    /// Create a 1x1 grid holding `value`
    pub fn from_scalar(value: T) -> Self {
        Self::from_parts(1, 1, vec![value])
    }

    /// Create a default-valued grid from dimensions
    pub fn from_dimensions(dims: Dimensions) -> Result<Self>
    where
        T: Default,
    {
        Self::new_filled(dims.rows, dims.cols)
    }

    /// Adopt an existing row-major buffer
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        let expected = Dimensions::new(rows, cols)
            .cell_count()
            .ok_or(GridError::Allocation { rows, cols })?;
        if cells.len() != expected {
            log::debug!(
                "buffer of {} cells does not fit a {}x{} grid",
                cells.len(),
                rows,
                cols
            );
            return Err(GridError::SizeMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self::from_parts(rows, cols, cells))
    }

    /// Transfer the buffer out of `other`, leaving it moved-from
    pub fn move_from(other: &mut Self) -> Self {
        other.take()
    }

    /// Transfer this grid's buffer into a new grid, leaving `self` moved-from
    ///
    /// No element is copied. Afterwards `self` is 0x0 and every element access
    /// on it fails with [`GridError::UseAfterMove`] until a buffer is moved back
    /// in with [`Grid::assign_move`].
    pub fn take(&mut self) -> Self {
        log::trace!("moving {}x{} grid buffer", self.rows, self.cols);
        let taken = Self {
            rows: self.rows,
            cols: self.cols,
            cells: mem::take(&mut self.cells),
            moved_from: self.moved_from,
        };
        self.rows = 0;
        self.cols = 0;
        self.moved_from = true;
        taken
    }

    /// Copy every element of `other` into this grid's existing buffer
    ///
    /// Both grids must hold the same number of elements. The buffer is not
    /// reallocated and this grid keeps its own shape, so a 2x3 destination
    /// receiving a 3x2 source stays 2x3 with the source's cells in linear order.
    pub fn assign_copy(&mut self, other: &Self) -> Result<()>
    where
        T: Clone,
    {
        if self.moved_from || other.moved_from {
            return Err(GridError::UseAfterMove);
        }
        if self.cells.len() != other.cells.len() {
            log::debug!(
                "copy of {}x{} grid into {}x{} grid rejected",
                other.rows,
                other.cols,
                self.rows,
                self.cols
            );
            return Err(GridError::SizeMismatch {
                expected: self.cells.len(),
                found: other.cells.len(),
            });
        }
        self.cells.clone_from_slice(&other.cells);
        Ok(())
    }

    /// Replace this grid with `other`'s buffer and shape, leaving `other` moved-from
    ///
    /// The previous buffer is dropped exactly once, when it is replaced.
    pub fn assign_move(&mut self, other: &mut Self) {
        *self = other.take();
    }

    /// Overwrite every cell with a clone of `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    /// Get a copy of the cell at `(row, col)`
    pub fn get(&self, row: usize, col: usize) -> Result<T>
    where
        T: Clone,
    {
        self.get_ref(row, col).cloned()
    }

    /// Get a reference to the cell at `(row, col)`
    pub fn get_ref(&self, row: usize, col: usize) -> Result<&T> {
        let offset = self.offset(row, col)?;
        Ok(&self.cells[offset])
    }

    /// Get a mutable reference to the cell at `(row, col)`
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.cells[offset])
    }

    /// Get a reference to the cell at `(row, col)` without bounds checking
    ///
    /// # Safety
    ///
    /// `row < self.rows()` and `col < self.cols()` must hold.
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells.get_unchecked(row * self.cols + col)
    }

    /// Get a mutable reference to the cell at `(row, col)` without bounds checking
    ///
    /// # Safety
    ///
    /// `row < self.rows()` and `col < self.cols()` must hold.
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        let offset = row * self.cols + col;
        self.cells.get_unchecked_mut(offset)
    }

    /// Get a view of one row
    pub fn row(&self, row: usize) -> Result<&[T]> {
        let start = self.row_start(row)?;
        Ok(&self.cells[start..start + self.cols])
    }

    /// Get a mutable view of one row
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T]> {
        let start = self.row_start(row)?;
        let end = start + self.cols;
        Ok(&mut self.cells[start..end])
    }

    /// Iterator over row views, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        let cols = self.cols;
        (0..self.rows).map(move |row| &self.cells[row * cols..(row + 1) * cols])
    }

    /// Get number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get number of columns
    pub fn columns(&self) -> usize {
        self.cols
    }

    /// Get grid dimensions
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.rows, self.cols)
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the buffer was moved out of this grid
    pub fn is_moved_from(&self) -> bool {
        self.moved_from
    }

    /// All cells in row-major order
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    fn from_parts(rows: usize, cols: usize, cells: Vec<T>) -> Self {
        Self {
            rows,
            cols,
            cells,
            moved_from: false,
        }
    }

    /// Reserve an empty buffer for `rows * cols` cells
    fn allocate(rows: usize, cols: usize) -> Result<(Vec<T>, usize)> {
        let Some(len) = Dimensions::new(rows, cols).cell_count() else {
            log::debug!("{}x{} grid overflows the cell count", rows, cols);
            return Err(GridError::Allocation { rows, cols });
        };
        let mut cells = Vec::new();
        if let Err(err) = cells.try_reserve_exact(len) {
            log::debug!("allocation for {}x{} grid refused: {}", rows, cols, err);
            return Err(GridError::Allocation { rows, cols });
        }
        Ok((cells, len))
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if self.moved_from {
            return Err(GridError::UseAfterMove);
        }
        if row >= self.rows || col >= self.cols {
            return Err(GridError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    fn row_start(&self, row: usize) -> Result<usize> {
        if self.moved_from {
            return Err(GridError::UseAfterMove);
        }
        if row >= self.rows {
            return Err(GridError::IndexOutOfBounds {
                row,
                col: 0,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols)
    }
}

impl<T: PartialEq> PartialEq for Grid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl<T: Eq> Eq for Grid<T> {}

impl<T> Default for Grid<T> {
    /// An empty 0x0 grid that was never moved from
    fn default() -> Self {
        Self::from_parts(0, 0, Vec::new())
    }
}

/// `grid[row]` yields the row view, so `grid[row][col]` reaches a cell.
/// Panics on an invalid row, like slice indexing.
impl<T> Index<usize> for Grid<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        match self.row(row) {
            Ok(cells) => cells,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        match self.row_mut(row) {
            Ok(cells) => cells,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get_ref(row, col) {
            Ok(cell) => cell,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.get_mut(row, col) {
            Ok(cell) => cell,
            Err(err) => panic!("{}", err),
        }
    }
}
