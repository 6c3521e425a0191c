//! grid2d - a generic two-dimensional grid container
//!
//! This crate provides a single owning container, [`Grid`], that stores
//! `rows x cols` elements in one contiguous row-major buffer:
//! - Default, fill and singleton construction
//! - Shape-preserving copies and O(1) buffer transfer that leaves the source empty
//! - Checked element and row access, with explicitly unsafe unchecked variants
//! - Whole-grid fill and equal-size copy assignment
//!
//! Every failure the buffer could otherwise suffer silently (overflowing sizes,
//! out-of-range indices, mismatched copies, access after a move) is reported as
//! a [`GridError`].

mod error;
mod grid;
mod snapshot;

pub use error::{GridError, Result};
pub use grid::Grid;

use serde::{Deserialize, Serialize};

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Total number of cells, or `None` if `rows * cols` overflows
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }
}
