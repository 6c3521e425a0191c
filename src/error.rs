//! Error types for grid operations

use thiserror::Error;

/// Grid error type
#[derive(Error, Debug)]
pub enum GridError {
    /// Element count overflows `usize` or the allocator refused the buffer
    #[error("cannot allocate a {rows}x{cols} grid")]
    Allocation { rows: usize, cols: usize },

    /// Row or column outside the grid
    #[error("index ({row}, {col}) out of bounds for a {rows}x{cols} grid")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Total element counts differ
    #[error("size mismatch: expected {expected} elements, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    /// Access to a grid whose buffer was moved out
    #[error("grid was moved from and holds no elements")]
    UseAfterMove,

    /// JSON snapshot error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;
