//! Grid snapshots for fixtures and debugging
//!
//! A grid serializes as `{ "rows": .., "cols": .., "cells": [..] }` with the
//! cells in row-major order. Deserialization goes through [`RawGrid`] so a
//! cell count that does not match the shape is rejected.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Unvalidated serialized form of a grid
#[derive(Debug, Deserialize)]
pub(crate) struct RawGrid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> TryFrom<RawGrid<T>> for Grid<T> {
    type Error = GridError;

    fn try_from(raw: RawGrid<T>) -> Result<Self> {
        Grid::from_vec(raw.rows, raw.cols, raw.cells)
    }
}

impl<T: Serialize> Grid<T> {
    /// Serialize to a pretty-printed JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<T: DeserializeOwned> Grid<T> {
    /// Parse a grid from a JSON string
    ///
    /// A cell count that does not match the shape fails with
    /// [`GridError::SizeMismatch`], as [`Grid::from_vec`] does.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawGrid<T> = serde_json::from_str(json)?;
        Grid::try_from(raw)
    }
}
