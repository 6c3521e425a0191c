//! Property tests for the grid container

use grid2d::{Grid, GridError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn new_filled_is_all_default(rows in 0usize..24, cols in 0usize..24) {
        let grid: Grid<i64> = Grid::new_filled(rows, cols).unwrap();
        prop_assert_eq!(grid.len(), rows * cols);
        prop_assert!(grid.as_slice().iter().all(|&cell| cell == 0));
    }

    #[test]
    fn new_with_is_all_value(rows in 0usize..24, cols in 0usize..24, value in any::<i32>()) {
        let grid = Grid::new_with(rows, cols, value).unwrap();
        for row in 0..rows {
            for col in 0..cols {
                prop_assert_eq!(grid.get(row, col).unwrap(), value);
            }
        }
    }

    #[test]
    fn row_view_matches_indexed_access(
        rows in 1usize..16,
        cols in 1usize..16,
        seed in any::<u32>(),
    ) {
        let cells: Vec<u32> = (0..rows * cols).map(|i| seed.wrapping_add(i as u32)).collect();
        let grid = Grid::from_vec(rows, cols, cells).unwrap();
        for row in 0..rows {
            let view = grid.row(row).unwrap();
            prop_assert_eq!(view.len(), cols);
            for col in 0..cols {
                prop_assert_eq!(view[col], grid.get(row, col).unwrap());
                prop_assert_eq!(grid.as_slice()[row * cols + col], view[col]);
            }
        }
    }

    #[test]
    fn out_of_range_access_is_rejected(
        rows in 0usize..8,
        cols in 0usize..8,
        row in 0usize..16,
        col in 0usize..16,
    ) {
        let grid: Grid<u8> = Grid::new_filled(rows, cols).unwrap();
        let result = grid.get(row, col);
        if row < rows && col < cols {
            prop_assert!(result.is_ok());
        } else {
            let is_out_of_bounds = matches!(result, Err(GridError::IndexOutOfBounds { .. }));
            prop_assert!(is_out_of_bounds);
        }
    }

    #[test]
    fn clone_is_independent(rows in 1usize..12, cols in 1usize..12, value in any::<i16>()) {
        let original = Grid::new_with(rows, cols, value).unwrap();
        let mut copy = original.clone();
        prop_assert_eq!(copy.dimensions(), original.dimensions());

        copy.fill(value.wrapping_add(1));
        prop_assert!(original.as_slice().iter().all(|&cell| cell == value));
    }

    #[test]
    fn move_transfers_everything(rows in 0usize..12, cols in 0usize..12, value in any::<u8>()) {
        let mut source = Grid::new_with(rows, cols, value).unwrap();
        let expected = source.clone();
        let dest = Grid::move_from(&mut source);

        prop_assert_eq!(dest, expected);
        prop_assert!(source.is_moved_from());
        prop_assert_eq!(source.len(), 0);
    }

    #[test]
    fn copy_assign_requires_equal_counts(
        a_rows in 0usize..6,
        a_cols in 0usize..6,
        b_rows in 0usize..6,
        b_cols in 0usize..6,
    ) {
        let source = Grid::new_with(a_rows, a_cols, 1u8).unwrap();
        let mut dest = Grid::new_with(b_rows, b_cols, 2u8).unwrap();
        let result = dest.assign_copy(&source);

        prop_assert_eq!(dest.rows(), b_rows);
        prop_assert_eq!(dest.cols(), b_cols);
        if a_rows * a_cols == b_rows * b_cols {
            prop_assert!(result.is_ok());
            prop_assert!(dest.as_slice().iter().all(|&cell| cell == 1));
        } else {
            let is_mismatch = matches!(result, Err(GridError::SizeMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }
}
