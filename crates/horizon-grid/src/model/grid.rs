//! Storage backends for the cell grid.
//!
//! A [`CellGrid`] owns the body cells of a table in row-major order and
//! knows nothing about headers or orientation. Two layouts are provided:
//!
//! - [`NestedGrid`]: one `Vec<Cell>` per row. Row insertion and removal move
//!   whole rows; column operations touch every row.
//! - [`FlatGrid`]: one contiguous `Vec<Cell>` addressed through
//!   [`linear_index`]. Cheaper to clone, at the cost of shifting cells on
//!   every structural change.
//!
//! Both layouts are interchangeable under [`CellStore`](super::CellStore) and
//! produce identical observations for the same sequence of operations.
//!
//! Grid methods assume the caller has validated every range. Out-of-range
//! arguments are clamped rather than panicking.

use std::fmt;
use std::iter;

use super::cell::Cell;

/// Row-major storage for the body cells of a table.
pub trait CellGrid: Clone + Default + fmt::Debug + Send + Sync + 'static {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of cells in `row`, or `None` if the row does not exist.
    fn row_len(&self, row: usize) -> Option<usize>;

    /// The cell at `(row, column)`.
    fn cell(&self, row: usize, column: usize) -> Option<&Cell>;

    /// Mutable access to the cell at `(row, column)`.
    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell>;

    /// Inserts `count` rows of `width` empty cells before `at`.
    fn insert_rows(&mut self, at: usize, count: usize, width: usize);

    /// Removes `count` rows starting at `at`.
    fn remove_rows(&mut self, at: usize, count: usize);

    /// Inserts `count` empty cells before column `at` in every row.
    fn insert_columns(&mut self, at: usize, count: usize);

    /// Removes `count` cells starting at column `at` from every row.
    fn remove_columns(&mut self, at: usize, count: usize);
}

fn empty_cells(count: usize) -> impl Iterator<Item = Cell> {
    iter::repeat_with(Cell::new).take(count)
}

/// Grid stored as a vector of rows.
#[derive(Debug, Clone, Default)]
pub struct NestedGrid {
    rows: Vec<Vec<Cell>>,
}

impl CellGrid for NestedGrid {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row)?.get(column)
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row)?.get_mut(column)
    }

    fn insert_rows(&mut self, at: usize, count: usize, width: usize) {
        let at = at.min(self.rows.len());
        let rows = iter::repeat_with(|| empty_cells(width).collect::<Vec<_>>()).take(count);
        self.rows.splice(at..at, rows);
    }

    fn remove_rows(&mut self, at: usize, count: usize) {
        let at = at.min(self.rows.len());
        let end = at.saturating_add(count).min(self.rows.len());
        self.rows.drain(at..end);
    }

    fn insert_columns(&mut self, at: usize, count: usize) {
        for row in &mut self.rows {
            let at = at.min(row.len());
            row.splice(at..at, empty_cells(count));
        }
    }

    fn remove_columns(&mut self, at: usize, count: usize) {
        for row in &mut self.rows {
            let at = at.min(row.len());
            let end = at.saturating_add(count).min(row.len());
            row.drain(at..end);
        }
    }
}

/// Maps `(row, column)` to a position in row-major storage of `columns`
/// cells per row.
///
/// Every in-range pair maps to a distinct position; `(0, 0)` maps to `0`.
#[inline]
pub fn linear_index(row: usize, column: usize, columns: usize) -> usize {
    row * columns + column
}

/// Grid stored as a single contiguous row-major vector.
#[derive(Debug, Clone, Default)]
pub struct FlatGrid {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl FlatGrid {
    /// Number of cells per row.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    fn position(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then(|| linear_index(row, column, self.columns))
    }
}

impl CellGrid for FlatGrid {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn row_len(&self, row: usize) -> Option<usize> {
        (row < self.rows).then_some(self.columns)
    }

    fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.position(row, column).and_then(|i| self.cells.get(i))
    }

    fn cell_mut(&mut self, row: usize, column: usize) -> Option<&mut Cell> {
        let i = self.position(row, column)?;
        self.cells.get_mut(i)
    }

    fn insert_rows(&mut self, at: usize, count: usize, width: usize) {
        if self.rows == 0 {
            self.columns = width;
        }
        let at = at.min(self.rows);
        let start = linear_index(at, 0, self.columns);
        self.cells.splice(start..start, empty_cells(count * self.columns));
        self.rows += count;
    }

    fn remove_rows(&mut self, at: usize, count: usize) {
        let at = at.min(self.rows);
        let count = count.min(self.rows - at);
        let start = linear_index(at, 0, self.columns);
        let end = linear_index(at + count, 0, self.columns);
        self.cells.drain(start..end);
        self.rows -= count;
    }

    fn insert_columns(&mut self, at: usize, count: usize) {
        let at = at.min(self.columns);
        let old_columns = self.columns;
        let new_columns = old_columns + count;
        let mut cells = Vec::with_capacity(self.rows * new_columns);
        let mut old = std::mem::take(&mut self.cells).into_iter();
        for _ in 0..self.rows {
            cells.extend(old.by_ref().take(at));
            cells.extend(empty_cells(count));
            cells.extend(old.by_ref().take(old_columns - at));
        }
        self.cells = cells;
        self.columns = new_columns;
    }

    fn remove_columns(&mut self, at: usize, count: usize) {
        let at = at.min(self.columns);
        let count = count.min(self.columns - at);
        let old_columns = self.columns;
        self.cells = std::mem::take(&mut self.cells)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| {
                let column = i % old_columns;
                column < at || column >= at + count
            })
            .map(|(_, cell)| cell)
            .collect();
        self.columns = old_columns - count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::role::ItemRole;

    fn label(grid: &impl CellGrid, row: usize, column: usize) -> Option<String> {
        grid.cell(row, column)?
            .get(ItemRole::Display)
            .into_string()
    }

    fn fill<G: CellGrid>(rows: usize, columns: usize) -> G {
        let mut grid = G::default();
        grid.insert_rows(0, rows, columns);
        for r in 0..rows {
            for c in 0..columns {
                if let Some(cell) = grid.cell_mut(r, c) {
                    cell.set(ItemRole::Display, format!("{r}{c}").into());
                }
            }
        }
        grid
    }

    fn check_column_ops<G: CellGrid>() {
        let mut grid: G = fill(2, 3);
        grid.insert_columns(1, 2);
        assert_eq!(grid.row_len(0), Some(5));
        assert_eq!(grid.row_len(1), Some(5));
        assert_eq!(label(&grid, 1, 0).as_deref(), Some("10"));
        assert!(label(&grid, 1, 1).is_none());
        assert!(label(&grid, 1, 2).is_none());
        assert_eq!(label(&grid, 1, 3).as_deref(), Some("11"));
        assert_eq!(label(&grid, 1, 4).as_deref(), Some("12"));

        grid.remove_columns(0, 3);
        assert_eq!(grid.row_len(0), Some(2));
        assert_eq!(label(&grid, 0, 0).as_deref(), Some("01"));
        assert_eq!(label(&grid, 1, 1).as_deref(), Some("12"));
    }

    fn check_row_ops<G: CellGrid>() {
        let mut grid: G = fill(3, 2);
        grid.insert_rows(1, 1, 2);
        assert_eq!(grid.row_count(), 4);
        assert!(label(&grid, 1, 0).is_none());
        assert_eq!(label(&grid, 2, 1).as_deref(), Some("11"));

        grid.remove_rows(0, 2);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(label(&grid, 0, 0).as_deref(), Some("10"));
        assert_eq!(label(&grid, 1, 1).as_deref(), Some("21"));
        assert!(grid.cell(2, 0).is_none());
        assert!(grid.cell(0, 2).is_none());
    }

    #[test]
    fn test_linear_index() {
        assert_eq!(linear_index(0, 0, 3), 0);
        assert_eq!(linear_index(0, 2, 3), 2);
        assert_eq!(linear_index(1, 0, 3), 3);
        assert_eq!(linear_index(2, 1, 3), 7);
    }

    #[test]
    fn test_nested_row_ops() {
        check_row_ops::<NestedGrid>();
    }

    #[test]
    fn test_flat_row_ops() {
        check_row_ops::<FlatGrid>();
    }

    #[test]
    fn test_nested_column_ops() {
        check_column_ops::<NestedGrid>();
    }

    #[test]
    fn test_flat_column_ops() {
        check_column_ops::<FlatGrid>();
    }

    #[test]
    fn test_first_cell_is_addressable() {
        let mut grid = FlatGrid::default();
        grid.insert_rows(0, 1, 1);
        assert!(grid.cell(0, 0).is_some());
        assert_eq!(grid.column_count(), 1);
    }

    #[test]
    fn test_flat_zero_width_rows() {
        let mut grid = FlatGrid::default();
        grid.insert_rows(0, 3, 0);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.row_len(2), Some(0));

        grid.insert_columns(0, 1);
        assert_eq!(grid.row_len(1), Some(1));
        assert!(grid.cell(2, 0).is_some());
    }
}
