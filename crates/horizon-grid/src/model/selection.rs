//! Selection model for table views.
//!
//! This module provides [`SelectionModel`], which tracks the selected cells
//! of a table and the current (focused) cell. The editing controller reads
//! the selected rows from it.
//!
//! # Example
//!
//! ```
//! use horizon_grid::model::{SelectionFlags, SelectionMode, SelectionModel};
//!
//! let mut selection = SelectionModel::new();
//! selection.set_selection_mode(SelectionMode::MultiSelection);
//!
//! selection.select((5, 0), SelectionFlags::SELECT);
//! selection.select((3, 1), SelectionFlags::SELECT);
//! assert_eq!(selection.selected_rows(), vec![3, 5]);
//!
//! // Listen for changes
//! selection.selection_changed.connect(|(selected, deselected)| {
//!     println!("Selection changed: +{} -{}", selected.len(), deselected.len());
//! });
//! ```

use std::collections::BTreeSet;

use horizon_grid_core::Signal;

use super::traits::CellPos;

/// Selection behavior mode for views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// No items can be selected.
    NoSelection,
    /// Only one cell can be selected at a time (default).
    #[default]
    SingleSelection,
    /// Multiple cells can be selected.
    MultiSelection,
}

/// Flags controlling selection operations.
///
/// These flags can be combined to perform complex selection operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    /// Clear existing selection before applying operation.
    pub clear: bool,
    /// Select the specified cells.
    pub select: bool,
    /// Deselect the specified cells.
    pub deselect: bool,
    /// Toggle selection state of specified cells.
    pub toggle: bool,
    /// Set as current cell (keyboard focus).
    pub current: bool,
}

impl SelectionFlags {
    /// No operation.
    pub const NONE: Self = Self::empty();

    /// Select the cell.
    pub const SELECT: Self = Self {
        select: true,
        ..Self::empty()
    };

    /// Deselect the cell.
    pub const DESELECT: Self = Self {
        deselect: true,
        ..Self::empty()
    };

    /// Toggle selection of the cell.
    pub const TOGGLE: Self = Self {
        toggle: true,
        ..Self::empty()
    };

    /// Clear existing selection and select the cell.
    pub const CLEAR_AND_SELECT: Self = Self {
        clear: true,
        select: true,
        ..Self::empty()
    };

    /// Clear, select, and set as current.
    pub const CLEAR_SELECT_CURRENT: Self = Self {
        clear: true,
        select: true,
        current: true,
        ..Self::empty()
    };

    const fn empty() -> Self {
        Self {
            clear: false,
            select: false,
            deselect: false,
            toggle: false,
            current: false,
        }
    }
}

/// Manages selection state for a table view.
///
/// # Signals
///
/// - `selection_changed`: Emitted when selection changes, with (selected, deselected) cells
/// - `current_changed`: Emitted when the current cell changes, with (new, old)
pub struct SelectionModel {
    mode: SelectionMode,
    current: Option<CellPos>,
    /// Selected cells, ordered by (row, column).
    selected: BTreeSet<CellPos>,

    /// Emitted when selection changes. Args: (selected, deselected)
    pub selection_changed: Signal<(Vec<CellPos>, Vec<CellPos>)>,

    /// Emitted when the current cell changes. Args: (new, old)
    pub current_changed: Signal<(Option<CellPos>, Option<CellPos>)>,
}

impl Default for SelectionModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionModel {
    /// Creates a new selection model with default settings.
    pub fn new() -> Self {
        Self {
            mode: SelectionMode::default(),
            current: None,
            selected: BTreeSet::new(),
            selection_changed: Signal::new(),
            current_changed: Signal::new(),
        }
    }

    /// Gets the current selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode.
    ///
    /// Changing mode does not clear existing selection, but subsequent
    /// selections will follow the new mode's behavior.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Gets the current (focused) cell.
    pub fn current_cell(&self) -> Option<CellPos> {
        self.current
    }

    // =========================================================================
    // Selection Queries
    // =========================================================================

    /// Checks if a specific cell is selected.
    pub fn is_selected(&self, cell: CellPos) -> bool {
        self.selected.contains(&cell)
    }

    /// Checks if a row is selected (any column in that row).
    pub fn is_row_selected(&self, row: usize) -> bool {
        self.selected
            .range((row, 0)..=(row, usize::MAX))
            .next()
            .is_some()
    }

    /// Returns true if any cells are selected.
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }

    /// Returns the number of selected cells.
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Returns the selected cells in (row, column) order.
    pub fn selected_cells(&self) -> Vec<CellPos> {
        self.selected.iter().copied().collect()
    }

    /// Returns the distinct selected rows in ascending order.
    pub fn selected_rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.selected.iter().map(|&(row, _)| row).collect();
        rows.dedup();
        rows
    }

    // =========================================================================
    // Selection Operations
    // =========================================================================

    /// Performs a selection operation on a cell.
    ///
    /// The behavior depends on the flags:
    /// - `clear`: Deselects all cells first
    /// - `select`: Adds the cell to selection
    /// - `deselect`: Removes the cell from selection
    /// - `toggle`: Toggles the selection state
    /// - `current`: Makes the cell the current cell
    pub fn select(&mut self, cell: CellPos, flags: SelectionFlags) {
        if flags.current {
            self.set_current(Some(cell));
        }
        self.apply(std::iter::once(cell), flags);
    }

    /// Selects every cell of `row` across `column_count` columns.
    pub fn select_row(&mut self, row: usize, column_count: usize, flags: SelectionFlags) {
        self.apply((0..column_count).map(|column| (row, column)), flags);
    }

    /// Clears all selection.
    pub fn clear_selection(&mut self) {
        if self.selected.is_empty() {
            return;
        }

        let deselected = std::mem::take(&mut self.selected).into_iter().collect();
        self.selection_changed.emit((Vec::new(), deselected));
    }

    /// Clears all selection and the current cell.
    pub fn clear(&mut self) {
        self.clear_selection();
        self.set_current(None);
    }

    fn set_current(&mut self, cell: Option<CellPos>) {
        let old = std::mem::replace(&mut self.current, cell);
        if old != cell {
            self.current_changed.emit((cell, old));
        }
    }

    fn apply(&mut self, cells: impl IntoIterator<Item = CellPos>, flags: SelectionFlags) {
        if self.mode == SelectionMode::NoSelection {
            return;
        }

        let before = self.selected.clone();
        if flags.clear {
            self.selected.clear();
        }

        for cell in cells {
            let was_selected = self.selected.contains(&cell);
            if flags.toggle {
                if was_selected {
                    self.selected.remove(&cell);
                } else {
                    self.selected.insert(cell);
                }
            } else if flags.select {
                if self.mode == SelectionMode::SingleSelection {
                    self.selected.clear();
                }
                self.selected.insert(cell);
            } else if flags.deselect {
                self.selected.remove(&cell);
            }
        }

        let newly_selected: Vec<CellPos> = self.selected.difference(&before).copied().collect();
        let newly_deselected: Vec<CellPos> = before.difference(&self.selected).copied().collect();
        if !newly_selected.is_empty() || !newly_deselected.is_empty() {
            self.selection_changed
                .emit((newly_selected, newly_deselected));
        }
    }
}
