//! Core traits for the Model/View architecture.
//!
//! This module defines the read-only interface views use to query a table
//! model, and the signals a model emits when its structure or content changes.

use horizon_grid_core::Signal;

use super::role::{CheckState, ItemData, ItemRole};

/// Header orientation for `header_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Horizontal header (column headers).
    Horizontal,
    /// Vertical header (row headers).
    Vertical,
}

/// The read interface views use to query a two-dimensional table model.
///
/// Tables are flat: every cell is addressed by a `(row, column)` pair and
/// there is no parent/child hierarchy. Mutation is not part of this trait;
/// models expose their own `&mut self` mutators and report the results
/// through [`ModelSignals`].
///
/// # Implementation Requirements
///
/// At minimum, you must implement:
/// - [`row_count`](ItemModel::row_count) - Number of rows
/// - [`column_count`](ItemModel::column_count) - Number of columns
/// - [`data`](ItemModel::data) - Data for a given cell and role
/// - [`signals`](ItemModel::signals) - Change notifications
///
/// # Example
///
/// ```
/// use horizon_grid::model::{ItemData, ItemModel, ItemRole, ModelSignals};
///
/// struct Squares {
///     rows: usize,
///     signals: ModelSignals,
/// }
///
/// impl ItemModel for Squares {
///     fn row_count(&self) -> usize {
///         self.rows
///     }
///
///     fn column_count(&self) -> usize {
///         1
///     }
///
///     fn data(&self, row: usize, column: usize, role: ItemRole) -> ItemData {
///         if row >= self.rows || column > 0 || role != ItemRole::Display {
///             return ItemData::None;
///         }
///         ItemData::Int((row * row) as i64)
///     }
///
///     fn signals(&self) -> &ModelSignals {
///         &self.signals
///     }
/// }
///
/// let model = Squares { rows: 4, signals: ModelSignals::new() };
/// assert_eq!(model.data(3, 0, ItemRole::Display).as_int(), Some(9));
/// ```
pub trait ItemModel: Send + Sync {
    /// Returns the number of rows.
    fn row_count(&self) -> usize;

    /// Returns the number of columns.
    fn column_count(&self) -> usize;

    /// Returns the data stored under the given role for the cell at
    /// `(row, column)`.
    ///
    /// Return `ItemData::None` if:
    /// - The position is out of range
    /// - The role is not supported
    /// - There's no data for that role
    fn data(&self, row: usize, column: usize, role: ItemRole) -> ItemData;

    /// Returns the signals for this model.
    ///
    /// Views connect to these signals to receive notifications about
    /// data changes, insertions, removals, etc.
    fn signals(&self) -> &ModelSignals;

    // -------------------------------------------------------------------------
    // Optional methods with default implementations
    // -------------------------------------------------------------------------

    /// Returns header data for the given section (row or column header).
    ///
    /// - For horizontal headers, `section` is the column index
    /// - For vertical headers, `section` is the row index
    ///
    /// The default numbers sections: see [`default_header_data`].
    fn header_data(&self, section: usize, orientation: Orientation, role: ItemRole) -> ItemData {
        default_header_data(self, section, orientation, role)
    }

    // -------------------------------------------------------------------------
    // Convenience methods
    // -------------------------------------------------------------------------

    /// Returns the number of sections along `orientation`.
    fn section_count(&self, orientation: Orientation) -> usize {
        match orientation {
            Orientation::Horizontal => self.column_count(),
            Orientation::Vertical => self.row_count(),
        }
    }

    /// Returns the display text for a cell (convenience for `data(.., Display)`).
    fn display_text(&self, row: usize, column: usize) -> Option<String> {
        self.data(row, column, ItemRole::Display).into_string()
    }

    /// Returns the check state for a cell.
    fn check_state(&self, row: usize, column: usize) -> Option<CheckState> {
        self.data(row, column, ItemRole::CheckState)
            .as_check_state()
    }
}

/// Header data for models that store no headers along `orientation`.
///
/// The `Display` role of an in-range section is its 1-based number
/// (`ItemData::Int(section + 1)`); everything else is `ItemData::None`.
pub fn default_header_data<M: ItemModel + ?Sized>(
    model: &M,
    section: usize,
    orientation: Orientation,
    role: ItemRole,
) -> ItemData {
    if role == ItemRole::Display && section < model.section_count(orientation) {
        ItemData::Int(section as i64 + 1)
    } else {
        ItemData::None
    }
}

/// A cell position, `(row, column)`.
pub type CellPos = (usize, usize);

/// Collection of signals emitted by item models.
///
/// Views connect to these signals to stay synchronized with the model.
/// Ranges are inclusive: `(first, last)`.
///
/// # Signal Usage
///
/// - **Before modifications**: `rows_about_to_be_*` / `columns_about_to_be_*`
///   fire while the model still has its old shape
/// - **After modifications**: `rows_*` / `columns_*` fire once the new shape
///   is visible
/// - **Data changes**: `data_changed` and `header_data_changed`
/// - **Major restructuring**: `model_about_to_reset` / `model_reset`
pub struct ModelSignals {
    // -------------------------------------------------------------------------
    // Row modification signals
    // -------------------------------------------------------------------------
    /// Emitted just before rows are inserted.
    /// Args: (first row, last row)
    pub rows_about_to_be_inserted: Signal<(usize, usize)>,

    /// Emitted after rows have been inserted.
    /// Args: (first row, last row)
    pub rows_inserted: Signal<(usize, usize)>,

    /// Emitted just before rows are removed.
    /// Args: (first row, last row)
    pub rows_about_to_be_removed: Signal<(usize, usize)>,

    /// Emitted after rows have been removed.
    /// Args: (first row, last row)
    pub rows_removed: Signal<(usize, usize)>,

    // -------------------------------------------------------------------------
    // Column modification signals
    // -------------------------------------------------------------------------
    /// Emitted just before columns are inserted.
    pub columns_about_to_be_inserted: Signal<(usize, usize)>,

    /// Emitted after columns have been inserted.
    pub columns_inserted: Signal<(usize, usize)>,

    /// Emitted just before columns are removed.
    pub columns_about_to_be_removed: Signal<(usize, usize)>,

    /// Emitted after columns have been removed.
    pub columns_removed: Signal<(usize, usize)>,

    // -------------------------------------------------------------------------
    // Data change signals
    // -------------------------------------------------------------------------
    /// Emitted when data in existing cells changes.
    /// Args: (top-left, bottom-right, changed roles)
    pub data_changed: Signal<(CellPos, CellPos, Vec<ItemRole>)>,

    /// Emitted when header data changes.
    /// Args: (orientation, first section, last section)
    pub header_data_changed: Signal<(Orientation, usize, usize)>,

    // -------------------------------------------------------------------------
    // Reset signals
    // -------------------------------------------------------------------------
    /// Emitted before the model is reset.
    pub model_about_to_reset: Signal<()>,

    /// Emitted after the model has been reset.
    pub model_reset: Signal<()>,
}

impl Default for ModelSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelSignals {
    /// Creates a new set of model signals.
    pub fn new() -> Self {
        Self {
            rows_about_to_be_inserted: Signal::new(),
            rows_inserted: Signal::new(),
            rows_about_to_be_removed: Signal::new(),
            rows_removed: Signal::new(),
            columns_about_to_be_inserted: Signal::new(),
            columns_inserted: Signal::new(),
            columns_about_to_be_removed: Signal::new(),
            columns_removed: Signal::new(),
            data_changed: Signal::new(),
            header_data_changed: Signal::new(),
            model_about_to_reset: Signal::new(),
            model_reset: Signal::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Convenience methods for emitting signals
    // -------------------------------------------------------------------------

    /// Emits signals for row insertion.
    ///
    /// Calls the provided function between the about_to_be_inserted and inserted signals.
    pub fn emit_rows_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_inserted.emit((first, last));
        insert_fn();
        self.rows_inserted.emit((first, last));
    }

    /// Emits signals for row removal.
    ///
    /// Calls the provided function between the about_to_be_removed and removed signals.
    pub fn emit_rows_removed<F>(&self, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        self.rows_about_to_be_removed.emit((first, last));
        remove_fn();
        self.rows_removed.emit((first, last));
    }

    /// Emits signals for column insertion.
    pub fn emit_columns_inserted<F>(&self, first: usize, last: usize, insert_fn: F)
    where
        F: FnOnce(),
    {
        self.columns_about_to_be_inserted.emit((first, last));
        insert_fn();
        self.columns_inserted.emit((first, last));
    }

    /// Emits signals for column removal.
    pub fn emit_columns_removed<F>(&self, first: usize, last: usize, remove_fn: F)
    where
        F: FnOnce(),
    {
        self.columns_about_to_be_removed.emit((first, last));
        remove_fn();
        self.columns_removed.emit((first, last));
    }

    /// Emits the data_changed signal for a single cell.
    pub fn emit_data_changed_single(&self, cell: CellPos, roles: Vec<ItemRole>) {
        self.data_changed.emit((cell, cell, roles));
    }

    /// Emits signals for a model reset.
    ///
    /// Calls the provided function between the about_to_reset and reset signals.
    pub fn emit_reset<F>(&self, reset_fn: F)
    where
        F: FnOnce(),
    {
        self.model_about_to_reset.emit(());
        reset_fn();
        self.model_reset.emit(());
    }
}

static_assertions::assert_impl_all!(ModelSignals: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct Fixed {
        rows: usize,
        columns: usize,
        signals: ModelSignals,
    }

    impl ItemModel for Fixed {
        fn row_count(&self) -> usize {
            self.rows
        }

        fn column_count(&self) -> usize {
            self.columns
        }

        fn data(&self, _row: usize, _column: usize, _role: ItemRole) -> ItemData {
            ItemData::None
        }

        fn signals(&self) -> &ModelSignals {
            &self.signals
        }
    }

    #[test]
    fn test_model_signals_creation() {
        let signals = ModelSignals::new();
        assert_eq!(signals.rows_inserted.connection_count(), 0);
        assert_eq!(signals.data_changed.connection_count(), 0);
    }

    #[test]
    fn test_emit_rows_inserted() {
        let signals = ModelSignals::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let recv_about = received.clone();
        signals
            .rows_about_to_be_inserted
            .connect(move |&(first, last)| {
                recv_about.lock().push(("about", first, last));
            });

        let recv_done = received.clone();
        signals.rows_inserted.connect(move |&(first, last)| {
            recv_done.lock().push(("done", first, last));
        });

        let recv_fn = received.clone();
        signals.emit_rows_inserted(0, 2, || recv_fn.lock().push(("insert", 0, 2)));

        let events = received.lock();
        assert_eq!(
            *events,
            vec![("about", 0, 2), ("insert", 0, 2), ("done", 0, 2)]
        );
    }

    #[test]
    fn test_emit_reset() {
        let signals = ModelSignals::new();
        let counter = Arc::new(Mutex::new(0));

        let c1 = counter.clone();
        signals.model_about_to_reset.connect(move |_| {
            *c1.lock() += 1;
        });

        let c2 = counter.clone();
        signals.model_reset.connect(move |_| {
            *c2.lock() += 10;
        });

        signals.emit_reset(|| {});
        assert_eq!(*counter.lock(), 11);
    }

    #[test]
    fn test_default_header_numbers_sections() {
        let model = Fixed {
            rows: 2,
            columns: 3,
            signals: ModelSignals::new(),
        };

        assert_eq!(
            model.header_data(0, Orientation::Vertical, ItemRole::Display),
            ItemData::Int(1)
        );
        assert_eq!(
            model.header_data(2, Orientation::Horizontal, ItemRole::Display),
            ItemData::Int(3)
        );
        assert!(model
            .header_data(2, Orientation::Vertical, ItemRole::Display)
            .is_none());
        assert!(model
            .header_data(0, Orientation::Horizontal, ItemRole::ToolTip)
            .is_none());
    }
}
