//! Editable table model with role-keyed cells and orientation-aware headers.
//!
//! [`CellStore`] owns a dense grid of [`Cell`]s plus one header cell per
//! position along its header axis. Every structural mutation is staged on a
//! copy, re-verified, and only then committed, so a failed mutation leaves the
//! store exactly as it was and emits nothing.
//!
//! # Invariants
//!
//! 1. The header set is non-empty.
//! 2. Every row has the same length.
//! 3. Columns header axis: the row length equals the header count.
//! 4. Rows header axis: the row count equals the header count.
//!
//! # Example
//!
//! ```
//! use horizon_grid::model::{CellStore, HeaderAxis, ItemData, ItemModel, ItemRole};
//!
//! let mut store = CellStore::new(["Name", "Qty"], HeaderAxis::Columns);
//! store.insert_rows(0, 2)?;
//! store.set_data(1, 0, ItemData::from("bolts"), ItemRole::Edit)?;
//!
//! assert_eq!(store.row_count(), 2);
//! assert_eq!(store.display_text(1, 0).as_deref(), Some("bolts"));
//! # Ok::<(), horizon_grid::TableError>(())
//! ```

use horizon_grid_core::PerfSpan;
use horizon_grid_core::logging::targets;

use super::cell::Cell;
use super::grid::{CellGrid, NestedGrid};
use super::role::{ItemData, ItemRole};
use super::traits::{default_header_data, ItemModel, ModelSignals, Orientation};
use crate::error::{Axis, InvariantViolation, Result, TableError};

/// Which axis carries the stored headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeaderAxis {
    /// One header per column (horizontal header). The row count is free.
    #[default]
    Columns,
    /// One header per row (vertical header). The column count is free.
    Rows,
}

impl HeaderAxis {
    /// Maps the "is horizontal" flag to a header axis.
    pub fn from_horizontal(is_horizontal: bool) -> Self {
        if is_horizontal {
            HeaderAxis::Columns
        } else {
            HeaderAxis::Rows
        }
    }

    /// The structural axis the headers run along.
    pub fn axis(&self) -> Axis {
        match self {
            HeaderAxis::Columns => Axis::Column,
            HeaderAxis::Rows => Axis::Row,
        }
    }

    /// The header orientation whose sections are stored.
    pub fn orientation(&self) -> Orientation {
        match self {
            HeaderAxis::Columns => Orientation::Horizontal,
            HeaderAxis::Rows => Orientation::Vertical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    InsertRows,
    RemoveRows,
    InsertColumns,
    RemoveColumns,
}

impl Change {
    fn axis(self) -> Axis {
        match self {
            Change::InsertRows | Change::RemoveRows => Axis::Row,
            Change::InsertColumns | Change::RemoveColumns => Axis::Column,
        }
    }

    fn is_insert(self) -> bool {
        matches!(self, Change::InsertRows | Change::InsertColumns)
    }

    fn name(self) -> &'static str {
        match self {
            Change::InsertRows => "insert_rows",
            Change::RemoveRows => "remove_rows",
            Change::InsertColumns => "insert_columns",
            Change::RemoveColumns => "remove_columns",
        }
    }
}

/// Headers and body, the unit that is staged and swapped.
#[derive(Debug, Clone)]
struct Layout<G> {
    headers: Vec<Cell>,
    grid: G,
}

impl<G: CellGrid> Layout<G> {
    fn check(&self, header_axis: HeaderAxis) -> std::result::Result<(), InvariantViolation> {
        if self.headers.is_empty() {
            return Err(InvariantViolation::EmptyHeaders);
        }

        let rows = self.grid.row_count();
        let width = self.grid.row_len(0).unwrap_or(0);
        for row in 1..rows {
            let len = self.grid.row_len(row).unwrap_or(0);
            if len != width {
                return Err(InvariantViolation::RaggedRow {
                    row,
                    len,
                    expected: width,
                });
            }
        }

        let headers = self.headers.len();
        match header_axis {
            HeaderAxis::Columns if rows > 0 && width != headers => {
                Err(InvariantViolation::HeaderCountMismatch {
                    axis: Axis::Column,
                    headers,
                    len: width,
                })
            }
            HeaderAxis::Rows if rows != headers => Err(InvariantViolation::HeaderCountMismatch {
                axis: Axis::Row,
                headers,
                len: rows,
            }),
            _ => Ok(()),
        }
    }

    fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    fn column_count(&self, header_axis: HeaderAxis) -> usize {
        match header_axis {
            HeaderAxis::Columns => self.headers.len(),
            HeaderAxis::Rows => self.grid.row_len(0).unwrap_or(0),
        }
    }

    fn resize_header_axis(&mut self, header_axis: HeaderAxis, headers: Vec<Cell>) {
        let old = self.headers.len();
        let new = headers.len();
        self.headers = headers;
        match header_axis {
            HeaderAxis::Columns if new > old => self.grid.insert_columns(old, new - old),
            HeaderAxis::Columns => self.grid.remove_columns(new, old - new),
            HeaderAxis::Rows if new > old => {
                let width = self.grid.row_len(0).unwrap_or(0);
                self.grid.insert_rows(old, new - old, width);
            }
            HeaderAxis::Rows => self.grid.remove_rows(new, old - new),
        }
    }
}

/// A mutable, dense 2-D table of role-keyed cells.
///
/// The store is generic over its body layout; [`NestedGrid`] is the default
/// and [`FlatGrid`](super::FlatGrid) is available through
/// [`with_backend`](CellStore::with_backend). Reads go through the
/// [`ItemModel`] trait; mutations take `&mut self` and return
/// [`TableError`] on failure.
///
/// A store built from an empty label list violates its invariants: reads
/// report an empty table and every mutation fails with
/// [`TableError::InconsistentState`].
pub struct CellStore<G: CellGrid = NestedGrid> {
    layout: Layout<G>,
    header_axis: HeaderAxis,
    health: std::result::Result<(), InvariantViolation>,
    signals: ModelSignals,
}

impl CellStore<NestedGrid> {
    /// Creates a store with one header per label along `header_axis`.
    ///
    /// Each label becomes the `Display` role of its header cell. A columns
    /// store starts with no rows; a rows store starts with one empty row per
    /// label and no columns.
    pub fn new<I, S>(labels: I, header_axis: HeaderAxis) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_backend(labels, header_axis)
    }

    /// Creates a store from the "is horizontal" flag: `true` puts the
    /// headers on the columns.
    pub fn with_orientation_flag<I, S>(labels: I, is_horizontal: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(labels, HeaderAxis::from_horizontal(is_horizontal))
    }
}

impl<G: CellGrid> CellStore<G> {
    /// Creates a store backed by the grid layout `G`.
    pub fn with_backend<I, S>(labels: I, header_axis: HeaderAxis) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<Cell> = labels.into_iter().map(Cell::with_display).collect();
        let mut grid = G::default();
        if header_axis == HeaderAxis::Rows {
            grid.insert_rows(0, headers.len(), 0);
        }

        let layout = Layout { headers, grid };
        let health = layout.check(header_axis);
        if let Err(violation) = health {
            tracing::debug!(target: targets::MODEL, %violation, "table created in inconsistent state");
        }

        Self {
            layout,
            header_axis,
            health,
            signals: ModelSignals::new(),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The axis that carries the stored headers.
    pub fn header_axis(&self) -> HeaderAxis {
        self.header_axis
    }

    /// Returns `true` if every structural invariant holds.
    pub fn is_consistent(&self) -> bool {
        self.health.is_ok()
    }

    /// Re-verifies every structural invariant.
    pub fn verify(&self) -> Result<()> {
        self.layout
            .check(self.header_axis)
            .map_err(TableError::InconsistentState)
    }

    /// The cell at `(row, column)`, if it exists.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        if !self.is_consistent() {
            return None;
        }
        self.layout.grid.cell(row, column)
    }

    /// The header cell at `section` along the header axis.
    pub fn header(&self, section: usize) -> Option<&Cell> {
        if !self.is_consistent() {
            return None;
        }
        self.layout.headers.get(section)
    }

    /// The `Display` text of every header, in order.
    ///
    /// Headers without display text yield an empty string.
    pub fn header_labels(&self) -> Vec<String> {
        self.layout
            .headers
            .iter()
            .map(|cell| cell.get(ItemRole::Display).into_string().unwrap_or_default())
            .collect()
    }

    /// Returns the number of sections of the given axis.
    pub fn len(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.row_count(),
            Axis::Column => self.column_count(),
        }
    }

    /// Returns `true` if the table has no body cells.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count() == 0
    }

    // =========================================================================
    // Structural mutations
    // =========================================================================

    /// Inserts `count` empty rows before `row`. `row == row_count()` appends.
    pub fn insert_rows(&mut self, row: usize, count: usize) -> Result<()> {
        self.apply(Change::InsertRows, row, count)
    }

    /// Removes `count` rows starting at `row`, with all their cell values.
    pub fn remove_rows(&mut self, row: usize, count: usize) -> Result<()> {
        self.apply(Change::RemoveRows, row, count)
    }

    /// Inserts `count` empty columns before `column`.
    pub fn insert_columns(&mut self, column: usize, count: usize) -> Result<()> {
        self.apply(Change::InsertColumns, column, count)
    }

    /// Removes `count` columns starting at `column`.
    pub fn remove_columns(&mut self, column: usize, count: usize) -> Result<()> {
        self.apply(Change::RemoveColumns, column, count)
    }

    /// Inserts one empty row after the last row.
    pub fn append_row(&mut self) -> Result<()> {
        self.insert_rows(self.row_count(), 1)
    }

    /// Drops every body value while keeping the headers.
    ///
    /// A columns store loses all of its rows; a rows store keeps its rows and
    /// loses all of its columns. Bracketed by the model reset signals.
    pub fn clear_rows(&mut self) -> Result<()> {
        let _span = PerfSpan::new("CellStore::clear_rows");
        self.verify().inspect_err(|err| self.log_rejected("clear_rows", err))?;

        let mut staged = self.layout.clone();
        match self.header_axis {
            HeaderAxis::Columns => staged.grid = G::default(),
            HeaderAxis::Rows => {
                let width = staged.column_count(self.header_axis);
                staged.grid.remove_columns(0, width);
            }
        }
        self.commit_reset(staged, "clear_rows")
    }

    /// Replaces the headers with new labels, growing or shrinking the header
    /// axis to match. Cells in surviving positions keep their values.
    ///
    /// Bracketed by the model reset signals. An empty label list is rejected.
    pub fn set_header_labels<I, S>(&mut self, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let _span = PerfSpan::new("CellStore::set_header_labels");
        self.verify()
            .inspect_err(|err| self.log_rejected("set_header_labels", err))?;

        let headers = labels.into_iter().map(Cell::with_display).collect();
        let mut staged = self.layout.clone();
        staged.resize_header_axis(self.header_axis, headers);
        self.commit_reset(staged, "set_header_labels")
    }

    // =========================================================================
    // Value mutations
    // =========================================================================

    /// Writes `value` under `role` for the cell at `(row, column)`.
    ///
    /// Writing `Edit` also writes `Display`; `ItemData::None` clears the role.
    /// Emits `data_changed` with every role written.
    pub fn set_data(
        &mut self,
        row: usize,
        column: usize,
        value: ItemData,
        role: ItemRole,
    ) -> Result<()> {
        if let Err(violation) = self.health {
            return Err(TableError::InconsistentState(violation));
        }
        let rows = self.row_count();
        check_index(Axis::Row, row, rows)?;
        check_index(Axis::Column, column, self.column_count())?;

        let Some(cell) = self.layout.grid.cell_mut(row, column) else {
            return Err(TableError::InvalidIndex {
                axis: Axis::Row,
                index: row,
                len: rows,
            });
        };
        let roles = cell.set(role, value);

        tracing::trace!(target: targets::MODEL, row, column, ?roles, "cell data set");
        self.signals.emit_data_changed_single((row, column), roles);
        Ok(())
    }

    /// Writes `value` under `role` for the header at `section`.
    ///
    /// Only the header axis stores header data; the other orientation fails
    /// with [`TableError::NotHeaderAxis`]. Emits `header_data_changed`.
    pub fn set_header_data(
        &mut self,
        section: usize,
        orientation: Orientation,
        value: ItemData,
        role: ItemRole,
    ) -> Result<()> {
        if let Err(violation) = self.health {
            return Err(TableError::InconsistentState(violation));
        }
        if orientation != self.header_axis.orientation() {
            return Err(TableError::NotHeaderAxis { orientation });
        }

        let len = self.layout.headers.len();
        let axis = self.header_axis.axis();
        let header = self
            .layout
            .headers
            .get_mut(section)
            .ok_or(TableError::InvalidIndex {
                axis,
                index: section,
                len,
            })?;
        let roles = header.set(role, value);

        tracing::trace!(target: targets::MODEL, section, ?roles, "header data set");
        self.signals
            .header_data_changed
            .emit((orientation, section, section));
        Ok(())
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn apply(&mut self, change: Change, at: usize, count: usize) -> Result<()> {
        let _span = PerfSpan::new(change.name());
        match self.stage(change, at, count) {
            Ok(staged) => {
                let last = at + count - 1;
                self.commit(change, staged, at, last);
                tracing::debug!(
                    target: targets::MODEL,
                    op = change.name(),
                    first = at,
                    last,
                    rows = self.row_count(),
                    columns = self.column_count(),
                    "structural change committed"
                );
                Ok(())
            }
            Err(err) => {
                self.log_rejected(change.name(), &err);
                Err(err)
            }
        }
    }

    /// Builds and verifies the post-mutation layout without touching `self`.
    fn stage(&self, change: Change, at: usize, count: usize) -> Result<Layout<G>> {
        self.verify()?;

        let axis = change.axis();
        let len = self.len(axis);
        check_range(axis, change.is_insert(), at, count, len)?;

        let mut staged = self.layout.clone();
        let width = self.column_count();
        match change {
            Change::InsertRows => staged.grid.insert_rows(at, count, width),
            Change::RemoveRows => staged.grid.remove_rows(at, count),
            Change::InsertColumns => staged.grid.insert_columns(at, count),
            Change::RemoveColumns => staged.grid.remove_columns(at, count),
        }
        if axis == self.header_axis.axis() {
            if change.is_insert() {
                let fresh = std::iter::repeat_with(Cell::new).take(count);
                staged.headers.splice(at..at, fresh);
            } else {
                staged.headers.drain(at..at + count);
            }
        }

        staged.check(self.header_axis)?;
        Ok(staged)
    }

    fn commit(&mut self, change: Change, staged: Layout<G>, first: usize, last: usize) {
        let layout = &mut self.layout;
        let swap = move || *layout = staged;
        match change {
            Change::InsertRows => self.signals.emit_rows_inserted(first, last, swap),
            Change::RemoveRows => self.signals.emit_rows_removed(first, last, swap),
            Change::InsertColumns => self.signals.emit_columns_inserted(first, last, swap),
            Change::RemoveColumns => self.signals.emit_columns_removed(first, last, swap),
        }
        self.health = Ok(());
    }

    fn commit_reset(&mut self, staged: Layout<G>, op: &'static str) -> Result<()> {
        if let Err(violation) = staged.check(self.header_axis) {
            let err = TableError::InconsistentState(violation);
            self.log_rejected(op, &err);
            return Err(err);
        }

        let layout = &mut self.layout;
        self.signals.emit_reset(move || *layout = staged);
        self.health = Ok(());

        tracing::debug!(
            target: targets::MODEL,
            op,
            rows = self.row_count(),
            columns = self.column_count(),
            "model reset"
        );
        Ok(())
    }

    fn log_rejected(&self, op: &'static str, err: &TableError) {
        tracing::debug!(target: targets::MODEL, op, error = %err, "mutation rejected");
    }
}

impl<G: CellGrid> ItemModel for CellStore<G> {
    fn row_count(&self) -> usize {
        if self.is_consistent() {
            self.layout.row_count()
        } else {
            0
        }
    }

    fn column_count(&self) -> usize {
        if self.is_consistent() {
            self.layout.column_count(self.header_axis)
        } else {
            0
        }
    }

    fn data(&self, row: usize, column: usize, role: ItemRole) -> ItemData {
        self.cell(row, column)
            .map(|cell| cell.get(role))
            .unwrap_or_default()
    }

    fn signals(&self) -> &ModelSignals {
        &self.signals
    }

    fn header_data(&self, section: usize, orientation: Orientation, role: ItemRole) -> ItemData {
        if orientation == self.header_axis.orientation() {
            self.header(section)
                .map(|cell| cell.get(role))
                .unwrap_or_default()
        } else {
            default_header_data(self, section, orientation, role)
        }
    }
}

impl<G: CellGrid> std::fmt::Debug for CellStore<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellStore")
            .field("header_axis", &self.header_axis)
            .field("headers", &self.header_labels())
            .field("rows", &self.row_count())
            .field("columns", &self.column_count())
            .field("health", &self.health)
            .finish()
    }
}

static_assertions::assert_impl_all!(CellStore: Send, Sync);

fn check_index(axis: Axis, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(TableError::InvalidIndex { axis, index, len })
    }
}

/// An insertion point may equal `len`; a removal must end within `len`.
fn check_range(axis: Axis, insert: bool, first: usize, count: usize, len: usize) -> Result<()> {
    let fits = first
        .checked_add(count)
        .is_some_and(|end| if insert { first <= len } else { end <= len });
    if count == 0 || !fits {
        return Err(TableError::InvalidRange {
            axis,
            first,
            count,
            len,
        });
    }
    Ok(())
}
