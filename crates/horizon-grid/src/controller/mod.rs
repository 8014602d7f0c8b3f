//! Selection-driven editing of a [`CellStore`].
//!
//! [`TableController`] turns user intents ("insert a row above the
//! selection", "delete the selected row", "add a row at the end") into
//! structural mutations of the store it borrows, and keeps the geometry of
//! the "add row" button in step with the number of rows.
//!
//! # Example
//!
//! ```
//! use horizon_grid::controller::{EditAction, EditOutcome, HeadlessView, TableController};
//! use horizon_grid::model::{CellStore, HeaderAxis, ItemModel, SelectionFlags};
//!
//! let mut store = CellStore::new(["A", "B", "C"], HeaderAxis::Columns);
//! let mut view = HeadlessView::new(20.0, 30.0);
//!
//! let mut controller = TableController::new(&mut store);
//! controller.trigger(EditAction::AppendRow, &view)?;
//! controller.trigger(EditAction::AppendRow, &view)?;
//!
//! view.selection.select((1, 0), SelectionFlags::SELECT);
//! let outcome = controller.trigger(EditAction::InsertRowAbove, &view)?;
//! assert_eq!(outcome, EditOutcome::Inserted { row: 1 });
//!
//! let button = controller.add_row_button_geometry(&view);
//! assert_eq!(button.y, 30.0 + 3.0 * 20.0);
//! drop(controller);
//!
//! assert_eq!(store.row_count(), 3);
//! # Ok::<(), horizon_grid::TableError>(())
//! ```

mod view;

use std::sync::Arc;

use horizon_grid_core::ConnectionId;
use horizon_grid_core::logging::targets;
use parking_lot::Mutex;

use crate::config::ControllerConfig;
use crate::error::Result;
use crate::model::{CellGrid, CellStore, ItemModel, NestedGrid};

pub use view::{add_row_button_rect, HeadlessView, Rect, TableView};

/// An editing command offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditAction {
    /// Insert one row before the topmost selected row.
    InsertRowAbove,
    /// Insert one row after the topmost selected row.
    InsertRowBelow,
    /// Remove the topmost selected row.
    DeleteRow,
    /// Append one row after the last row, regardless of selection.
    AppendRow,
}

impl EditAction {
    /// The actions shown in the row context menu, in menu order.
    pub const CONTEXT_MENU: [EditAction; 3] = [
        EditAction::InsertRowAbove,
        EditAction::InsertRowBelow,
        EditAction::DeleteRow,
    ];

    /// The user-facing label of this action.
    pub fn label<'c>(&self, config: &'c ControllerConfig) -> &'c str {
        match self {
            EditAction::InsertRowAbove => &config.context_menu.insert_row_above,
            EditAction::InsertRowBelow => &config.context_menu.insert_row_below,
            EditAction::DeleteRow => &config.context_menu.delete_row,
            EditAction::AppendRow => &config.add_row_button.text,
        }
    }
}

/// What an edit command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// A row was inserted at `row`.
    Inserted { row: usize },
    /// The row at `row` was removed.
    Removed { row: usize },
    /// Nothing was selected, or the selection was outside the table.
    Skipped,
}

#[derive(Debug, Default)]
struct GeometryCache {
    stale: bool,
    button: Option<Rect>,
}

/// Applies [`EditAction`]s to a borrowed [`CellStore`].
///
/// While the controller lives it observes the store's `rows_inserted` and
/// `rows_removed` signals to know when the "add row" button has to move.
/// The observers are disconnected when the controller is dropped.
pub struct TableController<'a, G: CellGrid = NestedGrid> {
    store: &'a mut CellStore<G>,
    config: ControllerConfig,
    geometry: Arc<Mutex<GeometryCache>>,
    connections: [ConnectionId; 2],
}

impl<'a, G: CellGrid> TableController<'a, G> {
    /// Creates a controller with the default configuration.
    pub fn new(store: &'a mut CellStore<G>) -> Self {
        Self::with_config(store, ControllerConfig::default())
    }

    /// Creates a controller with the given configuration.
    pub fn with_config(store: &'a mut CellStore<G>, config: ControllerConfig) -> Self {
        let geometry = Arc::new(Mutex::new(GeometryCache {
            stale: true,
            button: None,
        }));

        let signals = store.signals();
        let on_inserted = {
            let geometry = geometry.clone();
            signals.rows_inserted.connect(move |&(first, last)| {
                tracing::trace!(target: targets::CONTROLLER, first, last, "rows inserted, relayout");
                geometry.lock().stale = true;
            })
        };
        let on_removed = {
            let geometry = geometry.clone();
            signals.rows_removed.connect(move |&(first, last)| {
                tracing::trace!(target: targets::CONTROLLER, first, last, "rows removed, relayout");
                geometry.lock().stale = true;
            })
        };

        Self {
            store,
            config,
            geometry,
            connections: [on_inserted, on_removed],
        }
    }

    /// The store being edited.
    pub fn store(&self) -> &CellStore<G> {
        &*self.store
    }

    /// The controller's configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Number of rows in the store.
    pub fn row_count(&self) -> usize {
        self.store.row_count()
    }

    /// Number of columns in the store.
    pub fn column_count(&self) -> usize {
        self.store.column_count()
    }

    /// The context menu entries with their labels, in menu order.
    pub fn context_menu(&self) -> Vec<(EditAction, &str)> {
        EditAction::CONTEXT_MENU
            .iter()
            .map(|action| (*action, action.label(&self.config)))
            .collect()
    }

    /// Runs `action` against the rows selected in `view`.
    pub fn trigger<V: TableView + ?Sized>(
        &mut self,
        action: EditAction,
        view: &V,
    ) -> Result<EditOutcome> {
        match action {
            EditAction::InsertRowAbove => self.insert_row(&view.selected_rows(), true),
            EditAction::InsertRowBelow => self.insert_row(&view.selected_rows(), false),
            EditAction::DeleteRow => self.delete_row(&view.selected_rows()),
            EditAction::AppendRow => self.append_row(),
        }
    }

    /// Inserts one row next to the topmost of `selected_rows`: before it if
    /// `above`, after it otherwise.
    pub fn insert_row(&mut self, selected_rows: &[usize], above: bool) -> Result<EditOutcome> {
        let Some(top) = self.top_row(selected_rows) else {
            return Ok(EditOutcome::Skipped);
        };

        let row = if above { top } else { top + 1 };
        self.store.insert_rows(row, 1)?;
        tracing::debug!(target: targets::CONTROLLER, row, above, "row inserted");
        Ok(EditOutcome::Inserted { row })
    }

    /// Removes the topmost of `selected_rows`.
    pub fn delete_row(&mut self, selected_rows: &[usize]) -> Result<EditOutcome> {
        let Some(row) = self.top_row(selected_rows) else {
            return Ok(EditOutcome::Skipped);
        };

        self.store.remove_rows(row, 1)?;
        tracing::debug!(target: targets::CONTROLLER, row, "row deleted");
        Ok(EditOutcome::Removed { row })
    }

    /// Appends one row after the last row.
    pub fn append_row(&mut self) -> Result<EditOutcome> {
        let row = self.store.row_count();
        self.store.append_row()?;
        tracing::debug!(target: targets::CONTROLLER, row, "row appended");
        Ok(EditOutcome::Inserted { row })
    }

    /// Returns `true` if the row count changed since the button geometry was
    /// last computed.
    pub fn needs_relayout(&self) -> bool {
        self.geometry.lock().stale
    }

    /// Forces the next geometry query to recompute, e.g. after row heights
    /// changed in the view.
    pub fn invalidate_geometry(&self) {
        self.geometry.lock().stale = true;
    }

    /// Where the "add row" button goes: below the last row, at the vertical
    /// header's x, sized from the configuration.
    ///
    /// Recomputed only after rows were inserted or removed, or after
    /// [`invalidate_geometry`](Self::invalidate_geometry).
    pub fn add_row_button_geometry<V: TableView + ?Sized>(&self, view: &V) -> Rect {
        let mut cache = self.geometry.lock();
        if let (Some(rect), false) = (cache.button, cache.stale) {
            return rect;
        }

        let rect = add_row_button_rect(view, self.store.row_count(), &self.config.add_row_button);
        tracing::trace!(target: targets::CONTROLLER, ?rect, "add row button placed");
        cache.button = Some(rect);
        cache.stale = false;
        rect
    }

    fn top_row(&self, selected_rows: &[usize]) -> Option<usize> {
        let top = selected_rows.iter().copied().min();
        match top {
            Some(row) if row < self.store.row_count() => Some(row),
            _ => {
                tracing::trace!(target: targets::CONTROLLER, ?top, "no usable selection, skipping");
                None
            }
        }
    }
}

impl<G: CellGrid> Drop for TableController<'_, G> {
    fn drop(&mut self) {
        let signals = self.store.signals();
        let [on_inserted, on_removed] = self.connections;
        signals.rows_inserted.disconnect(on_inserted);
        signals.rows_removed.disconnect(on_removed);
    }
}
