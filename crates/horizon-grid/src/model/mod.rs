//! Model/View architecture for Horizon Grid.
//!
//! This module provides the table data model and the types views use to
//! read it and follow its changes.
//!
//! # Core Types
//!
//! - `ItemRole`: Specifies what type of data to access
//! - `ItemData`: Tagged container for a single role value
//! - `Cell`: The role-keyed values of one cell or header
//! - `ItemModel`: The read interface views use
//! - `ModelSignals`: Signals for change notifications
//!
//! # Model Implementations
//!
//! - `CellStore`: Editable dense table with headers along one axis
//! - `NestedGrid` / `FlatGrid`: Interchangeable body layouts for `CellStore`
//! - `SelectionModel`: Selected cells and the current cell of a view
//!
//! # Example
//!
//! ```
//! use horizon_grid::model::{CellStore, HeaderAxis, ItemModel};
//!
//! let mut store = CellStore::new(["A", "B", "C"], HeaderAxis::Columns);
//!
//! // Connect to change notifications
//! store.signals().rows_inserted.connect(|(first, last)| {
//!     println!("rows {first}..={last} inserted");
//! });
//!
//! store.append_row()?;
//! assert_eq!(store.row_count(), 1);
//! # Ok::<(), horizon_grid::TableError>(())
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  CellStore  │────>│   Signals   │────>│    View     │
//! │ (ItemModel) │     │             │     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                       │
//!       │         ┌─────────────┐               │
//!       └────────>│ (row, col)  │<──────────────┘
//!                 │  ItemRole   │
//!                 │  ItemData   │
//!                 └─────────────┘
//! ```
//!
//! Views query models using `(row, column)` and `ItemRole` to get `ItemData`.
//! Models emit signals when data changes, which views listen to for updates.

mod cell;
pub mod grid;
mod role;
pub mod selection;
mod table_model;
mod traits;

pub use cell::Cell;
pub use grid::{linear_index, CellGrid, FlatGrid, NestedGrid};
pub use role::{CheckState, ItemData, ItemRole};
pub use selection::{SelectionFlags, SelectionMode, SelectionModel};
pub use table_model::{CellStore, HeaderAxis};
pub use traits::{default_header_data, CellPos, ItemModel, ModelSignals, Orientation};
