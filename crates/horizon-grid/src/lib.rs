//! Horizon Grid - an editable, role-keyed table model for grid views.
//!
//! This is the main crate. It re-exports the signal plumbing from
//! `horizon-grid-core` and provides:
//!
//! - [`model`]: the [`CellStore`](model::CellStore) table, its cell and value
//!   types, storage backends, the [`ItemModel`](model::ItemModel) read
//!   interface and the selection model
//! - [`controller`]: selection-driven row editing and "add row" button
//!   placement
//! - [`config`]: controller presentation settings loaded from TOML or JSON
//!
//! # Example
//!
//! ```
//! use horizon_grid::prelude::*;
//!
//! let mut store = CellStore::new(["A", "B", "C"], HeaderAxis::Columns);
//! store.signals().rows_inserted.connect(|&(first, last)| {
//!     println!("inserted rows {first}..={last}");
//! });
//!
//! store.insert_rows(0, 2)?;
//! store.set_data(0, 1, ItemData::from("b0"), ItemRole::Edit)?;
//! assert_eq!(store.data(0, 1, ItemRole::Display).as_string(), Some("b0"));
//! # Ok::<(), TableError>(())
//! ```

pub use horizon_grid_core::{
    logging, signal, ConnectionGuard, ConnectionId, CoreError, PerfSpan, Signal, SignalError,
};

pub mod config;
pub mod controller;
mod error;
pub mod model;
pub mod prelude;

pub use error::{Axis, InvariantViolation, Result, TableError};
