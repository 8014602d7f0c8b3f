//! Prelude module for Horizon Grid.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use horizon_grid::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signal/slot system (`Signal`, `ConnectionId`)
//! - The table model (`CellStore`, `ItemModel`, `ItemRole`, `ItemData`)
//! - Selection and editing (`SelectionModel`, `TableController`, `TableView`)
//! - Errors and configuration

// ============================================================================
// Signal/Slot System
// ============================================================================

pub use crate::{ConnectionId, Signal};

// ============================================================================
// Model
// ============================================================================

pub use crate::model::{
    Cell, CellGrid, CellStore, CheckState, FlatGrid, HeaderAxis, ItemData, ItemModel, ItemRole,
    ModelSignals, NestedGrid, Orientation,
};

// ============================================================================
// Selection and Editing
// ============================================================================

pub use crate::controller::{
    EditAction, EditOutcome, HeadlessView, Rect, TableController, TableView,
};
pub use crate::model::{SelectionFlags, SelectionMode, SelectionModel};

// ============================================================================
// Errors and Configuration
// ============================================================================

pub use crate::config::{ConfigError, ControllerConfig};
pub use crate::{Axis, InvariantViolation, TableError};
