//! Role-keyed storage for a single table cell.

use std::collections::HashMap;

use super::role::{ItemData, ItemRole};

/// The values stored for one cell, keyed by role.
///
/// A cell has no fixed schema: any role may be set, and a role that was
/// never set reads as [`ItemData::None`]. Header entries use the same type.
///
/// Writing the `Edit` role also writes `Display`, so the edit value is what
/// the cell shows until `Display` is set on its own.
///
/// # Example
///
/// ```
/// use horizon_grid::model::{Cell, ItemData, ItemRole};
///
/// let mut cell = Cell::new();
/// cell.set(ItemRole::Edit, ItemData::from(42));
/// assert_eq!(cell.get(ItemRole::Display).as_int(), Some(42));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    values: HashMap<ItemRole, ItemData>,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a cell whose `Display` role holds `text`.
    pub fn with_display(text: impl Into<String>) -> Self {
        let mut cell = Self::new();
        cell.set(ItemRole::Display, ItemData::String(text.into()));
        cell
    }

    /// Returns the value stored for `role`, or `ItemData::None`.
    pub fn get(&self, role: ItemRole) -> ItemData {
        self.values.get(&role).cloned().unwrap_or_default()
    }

    /// Returns a reference to the value stored for `role`, if any.
    pub fn get_ref(&self, role: ItemRole) -> Option<&ItemData> {
        self.values.get(&role)
    }

    /// Stores `value` under `role` and returns the roles that were written.
    ///
    /// `ItemData::None` clears the role.
    pub fn set(&mut self, role: ItemRole, value: ItemData) -> Vec<ItemRole> {
        if role == ItemRole::Edit {
            self.store(ItemRole::Display, value.clone());
            self.store(ItemRole::Edit, value);
            vec![ItemRole::Edit, ItemRole::Display]
        } else {
            self.store(role, value);
            vec![role]
        }
    }

    /// Returns `true` if a value is stored for `role`.
    pub fn contains(&self, role: ItemRole) -> bool {
        self.values.contains_key(&role)
    }

    /// Iterates over the roles that hold a value, in no particular order.
    pub fn roles(&self) -> impl Iterator<Item = ItemRole> + '_ {
        self.values.keys().copied()
    }

    /// Returns the number of roles holding a value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no role holds a value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Removes every stored value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    fn store(&mut self, role: ItemRole, value: ItemData) {
        if value.is_none() {
            self.values.remove(&role);
        } else {
            self.values.insert(role, value);
        }
    }
}
