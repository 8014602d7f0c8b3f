//! Error types for the table model.

use std::fmt;

use crate::model::Orientation;

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// One of the two structural axes of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The row axis (vertical extent).
    Row,
    /// The column axis (horizontal extent).
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// A structural invariant of the table that does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    /// The header set has no entries.
    #[error("header set is empty")]
    EmptyHeaders,

    /// A row's length differs from the first row's.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The header count does not match the extent of the header axis.
    #[error("{headers} headers for {len} {axis}s")]
    HeaderCountMismatch {
        axis: Axis,
        headers: usize,
        len: usize,
    },
}

/// Errors returned by table reads and mutations.
///
/// A failed operation never leaves the table partially modified, and no
/// change notification is emitted for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A single index is outside the addressable range.
    #[error("{axis} index {index} out of range (len {len})")]
    InvalidIndex { axis: Axis, index: usize, len: usize },

    /// A `(first, count)` range is empty or does not fit the axis.
    #[error("invalid {axis} range: {count} starting at {first} (len {len})")]
    InvalidRange {
        axis: Axis,
        first: usize,
        count: usize,
        len: usize,
    },

    /// Header data was written on the orientation that has no stored headers.
    #[error("{orientation:?} is not the header axis")]
    NotHeaderAxis { orientation: Orientation },

    /// The table's structural invariants are violated.
    #[error("inconsistent table state: {0}")]
    InconsistentState(#[from] InvariantViolation),
}

impl TableError {
    /// Returns `true` if the error reports a broken invariant rather than a
    /// bad argument.
    pub fn is_inconsistent_state(&self) -> bool {
        matches!(self, TableError::InconsistentState(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TableError::InvalidIndex {
            axis: Axis::Row,
            index: 7,
            len: 3,
        };
        assert_eq!(err.to_string(), "row index 7 out of range (len 3)");

        let err = TableError::InvalidRange {
            axis: Axis::Column,
            first: 2,
            count: 0,
            len: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid column range: 0 starting at 2 (len 3)"
        );
    }

    #[test]
    fn test_invariant_violation_converts() {
        let err: TableError = InvariantViolation::EmptyHeaders.into();
        assert!(err.is_inconsistent_state());
        assert_eq!(
            err.to_string(),
            "inconsistent table state: header set is empty"
        );
    }
}
