//! The view seam consumed by the editing controller.

use std::collections::BTreeMap;

use crate::config::AddRowButtonConfig;
use crate::model::SelectionModel;

/// An axis-aligned rectangle in view coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Creates a rectangle from its origin and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` if the point lies inside the rectangle.
    ///
    /// The left and top edges are inside; the right and bottom edges are not.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// What the controller needs from the view presenting the table.
///
/// Implement this for the widget that shows a [`CellStore`](crate::model::CellStore).
/// [`HeadlessView`] is a ready-made implementation with fixed metrics.
pub trait TableView {
    /// The rows that have at least one selected cell, in any order.
    fn selected_rows(&self) -> Vec<usize>;

    /// Height of `row` in pixels.
    fn row_height(&self, row: usize) -> f32;

    /// Height of the horizontal (column) header.
    fn horizontal_header_height(&self) -> f32;

    /// X position of the vertical (row) header.
    fn vertical_header_x(&self) -> f32;
}

/// Places the "add row" button directly below the last row, aligned with
/// the vertical header.
pub fn add_row_button_rect<V: TableView + ?Sized>(
    view: &V,
    row_count: usize,
    button: &AddRowButtonConfig,
) -> Rect {
    let rows_height: f32 = (0..row_count).map(|row| view.row_height(row)).sum();
    Rect::new(
        view.vertical_header_x(),
        view.horizontal_header_height() + rows_height,
        button.width,
        button.height,
    )
}

/// A [`TableView`] with fixed metrics and its own [`SelectionModel`].
///
/// Useful for driving the controller without a rendering backend.
#[derive(Default)]
pub struct HeadlessView {
    /// Selection state read by the controller.
    pub selection: SelectionModel,
    /// Height used for rows without an explicit height.
    pub default_row_height: f32,
    /// Height of the horizontal header.
    pub header_height: f32,
    /// X position of the vertical header.
    pub header_x: f32,
    row_heights: BTreeMap<usize, f32>,
}

impl HeadlessView {
    /// Creates a view with uniform rows of `row_height` under a header of
    /// `header_height`.
    pub fn new(row_height: f32, header_height: f32) -> Self {
        Self {
            default_row_height: row_height,
            header_height,
            ..Self::default()
        }
    }

    /// Overrides the height of a single row.
    pub fn set_row_height(&mut self, row: usize, height: f32) {
        self.row_heights.insert(row, height);
    }
}

impl TableView for HeadlessView {
    fn selected_rows(&self) -> Vec<usize> {
        self.selection.selected_rows()
    }

    fn row_height(&self, row: usize) -> f32 {
        self.row_heights
            .get(&row)
            .copied()
            .unwrap_or(self.default_row_height)
    }

    fn horizontal_header_height(&self) -> f32 {
        self.header_height
    }

    fn vertical_header_x(&self) -> f32 {
        self.header_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 20.0, 50.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(59.0, 69.0));
        assert!(!rect.contains(60.0, 20.0));
        assert!(!rect.contains(9.9, 30.0));
    }

    #[test]
    fn test_button_below_last_row() {
        let mut view = HeadlessView::new(20.0, 30.0);
        view.header_x = 4.0;
        view.set_row_height(1, 40.0);

        let rect = add_row_button_rect(&view, 3, &AddRowButtonConfig::default());
        assert_eq!(rect, Rect::new(4.0, 30.0 + 20.0 + 40.0 + 20.0, 50.0, 50.0));

        let rect = add_row_button_rect(&view, 0, &AddRowButtonConfig::default());
        assert_eq!(rect.y, 30.0);
    }
}
