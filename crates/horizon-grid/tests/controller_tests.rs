//! Integration tests for selection-driven editing and controller configuration.

use std::io::Write;

use horizon_grid::prelude::*;

fn labeled_store(rows: usize) -> CellStore {
    let mut store = CellStore::new(["Name", "Qty"], HeaderAxis::Columns);
    if rows > 0 {
        store.insert_rows(0, rows).unwrap();
    }
    for row in 0..rows {
        store
            .set_data(row, 0, format!("row {row}").into(), ItemRole::Edit)
            .unwrap();
    }
    store
}

fn multi_select(rows: &[usize]) -> HeadlessView {
    let mut view = HeadlessView::new(24.0, 32.0);
    view.selection.set_selection_mode(SelectionMode::MultiSelection);
    for &row in rows {
        view.selection.select((row, 1), SelectionFlags::SELECT);
    }
    view
}

#[test]
fn test_insert_before_topmost_selected_row() {
    let mut store = labeled_store(6);
    let view = multi_select(&[5, 3]);

    let mut controller = TableController::new(&mut store);
    let outcome = controller.trigger(EditAction::InsertRowAbove, &view).unwrap();
    assert_eq!(outcome, EditOutcome::Inserted { row: 3 });
    drop(controller);

    assert_eq!(store.row_count(), 7);
    assert!(store.cell(3, 0).is_some_and(|cell| cell.is_empty()));
    assert_eq!(store.display_text(4, 0).as_deref(), Some("row 3"));
    assert_eq!(store.display_text(6, 0).as_deref(), Some("row 5"));
}

#[test]
fn test_insert_below_and_delete() {
    let mut store = labeled_store(6);
    let view = multi_select(&[5, 3]);

    let mut controller = TableController::new(&mut store);
    assert_eq!(
        controller.trigger(EditAction::InsertRowBelow, &view).unwrap(),
        EditOutcome::Inserted { row: 4 }
    );
    assert_eq!(
        controller.trigger(EditAction::DeleteRow, &view).unwrap(),
        EditOutcome::Removed { row: 3 }
    );
    drop(controller);

    assert_eq!(store.row_count(), 6);
    assert!(store.cell(3, 0).is_some_and(|cell| cell.is_empty()));
    assert_eq!(store.display_text(4, 0).as_deref(), Some("row 4"));
}

#[test]
fn test_selection_outside_table_is_a_no_op() {
    let mut store = labeled_store(2);
    let events = std::sync::Arc::new(parking_lot::Mutex::new(0));
    let events_clone = events.clone();
    store
        .signals()
        .rows_about_to_be_inserted
        .connect(move |_| *events_clone.lock() += 1);

    let mut controller = TableController::new(&mut store);
    for action in EditAction::CONTEXT_MENU {
        assert_eq!(
            controller.trigger(action, &multi_select(&[])).unwrap(),
            EditOutcome::Skipped
        );
        assert_eq!(
            controller.trigger(action, &multi_select(&[2, 9])).unwrap(),
            EditOutcome::Skipped
        );
    }
    drop(controller);

    assert_eq!(store.row_count(), 2);
    assert_eq!(*events.lock(), 0);
}

#[test]
fn test_append_ignores_selection() {
    let mut store = labeled_store(3);
    let view = multi_select(&[0]);

    let mut controller = TableController::new(&mut store);
    assert_eq!(
        controller.trigger(EditAction::AppendRow, &view).unwrap(),
        EditOutcome::Inserted { row: 3 }
    );
    assert_eq!(controller.row_count(), 4);
    assert_eq!(controller.column_count(), 2);
}

#[test]
fn test_append_on_empty_table() {
    let mut store = CellStore::new(["A"], HeaderAxis::Columns);
    let mut controller = TableController::new(&mut store);
    assert_eq!(
        controller.append_row().unwrap(),
        EditOutcome::Inserted { row: 0 }
    );
}

#[test]
fn test_delete_last_header_row_fails() {
    let mut store = CellStore::new(["only"], HeaderAxis::Rows);
    let mut controller = TableController::new(&mut store);

    let err = controller.delete_row(&[0]).unwrap_err();
    assert!(err.is_inconsistent_state());
    assert_eq!(controller.row_count(), 1);
}

#[test]
fn test_button_follows_row_count() {
    let mut store = labeled_store(2);
    let mut view = multi_select(&[1]);
    view.header_x = 6.0;
    view.set_row_height(0, 40.0);

    let mut controller = TableController::new(&mut store);
    assert_eq!(
        controller.add_row_button_geometry(&view),
        Rect::new(6.0, 32.0 + 40.0 + 24.0, 50.0, 50.0)
    );

    controller.trigger(EditAction::DeleteRow, &view).unwrap();
    assert!(controller.needs_relayout());
    assert_eq!(controller.add_row_button_geometry(&view).y, 32.0 + 40.0);

    // Height changes in the view alone do not move the cached button.
    view.set_row_height(0, 10.0);
    assert_eq!(controller.add_row_button_geometry(&view).y, 72.0);
    controller.invalidate_geometry();
    assert_eq!(controller.add_row_button_geometry(&view).y, 42.0);
}

#[test]
fn test_controller_releases_store_observers() {
    let mut store = labeled_store(1);
    let before = store.signals().rows_inserted.connection_count();
    {
        let mut controller = TableController::new(&mut store);
        controller.append_row().unwrap();
        assert_eq!(controller.store().signals().rows_inserted.connection_count(), before + 1);
    }
    assert_eq!(store.signals().rows_inserted.connection_count(), before);
    assert_eq!(store.signals().rows_removed.connection_count(), 0);
}

#[test]
fn test_config_from_toml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[add_row_button]
width = 80.0
text = "New row"

[context_menu]
delete_row = "Remove row"
"#
    )
    .unwrap();

    let config = ControllerConfig::load_toml(file.path()).unwrap();
    let mut store = labeled_store(0);
    let view = HeadlessView::new(24.0, 32.0);
    let controller = TableController::with_config(&mut store, config);

    assert_eq!(
        controller.context_menu(),
        vec![
            (EditAction::InsertRowAbove, "Insert row above"),
            (EditAction::InsertRowBelow, "Insert row below"),
            (EditAction::DeleteRow, "Remove row"),
        ]
    );
    assert_eq!(EditAction::AppendRow.label(controller.config()), "New row");
    assert_eq!(
        controller.add_row_button_geometry(&view),
        Rect::new(0.0, 32.0, 80.0, 50.0)
    );
}

#[test]
fn test_config_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("controller.json");
    std::fs::write(&path, r#"{"add_row_button": {"height": 30}}"#).unwrap();

    let config = ControllerConfig::load_json(&path).unwrap();
    assert_eq!(config.add_row_button.height, 30.0);
    assert_eq!(config.add_row_button.width, 50.0);

    std::fs::write(&path, "{ not json").unwrap();
    let err = ControllerConfig::load_json(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Json { path: Some(_), .. }));
}
