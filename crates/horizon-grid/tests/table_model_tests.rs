//! Integration tests for `CellStore` behavior through the public API.

use std::sync::Arc;

use horizon_grid::model::{
    CellGrid, CellStore, FlatGrid, HeaderAxis, ItemData, ItemModel, ItemRole, NestedGrid,
    Orientation,
};
use horizon_grid::{Axis, TableError};
use parking_lot::Mutex;

type Events = Arc<Mutex<Vec<(&'static str, usize, usize)>>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("horizon_grid=debug")
        .try_init();
}

/// Records every structural signal of `store` as `(name, first, last)`.
fn record<G: CellGrid>(store: &CellStore<G>) -> Events {
    let events: Events = Arc::new(Mutex::new(Vec::new()));
    let signals = store.signals();

    macro_rules! watch {
        ($signal:ident) => {{
            let events = events.clone();
            signals.$signal.connect(move |&(first, last)| {
                events.lock().push((stringify!($signal), first, last));
            });
        }};
    }

    watch!(rows_about_to_be_inserted);
    watch!(rows_inserted);
    watch!(rows_about_to_be_removed);
    watch!(rows_removed);
    watch!(columns_about_to_be_inserted);
    watch!(columns_inserted);
    watch!(columns_about_to_be_removed);
    watch!(columns_removed);
    events
}

fn assert_consistent<G: CellGrid>(store: &CellStore<G>) {
    assert!(store.verify().is_ok());
    let rows = store.row_count();
    let columns = store.column_count();
    for row in 0..rows {
        for column in 0..columns {
            assert!(store.cell(row, column).is_some(), "missing cell ({row}, {column})");
        }
        assert!(store.cell(row, columns).is_none());
    }
    match store.header_axis() {
        HeaderAxis::Columns => assert_eq!(store.header_labels().len(), columns),
        HeaderAxis::Rows => assert_eq!(store.header_labels().len(), rows),
    }
}

// ============================================================================
// Value storage
// ============================================================================

#[test]
fn test_set_get_round_trip_per_role() {
    let mut store = CellStore::new(["A", "B"], HeaderAxis::Columns);
    store.insert_rows(0, 3).unwrap();

    let roles = [
        (ItemRole::Display, ItemData::from("text")),
        (ItemRole::ToolTip, ItemData::from("tip")),
        (ItemRole::TextAlignment, ItemData::Int(4)),
        (ItemRole::CheckState, ItemData::from(horizon_grid::model::CheckState::Checked)),
        (ItemRole::SizeHint, ItemData::Size(10.0, 20.0)),
        (ItemRole::User(7), ItemData::Bool(true)),
    ];
    for (row, column) in [(0, 0), (1, 1), (2, 0)] {
        for (role, value) in &roles {
            store.set_data(row, column, value.clone(), *role).unwrap();
        }
        for (role, value) in &roles {
            assert_eq!(&store.data(row, column, *role), value);
        }
    }
}

#[test]
fn test_edit_role_mirrors_display() {
    let mut store = CellStore::new(["A"], HeaderAxis::Columns);
    store.append_row().unwrap();
    store
        .set_data(0, 0, ItemData::Float(2.5), ItemRole::Edit)
        .unwrap();

    assert_eq!(store.data(0, 0, ItemRole::Edit), ItemData::Float(2.5));
    assert_eq!(store.data(0, 0, ItemRole::Display), ItemData::Float(2.5));
}

#[test]
fn test_custom_payload_survives_structural_changes() {
    #[derive(Debug, PartialEq)]
    struct Note(&'static str);

    let mut store = CellStore::new(["A", "B"], HeaderAxis::Columns);
    store.insert_rows(0, 1).unwrap();
    store
        .set_data(0, 1, ItemData::new(Note("keep")), ItemRole::User(0))
        .unwrap();
    store.insert_rows(0, 2).unwrap();
    store.insert_columns(0, 1).unwrap();

    let data = store.data(2, 2, ItemRole::User(0));
    assert_eq!(data.downcast::<Note>(), Some(&Note("keep")));
}

#[test]
fn test_out_of_range_reads_are_absent() {
    let mut store = CellStore::new(["A", "B", "C"], HeaderAxis::Columns);
    store.insert_rows(0, 2).unwrap();

    for (row, column) in [(2, 0), (0, 3), (usize::MAX, 0), (0, usize::MAX), (9, 9)] {
        assert!(store.data(row, column, ItemRole::Display).is_none());
        assert!(store.cell(row, column).is_none());
    }
    assert!(store.data(0, 0, ItemRole::WhatsThis).is_none());
}

#[test]
fn test_first_cell_is_addressable() {
    let mut store = CellStore::new(["A", "B"], HeaderAxis::Columns);
    store.insert_rows(0, 1).unwrap();
    store.set_data(0, 0, "X".into(), ItemRole::Display).unwrap();
    assert_eq!(store.data(0, 0, ItemRole::Display).as_string(), Some("X"));

    let mut flat = CellStore::<FlatGrid>::with_backend(["A", "B"], HeaderAxis::Columns);
    flat.insert_rows(0, 1).unwrap();
    flat.set_data(0, 0, "X".into(), ItemRole::Display).unwrap();
    assert_eq!(flat.data(0, 0, ItemRole::Display).as_string(), Some("X"));
}

// ============================================================================
// Structural mutations
// ============================================================================

#[test]
fn test_abc_scenario() {
    init_tracing();
    let mut store = CellStore::with_orientation_flag(["A", "B", "C"], true);
    assert_eq!(store.column_count(), 3);
    assert_eq!(store.row_count(), 0);

    store.insert_rows(0, 2).unwrap();
    assert_eq!(store.row_count(), 2);
    for row in 0..2 {
        for column in 0..3 {
            assert!(store.cell(row, column).is_some_and(|cell| cell.is_empty()));
        }
    }

    store.set_data(1, 2, "hi".into(), ItemRole::Edit).unwrap();
    assert_eq!(store.data(1, 2, ItemRole::Display).as_string(), Some("hi"));

    store.remove_columns(1, 1).unwrap();
    assert_eq!(store.column_count(), 2);
    assert_eq!(
        store
            .header_data(1, Orientation::Horizontal, ItemRole::Display)
            .as_string(),
        Some("C")
    );
    assert_eq!(store.data(1, 1, ItemRole::Display).as_string(), Some("hi"));
    assert_consistent(&store);
}

#[test]
fn test_insert_then_remove_restores_rows() {
    let mut store = CellStore::new(["A", "B"], HeaderAxis::Columns);
    store.insert_rows(0, 4).unwrap();
    for row in 0..4 {
        store
            .set_data(row, 1, ItemData::Int(row as i64), ItemRole::Display)
            .unwrap();
    }

    for at in 0..=4 {
        for count in 1..=3 {
            store.insert_rows(at, count).unwrap();
            assert_eq!(store.row_count(), 4 + count);
            store.remove_rows(at, count).unwrap();

            assert_eq!(store.row_count(), 4);
            for row in 0..4 {
                assert_eq!(
                    store.data(row, 1, ItemRole::Display),
                    ItemData::Int(row as i64)
                );
            }
        }
    }
}

#[test]
fn test_insert_then_remove_restores_columns() {
    let mut store = CellStore::new(["r0", "r1", "r2"], HeaderAxis::Rows);
    store.insert_columns(0, 2).unwrap();
    store.set_data(2, 1, "x".into(), ItemRole::Display).unwrap();

    store.insert_columns(1, 3).unwrap();
    assert_eq!(store.data(2, 4, ItemRole::Display).as_string(), Some("x"));
    store.remove_columns(1, 3).unwrap();

    assert_eq!(store.column_count(), 2);
    assert_eq!(store.data(2, 1, ItemRole::Display).as_string(), Some("x"));
    assert_consistent(&store);
}

#[test]
fn test_failed_mutations_leave_store_untouched() {
    let mut store = CellStore::new(["A", "B"], HeaderAxis::Columns);
    store.insert_rows(0, 2).unwrap();
    store.set_data(1, 1, "v".into(), ItemRole::Display).unwrap();
    let events = record(&store);

    assert_eq!(
        store.remove_rows(1, 2),
        Err(TableError::InvalidRange {
            axis: Axis::Row,
            first: 1,
            count: 2,
            len: 2
        })
    );
    assert!(store.insert_columns(3, 1).is_err());
    assert!(store.remove_columns(0, 2).unwrap_err().is_inconsistent_state());
    assert!(store.insert_rows(0, 0).is_err());

    assert!(events.lock().is_empty());
    assert_eq!(store.row_count(), 2);
    assert_eq!(store.column_count(), 2);
    assert_eq!(store.data(1, 1, ItemRole::Display).as_string(), Some("v"));
    assert_consistent(&store);
}

#[test]
fn test_inconsistent_store_reports_empty() {
    let mut store = CellStore::new(Vec::<&str>::new(), HeaderAxis::Rows);
    assert!(!store.is_consistent());
    assert!(store.verify().is_err());
    assert_eq!(store.row_count(), 0);
    assert_eq!(store.column_count(), 0);
    assert!(store.header(0).is_none());

    for result in [
        store.insert_rows(0, 1),
        store.insert_columns(0, 1),
        store.set_data(0, 0, "x".into(), ItemRole::Display),
        store.set_header_data(0, Orientation::Vertical, "x".into(), ItemRole::Display),
    ] {
        assert!(result.unwrap_err().is_inconsistent_state());
    }
}

#[test]
fn test_rows_axis_keeps_header_per_row() {
    let mut store = CellStore::new(["first", "second"], HeaderAxis::Rows);
    store.insert_columns(0, 3).unwrap();
    store.insert_rows(1, 2).unwrap();
    assert_eq!(store.row_count(), 4);
    assert_eq!(store.header_labels(), vec!["first", "", "", "second"]);
    assert_consistent(&store);

    // The last header row cannot be removed.
    store.remove_rows(0, 3).unwrap();
    assert!(store.remove_rows(0, 1).is_err());
    assert_eq!(store.header_labels(), vec!["second"]);

    // Column headers are numbered on a rows store.
    assert_eq!(
        store.header_data(2, Orientation::Horizontal, ItemRole::Display),
        ItemData::Int(3)
    );
    assert!(store
        .header_data(3, Orientation::Horizontal, ItemRole::Display)
        .is_none());
}

// ============================================================================
// Notifications
// ============================================================================

#[test]
fn test_signals_bracket_structural_changes() {
    let mut store = CellStore::new(["A", "B"], HeaderAxis::Columns);
    let events = record(&store);

    // Observers connected after the recorder still see one about/done pair
    // per row insertion, in that order.
    let shapes = Arc::new(Mutex::new(Vec::new()));
    {
        let signals = store.signals();
        let shapes_about = shapes.clone();
        signals
            .rows_about_to_be_inserted
            .connect(move |_| shapes_about.lock().push("about"));
        let shapes_done = shapes.clone();
        signals
            .rows_inserted
            .connect(move |_| shapes_done.lock().push("done"));
    }

    store.insert_rows(0, 3).unwrap();
    store.remove_rows(1, 2).unwrap();
    store.insert_columns(2, 2).unwrap();
    store.remove_columns(0, 1).unwrap();

    assert_eq!(
        *events.lock(),
        vec![
            ("rows_about_to_be_inserted", 0, 2),
            ("rows_inserted", 0, 2),
            ("rows_about_to_be_removed", 1, 2),
            ("rows_removed", 1, 2),
            ("columns_about_to_be_inserted", 2, 3),
            ("columns_inserted", 2, 3),
            ("columns_about_to_be_removed", 0, 0),
            ("columns_removed", 0, 0),
        ]
    );
    assert_eq!(*shapes.lock(), vec!["about", "done"]);
}

#[test]
fn test_data_and_header_signals() {
    let mut store = CellStore::new(["A", "B"], HeaderAxis::Columns);
    store.insert_rows(0, 2).unwrap();

    let changed = Arc::new(Mutex::new(Vec::new()));
    let changed_clone = changed.clone();
    store
        .signals()
        .data_changed
        .connect(move |(top_left, bottom_right, roles)| {
            changed_clone
                .lock()
                .push((*top_left, *bottom_right, roles.clone()));
        });

    let headers = Arc::new(Mutex::new(Vec::new()));
    let headers_clone = headers.clone();
    store
        .signals()
        .header_data_changed
        .connect(move |&args| headers_clone.lock().push(args));

    store.set_data(1, 0, "x".into(), ItemRole::Edit).unwrap();
    store
        .set_header_data(1, Orientation::Horizontal, "Bee".into(), ItemRole::Display)
        .unwrap();
    assert!(store.set_data(5, 0, "x".into(), ItemRole::Edit).is_err());

    assert_eq!(
        *changed.lock(),
        vec![((1, 0), (1, 0), vec![ItemRole::Edit, ItemRole::Display])]
    );
    assert_eq!(*headers.lock(), vec![(Orientation::Horizontal, 1, 1)]);
    assert_eq!(store.header_labels(), vec!["A", "Bee"]);
}

#[test]
fn test_reset_signals() {
    let mut store = CellStore::new(["A"], HeaderAxis::Columns);
    store.insert_rows(0, 5).unwrap();

    let resets = Arc::new(Mutex::new(Vec::new()));
    {
        let signals = store.signals();
        let about = resets.clone();
        signals
            .model_about_to_reset
            .connect(move |_| about.lock().push("about"));
        let done = resets.clone();
        signals.model_reset.connect(move |_| done.lock().push("reset"));
    }

    store.clear_rows().unwrap();
    store.set_header_labels(["X", "Y"]).unwrap();
    assert!(store.set_header_labels(Vec::<String>::new()).is_err());

    assert_eq!(*resets.lock(), vec!["about", "reset", "about", "reset"]);
    assert_eq!(store.row_count(), 0);
    assert_eq!(store.column_count(), 2);
}

// ============================================================================
// Backend equivalence
// ============================================================================

/// A fixed script of mutations; returns everything observable afterwards.
fn run_script<G: CellGrid>(header_axis: HeaderAxis) -> Vec<String> {
    let mut store = CellStore::<G>::with_backend(["h0", "h1", "h2"], header_axis);
    let events = record(&store);

    let mut results = Vec::new();
    let mut step = |result: Result<(), TableError>| results.push(format!("{result:?}"));

    step(store.insert_columns(0, 2));
    step(store.insert_rows(0, 2));
    step(store.insert_rows(store.row_count(), 3));
    for row in 0..store.row_count() {
        for column in 0..store.column_count() {
            step(store.set_data(
                row,
                column,
                ItemData::Int((row * 10 + column) as i64),
                ItemRole::Edit,
            ));
        }
    }
    step(store.remove_columns(1, 2));
    step(store.insert_columns(1, 1));
    step(store.remove_rows(2, 2));
    step(store.remove_rows(0, 100));
    step(store.insert_rows(1, 0));
    step(store.remove_columns(0, store.column_count()));
    step(store.append_row());

    let mut observed = results;
    observed.push(format!("{}x{}", store.row_count(), store.column_count()));
    observed.push(format!("{:?}", store.header_labels()));
    for row in 0..=store.row_count() {
        for column in 0..=store.column_count() {
            observed.push(format!("{:?}", store.data(row, column, ItemRole::Display)));
        }
    }
    observed.extend(
        events
            .lock()
            .iter()
            .map(|(name, first, last)| format!("{name}({first},{last})")),
    );
    observed
}

#[test]
fn test_backends_agree_on_columns_axis() {
    assert_eq!(
        run_script::<NestedGrid>(HeaderAxis::Columns),
        run_script::<FlatGrid>(HeaderAxis::Columns)
    );
}

#[test]
fn test_backends_agree_on_rows_axis() {
    assert_eq!(
        run_script::<NestedGrid>(HeaderAxis::Rows),
        run_script::<FlatGrid>(HeaderAxis::Rows)
    );
}
