//! Table editing walkthrough.
//!
//! Builds a small inventory table, edits it through the selection-driven
//! controller, and prints the table and the "add row" button position after
//! each step.
//!
//! Run with: RUST_LOG=horizon_grid=debug cargo run -p horizon-grid --example table_editing

use horizon_grid::prelude::*;

fn print_table(title: &str, store: &CellStore) {
    println!("== {title}");
    let headers: Vec<String> = (0..store.column_count())
        .map(|column| {
            store
                .header_data(column, Orientation::Horizontal, ItemRole::Display)
                .into_string()
                .unwrap_or_default()
        })
        .collect();
    println!("     | {}", headers.join(" | "));

    for row in 0..store.row_count() {
        let number = store
            .header_data(row, Orientation::Vertical, ItemRole::Display)
            .as_int()
            .unwrap_or_default();
        let cells: Vec<String> = (0..store.column_count())
            .map(|column| match store.data(row, column, ItemRole::Display) {
                ItemData::String(text) => text,
                ItemData::Int(n) => n.to_string(),
                ItemData::None => "-".to_string(),
                other => format!("{other:?}"),
            })
            .collect();
        println!("{number:>4} | {}", cells.join(" | "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "horizon_grid=info".into()),
        )
        .init();

    let mut store = CellStore::new(["Item", "Qty"], HeaderAxis::Columns);
    store.signals().rows_inserted.connect(|&(first, last)| {
        println!("   (rows {first}..={last} inserted)");
    });
    store.signals().rows_removed.connect(|&(first, last)| {
        println!("   (rows {first}..={last} removed)");
    });

    store.insert_rows(0, 3)?;
    for (row, (item, qty)) in [("bolts", 120), ("nuts", 80), ("washers", 300)]
        .into_iter()
        .enumerate()
    {
        store.set_data(row, 0, item.into(), ItemRole::Edit)?;
        store.set_data(row, 1, qty.into(), ItemRole::Edit)?;
    }
    print_table("initial", &store);

    let mut view = HeadlessView::new(24.0, 30.0);
    view.selection.set_selection_mode(SelectionMode::MultiSelection);
    view.selection.select((2, 0), SelectionFlags::SELECT);
    view.selection.select((1, 1), SelectionFlags::SELECT);

    let mut controller = TableController::new(&mut store);
    for (action, label) in controller.context_menu() {
        println!("menu: {label} ({action:?})");
    }

    let outcome = controller.trigger(EditAction::InsertRowAbove, &view)?;
    println!("insert above selection: {outcome:?}");
    let outcome = controller.trigger(EditAction::AppendRow, &view)?;
    println!("append: {outcome:?}");
    println!("button: {:?}", controller.add_row_button_geometry(&view));

    view.selection.clear();
    let outcome = controller.trigger(EditAction::DeleteRow, &view)?;
    println!("delete with nothing selected: {outcome:?}");
    drop(controller);

    print_table("after editing", &store);

    if let Err(err) = store.remove_columns(0, store.column_count()) {
        println!("refused: {err}");
    }
    Ok(())
}
