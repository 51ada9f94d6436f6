//! Table widget for users pending moderation.
//!
//! This is the rendering engine the column schema is handed to: it owns
//! the sort state application, builds the `egui_extras` table, and
//! dispatches the one outbound side effect (copy-id) to the clipboard
//! capability. The schema itself stays a passive configuration value.
//!
//! Split into focused components:
//! - `columns`: column layout and size constants
//! - `header`: header row rendering
//! - `cells`: cell rendering functions per renderer kind
//! - `row`: one record across the schema's columns

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::Ui;
use egui_extras::TableBuilder;
use modboard_business::{ClipboardText, ColumnSchema, SortState, UserRecord};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Per-row action requested from the actions menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    /// Copy the record id to the clipboard.
    CopyId(String),
}

/// Renders the users table for one frame.
///
/// `rows` is read-only; sorting is applied to a working copy so the
/// caller's data keeps its source order. Header sort clicks and menu
/// actions are collected during the build and applied afterwards, outside
/// the cell closures.
pub fn users_table(
    ui: &mut Ui,
    schema: &ColumnSchema,
    rows: &[UserRecord],
    sort: &mut SortState,
    clipboard: &mut dyn ClipboardText,
) {
    let mut ordered: Vec<UserRecord> = rows.to_vec();
    sort.apply(&mut ordered);

    let mut sort_clicked = None;
    let mut row_action: Option<RowAction> = None;

    let mut builder = TableBuilder::new(ui).striped(true);
    for column in table_columns(schema) {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            sort_clicked = render_table_header(&mut header, schema);
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, ordered.len(), |mut table_row| {
                let record = &ordered[table_row.index()];
                if let Some(action) = render_user_row(&mut table_row, schema, record) {
                    row_action = Some(action);
                }
            });
        });

    if let Some(key) = sort_clicked {
        sort.toggle_sorting(key, sort.is_sorted_ascending(key));
    }

    if let Some(RowAction::CopyId(id)) = row_action {
        log::debug!("copy record id to clipboard: {id}");
        // Fire-and-forget; write failures are logged inside the capability.
        clipboard.write_text(&id);
    }
}
