//! Row rendering for the users table.

use egui_extras::TableRow;
use modboard_business::{CellRenderer, ColumnDescriptor, ColumnSchema, UserRecord};

use super::RowAction;
use super::cells::{render_actions_cell, render_amount_cell, render_text_cell};

/// Renders one record across the schema's columns, in schema order.
///
/// The record is only read; the single mutable outcome is the action
/// requested from the actions menu, if any.
#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    schema: &ColumnSchema,
    record: &UserRecord,
) -> Option<RowAction> {
    let mut action = None;

    for descriptor in schema.columns() {
        row.col(|ui| match descriptor {
            ColumnDescriptor::Field {
                key,
                cell: CellRenderer::Text,
                ..
            } => render_text_cell(ui, key.value_of(record)),
            ColumnDescriptor::Field {
                key,
                cell: CellRenderer::Amount,
                ..
            } => render_amount_cell(ui, key.value_of(record)),
            ColumnDescriptor::Action { .. } => {
                if let Some(requested) = render_actions_cell(ui, record) {
                    action = Some(requested);
                }
            }
        });
    }

    action
}
