//! Column layout for the users table.

use egui_extras::Column;
use modboard_business::{ColumnDescriptor, ColumnSchema, FieldKey};

/// Fixed column widths for consistent table layout
pub const STATUS_WIDTH: f32 = 80.0;
pub const AMOUNT_WIDTH: f32 = 110.0;
pub const ACTIONS_WIDTH: f32 = 40.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Derives the `egui_extras` column layout from the schema, in schema
/// order: status and amount are fixed, email and name share the remaining
/// width, the actions column is a narrow fixed trigger column.
#[inline]
pub fn table_columns(schema: &ColumnSchema) -> Vec<Column> {
    schema
        .columns()
        .iter()
        .map(|descriptor| match descriptor {
            ColumnDescriptor::Field {
                key: FieldKey::Status,
                ..
            } => Column::exact(STATUS_WIDTH),
            ColumnDescriptor::Field {
                key: FieldKey::Amount,
                ..
            } => Column::exact(AMOUNT_WIDTH),
            ColumnDescriptor::Field { .. } => Column::remainder().at_least(120.0),
            ColumnDescriptor::Action { .. } => Column::exact(ACTIONS_WIDTH),
        })
        .collect()
}
