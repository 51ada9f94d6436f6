//! Header row rendering for the users table.

use egui::Ui;
use egui_extras::TableRow;
use modboard_business::{ColumnDescriptor, ColumnSchema, FieldKey, HeaderRenderer};

/// Sort-direction indicator shown on sortable headers.
const SORT_INDICATOR: &str = "⇅";

/// Renders the header row from the schema's descriptors.
///
/// Returns the field whose sort control was clicked, if any; the caller
/// owns the sort state and applies the toggle after the table is built.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    schema: &ColumnSchema,
) -> Option<FieldKey> {
    let mut toggled = None;

    for descriptor in schema.columns() {
        header.col(|ui| {
            if let Some(key) = render_header_cell(ui, descriptor) {
                toggled = Some(key);
            }
        });
    }

    toggled
}

/// Renders a single header cell; returns the field key when a sort control
/// was clicked.
#[inline]
fn render_header_cell(ui: &mut Ui, descriptor: &ColumnDescriptor) -> Option<FieldKey> {
    match descriptor {
        // The action column has no header.
        ColumnDescriptor::Action { .. } => None,
        ColumnDescriptor::Field { key, header, .. } => match header {
            HeaderRenderer::Label => {
                ui.strong(key.default_label());
                None
            }
            HeaderRenderer::SortToggle => {
                let label = format!("{} {SORT_INDICATOR}", key.default_label());
                ui.button(label).clicked().then_some(*key)
            }
            HeaderRenderer::RightAlignedLabel => {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.strong(key.default_label());
                });
                None
            }
        },
    }
}
