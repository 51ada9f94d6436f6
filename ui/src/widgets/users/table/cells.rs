//! Cell rendering functions for the users table.

use egui::{RichText, Ui};
use modboard_business::{UserRecord, format_amount, parse_amount};

use super::RowAction;

/// Label for the copy-id menu item, preserved verbatim from the product
/// mock. TODO: replace once product supplies the final copy for this item.
pub(crate) const COPY_ID_LABEL: &str = "ㄹㅇㄴㅁ";

/// Glyph on the per-row menu trigger button.
pub(crate) const MENU_TRIGGER_LABEL: &str = "⋯";

/// Renders a plain text cell (status, email, name passthrough).
#[inline]
pub fn render_text_cell(ui: &mut Ui, value: &str) {
    ui.label(value);
}

/// Renders the amount cell: parse the raw value, format as en-US grouped
/// decimal, right-aligned and emphasized. Non-numeric raw values degrade
/// to a rendered `NaN` with no error surfaced.
#[inline]
pub fn render_amount_cell(ui: &mut Ui, raw: &str) {
    let formatted = format_amount(parse_amount(raw));
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        ui.label(RichText::new(formatted).strong());
    });
}

/// Renders the actions cell: a trigger button opening the per-row menu.
///
/// The menu exposes a non-interactive "Actions" heading, the copy-id item,
/// a separator, and a "Delete User" entry that is wired to no handler.
/// Returns the requested action; dispatch happens in the table driver.
#[inline]
pub fn render_actions_cell(ui: &mut Ui, record: &UserRecord) -> Option<RowAction> {
    let mut action = None;

    let _ = ui.menu_button(MENU_TRIGGER_LABEL, |ui| {
        ui.label(RichText::new("Actions").strong());

        if ui.button(COPY_ID_LABEL).clicked() {
            action = Some(RowAction::CopyId(record.id.clone()));
            ui.close();
        }

        ui.separator();

        // Present but intentionally unwired; delete awaits backend support.
        let _ = ui.button("Delete User");
    });

    action
}
