//! Application shell for the modboard admin view.

use eframe::egui;
use modboard_business::{ColumnSchema, SortState, SystemClipboard, UserRecord};

use crate::widgets::users::users_table;

/// eframe application owning the rows, the column schema, the sort state
/// and the system clipboard.
///
/// The schema is constructed once here and passed into the table widget
/// each frame; it is never ambient/global state.
pub struct ModboardApp {
    schema: ColumnSchema,
    rows: Vec<UserRecord>,
    sort: SortState,
    clipboard: SystemClipboard,
}

impl ModboardApp {
    /// Creates the app around a fixed set of records. The record source is
    /// external to this component; there is no fetch layer in scope.
    pub fn new(rows: Vec<UserRecord>) -> Self {
        Self {
            schema: ColumnSchema::standard(),
            rows,
            sort: SortState::new(),
            clipboard: SystemClipboard,
        }
    }
}

impl eframe::App for ModboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Users pending moderation");
            ui.add_space(8.0);
            users_table(
                ui,
                &self.schema,
                &self.rows,
                &mut self.sort,
                &mut self.clipboard,
            );
        });
    }
}

/// Built-in sample records, shaped like the external source's JSON payload.
pub fn sample_records() -> Vec<UserRecord> {
    let payload = serde_json::json!([
        {
            "id": "u-42",
            "name": "Dana Park",
            "status": "approved",
            "email": "dana@example.com",
            "amount": "1234.5"
        },
        {
            "id": "u-7",
            "name": "Jun Seo",
            "status": "rejected",
            "email": "jun@example.com",
            "amount": "250"
        },
        {
            "id": "u-19",
            "name": "Maya Lindqvist",
            "status": "approved",
            "email": "maya@example.com",
            "amount": "98765.432"
        }
    ]);

    serde_json::from_value(payload).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records_deserialize() {
        let records = sample_records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, "u-42");
    }
}
