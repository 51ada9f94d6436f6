#![allow(dead_code)]

use modboard_business::{ClipboardText, SortState, UserRecord, UserStatus};

/// Clipboard double recording every write so tests can assert the exact
/// payloads (and their absence).
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
}

impl ClipboardText for RecordingClipboard {
    fn write_text(&mut self, text: &str) {
        self.writes.push(text.to_owned());
    }
}

/// State threaded through the kittest harness for table tests.
pub struct TableState {
    pub rows: Vec<UserRecord>,
    pub sort: SortState,
    pub clipboard: RecordingClipboard,
}

impl TableState {
    pub fn new(rows: Vec<UserRecord>) -> Self {
        Self {
            rows,
            sort: SortState::new(),
            clipboard: RecordingClipboard::default(),
        }
    }
}

pub fn record(id: &str, name: &str, status: UserStatus, email: &str, amount: &str) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        status,
        email: email.to_owned(),
        amount: amount.to_owned(),
    }
}

/// Three-user fixture covering both statuses and a groupable amount.
pub fn sample_rows() -> Vec<UserRecord> {
    vec![
        record(
            "u-42",
            "Dana Park",
            UserStatus::Approved,
            "dana@example.com",
            "1234.5",
        ),
        record(
            "u-7",
            "Jun Seo",
            UserStatus::Rejected,
            "jun@example.com",
            "250",
        ),
        record(
            "u-19",
            "Maya Lindqvist",
            UserStatus::Approved,
            "maya@example.com",
            "98765.432",
        ),
    ]
}
