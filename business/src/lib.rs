//! Domain model and column schema for the modboard admin user table.
//!
//! This crate is UI-framework free: it defines the row record, the typed
//! column schema consumed by the table widget, the sort state the widget
//! owns, and the clipboard capability the actions column dispatches to.

pub mod amount;
pub mod clipboard;
pub mod schema;
pub mod sort;
pub mod user;

pub use amount::{format_amount, parse_amount};
pub use clipboard::{ClipboardText, SystemClipboard};
pub use schema::{
    CellRenderer, ColumnDescriptor, ColumnSchema, FieldKey, HeaderRenderer, SchemaError,
};
pub use sort::{SortDirection, SortState};
pub use user::{UserRecord, UserStatus};
