//! Admin table for users pending moderation.

pub mod table;

pub use table::{RowAction, users_table};
