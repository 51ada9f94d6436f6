#![warn(clippy::all, rust_2018_idioms)]

//! egui admin view for users pending moderation.

pub mod app;
pub mod widgets;

pub use app::{ModboardApp, sample_records};
