//! egui widgets for the modboard admin view.

pub mod users;
