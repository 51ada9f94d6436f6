//! Row record for the admin user table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Moderation status of a pending user.
///
/// Exactly two states are representable; the wire format uses the lowercase
/// names (`"approved"` / `"rejected"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Approved,
    Rejected,
}

impl UserStatus {
    /// The lowercase display/wire name of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user awaiting moderation, as supplied by the external data source.
///
/// The table never mutates a record; it only reads field values through
/// [`crate::FieldKey`] accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque unique identifier, stable per record. Used only for
    /// copy-to-clipboard and action dispatch.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Moderation status.
    pub status: UserStatus,
    /// Email address (sortable).
    pub email: String,
    /// Raw amount cell value exactly as the data source supplied it.
    ///
    /// Parsed at render time; a non-numeric value silently degrades to a
    /// rendered `NaN` instead of being rejected at the boundary.
    pub amount: String,
}
