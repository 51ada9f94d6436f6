//! Sort state for the admin user table.
//!
//! The table widget owns this state; column descriptors only request
//! toggles through it. Row ordering is a stable compare on the targeted
//! field's display value.

use crate::schema::FieldKey;
use crate::user::UserRecord;

/// Two-state sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort target of the table, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    target: Option<(FieldKey, SortDirection)>,
}

impl SortState {
    /// Unsorted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Direction currently applied to `key`, if it is the sort target.
    pub fn direction_for(&self, key: FieldKey) -> Option<SortDirection> {
        match self.target {
            Some((target, direction)) if target == key => Some(direction),
            _ => None,
        }
    }

    /// Whether `key` is currently sorted ascending.
    pub fn is_sorted_ascending(&self, key: FieldKey) -> bool {
        self.direction_for(key) == Some(SortDirection::Ascending)
    }

    /// Requests the next sort state for `key`: descending if the column is
    /// currently ascending, ascending in every other case (descending or
    /// unsorted).
    pub fn toggle_sorting(&mut self, key: FieldKey, currently_ascending: bool) {
        let next = if currently_ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.target = Some((key, next));
    }

    /// Orders `rows` by the targeted field's display value. Stable; no-op
    /// when nothing is targeted.
    pub fn apply(&self, rows: &mut [UserRecord]) {
        let Some((key, direction)) = self.target else {
            return;
        };

        rows.sort_by(|a, b| {
            let ordering = key.value_of(a).cmp(key.value_of(b));
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}
