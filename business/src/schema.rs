//! Typed column schema for the admin user table.
//!
//! The schema is the configuration value handed to the table widget: an
//! ordered sequence of column descriptors, each saying how to extract a
//! value from a [`UserRecord`] and which header/cell renderer to use.
//! Descriptors are data; all interactivity (sort toggling, menu state) is
//! owned by the widget that consumes them.

use thiserror::Error;

use crate::user::UserRecord;

/// Record attribute a field column is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Status,
    Email,
    Name,
    Amount,
}

impl FieldKey {
    /// Stable column id, also the accessor name in the source payload.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Email => "email",
            Self::Name => "name",
            Self::Amount => "amount",
        }
    }

    /// Default header label for this field.
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::Email => "Email",
            Self::Name => "Name",
            Self::Amount => "Amount",
        }
    }

    /// Reads this field's raw display value from a record.
    pub fn value_of(self, record: &UserRecord) -> &str {
        match self {
            Self::Status => record.status.as_str(),
            Self::Email => &record.email,
            Self::Name => &record.name,
            Self::Amount => &record.amount,
        }
    }
}

/// How a field column's header is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRenderer {
    /// Static label, default alignment.
    Label,
    /// Clickable label with a sort-direction indicator; clicking toggles
    /// the owning table's sort state for this column.
    SortToggle,
    /// Static right-aligned label, no interactivity.
    RightAlignedLabel,
}

/// How a field column's cells are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRenderer {
    /// Default text rendering of the raw field value.
    Text,
    /// Parse as a number and render en-US grouped decimal, right-aligned
    /// and emphasized. Non-numeric values render as `NaN`.
    Amount,
}

/// One column of the table: either bound to a record field or the per-row
/// actions column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnDescriptor {
    /// Column bound to a record attribute by key.
    Field {
        key: FieldKey,
        header: HeaderRenderer,
        cell: CellRenderer,
    },
    /// Column not bound to any field; renders the per-row actions menu.
    /// The explicit `id` is required because there is no accessor.
    Action { id: &'static str },
}

impl ColumnDescriptor {
    /// Field column with default header and cell rendering.
    pub fn field(key: FieldKey) -> Self {
        Self::Field {
            key,
            header: HeaderRenderer::Label,
            cell: CellRenderer::Text,
        }
    }

    /// Stable id of this column.
    pub fn id(&self) -> &str {
        match self {
            Self::Field { key, .. } => key.as_str(),
            Self::Action { id } => id,
        }
    }
}

/// Schema construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// The schema has no action column.
    #[error("schema has no action column")]
    MissingActionColumn,
    /// The schema has more than one action column.
    #[error("schema has more than one action column")]
    DuplicateActionColumn,
    /// The action column is not the last column.
    #[error("action column must be the last column")]
    ActionColumnNotLast,
    /// The same field is bound by two columns.
    #[error("duplicate field column: {0}")]
    DuplicateFieldColumn(&'static str),
}

/// Ordered, validated sequence of column descriptors.
///
/// Constructed once at startup and passed explicitly to the table widget;
/// the value is immutable and holds no per-row state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnSchema {
    /// Builds a schema, validating the action-column and field-uniqueness
    /// invariants at construction time.
    pub fn new(columns: Vec<ColumnDescriptor>) -> Result<Self, SchemaError> {
        let mut action_indices: Vec<usize> = Vec::new();
        let mut fields_seen: Vec<FieldKey> = Vec::new();

        for (index, column) in columns.iter().enumerate() {
            match column {
                ColumnDescriptor::Action { .. } => action_indices.push(index),
                ColumnDescriptor::Field { key, .. } => {
                    if fields_seen.contains(key) {
                        return Err(SchemaError::DuplicateFieldColumn(key.as_str()));
                    }
                    fields_seen.push(*key);
                }
            }
        }

        match action_indices.as_slice() {
            [] => Err(SchemaError::MissingActionColumn),
            [last] if *last == columns.len() - 1 => Ok(Self { columns }),
            [_] => Err(SchemaError::ActionColumnNotLast),
            _ => Err(SchemaError::DuplicateActionColumn),
        }
    }

    /// The canonical admin-view schema: status, email (sortable), name,
    /// amount (formatted), actions.
    pub fn standard() -> Self {
        // Satisfies the `new` invariants by construction; see the unit test.
        Self {
            columns: standard_columns(),
        }
    }

    /// Columns in render order.
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema is empty (never true for a validated schema).
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

fn standard_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::field(FieldKey::Status),
        ColumnDescriptor::Field {
            key: FieldKey::Email,
            header: HeaderRenderer::SortToggle,
            cell: CellRenderer::Text,
        },
        ColumnDescriptor::field(FieldKey::Name),
        ColumnDescriptor::Field {
            key: FieldKey::Amount,
            header: HeaderRenderer::RightAlignedLabel,
            cell: CellRenderer::Amount,
        },
        ColumnDescriptor::Action { id: "actions" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserStatus;

    fn record() -> UserRecord {
        UserRecord {
            id: "u-1".to_owned(),
            name: "Alice".to_owned(),
            status: UserStatus::Approved,
            email: "alice@example.com".to_owned(),
            amount: "1234.5".to_owned(),
        }
    }

    #[test]
    fn test_standard_order_is_fixed() {
        let schema = ColumnSchema::standard();
        let ids: Vec<&str> = schema.columns().iter().map(ColumnDescriptor::id).collect();
        assert_eq!(ids, ["status", "email", "name", "amount", "actions"]);
    }

    #[test]
    fn test_standard_satisfies_construction_invariants() {
        assert!(ColumnSchema::new(standard_columns()).is_ok());
    }

    #[test]
    fn test_missing_action_column_is_rejected() {
        let result = ColumnSchema::new(vec![
            ColumnDescriptor::field(FieldKey::Status),
            ColumnDescriptor::field(FieldKey::Email),
        ]);
        assert_eq!(result.unwrap_err(), SchemaError::MissingActionColumn);
    }

    #[test]
    fn test_action_column_must_be_last() {
        let result = ColumnSchema::new(vec![
            ColumnDescriptor::Action { id: "actions" },
            ColumnDescriptor::field(FieldKey::Status),
        ]);
        assert_eq!(result.unwrap_err(), SchemaError::ActionColumnNotLast);
    }

    #[test]
    fn test_second_action_column_is_rejected() {
        let result = ColumnSchema::new(vec![
            ColumnDescriptor::field(FieldKey::Status),
            ColumnDescriptor::Action { id: "a" },
            ColumnDescriptor::Action { id: "b" },
        ]);
        assert_eq!(result.unwrap_err(), SchemaError::DuplicateActionColumn);
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let result = ColumnSchema::new(vec![
            ColumnDescriptor::field(FieldKey::Email),
            ColumnDescriptor::field(FieldKey::Email),
            ColumnDescriptor::Action { id: "actions" },
        ]);
        assert_eq!(
            result.unwrap_err(),
            SchemaError::DuplicateFieldColumn("email")
        );
    }

    #[test]
    fn test_field_accessors_read_without_mutating() {
        let record = record();
        assert_eq!(FieldKey::Status.value_of(&record), "approved");
        assert_eq!(FieldKey::Email.value_of(&record), "alice@example.com");
        assert_eq!(FieldKey::Name.value_of(&record), "Alice");
        assert_eq!(FieldKey::Amount.value_of(&record), "1234.5");
    }
}
