use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The fixed set of canonical lead fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadField {
    FirstName,
    LastName,
    Email,
    Company,
    Notes,
}

impl LeadField {
    pub const ALL: [LeadField; 5] = [
        LeadField::FirstName,
        LeadField::LastName,
        LeadField::Email,
        LeadField::Company,
        LeadField::Notes,
    ];

    /// Column / source name as it appears in the CSV header and mapping config
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadField::FirstName => "first_name",
            LeadField::LastName => "last_name",
            LeadField::Email => "email",
            LeadField::Company => "company",
            LeadField::Notes => "notes",
        }
    }

    pub fn from_name(name: &str) -> Option<LeadField> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

/// One CSV record keyed by header name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    columns: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later columns with the same header replace earlier ones
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Value for `column`, or `""` when the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.columns.get(column).map(String::as_str).unwrap_or("")
    }
}

impl<K, V> FromIterator<(K, V)> for RawRow
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// A lead after whitespace and case canonicalization.
///
/// Identity for deduplication is `email`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub notes: String,
}

impl NormalizedRow {
    pub fn get(&self, field: LeadField) -> &str {
        match field {
            LeadField::FirstName => &self.first_name,
            LeadField::LastName => &self.last_name,
            LeadField::Email => &self.email,
            LeadField::Company => &self.company,
            LeadField::Notes => &self.notes,
        }
    }

    /// Lookup by source name; names outside the canonical set read as `""`
    pub fn lookup(&self, name: &str) -> &str {
        LeadField::from_name(name).map(|field| self.get(field)).unwrap_or("")
    }
}

/// A row that failed validation, identified by its 1-based data row position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidRow {
    pub row: usize,
    pub email: String,
}

/// A valid row dropped because its email was already accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateRecord {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_row_missing_column_is_empty() {
        let row: RawRow = [("email", "a@b.c")].into_iter().collect();
        assert_eq!(row.get("email"), "a@b.c");
        assert_eq!(row.get("company"), "");
    }

    #[test]
    fn test_lookup_defaults_unknown_source_to_empty() {
        let row = NormalizedRow {
            first_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..Default::default()
        };

        assert_eq!(row.lookup("first_name"), "Ada");
        assert_eq!(row.lookup("email"), "ada@example.com");
        assert_eq!(row.lookup("phone"), "");
        assert_eq!(row.lookup("First_Name"), "");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in LeadField::ALL {
            assert_eq!(LeadField::from_name(field.as_str()), Some(field));
        }
    }
}
