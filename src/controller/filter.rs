//! Equality filters over record fields.

use crate::models::Record;

/// Filter value that matches every record.
pub const WILDCARD: &str = "All";

/// Conjunction of `field == value` clauses. A clause whose value is empty or
/// [`WILDCARD`] matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    clauses: Vec<(String, String)>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.clauses.push((field.into(), value.into()));
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.clauses.iter().all(|(field, value)| {
            if value.is_empty() || value == WILDCARD {
                return true;
            }
            record
                .fields
                .get(field)
                .map(|v| v.to_string() == *value)
                .unwrap_or(false)
        })
    }
}
