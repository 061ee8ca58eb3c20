//! Record model shared by every registration screen.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::FieldMap;

/// Opaque record identifier, assigned by the repository.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of registration data: a stream, house, staff member, subject...
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub fields: FieldMap,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(id: RecordId, fields: FieldMap) -> Self {
        Self {
            id,
            fields,
            updated_at: Utc::now(),
        }
    }

    /// Text value of `field`, or `""`.
    pub fn text(&self, field: &str) -> &str {
        self.fields.text(field)
    }
}
