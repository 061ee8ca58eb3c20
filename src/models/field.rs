//! Field values and the ordered field map used by every record.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage and display format of date fields.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// The kind of value a schema field holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Text,
    Number,
    Flag,
    /// Calendar date held as `dd/mm/yyyy` text.
    Date,
}

impl FieldKind {
    /// Value used when an optional field is left out of a draft.
    pub fn default_value(&self) -> FieldValue {
        match self {
            FieldKind::Text | FieldKind::Date => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Number(0),
            FieldKind::Flag => FieldValue::Flag(false),
        }
    }
}

/// A single field value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(i64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// True for text that is empty after trimming. Numbers and flags are
    /// always present.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Key used for case-insensitive uniqueness checks.
    pub fn match_key(&self) -> String {
        match self {
            FieldValue::Text(s) => s.trim().to_lowercase(),
            other => other.to_string(),
        }
    }

    /// Converts a raw value into `kind`.
    ///
    /// Text is trimmed. Numbers parse from text the way an integer input box
    /// does; dates accept `dd/mm/yyyy` or the ISO form of a date picker.
    /// `None` means the text could not be read as `kind`.
    pub fn coerce(self, kind: FieldKind) -> Option<FieldValue> {
        match (kind, self) {
            (FieldKind::Text, FieldValue::Text(s)) => Some(FieldValue::Text(s.trim().to_string())),
            (FieldKind::Text, other) => Some(FieldValue::Text(other.to_string())),
            (FieldKind::Number, FieldValue::Number(n)) => Some(FieldValue::Number(n)),
            (FieldKind::Number, FieldValue::Text(s)) => {
                s.trim().parse::<i64>().ok().map(FieldValue::Number)
            }
            (FieldKind::Number, FieldValue::Flag(b)) => Some(FieldValue::Number(b as i64)),
            (FieldKind::Flag, FieldValue::Flag(b)) => Some(FieldValue::Flag(b)),
            (FieldKind::Flag, FieldValue::Number(n)) => Some(FieldValue::Flag(n != 0)),
            (FieldKind::Flag, FieldValue::Text(s)) => {
                let s = s.trim().to_ascii_lowercase();
                Some(FieldValue::Flag(matches!(
                    s.as_str(),
                    "true" | "yes" | "y" | "1"
                )))
            }
            (FieldKind::Date, FieldValue::Text(s)) => parse_date(s.trim()).map(FieldValue::Text),
            (FieldKind::Date, _) => None,
        }
    }
}

fn parse_date(text: &str) -> Option<String> {
    if text.is_empty() {
        return Some(String::new());
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
        .ok()
        .map(|date| date.format(DATE_FORMAT).to_string())
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Flag(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(value as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Ordered mapping from field name to value.
///
/// Keeps insertion order; setting an existing name replaces the value in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
#[serde(into = "serde_json::Map<String, serde_json::Value>")]
pub struct FieldMap {
    entries: Vec<(String, FieldValue)>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Text value of `name`, or `""` when absent or not text.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        let pos = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for FieldMap {
    fn from(object: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut map = FieldMap::new();
        for (key, value) in object {
            let value = match value {
                serde_json::Value::Bool(b) => FieldValue::Flag(b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(n) => FieldValue::Number(n),
                    None => FieldValue::Text(n.to_string()),
                },
                serde_json::Value::String(s) => FieldValue::Text(s),
                serde_json::Value::Null => FieldValue::Text(String::new()),
                other => FieldValue::Text(other.to_string()),
            };
            map.set(key, value);
        }
        map
    }
}

impl From<FieldMap> for serde_json::Map<String, serde_json::Value> {
    fn from(map: FieldMap) -> Self {
        map.entries
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    FieldValue::Flag(b) => serde_json::Value::Bool(b),
                    FieldValue::Number(n) => serde_json::Value::from(n),
                    FieldValue::Text(s) => serde_json::Value::String(s),
                };
                (key, value)
            })
            .collect()
    }
}
