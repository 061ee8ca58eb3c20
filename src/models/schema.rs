//! Per-screen field schemas.

use serde::{Deserialize, Serialize};

use super::{FieldKind, FieldMap, FieldValue};

/// Which selection mechanism bulk actions (delete, transform) target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    /// Row highlight: at most one record.
    #[default]
    Single,
    /// Per-row checkbox: any number of records.
    Multi,
}

/// Constraints for one field of a screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub unique: bool,
    /// Text is stored upper-cased.
    #[serde(default)]
    pub uppercase: bool,
    /// Allowed values of a choice field; empty means any value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            unique: false,
            uppercase: false,
            options: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Flag)
    }

    pub fn date(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Date)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    /// Restrict the field to a fixed list, as a dropdown does.
    pub fn one_of<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a prepared value is one of the allowed options.
    pub fn allows(&self, value: &FieldValue) -> bool {
        self.options.is_empty()
            || value
                .as_str()
                .map(|s| self.options.iter().any(|option| option == s))
                .unwrap_or(false)
    }

    /// Coerces a raw value to this field's kind and applies text
    /// normalisation. `None` when a number field holds non-numeric text.
    pub fn prepare(&self, value: FieldValue) -> Option<FieldValue> {
        let value = value.coerce(self.kind)?;
        match value {
            FieldValue::Text(s) if self.uppercase => Some(FieldValue::Text(s.to_uppercase())),
            other => Some(other),
        }
    }
}

/// The field layout and selection behaviour of one registration screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub screen: String,
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub selection: SelectionMode,
}

impl Schema {
    pub fn new(screen: impl Into<String>) -> Self {
        Self {
            screen: screen.into(),
            fields: Vec::new(),
            selection: SelectionMode::Single,
        }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    pub fn selection(mut self, mode: SelectionMode) -> Self {
        self.selection = mode;
        self
    }

    pub fn spec(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|spec| spec.name.as_str())
    }

    /// Stored value of `name`, or its kind default when the record leaves
    /// the field out.
    pub fn value_or_default(&self, fields: &FieldMap, name: &str) -> Option<FieldValue> {
        let spec = self.spec(name)?;
        Some(
            fields
                .get(name)
                .cloned()
                .unwrap_or_else(|| spec.kind.default_value()),
        )
    }

    /// Lays `raw` out in schema order with every value prepared.
    ///
    /// Missing fields and unparseable numbers take the kind default; fields
    /// the schema does not know are kept after the schema fields.
    pub fn normalize(&self, raw: &FieldMap) -> FieldMap {
        let mut out = FieldMap::new();
        for spec in &self.fields {
            let value = raw
                .get(&spec.name)
                .cloned()
                .and_then(|value| spec.prepare(value))
                .unwrap_or_else(|| spec.kind.default_value());
            out.set(spec.name.clone(), value);
        }
        for (name, value) in raw.iter() {
            if self.spec(name).is_none() {
                out.set(name, value.clone());
            }
        }
        out
    }
}
