//! Static lookup lists used by assignment screens.

use serde::{Deserialize, Serialize};

/// Label shown when an assignment has no matching option.
pub const NO_ASSIGNMENT: &str = "None";

/// One selectable option, e.g. a staff member in a teacher dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LookupOption {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub initials: String,
}

/// An id -> label list. Assignments store the id as a free-floating string;
/// nothing keeps it in sync with this list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Lookup {
    options: Vec<LookupOption>,
}

impl Lookup {
    pub fn new(options: Vec<LookupOption>) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &[LookupOption] {
        &self.options
    }

    pub fn find(&self, id: &str) -> Option<&LookupOption> {
        if id.is_empty() {
            return None;
        }
        self.options.iter().find(|option| option.id == id)
    }

    /// Label for `id`, or [`NO_ASSIGNMENT`] for empty or unknown ids.
    pub fn label_or_none(&self, id: &str) -> &str {
        self.find(id)
            .map(|option| option.label.as_str())
            .unwrap_or(NO_ASSIGNMENT)
    }

    /// Initials for `id`, or `""`.
    pub fn initials(&self, id: &str) -> &str {
        self.find(id)
            .map(|option| option.initials.as_str())
            .unwrap_or("")
    }
}
