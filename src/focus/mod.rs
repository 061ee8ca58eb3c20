//! Keyboard focus chaining, expressed as pure functions over the ordered
//! record list.
//!
//! Pressing Enter in a form moves focus to the next editable element: draft
//! fields in order (the last one commits the draft), then row cells left to
//! right and top to bottom, then the trailing controls of the screen.

mod cursor;

pub use cursor::*;

use serde::{Deserialize, Serialize};

use crate::models::RecordId;

/// An element that can hold keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum FocusTarget {
    /// Input for a field of the new-record draft.
    Draft { field: String },
    /// Inline editor of a field in an existing row.
    Cell { id: RecordId, field: String },
    /// A control after the table (date input, button...).
    Action { name: String },
}

impl FocusTarget {
    pub fn draft(field: impl Into<String>) -> Self {
        FocusTarget::Draft {
            field: field.into(),
        }
    }

    pub fn cell(id: RecordId, field: impl Into<String>) -> Self {
        FocusTarget::Cell {
            id,
            field: field.into(),
        }
    }

    pub fn action(name: impl Into<String>) -> Self {
        FocusTarget::Action { name: name.into() }
    }
}

/// Result of advancing focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusStep {
    Move(FocusTarget),
    /// The draft is complete: commit it, then focus `then`.
    CommitDraft { then: FocusTarget },
}

/// The focus order of one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusChain {
    pub draft_fields: Vec<String>,
    pub cell_fields: Vec<String>,
    pub actions: Vec<String>,
}

impl FocusChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.draft_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn cell_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cell_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }

    /// Where focus lands when the screen opens.
    pub fn entry(&self, records: &[RecordId]) -> Option<FocusTarget> {
        if let Some(field) = self.draft_fields.first() {
            return Some(FocusTarget::draft(field.as_str()));
        }
        if let Some(cell) = self.first_cell(records) {
            return Some(cell);
        }
        self.actions.first().map(|name| FocusTarget::action(name.as_str()))
    }

    /// Next focus target after Enter on `current`.
    pub fn advance(&self, records: &[RecordId], current: &FocusTarget) -> FocusStep {
        match current {
            FocusTarget::Draft { field } => self.after_draft(records, field),
            FocusTarget::Cell { id, field } => self.after_cell(records, *id, field),
            FocusTarget::Action { name } => match self.actions.iter().position(|a| a == name) {
                Some(pos) if pos + 1 < self.actions.len() => {
                    FocusStep::Move(FocusTarget::action(self.actions[pos + 1].as_str()))
                }
                Some(_) => FocusStep::Move(current.clone()),
                None => self.restart(records, current),
            },
        }
    }

    fn after_draft(&self, records: &[RecordId], field: &str) -> FocusStep {
        let Some(pos) = self.draft_fields.iter().position(|f| f == field) else {
            return self.restart(records, &FocusTarget::draft(field));
        };
        if pos + 1 < self.draft_fields.len() {
            return FocusStep::Move(FocusTarget::draft(self.draft_fields[pos + 1].as_str()));
        }
        FocusStep::CommitDraft {
            then: FocusTarget::draft(self.draft_fields[0].as_str()),
        }
    }

    fn after_cell(&self, records: &[RecordId], id: RecordId, field: &str) -> FocusStep {
        let row = records.iter().position(|r| *r == id);
        let col = self.cell_fields.iter().position(|f| f == field);
        let (Some(row), Some(col)) = (row, col) else {
            return self.restart(records, &FocusTarget::cell(id, field));
        };

        if col + 1 < self.cell_fields.len() {
            return FocusStep::Move(FocusTarget::cell(id, self.cell_fields[col + 1].as_str()));
        }
        if row + 1 < records.len() {
            return FocusStep::Move(FocusTarget::cell(
                records[row + 1],
                self.cell_fields[0].as_str(),
            ));
        }
        match self.actions.first() {
            Some(name) => FocusStep::Move(FocusTarget::action(name.as_str())),
            None => FocusStep::Move(FocusTarget::cell(id, field)),
        }
    }

    /// Focus on an element that is no longer part of the chain (e.g. its row
    /// was deleted) goes back to the entry point.
    fn restart(&self, records: &[RecordId], current: &FocusTarget) -> FocusStep {
        FocusStep::Move(self.entry(records).unwrap_or_else(|| current.clone()))
    }

    fn first_cell(&self, records: &[RecordId]) -> Option<FocusTarget> {
        let id = records.first()?;
        let field = self.cell_fields.first()?;
        Some(FocusTarget::cell(*id, field.as_str()))
    }
}
