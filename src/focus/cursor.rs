//! First / previous / next / last record navigation.

use crate::models::RecordId;

/// Position within an ordered id list, clamped at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordCursor {
    index: usize,
}

impl RecordCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Id under the cursor, if the list is non-empty.
    pub fn current(&self, ids: &[RecordId]) -> Option<RecordId> {
        ids.get(self.index.min(ids.len().saturating_sub(1))).copied()
    }

    pub fn first(&mut self, ids: &[RecordId]) -> Option<RecordId> {
        self.index = 0;
        ids.first().copied()
    }

    pub fn last(&mut self, ids: &[RecordId]) -> Option<RecordId> {
        self.index = ids.len().saturating_sub(1);
        ids.last().copied()
    }

    pub fn next(&mut self, ids: &[RecordId]) -> Option<RecordId> {
        if self.index + 1 < ids.len() {
            self.index += 1;
        }
        self.current(ids)
    }

    pub fn prev(&mut self, ids: &[RecordId]) -> Option<RecordId> {
        self.index = self.index.saturating_sub(1);
        self.current(ids)
    }

    pub fn at_start(&self) -> bool {
        self.index == 0
    }

    pub fn at_end(&self, ids: &[RecordId]) -> bool {
        self.index + 1 >= ids.len()
    }
}
