//! In-memory repository backing one open screen.

use chrono::Utc;

use super::RecordRepository;
use crate::errors::RegistryResult;
use crate::models::{FieldMap, Record, RecordId};

/// Vec-backed repository keeping records in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    records: Vec<Record>,
    next_id: u64,
    revision: u64,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Repository pre-loaded with `rows`, ids assigned in order from 1.
    pub fn with_records(rows: impl IntoIterator<Item = FieldMap>) -> Self {
        let mut repo = Self::new();
        for fields in rows {
            repo.push(fields);
        }
        repo.revision = 0;
        repo
    }

    fn push(&mut self, fields: FieldMap) -> Record {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.revision += 1;

        let record = Record::new(id, fields);
        self.records.push(record.clone());
        record
    }
}

impl RecordRepository for InMemoryRepository {
    fn list(&self) -> RegistryResult<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: RecordId) -> RegistryResult<Option<Record>> {
        Ok(self.records.iter().find(|r| r.id == id).cloned())
    }

    fn insert(&mut self, fields: FieldMap) -> RegistryResult<Record> {
        let record = self.push(fields);
        tracing::debug!("Inserted record {}", record.id);
        Ok(record)
    }

    fn replace(&mut self, id: RecordId, fields: FieldMap) -> RegistryResult<Option<Record>> {
        let Some(record) = self.records.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        record.fields = fields;
        record.updated_at = Utc::now();
        self.revision += 1;

        tracing::debug!("Replaced record {}", id);
        Ok(Some(record.clone()))
    }

    fn remove(&mut self, ids: &[RecordId]) -> RegistryResult<usize> {
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id));
        let removed = before - self.records.len();

        if removed > 0 {
            self.revision += 1;
            tracing::debug!("Removed {} record(s)", removed);
        }
        Ok(removed)
    }

    fn len(&self) -> RegistryResult<usize> {
        Ok(self.records.len())
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
