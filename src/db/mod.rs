//! Data-access layer for registration records.
//!
//! Controllers talk to storage only through [`RecordRepository`], so the
//! in-memory store used today can be replaced by a real backend without
//! touching controller logic.

mod repository;
pub mod seed;

pub use repository::*;

use crate::errors::RegistryResult;
use crate::models::{FieldMap, Record, RecordId};

/// Storage for one screen's ordered record collection.
pub trait RecordRepository {
    /// All records in insertion order.
    fn list(&self) -> RegistryResult<Vec<Record>>;

    /// Get a record by ID.
    fn get(&self, id: RecordId) -> RegistryResult<Option<Record>>;

    /// Append a record, assigning a fresh id that is never handed out again.
    fn insert(&mut self, fields: FieldMap) -> RegistryResult<Record>;

    /// Replace the fields of an existing record. `None` if the id is absent.
    fn replace(&mut self, id: RecordId, fields: FieldMap) -> RegistryResult<Option<Record>>;

    /// Remove every record whose id is in `ids`, returning how many went.
    fn remove(&mut self, ids: &[RecordId]) -> RegistryResult<usize>;

    /// Number of stored records.
    fn len(&self) -> RegistryResult<usize>;

    /// Monotonic counter bumped by every successful mutation.
    fn revision(&self) -> u64;
}
