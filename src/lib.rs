//! Examination Registry
//!
//! Registration core of a school examination management application: every
//! registration screen (streams, houses, staff, subjects, teacher assignment,
//! students, examination types) is a schema-configured record list driven by
//! one generic controller.

pub mod config;
pub mod controller;
pub mod db;
pub mod errors;
pub mod focus;
pub mod license;
pub mod models;
pub mod registry;
pub mod screen;

pub use controller::{RecordFilter, RecordListController};
pub use db::{InMemoryRepository, RecordRepository};
pub use errors::{RegistryError, RegistryResult};
pub use models::{FieldMap, FieldSpec, FieldValue, Record, RecordId, Schema, SelectionMode};
pub use registry::{Registry, ScreenKind};
