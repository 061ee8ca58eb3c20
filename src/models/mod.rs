//! Data models for the examination registry.
//!
//! Records are schema-driven: every registration screen describes its fields
//! with a [`Schema`] and stores rows as ordered [`FieldMap`]s.

mod field;
mod lookup;
mod record;
mod schema;

pub use field::*;
pub use lookup::*;
pub use record::*;
pub use schema::*;
