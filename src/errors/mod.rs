//! Error handling module for the examination registry.
//!
//! Every controller operation returns a typed [`RegistryError`]; the screen
//! layer decides how to present it.

use crate::models::RecordId;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const MISSING_REQUIRED_FIELD: &str = "MISSING_REQUIRED_FIELD";
    pub const DUPLICATE_VALUE: &str = "DUPLICATE_VALUE";
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const SELECTION_EMPTY: &str = "SELECTION_EMPTY";
    pub const INVALID_LICENSE_KEY: &str = "INVALID_LICENSE_KEY";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
}

/// Registry error type. All variants are recoverable input errors except
/// `Storage`, which a real repository backend may raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required field was empty after trimming
    MissingRequiredField { field: String },
    /// A unique field matched an existing record, ignoring case
    DuplicateValue { field: String, value: String },
    /// Entered text could not be read as the field's kind or is not one of
    /// its allowed options
    InvalidValue { field: String, value: String },
    /// No record with this id
    NotFound(RecordId),
    /// A bulk action was requested with nothing selected
    SelectionEmpty,
    /// The authenticity key did not match
    InvalidLicenseKey,
    /// Repository failure
    Storage(String),
}

impl RegistryError {
    pub fn missing(field: impl Into<String>) -> Self {
        RegistryError::MissingRequiredField {
            field: field.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        RegistryError::DuplicateValue {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        RegistryError::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            RegistryError::MissingRequiredField { .. } => codes::MISSING_REQUIRED_FIELD,
            RegistryError::DuplicateValue { .. } => codes::DUPLICATE_VALUE,
            RegistryError::InvalidValue { .. } => codes::INVALID_VALUE,
            RegistryError::NotFound(_) => codes::NOT_FOUND,
            RegistryError::SelectionEmpty => codes::SELECTION_EMPTY,
            RegistryError::InvalidLicenseKey => codes::INVALID_LICENSE_KEY,
            RegistryError::Storage(_) => codes::STORAGE_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            RegistryError::MissingRequiredField { field } => {
                format!("Field '{}' is required", field)
            }
            RegistryError::DuplicateValue { field, value } => {
                format!("Value '{}' for field '{}' already exists", value, field)
            }
            RegistryError::InvalidValue { field, value } => {
                format!("Value '{}' is not valid for field '{}'", value, field)
            }
            RegistryError::NotFound(id) => format!("Record {} not found", id),
            RegistryError::SelectionEmpty => "No records selected".to_string(),
            RegistryError::InvalidLicenseKey => "Invalid authenticity key".to_string(),
            RegistryError::Storage(msg) => msg.clone(),
        }
    }

    /// Notice shown to the operator. `noun` names the screen's record type
    /// ("stream", "staff member").
    pub fn user_message(&self, noun: &str) -> String {
        match self {
            RegistryError::MissingRequiredField { field } => {
                format!("Please fill in the {} field.", field)
            }
            RegistryError::DuplicateValue { field, .. } => {
                format!("{} with this {} already exists!", capitalize(noun), field)
            }
            RegistryError::InvalidValue { field, value } => {
                format!("'{}' is not a valid {}.", value, field)
            }
            RegistryError::NotFound(_) => format!("The selected {} no longer exists.", noun),
            RegistryError::SelectionEmpty => format!("Please select a {} first.", noun),
            RegistryError::InvalidLicenseKey => {
                "Invalid Authenticity Key. Please contact the vendor.".to_string()
            }
            RegistryError::Storage(_) => format!("Could not save the {}.", noun),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for RegistryError {}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("Fixture error: {:?}", err);
        RegistryError::Storage(format!("Fixture error: {}", err))
    }
}

/// Result alias used throughout the crate.
pub type RegistryResult<T> = Result<T, RegistryError>;
