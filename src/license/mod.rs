//! Authenticity (licence key) gate.
//!
//! Implements constant-time comparison to mitigate timing attacks.

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::{RegistryError, RegistryResult};

/// Department a licence unlocks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Department {
    #[default]
    Academics,
    Finance,
    Sms,
}

impl Department {
    pub const ALL: [Department; 3] = [Department::Academics, Department::Finance, Department::Sms];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Academics => "Academics",
            Department::Finance => "Finance",
            Department::Sms => "SMS",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Academics" => Some(Department::Academics),
            "Finance" => Some(Department::Finance),
            "SMS" => Some(Department::Sms),
            _ => None,
        }
    }
}

/// Vendor contact details shown on the authenticity screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VendorContact {
    pub phones: Vec<String>,
    pub email: String,
}

impl Default for VendorContact {
    fn default() -> Self {
        Self {
            phones: vec!["0721 158 433".to_string(), "0734 289 443".to_string()],
            email: "rolanschool@gmail.com".to_string(),
        }
    }
}

/// Checks authenticity keys against the configured licence.
#[derive(Debug, Clone)]
pub struct LicenseGate {
    expected_key: Option<String>,
    pub license_number: String,
    pub vendor: VendorContact,
}

impl LicenseGate {
    pub fn new(expected_key: Option<String>, license_number: impl Into<String>) -> Self {
        Self {
            expected_key,
            license_number: license_number.into(),
            vendor: VendorContact::default(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.license_key.clone(), config.license_number.clone())
    }

    /// Unlock `department` with `key`.
    pub fn unlock(&self, key: &str, department: Department) -> RegistryResult<Department> {
        // No key configured: every key unlocks (dev mode)
        let Some(expected) = &self.expected_key else {
            tracing::warn!(
                "No licence key configured; unlocking {} without a check",
                department.as_str()
            );
            return Ok(department);
        };

        if constant_time_compare(key.trim(), expected) {
            tracing::info!("Program unlocked for {}", department.as_str());
            Ok(department)
        } else {
            tracing::warn!("Authenticity check failed for {}", department.as_str());
            Err(RegistryError::InvalidLicenseKey)
        }
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> LicenseGate {
        LicenseGate::new(Some("ROLAN123".to_string()), "3914951853")
    }

    #[test]
    fn test_unlock_with_valid_key() {
        assert_eq!(
            gate().unlock(" ROLAN123 ", Department::Finance),
            Ok(Department::Finance)
        );
    }

    #[test]
    fn test_unlock_with_invalid_key() {
        assert_eq!(
            gate().unlock("rolan123", Department::Academics),
            Err(RegistryError::InvalidLicenseKey)
        );
    }

    #[test]
    fn test_unlock_without_configured_key() {
        let gate = LicenseGate::new(None, "3914951853");
        assert_eq!(gate.unlock("", Department::Sms), Ok(Department::Sms));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-key"));
        assert!(constant_time_compare("", ""));
    }

    #[test]
    fn test_department_names_round_trip() {
        for department in Department::ALL {
            assert_eq!(Department::parse(department.as_str()), Some(department));
        }
    }
}
