//! Configuration module for the examination registry.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Seed screens with the built-in mock data
    pub seed_mock_data: bool,
    /// Expected authenticity key; `None` disables the check
    pub license_key: Option<String>,
    /// School licence number shown on the authenticity screen
    pub license_number: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let log_level = env::var("EXAM_REGISTRY_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let seed_mock_data = match env::var("EXAM_REGISTRY_SEED") {
            Ok(value) => parse_bool(&value).unwrap_or_else(|| {
                tracing::warn!("Invalid EXAM_REGISTRY_SEED value {:?}, seeding anyway", value);
                true
            }),
            Err(_) => true,
        };

        let license_key = env::var("EXAM_REGISTRY_LICENSE_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let license_number = env::var("EXAM_REGISTRY_LICENSE_NUMBER")
            .unwrap_or_else(|_| "3914951853".to_string());

        Self {
            log_level,
            seed_mock_data,
            license_key,
            license_number,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
