//! Examination Registry
//!
//! Boots the registry with the configured seed data and logs a summary of
//! every registration screen.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use exam_registry::config::Config;
use exam_registry::registry::{Registry, ScreenKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Examination Registry");
    tracing::info!("Seed mock data: {}", config.seed_mock_data);

    // Warn if no licence key is configured
    if config.license_key.is_none() {
        tracing::warn!(
            "No licence key configured (EXAM_REGISTRY_LICENSE_KEY). Authenticity check is disabled!"
        );
    }

    let registry = Registry::from_config(&config)?;
    if let Some(school) = registry
        .screen(ScreenKind::SchoolParticulars)
        .records()?
        .first()
    {
        tracing::info!("School: {}", school.text("school_name"));
    }
    tracing::info!("School licence number: {}", registry.license().license_number);

    for (kind, count) in registry.summary()? {
        tracing::info!("{}: {} record(s)", kind.title(), count);
    }

    let unassigned = registry
        .screen(ScreenKind::ClassTeachers)
        .records()?
        .iter()
        .filter(|r| registry.staff().find(r.text("teacher_id")).is_none())
        .count();
    tracing::info!("{} class(es) without a class teacher", unassigned);

    Ok(())
}
