//! Catalogue of registration screens and the registry that owns them.

mod screens;

pub use screens::*;

use crate::config::Config;
use crate::controller::RecordListController;
use crate::db::seed::{self, STAFF_OPTIONS};
use crate::db::{InMemoryRepository, RecordRepository};
use crate::errors::RegistryResult;
use crate::license::LicenseGate;
use crate::models::{FieldMap, Lookup};
use crate::screen::{DetailsForm, Notifier, RegistrationScreen};

/// Controller type backing every screen in the registry.
pub type ScreenController = RecordListController<InMemoryRepository>;

/// One controller per registration screen, plus the shared lookups.
pub struct Registry {
    screens: Vec<ScreenController>,
    class_details: ScreenController,
    staff: Lookup,
    license: LicenseGate,
}

impl Registry {
    /// Registry with every screen empty.
    pub fn empty(license: LicenseGate) -> Self {
        let screens = ScreenKind::ALL
            .iter()
            .map(|kind| RecordListController::new(kind.schema(), InMemoryRepository::new()))
            .collect();
        Self {
            screens,
            class_details: RecordListController::new(
                class_details_schema(),
                InMemoryRepository::new(),
            ),
            staff: Lookup::default(),
            license,
        }
    }

    /// Registry with every screen loaded from the built-in mock data.
    pub fn seeded(license: LicenseGate) -> RegistryResult<Self> {
        let mut screens = Vec::with_capacity(ScreenKind::ALL.len());
        for kind in ScreenKind::ALL {
            let schema = kind.schema();
            let rows: Vec<FieldMap> = kind
                .seed()?
                .iter()
                .map(|raw| schema.normalize(raw))
                .collect();
            let repo = InMemoryRepository::with_records(rows);
            tracing::debug!("Seeded {} with {} record(s)", kind.title(), repo.len()?);
            screens.push(RecordListController::new(schema, repo));
        }

        let details = class_details_schema();
        let rows: Vec<FieldMap> = seed::class_details()?
            .iter()
            .map(|raw| details.normalize(raw))
            .collect();
        let class_details =
            RecordListController::new(details, InMemoryRepository::with_records(rows));

        Ok(Self {
            screens,
            class_details,
            staff: STAFF_OPTIONS.clone(),
            license,
        })
    }

    pub fn from_config(config: &Config) -> RegistryResult<Self> {
        let license = LicenseGate::from_config(config);
        if config.seed_mock_data {
            Self::seeded(license)
        } else {
            Ok(Self::empty(license))
        }
    }

    pub fn screen(&self, kind: ScreenKind) -> &ScreenController {
        &self.screens[kind.index()]
    }

    pub fn screen_mut(&mut self, kind: ScreenKind) -> &mut ScreenController {
        &mut self.screens[kind.index()]
    }

    /// Open `kind` for interactive use with `notifier`.
    pub fn open<N: Notifier>(
        &mut self,
        kind: ScreenKind,
        notifier: N,
    ) -> RegistrationScreen<'_, InMemoryRepository, N> {
        tracing::debug!("Opening {}", kind.title());
        RegistrationScreen::new(&mut self.screens[kind.index()], notifier, kind.noun())
    }

    /// Open the school particulars form.
    pub fn open_particulars<N: Notifier>(
        &mut self,
        notifier: N,
    ) -> RegistryResult<DetailsForm<'_, InMemoryRepository, N>> {
        let kind = ScreenKind::SchoolParticulars;
        tracing::debug!("Opening {}", kind.title());
        DetailsForm::open(&mut self.screens[kind.index()], notifier, kind.title())
    }

    /// Open the term details (closing/opening dates, principal) saved with
    /// the class teacher assignments.
    pub fn open_class_details<N: Notifier>(
        &mut self,
        notifier: N,
    ) -> RegistryResult<DetailsForm<'_, InMemoryRepository, N>> {
        tracing::debug!("Opening class teacher school details");
        DetailsForm::open(&mut self.class_details, notifier, "School Details")
    }

    pub fn class_details(&self) -> &ScreenController {
        &self.class_details
    }

    /// Staff options for teacher assignment dropdowns.
    pub fn staff(&self) -> &Lookup {
        &self.staff
    }

    pub fn license(&self) -> &LicenseGate {
        &self.license
    }

    /// Record count per screen, in catalogue order.
    pub fn summary(&self) -> RegistryResult<Vec<(ScreenKind, usize)>> {
        ScreenKind::ALL
            .iter()
            .map(|kind| Ok((*kind, self.screen(*kind).len()?)))
            .collect()
    }
}
