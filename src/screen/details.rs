//! Single-record forms: school particulars and the term details entered
//! below the class teacher assignments.

use crate::controller::RecordListController;
use crate::db::RecordRepository;
use crate::errors::{RegistryError, RegistryResult};
use crate::models::{FieldMap, FieldValue, RecordId};

use super::{Notice, Notifier};

/// A form editing the one record of its collection.
///
/// The stored values are loaded into the controller's draft; `save` writes
/// the draft back, creating the record on first save.
pub struct DetailsForm<'a, R, N> {
    controller: &'a mut RecordListController<R>,
    notifier: N,
    title: String,
}

impl<'a, R: RecordRepository, N: Notifier> DetailsForm<'a, R, N> {
    pub fn open(
        controller: &'a mut RecordListController<R>,
        notifier: N,
        title: impl Into<String>,
    ) -> RegistryResult<Self> {
        let mut form = Self {
            controller,
            notifier,
            title: title.into(),
        };
        form.reload()?;
        Ok(form)
    }

    pub fn controller(&self) -> &RecordListController<R> {
        &*self.controller
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Stored values; empty before the first save.
    pub fn stored(&self) -> RegistryResult<FieldMap> {
        Ok(self
            .controller
            .records()?
            .into_iter()
            .next()
            .map(|record| record.fields)
            .unwrap_or_default())
    }

    /// Discard unsaved edits.
    pub fn reload(&mut self) -> RegistryResult<()> {
        let stored = self.stored()?;
        self.controller.set_draft(stored);
        Ok(())
    }

    /// Value currently shown in `field`.
    pub fn value(&self, field: &str) -> &str {
        self.controller.draft().text(field)
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.controller.set_draft_field(name, value);
    }

    /// Pick a file for `field`. Without a file the current value stays.
    pub fn choose_file(&mut self, field: &str, file: Option<&str>) {
        match file.map(str::trim).filter(|f| !f.is_empty()) {
            Some(file) => self.controller.set_draft_field(field, file),
            None => tracing::debug!("No file chosen for {}; keeping current value", field),
        }
    }

    /// Write the form back to the store.
    pub fn save(&mut self) -> RegistryResult<RecordId> {
        let stored = self
            .controller
            .ids()
            .map_err(|err| self.report(err))?
            .first()
            .copied();

        let saved = match stored {
            Some(id) => self.controller.commit_draft_to(id).map(|()| id),
            None => self.controller.commit_draft(),
        };
        let id = saved.map_err(|err| self.report(err))?;

        self.reload()?;
        self.notifier
            .notify(Notice::info(format!("{} updated.", self.title)));
        Ok(id)
    }

    /// Close the form, handing back the stored values.
    pub fn close(&self) -> RegistryResult<FieldMap> {
        tracing::info!("Closing {} form", self.title);
        self.stored()
    }

    fn report(&self, err: RegistryError) -> RegistryError {
        tracing::warn!("{} rejected: {}", self.title, err);
        self.notifier
            .notify(Notice::error(err.user_message(&self.title.to_lowercase())));
        err
    }
}
