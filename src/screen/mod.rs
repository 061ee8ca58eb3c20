//! User-intent layer over a record-list controller.
//!
//! Screens forward operator actions to the controller and surface failures
//! through a [`Notifier`] supplied by the presentation code, so the core stays
//! free of any dialog mechanism.

mod details;
mod notifier;

pub use details::*;
pub use notifier::*;

use crate::controller::RecordListController;
use crate::db::RecordRepository;
use crate::errors::{RegistryError, RegistryResult};
use crate::models::{FieldValue, Lookup, Record, RecordId};

/// Field holding a student's photo reference.
pub const PHOTO_FIELD: &str = "photo_url";

/// One open registration screen.
pub struct RegistrationScreen<'a, R, N> {
    controller: &'a mut RecordListController<R>,
    notifier: N,
    noun: String,
}

impl<'a, R: RecordRepository, N: Notifier> RegistrationScreen<'a, R, N> {
    /// `noun` names one record in notices ("stream", "staff member").
    pub fn new(
        controller: &'a mut RecordListController<R>,
        notifier: N,
        noun: impl Into<String>,
    ) -> Self {
        Self {
            controller,
            notifier,
            noun: noun.into(),
        }
    }

    pub fn controller(&self) -> &RecordListController<R> {
        &*self.controller
    }

    pub fn controller_mut(&mut self) -> &mut RecordListController<R> {
        &mut *self.controller
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Commit the draft, reporting a failure to the operator.
    pub fn submit(&mut self) -> RegistryResult<RecordId> {
        self.controller
            .commit_draft()
            .map_err(|err| self.report(err))
    }

    /// Delete the targeted records after confirmation. A declined
    /// confirmation deletes nothing and returns `Ok(0)`.
    pub fn delete_selected(&mut self) -> RegistryResult<usize> {
        let count = self.controller.selected_ids().len();
        if count == 0 {
            return Err(self.report(RegistryError::SelectionEmpty));
        }

        let prompt = format!(
            "Are you sure you want to delete {} selected {}(s)?",
            count, self.noun
        );
        if !self.notifier.confirm(&prompt) {
            tracing::debug!("Delete of {} {}(s) cancelled", count, self.noun);
            return Ok(0);
        }

        let removed = self
            .controller
            .delete_selected()
            .map_err(|err| self.report(err))?;
        self.notifier
            .notify(Notice::info(format!("{} {}(s) deleted.", removed, self.noun)));
        Ok(removed)
    }

    /// Upper-case the given text fields of every targeted record.
    pub fn uppercase_selected(&mut self, fields: &[&str]) -> RegistryResult<usize> {
        let changed = self
            .controller
            .transform_selected(|current| {
                let mut out = current.clone();
                for name in fields {
                    if let Some(FieldValue::Text(text)) = current.get(name) {
                        out.set(*name, text.to_uppercase());
                    }
                }
                out
            })
            .map_err(|err| self.report(err))?;

        self.notifier.notify(Notice::info(format!(
            "{} {}(s) converted to uppercase.",
            changed, self.noun
        )));
        Ok(changed)
    }

    /// Names (from `name_field`) of the targeted records, for printing.
    pub fn print_selected(&self, name_field: &str) -> RegistryResult<Vec<String>> {
        let records = self
            .controller
            .selected_records()
            .map_err(|err| self.report(err))?;
        if records.is_empty() {
            tracing::warn!("{} print with nothing selected", self.controller.schema().screen);
            self.notifier.notify(Notice::error(format!(
                "Please select at least one {} to print.",
                self.noun
            )));
            return Err(RegistryError::SelectionEmpty);
        }

        let names: Vec<String> = records
            .iter()
            .map(|r| r.text(name_field).to_string())
            .collect();
        self.notifier
            .notify(Notice::info(format!("Printing: {}", names.join(", "))));
        Ok(names)
    }

    /// Store `option_id` in `id_field` and, when given, the option's
    /// initials in `initials_field`. Unknown ids are stored as-is.
    pub fn assign_option(
        &mut self,
        id: RecordId,
        id_field: &str,
        initials_field: Option<&str>,
        option_id: &str,
        lookup: &Lookup,
    ) -> RegistryResult<()> {
        self.controller
            .update(id, id_field, option_id)
            .map_err(|err| self.report(err))?;
        if let Some(initials_field) = initials_field {
            self.controller
                .update(id, initials_field, lookup.initials(option_id))
                .map_err(|err| self.report(err))?;
        }
        tracing::debug!(
            "Assigned {} to {} {}",
            lookup.label_or_none(option_id),
            self.noun,
            id
        );
        Ok(())
    }

    /// Set or clear a record's photo. No file selected clears the photo.
    pub fn set_photo(&mut self, id: RecordId, file: Option<&str>) -> RegistryResult<()> {
        let value = file.map(str::trim).unwrap_or_default();
        self.controller
            .update(id, PHOTO_FIELD, value)
            .map_err(|err| self.report(err))
    }

    /// Close the screen, handing back its records.
    pub fn close(&self) -> RegistryResult<Vec<Record>> {
        tracing::info!("Closing {} form", self.controller.schema().screen);
        self.controller.records()
    }

    fn report(&self, err: RegistryError) -> RegistryError {
        tracing::warn!("{} rejected: {}", self.controller.schema().screen, err);
        self.notifier
            .notify(Notice::error(err.user_message(&self.noun)));
        err
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::db::InMemoryRepository;
    use crate::models::{FieldMap, FieldSpec, LookupOption, Schema, SelectionMode};

    /// Notifier recording every notice and answering confirmations with a
    /// fixed reply.
    #[derive(Default)]
    struct RecordingNotifier {
        answer: Cell<bool>,
        prompts: RefCell<Vec<String>>,
        notices: RefCell<Vec<Notice>>,
    }

    impl RecordingNotifier {
        fn answering(answer: bool) -> Self {
            let notifier = Self::default();
            notifier.answer.set(answer);
            notifier
        }

        fn last(&self) -> Option<Notice> {
            self.notices.borrow().last().cloned()
        }
    }

    impl Notifier for RecordingNotifier {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer.get()
        }

        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }
    }

    fn open<'a>(
        ctl: &'a mut RecordListController<InMemoryRepository>,
        answer: bool,
        noun: &str,
    ) -> RegistrationScreen<'a, InMemoryRepository, RecordingNotifier> {
        RegistrationScreen::new(ctl, RecordingNotifier::answering(answer), noun)
    }

    fn streams() -> RecordListController<InMemoryRepository> {
        let schema = Schema::new("Streams").field(FieldSpec::text("name").required().unique());
        let repo = InMemoryRepository::with_records(vec![
            FieldMap::new().with("name", "Green"),
            FieldMap::new().with("name", "White"),
        ]);
        RecordListController::new(schema, repo)
    }

    #[test]
    fn test_submit_duplicate_notifies() {
        let mut ctl = streams();
        let mut screen = open(&mut ctl, true, "stream");
        screen.controller_mut().set_draft_field("name", "GREEN");

        assert!(screen.submit().is_err());
        assert_eq!(
            screen.notifier().last(),
            Some(Notice::error("Stream with this name already exists!"))
        );
        assert_eq!(screen.controller().draft().text("name"), "GREEN");
    }

    #[test]
    fn test_delete_without_selection_prompts() {
        let mut ctl = streams();
        let mut screen = open(&mut ctl, true, "stream");

        assert_eq!(screen.delete_selected(), Err(RegistryError::SelectionEmpty));
        assert_eq!(
            screen.notifier().last(),
            Some(Notice::error("Please select a stream first."))
        );
        assert!(screen.notifier().prompts.borrow().is_empty());
    }

    #[test]
    fn test_declined_confirmation_keeps_records() {
        let mut ctl = streams();
        ctl.toggle_select(RecordId(1)).unwrap();
        let mut screen = open(&mut ctl, false, "stream");

        assert_eq!(screen.delete_selected(), Ok(0));
        assert_eq!(screen.controller().len().unwrap(), 2);
        assert_eq!(
            screen.notifier().prompts.borrow()[0],
            "Are you sure you want to delete 1 selected stream(s)?"
        );
    }

    #[test]
    fn test_confirmed_delete_reports_count() {
        let mut ctl = streams();
        ctl.toggle_select(RecordId(2)).unwrap();
        let mut screen = open(&mut ctl, true, "stream");

        assert_eq!(screen.delete_selected(), Ok(1));
        assert_eq!(
            screen.notifier().last(),
            Some(Notice::info("1 stream(s) deleted."))
        );
        assert_eq!(screen.close().unwrap().len(), 1);
    }

    #[test]
    fn test_uppercase_selected() {
        let schema = Schema::new("Subjects")
            .field(FieldSpec::text("abr").required())
            .field(FieldSpec::text("name").required());
        let repo = InMemoryRepository::with_records(vec![FieldMap::new()
            .with("abr", "eng")
            .with("name", "english")]);
        let mut ctl = RecordListController::new(schema, repo);
        ctl.toggle_select(RecordId(1)).unwrap();
        let mut screen = open(&mut ctl, true, "subject");

        assert_eq!(screen.uppercase_selected(&["abr", "name"]), Ok(1));
        let record = screen.controller().get(RecordId(1)).unwrap().unwrap();
        assert_eq!(record.text("abr"), "ENG");
        assert_eq!(record.text("name"), "ENGLISH");
    }

    fn staff() -> RecordListController<InMemoryRepository> {
        let schema = Schema::new("Staff Details")
            .field(FieldSpec::text("code").required().unique())
            .field(FieldSpec::text("name").required())
            .selection(SelectionMode::Multi);
        let repo = InMemoryRepository::with_records(vec![
            FieldMap::new().with("code", "001").with("name", "Norah Mulusa"),
            FieldMap::new().with("code", "002").with("name", "Jacob Khisa"),
            FieldMap::new().with("code", "003").with("name", "Ruth Njoroge"),
        ]);
        RecordListController::new(schema, repo)
    }

    #[test]
    fn test_print_without_selection() {
        let mut ctl = staff();
        ctl.toggle_select(RecordId(1)).unwrap();
        let screen = open(&mut ctl, true, "staff member");

        assert_eq!(
            screen.print_selected("name"),
            Err(RegistryError::SelectionEmpty)
        );
        assert_eq!(
            screen.notifier().last(),
            Some(Notice::error("Please select at least one staff member to print."))
        );
    }

    #[test]
    fn test_print_lists_checked_names() {
        let mut ctl = staff();
        ctl.toggle_include(RecordId(3)).unwrap();
        ctl.toggle_include(RecordId(1)).unwrap();
        let screen = open(&mut ctl, true, "staff member");

        assert_eq!(
            screen.print_selected("name").unwrap(),
            vec!["Norah Mulusa", "Ruth Njoroge"]
        );
        assert_eq!(
            screen.notifier().last(),
            Some(Notice::info("Printing: Norah Mulusa, Ruth Njoroge"))
        );
    }

    #[test]
    fn test_assign_option_fills_initials() {
        let schema = Schema::new("Subject Teachers")
            .field(FieldSpec::text("sub_code").required())
            .field(FieldSpec::text("staff_id"))
            .field(FieldSpec::text("initials"));
        let repo = InMemoryRepository::with_records(vec![FieldMap::new().with("sub_code", "101")]);
        let mut ctl = RecordListController::new(schema, repo);
        let mut screen = open(&mut ctl, true, "assignment");
        let lookup = Lookup::new(vec![LookupOption {
            id: "stf002".to_string(),
            label: "Nyongesa Peter".to_string(),
            initials: "P.N".to_string(),
        }]);

        screen
            .assign_option(RecordId(1), "staff_id", Some("initials"), "stf002", &lookup)
            .unwrap();

        let record = screen.controller().get(RecordId(1)).unwrap().unwrap();
        assert_eq!(record.text("staff_id"), "stf002");
        assert_eq!(record.text("initials"), "P.N");
    }

    #[test]
    fn test_no_photo_file_clears_photo() {
        let schema = Schema::new("Students")
            .field(FieldSpec::text("adm_no").required())
            .field(FieldSpec::text(PHOTO_FIELD));
        let repo = InMemoryRepository::with_records(vec![FieldMap::new()
            .with("adm_no", "1001")
            .with(PHOTO_FIELD, "photos/1001.png")]);
        let mut ctl = RecordListController::new(schema, repo);
        let mut screen = open(&mut ctl, true, "student");

        screen.set_photo(RecordId(1), None).unwrap();

        let record = screen.controller().get(RecordId(1)).unwrap().unwrap();
        assert_eq!(record.text(PHOTO_FIELD), "");
    }

    #[test]
    fn test_missing_record_reports_not_found() {
        let mut ctl = streams();
        let mut screen = open(&mut ctl, true, "stream");
        assert_eq!(
            screen.set_photo(RecordId(9), Some("x.png")),
            Err(RegistryError::NotFound(RecordId(9)))
        );
        assert_eq!(
            screen.notifier().last(),
            Some(Notice::error("The selected stream no longer exists."))
        );
    }
}
