//! Generic record-list controller shared by every registration screen.
//!
//! The controller owns the draft buffer and the selection state; records live
//! behind an injected [`RecordRepository`]. Every operation runs to completion
//! before returning and mutating methods take `&mut self`, so there is exactly
//! one writer at a time.

mod filter;

pub use filter::*;

use std::collections::BTreeSet;

use crate::db::RecordRepository;
use crate::errors::{RegistryError, RegistryResult};
use crate::models::{FieldKind, FieldMap, FieldValue, Record, RecordId, Schema, SelectionMode};

/// Add / edit / select / delete over one ordered record collection.
#[derive(Debug)]
pub struct RecordListController<R> {
    schema: Schema,
    repo: R,
    draft: FieldMap,
    highlighted: Option<RecordId>,
    included: BTreeSet<RecordId>,
}

impl<R: RecordRepository> RecordListController<R> {
    pub fn new(schema: Schema, repo: R) -> Self {
        Self {
            schema,
            repo,
            draft: FieldMap::new(),
            highlighted: None,
            included: BTreeSet::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// All records in insertion order.
    pub fn records(&self) -> RegistryResult<Vec<Record>> {
        self.repo.list()
    }

    pub fn get(&self, id: RecordId) -> RegistryResult<Option<Record>> {
        self.repo.get(id)
    }

    pub fn ids(&self) -> RegistryResult<Vec<RecordId>> {
        Ok(self.repo.list()?.into_iter().map(|r| r.id).collect())
    }

    pub fn len(&self) -> RegistryResult<usize> {
        self.repo.len()
    }

    pub fn is_empty(&self) -> RegistryResult<bool> {
        Ok(self.repo.len()? == 0)
    }

    /// Repository revision; changes whenever the collection changes.
    pub fn revision(&self) -> u64 {
        self.repo.revision()
    }

    /// Records matching `filter`, in insertion order.
    pub fn filtered(&self, filter: &RecordFilter) -> RegistryResult<Vec<Record>> {
        Ok(self
            .repo
            .list()?
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }

    // ==================== DRAFT ====================

    pub fn draft(&self) -> &FieldMap {
        &self.draft
    }

    pub fn set_draft_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.draft.set(name, value);
    }

    pub fn clear_draft(&mut self) {
        self.draft = FieldMap::new();
    }

    /// Replace the draft buffer without committing it.
    pub fn set_draft(&mut self, draft: FieldMap) {
        self.draft = draft;
    }

    /// Load `draft` into the buffer and commit it.
    pub fn add(&mut self, draft: FieldMap) -> RegistryResult<RecordId> {
        self.draft = draft;
        self.commit_draft()
    }

    /// Validate the draft buffer and append it as a new record.
    ///
    /// On failure the buffer and the collection are left untouched.
    pub fn commit_draft(&mut self) -> RegistryResult<RecordId> {
        let existing = self.repo.list()?;
        let fields = match self.validate_draft(&existing) {
            Ok(fields) => fields,
            Err(err) => {
                tracing::debug!("Rejected {} draft: {}", self.schema.screen, err);
                return Err(err);
            }
        };

        let record = self.repo.insert(fields)?;
        self.draft = FieldMap::new();
        self.clear_selection();

        tracing::debug!("Added {} record {}", self.schema.screen, record.id);
        Ok(record.id)
    }

    /// Checks the draft and returns the fields to store, in draft order.
    ///
    /// Known fields are trimmed and coerced; fields the draft leaves out stay
    /// out (read them through [`Schema::value_or_default`]).
    fn validate_draft(&self, existing: &[Record]) -> RegistryResult<FieldMap> {
        for spec in &self.schema.fields {
            let raw = match self.draft.get(&spec.name) {
                Some(raw) if !raw.is_blank() => raw,
                _ if spec.required => return Err(RegistryError::missing(&spec.name)),
                _ => continue,
            };
            match spec.prepare(raw.clone()) {
                Some(value) if spec.allows(&value) => {}
                _ => return Err(RegistryError::invalid(&spec.name, entered(raw))),
            }
        }

        let mut fields = FieldMap::new();
        for (name, raw) in self.draft.iter() {
            let value = match self.schema.spec(name) {
                Some(spec) => spec.prepare(raw.clone()),
                None => Some(raw.clone()),
            };
            if let Some(value) = value {
                fields.set(name, value);
            }
        }

        for spec in self.schema.fields.iter().filter(|s| s.unique) {
            let Some(value) = fields.get(&spec.name) else {
                continue;
            };
            if value.is_blank() {
                continue;
            }
            let key = value.match_key();
            let taken = existing.iter().any(|r| {
                r.fields
                    .get(&spec.name)
                    .map(|v| v.match_key() == key)
                    .unwrap_or(false)
            });
            if taken {
                let typed = self.draft.get(&spec.name).map(entered).unwrap_or_default();
                return Err(RegistryError::duplicate(&spec.name, typed));
            }
        }

        Ok(fields)
    }

    /// Validate the draft buffer and store it over record `id`.
    ///
    /// Uniqueness is checked against every other record. On failure the
    /// buffer and the collection are left untouched.
    pub fn commit_draft_to(&mut self, id: RecordId) -> RegistryResult<()> {
        let others: Vec<Record> = self
            .repo
            .list()?
            .into_iter()
            .filter(|r| r.id != id)
            .collect();
        let fields = self.validate_draft(&others)?;

        self.repo
            .replace(id, fields)?
            .ok_or(RegistryError::NotFound(id))?;
        self.draft = FieldMap::new();

        tracing::debug!("Saved {} record {}", self.schema.screen, id);
        Ok(())
    }

    // ==================== EDIT ====================

    /// Replace one field of a record. Only the id is checked.
    ///
    /// Text is stored as entered; other kinds are coerced, falling back to
    /// the kind default when the text cannot be read.
    pub fn update(
        &mut self,
        id: RecordId,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> RegistryResult<()> {
        let mut record = self.repo.get(id)?.ok_or(RegistryError::NotFound(id))?;

        let value = value.into();
        let value = match self.schema.spec(field) {
            Some(spec) if spec.kind == FieldKind::Text && value.as_str().is_some() => value,
            Some(spec) => value
                .coerce(spec.kind)
                .unwrap_or_else(|| spec.kind.default_value()),
            None => value,
        };
        record.fields.set(field, value);

        self.repo
            .replace(id, record.fields)?
            .ok_or(RegistryError::NotFound(id))?;
        Ok(())
    }

    /// Apply a pure transform to every targeted record.
    pub fn transform_selected<F>(&mut self, transform: F) -> RegistryResult<usize>
    where
        F: Fn(&FieldMap) -> FieldMap,
    {
        let targets = self.selected_ids();
        if targets.is_empty() {
            return Err(RegistryError::SelectionEmpty);
        }

        let mut changed = 0;
        for id in targets {
            let Some(record) = self.repo.get(id)? else {
                continue;
            };
            if self.repo.replace(id, transform(&record.fields))?.is_some() {
                changed += 1;
            }
        }

        tracing::debug!("Transformed {} {} record(s)", changed, self.schema.screen);
        Ok(changed)
    }

    // ==================== SELECTION ====================

    /// Single-select highlight toggle. Returns whether `id` is now highlighted.
    pub fn toggle_select(&mut self, id: RecordId) -> RegistryResult<bool> {
        self.ensure_present(id)?;
        if self.highlighted == Some(id) {
            self.highlighted = None;
            Ok(false)
        } else {
            self.highlighted = Some(id);
            Ok(true)
        }
    }

    /// Flip membership of `id` in the inclusion set. Returns whether `id` is
    /// now included.
    pub fn toggle_include(&mut self, id: RecordId) -> RegistryResult<bool> {
        self.ensure_present(id)?;
        if self.included.remove(&id) {
            Ok(false)
        } else {
            self.included.insert(id);
            Ok(true)
        }
    }

    /// Include every record.
    pub fn include_all(&mut self) -> RegistryResult<()> {
        self.included = self.ids()?.into_iter().collect();
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.highlighted = None;
        self.included.clear();
    }

    pub fn highlighted(&self) -> Option<RecordId> {
        self.highlighted
    }

    pub fn included(&self) -> Vec<RecordId> {
        self.included.iter().copied().collect()
    }

    /// Ids targeted by bulk actions under the schema's selection mode.
    pub fn selected_ids(&self) -> Vec<RecordId> {
        match self.schema.selection {
            SelectionMode::Single => self.highlighted.into_iter().collect(),
            SelectionMode::Multi => self.included(),
        }
    }

    /// Targeted records, in record order.
    pub fn selected_records(&self) -> RegistryResult<Vec<Record>> {
        let targets = self.selected_ids();
        Ok(self
            .repo
            .list()?
            .into_iter()
            .filter(|r| targets.contains(&r.id))
            .collect())
    }

    fn ensure_present(&self, id: RecordId) -> RegistryResult<()> {
        match self.repo.get(id)? {
            Some(_) => Ok(()),
            None => Err(RegistryError::NotFound(id)),
        }
    }

    // ==================== DELETE ====================

    /// Remove a single record.
    pub fn delete(&mut self, id: RecordId) -> RegistryResult<()> {
        if self.repo.remove(&[id])? == 0 {
            return Err(RegistryError::NotFound(id));
        }
        if self.highlighted == Some(id) {
            self.highlighted = None;
        }
        self.included.remove(&id);

        tracing::debug!("Deleted {} record {}", self.schema.screen, id);
        Ok(())
    }

    /// Remove every targeted record and clear the selection.
    pub fn delete_selected(&mut self) -> RegistryResult<usize> {
        let targets = self.selected_ids();
        if targets.is_empty() {
            return Err(RegistryError::SelectionEmpty);
        }

        let removed = self.repo.remove(&targets)?;
        self.clear_selection();

        tracing::debug!("Deleted {} {} record(s)", removed, self.schema.screen);
        Ok(removed)
    }
}

/// A draft value as the operator typed it, minus surrounding blanks.
fn entered(value: &FieldValue) -> String {
    value.to_string().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryRepository;
    use crate::models::FieldSpec;

    fn streams() -> RecordListController<InMemoryRepository> {
        let schema = Schema::new("Streams").field(FieldSpec::text("name").required().unique());
        RecordListController::new(schema, InMemoryRepository::new())
    }

    fn staff() -> RecordListController<InMemoryRepository> {
        let schema = Schema::new("Staff")
            .field(FieldSpec::text("code").required().unique())
            .field(FieldSpec::text("name").required())
            .field(FieldSpec::text("initials").required())
            .field(FieldSpec::text("password"))
            .field(FieldSpec::flag("all_checked"))
            .selection(SelectionMode::Multi);
        RecordListController::new(schema, InMemoryRepository::new())
    }

    fn staff_draft(code: &str, name: &str) -> FieldMap {
        FieldMap::new()
            .with("code", code)
            .with("name", name)
            .with("initials", "X.Y")
    }

    fn names(ctl: &RecordListController<InMemoryRepository>) -> Vec<String> {
        ctl.records()
            .unwrap()
            .iter()
            .map(|r| r.text("name").to_string())
            .collect()
    }

    #[test]
    fn test_add_stores_trimmed_draft() {
        let mut ctl = streams();
        let id = ctl.add(FieldMap::new().with("name", "  Green ")).unwrap();

        let record = ctl.get(id).unwrap().unwrap();
        assert_eq!(record.fields, FieldMap::new().with("name", "Green"));
        assert!(ctl.draft().is_empty());
    }

    #[test]
    fn test_add_missing_required_keeps_draft() {
        let mut ctl = streams();
        let err = ctl.add(FieldMap::new().with("name", "   ")).unwrap_err();

        assert_eq!(err, RegistryError::missing("name"));
        assert_eq!(ctl.len().unwrap(), 0);
        assert_eq!(ctl.draft().text("name"), "   ");
    }

    #[test]
    fn test_add_duplicate_ignores_case() {
        let mut ctl = streams();
        ctl.add(FieldMap::new().with("name", "Green")).unwrap();

        let err = ctl.add(FieldMap::new().with("name", "green")).unwrap_err();
        assert_eq!(err, RegistryError::duplicate("name", "green"));
        assert_eq!(ctl.len().unwrap(), 1);
    }

    fn houses() -> RecordListController<InMemoryRepository> {
        let schema = Schema::new("Houses")
            .field(FieldSpec::text("name").required().unique())
            .field(FieldSpec::text("teacher"));
        RecordListController::new(schema, InMemoryRepository::new())
    }

    #[test]
    fn test_add_round_trips_multi_field_draft() {
        let mut ctl = houses();

        let elgon = ctl.add(FieldMap::new().with("name", " Elgon ")).unwrap();
        let savala = ctl
            .add(FieldMap::new().with("teacher", "Ann").with("name", "Savala"))
            .unwrap();

        assert_eq!(
            ctl.get(elgon).unwrap().unwrap().fields,
            FieldMap::new().with("name", "Elgon")
        );
        assert_eq!(
            ctl.get(savala).unwrap().unwrap().fields,
            FieldMap::new().with("teacher", "Ann").with("name", "Savala")
        );
    }

    #[test]
    fn test_absent_optional_fields_read_as_defaults() {
        let mut ctl = staff();
        let id = ctl.add(staff_draft("001", "Norah Mulusa")).unwrap();

        let record = ctl.get(id).unwrap().unwrap();
        assert_eq!(record.fields.get("all_checked"), None);
        assert_eq!(record.text("password"), "");
        assert_eq!(
            ctl.schema().value_or_default(&record.fields, "all_checked"),
            Some(FieldValue::Flag(false))
        );
    }

    #[test]
    fn test_required_number_must_parse() {
        let schema = Schema::new("Subjects")
            .field(FieldSpec::text("code").required())
            .field(FieldSpec::number("group").required());
        let mut ctl = RecordListController::new(schema, InMemoryRepository::new());

        let err = ctl
            .add(FieldMap::new().with("code", "101").with("group", " six "))
            .unwrap_err();
        assert_eq!(err, RegistryError::invalid("group", "six"));

        let err = ctl
            .add(FieldMap::new().with("code", "101").with("group", ""))
            .unwrap_err();
        assert_eq!(err, RegistryError::missing("group"));
    }

    #[test]
    fn test_choice_outside_options_rejected() {
        let schema = Schema::new("School Particulars")
            .field(FieldSpec::text("category").one_of(["Mixed School", "Boys School"]));
        let mut ctl = RecordListController::new(schema, InMemoryRepository::new());

        let err = ctl
            .add(FieldMap::new().with("category", "Day School"))
            .unwrap_err();
        assert_eq!(err, RegistryError::invalid("category", "Day School"));
        assert!(ctl.add(FieldMap::new().with("category", "Boys School")).is_ok());
    }

    #[test]
    fn test_duplicate_reports_value_as_typed() {
        let schema = Schema::new("Subjects")
            .field(FieldSpec::text("name").required().unique().uppercase());
        let mut ctl = RecordListController::new(schema, InMemoryRepository::new());
        ctl.add(FieldMap::new().with("name", "english")).unwrap();

        let err = ctl.add(FieldMap::new().with("name", " English ")).unwrap_err();
        assert_eq!(err, RegistryError::duplicate("name", "English"));
    }

    #[test]
    fn test_add_clears_selection() {
        let mut ctl = streams();
        let id = ctl.add(FieldMap::new().with("name", "Green")).unwrap();
        ctl.toggle_select(id).unwrap();

        ctl.add(FieldMap::new().with("name", "White")).unwrap();
        assert_eq!(ctl.highlighted(), None);
    }

    #[test]
    fn test_commit_draft_from_buffer() {
        let mut ctl = streams();
        ctl.set_draft_field("name", "Indigo");

        let id = ctl.commit_draft().unwrap();
        assert_eq!(ctl.get(id).unwrap().unwrap().text("name"), "Indigo");
    }

    #[test]
    fn test_update_keeps_order() {
        let mut ctl = streams();
        ctl.add(FieldMap::new().with("name", "Green")).unwrap();
        let middle = ctl.add(FieldMap::new().with("name", "Indigo")).unwrap();
        ctl.add(FieldMap::new().with("name", "White")).unwrap();

        ctl.update(middle, "name", "Blue").unwrap();
        assert_eq!(names(&ctl), vec!["Green", "Blue", "White"]);
    }

    #[test]
    fn test_update_stores_text_as_entered() {
        let schema = Schema::new("Examination Types")
            .field(FieldSpec::text("variable").required().unique().uppercase())
            .field(FieldSpec::text("description"))
            .field(FieldSpec::number("marked_out_of"));
        let mut ctl = RecordListController::new(schema, InMemoryRepository::new());
        let id = ctl.add(FieldMap::new().with("variable", "a")).unwrap();

        ctl.update(id, "description", " cat 1 ").unwrap();
        ctl.update(id, "marked_out_of", "50").unwrap();

        let record = ctl.get(id).unwrap().unwrap();
        assert_eq!(record.text("variable"), "A");
        assert_eq!(record.text("description"), " cat 1 ");
        assert_eq!(record.fields.get("marked_out_of"), Some(&FieldValue::Number(50)));
    }

    #[test]
    fn test_commit_draft_to_existing_record() {
        let mut ctl = houses();
        let elgon = ctl.add(FieldMap::new().with("name", "Elgon")).unwrap();
        let savala = ctl.add(FieldMap::new().with("name", "Savala")).unwrap();

        ctl.set_draft(FieldMap::new().with("name", "elgon").with("teacher", "Ann"));
        ctl.commit_draft_to(elgon).unwrap();
        assert_eq!(ctl.get(elgon).unwrap().unwrap().text("teacher"), "Ann");
        assert!(ctl.draft().is_empty());

        ctl.set_draft(FieldMap::new().with("name", "Elgon"));
        assert_eq!(
            ctl.commit_draft_to(savala).unwrap_err(),
            RegistryError::duplicate("name", "Elgon")
        );
        assert_eq!(ctl.get(savala).unwrap().unwrap().text("name"), "Savala");
    }

    #[test]
    fn test_update_missing_record() {
        let mut ctl = streams();
        let err = ctl.update(RecordId(42), "name", "x").unwrap_err();
        assert_eq!(err, RegistryError::NotFound(RecordId(42)));
    }

    #[test]
    fn test_toggle_select_twice_restores() {
        let mut ctl = streams();
        let id = ctl.add(FieldMap::new().with("name", "Green")).unwrap();

        assert!(ctl.toggle_select(id).unwrap());
        assert!(!ctl.toggle_select(id).unwrap());
        assert_eq!(ctl.highlighted(), None);
    }

    #[test]
    fn test_toggle_select_replaces_previous() {
        let mut ctl = streams();
        let a = ctl.add(FieldMap::new().with("name", "Green")).unwrap();
        let b = ctl.add(FieldMap::new().with("name", "White")).unwrap();

        ctl.toggle_select(a).unwrap();
        ctl.toggle_select(b).unwrap();
        assert_eq!(ctl.selected_ids(), vec![b]);
    }

    #[test]
    fn test_toggle_include_is_independent() {
        let mut ctl = staff();
        let a = ctl.add(staff_draft("001", "A")).unwrap();
        let b = ctl.add(staff_draft("002", "B")).unwrap();

        ctl.toggle_include(a).unwrap();
        ctl.toggle_include(b).unwrap();
        ctl.toggle_select(a).unwrap();
        ctl.toggle_include(a).unwrap();

        assert_eq!(ctl.included(), vec![b]);
        assert_eq!(ctl.highlighted(), Some(a));
    }

    #[test]
    fn test_delete_selected_empty() {
        let mut ctl = streams();
        ctl.add(FieldMap::new().with("name", "Green")).unwrap();
        let revision = ctl.revision();

        assert_eq!(ctl.delete_selected().unwrap_err(), RegistryError::SelectionEmpty);
        assert_eq!(ctl.len().unwrap(), 1);
        assert_eq!(ctl.revision(), revision);
    }

    #[test]
    fn test_multi_delete_uses_included_set() {
        let mut ctl = staff();
        let a = ctl.add(staff_draft("001", "A")).unwrap();
        let b = ctl.add(staff_draft("002", "B")).unwrap();
        let c = ctl.add(staff_draft("003", "C")).unwrap();

        ctl.toggle_include(a).unwrap();
        ctl.toggle_include(c).unwrap();
        ctl.toggle_select(b).unwrap();

        assert_eq!(ctl.delete_selected().unwrap(), 2);
        assert_eq!(ctl.ids().unwrap(), vec![b]);
        assert!(ctl.included().is_empty());
        assert_eq!(ctl.highlighted(), None);
    }

    #[test]
    fn test_single_delete_purges_selection() {
        let mut ctl = staff();
        let a = ctl.add(staff_draft("001", "A")).unwrap();
        let b = ctl.add(staff_draft("002", "B")).unwrap();
        ctl.toggle_include(a).unwrap();
        ctl.toggle_include(b).unwrap();
        ctl.toggle_select(a).unwrap();

        ctl.delete(a).unwrap();

        assert_eq!(ctl.included(), vec![b]);
        assert_eq!(ctl.highlighted(), None);
        assert_eq!(ctl.delete(a).unwrap_err(), RegistryError::NotFound(a));
    }

    #[test]
    fn test_single_mode_delete_clears_highlight() {
        let mut ctl = streams();
        let a = ctl.add(FieldMap::new().with("name", "Green")).unwrap();
        let b = ctl.add(FieldMap::new().with("name", "White")).unwrap();

        ctl.toggle_select(a).unwrap();
        ctl.delete(a).unwrap();

        assert_eq!(ctl.highlighted(), None);
        assert!(ctl.selected_ids().is_empty());
        assert_eq!(ctl.ids().unwrap(), vec![b]);
    }

    #[test]
    fn test_selected_records_follow_record_order() {
        let mut ctl = staff();
        let a = ctl.add(staff_draft("001", "A")).unwrap();
        ctl.add(staff_draft("002", "B")).unwrap();
        let c = ctl.add(staff_draft("003", "C")).unwrap();

        ctl.toggle_include(c).unwrap();
        ctl.toggle_include(a).unwrap();

        let names: Vec<String> = ctl
            .selected_records()
            .unwrap()
            .iter()
            .map(|r| r.text("name").to_string())
            .collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut ctl = streams();
        assert_eq!(
            ctl.toggle_select(RecordId(5)).unwrap_err(),
            RegistryError::NotFound(RecordId(5))
        );
        assert_eq!(
            ctl.toggle_include(RecordId(5)).unwrap_err(),
            RegistryError::NotFound(RecordId(5))
        );
    }

    #[test]
    fn test_transform_selected_uppercases() {
        let mut ctl = streams();
        let a = ctl.add(FieldMap::new().with("name", "green")).unwrap();
        ctl.add(FieldMap::new().with("name", "white")).unwrap();
        ctl.toggle_select(a).unwrap();

        let changed = ctl
            .transform_selected(|fields| {
                let mut out = fields.clone();
                out.set("name", fields.text("name").to_uppercase());
                out
            })
            .unwrap();

        assert_eq!(changed, 1);
        assert_eq!(names(&ctl), vec!["GREEN", "white"]);
    }

    #[test]
    fn test_transform_selected_empty() {
        let mut ctl = streams();
        let err = ctl.transform_selected(|f| f.clone()).unwrap_err();
        assert_eq!(err, RegistryError::SelectionEmpty);
    }

    #[test]
    fn test_include_all_then_delete() {
        let mut ctl = staff();
        ctl.add(staff_draft("001", "A")).unwrap();
        ctl.add(staff_draft("002", "B")).unwrap();

        ctl.include_all().unwrap();
        assert_eq!(ctl.delete_selected().unwrap(), 2);
        assert!(ctl.is_empty().unwrap());
    }

    #[test]
    fn test_filtered_view() {
        let schema = Schema::new("Index Numbers")
            .field(FieldSpec::text("adm_no").required().unique())
            .field(FieldSpec::text("stream"));
        let mut ctl = RecordListController::new(schema, InMemoryRepository::new());
        ctl.add(FieldMap::new().with("adm_no", "1").with("stream", "Yellow"))
            .unwrap();
        ctl.add(FieldMap::new().with("adm_no", "2").with("stream", "Green"))
            .unwrap();

        let yellow = ctl
            .filtered(&RecordFilter::new().eq("stream", "Yellow"))
            .unwrap();
        assert_eq!(yellow.len(), 1);
        assert_eq!(yellow[0].text("adm_no"), "1");

        let all = ctl.filtered(&RecordFilter::new().eq("stream", WILDCARD)).unwrap();
        assert_eq!(all.len(), 2);
    }
}
