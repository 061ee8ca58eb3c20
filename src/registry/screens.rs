//! Schema, focus order and seed data of each registration screen.

use serde::{Deserialize, Serialize};

use crate::db::seed;
use crate::errors::RegistryResult;
use crate::focus::FocusChain;
use crate::models::{FieldMap, FieldSpec, Schema, SelectionMode};
use crate::screen::PHOTO_FIELD;

/// Choices of the school category dropdown.
pub const SCHOOL_CATEGORIES: [&str; 5] = [
    "Mixed School",
    "Boys School",
    "Girls School",
    "Primary School",
    "Secondary School",
];

/// Term details kept alongside the class teacher assignments.
pub fn class_details_schema() -> Schema {
    Schema::new("School Details")
        .field(FieldSpec::date("closing_date"))
        .field(FieldSpec::date("opening_date"))
        .field(FieldSpec::text("principal_name").uppercase())
        .field(FieldSpec::text("principal_signature"))
}

/// Registration screens backed by a record list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ScreenKind {
    SchoolParticulars,
    Streams,
    Houses,
    StaffDetails,
    MainSubjects,
    ExaminationTypes,
    ClassTeachers,
    SubjectTeachers,
    StudentDetails,
    IndexNumbers,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 10] = [
        ScreenKind::SchoolParticulars,
        ScreenKind::Streams,
        ScreenKind::Houses,
        ScreenKind::StaffDetails,
        ScreenKind::MainSubjects,
        ScreenKind::ExaminationTypes,
        ScreenKind::ClassTeachers,
        ScreenKind::SubjectTeachers,
        ScreenKind::StudentDetails,
        ScreenKind::IndexNumbers,
    ];

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            ScreenKind::SchoolParticulars => "School Particulars",
            ScreenKind::Streams => "Streams Registration",
            ScreenKind::Houses => "Houses Registration",
            ScreenKind::StaffDetails => "Staff Details",
            ScreenKind::MainSubjects => "Subject Registration",
            ScreenKind::ExaminationTypes => "Examination Types",
            ScreenKind::ClassTeachers => "Assign Class Teachers",
            ScreenKind::SubjectTeachers => "Assign Subject Teachers",
            ScreenKind::StudentDetails => "Student Details",
            ScreenKind::IndexNumbers => "Assign Index Numbers",
        }
    }

    /// Name of one record in operator notices.
    pub fn noun(&self) -> &'static str {
        match self {
            ScreenKind::SchoolParticulars => "school",
            ScreenKind::Streams => "stream",
            ScreenKind::Houses => "house",
            ScreenKind::StaffDetails => "staff member",
            ScreenKind::MainSubjects => "subject",
            ScreenKind::ExaminationTypes => "examination type",
            ScreenKind::ClassTeachers => "class",
            ScreenKind::SubjectTeachers => "assignment",
            ScreenKind::StudentDetails => "student",
            ScreenKind::IndexNumbers => "student",
        }
    }

    pub fn schema(&self) -> Schema {
        let schema = Schema::new(self.title());
        match self {
            ScreenKind::SchoolParticulars => schema
                .field(FieldSpec::text("school_name").required())
                .field(FieldSpec::text("license_number"))
                .field(FieldSpec::text("school_code"))
                .field(FieldSpec::text("address"))
                .field(FieldSpec::text("tel_fax"))
                .field(FieldSpec::text("email"))
                .field(FieldSpec::text("website"))
                .field(FieldSpec::text("motto"))
                .field(FieldSpec::text("category").required().one_of(SCHOOL_CATEGORIES))
                .field(FieldSpec::text("logo")),
            ScreenKind::Streams => schema.field(FieldSpec::text("name").required().unique()),
            ScreenKind::Houses => schema
                .field(FieldSpec::text("name").required().unique())
                .field(FieldSpec::text("teacher")),
            ScreenKind::StaffDetails => schema
                .field(FieldSpec::text("code").required().unique())
                .field(FieldSpec::text("name").required())
                .field(FieldSpec::text("initials").required())
                .field(FieldSpec::text("password"))
                .field(FieldSpec::flag("all_checked"))
                .selection(SelectionMode::Multi),
            ScreenKind::MainSubjects => schema
                .field(FieldSpec::text("code").required().unique())
                .field(FieldSpec::text("abr").required().uppercase())
                .field(FieldSpec::text("name").required().unique().uppercase())
                .field(FieldSpec::number("group").required()),
            ScreenKind::ExaminationTypes => schema
                .field(FieldSpec::text("variable").required().unique())
                .field(FieldSpec::text("description"))
                .field(FieldSpec::number("marked_out_of"))
                .field(FieldSpec::flag("include"))
                .field(FieldSpec::flag("sum"))
                .field(FieldSpec::flag("marks_entry")),
            ScreenKind::ClassTeachers => schema
                .field(FieldSpec::text("form").required())
                .field(FieldSpec::text("stream").required())
                .field(FieldSpec::text("teacher_id")),
            ScreenKind::SubjectTeachers => schema
                .field(FieldSpec::text("form").required())
                .field(FieldSpec::text("stream").required())
                .field(FieldSpec::text("sub_code").required())
                .field(FieldSpec::text("subject_name"))
                .field(FieldSpec::text("staff_id"))
                .field(FieldSpec::text("initials")),
            ScreenKind::StudentDetails => schema
                .field(FieldSpec::text("adm_no").required().unique())
                .field(FieldSpec::text("name").required())
                .field(FieldSpec::text("upi_no").unique())
                .field(FieldSpec::number("kcpe"))
                .field(FieldSpec::text("gender"))
                .field(FieldSpec::text("house"))
                .field(FieldSpec::text("stream"))
                .field(FieldSpec::text("boarder"))
                .field(FieldSpec::text("phone"))
                .field(FieldSpec::text("stop"))
                .field(FieldSpec::text(PHOTO_FIELD)),
            ScreenKind::IndexNumbers => schema
                .field(FieldSpec::text("adm_no").required().unique())
                .field(FieldSpec::text("name").required())
                .field(FieldSpec::text("form"))
                .field(FieldSpec::text("stream"))
                .field(FieldSpec::text("index_no").unique()),
        }
    }

    /// Keyboard focus order of the screen.
    ///
    /// The class teacher screen ends in the fields of
    /// [`class_details_schema`].
    pub fn focus_chain(&self) -> FocusChain {
        match self {
            ScreenKind::SchoolParticulars => FocusChain::new()
                .draft_fields([
                    "school_name",
                    "license_number",
                    "school_code",
                    "address",
                    "tel_fax",
                    "email",
                    "website",
                    "motto",
                    "category",
                ])
                .actions(["logo", "update", "close"]),
            ScreenKind::Streams => FocusChain::new()
                .draft_fields(["name"])
                .actions(["delete", "close"]),
            ScreenKind::Houses => FocusChain::new()
                .draft_fields(["name", "teacher"])
                .actions(["delete", "close"]),
            ScreenKind::StaffDetails => FocusChain::new()
                .draft_fields(["code", "name", "initials", "password", "all_checked"])
                .actions(["delete", "print", "close"]),
            ScreenKind::MainSubjects => FocusChain::new()
                .draft_fields(["code", "abr", "name", "group"])
                .actions(["delete", "uppercase", "close"]),
            ScreenKind::ExaminationTypes => FocusChain::new()
                .cell_fields(["description", "marked_out_of", "include", "sum", "marks_entry"])
                .actions(["close"]),
            ScreenKind::ClassTeachers => FocusChain::new()
                .cell_fields(["teacher_id"])
                .actions([
                    "closing_date",
                    "opening_date",
                    "principal_name",
                    "principal_signature",
                    "save",
                    "close",
                ]),
            ScreenKind::SubjectTeachers => FocusChain::new()
                .cell_fields(["staff_id"])
                .actions(["delete", "close"]),
            ScreenKind::StudentDetails => FocusChain::new()
                .draft_fields([
                    "adm_no", "name", "upi_no", "kcpe", "gender", "house", "boarder", "phone",
                    "stop",
                ])
                .actions(["close"]),
            ScreenKind::IndexNumbers => FocusChain::new()
                .cell_fields(["index_no"])
                .actions(["save", "close"]),
        }
    }

    /// Built-in mock rows for the screen.
    pub fn seed(&self) -> RegistryResult<Vec<FieldMap>> {
        match self {
            ScreenKind::SchoolParticulars => seed::school_particulars(),
            ScreenKind::Streams => seed::streams(),
            ScreenKind::Houses => seed::houses(),
            ScreenKind::StaffDetails => seed::staff(),
            ScreenKind::MainSubjects => seed::subjects(),
            ScreenKind::ExaminationTypes => seed::examination_types(),
            ScreenKind::ClassTeachers => seed::class_teachers(),
            ScreenKind::SubjectTeachers => seed::subject_teachers(),
            ScreenKind::StudentDetails => seed::students(),
            ScreenKind::IndexNumbers => seed::index_numbers(),
        }
    }
}
