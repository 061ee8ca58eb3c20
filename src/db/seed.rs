//! Built-in mock data used to seed each registration screen.

use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::errors::RegistryResult;
use crate::models::{FieldMap, Lookup, LookupOption};

/// Staff options offered by the class and subject teacher dropdowns.
pub static STAFF_OPTIONS: Lazy<Lookup> = Lazy::new(|| {
    let options = STAFF
        .iter()
        .map(|(code, name, initials, _, _)| LookupOption {
            id: format!("stf{}", code),
            label: name.to_string(),
            initials: initials.to_string(),
        })
        .collect();
    Lookup::new(options)
});

// code, name, initials, password, all
const STAFF: &[(&str, &str, &str, &str, bool)] = &[
    ("001", "King George Nabibya", "K.G", "pass123", false),
    ("002", "Nyongesa Peter", "P.N", "pass456", false),
    ("003", "Norah Mulusa", "N.M", "pass789", false),
    ("004", "Jacob Khisa", "J.K", "pass101", false),
    ("005", "Lutiali Hellen", "H.L", "pass112", false),
    ("006", "Benard Juma", "B.J", "pass131", false),
    ("007", "Sharon Kirui", "S.K", "pass414", true),
    ("008", "Lugado Patrick", "L.P", "pass515", false),
    ("009", "Eugine Agesa", "E.A", "pass616", false),
    ("010", "Omoit Anzeemas", "O.A", "pass717", false),
    ("011", "Pauline Rakama", "P.R", "pass818", true),
    ("012", "Ben Erick Omito", "B.E.O", "pass919", false),
    ("013", "Obed Ondiek", "O.O", "pass202", false),
    ("014", "Elijah Wafula", "E.W", "pass212", true),
    ("015", "Timothy Imbanga", "T.I", "pass232", false),
    ("016", "Ruth Njoroge", "R.N", "pass242", false),
];

/// Converts a JSON array of objects into field maps.
pub fn rows_from_json(value: Value) -> RegistryResult<Vec<FieldMap>> {
    Ok(serde_json::from_value(value)?)
}

pub fn school_particulars() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        {
            "school_name": "ROLAN HIGH SCHOOL",
            "license_number": "3914951853",
            "school_code": "",
            "address": "P.o Box 1234, 30100 Eldoret",
            "tel_fax": "0721 xxxxxx",
            "email": "rolanschools@gmail.com",
            "website": "",
            "motto": "",
            "category": "Mixed School",
            "logo": "",
        },
    ]))
}

pub fn class_details() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        {
            "closing_date": "20/04/2023",
            "opening_date": "09/05/2023",
            "principal_name": "MR. MARK CHEMWENO",
            "principal_signature": "",
        },
    ]))
}

pub fn streams() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        { "name": "All" },
        { "name": "Green" },
        { "name": "Indigo" },
        { "name": "White" },
        { "name": "Yellow" },
    ]))
}

pub fn houses() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        { "name": "Elgon", "teacher": "Ann mrs" },
        { "name": "Kilimanjaro", "teacher": "Mr, Rotich" },
        { "name": "Savala", "teacher": "Langat" },
    ]))
}

pub fn staff() -> RegistryResult<Vec<FieldMap>> {
    Ok(STAFF
        .iter()
        .map(|(code, name, initials, password, all)| {
            FieldMap::new()
                .with("code", *code)
                .with("name", *name)
                .with("initials", *initials)
                .with("password", *password)
                .with("all_checked", *all)
        })
        .collect())
}

pub fn subjects() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        { "code": "101", "abr": "ENG", "name": "ENGLISH", "group": 6 },
        { "code": "102", "abr": "KIS", "name": "KISWAHILI", "group": 2 },
        { "code": "121", "abr": "MAT", "name": "MATHEMATICS", "group": 1 },
        { "code": "231", "abr": "BIO", "name": "BIOLOGY", "group": 3 },
        { "code": "232", "abr": "PHY", "name": "PHYSICS", "group": 3 },
        { "code": "233", "abr": "CHE", "name": "CHEMISTRY", "group": 3 },
        { "code": "311", "abr": "HIS", "name": "HISTORY & GOVERNMENT", "group": 3 },
        { "code": "312", "abr": "GEO", "name": "GEOGRAPHY", "group": 3 },
        { "code": "313", "abr": "CRE", "name": "C.R.E.", "group": 3 },
        { "code": "443", "abr": "AGR", "name": "AGRICULTURE", "group": 3 },
        { "code": "565", "abr": "BST", "name": "BUSINESS STUDIES", "group": 3 },
    ]))
}

pub fn examination_types() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        { "variable": "A", "description": "CAT 1", "marked_out_of": 100, "include": true, "sum": true, "marks_entry": true },
        { "variable": "B", "description": "CAT 2", "marked_out_of": 100, "include": true, "sum": false, "marks_entry": true },
        { "variable": "C", "description": "cat1", "marked_out_of": 100, "include": false, "sum": false, "marks_entry": false },
        { "variable": "D", "description": "cat2", "marked_out_of": 100, "include": false, "sum": false, "marks_entry": false },
        { "variable": "E", "description": "LUGARI SOUTH B JOINT", "marked_out_of": 100, "include": false, "sum": false, "marks_entry": false },
        { "variable": "F", "description": "ENDTERM", "marked_out_of": 100, "include": false, "sum": false, "marks_entry": false },
    ]))
}

pub fn class_teachers() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        { "form": "1", "stream": "Green", "teacher_id": "stf014" },
        { "form": "1", "stream": "Indigo", "teacher_id": "" },
        { "form": "1", "stream": "White", "teacher_id": "" },
        { "form": "1", "stream": "Yellow", "teacher_id": "stf005" },
        { "form": "2", "stream": "Green", "teacher_id": "stf014" },
        { "form": "2", "stream": "Indigo", "teacher_id": "" },
        { "form": "2", "stream": "White", "teacher_id": "" },
        { "form": "2", "stream": "Yellow", "teacher_id": "stf005" },
    ]))
}

pub fn subject_teachers() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        { "form": "1", "stream": "Yellow", "sub_code": "102", "subject_name": "KISWAHILI", "staff_id": "stf005", "initials": "H.L" },
        { "form": "1", "stream": "Yellow", "sub_code": "121", "subject_name": "MATHEMATICS", "staff_id": "stf008", "initials": "L.P" },
        { "form": "1", "stream": "Yellow", "sub_code": "231", "subject_name": "BIOLOGY", "staff_id": "stf002", "initials": "P.N" },
        { "form": "1", "stream": "Yellow", "sub_code": "232", "subject_name": "PHYSICS", "staff_id": "stf013", "initials": "O.O" },
        { "form": "1", "stream": "Yellow", "sub_code": "233", "subject_name": "CHEMISTRY", "staff_id": "stf008", "initials": "L.P" },
        { "form": "1", "stream": "Yellow", "sub_code": "311", "subject_name": "HISTORY & GOVERNMENT", "staff_id": "stf006", "initials": "B.J" },
        { "form": "1", "stream": "Yellow", "sub_code": "312", "subject_name": "GEOGRAPHY", "staff_id": "stf005", "initials": "H.L" },
        { "form": "1", "stream": "Yellow", "sub_code": "313", "subject_name": "C.R.E.", "staff_id": "stf014", "initials": "E.W" },
        { "form": "1", "stream": "Yellow", "sub_code": "443", "subject_name": "AGRICULTURE", "staff_id": "stf009", "initials": "E.A" },
        { "form": "1", "stream": "Yellow", "sub_code": "565", "subject_name": "BUSINESS STUDIES", "staff_id": "stf016", "initials": "R.N" },
        { "form": "1", "stream": "Yellow", "sub_code": "101", "subject_name": "ENGLISH", "staff_id": "", "initials": "" },
    ]))
}

pub fn students() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        { "adm_no": "1001", "name": "John Doe", "upi_no": "UPI001", "kcpe": 350, "gender": "M", "house": "Elgon", "stream": "Yellow", "boarder": "Yes", "phone": "123-456-7890", "stop": "No" },
        { "adm_no": "1002", "name": "Jane Smith", "upi_no": "UPI002", "kcpe": 380, "gender": "F", "house": "Kilimanjaro", "stream": "Yellow", "boarder": "No", "phone": "098-765-4321", "stop": "Yes" },
        { "adm_no": "1003", "name": "Peter Jones", "upi_no": "UPI003", "kcpe": 320, "gender": "M", "house": "Savala", "stream": "Green", "boarder": "Yes", "phone": "111-222-3333", "stop": "No" },
        { "adm_no": "1004", "name": "Alice Brown", "upi_no": "UPI004", "kcpe": 390, "gender": "F", "house": "Elgon", "stream": "Green", "boarder": "No", "phone": "444-555-6666", "stop": "No" },
        { "adm_no": "1005", "name": "Bob White", "upi_no": "UPI005", "kcpe": 310, "gender": "M", "house": "Kilimanjaro", "stream": "Indigo", "boarder": "Yes", "phone": "777-888-9999", "stop": "Yes" },
        { "adm_no": "2001", "name": "Charlie Green", "upi_no": "UPI006", "kcpe": 360, "gender": "M", "house": "Savala", "stream": "Yellow", "boarder": "No", "phone": "123-123-1234", "stop": "No" },
        { "adm_no": "2002", "name": "Diana Black", "upi_no": "UPI007", "kcpe": 375, "gender": "F", "house": "Elgon", "stream": "Yellow", "boarder": "Yes", "phone": "321-321-4321", "stop": "No" },
    ]))
}

pub fn index_numbers() -> RegistryResult<Vec<FieldMap>> {
    rows_from_json(json!([
        { "adm_no": "3001", "name": "Melvin Anita", "form": "3", "stream": "Yellow", "index_no": "001" },
        { "adm_no": "3002", "name": "Lucky Vugutsa", "form": "3", "stream": "Yellow", "index_no": "" },
        { "adm_no": "3003", "name": "Noel Jahenda", "form": "3", "stream": "Yellow", "index_no": "003" },
        { "adm_no": "3004", "name": "Euphemia Lijodi", "form": "3", "stream": "Yellow", "index_no": "" },
        { "adm_no": "3005", "name": "Caren Namaemba", "form": "3", "stream": "Yellow", "index_no": "005" },
        { "adm_no": "3006", "name": "Ivy Masaka", "form": "3", "stream": "Green", "index_no": "" },
        { "adm_no": "3007", "name": "Leah Nafula", "form": "3", "stream": "Green", "index_no": "007" },
        { "adm_no": "3008", "name": "Gloria Tsikhungu", "form": "3", "stream": "Indigo", "index_no": "" },
        { "adm_no": "3009", "name": "Wefila Sarah", "form": "3", "stream": "Indigo", "index_no": "009" },
        { "adm_no": "3010", "name": "Bridgit Nasisho", "form": "3", "stream": "White", "index_no": "" },
    ]))
}
