//! Roster maintenance that runs without the backend: duplicate-name scan,
//! the CSV import template and a header check before upload.

use crate::errors::{AppError, AppResult};
use crate::models::student::Student;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const TEMPLATE_FILE_NAME: &str = "student_import_template.csv";

/// Columns the backend reads from an uploaded roster.
pub const IMPORT_COLUMNS: [&str; 6] = [
    "student_no",
    "last_name",
    "first_name",
    "program",
    "year_level",
    "section",
];

const TEMPLATE_SAMPLE: [&str; 6] = ["23-00123", "Dela Cruz", "Juan", "BSCS", "1st", "A"];

/// Students sharing the same normalized last and first name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub last_name: String,
    pub first_name: String,
    pub count: usize,
}

impl DuplicateGroup {
    pub fn describe(&self) -> String {
        format!("• {}, {} ({}x)", self.last_name, self.first_name, self.count)
    }
}

/// Group students by `lower(trim(last)), lower(trim(first))` and keep the
/// groups seen more than once, in order of first appearance. The displayed
/// names are the trimmed spelling of the first occurrence.
pub fn find_duplicates(students: &[Student]) -> Vec<DuplicateGroup> {
    let mut order: Vec<(String, String)> = Vec::new();
    let mut groups: HashMap<(String, String), DuplicateGroup> = HashMap::new();

    for s in students {
        let key = (
            s.last_name.trim().to_lowercase(),
            s.first_name.trim().to_lowercase(),
        );
        groups
            .entry(key.clone())
            .or_insert_with(|| {
                order.push(key);
                DuplicateGroup {
                    last_name: s.last_name.trim().to_string(),
                    first_name: s.first_name.trim().to_string(),
                    count: 0,
                }
            })
            .count += 1;
    }

    order
        .into_iter()
        .filter_map(|k| groups.remove(&k))
        .filter(|g| g.count > 1)
        .collect()
}

/// CSV body of the import template: header plus one example row.
pub fn import_template() -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(IMPORT_COLUMNS)?;
    wtr.write_record(TEMPLATE_SAMPLE)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}

/// Write the template into `dir` and return its path.
pub fn write_import_template(dir: &Path) -> AppResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(TEMPLATE_FILE_NAME);
    fs::write(&path, import_template()?)?;
    Ok(path)
}

/// Reject a roster file that cannot be imported, before anything is sent.
/// Returns the number of data rows.
pub fn check_import_file(path: &Path) -> AppResult<usize> {
    if !path.is_file() {
        return Err(AppError::Validation(format!(
            "import file {} not found",
            path.display()
        )));
    }

    let mut rdr = csv::Reader::from_path(path)?;
    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = IMPORT_COLUMNS
        .iter()
        .copied()
        .filter(|c| !headers.iter().any(|h| h.trim() == *c))
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "import file lacks column(s): {}",
            missing.join(", ")
        )));
    }

    let mut rows = 0;
    for rec in rdr.records() {
        rec?;
        rows += 1;
    }
    if rows == 0 {
        return Err(AppError::Validation("import file has no student rows".into()));
    }
    Ok(rows)
}
