use serde::{Deserialize, Serialize};

/// Grouping label. Does not enforce roster membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub program: String,
    pub year_level: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionInput {
    pub program: String,
    pub year_level: String,
    pub name: String,
}

/// One row of `GET /section_spreadsheet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    pub student_no: String,
    pub last_name: String,
    pub first_name: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub am_in: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub am_out: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub pm_in: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub pm_out: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub status: String,
}
