use serde::{Deserialize, Serialize};

/// Roster entry. `student_no` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_no: String,
    pub first_name: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub middle_name: String,
    pub last_name: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub year_level: String,
    #[serde(default)]
    pub section: String,
}

impl Student {
    /// "Last, First Middle" as shown in every roster.
    pub fn display_name(&self) -> String {
        format!("{}, {} {}", self.last_name, self.first_name, self.middle_name)
            .trim()
            .to_string()
    }
}

/// Body for `POST /students` and `PUT /students/:id`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_no: Option<String>,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub program: String,
    pub year_level: String,
    pub section: String,
}

impl StudentInput {
    pub fn from_student(s: &Student) -> Self {
        Self {
            student_no: None,
            first_name: s.first_name.clone(),
            middle_name: s.middle_name.clone(),
            last_name: s.last_name.clone(),
            program: s.program.clone(),
            year_level: s.year_level.clone(),
            section: s.section.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DemoteRequest<'a> {
    pub student_nos: &'a [String],
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: Option<u64>,
}
