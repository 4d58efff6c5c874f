use serde::{Deserialize, Serialize};

/// Live log entry of `GET /attendance/:eventId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub student_no: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub middle_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub program: String,
    #[serde(default)]
    pub year_level: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub date: String,
    #[serde(default = "placeholder_time")]
    pub time_in: String,
    #[serde(default = "placeholder_time")]
    pub time_out: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub status: String,
}

fn placeholder_time() -> String {
    "--:--".to_string()
}

impl AttendanceRecord {
    pub fn full_name(&self) -> String {
        format!("{}, {} {}", self.last_name, self.first_name, self.middle_name)
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStats {
    #[serde(default)]
    pub checked_in_count: u64,
    #[serde(default)]
    pub total_roster_size: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckInRequest<'a> {
    pub event_id: i64,
    pub student_no: &'a str,
    pub username: Option<&'a str>,
    pub token: Option<&'a str>,
}

/// Direction reported by a successful check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInStatus {
    In,
    Out,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CheckInResult {
    #[serde(default)]
    pub message: String,
    pub status: CheckInStatus,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub student_name: Option<String>,
}
