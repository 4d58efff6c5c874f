use serde::{Deserialize, Serialize};

/// Global settings edited from the admin console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub academic_year: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub semester: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub org_name: String,
    #[serde(default, deserialize_with = "crate::models::any_as_string")]
    pub absence_fine: String,
}

impl Settings {
    /// Overlay the non-empty fields of `other` onto `self`.
    pub fn merge(&mut self, other: Settings) {
        if !other.academic_year.is_empty() {
            self.academic_year = other.academic_year;
        }
        if !other.semester.is_empty() {
            self.semester = other.semester;
        }
        if !other.org_name.is_empty() {
            self.org_name = other.org_name;
        }
        if !other.absence_fine.is_empty() {
            self.absence_fine = other.absence_fine;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    #[serde(default, deserialize_with = "crate::models::any_as_string")]
    pub timestamp: String,
    pub actor_username: String,
    pub action: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSession {
    pub username: String,
    pub role: String,
    #[serde(default, deserialize_with = "crate::models::null_as_empty")]
    pub last_login: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlushRequest<'a> {
    pub target: &'a str,
    pub username: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevokeRequest<'a> {
    pub username: &'a str,
}
