use super::session::Role;
use serde::{Deserialize, Deserializer, Serialize};

/// Officer account. `username` is the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Officer {
    pub username: String,
    pub role: Role,
    #[serde(default = "active_by_default", deserialize_with = "flag_from_any")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

/// The backend reports the flag as a boolean or as 0/1.
fn flag_from_any<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(match v {
        serde_json::Value::Bool(b) => b,
        serde_json::Value::Number(n) => n.as_i64().unwrap_or(1) != 0,
        serde_json::Value::Null => true,
        _ => true,
    })
}

#[derive(Debug, Clone, Serialize)]
pub struct NewOfficer {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// Body for `PUT /admin/officers/:username`. An empty password is not sent.
#[derive(Debug, Clone, Serialize)]
pub struct OfficerUpdate {
    pub role: Role,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}
