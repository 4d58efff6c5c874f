pub mod admin;
pub mod attendance;
pub mod event;
pub mod officer;
pub mod section;
pub mod session;
pub mod student;

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable string field as `""` when the backend sends `null`.
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept strings, numbers or null and keep the textual form.
pub(crate) fn any_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let v = serde_json::Value::deserialize(deserializer)?;
    Ok(match v {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}
