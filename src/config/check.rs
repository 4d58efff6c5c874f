use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Field names every configuration file is expected to carry.
pub const EXPECTED_FIELDS: [&str; 8] = [
    "api_base_url",
    "store",
    "request_timeout_ms",
    "officer_poll_interval_ms",
    "admin_poll_interval_ms",
    "roster_page_size",
    "sheet_page_size",
    "admin_roster_limit",
];

/// Return the expected fields absent from the YAML document at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let empty = Mapping::new();
    let map = yaml.as_mapping().unwrap_or(&empty);

    Ok(EXPECTED_FIELDS
        .iter()
        .filter(|f| !map.contains_key(Value::String((*f).to_string())))
        .map(|f| f.to_string())
        .collect())
}

/// Report missing fields and, when `fix` is set, rewrite the file with the
/// defaults filled in. Values already present are preserved.
pub fn check_config_file(path: &Path, fix: bool) -> AppResult<bool> {
    if !path.exists() {
        warning(format!(
            "Configuration file not found: {} (run `rattendance init`)",
            path.display()
        ));
        return Ok(false);
    }

    let missing = missing_fields(path)?;
    if missing.is_empty() {
        success("Configuration file is complete.");
        return Ok(true);
    }

    for field in &missing {
        warning(format!("Missing field: {field}"));
    }

    if fix {
        // serde fills every absent field with its default
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        fs::write(path, serde_yaml::to_string(&cfg)?)?;
        info(format!("Added {} default value(s) to {}", missing.len(), path.display()));
        return Ok(true);
    }

    Ok(false)
}
