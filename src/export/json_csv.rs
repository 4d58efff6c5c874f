// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::{AttendanceReport, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &AttendanceReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&report.to_json())?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV. The server body is stored byte for byte.
pub(crate) fn export_csv(body: &[u8], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    fs::write(path, body)?;

    notify_export_success("CSV", path);
    Ok(())
}
