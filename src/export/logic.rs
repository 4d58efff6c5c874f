// src/export/logic.rs

use crate::api::ApiClient;
use crate::core::export_guard::ExportGuard;
use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::export::{AttendanceReport, ExportFormat};
use std::path::PathBuf;
use tracing::debug;

/// `attendance_report_<eventId>.<ext>`
pub fn default_report_name(event_id: i64, format: ExportFormat) -> String {
    format!("attendance_report_{event_id}.{}", format.as_str())
}

/// High-level attendance export.
pub struct ExportLogic;

impl ExportLogic {
    /// Download the report of `event_id` and write it as `format`.
    ///
    /// Only one export runs at a time per `guard`: a second call while one
    /// is pending fails with `Conflict` and issues no request.
    pub fn export(
        api: &ApiClient,
        store: &LocalStore,
        guard: &ExportGuard,
        event_id: i64,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => crate::utils::path::expand_tilde(f),
            None => PathBuf::from(default_report_name(event_id, format)),
        };

        ensure_writable(&path, force)?;

        let Some(_ticket) = guard.try_begin() else {
            return Err(AppError::Conflict(
                "An export is already in progress.".into(),
            ));
        };

        let body = api.export_attendance(event_id)?;
        debug!("export body: {} bytes", body.len());

        match format {
            ExportFormat::Csv => export_csv(&body, &path)?,
            ExportFormat::Json => export_json(&AttendanceReport::parse(&body)?, &path)?,
            ExportFormat::Xlsx => export_xlsx(
                &AttendanceReport::parse(&body)?,
                &format!("Event {event_id}"),
                &path,
            )?,
        }

        store.journal(
            "export",
            &path.to_string_lossy(),
            &format!("Attendance of event {event_id} exported as {}", format.as_str()),
        );

        Ok(path)
    }
}
