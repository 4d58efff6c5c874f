use super::ApiClient;
use crate::errors::AppResult;
use crate::models::attendance::{AttendanceRecord, CheckInRequest, CheckInResult, EventStats};
use reqwest::Method;

impl ApiClient {
    pub fn stats(&self, event_id: i64) -> AppResult<EventStats> {
        self.get_json(&["stats", &event_id.to_string()])
    }

    pub fn attendance(&self, event_id: i64) -> AppResult<Vec<AttendanceRecord>> {
        self.get_json(&["attendance", &event_id.to_string()])
    }

    /// Raw CSV report body of `GET /export/attendance/:eventId`.
    pub fn export_attendance(&self, event_id: i64) -> AppResult<Vec<u8>> {
        self.get_bytes(&["export", "attendance", &event_id.to_string()])
    }

    pub fn check_in(&self, req: &CheckInRequest<'_>) -> AppResult<CheckInResult> {
        self.send_json(Method::POST, &["check_in"], req)
    }
}
