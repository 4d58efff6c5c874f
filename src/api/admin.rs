use super::ApiClient;
use crate::errors::AppResult;
use crate::models::admin::{ActiveSession, AuditLogEntry, FlushRequest, RevokeRequest, Settings};
use crate::models::session::ServerMessage;
use reqwest::Method;

impl ApiClient {
    pub fn settings(&self) -> AppResult<Settings> {
        self.get_json(&["admin", "settings"])
    }

    pub fn save_settings(&self, settings: &Settings) -> AppResult<ServerMessage> {
        self.send_for_message(Method::POST, &["admin", "settings"], Some(settings))
    }

    /// Full database dump as JSON.
    pub fn backup(&self) -> AppResult<serde_json::Value> {
        self.get_json(&["admin", "backup"])
    }

    pub fn flush(&self, target: &str, username: &str) -> AppResult<ServerMessage> {
        self.send_for_message(
            Method::POST,
            &["admin", "maintenance", "flush"],
            Some(&FlushRequest { target, username }),
        )
    }

    pub fn audit_logs(&self) -> AppResult<Vec<AuditLogEntry>> {
        self.get_json(&["admin", "logs"])
    }

    pub fn active_sessions(&self) -> AppResult<Vec<ActiveSession>> {
        self.get_json(&["admin", "sessions"])
    }

    pub fn revoke_session(&self, username: &str) -> AppResult<ServerMessage> {
        self.send_for_message(
            Method::POST,
            &["admin", "sessions", "revoke"],
            Some(&RevokeRequest { username }),
        )
    }
}
