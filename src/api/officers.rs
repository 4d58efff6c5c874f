use super::ApiClient;
use crate::errors::AppResult;
use crate::models::officer::{NewOfficer, Officer, OfficerUpdate};
use crate::models::session::ServerMessage;
use reqwest::Method;

impl ApiClient {
    pub fn officers(&self) -> AppResult<Vec<Officer>> {
        self.get_json(&["admin", "officers"])
    }

    pub fn create_officer(&self, officer: &NewOfficer) -> AppResult<ServerMessage> {
        self.send_for_message(Method::POST, &["admin", "officers"], Some(officer))
    }

    pub fn update_officer(&self, username: &str, update: &OfficerUpdate) -> AppResult<ServerMessage> {
        self.send_for_message(Method::PUT, &["admin", "officers", username], Some(update))
    }
}
