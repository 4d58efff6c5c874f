use super::ApiClient;
use crate::errors::AppResult;
use crate::models::section::{Section, SectionInput, SheetRow};
use crate::models::session::ServerMessage;
use reqwest::Method;

/// Query of `GET /section_spreadsheet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetQuery {
    pub event_id: i64,
    pub program: String,
    pub year: String,
    pub section: String,
}

impl ApiClient {
    pub fn sections(&self) -> AppResult<Vec<Section>> {
        self.get_json(&["sections"])
    }

    pub fn create_section(&self, input: &SectionInput) -> AppResult<ServerMessage> {
        self.send_for_message(Method::POST, &["sections"], Some(input))
    }

    pub fn delete_section(&self, id: i64) -> AppResult<ServerMessage> {
        self.send_for_message(Method::DELETE, &["sections", &id.to_string()], None::<&()>)
    }

    pub fn section_spreadsheet(&self, q: &SheetQuery) -> AppResult<Vec<SheetRow>> {
        let event_id = q.event_id.to_string();
        self.get_json_query(
            &["section_spreadsheet"],
            &[
                ("event_id", event_id.as_str()),
                ("program", q.program.as_str()),
                ("year", q.year.as_str()),
                ("section", q.section.as_str()),
            ],
        )
    }
}
