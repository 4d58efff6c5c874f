use super::ApiClient;
use crate::errors::AppResult;
use crate::models::event::{ActiveEventRequest, Event, EventInput};
use crate::models::session::ServerMessage;
use reqwest::Method;

impl ApiClient {
    pub fn events(&self) -> AppResult<Vec<Event>> {
        self.get_json(&["events"])
    }

    pub fn create_event(&self, input: &EventInput) -> AppResult<ServerMessage> {
        self.send_for_message(Method::POST, &["events"], Some(input))
    }

    pub fn update_event(&self, id: i64, input: &EventInput) -> AppResult<ServerMessage> {
        self.send_for_message(Method::PUT, &["events", &id.to_string()], Some(input))
    }

    pub fn delete_event(&self, id: i64) -> AppResult<ServerMessage> {
        self.send_for_message(Method::DELETE, &["events", &id.to_string()], None::<&()>)
    }

    /// `GET /active_event`. 404 means no event is active.
    pub fn active_event(&self) -> AppResult<Event> {
        self.get_json(&["active_event"])
    }

    pub fn set_active_event(&self, event_id: i64) -> AppResult<ServerMessage> {
        self.send_for_message(
            Method::POST,
            &["active_event"],
            Some(&ActiveEventRequest { event_id }),
        )
    }
}
