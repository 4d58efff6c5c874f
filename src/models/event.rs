use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    /// "YYYY-MM-DD"
    pub date: String,
}

impl Event {
    pub fn naive_date(&self) -> Option<chrono::NaiveDate> {
        crate::utils::date::parse_date(&self.date)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventInput {
    pub name: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActiveEventRequest {
    pub event_id: i64,
}
