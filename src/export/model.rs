// src/export/model.rs

use crate::errors::AppResult;
use serde_json::{Map, Value};

/// Attendance report as served by `GET /export/attendance/:eventId`:
/// a header row followed by one row per student.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceReport {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl AttendanceReport {
    pub fn parse(body: &[u8]) -> AppResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(body);

        let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            rows.push(rec?.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows as JSON objects keyed by header.
    pub fn to_json(&self) -> Value {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut obj = Map::new();
                for (i, h) in self.headers.iter().enumerate() {
                    let cell = row.get(i).cloned().unwrap_or_default();
                    obj.insert(h.clone(), Value::String(cell));
                }
                Value::Object(obj)
            })
            .collect();
        Value::Array(rows)
    }
}
