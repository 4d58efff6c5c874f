use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::session::ServerMessage;
use crate::models::student::{DemoteRequest, ImportResult, Student, StudentInput};
use reqwest::Method;
use reqwest::blocking::multipart::Form;
use std::path::Path;

impl ApiClient {
    pub fn students(&self) -> AppResult<Vec<Student>> {
        self.get_json(&["students"])
    }

    /// Kiosk lookup, `GET /student/:id`. 404 comes back as `NotFound`.
    pub fn student(&self, student_no: &str) -> AppResult<Student> {
        self.get_json(&["student", student_no])
    }

    pub fn create_student(&self, input: &StudentInput) -> AppResult<ServerMessage> {
        self.send_for_message(Method::POST, &["students"], Some(input))
    }

    pub fn update_student(&self, student_no: &str, input: &StudentInput) -> AppResult<ServerMessage> {
        self.send_for_message(Method::PUT, &["students", student_no], Some(input))
    }

    pub fn delete_student(&self, student_no: &str) -> AppResult<ServerMessage> {
        self.send_for_message(Method::DELETE, &["students", student_no], None::<&()>)
    }

    pub fn available_sections(&self, program: &str, year_level: &str) -> AppResult<Vec<String>> {
        let raw: Vec<Option<String>> = self.get_json_query(
            &["students", "available_sections"],
            &[("program", program), ("year_level", year_level)],
        )?;

        // null and repeated entries are dropped, first occurrence wins
        let mut out: Vec<String> = Vec::new();
        for s in raw.into_iter().flatten() {
            if !s.is_empty() && !out.contains(&s) {
                out.push(s);
            }
        }
        Ok(out)
    }

    pub fn promote_students(&self) -> AppResult<ServerMessage> {
        self.send_for_message(
            Method::POST,
            &["admin", "maintenance", "promote"],
            None::<&()>,
        )
    }

    pub fn demote_students(&self, student_nos: &[String]) -> AppResult<ServerMessage> {
        self.send_for_message(
            Method::POST,
            &["admin", "demote_year_level"],
            Some(&DemoteRequest { student_nos }),
        )
    }

    /// Server-side duplicate scan. The payload shape is owned by the server,
    /// so it is passed through untouched.
    pub fn server_duplicates(&self) -> AppResult<serde_json::Value> {
        self.get_json(&["admin", "maintenance", "duplicates"])
    }

    /// Multipart upload of a roster CSV under the `file` field.
    pub fn import_students(&self, csv_path: &Path) -> AppResult<ImportResult> {
        let form = Form::new().file("file", csv_path).map_err(AppError::Io)?;
        let resp = self.send(
            self.request(Method::POST, &["admin", "import_students"])
                .multipart(form),
        )?;
        let body = resp.text().unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }
}
