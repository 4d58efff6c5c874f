//! Blocking REST client for the attendance backend.
//!
//! Every endpoint wrapper funnels through [`ApiClient::send`], which maps the
//! HTTP outcome onto the [`AppError`] taxonomy: 401 → `Unauthenticated`,
//! 404 → `NotFound`, 409 → `Conflict`, any other non-2xx → `ServerRejected`,
//! transport failures → `Network`.

mod admin;
mod attendance;
mod auth;
mod events;
mod officers;
mod sections;
mod students;

pub use sections::SheetQuery;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::session::ServerMessage;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, request_timeout_ms: u64) -> AppResult<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base = Url::parse(trimmed)
            .map_err(|e| AppError::Config(format!("invalid api_base_url '{trimmed}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(AppError::Config(format!(
                "api_base_url '{trimmed}' cannot carry a path"
            )));
        }

        let http = Client::builder()
            .timeout(Duration::from_millis(request_timeout_ms.max(1)))
            .user_agent(concat!("rattendance/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::Config(format!("failed to create http client: {e}")))?;

        Ok(Self { http, base })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.api_base_url, cfg.request_timeout_ms)
    }

    /// Build `<base>/<segments...>`, escaping each segment.
    pub fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for seg in segments {
                path.push(seg);
            }
        }
        url.to_string()
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = self.endpoint(segments);
        debug!("{method} {url}");
        self.http.request(method, url)
    }

    /// Send and classify. Only 2xx responses come back as `Ok`.
    fn send(&self, req: RequestBuilder) -> AppResult<Response> {
        let resp = req.send().map_err(|e| {
            debug!("transport failure: {e}");
            AppError::Network(e.to_string())
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().unwrap_or_default();
        debug!("{status} {body}");
        Err(classify_failure(status, &body))
    }

    fn read_json<T: DeserializeOwned>(resp: Response) -> AppResult<T> {
        let body = resp.text().map_err(|e| AppError::Network(e.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Message bodies are optional: an empty or non-JSON body yields an
    /// empty message.
    fn read_message(resp: Response) -> ServerMessage {
        let body = resp.text().unwrap_or_default();
        serde_json::from_str(&body).unwrap_or_default()
    }

    pub(crate) fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> AppResult<T> {
        let resp = self.send(self.request(Method::GET, segments))?;
        Self::read_json(resp)
    }

    pub(crate) fn get_json_query<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let resp = self.send(self.request(Method::GET, segments).query(query))?;
        Self::read_json(resp)
    }

    pub(crate) fn get_bytes(&self, segments: &[&str]) -> AppResult<Vec<u8>> {
        let resp = self.send(self.request(Method::GET, segments))?;
        let bytes = resp.bytes().map_err(|e| AppError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    pub(crate) fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> AppResult<T> {
        let resp = self.send(self.request(method, segments).json(body))?;
        Self::read_json(resp)
    }

    pub(crate) fn send_for_message<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> AppResult<ServerMessage> {
        let mut req = self.request(method, segments);
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = self.send(req)?;
        Ok(Self::read_message(resp))
    }
}

/// Map a non-2xx status and its body onto the error taxonomy. The server's
/// `message` field is surfaced verbatim when present.
pub fn classify_failure(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ServerMessage>(body)
        .map(|m| m.message)
        .unwrap_or_default();

    let or = |fallback: &str| {
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message.clone()
        }
    };

    match status {
        StatusCode::UNAUTHORIZED => {
            AppError::Unauthenticated(or("session expired or revoked, please log in again"))
        }
        StatusCode::NOT_FOUND => AppError::NotFound(or("Not found")),
        StatusCode::CONFLICT => AppError::Conflict(or("Conflict")),
        other => AppError::ServerRejected {
            status: other.as_u16(),
            message: or(other.canonical_reason().unwrap_or("unexpected status")),
        },
    }
}
