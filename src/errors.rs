//! Unified application error type.
//! Every module (api, core, db, cli, export) returns AppError so that each
//! user action ends in exactly one outcome: success or one error category.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Local store
    // ---------------------------
    #[error("Local store error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Local store migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Remote outcomes
    // ---------------------------
    /// No persisted session, or the backend rejected it (HTTP 401).
    #[error("Not logged in: {0}")]
    Unauthenticated(String),

    /// A required field is empty. No request is sent.
    #[error("Missing required field: {0}")]
    Validation(String),

    /// HTTP 409, e.g. a duplicate check-in.
    #[error("{0}")]
    Conflict(String),

    /// HTTP 404 on a lookup.
    #[error("{0}")]
    NotFound(String),

    /// Any other non-2xx answer.
    #[error("Server rejected the request ({status}): {message}")]
    ServerRejected { status: u16, message: String },

    #[error("Connection error: {0}")]
    Network(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid response payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// True for outcomes that must end the current session.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, AppError::Unauthenticated(_))
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(e: serde_yaml::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
