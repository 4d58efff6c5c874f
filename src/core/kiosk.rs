//! Kiosk check-in flow.
//!
//! One submission walks `Idle → LookupPending → Found → CheckInPending` and
//! ends in one terminal state. The next submission re-arms to `Idle`.

use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{CheckInRequest, CheckInStatus};
use crate::models::event::Event;
use crate::models::session::Session;
use crate::models::student::Student;
use tracing::debug;

pub const MSG_STANDBY: &str = "System Standby: No active event found.";
pub const MSG_NO_ACTIVE_EVENT: &str =
    "No event is currently active. Please ask an officer to start the event.";
pub const MSG_EMPTY_INPUT: &str = "Please enter your Student ID Number.";
pub const MSG_LOOKUP_CONNECTION: &str =
    "Connection error during student lookup. Check server status.";
pub const MSG_SESSION_EXPIRED: &str =
    "Session Expired: Please log in again to continue scanning.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskState {
    Idle,
    /// Submitted while no event is active. Nothing was looked up.
    Standby,
    LookupPending {
        student_no: String,
    },
    LookupFailed {
        message: String,
    },
    Found {
        student: Student,
    },
    CheckInPending {
        student: Student,
    },
    CheckedIn {
        status: CheckInStatus,
        message: String,
        time: String,
    },
    CheckInFailed {
        message: String,
        /// The officer's session was rejected (HTTP 401).
        session_expired: bool,
    },
}

impl KioskState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            KioskState::Standby
                | KioskState::LookupFailed { .. }
                | KioskState::CheckedIn { .. }
                | KioskState::CheckInFailed { .. }
        )
    }

    /// Text shown on the kiosk screen for a terminal state.
    pub fn message(&self) -> Option<&str> {
        match self {
            KioskState::Standby => Some(MSG_STANDBY),
            KioskState::LookupFailed { message }
            | KioskState::CheckedIn { message, .. }
            | KioskState::CheckInFailed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, KioskState::CheckedIn { .. })
    }
}

pub struct KioskFlow {
    state: KioskState,
    active_event: Option<Event>,
    session: Option<Session>,
    input: String,
}

impl KioskFlow {
    /// `session` is the officer staffing the kiosk, if any. The backend
    /// records it with each check-in.
    pub fn new(session: Option<Session>) -> Self {
        Self {
            state: KioskState::Idle,
            active_event: None,
            session,
            input: String::new(),
        }
    }

    pub fn state(&self) -> &KioskState {
        &self.state
    }

    pub fn active_event(&self) -> Option<&Event> {
        self.active_event.as_ref()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, raw: &str) {
        self.input = raw.to_string();
    }

    /// Fetch the active event. A 404 leaves the kiosk in standby.
    pub fn load_active_event(&mut self, api: &ApiClient) -> AppResult<Option<&Event>> {
        self.active_event = match api.active_event() {
            Ok(ev) => Some(ev),
            Err(AppError::NotFound(_)) => None,
            Err(e) => return Err(e),
        };
        Ok(self.active_event.as_ref())
    }

    fn transition(&mut self, next: KioskState) {
        debug!("kiosk: {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Submit the input buffer. The buffer is emptied before any request.
    /// Empty input is a validation error and leaves the flow idle.
    pub fn submit(&mut self, api: &ApiClient) -> AppResult<&KioskState> {
        let entry = std::mem::take(&mut self.input);
        self.transition(KioskState::Idle);

        let Some(event_id) = self.active_event.as_ref().map(|e| e.id) else {
            self.transition(KioskState::Standby);
            if let Err(e) = self.load_active_event(api) {
                debug!("active event reload failed: {e}");
            }
            return Ok(&self.state);
        };

        let student_no = entry.trim().to_uppercase();
        if student_no.is_empty() {
            return Err(AppError::Validation(MSG_EMPTY_INPUT.into()));
        }

        self.transition(KioskState::LookupPending {
            student_no: student_no.clone(),
        });

        let student = match api.student(&student_no) {
            Ok(s) => s,
            Err(AppError::NotFound(msg)) => {
                self.transition(KioskState::LookupFailed {
                    message: format!("Error: {msg}"),
                });
                return Ok(&self.state);
            }
            Err(e) => {
                debug!("student lookup failed: {e}");
                self.transition(KioskState::LookupFailed {
                    message: MSG_LOOKUP_CONNECTION.into(),
                });
                return Ok(&self.state);
            }
        };

        self.transition(KioskState::Found {
            student: student.clone(),
        });
        self.transition(KioskState::CheckInPending {
            student: student.clone(),
        });

        let req = CheckInRequest {
            event_id,
            student_no: &student_no,
            username: self.session.as_ref().map(|s| s.username()),
            token: self.session.as_ref().map(|s| s.token.as_str()),
        };

        let next = match api.check_in(&req) {
            Ok(res) => {
                let message = match res.status {
                    CheckInStatus::In => format!(
                        "TIME-IN SUCCESS! Welcome, {}. ({})",
                        student.first_name, res.time
                    ),
                    CheckInStatus::Out => format!(
                        "TIME-OUT SUCCESS! Goodbye, {}. ({})",
                        student.first_name, res.time
                    ),
                    CheckInStatus::Completed => res.message.clone(),
                };
                KioskState::CheckedIn {
                    status: res.status,
                    message,
                    time: res.time,
                }
            }
            Err(AppError::Conflict(msg)) => KioskState::CheckInFailed {
                message: msg,
                session_expired: false,
            },
            Err(AppError::Unauthenticated(_)) => KioskState::CheckInFailed {
                message: MSG_SESSION_EXPIRED.into(),
                session_expired: true,
            },
            Err(e) => KioskState::CheckInFailed {
                message: format!("Check-in failed: {}", failure_reason(&e)),
                session_expired: false,
            },
        };

        self.transition(next);
        Ok(&self.state)
    }
}

fn failure_reason(e: &AppError) -> String {
    match e {
        AppError::ServerRejected { message, .. } => message.clone(),
        AppError::NotFound(m) => m.clone(),
        AppError::Network(_) => "Server did not respond correctly.".into(),
        other => other.to_string(),
    }
}
