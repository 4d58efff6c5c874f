use httpmock::prelude::*;
use rattendance::core::kiosk::{
    KioskFlow, KioskState, MSG_EMPTY_INPUT, MSG_LOOKUP_CONNECTION, MSG_SESSION_EXPIRED, MSG_STANDBY,
};
use rattendance::errors::AppError;
use rattendance::models::attendance::CheckInStatus;
use rattendance::models::session::Role;
use serde_json::json;

mod common;
use common::{api_for, session};

fn with_active_event(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/active_event");
        then.status(200)
            .json_body(json!({"id": 7, "name": "Foundation Day", "date": "2025-10-15"}));
    });
}

fn with_student(server: &MockServer, no: &str, first: &str) {
    let no = no.to_string();
    let first = first.to_string();
    server.mock(|when, then| {
        when.method(GET).path(format!("/student/{no}"));
        then.status(200).json_body(json!({
            "student_no": no,
            "first_name": first,
            "middle_name": null,
            "last_name": "Cruz",
            "program": "BSCS",
            "year_level": "1st",
            "section": "A"
        }));
    });
}

fn ready_flow(server: &MockServer) -> (KioskFlow, rattendance::api::ApiClient) {
    let api = api_for(&server.base_url());
    let mut flow = KioskFlow::new(Some(session("officer1", Role::Officer)));
    let ev = flow.load_active_event(&api).unwrap().cloned();
    assert_eq!(ev.map(|e| e.id), Some(7));
    (flow, api)
}

#[test]
fn time_in_greets_the_student() {
    let server = MockServer::start();
    with_active_event(&server);
    with_student(&server, "23-001", "Juan");
    let check_in = server.mock(|when, then| {
        when.method(POST)
            .path("/check_in")
            .body_includes("\"student_no\":\"23-001\"")
            .body_includes("\"event_id\":7")
            .body_includes("\"username\":\"officer1\"");
        then.status(200)
            .json_body(json!({"message": "Time in recorded", "status": "in", "time": "08:02 AM"}));
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("  23-001 ");
    let state = flow.submit(&api).unwrap().clone();

    check_in.assert_calls(1);
    assert_eq!(flow.input(), "");
    assert!(state.is_success());
    assert_eq!(
        state.message(),
        Some("TIME-IN SUCCESS! Welcome, Juan. (08:02 AM)")
    );
}

#[test]
fn time_out_says_goodbye_with_time() {
    let server = MockServer::start();
    with_active_event(&server);
    with_student(&server, "23-002", "Ana");
    server.mock(|when, then| {
        when.method(POST).path("/check_in");
        then.status(200)
            .json_body(json!({"message": "Time out recorded", "status": "out", "time": "04:30 PM"}));
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("23-002");
    let state = flow.submit(&api).unwrap().clone();

    assert_eq!(
        state,
        KioskState::CheckedIn {
            status: CheckInStatus::Out,
            message: "TIME-OUT SUCCESS! Goodbye, Ana. (04:30 PM)".into(),
            time: "04:30 PM".into(),
        }
    );
}

#[test]
fn lowercase_entry_is_uppercased_before_lookup() {
    let server = MockServer::start();
    with_active_event(&server);
    with_student(&server, "AB-77", "Jose");
    server.mock(|when, then| {
        when.method(POST).path("/check_in");
        then.status(200)
            .json_body(json!({"message": "Attendance already completed", "status": "completed", "time": "05:00 PM"}));
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("ab-77");
    let state = flow.submit(&api).unwrap();
    assert_eq!(state.message(), Some("Attendance already completed"));
}

#[test]
fn unknown_student_never_checks_in() {
    let server = MockServer::start();
    with_active_event(&server);
    server.mock(|when, then| {
        when.method(GET).path("/student/99-999");
        then.status(404)
            .json_body(json!({"message": "Student ID 99-999 is not registered."}));
    });
    let check_in = server.mock(|when, then| {
        when.method(POST).path("/check_in");
        then.status(200);
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("99-999");
    let state = flow.submit(&api).unwrap().clone();

    check_in.assert_calls(0);
    assert_eq!(
        state,
        KioskState::LookupFailed {
            message: "Error: Student ID 99-999 is not registered.".into()
        }
    );
    assert!(state.is_terminal());
}

#[test]
fn lookup_server_error_reports_connection_problem() {
    let server = MockServer::start();
    with_active_event(&server);
    server.mock(|when, then| {
        when.method(GET).path("/student/23-001");
        then.status(500);
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("23-001");
    assert_eq!(flow.submit(&api).unwrap().message(), Some(MSG_LOOKUP_CONNECTION));
}

#[test]
fn conflict_message_is_shown_verbatim() {
    let server = MockServer::start();
    with_active_event(&server);
    with_student(&server, "23-001", "Juan");
    server.mock(|when, then| {
        when.method(POST).path("/check_in");
        then.status(409)
            .json_body(json!({"message": "Please wait before scanning again."}));
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("23-001");
    let state = flow.submit(&api).unwrap().clone();
    assert_eq!(
        state,
        KioskState::CheckInFailed {
            message: "Please wait before scanning again.".into(),
            session_expired: false,
        }
    );
}

#[test]
fn rejected_officer_session_expires_the_kiosk() {
    let server = MockServer::start();
    with_active_event(&server);
    with_student(&server, "23-001", "Juan");
    server.mock(|when, then| {
        when.method(POST).path("/check_in");
        then.status(401).json_body(json!({"message": "Invalid session"}));
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("23-001");
    let state = flow.submit(&api).unwrap().clone();
    assert_eq!(
        state,
        KioskState::CheckInFailed {
            message: MSG_SESSION_EXPIRED.into(),
            session_expired: true,
        }
    );
}

#[test]
fn other_failures_carry_the_server_reason() {
    let server = MockServer::start();
    with_active_event(&server);
    with_student(&server, "23-001", "Juan");
    server.mock(|when, then| {
        when.method(POST).path("/check_in");
        then.status(500).json_body(json!({"message": "Database locked"}));
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("23-001");
    assert_eq!(
        flow.submit(&api).unwrap().message(),
        Some("Check-in failed: Database locked")
    );
}

#[test]
fn empty_entry_is_rejected_without_requests() {
    let server = MockServer::start();
    with_active_event(&server);
    let lookup = server.mock(|when, then| {
        when.method(GET).path_includes("/student/");
        then.status(200);
    });

    let (mut flow, api) = ready_flow(&server);
    flow.set_input("   ");
    match flow.submit(&api) {
        Err(AppError::Validation(msg)) => assert_eq!(msg, MSG_EMPTY_INPUT),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(flow.state(), &KioskState::Idle);
    lookup.assert_calls(0);
}

#[test]
fn no_active_event_means_standby() {
    let server = MockServer::start();
    let active = server.mock(|when, then| {
        when.method(GET).path("/active_event");
        then.status(404).json_body(json!({"message": "No active event"}));
    });
    let lookup = server.mock(|when, then| {
        when.method(GET).path_includes("/student/");
        then.status(200);
    });

    let api = api_for(&server.base_url());
    let mut flow = KioskFlow::new(None);
    assert!(flow.load_active_event(&api).unwrap().is_none());

    flow.set_input("23-001");
    let state = flow.submit(&api).unwrap();
    assert_eq!(state, &KioskState::Standby);
    assert_eq!(state.message(), Some(MSG_STANDBY));

    lookup.assert_calls(0);
    // the standby submission retries the active event
    active.assert_calls(2);
}
