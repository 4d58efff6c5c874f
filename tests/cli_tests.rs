use httpmock::prelude::*;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rattendance::core::roster::TEMPLATE_FILE_NAME;
use rattendance::db::store::LocalStore;
use rattendance::models::session::Role;
use serde_json::json;
use std::env;
use std::fs;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

mod common;
use common::{ratt, setup_test_store, signed_in_store, test_home};

#[test]
fn init_creates_store_and_journals_it() {
    let store = setup_test_store("cli_init");

    ratt("cli_init")
        .args(["--store", &store, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Local store initialized"));

    ratt("cli_init")
        .args(["--store", &store, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"));
}

#[test]
fn whoami_without_session_fails() {
    let store = setup_test_store("cli_whoami_none");

    ratt("cli_whoami_none")
        .args(["--store", &store, "--api", "http://127.0.0.1:9/api", "whoami"])
        .assert()
        .failure()
        .stderr(contains("no active session"));
}

#[test]
fn login_persists_session_and_lands_on_console() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/login")
            .body_includes("\"username\":\"admin\"")
            .body_includes("\"password\":\"secret\"");
        then.status(200).json_body(json!({
            "message": "Login successful",
            "token": "abc123",
            "user": {"username": "admin", "role": "admin"}
        }));
    });

    let store = setup_test_store("cli_login");
    let api = format!("{}/api", server.base_url());

    ratt("cli_login")
        .args(["--store", &store, "--api", &api, "login", "admin", "--password", "secret"])
        .assert()
        .success()
        .stdout(contains("Welcome, admin").and(contains("Officer Accounts")));

    login.assert_calls(1);
    let session = LocalStore::open(&store).unwrap().session().unwrap().unwrap();
    assert_eq!(session.token, "abc123");
    assert_eq!(session.user.role, Role::Admin);
}

#[test]
fn login_reports_bad_credentials_and_suspension() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login").body_includes("\"username\":\"ghost\"");
        then.status(401)
            .json_body(json!({"message": "Invalid username or password"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/login").body_includes("\"username\":\"benched\"");
        then.status(403).json_body(json!({"message": "Account is suspended."}));
    });

    let store = setup_test_store("cli_login_fail");
    let api = server.base_url();

    ratt("cli_login_fail")
        .args(["--store", &store, "--api", &api, "login", "ghost", "--password", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid username or password"));

    ratt("cli_login_fail")
        .args(["--store", &store, "--api", &api, "login", "benched", "--password", "x"])
        .assert()
        .failure()
        .stderr(contains("Account is suspended."));

    assert!(LocalStore::open(&store).unwrap().session().unwrap().is_none());
}

#[test]
fn students_list_pages_the_roster() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/check_session");
        then.status(200).json_body(json!({"message": "ok"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/students");
        then.status(200).json_body(json!([
            {"student_no": "23-002", "first_name": "Juan", "last_name": "Cruz", "program": "BSIT", "year_level": "2nd", "section": "B"},
            {"student_no": "23-001", "first_name": "Maria", "middle_name": null, "last_name": "Santos", "program": "BSCS", "year_level": "1st", "section": "A"},
            {"student_no": "23-003", "first_name": "Ana", "last_name": "Reyes", "program": "BSCS", "year_level": "1st", "section": "B"}
        ]));
    });

    let store = setup_test_store("cli_students_list");
    signed_in_store(&store, "officer1", Role::Officer);
    let api = server.base_url();

    ratt("cli_students_list")
        .args(["--store", &store, "--api", &api, "students", "list", "--program", "BSCS"])
        .assert()
        .success()
        .stdout(
            contains("Santos, Maria")
                .and(contains("Reyes, Ana"))
                .and(contains("Cruz, Juan").not())
                .and(contains("Showing 1-2 of 2 (page 1/1)")),
        );
}

#[test]
fn revoked_session_signs_the_terminal_out() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/check_session");
        then.status(401).json_body(json!({"message": "Session revoked"}));
    });
    let students = server.mock(|when, then| {
        when.method(GET).path("/students");
        then.status(200).json_body(json!([]));
    });

    let store = setup_test_store("cli_revoked");
    signed_in_store(&store, "officer1", Role::Officer);
    let api = server.base_url();

    ratt("cli_revoked")
        .args(["--store", &store, "--api", &api, "students", "list"])
        .assert()
        .failure()
        .stderr(contains("revoked"));

    students.assert_calls(0);
    assert!(LocalStore::open(&store).unwrap().session().unwrap().is_none());
}

#[test]
fn officer_cannot_open_admin_view() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/check_session");
        then.status(200).json_body(json!({"message": "ok"}));
    });
    let settings = server.mock(|when, then| {
        when.method(GET).path("/admin/settings");
        then.status(200).json_body(json!({}));
    });

    let store = setup_test_store("cli_admin_view");
    signed_in_store(&store, "officer1", Role::Officer);
    let api = server.base_url();

    ratt("cli_admin_view")
        .args(["--store", &store, "--api", &api, "view", "settings"])
        .assert()
        .failure()
        .stderr(contains("admin access required"));

    settings.assert_calls(0);
    assert!(LocalStore::open(&store).unwrap().session().unwrap().is_none());
}

#[test]
fn kiosk_reads_student_numbers_from_stdin() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/active_event");
        then.status(200)
            .json_body(json!({"id": 7, "name": "Foundation Day", "date": "2025-10-15"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/student/23-001");
        then.status(200).json_body(json!({
            "student_no": "23-001", "first_name": "Juan", "last_name": "Cruz",
            "program": "BSCS", "year_level": "1st", "section": "A"
        }));
    });
    let check_in = server.mock(|when, then| {
        when.method(POST).path("/check_in");
        then.status(200)
            .json_body(json!({"message": "ok", "status": "in", "time": "08:02 AM"}));
    });

    let store = setup_test_store("cli_kiosk");
    let api = server.base_url();

    ratt("cli_kiosk")
        .args(["--store", &store, "--api", &api, "kiosk"])
        .write_stdin("23-001\n\nquit\n")
        .assert()
        .success()
        .stdout(contains("Foundation Day").and(contains("TIME-IN SUCCESS! Welcome, Juan. (08:02 AM)")))
        .stderr(contains("Please enter your Student ID Number."));

    check_in.assert_calls(1);
}

#[test]
fn template_is_written_without_backend() {
    let dir = env::temp_dir().join("cli_template_dir");
    fs::remove_dir_all(&dir).ok();
    let dir_str = dir.to_string_lossy().to_string();

    ratt("cli_template")
        .args(["students", "template", "--dir", &dir_str])
        .assert()
        .success()
        .stdout(contains(TEMPLATE_FILE_NAME));

    let body = fs::read_to_string(dir.join(TEMPLATE_FILE_NAME)).unwrap();
    assert!(body.starts_with("student_no,last_name,first_name,program,year_level,section"));
}

#[test]
fn export_refuses_unknown_format() {
    ratt("cli_export_format")
        .args(["export", "--event", "1", "--format", "pdf"])
        .assert()
        .failure();
}

#[test]
fn monitor_reports_stats_failure_even_when_log_is_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/check_session");
        then.status(200).json_body(json!({"message": "ok"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/stats/7");
        then.status(500).json_body(json!({"message": "db down"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/attendance/7");
        then.status(404).json_body(json!({"message": "Event not found"}));
    });

    let store = setup_test_store("cli_monitor_500");
    signed_in_store(&store, "officer1", Role::Officer);
    let api = server.base_url();

    ratt("cli_monitor_500")
        .args(["--store", &store, "--api", &api, "monitor", "--event", "7"])
        .assert()
        .failure()
        .stderr(contains("db down"))
        .stdout(contains("Checked in:").not());
}

#[test]
fn monitor_treats_missing_event_as_empty() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/check_session");
        then.status(200).json_body(json!({"message": "ok"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/stats/7");
        then.status(404).json_body(json!({"message": "Event not found"}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/attendance/7");
        then.status(404).json_body(json!({"message": "Event not found"}));
    });

    let store = setup_test_store("cli_monitor_404");
    signed_in_store(&store, "officer1", Role::Officer);
    let api = server.base_url();

    ratt("cli_monitor_404")
        .args(["--store", &store, "--api", &api, "monitor", "--event", "7"])
        .assert()
        .success()
        .stdout(contains("Checked in: 0 / 0").and(contains("No check-ins yet.")));
}

#[test]
fn kiosk_stops_at_the_prompt_when_session_is_revoked() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/active_event");
        then.status(200)
            .json_body(json!({"id": 7, "name": "Foundation Day", "date": "2025-10-15"}));
    });
    server.mock(|when, then| {
        when.method(POST).path("/check_session");
        then.status(401).json_body(json!({"message": "Session revoked"}));
    });

    let name = "cli_kiosk_revoked";
    let conf_dir = test_home(name).join(".rattendance");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("rattendance.conf"), "officer_poll_interval_ms: 100\n").unwrap();

    let store = setup_test_store(name);
    signed_in_store(&store, "officer1", Role::Officer);
    let api = server.base_url();

    // stdin stays open and nothing is typed
    let mut child = Command::new(env!("CARGO_BIN_EXE_rattendance"))
        .env("HOME", test_home(name))
        .env_remove("RATTENDANCE_LOG")
        .args(["--store", &store, "--api", &api, "kiosk"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let _stdin = child.stdin.take();

    let deadline = Instant::now() + Duration::from_secs(10);
    let status = loop {
        if let Some(status) = child.try_wait().unwrap() {
            break status;
        }
        if Instant::now() > deadline {
            child.kill().ok();
            panic!("kiosk kept waiting for input after the session was revoked");
        }
        thread::sleep(Duration::from_millis(50));
    };

    let mut stderr = String::new();
    child.stderr.take().unwrap().read_to_string(&mut stderr).unwrap();
    assert!(!status.success());
    assert!(stderr.contains("revoked"), "stderr: {stderr}");
    assert!(LocalStore::open(&store).unwrap().session().unwrap().is_none());
}
