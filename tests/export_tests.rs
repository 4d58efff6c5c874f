use httpmock::prelude::*;
use rattendance::core::export_guard::ExportGuard;
use rattendance::db::log::load_log;
use rattendance::db::store::LocalStore;
use rattendance::errors::AppError;
use rattendance::export::logic::default_report_name;
use rattendance::export::{AttendanceReport, ExportFormat, ExportLogic};
use std::fs;
use std::path::Path;

mod common;
use common::{api_for, setup_test_store, temp_out};

const REPORT: &str = "Student No,Last Name,First Name,Program,Year,Section,AM In,AM Out,PM In,PM Out,Status\n\
23-001,Cruz,Juan,BSCS,1st,A,08:01 AM,,,,Present\n\
23-002,Reyes,Ana,BSCS,1st,A,,,,,Absent\n";

fn report_server() -> MockServer {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/export/attendance/7");
        then.status(200)
            .header("content-type", "text/csv")
            .body(REPORT);
    });
    server
}

#[test]
fn guard_allows_one_export_at_a_time() {
    let guard = ExportGuard::new();
    let shared = guard.clone();

    let ticket = guard.try_begin().expect("first export");
    assert!(shared.is_busy());
    assert!(shared.try_begin().is_none());

    drop(ticket);
    assert!(!guard.is_busy());
    assert!(shared.try_begin().is_some());
}

#[test]
fn default_name_carries_event_and_extension() {
    assert_eq!(
        default_report_name(7, ExportFormat::Xlsx),
        "attendance_report_7.xlsx"
    );
}

#[test]
fn busy_export_is_refused_without_request() {
    let server = MockServer::start();
    let download = server.mock(|when, then| {
        when.method(GET).path("/export/attendance/7");
        then.status(200).body(REPORT);
    });

    let store = LocalStore::open(&setup_test_store("export_busy")).unwrap();
    let api = api_for(&server.base_url());
    let guard = ExportGuard::new();
    let _pending = guard.try_begin().unwrap();

    let out = temp_out("export_busy", "csv");
    let result = ExportLogic::export(&api, &store, &guard, 7, ExportFormat::Csv, Some(&out), true);

    match result {
        Err(AppError::Conflict(msg)) => assert_eq!(msg, "An export is already in progress."),
        other => panic!("expected conflict, got {other:?}"),
    }
    download.assert_calls(0);
    assert!(!Path::new(&out).exists());
}

#[test]
fn csv_export_keeps_server_bytes_and_releases_guard() {
    let server = report_server();
    let store = LocalStore::open(&setup_test_store("export_csv")).unwrap();
    let api = api_for(&server.base_url());
    let guard = ExportGuard::new();

    let out = temp_out("export_csv", "csv");
    let path = ExportLogic::export(&api, &store, &guard, 7, ExportFormat::Csv, Some(&out), true)
        .expect("export");

    assert_eq!(fs::read_to_string(&path).unwrap(), REPORT);
    assert!(!guard.is_busy());

    let log = load_log(store.conn()).unwrap();
    assert!(log.iter().any(|r| r.operation == "export"));
}

#[test]
fn json_export_keys_rows_by_header() {
    let server = report_server();
    let store = LocalStore::open(&setup_test_store("export_json")).unwrap();
    let api = api_for(&server.base_url());

    let out = temp_out("export_json", "json");
    let path = ExportLogic::export(
        &api,
        &store,
        &ExportGuard::new(),
        7,
        ExportFormat::Json,
        Some(&out),
        true,
    )
    .unwrap();

    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Student No"], "23-001");
    assert_eq!(rows[0]["AM In"], "08:01 AM");
    assert_eq!(rows[1]["Status"], "Absent");
}

#[test]
fn xlsx_export_writes_a_workbook() {
    let server = report_server();
    let store = LocalStore::open(&setup_test_store("export_xlsx")).unwrap();
    let api = api_for(&server.base_url());

    let out = temp_out("export_xlsx", "xlsx");
    let path = ExportLogic::export(
        &api,
        &store,
        &ExportGuard::new(),
        7,
        ExportFormat::Xlsx,
        Some(&out),
        true,
    )
    .unwrap();

    let bytes = fs::read(path).unwrap();
    // xlsx is a zip container
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn failed_download_releases_guard() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/export/attendance/8");
        then.status(404).json_body(serde_json::json!({"message": "Event not found"}));
    });

    let store = LocalStore::open(&setup_test_store("export_missing")).unwrap();
    let api = api_for(&server.base_url());
    let guard = ExportGuard::new();

    let out = temp_out("export_missing", "csv");
    let result = ExportLogic::export(&api, &store, &guard, 8, ExportFormat::Csv, Some(&out), true);
    assert!(matches!(result, Err(AppError::NotFound(m)) if m == "Event not found"));
    assert!(!guard.is_busy());
}

#[test]
fn report_parse_keeps_headers_and_rows() {
    let report = AttendanceReport::parse(REPORT.as_bytes()).unwrap();
    assert_eq!(report.headers.len(), 11);
    assert_eq!(report.headers[10], "Status");
    assert_eq!(report.rows.len(), 2);
    assert!(!report.is_empty());
}
