#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rattendance::api::ApiClient;
use rattendance::db::store::LocalStore;
use rattendance::models::session::{Role, Session, UserProfile};
use rattendance::models::student::Student;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a private directory so no real
/// config file is picked up.
pub fn ratt(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rattendance");
    cmd.env("HOME", test_home(name));
    cmd.env_remove("RATTENDANCE_LOG");
    cmd
}

pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Unique store path inside the system temp dir, removed if it exists
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Temporary output file path, removed if it exists
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn session(username: &str, role: Role) -> Session {
    Session {
        token: format!("tok-{username}"),
        user: UserProfile {
            username: username.to_string(),
            role,
        },
    }
}

/// Open the store at `path` with a signed-in user.
pub fn signed_in_store(path: &str, username: &str, role: Role) -> LocalStore {
    let store = LocalStore::open(path).expect("open store");
    store
        .save_session(&session(username, role))
        .expect("save session");
    store
}

pub fn api_for(base_url: &str) -> ApiClient {
    ApiClient::new(base_url, 2_000).expect("api client")
}

pub fn student(no: &str, last: &str, first: &str, program: &str, year: &str, section: &str) -> Student {
    Student {
        student_no: no.to_string(),
        first_name: first.to_string(),
        middle_name: String::new(),
        last_name: last.to_string(),
        program: program.to_string(),
        year_level: year.to_string(),
        section: section.to_string(),
    }
}
