use chrono::NaiveDate;
use rattendance::core::events::{EventFilter, badge, filter_events};
use rattendance::core::folders::{FolderLevel, NavPath, events_newest_first};
use rattendance::core::monitoring::Band;
use rattendance::core::router::{Console, InitialLoad, Router, View};
use rattendance::errors::AppError;
use rattendance::models::attendance::EventStats;
use rattendance::models::event::Event;
use rattendance::models::section::{Section, SheetRow};
use rattendance::models::session::Role;

fn event(id: i64, name: &str, date: &str) -> Event {
    Event {
        id,
        name: name.to_string(),
        date: date.to_string(),
    }
}

fn section(id: i64, program: &str, year: &str, name: &str) -> Section {
    Section {
        id,
        program: program.to_string(),
        year_level: year.to_string(),
        name: name.to_string(),
    }
}

fn sheet_row(times: [&str; 4], status: &str) -> SheetRow {
    SheetRow {
        student_no: "23-001".into(),
        last_name: "Cruz".into(),
        first_name: "Juan".into(),
        am_in: times[0].into(),
        am_out: times[1].into(),
        pm_in: times[2].into(),
        pm_out: times[3].into(),
        status: status.into(),
    }
}

#[test]
fn consoles_land_on_their_first_view() {
    let officer = Router::new(Console::for_role(Role::Officer));
    assert_eq!(officer.current(), View::Monitoring);
    assert!(officer.is_visible(View::Monitoring));

    let admin = Router::new(Console::for_role(Role::Admin));
    assert_eq!(admin.current(), View::Officers);
}

#[test]
fn navigate_switches_view_and_returns_its_load() {
    let mut router = Router::new(Console::Officer);
    assert_eq!(
        router.navigate(View::Students).unwrap(),
        Some(InitialLoad::StudentList)
    );
    assert!(router.is_visible(View::Students));
    assert!(!router.is_visible(View::Monitoring));

    let mut admin = Router::new(Console::Admin);
    assert_eq!(admin.navigate(View::Maintenance).unwrap(), None);
    assert_eq!(
        admin.navigate(View::Security).unwrap(),
        Some(InitialLoad::ActiveSessions)
    );
}

#[test]
fn navigate_refuses_views_of_other_console() {
    let mut router = Router::new(Console::Officer);
    assert!(matches!(
        router.navigate(View::Settings),
        Err(AppError::Validation(_))
    ));
    assert_eq!(router.current(), View::Monitoring);
}

#[test]
fn folder_browser_walks_program_year_section() {
    let sections = vec![
        section(1, "BSIT", "1st", "A"),
        section(2, "BSCS", "2nd", "B"),
        section(3, "BSCS", "1st", "A"),
        section(4, "BSCS", "1st", "B"),
    ];

    let mut nav = NavPath::new();
    assert_eq!(nav.breadcrumb(), "Sections");
    assert_eq!(nav.level(&sections), FolderLevel::Programs(vec!["BSCS", "BSIT"]));

    nav.push("BSCS");
    assert_eq!(
        nav.level(&sections),
        FolderLevel::Years {
            program: "BSCS",
            years: vec!["1st", "2nd"],
        }
    );

    nav.push("1st");
    match nav.level(&sections) {
        FolderLevel::Sections { sections: found, .. } => {
            let ids: Vec<i64> = found.iter().map(|s| s.id).collect();
            assert_eq!(ids, vec![3, 4]);
        }
        other => panic!("unexpected level {other:?}"),
    }

    assert!(nav.push("A"));
    assert!(!nav.push("extra"));
    assert_eq!(nav.depth(), 3);
    assert_eq!(nav.breadcrumb(), "Sections > BSCS > 1st > A");

    assert_eq!(nav.back().as_deref(), Some("A"));
    assert_eq!(nav.depth(), 2);
}

#[test]
fn leaf_events_are_newest_first() {
    let events = vec![
        event(1, "Orientation", "2025-08-01"),
        event(2, "Foundation Day", "2025-10-15"),
        event(3, "Seminar", "2025-09-10"),
    ];
    let ids: Vec<i64> = events_newest_first(&events).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn event_filters_are_relative_to_today() {
    let today = NaiveDate::from_ymd_opt(2025, 9, 10).unwrap();
    let events = vec![
        event(1, "Past", "2025-09-09"),
        event(2, "Today", "2025-09-10"),
        event(3, "Later", "2025-12-01"),
        event(4, "Broken", "soon"),
    ];

    let ids = |f| -> Vec<i64> { filter_events(&events, f, today).iter().map(|e| e.id).collect() };
    assert_eq!(ids(EventFilter::All), vec![1, 2, 3, 4]);
    assert_eq!(ids(EventFilter::Upcoming), vec![2, 3]);
    assert_eq!(ids(EventFilter::Past), vec![1]);

    assert_eq!(badge(&events[1], today), "TODAY");
    assert_eq!(badge(&events[2], today), "");
}

#[test]
fn sheet_status_rules() {
    let blank = ["", "--:--", "", ""];
    assert_eq!(sheet_row(blank, "Absent").display_status(), "NA");
    assert_eq!(sheet_row(blank, "Present").display_status(), "NA");
    assert_eq!(sheet_row(blank, "").display_status(), "NA");
    assert_eq!(sheet_row(blank, "Excused").display_status(), "Excused");

    let morning = ["08:01 AM", "", "", ""];
    assert_eq!(sheet_row(morning, "").display_status(), "Present");
    assert_eq!(sheet_row(morning, "Late").display_status(), "Late");
}

#[test]
fn monitoring_percentage_and_bands() {
    let stats = |checked, roster| EventStats {
        checked_in_count: checked,
        total_roster_size: roster,
    };

    assert_eq!(stats(0, 0).percentage(), 0.0);
    assert_eq!(stats(0, 0).band(), Band::Neutral);

    assert_eq!(stats(3, 4).band(), Band::Green);
    assert_eq!(stats(1, 2).band(), Band::Yellow);
    assert_eq!(stats(1, 3).percentage_label(), "33.3%");
    assert_eq!(stats(1, 3).band(), Band::Red);
    assert_eq!(stats(2, 3).percentage(), 66.7);
}
