use rattendance::core::roster::{
    IMPORT_COLUMNS, TEMPLATE_FILE_NAME, check_import_file, find_duplicates, import_template,
    write_import_template,
};
use rattendance::errors::AppError;
use std::env;
use std::fs;
use std::path::Path;

mod common;
use common::{student, temp_out};

#[test]
fn duplicates_group_normalized_names_in_first_seen_order() {
    let students = vec![
        student("1", "Cruz ", "Juan", "BSCS", "1st", "A"),
        student("2", "Reyes", "Ana", "BSCS", "1st", "A"),
        student("3", "cruz", "JUAN", "BSIT", "2nd", "B"),
        student("4", "Santos", "Maria", "BSCS", "1st", "A"),
        student("5", "Reyes", " ana", "BSCS", "1st", "B"),
        student("6", "CRUZ", "juan ", "BSCS", "3rd", "A"),
    ];

    let groups = find_duplicates(&students);
    assert_eq!(groups.len(), 2);

    assert_eq!(groups[0].last_name, "Cruz");
    assert_eq!(groups[0].first_name, "Juan");
    assert_eq!(groups[0].count, 3);
    assert_eq!(groups[0].describe(), "• Cruz, Juan (3x)");

    assert_eq!(groups[1].describe(), "• Reyes, Ana (2x)");
}

#[test]
fn no_duplicates_in_distinct_roster() {
    let students = vec![
        student("1", "Cruz", "Juan", "BSCS", "1st", "A"),
        student("2", "Cruz", "Pedro", "BSCS", "1st", "A"),
    ];
    assert!(find_duplicates(&students).is_empty());
    assert!(find_duplicates(&[]).is_empty());
}

#[test]
fn template_has_import_columns_and_sample_row() {
    let body = import_template().expect("template");
    let mut lines = body.lines();
    assert_eq!(lines.next(), Some(IMPORT_COLUMNS.join(",").as_str()));
    assert_eq!(lines.next(), Some("23-00123,Dela Cruz,Juan,BSCS,1st,A"));
    assert_eq!(lines.next(), None);
}

#[test]
fn template_written_file_passes_import_check() {
    let dir = env::temp_dir().join("rattendance_template_check");
    fs::remove_dir_all(&dir).ok();

    let path = write_import_template(&dir).expect("write template");
    assert!(path.ends_with(TEMPLATE_FILE_NAME));
    assert_eq!(check_import_file(&path).expect("valid template"), 1);
}

#[test]
fn import_check_reports_missing_columns() {
    let path = temp_out("import_missing_cols", "csv");
    fs::write(&path, "student_no,last_name,first_name\n1,Cruz,Juan\n").unwrap();

    match check_import_file(Path::new(&path)) {
        Err(AppError::Validation(msg)) => {
            assert!(msg.contains("program"));
            assert!(msg.contains("year_level"));
            assert!(msg.contains("section"));
            assert!(!msg.contains("first_name"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn import_check_rejects_header_only_and_missing_file() {
    let path = temp_out("import_header_only", "csv");
    fs::write(&path, format!("{}\n", IMPORT_COLUMNS.join(","))).unwrap();
    assert!(matches!(
        check_import_file(Path::new(&path)),
        Err(AppError::Validation(_))
    ));

    let missing = temp_out("import_absent", "csv");
    assert!(matches!(
        check_import_file(Path::new(&missing)),
        Err(AppError::Validation(_))
    ));
}
