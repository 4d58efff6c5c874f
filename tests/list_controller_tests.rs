use rattendance::core::list::{ListController, SortDir, page_count};
use rattendance::models::student::Student;

mod common;
use common::student;

fn roster() -> Vec<Student> {
    vec![
        student("23-001", "Santos", "Maria", "BSCS", "1st", "A"),
        student("23-002", "Cruz", "Juan", "BSIT", "2nd", "B"),
        student("23-003", "Reyes", "Ana", "BSCS", "1st", "B"),
        student("23-004", "Bautista", "Jose", "BSCS", "3rd", "A"),
        student("23-005", "cruz", "Pedro", "BSIT", "1st", "A"),
    ]
}

fn names(list: &ListController<Student>) -> Vec<String> {
    list.view().rows.iter().map(|s| s.student_no.clone()).collect()
}

#[test]
fn page_count_is_never_zero() {
    assert_eq!(page_count(0, 10), 1);
    assert_eq!(page_count(10, 10), 1);
    assert_eq!(page_count(11, 10), 2);
    assert_eq!(page_count(5, 0), 5);
}

#[test]
fn search_matches_name_or_number_case_insensitively() {
    let mut list = ListController::new(10);
    list.load(roster());

    list.set_query("CRUZ");
    assert_eq!(names(&list), vec!["23-002", "23-005"]);

    list.set_query("23-003");
    assert_eq!(names(&list), vec!["23-003"]);

    list.set_query("  ");
    assert_eq!(list.view().matched, 5);
}

#[test]
fn filters_combine_and_all_clears_them() {
    let mut list = ListController::new(10);
    list.load(roster());

    list.set_filter("program", Some("BSCS"));
    list.set_filter("year_level", Some("1st"));
    assert_eq!(names(&list), vec!["23-001", "23-003"]);

    list.set_filter("year_level", Some("All"));
    assert_eq!(list.view().matched, 3);

    list.set_filter("program", None);
    assert_eq!(list.view().matched, 5);
}

#[test]
fn sorting_same_field_toggles_direction() {
    let mut list = ListController::new(10);
    list.load(roster());

    assert_eq!(list.sort_by("last_name"), SortDir::Asc);
    assert_eq!(
        names(&list),
        vec!["23-004", "23-002", "23-005", "23-003", "23-001"]
    );

    assert_eq!(list.sort_by("last_name"), SortDir::Desc);
    // "Cruz" and "cruz" compare equal and keep their cached order
    assert_eq!(
        names(&list),
        vec!["23-001", "23-003", "23-002", "23-005", "23-004"]
    );

    assert_eq!(list.sort_by("student_no"), SortDir::Asc);
}

#[test]
fn page_is_clamped_into_range() {
    let mut list = ListController::new(2);
    list.load(roster());

    assert_eq!(list.total_pages(), 3);
    assert_eq!(list.set_page(0), 1);
    assert_eq!(list.set_page(99), 3);
    assert_eq!(list.view().rows.len(), 1);
    assert_eq!(list.view().summary(), "Showing 5-5 of 5 (page 3/3)");

    assert_eq!(list.next_page(), 3);
    assert_eq!(list.prev_page(), 2);
}

#[test]
fn new_query_resets_to_first_page() {
    let mut list = ListController::new(2);
    list.load(roster());
    list.set_page(3);

    list.set_query("a");
    assert_eq!(list.page(), 1);
}

#[test]
fn empty_result_has_one_page_and_empty_state() {
    let mut list: ListController<Student> = ListController::new(10);
    list.load(roster());
    list.set_query("nobody");

    let view = list.view();
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.page, 1);
    assert_eq!(view.summary(), "No records found.");
}

#[test]
fn stale_load_is_discarded() {
    let mut list = ListController::new(10);

    let first = list.begin_load();
    let second = list.begin_load();

    assert!(list.finish_load(second, roster()));
    assert!(!list.finish_load(first, vec![student("99-999", "Old", "Data", "X", "1st", "A")]));

    assert_eq!(list.items().len(), 5);
}

#[test]
fn reload_clamps_current_page() {
    let mut list = ListController::new(2);
    list.load(roster());
    list.set_page(3);

    list.load(roster().into_iter().take(2).collect());
    assert_eq!(list.page(), 1);
}
