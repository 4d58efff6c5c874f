use crate::cli::commands::{
    ConsoleCtx, admin_console, confirm_then, officer_console, print_view, require_fields,
};
use crate::cli::parser::{StudentFields, StudentsCmd};
use crate::config::Config;
use crate::core::list::ListController;
use crate::core::roster::{check_import_file, find_duplicates, write_import_template};
use crate::errors::{AppError, AppResult};
use crate::models::student::{Student, StudentInput};
use crate::ui::messages::{Severity, alert, info, success, warning};
use crate::utils::formatting::plural;
use crate::utils::path::expand_tilde;
use std::path::Path;

pub fn handle(cmd: &StudentsCmd, cfg: &Config) -> AppResult<()> {
    match cmd {
        StudentsCmd::List {
            search,
            program,
            year_level,
            section,
            sort,
            page,
        } => {
            let ctx = officer_console(cfg)?;
            let mut list = ListController::new(cfg.roster_page_size).sorted_by("last_name");
            load_students(&ctx, &mut list)?;

            if let Some(q) = search {
                list.set_query(q);
            }
            list.set_filter("program", program.as_deref());
            list.set_filter("year_level", year_level.as_deref());
            list.set_filter("section", section.as_deref());
            // the default sort already counts as one click on last_name
            for field in sort {
                list.sort_by(field);
            }
            list.set_page(*page);

            print_students(&list);
            Ok(())
        }

        StudentsCmd::Add { student_no, fields } => {
            let input = new_student(student_no, fields)?;
            let ctx = officer_console(cfg)?;
            let msg = ctx.api.create_student(&input)?;
            success(or_default(msg.message, "Student added."));
            Ok(())
        }

        StudentsCmd::Edit { student_no, fields } => {
            let ctx = officer_console(cfg)?;
            let current = find_student(&ctx, student_no)?;
            let input = merged_input(&current, fields);
            require_fields(&[
                ("first name", input.first_name.as_str()),
                ("last name", input.last_name.as_str()),
                ("program", input.program.as_str()),
                ("year level", input.year_level.as_str()),
            ])?;
            let msg = ctx.api.update_student(&current.student_no, &input)?;
            success(or_default(msg.message, "Student updated."));
            Ok(())
        }

        StudentsCmd::Delete { student_no, yes } => {
            let ctx = officer_console(cfg)?;
            let student_no = student_no.trim();
            require_fields(&[("student number", student_no)])?;

            confirm_then(
                "Delete Student",
                &format!("Remove student {student_no} and their attendance history?"),
                *yes,
                || {
                    let msg = ctx.api.delete_student(student_no)?;
                    success(or_default(msg.message, "Student deleted."));
                    Ok(())
                },
            )?;
            Ok(())
        }

        StudentsCmd::AvailableSections {
            program,
            year_level,
        } => {
            require_fields(&[("program", program.as_str()), ("year level", year_level.as_str())])?;
            let ctx = officer_console(cfg)?;
            let sections = ctx.api.available_sections(program, year_level)?;
            if sections.is_empty() {
                info(format!("No sections registered for {program} {year_level}."));
            } else {
                for s in sections {
                    println!("{s}");
                }
            }
            Ok(())
        }

        StudentsCmd::Roster { search } => {
            let ctx = admin_console(cfg)?;
            show_admin_roster(&ctx, cfg, search.as_deref())
        }

        StudentsCmd::Duplicates { server } => {
            let ctx = admin_console(cfg)?;
            if *server {
                let report = ctx.api.server_duplicates()?;
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }
            local_duplicates(&ctx)
        }

        StudentsCmd::Template { dir } => {
            let path = write_import_template(&expand_tilde(dir))?;
            success(format!("Template written: {}", path.display()));
            Ok(())
        }

        StudentsCmd::Import { file } => {
            let path = expand_tilde(file);
            let rows = check_import_file(&path)?;
            let ctx = admin_console(cfg)?;
            import(&ctx, &path, rows)
        }

        StudentsCmd::Promote { yes } => {
            let ctx = admin_console(cfg)?;
            confirm_then(
                "Promote Students",
                "Move every student up one year level? This cannot be undone.",
                *yes,
                || {
                    let msg = ctx.api.promote_students()?;
                    ctx.store
                        .journal("promote", "all", &or_default(msg.message.clone(), "promoted"));
                    alert(
                        Severity::Success,
                        "Promotion Complete",
                        or_default(msg.message, "Students promoted."),
                    );
                    Ok(())
                },
            )?;
            Ok(())
        }

        StudentsCmd::Demote { student_nos, yes } => {
            if student_nos.is_empty() {
                warning("Select at least one student to demote.");
                return Err(AppError::Validation("student numbers".into()));
            }
            let ctx = admin_console(cfg)?;
            confirm_then(
                "Demote Students",
                &format!(
                    "Move {} down one year level?",
                    plural(student_nos.len(), "student")
                ),
                *yes,
                || {
                    let msg = ctx.api.demote_students(student_nos)?;
                    ctx.store
                        .journal("demote", &student_nos.join(","), "Demoted one year level");
                    success(or_default(msg.message, "Students demoted."));
                    Ok(())
                },
            )?;
            Ok(())
        }
    }
}

fn or_default(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}

pub(crate) fn load_students(ctx: &ConsoleCtx, list: &mut ListController<Student>) -> AppResult<()> {
    let token = list.begin_load();
    let students = ctx.api.students()?;
    list.finish_load(token, students);
    Ok(())
}

pub(crate) fn print_students(list: &ListController<Student>) {
    let view = list.view();
    if let Some(sort) = &list.query().sort {
        info(format!("Sorted by {} {}", sort.field, sort.dir.arrow()));
    }
    print_view(
        &view,
        &["#", "Student No", "Name", "Program", "Year", "Section"],
        |n, s| {
            vec![
                n.to_string(),
                s.student_no.clone(),
                s.display_name(),
                s.program.clone(),
                s.year_level.clone(),
                s.section.clone(),
            ]
        },
    );
}

pub(crate) fn show_admin_roster(ctx: &ConsoleCtx, cfg: &Config, search: Option<&str>) -> AppResult<()> {
    let mut list = ListController::new(cfg.admin_roster_limit);
    load_students(ctx, &mut list)?;
    if let Some(q) = search {
        list.set_query(q);
    }

    let view = list.view();
    info(format!("{} found", plural(view.matched, "student")));
    print_view(
        &view,
        &["Student No", "Name", "Program", "Year", "Section"],
        |_, s| {
            vec![
                s.student_no.clone(),
                s.display_name(),
                s.program.clone(),
                s.year_level.clone(),
                s.section.clone(),
            ]
        },
    );
    Ok(())
}

fn local_duplicates(ctx: &ConsoleCtx) -> AppResult<()> {
    let students = ctx.api.students()?;
    if students.is_empty() {
        alert(Severity::Warning, "No Data", "No student records found to check.");
        return Ok(());
    }

    let groups = find_duplicates(&students);
    if groups.is_empty() {
        alert(
            Severity::Success,
            "No Duplicates",
            "No duplicate names found in the roster.",
        );
    } else {
        let names: Vec<String> = groups.iter().map(|g| g.describe()).collect();
        alert(
            Severity::Warning,
            "Potential Duplicates Found",
            format!("Found {} issues:\n{}", groups.len(), names.join("\n")),
        );
    }
    Ok(())
}

fn import(ctx: &ConsoleCtx, path: &Path, rows: usize) -> AppResult<()> {
    info(format!("Uploading {} ({})…", path.display(), plural(rows, "row")));
    let result = ctx.api.import_students(path)?;
    let count = result.count.map(|c| c as usize).unwrap_or(rows);
    ctx.store.journal(
        "import",
        &path.to_string_lossy(),
        &format!("Imported {}", plural(count, "student")),
    );
    alert(
        Severity::Success,
        "Import Complete",
        format!("{} ({})", or_default(result.message, "Import successful"), plural(count, "student")),
    );
    Ok(())
}

fn field(v: &Option<String>) -> String {
    v.as_deref().unwrap_or_default().trim().to_string()
}

fn new_student(student_no: &str, f: &StudentFields) -> AppResult<StudentInput> {
    let input = StudentInput {
        student_no: Some(student_no.trim().to_uppercase()),
        first_name: field(&f.first_name),
        middle_name: field(&f.middle_name),
        last_name: field(&f.last_name),
        program: field(&f.program),
        year_level: field(&f.year_level),
        section: field(&f.section),
    };
    require_fields(&[
        ("student number", student_no),
        ("first name", input.first_name.as_str()),
        ("last name", input.last_name.as_str()),
        ("program", input.program.as_str()),
        ("year level", input.year_level.as_str()),
    ])?;
    Ok(input)
}

fn merged_input(current: &Student, f: &StudentFields) -> StudentInput {
    let mut input = StudentInput::from_student(current);
    let pick = |target: &mut String, v: &Option<String>| {
        if let Some(v) = v {
            *target = v.trim().to_string();
        }
    };
    pick(&mut input.first_name, &f.first_name);
    pick(&mut input.middle_name, &f.middle_name);
    pick(&mut input.last_name, &f.last_name);
    pick(&mut input.program, &f.program);
    pick(&mut input.year_level, &f.year_level);
    pick(&mut input.section, &f.section);
    input
}

fn find_student(ctx: &ConsoleCtx, student_no: &str) -> AppResult<Student> {
    let wanted = student_no.trim();
    ctx.api
        .students()?
        .into_iter()
        .find(|s| s.student_no.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| AppError::NotFound(format!("Student ID {wanted} is not registered.")))
}
