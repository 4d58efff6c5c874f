use crate::api::SheetQuery;
use crate::cli::commands::{ConsoleCtx, confirm_then, officer_console, print_view, require_fields};
use crate::cli::parser::{Commands, SectionsCmd};
use crate::config::Config;
use crate::core::folders::{FolderLevel, NavPath, events_newest_first};
use crate::core::list::ListController;
use crate::errors::AppResult;
use crate::models::section::SectionInput;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{colorize_in_out, colorize_status};
use crate::utils::table::Table;

pub fn handle(cmd: &SectionsCmd, cfg: &Config) -> AppResult<()> {
    let ctx = officer_console(cfg)?;

    match cmd {
        SectionsCmd::List => show_sections(&ctx),

        SectionsCmd::Add {
            program,
            year_level,
            name,
        } => {
            require_fields(&[
                ("program", program.as_str()),
                ("year level", year_level.as_str()),
                ("section name", name.as_str()),
            ])?;
            let msg = ctx.api.create_section(&SectionInput {
                program: program.trim().to_string(),
                year_level: year_level.trim().to_string(),
                name: name.trim().to_string(),
            })?;
            success(if msg.message.is_empty() {
                "Section added.".to_string()
            } else {
                msg.message
            });
            Ok(())
        }

        SectionsCmd::Delete { id, yes } => {
            confirm_then(
                "Delete Section",
                &format!("Delete section {id}? Students keep their section label."),
                *yes,
                || {
                    let msg = ctx.api.delete_section(*id)?;
                    success(if msg.message.is_empty() {
                        format!("Section {id} deleted.")
                    } else {
                        msg.message
                    });
                    Ok(())
                },
            )?;
            Ok(())
        }

        SectionsCmd::Browse { path } => browse(&ctx, path),
    }
}

pub(crate) fn show_sections(ctx: &ConsoleCtx) -> AppResult<()> {
    let sections = ctx.api.sections()?;
    if sections.is_empty() {
        info("No sections registered.");
        return Ok(());
    }
    let mut table = Table::with_headers(&["ID", "Program", "Year", "Section"]);
    for s in &sections {
        table.add_row(vec![
            s.id.to_string(),
            s.program.clone(),
            s.year_level.clone(),
            s.name.clone(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

fn browse(ctx: &ConsoleCtx, parts: &[String]) -> AppResult<()> {
    let sections = ctx.api.sections()?;
    let mut nav = NavPath::new();
    for p in parts {
        if !nav.push(p) {
            warning(format!("Ignoring extra path element '{p}'"));
        }
    }

    println!("📁 {}\n", nav.breadcrumb());

    match nav.level(&sections) {
        FolderLevel::Programs(programs) => print_folders(&programs),
        FolderLevel::Years { years, .. } => print_folders(&years),
        FolderLevel::Sections { sections, .. } => {
            if sections.is_empty() {
                info("Empty folder.");
            }
            for s in sections {
                println!("  Section {} (id {})", s.name, s.id);
            }
        }
        FolderLevel::Events {
            program,
            year,
            section,
        } => {
            let events = ctx.api.events()?;
            if events.is_empty() {
                info("No events yet.");
            }
            for ev in events_newest_first(&events) {
                println!("  {} {} (id {})", ev.date, ev.name, ev.id);
            }
            println!(
                "\nOpen a sheet with: rattendance sheet --event <id> --program {program} --year {year} --section {section}"
            );
        }
    }
    Ok(())
}

fn print_folders(names: &[&str]) {
    if names.is_empty() {
        info("Empty folder.");
    }
    for n in names {
        println!("  📂 {n}");
    }
}

/// `sheet` command: paginated section spreadsheet.
pub fn handle_sheet(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sheet {
        event,
        program,
        year,
        section,
        search,
        page,
    } = cmd
    {
        let ctx = officer_console(cfg)?;
        let query = SheetQuery {
            event_id: *event,
            program: program.clone(),
            year: year.clone(),
            section: section.clone(),
        };

        let mut list = ListController::new(cfg.sheet_page_size);
        let token = list.begin_load();
        let rows = ctx.api.section_spreadsheet(&query)?;
        list.finish_load(token, rows);

        if let Some(q) = search {
            list.set_query(q);
        }
        list.set_page(*page);

        println!("📋 {program} {year}-{section}, event {event}\n");
        print_view(
            &list.view(),
            &["#", "Student No", "Name", "AM In", "AM Out", "PM In", "PM Out", "Status"],
            |n, r| {
                vec![
                    n.to_string(),
                    r.student_no.clone(),
                    format!("{}, {}", r.last_name, r.first_name),
                    colorize_in_out(&r.am_in, true),
                    colorize_in_out(&r.am_out, false),
                    colorize_in_out(&r.pm_in, true),
                    colorize_in_out(&r.pm_out, false),
                    colorize_status(r.display_status()),
                ]
            },
        );
    }
    Ok(())
}
