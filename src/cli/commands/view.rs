use crate::cli::commands::admin::{show_audit_logs, show_sessions, show_settings};
use crate::cli::commands::events::show_events;
use crate::cli::commands::monitor::{print_stats, show_monitoring};
use crate::cli::commands::officers::{load_officers, print_officers};
use crate::cli::commands::sections::show_sections;
use crate::cli::commands::students::{load_students, print_students, show_admin_roster};
use crate::cli::commands::{ConsoleCtx, guarded};
use crate::config::Config;
use crate::core::events::EventFilter;
use crate::core::list::ListController;
use crate::core::router::{Console, InitialLoad, Router, View};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::EventStats;
use crate::models::session::Role;
use crate::ui::messages::{header, info, warning};

const MAINTENANCE_COMMANDS: &[(&str, &str)] = &[
    ("students template", "write the roster import template"),
    ("students import <FILE>", "upload a roster CSV"),
    ("students duplicates", "report students sharing the same name"),
    ("students promote", "move every student up one year level"),
    ("students demote <NO>...", "move selected students down one year level"),
    ("admin backup", "download a full server backup"),
    ("admin flush", "delete every attendance record"),
];

pub fn handle(view: View, cfg: &Config) -> AppResult<()> {
    // admin views need an admin session; officer views accept any signed-in user
    let required = if Console::Admin.views().contains(&view) {
        Some(Role::Admin)
    } else {
        None
    };
    let ctx = guarded(cfg, required)?;

    let mut router = Router::new(Console::for_role(ctx.session.user.role));
    let load = router.navigate(view)?;

    header(view.title());
    match load {
        Some(load) => run_initial_load(&ctx, cfg, load),
        None => {
            info("Available maintenance commands:");
            for (cmd, what) in MAINTENANCE_COMMANDS {
                println!("  rattendance {cmd:<26} {what}");
            }
            Ok(())
        }
    }
}

fn run_initial_load(ctx: &ConsoleCtx, cfg: &Config, load: InitialLoad) -> AppResult<()> {
    match load {
        InitialLoad::ActiveEventStats => match ctx.api.active_event() {
            Ok(ev) => {
                info(format!("Active event: {} ({})", ev.name, ev.date));
                show_monitoring(ctx, ev.id)
            }
            Err(AppError::NotFound(_)) => {
                warning("No active event.");
                print_stats(&EventStats::default());
                Ok(())
            }
            Err(e) => Err(e),
        },
        InitialLoad::EventList => show_events(ctx, EventFilter::All),
        InitialLoad::StudentList => {
            let mut list = ListController::new(cfg.roster_page_size).sorted_by("last_name");
            load_students(ctx, &mut list)?;
            print_students(&list);
            Ok(())
        }
        InitialLoad::SectionList => show_sections(ctx),
        InitialLoad::OfficerList => {
            let mut list = ListController::new(cfg.roster_page_size).sorted_by("username");
            load_officers(ctx, &mut list)?;
            print_officers(&list, ctx.session.username());
            Ok(())
        }
        InitialLoad::AdminRoster => show_admin_roster(ctx, cfg, None),
        InitialLoad::GlobalSettings => show_settings(ctx),
        InitialLoad::AuditLogs => show_audit_logs(ctx),
        InitialLoad::ActiveSessions => show_sessions(ctx),
    }
}
