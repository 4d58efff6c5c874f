use crate::cli::commands::{ConsoleCtx, event_or_active, officer_console};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session_guard::{SessionWatch, WatchEvent};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, EventStats};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_band, colorize_in_out};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Monitor { event, follow } = cmd {
        let ctx = officer_console(cfg)?;
        let event_id = event_or_active(&ctx.api, *event)?;

        if !*follow {
            return show_monitoring(&ctx, event_id);
        }

        let interval = cfg.poll_interval(ctx.session.user.role);
        let watch = SessionWatch::start(&cfg.store, ctx.api.clone(), interval)?;
        loop {
            show_monitoring(&ctx, event_id)?;
            if let Some(ev) = watch.wait(interval) {
                return Err(watch_ended(ev));
            }
        }
    }
    Ok(())
}

pub(crate) fn watch_ended(ev: WatchEvent) -> AppError {
    match ev {
        WatchEvent::Revoked => {
            AppError::Unauthenticated("your session was revoked, please log in again".into())
        }
        WatchEvent::SignedOut => AppError::Unauthenticated("signed out".into()),
    }
}

/// Stats and the live log of one event.
pub(crate) fn show_monitoring(ctx: &ConsoleCtx, event_id: i64) -> AppResult<()> {
    // a 404 reads as "nothing yet"; every other failure is reported
    let mut missing = None;
    let stats = match ctx.api.stats(event_id) {
        Ok(s) => s,
        Err(AppError::NotFound(msg)) => {
            missing = Some(msg);
            EventStats::default()
        }
        Err(e) => return Err(e),
    };
    let records = match ctx.api.attendance(event_id) {
        Ok(r) => r,
        Err(AppError::NotFound(msg)) => {
            missing.get_or_insert(msg);
            Vec::new()
        }
        Err(e) => return Err(e),
    };
    if let Some(msg) = missing {
        warning(msg);
    }

    header(format!("Live Monitoring, event {event_id}"));
    print_stats(&stats);
    print_log(&records);
    Ok(())
}

pub(crate) fn print_stats(stats: &EventStats) {
    let color = color_for_band(stats.band());
    println!(
        "Checked in: {} / {}   Attendance: {color}{}{RESET}\n",
        stats.checked_in_count,
        stats.total_roster_size,
        stats.percentage_label()
    );
}

pub(crate) fn print_log(records: &[AttendanceRecord]) {
    if records.is_empty() {
        println!("No check-ins yet.");
        return;
    }
    let mut table = Table::with_headers(&["#", "Student No", "Name", "Year", "Time In", "Time Out"]);
    for (i, r) in records.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            r.student_no.clone(),
            r.full_name(),
            r.year_level.clone(),
            colorize_in_out(&r.time_in, true),
            colorize_in_out(&r.time_out, false),
        ]);
    }
    print!("{}", table.render());
}
