use crate::cli::commands::{ConsoleCtx, admin_console, confirm_then};
use crate::cli::parser::AdminCmd;
use crate::config::Config;
use crate::core::backup::{BackupLogic, default_backup_name};
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::models::admin::Settings;
use crate::ui::messages::{Severity, alert, info, success, warning};
use crate::ui::prompt::ask_typed;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &AdminCmd, cfg: &Config) -> AppResult<()> {
    let ctx = admin_console(cfg)?;

    match cmd {
        AdminCmd::Settings {
            academic_year,
            semester,
            org_name,
            absence_fine,
        } => {
            let update = Settings {
                academic_year: academic_year.clone().unwrap_or_default(),
                semester: semester.clone().unwrap_or_default(),
                org_name: org_name.clone().unwrap_or_default(),
                absence_fine: absence_fine.clone().unwrap_or_default(),
            };
            if update == Settings::default() {
                return show_settings(&ctx);
            }

            let mut settings = ctx.api.settings()?;
            settings.merge(update);
            let msg = ctx.api.save_settings(&settings)?;
            ctx.store
                .journal("settings", &settings.academic_year, "Global settings saved");
            success(if msg.message.is_empty() {
                "Settings saved.".to_string()
            } else {
                msg.message
            });
            print_settings(&settings);
            Ok(())
        }

        AdminCmd::Backup {
            file,
            compress,
            force,
        } => {
            let dest = match file {
                Some(f) => expand_tilde(f).to_string_lossy().to_string(),
                None => default_backup_name(),
            };
            let path = BackupLogic::backup(&ctx.api, &ctx.store, &dest, *compress, *force)?;
            success(format!("Backup saved to {}", path.display()));
            Ok(())
        }

        AdminCmd::Flush { yes } => flush(&ctx, *yes),

        AdminCmd::Logs => show_audit_logs(&ctx),

        AdminCmd::Sessions => show_sessions(&ctx),

        AdminCmd::Revoke { username, yes } => {
            let username = username.trim();
            if username == ctx.session.username() {
                warning("Revoking your own session signs this terminal out.");
            }
            confirm_then(
                "Revoke Session",
                &format!("Force {username} to sign in again?"),
                *yes,
                || {
                    let msg = ctx.api.revoke_session(username)?;
                    ctx.store.journal("revoked", username, "Session revoked");
                    success(if msg.message.is_empty() {
                        format!("Session of {username} revoked.")
                    } else {
                        msg.message
                    });
                    Ok(())
                },
            )?;
            Ok(())
        }
    }
}

fn flush(ctx: &ConsoleCtx, yes: bool) -> AppResult<()> {
    // a second, typed confirmation guards the irreversible wipe
    if !yes {
        warning("This deletes every attendance record on the server.");
        if !ask_typed("CONFIRM")? {
            info("Operation cancelled.");
            return Ok(());
        }
    }

    confirm_then(
        "Flush Attendance",
        "Delete all attendance records? This cannot be undone.",
        yes,
        || {
            let msg = ctx.api.flush("attendance", ctx.session.username())?;
            ctx.store
                .journal("flush", "attendance", "All attendance records deleted");
            alert(
                Severity::Success,
                "Flush Complete",
                if msg.message.is_empty() {
                    "Attendance records deleted.".to_string()
                } else {
                    msg.message
                },
            );
            Ok(())
        },
    )?;
    Ok(())
}

pub(crate) fn show_settings(ctx: &ConsoleCtx) -> AppResult<()> {
    let settings = ctx.api.settings()?;
    print_settings(&settings);
    Ok(())
}

fn print_settings(s: &Settings) {
    let mut table = Table::with_headers(&["Setting", "Value"]);
    table.add_row(vec!["Academic year".into(), s.academic_year.clone()]);
    table.add_row(vec!["Semester".into(), s.semester.clone()]);
    table.add_row(vec!["Organization".into(), s.org_name.clone()]);
    table.add_row(vec!["Absence fine".into(), s.absence_fine.clone()]);
    print!("{}", table.render());
}

pub(crate) fn show_audit_logs(ctx: &ConsoleCtx) -> AppResult<()> {
    let entries = ctx.api.audit_logs()?;
    if entries.is_empty() {
        info("No audit entries.");
    } else {
        LogLogic::print_audit(&entries);
    }
    Ok(())
}

pub(crate) fn show_sessions(ctx: &ConsoleCtx) -> AppResult<()> {
    let sessions = ctx.api.active_sessions()?;
    if sessions.is_empty() {
        info("No active sessions.");
        return Ok(());
    }

    let me = ctx.session.username();
    let mut table = Table::with_headers(&["Username", "Role", "Last login"]);
    for s in sessions {
        let name = if s.username == me {
            format!("{} (You)", s.username)
        } else {
            s.username
        };
        table.add_row(vec![name, s.role, s.last_login]);
    }
    print!("{}", table.render());
    Ok(())
}
