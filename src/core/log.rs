use crate::db::log::{LogRow, load_log};
use crate::db::store::LocalStore;
use crate::errors::AppResult;
use crate::models::admin::AuditLogEntry;
use crate::utils::formatting::truncate;
use crate::utils::table::{strip_ansi, visible_width};
use ansi_term::Colour;

/// Colour of a local journal operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "login" => Colour::Green,
        "logout" => Colour::Yellow,
        "revoked" | "flush" => Colour::Red,
        "settings" => Colour::Blue,
        "promote" | "demote" => Colour::Purple,
        "import" => Colour::Green,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

/// Colour of a server audit action: destructive red, edits blue, inserts
/// green.
pub fn color_for_action(action: &str) -> Colour {
    let a = action.to_uppercase();
    if a.contains("DELETE") || a.contains("FLUSH") {
        Colour::Red
    } else if a.contains("UPDATE") || a.contains("EDIT") {
        Colour::Blue
    } else if a.contains("CREATE") || a.contains("IMPORT") {
        Colour::Green
    } else {
        Colour::White
    }
}

const OP_MAX: usize = 60;

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &LocalStore) -> AppResult<()> {
        let entries = load_log(store.conn())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let lines = format_log(&entries);

        println!("📜 Internal log:\n");
        for line in lines {
            println!("{line}");
        }
        Ok(())
    }

    pub fn print_audit(entries: &[AuditLogEntry]) {
        let actor_w = entries
            .iter()
            .map(|e| visible_width(&e.actor_username))
            .max()
            .unwrap_or(5);
        let action_w = entries
            .iter()
            .map(|e| visible_width(&e.action))
            .max()
            .unwrap_or(6);

        for e in entries {
            let colour = color_for_action(&e.action);
            let padding = " ".repeat(action_w.saturating_sub(visible_width(&e.action)));
            println!(
                "{} | {:<actor_w$} | {}{} | {}",
                e.timestamp,
                e.actor_username,
                colour.bold().paint(e.action.as_str()),
                padding,
                e.details,
                actor_w = actor_w
            );
        }
    }
}

/// One line per journal row: `id: date | op (target) => message`, the
/// operation column capped at 60 visible characters.
pub fn format_log(entries: &[LogRow]) -> Vec<String> {
    let rows: Vec<(i64, String, &str, String, &str)> = entries
        .iter()
        .map(|r| {
            let date = chrono::DateTime::parse_from_rfc3339(&r.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| r.date.clone());

            let op_target = if r.target.is_empty() {
                r.operation.clone()
            } else {
                format!("{} ({})", r.operation, r.target)
            };

            (r.id, date, r.operation.as_str(), op_target, r.message.as_str())
        })
        .collect();

    let op_w = rows
        .iter()
        .map(|(_, _, _, op_target, _)| visible_width(op_target))
        .max()
        .unwrap_or(10)
        .min(OP_MAX);
    let id_w = rows
        .iter()
        .map(|(id, ..)| id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = rows
        .iter()
        .map(|(_, date, ..)| date.len())
        .max()
        .unwrap_or(10);

    rows.into_iter()
        .map(|(id, date, operation, op_target, message)| {
            let color = color_for_operation(operation);

            let truncated = truncate(&op_target, OP_MAX);

            // only the operation word is coloured
            let recolored = match truncated.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(visible_width(&strip_ansi(&recolored))));

            format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                recolored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            )
        })
        .collect()
}
