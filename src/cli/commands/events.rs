use crate::cli::commands::{ConsoleCtx, confirm_then, officer_console, require_fields};
use crate::cli::parser::EventsCmd;
use crate::config::Config;
use crate::core::events::{EventFilter, badge, filter_events};
use crate::errors::{AppError, AppResult};
use crate::models::event::EventInput;
use crate::ui::messages::{info, success, warning};
use crate::utils::colors::{GREEN, RESET};
use crate::utils::date::{self, require_date};
use crate::utils::table::Table;

pub fn handle(cmd: &EventsCmd, cfg: &Config) -> AppResult<()> {
    let ctx = officer_console(cfg)?;

    match cmd {
        EventsCmd::List { filter } => show_events(&ctx, *filter),

        EventsCmd::Add { name, date } => {
            require_fields(&[("event name", name.as_str()), ("event date", date.as_str())])?;
            let input = EventInput {
                name: name.trim().to_string(),
                date: require_date(date)?,
            };
            let msg = ctx.api.create_event(&input)?;
            success(if msg.message.is_empty() {
                format!("Event '{}' created.", input.name)
            } else {
                msg.message
            });
            Ok(())
        }

        EventsCmd::Edit { id, name, date } => {
            let current = ctx
                .api
                .events()?
                .into_iter()
                .find(|e| e.id == *id)
                .ok_or_else(|| AppError::NotFound(format!("Event {id} not found")))?;

            let name = name.clone().unwrap_or(current.name);
            let date = date.clone().unwrap_or(current.date);
            require_fields(&[("event name", name.as_str()), ("event date", date.as_str())])?;

            let input = EventInput {
                name: name.trim().to_string(),
                date: require_date(&date)?,
            };
            let msg = ctx.api.update_event(*id, &input)?;
            success(if msg.message.is_empty() {
                format!("Event {id} updated.")
            } else {
                msg.message
            });
            Ok(())
        }

        EventsCmd::Delete { id, yes } => {
            confirm_then(
                "Delete Event",
                &format!("Delete event {id} and all of its attendance records?"),
                *yes,
                || {
                    let msg = ctx.api.delete_event(*id)?;
                    success(if msg.message.is_empty() {
                        format!("Event {id} deleted.")
                    } else {
                        msg.message
                    });
                    Ok(())
                },
            )?;
            Ok(())
        }

        EventsCmd::Activate { id } => {
            let msg = ctx.api.set_active_event(*id)?;
            success(if msg.message.is_empty() {
                format!("Event {id} is now active.")
            } else {
                msg.message
            });
            Ok(())
        }

        EventsCmd::Active => {
            match ctx.api.active_event() {
                Ok(ev) => info(format!("Active event: {} ({}, id {})", ev.name, ev.date, ev.id)),
                Err(AppError::NotFound(_)) => warning("No event is currently active."),
                Err(e) => return Err(e),
            }
            Ok(())
        }
    }
}

pub(crate) fn show_events(ctx: &ConsoleCtx, filter: EventFilter) -> AppResult<()> {
    let events = ctx.api.events()?;
    let today = date::today();
    let shown = filter_events(&events, filter, today);

    if shown.is_empty() {
        info("No events found.");
        return Ok(());
    }

    let active_id = ctx.api.active_event().ok().map(|e| e.id);

    let mut table = Table::with_headers(&["ID", "Name", "Date", ""]);
    for ev in shown {
        let mut tags = Vec::new();
        let b = badge(ev, today);
        if !b.is_empty() {
            tags.push(format!("{GREEN}{b}{RESET}"));
        }
        if Some(ev.id) == active_id {
            tags.push("ACTIVE".to_string());
        }
        table.add_row(vec![
            ev.id.to_string(),
            ev.name.clone(),
            ev.date.clone(),
            tags.join(" "),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}
