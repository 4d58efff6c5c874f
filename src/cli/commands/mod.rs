//! One handler per command group, plus the plumbing they share.

pub mod admin;
pub mod auth;
pub mod config;
pub mod events;
pub mod export;
pub mod init;
pub mod kiosk;
pub mod log;
pub mod monitor;
pub mod officers;
pub mod sections;
pub mod students;
pub mod view;

use crate::api::ApiClient;
use crate::config::Config;
use crate::core::confirm::ConfirmSlot;
use crate::core::list::ListView;
use crate::core::session_guard::SessionGuard;
use crate::db::store::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::models::session::{Role, Session};
use crate::ui::messages::info;
use crate::ui::prompt;
use crate::utils::table::Table;

pub(crate) fn open_store(cfg: &Config) -> AppResult<LocalStore> {
    LocalStore::open(&cfg.store)
}

/// Everything a guarded command needs.
pub(crate) struct ConsoleCtx {
    pub api: ApiClient,
    pub store: LocalStore,
    pub session: Session,
}

/// Validate the stored session. `role` restricts the command to one role.
pub(crate) fn guarded(cfg: &Config, role: Option<Role>) -> AppResult<ConsoleCtx> {
    let api = ApiClient::from_config(cfg)?;
    let store = open_store(cfg)?;
    let session = SessionGuard::new(&store, &api).require(role)?;
    Ok(ConsoleCtx {
        api,
        store,
        session,
    })
}

pub(crate) fn officer_console(cfg: &Config) -> AppResult<ConsoleCtx> {
    guarded(cfg, None)
}

pub(crate) fn admin_console(cfg: &Config) -> AppResult<ConsoleCtx> {
    guarded(cfg, Some(Role::Admin))
}

/// Empty required fields are rejected before any request.
pub(crate) fn require_fields(fields: &[(&str, &str)]) -> AppResult<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(missing.join(", ")))
    }
}

/// Gate `action` behind a confirmation dialog. Returns whether it ran.
pub(crate) fn confirm_then<F>(title: &str, message: &str, assume_yes: bool, action: F) -> AppResult<bool>
where
    F: FnOnce() -> AppResult<()>,
{
    let mut slot = ConfirmSlot::new();
    slot.request_confirm(title, message, action);

    let ran = if assume_yes {
        slot.accept()?
    } else {
        slot.resolve_with(prompt::confirm_dialog)?
    };

    if !ran {
        info("Operation cancelled.");
    }
    Ok(ran)
}

/// `explicit` or the id of the active event.
pub(crate) fn event_or_active(api: &ApiClient, explicit: Option<i64>) -> AppResult<i64> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    match api.active_event() {
        Ok(ev) => Ok(ev.id),
        Err(AppError::NotFound(_)) => Err(AppError::Validation(
            "event (no event is active, pass --event)".into(),
        )),
        Err(e) => Err(e),
    }
}

/// Render a derived page as a table, or the empty state.
pub(crate) fn print_view<T, F>(view: &ListView<'_, T>, headers: &[&str], row: F)
where
    F: Fn(usize, &T) -> Vec<String>,
{
    if view.is_empty() {
        info(view.summary());
        return;
    }

    let mut table = Table::with_headers(headers);
    for (i, item) in view.rows.iter().enumerate() {
        table.add_row(row(view.offset + i + 1, item));
    }
    print!("{}", table.render());
    println!("{}", view.summary());
}
