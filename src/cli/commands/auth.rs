use crate::api::ApiClient;
use crate::cli::commands::{confirm_then, officer_console, open_store, require_fields};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::router::Console;
use crate::core::session_guard::{GuardOutcome, SessionGuard};
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::read_line;

const SUSPENDED: &str = "Account is suspended.";

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Login { username, password } => login(cfg, username, password.as_deref()),
        Commands::Logout { yes } => logout(cfg, *yes),
        Commands::Whoami => whoami(cfg),
        Commands::Password {
            current,
            new_password,
        } => change_password(cfg, current.as_deref(), new_password.as_deref()),
        _ => Ok(()),
    }
}

fn value_or_prompt(given: Option<&str>, label: &str) -> AppResult<String> {
    match given {
        Some(v) => Ok(v.to_string()),
        None => Ok(read_line(&format!("{label}: "))?.unwrap_or_default()),
    }
}

fn login(cfg: &Config, username: &str, password: Option<&str>) -> AppResult<()> {
    let username = username.trim();
    let password = value_or_prompt(password, "Password")?;
    require_fields(&[("username", username), ("password", password.as_str())])?;

    let api = ApiClient::from_config(cfg)?;
    let store = open_store(cfg)?;

    let resp = api.login(username, &password).map_err(|e| match e {
        AppError::ServerRejected { status: 403, message } if message == "Forbidden" => {
            AppError::ServerRejected {
                status: 403,
                message: SUSPENDED.into(),
            }
        }
        other => other,
    })?;

    let session = Session {
        token: resp.token,
        user: resp.user,
    };
    store.save_session(&session)?;
    store.journal(
        "login",
        session.username(),
        &format!("Signed in as {}", session.user.role),
    );

    let console = Console::for_role(session.user.role);
    success(format!("Login successful! Welcome, {}.", session.username()));
    info(format!(
        "Signed in to the {} (start view: {}).",
        console.label(),
        console.landing().title()
    ));
    Ok(())
}

fn logout(cfg: &Config, yes: bool) -> AppResult<()> {
    let store = open_store(cfg)?;
    let Some(session) = store.session()? else {
        store.clear()?;
        info("Not signed in.");
        return Ok(());
    };

    let done = confirm_then(
        "Sign Out",
        "Are you sure you want to end your session?",
        yes,
        || {
            store.clear()?;
            store.journal("logout", session.username(), "Signed out");
            Ok(())
        },
    )?;

    if done {
        success("Signed out.");
    }
    Ok(())
}

fn whoami(cfg: &Config) -> AppResult<()> {
    let api = ApiClient::from_config(cfg)?;
    let store = open_store(cfg)?;

    match SessionGuard::new(&store, &api).validate()? {
        GuardOutcome::Valid(s) => {
            success(format!(
                "Signed in as {} ({}), {}.",
                s.username(),
                s.user.role,
                Console::for_role(s.user.role).label()
            ));
            Ok(())
        }
        GuardOutcome::Unknown(s) => {
            warning(format!(
                "Signed in as {} ({}), but the server could not confirm the session.",
                s.username(),
                s.user.role
            ));
            Ok(())
        }
        GuardOutcome::Unauthenticated => Err(AppError::Unauthenticated(
            "no active session, run `rattendance login`".into(),
        )),
        GuardOutcome::Revoked => Err(AppError::Unauthenticated(
            "your session was revoked, please log in again".into(),
        )),
    }
}

fn change_password(cfg: &Config, current: Option<&str>, new: Option<&str>) -> AppResult<()> {
    let ctx = officer_console(cfg)?;

    let current = value_or_prompt(current, "Current password")?;
    let new = value_or_prompt(new, "New password")?;
    require_fields(&[("current password", current.as_str()), ("new password", new.as_str())])?;

    let msg = ctx.api.update_password(&ctx.session, &current, &new)?;
    success(if msg.message.is_empty() {
        "Password updated.".to_string()
    } else {
        msg.message
    });
    Ok(())
}
