use crate::cli::commands::{ConsoleCtx, admin_console, print_view, require_fields};
use crate::cli::parser::OfficersCmd;
use crate::config::Config;
use crate::core::list::ListController;
use crate::errors::{AppError, AppResult};
use crate::models::officer::{NewOfficer, Officer, OfficerUpdate};
use crate::models::session::Role;
use crate::ui::messages::success;
use crate::utils::colors::colorize_active;

pub fn handle(cmd: &OfficersCmd, cfg: &Config) -> AppResult<()> {
    match cmd {
        OfficersCmd::List { search, role, page } => {
            let ctx = admin_console(cfg)?;
            let mut list = ListController::new(cfg.roster_page_size).sorted_by("username");
            load_officers(&ctx, &mut list)?;
            if let Some(q) = search {
                list.set_query(q);
            }
            list.set_filter("role", role.as_deref());
            list.set_page(*page);
            print_officers(&list, ctx.session.username());
            Ok(())
        }

        OfficersCmd::Add {
            username,
            password,
            role,
        } => {
            let password = password.as_deref().unwrap_or_default();
            require_fields(&[("username", username.as_str()), ("password", password)])?;
            let role = parse_role(role)?;
            let ctx = admin_console(cfg)?;
            let msg = ctx.api.create_officer(&NewOfficer {
                username: username.trim().to_string(),
                password: password.to_string(),
                role,
            })?;
            success(if msg.message.is_empty() {
                format!("Officer {username} created.")
            } else {
                msg.message
            });
            Ok(())
        }

        OfficersCmd::Edit {
            username,
            role,
            activate,
            deactivate,
            password,
        } => {
            let ctx = admin_console(cfg)?;
            let current = ctx
                .api
                .officers()?
                .into_iter()
                .find(|o| o.username == *username)
                .ok_or_else(|| AppError::NotFound(format!("Officer {username} not found")))?;

            let update = OfficerUpdate {
                role: match role {
                    Some(r) => parse_role(r)?,
                    None => current.role,
                },
                is_active: if *activate {
                    true
                } else if *deactivate {
                    false
                } else {
                    current.is_active
                },
                // blank keeps the current password
                password: password
                    .as_deref()
                    .map(str::trim)
                    .filter(|p| !p.is_empty())
                    .map(str::to_string),
            };

            let msg = ctx.api.update_officer(username, &update)?;
            success(if msg.message.is_empty() {
                format!("Officer {username} updated.")
            } else {
                msg.message
            });
            Ok(())
        }
    }
}

fn parse_role(code: &str) -> AppResult<Role> {
    Role::from_code(code)
        .ok_or_else(|| AppError::Validation(format!("role (admin or officer, got '{code}')")))
}

pub(crate) fn load_officers(ctx: &ConsoleCtx, list: &mut ListController<Officer>) -> AppResult<()> {
    let token = list.begin_load();
    let officers = ctx.api.officers()?;
    list.finish_load(token, officers);
    Ok(())
}

pub(crate) fn print_officers(list: &ListController<Officer>, me: &str) {
    print_view(&list.view(), &["#", "Username", "Role", "Status"], |n, o| {
        let name = if o.username == me {
            format!("{} (You)", o.username)
        } else {
            o.username.clone()
        };
        vec![
            n.to_string(),
            name,
            o.role.to_string(),
            colorize_active(o.is_active),
        ]
    });
}
