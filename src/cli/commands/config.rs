use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::check::check_config_file;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success, warning};
use crate::utils::table::Table;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        check,
        fix,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        print_effective(cfg, &path);
    }

    if *check {
        check_config_file(&path, *fix)?;
        // the URL is only parsed, nothing is contacted
        match ApiClient::from_config(cfg) {
            Ok(api) => success(format!("API endpoint: {}", api.endpoint(&[]))),
            Err(e) => warning(e),
        }
    }

    if *edit_config {
        edit(&path, editor.as_deref())?;
    }

    Ok(())
}

/// Values in effect for this run, command-line overrides included.
fn print_effective(cfg: &Config, path: &Path) {
    header(format!("Configuration ({})", path.display()));

    let mut table = Table::with_headers(&["Key", "Value"]);
    let rows = [
        ("api_base_url", cfg.api_base_url.clone()),
        ("store", cfg.store.clone()),
        ("request_timeout_ms", cfg.request_timeout_ms.to_string()),
        ("officer_poll_interval_ms", cfg.officer_poll_interval_ms.to_string()),
        ("admin_poll_interval_ms", cfg.admin_poll_interval_ms.to_string()),
        ("roster_page_size", cfg.roster_page_size.to_string()),
        ("sheet_page_size", cfg.sheet_page_size.to_string()),
        ("admin_roster_limit", cfg.admin_roster_limit.to_string()),
    ];
    for (key, value) in rows {
        table.add_row(vec![key.to_string(), value]);
    }
    print!("{}", table.render());
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open the config file in `requested`, falling back to the default editor.
fn edit(path: &Path, requested: Option<&str>) -> AppResult<()> {
    let fallback = default_editor();
    let mut candidates = vec![requested.unwrap_or(fallback.as_str()).to_string()];
    if requested.is_some_and(|r| r != fallback) {
        candidates.push(fallback.clone());
    }

    for (i, editor) in candidates.iter().enumerate() {
        match Command::new(editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration file edited with '{editor}'"));
                return Ok(());
            }
            _ if i + 1 < candidates.len() => {
                warning(format!("Editor '{editor}' not available, trying '{fallback}'"));
            }
            _ => {}
        }
    }

    Err(AppError::Config(format!(
        "could not open {} in an editor",
        path.display()
    )))
}
