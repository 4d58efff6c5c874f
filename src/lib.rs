//! rattendance library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Env var holding the log filter, e.g. `RATTENDANCE_LOG=debug`.
pub const LOG_ENV: &str = "RATTENDANCE_LOG";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Login { .. }
        | Commands::Logout { .. }
        | Commands::Whoami
        | Commands::Password { .. } => c::auth::handle(&cli.command, cfg),
        Commands::View { view } => c::view::handle(*view, cfg),
        Commands::Kiosk => c::kiosk::handle(cfg),
        Commands::Monitor { .. } => c::monitor::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
        Commands::Students(cmd) => c::students::handle(cmd, cfg),
        Commands::Officers(cmd) => c::officers::handle(cmd, cfg),
        Commands::Events(cmd) => c::events::handle(cmd, cfg),
        Commands::Sections(cmd) => c::sections::handle(cmd, cfg),
        Commands::Sheet { .. } => c::sections::handle_sheet(&cli.command, cfg),
        Commands::Admin(cmd) => c::admin::handle(cmd, cfg),
    }
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    // a second init (tests calling run twice) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load()?;

    // command-line overrides
    if let Some(api) = &cli.api {
        cfg.api_base_url = api.clone();
    }
    if let Some(store) = &cli.store {
        cfg.store = store.clone();
    }

    let result = dispatch(&cli, &cfg);

    // any rejected session leaves the terminal signed out
    if let Err(e) = &result
        && e.is_unauthenticated()
        && !matches!(cli.command, Commands::Login { .. })
    {
        sign_out(&cfg, &e.to_string());
    }

    result
}

fn sign_out(cfg: &Config, reason: &str) {
    match db::store::LocalStore::open(&cfg.store) {
        Ok(store) => {
            if let Err(e) = store.clear() {
                tracing::warn!("could not clear the local session: {e}");
                return;
            }
            store.journal("revoked", "session", reason);
        }
        Err(e) => tracing::warn!("could not open the local store: {e}"),
    }
}
