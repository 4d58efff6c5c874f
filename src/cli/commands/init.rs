use crate::config::Config;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::store::LocalStore;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the local SQLite store and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.clone(), cli.api.clone(), cli.test)?;

    println!("⚙️  Initializing rattendance…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🌐 API base    : {}", cfg.api_base_url);
    println!("🗄️  Local store : {}", cfg.store);

    let store = LocalStore::open(&cfg.store)?;
    store.journal(
        "init",
        "Local store initialized",
        &format!("Local store initialized at {}", cfg.store),
    );

    println!("✅ Local store initialized at {}", cfg.store);
    println!("🎉 rattendance initialization completed!");
    Ok(())
}
