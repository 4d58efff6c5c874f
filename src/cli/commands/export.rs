use crate::cli::commands::{event_or_active, officer_console};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export_guard::ExportGuard;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        event,
        format,
        file,
        force,
    } = cmd
    {
        let ctx = officer_console(cfg)?;
        let event_id = event_or_active(&ctx.api, *event)?;
        // one export per process here; library callers share a guard across threads
        let guard = ExportGuard::new();
        ExportLogic::export(
            &ctx.api,
            &ctx.store,
            &guard,
            event_id,
            *format,
            file.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
