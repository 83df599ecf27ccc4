use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::Table;
use crate::store;
use crate::store::state::{load_tables, save_tables};
use crate::ui::messages::{info, success};

use super::{ask_confirmation, audit, find_table_index, resolve_now};

/// Handle `reset`: archive the ledger, then return the table to its
/// defaults keeping only id and display name.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { table, at } = &cli.command {
        let now = resolve_now(at)?;
        let mut pool = store::open(&cfg.database)?;
        let mut tables = load_tables(&mut pool)?;
        let idx = find_table_index(&tables, table)?;

        let prompt = format!(
            "Reset {}? The ledger will be archived and every seat cleared. This action is irreversible.",
            tables[idx].name
        );
        if !cli.yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        if !tables[idx].ledger.is_empty() {
            let path = ExportLogic::auto_export(&tables[idx], now, &cfg.export_dir)?;
            info(format!("Ledger archived to {}", path.display()));
        }

        let fresh = Table::fresh(&tables[idx].id, &tables[idx].name);
        let name = fresh.name.clone();
        tables[idx] = fresh;
        save_tables(&mut pool, &tables)?;

        audit(
            &pool,
            "reset",
            table,
            &format!("{} reset to defaults", name),
        );
        success(format!("{} reset to defaults", name));
    }
    Ok(())
}
