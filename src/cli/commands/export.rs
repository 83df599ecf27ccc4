use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store;
use crate::store::state::load_tables;
use crate::ui::messages::warning;

use super::{audit, find_table_index, resolve_now};

/// Handle `export`: on-demand snapshot of one table's ledger.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        force,
        at,
    } = &cli.command
    {
        let now = resolve_now(at)?;
        let mut pool = store::open(&cfg.database)?;
        let tables = load_tables(&mut pool)?;
        let idx = find_table_index(&tables, table)?;

        if tables[idx].ledger.is_empty() {
            warning("The ledger has no closed sessions yet; exporting the header block only.");
        }

        ExportLogic::export_to_file(&tables[idx], now, format.clone(), file, *force || cli.yes)?;

        audit(
            &pool,
            "export",
            table,
            &format!("Ledger exported to {} ({})", file, format.as_str()),
        );
    }
    Ok(())
}
