use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::store::state::{load_tables, save_tables};
use crate::ui::messages::{success, warning};

use super::{audit, find_table_index};

/// Handle the table-metadata setters: `rename` and `blinds`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Rename { table, name } => rename(cfg, table, name),
        Commands::Blinds { table, blinds } => set_blinds(cfg, table, blinds),
        _ => Ok(()),
    }
}

fn rename(cfg: &Config, table: &str, name: &str) -> AppResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        warning("Table name unchanged (empty name given).");
        return Ok(());
    }

    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    let old = tables[idx].name.clone();
    tables[idx].name = trimmed.to_string();
    save_tables(&mut pool, &tables)?;

    audit(
        &pool,
        "rename",
        table,
        &format!("Table renamed: {} -> {}", old, trimmed),
    );
    success(format!("{} renamed to {}", old, trimmed));
    Ok(())
}

fn set_blinds(cfg: &Config, table: &str, blinds: &str) -> AppResult<()> {
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    let trimmed = blinds.trim().to_string();
    tables[idx].blinds = trimmed.clone();
    let name = tables[idx].name.clone();
    save_tables(&mut pool, &tables)?;

    let message = if trimmed.is_empty() {
        format!("Blinds cleared on {}", name)
    } else {
        format!("Blinds on {} set to {}", name, trimmed)
    };
    audit(&pool, "blinds", table, &message);
    success(message);
    Ok(())
}
