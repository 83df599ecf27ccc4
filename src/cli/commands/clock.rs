use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store;
use crate::store::state::{load_tables, save_tables};
use crate::ui::messages::{info, success};
use crate::utils::format_hms;

use super::{audit, find_table_index, resolve_now};

/// Handle `open`, `pause` and `close`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Open { table, at } => open(cfg, table, at),
        Commands::Pause { table, at } => pause(cfg, table, at),
        Commands::Close { table, at } => close(cfg, table, at),
        _ => Ok(()),
    }
}

fn open(cfg: &Config, table: &str, at: &Option<String>) -> AppResult<()> {
    let now = resolve_now(at)?;
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    if tables[idx].is_running {
        info(format!("Clock on {} is already running.", tables[idx].name));
        return Ok(());
    }

    let resumed = tables[idx].opened_at.is_some();
    let updated = clock::start_or_resume(&tables[idx], now);
    let name = updated.name.clone();
    tables[idx] = updated;
    save_tables(&mut pool, &tables)?;

    let verb = if resumed { "resumed" } else { "started" };
    audit(
        &pool,
        "open",
        table,
        &format!("Clock {} on {}", verb, name),
    );
    success(format!("⏱️  Clock {} on {}", verb, name));
    Ok(())
}

fn pause(cfg: &Config, table: &str, at: &Option<String>) -> AppResult<()> {
    let now = resolve_now(at)?;
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    if !tables[idx].is_running {
        info(format!("Clock on {} is not running.", tables[idx].name));
        return Ok(());
    }

    let updated = clock::pause(&tables[idx], now)?;
    let name = updated.name.clone();
    let elapsed = format_hms(updated.elapsed_seconds);
    tables[idx] = updated;
    save_tables(&mut pool, &tables)?;

    audit(
        &pool,
        "pause",
        table,
        &format!("Clock paused on {} at {}", name, elapsed),
    );
    success(format!("Clock paused on {} (elapsed {})", name, elapsed));
    Ok(())
}

fn close(cfg: &Config, table: &str, at: &Option<String>) -> AppResult<()> {
    let now = resolve_now(at)?;
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    let closed = clock::stop(&tables[idx], now)?;

    // Export from the frozen snapshot before it is persisted.
    let exported = ExportLogic::auto_export(&closed, now, &cfg.export_dir)?;

    let name = closed.name.clone();
    let elapsed = format_hms(closed.elapsed_seconds);
    let sessions = closed.ledger.len();
    tables[idx] = closed;
    save_tables(&mut pool, &tables)?;

    audit(
        &pool,
        "close",
        table,
        &format!("{} closed after {} ({} session(s))", name, elapsed, sessions),
    );
    success(format!("{} closed (elapsed {})", name, elapsed));
    info(format!("Ledger exported to {}", exported.display()));
    Ok(())
}
