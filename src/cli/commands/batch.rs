use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::batch;
use crate::errors::{AppError, AppResult};
use crate::store;
use crate::store::state::{load_tables, save_tables};
use crate::ui::messages::{info, success};
use crate::utils::format_amount;

use super::{ask_confirmation, audit, find_table_index, resolve_now};

/// Handle `batch-sit` and `batch-leave`. Both are all-or-nothing: any
/// rejected seat leaves the whole table untouched.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::BatchSit {
            table,
            seats,
            amount,
            at,
        } => batch_sit(cfg, table, seats, *amount, at),
        Commands::BatchLeave { table, seats, at } => batch_leave(cli, cfg, table, seats, at),
        _ => Ok(()),
    }
}

fn batch_sit(
    cfg: &Config,
    table: &str,
    seats: &[u8],
    amount: f64,
    at: &Option<String>,
) -> AppResult<()> {
    let now = resolve_now(at)?;
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    let updated = batch::batch_seat(&tables[idx], seats, amount, now)?;
    tables[idx] = updated;
    save_tables(&mut pool, &tables)?;

    let message = format!(
        "Seats {} seated (buy-in {} each)",
        join_seats(seats),
        format_amount(amount.max(0.0))
    );
    audit(&pool, "batch-sit", table, &message);
    success(message);
    Ok(())
}

fn batch_leave(
    cli: &Cli,
    cfg: &Config,
    table: &str,
    seats: &[u8],
    at: &Option<String>,
) -> AppResult<()> {
    let now = resolve_now(at)?;
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    // validate before prompting
    for &id in seats {
        if tables[idx].seat(id).is_none() {
            return Err(AppError::InvalidSeat(id.to_string()));
        }
    }

    let occupied: Vec<u8> = seats
        .iter()
        .copied()
        .filter(|id| {
            tables[idx]
                .seat(*id)
                .map(|s| s.is_occupied())
                .unwrap_or(false)
        })
        .collect();

    if occupied.is_empty() {
        info("No occupied seats in the selection; nothing to do.");
        return Ok(());
    }

    let prompt = format!(
        "Vacate {} seat(s) ({}) on {} and record their sessions?",
        occupied.len(),
        join_seats(&occupied),
        tables[idx].name
    );
    if !cli.yes && !ask_confirmation(&prompt) {
        info("Operation cancelled.");
        return Ok(());
    }

    let before = tables[idx].ledger.len();
    let updated = batch::batch_leave(&tables[idx], seats, now)?;
    let recorded = updated.ledger.len() - before;
    tables[idx] = updated;
    save_tables(&mut pool, &tables)?;

    let message = format!(
        "Seats {} vacated ({} session(s) recorded)",
        join_seats(&occupied),
        recorded
    );
    audit(&pool, "batch-leave", table, &message);
    success(message);
    Ok(())
}

fn join_seats(seats: &[u8]) -> String {
    let mut ids: Vec<u8> = seats.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids.iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
