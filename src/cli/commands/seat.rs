use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::seats::{self, SeatUp};
use crate::errors::{AppError, AppResult};
use crate::models::SeatStatus;
use crate::store;
use crate::store::state::{load_tables, save_tables};
use crate::ui::messages::{info, success};
use crate::utils::{format_amount, format_hms};

use super::{ask_confirmation, audit, find_table_index, resolve_now};

/// Handle the single-seat commands: `member`, `sit`, `rest`, `leave`, `buyin`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Member { table, seat, name } => member(cfg, table, *seat, name),
        Commands::Sit { table, seat, at } => sit(cli, cfg, table, *seat, at),
        Commands::Rest { table, seat, at } => rest(cfg, table, *seat, at),
        Commands::Leave { table, seat, at } => leave(cfg, table, *seat, at),
        Commands::Buyin {
            table,
            seat,
            amount,
        } => buyin(cfg, table, *seat, *amount),
        _ => Ok(()),
    }
}

fn member(cfg: &Config, table: &str, seat: u8, name: &str) -> AppResult<()> {
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    let updated = seats::set_member(&tables[idx], seat, name)?;
    tables[idx] = updated;
    save_tables(&mut pool, &tables)?;

    let trimmed = name.trim();
    let message = if trimmed.is_empty() {
        format!("Seat {} name cleared", seat)
    } else {
        format!("Seat {} assigned to {}", seat, trimmed)
    };
    audit(&pool, "member", table, &message);
    success(message);
    Ok(())
}

fn sit(cli: &Cli, cfg: &Config, table: &str, seat: u8, at: &Option<String>) -> AppResult<()> {
    let now = resolve_now(at)?;
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    match seats::seat_up(&tables[idx], seat, now)? {
        SeatUp::Applied(updated) => {
            let name = updated
                .seat(seat)
                .map(|s| s.member.clone())
                .unwrap_or_default();
            tables[idx] = updated;
            save_tables(&mut pool, &tables)?;

            audit(
                &pool,
                "sit",
                table,
                &format!("{} seated on seat {}", name, seat),
            );
            success(format!("{} is seated on seat {}", name, seat));
        }
        SeatUp::TransferPending {
            member,
            from_seat,
            to_seat,
        } => {
            let prompt = format!(
                "{} is already on seat {}. Move them to seat {}?",
                member, from_seat, to_seat
            );
            if !cli.yes && !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let updated = seats::commit_transfer(&tables[idx], from_seat, to_seat, now)?;
            tables[idx] = updated;
            save_tables(&mut pool, &tables)?;

            let message = format!(
                "{} moved from seat {} to seat {}",
                member, from_seat, to_seat
            );
            audit(&pool, "sit", table, &message);
            success(message);
        }
    }
    Ok(())
}

fn rest(cfg: &Config, table: &str, seat: u8, at: &Option<String>) -> AppResult<()> {
    let now = resolve_now(at)?;
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    let current = tables[idx]
        .seat(seat)
        .ok_or_else(|| AppError::InvalidSeat(seat.to_string()))?;
    if current.status != SeatStatus::Seated {
        info(format!("Seat {} is not seated; nothing to do.", seat));
        return Ok(());
    }

    let updated = seats::rest(&tables[idx], seat, now)?;
    let name = updated
        .seat(seat)
        .map(|s| s.member.clone())
        .unwrap_or_default();
    tables[idx] = updated;
    save_tables(&mut pool, &tables)?;

    audit(
        &pool,
        "rest",
        table,
        &format!("{} resting from seat {}", name, seat),
    );
    success(format!("{} is resting (seat {})", name, seat));
    Ok(())
}

fn leave(cfg: &Config, table: &str, seat: u8, at: &Option<String>) -> AppResult<()> {
    let now = resolve_now(at)?;
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    let current = tables[idx]
        .seat(seat)
        .ok_or_else(|| AppError::InvalidSeat(seat.to_string()))?;
    if !current.is_occupied() {
        info(format!("Seat {} is already free.", seat));
        return Ok(());
    }

    let updated = seats::leave(&tables[idx], seat, now)?;
    let record = updated.ledger.last().cloned();
    tables[idx] = updated;
    save_tables(&mut pool, &tables)?;

    if let Some(r) = record {
        let message = format!(
            "{} left seat {} (active {}, rest {}, buy-in {})",
            r.member,
            seat,
            format_hms(r.active_seconds),
            format_hms(r.rest_seconds),
            r.buy_in.display()
        );
        audit(&pool, "leave", table, &message);
        success(message);
    }
    Ok(())
}

fn buyin(cfg: &Config, table: &str, seat: u8, amount: f64) -> AppResult<()> {
    let mut pool = store::open(&cfg.database)?;
    let mut tables = load_tables(&mut pool)?;
    let idx = find_table_index(&tables, table)?;

    let updated = seats::add_buy_in(&tables[idx], seat, amount)?;
    let total = updated.seat(seat).map(|s| s.buy_in).unwrap_or_default();
    tables[idx] = updated;
    save_tables(&mut pool, &tables)?;

    audit(
        &pool,
        "buyin",
        table,
        &format!(
            "Seat {} buy-in +{} (total {})",
            seat,
            format_amount(amount.max(0.0)),
            format_amount(total)
        ),
    );
    success(format!(
        "Seat {} buy-in is now {}",
        seat,
        format_amount(total)
    ));
    Ok(())
}
