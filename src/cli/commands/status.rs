use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SEATS_PER_TABLE;
use crate::store;
use crate::store::state::load_tables;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_clock, color_for_optional_field, color_for_status};
use crate::utils::format_amount;
use crate::utils::format_hms;
use crate::utils::formatting::pad_display;
use crate::utils::grid::{Column, Grid};
use chrono::Local;

use super::find_table_index;

/// Handle `status`: the live seat board of one table. Read-only; the
/// projections are recomputed from the stored anchors on every call.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { table } = cmd {
        let now = Local::now();
        let mut pool = store::open(&cfg.database)?;
        let tables = load_tables(&mut pool)?;
        let idx = find_table_index(&tables, table)?;
        let t = &tables[idx];

        header(format!("{} ({})", t.name, t.id));

        let clock_raw = if t.is_running { "running" } else { "stopped" };
        println!(
            "Clock: {}{}{}  Elapsed: {}",
            color_for_clock(t.is_running),
            clock_raw,
            RESET,
            format_hms(t.elapsed_at(now))
        );
        if let Some(op) = &t.opened_at {
            println!("Opened: {}", op);
        }
        if let Some(cl) = &t.closed_at {
            println!("Closed: {}", cl);
        }
        if !t.blinds.is_empty() {
            println!("Blinds: {}", t.blinds);
        }
        println!();

        let mut grid = Grid::new(vec![
            Column::new("SEAT", 4),
            Column::new("MEMBER", 16),
            Column::new("STATUS", 8),
            Column::new("ACTIVE", 9),
            Column::new("REST", 9),
            Column::new("SESSION", 9),
            Column::new("BUY-IN", 8),
        ]);

        for s in &t.seats {
            let status_raw = s.status.as_str();
            let status = format!(
                "{}{}{}",
                color_for_status(status_raw),
                pad_display(status_raw, 8),
                RESET
            );

            let member_raw = if s.member.is_empty() { "-" } else { &s.member };
            let member = format!(
                "{}{}{}",
                color_for_optional_field(Some(s.member.as_str())),
                pad_display(member_raw, 16),
                RESET
            );

            let (active, rest, session, buy_in) = if s.is_occupied() {
                (
                    format_hms(s.active_seconds_at(now)),
                    format_hms(s.rest_seconds_at(now)),
                    format_hms(s.session_seconds_at(now)),
                    format_amount(s.buy_in),
                )
            } else {
                ("-".into(), "-".into(), "-".into(), "-".into())
            };

            grid.add_row(vec![
                s.id.to_string(),
                member,
                status,
                active,
                rest,
                session,
                buy_in,
            ]);
        }

        print!("{}", grid.render());
        println!(
            "\nOccupied: {}/{}  Ledger: {} session(s)",
            t.occupied_count(),
            SEATS_PER_TABLE,
            t.ledger.len()
        );
    }
    Ok(())
}
