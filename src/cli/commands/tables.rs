use crate::config::Config;
use crate::errors::AppResult;
use crate::models::SEATS_PER_TABLE;
use crate::store;
use crate::store::state::load_tables;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_clock};
use crate::utils::format_hms;
use crate::utils::formatting::pad_display;
use crate::utils::grid::{Column, Grid};
use chrono::Local;

/// Handle `tables`: one row per table with the live clock reading.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let now = Local::now();
    let mut pool = store::open(&cfg.database)?;
    let tables = load_tables(&mut pool)?;

    header("Tables");

    let mut grid = Grid::new(vec![
        Column::new("ID", 4),
        Column::new("NAME", 18),
        Column::new("BLINDS", 10),
        Column::new("CLOCK", 8),
        Column::new("ELAPSED", 9),
        Column::new("SEATS", 5),
        Column::new("SESSIONS", 8),
    ]);

    for t in &tables {
        // pad before colouring so the ANSI codes stay out of the width math
        let clock_raw = if t.is_running { "running" } else { "stopped" };
        let clock = format!(
            "{}{}{}",
            color_for_clock(t.is_running),
            pad_display(clock_raw, 8),
            RESET
        );

        let blinds = if t.blinds.is_empty() {
            "-".to_string()
        } else {
            t.blinds.clone()
        };

        grid.add_row(vec![
            t.id.clone(),
            t.name.clone(),
            blinds,
            clock,
            format_hms(t.elapsed_at(now)),
            format!("{}/{}", t.occupied_count(), SEATS_PER_TABLE),
            t.ledger.len().to_string(),
        ]);
    }

    print!("{}", grid.render());
    Ok(())
}
