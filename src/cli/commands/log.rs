use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::store::DbPool;
use crate::store::log::{LogEntry, load_entries};
use ansi_term::Colour;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = store::open(&cfg.database)?;
        print_log(&mut pool)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "open" | "sit" | "batch-sit" => Colour::Green,
        "pause" => Colour::Yellow,
        "close" => Colour::Blue,
        "leave" | "batch-leave" => Colour::Red,
        "reset" => Colour::Purple,
        "export" => Colour::Cyan,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

fn print_log(pool: &mut DbPool) -> AppResult<()> {
    let entries = load_entries(pool)?;

    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return Ok(());
    }

    // column widths computed on the plain text
    let id_w = entries
        .iter()
        .map(|e| e.id.to_string().len())
        .max()
        .unwrap_or(1);
    let date_w = entries
        .iter()
        .map(|e| format_log_date(&e.date).len())
        .max()
        .unwrap_or(10);
    let op_w = entries
        .iter()
        .map(|e| op_target(e).len())
        .max()
        .unwrap_or(10)
        .min(60);

    println!("📜 Internal log:\n");

    for e in &entries {
        let date = format_log_date(&e.date);
        let colored = colored_op_target(e);
        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            e.id,
            date,
            colored,
            padding,
            e.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}

fn format_log_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Unica colonna op+target
fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

/// Truncate on the visible text, colour only the operation word.
fn colored_op_target(e: &LogEntry) -> String {
    let color = color_for_operation(&e.operation);
    let full = op_target(e);

    let truncated = if full.len() > 60 {
        let mut s: String = full.chars().take(57).collect();
        s.push_str("...");
        s
    } else {
        full
    };

    match truncated.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(truncated).to_string(),
    }
}
