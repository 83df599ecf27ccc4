use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::store::state::{load_tables, save_tables};

use super::audit;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database, seeded with the default room
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    println!("⚙️  Initializing rTabletimer…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    // Schema plus the default room: four stopped tables, nine idle seats.
    let mut pool = store::open(&cfg.database)?;
    let tables = load_tables(&mut pool)?;
    save_tables(&mut pool, &tables)?;

    println!("✅ Database initialized at {}", &cfg.database);

    audit(
        &pool,
        "init",
        "database",
        &format!("Database initialized at {}", &cfg.database),
    );

    println!("🎉 rTabletimer initialization completed!");
    Ok(())
}
