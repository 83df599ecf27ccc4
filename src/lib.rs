//! rTabletimer library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Tables => commands::tables::handle(cfg),
        Commands::Status { .. } => commands::status::handle(&cli.command, cfg),
        Commands::Open { .. } | Commands::Pause { .. } | Commands::Close { .. } => {
            commands::clock::handle(&cli.command, cfg)
        }
        Commands::Member { .. }
        | Commands::Sit { .. }
        | Commands::Rest { .. }
        | Commands::Leave { .. }
        | Commands::Buyin { .. } => commands::seat::handle(cli, cfg),
        Commands::BatchSit { .. } | Commands::BatchLeave { .. } => {
            commands::batch::handle(cli, cfg)
        }
        Commands::Reset { .. } => commands::reset::handle(cli, cfg),
        Commands::Rename { .. } | Commands::Blinds { .. } => {
            commands::admin::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => commands::export::handle(cli, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load();

    // 3️⃣ applica eventuale override del DB da riga di comando
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
