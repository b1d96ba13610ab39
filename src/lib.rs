//! frontdesk library root.
//! Exposes the record stores, the front-desk operations and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod forms;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui;
pub mod utils;
pub mod views;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Visitor(cmd) => cli::commands::visitor::handle(cmd, cfg),
        Commands::Delivery(cmd) => cli::commands::delivery::handle(cmd, cfg),
        Commands::Company(cmd) => cli::commands::company::handle(cmd, cfg),
        Commands::Dashboard => cli::commands::dashboard::handle(cfg),
        Commands::Log { print } => cli::commands::log::handle(*print, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // --db wins over the configured database, resolved the same way `init` does
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_database(custom_db);
    }

    dispatch(&cli, &cfg)
}
