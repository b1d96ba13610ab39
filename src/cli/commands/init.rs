use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{KvStorage, SqliteStorage};
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::for_init(cli.db.as_deref());

    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        success(format!("Config file : {}", path.display()));
    }

    if let Some(parent) = std::path::Path::new(&cfg.database).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let storage = SqliteStorage::open(&cfg.database)?;
    success(format!("Database    : {}", cfg.database));

    // internal log is not blocking
    if let Err(e) = storage.log(
        "init",
        "database",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success("frontdesk initialization completed!");
    Ok(())
}
