use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn migrate_create_kv_store(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}

type Migration = (&'static str, &'static str, fn(&Connection) -> rusqlite::Result<()>);

const MIGRATIONS: &[Migration] = &[(
    "20261001_0001_create_kv_store",
    "Created kv_store table",
    migrate_create_kv_store,
)];

/// Public entry point: run all pending migrations.
///
/// Safe to call on every open; applied versions are recorded in `log`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn).map_err(|e| AppError::Migration(format!("{}: {}", version, e)))?;
        mark_applied(conn, version, message)?;
    }

    Ok(())
}
