use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::SqliteStorage;
use crate::storage::log::load_log;
use crate::ui::messages::info;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "init" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        "load" => Colour::Yellow,
        _ => Colour::White,
    }
}

pub fn handle(print: bool, cfg: &Config) -> AppResult<()> {
    if !print {
        info("Nothing to do. Use --print to show the internal log.");
        return Ok(());
    }

    let storage = SqliteStorage::open(&cfg.database)?;
    let rows = load_log(&storage.conn)?;

    if rows.is_empty() {
        info("The internal log is empty.");
        return Ok(());
    }

    let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
    let date_w = rows.iter().map(|r| r.date.width()).max().unwrap_or(10);
    let op_w = rows
        .iter()
        .map(|r| r.operation.width())
        .max()
        .unwrap_or(10);

    println!("📜 Internal log:\n");
    for r in rows {
        // pad before painting: escape codes would break the width
        let op = format!("{:<op_w$}", r.operation, op_w = op_w);
        let target = if r.target.is_empty() {
            String::new()
        } else {
            format!(" ({})", r.target)
        };

        println!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}",
            r.id,
            r.date,
            color_for_operation(&r.operation).paint(op),
            target,
            r.message,
            id_w = id_w,
            date_w = date_w
        );
    }

    Ok(())
}
