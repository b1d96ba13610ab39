pub mod company;
pub mod config;
pub mod dashboard;
pub mod delivery;
pub mod init;
pub mod log;
pub mod visitor;

use crate::core::Outcome;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, warning};
use crate::utils::table::Table;
use crate::views::{Page, RowAction, paginate};

/// Print one page of a rendered list, or an empty-state line.
pub(crate) fn print_page<T>(
    items: &[T],
    page: usize,
    page_size: usize,
    empty: &str,
    render: impl FnOnce(&[T]) -> Table,
) -> AppResult<()> {
    let Page {
        items: shown,
        number,
        total_pages,
        total_items,
    } = paginate(items, page, page_size)?;

    if total_items == 0 {
        info(empty);
        return Ok(());
    }

    let table = render(shown);
    if table.is_empty() {
        info(format!("Page {} is empty ({} page(s)).", number, total_pages));
        return Ok(());
    }

    print!("{}", table.render());
    println!(
        "\nPage {}/{} - {} record(s)",
        number, total_pages, total_items
    );
    Ok(())
}

/// Report an outcome that did not complete. Returns the record when it did.
pub(crate) fn settle<T>(outcome: Outcome<T>, label: &str, id: &str, action: RowAction) -> Option<T> {
    match outcome {
        Outcome::Done(record) => Some(record),
        Outcome::NotFound => {
            warning(format!("No {} with id {}. Nothing changed.", label, id));
            None
        }
        Outcome::Unavailable { state } => {
            warning(format!(
                "Cannot {} {} {}: it is {}.",
                action, label, id, state
            ));
            None
        }
    }
}

/// Ask before a delete unless `--yes` was given.
pub(crate) fn confirm_delete(label: &str, id: &str, yes: bool) -> bool {
    if yes {
        return true;
    }
    let ok = confirm(&format!(
        "Delete {} {}? This action is irreversible.",
        label, id
    ));
    if !ok {
        info("Operation cancelled.");
    }
    ok
}

pub(crate) fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}
