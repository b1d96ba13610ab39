use crate::cli::commands::{confirm_delete, print_page, settle, text};
use crate::cli::parser::VisitorCommand;
use crate::config::Config;
use crate::core::lookup;
use crate::core::visitors::VisitorLogic;
use crate::errors::AppResult;
use crate::forms::VisitorForm;
use crate::models::Visitor;
use crate::storage::SqliteStorage;
use crate::store::Record;
use crate::ui::messages::{success, warning};
use crate::views::render::visitors_table;
use crate::views::{Actionable, RowAction};
use chrono::Local;

pub fn handle(cmd: &VisitorCommand, cfg: &Config) -> AppResult<()> {
    let mut storage = SqliteStorage::open(&cfg.database)?;

    match cmd {
        VisitorCommand::Add {
            name,
            host,
            floor,
            company,
            purpose,
        } => {
            let form = VisitorForm {
                name: text(name),
                company: text(company),
                host: text(host),
                floor: text(floor),
                purpose: purpose
                    .clone()
                    .unwrap_or_else(|| cfg.default_purpose.clone()),
            };

            let visitor = VisitorLogic::check_in(&mut storage, form, Local::now())?;
            success(format!(
                "Checked in {} (id {}) at {}.",
                visitor.name, visitor.id, visitor.check_in_time
            ));
        }

        VisitorCommand::List { page } => {
            let visitors = VisitorLogic::list(&storage)?;
            print_page(&visitors, *page, cfg.page_size, "No visitors yet.", |rows| {
                visitors_table(rows)
            })?;
        }

        VisitorCommand::Checkout { id } => {
            let outcome = VisitorLogic::check_out(&mut storage, id, Local::now())?;
            if let Some(v) = settle(outcome, Visitor::LABEL, id, RowAction::CheckOut) {
                success(format!(
                    "Checked out {} at {}.",
                    v.name,
                    v.check_out_time.unwrap_or_default()
                ));
            }
        }

        VisitorCommand::Delete { id, yes } => {
            let Some(current) = lookup::<Visitor, _>(&storage, id)? else {
                warning(format!("No visitor with id {}. Nothing changed.", id));
                return Ok(());
            };
            if !current.allows(RowAction::Delete) {
                warning(format!(
                    "Cannot delete visitor {}: still {}. Check them out first.",
                    id,
                    current.state()
                ));
                return Ok(());
            }
            if !confirm_delete(Visitor::LABEL, id, *yes) {
                return Ok(());
            }

            let outcome = VisitorLogic::delete(&mut storage, id)?;
            if let Some(v) = settle(outcome, Visitor::LABEL, id, RowAction::Delete) {
                success(format!("Deleted visitor record for {}.", v.name));
            }
        }
    }

    Ok(())
}
