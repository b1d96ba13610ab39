use crate::cli::commands::{confirm_delete, print_page, settle, text};
use crate::cli::parser::CompanyCommand;
use crate::config::Config;
use crate::core::companies::CompanyLogic;
use crate::core::lookup;
use crate::errors::AppResult;
use crate::forms::CompanyForm;
use crate::models::Company;
use crate::storage::SqliteStorage;
use crate::store::Record;
use crate::ui::messages::{success, warning};
use crate::views::RowAction;
use crate::views::render::companies_table;
use chrono::Local;

pub fn handle(cmd: &CompanyCommand, cfg: &Config) -> AppResult<()> {
    let mut storage = SqliteStorage::open(&cfg.database)?;

    match cmd {
        CompanyCommand::Add {
            name,
            floor,
            room,
            hotline,
            contact,
        } => {
            let form = CompanyForm {
                name: text(name),
                floor: text(floor),
                room: text(room),
                hotline: text(hotline),
                contact_person: text(contact),
            };

            let company = CompanyLogic::add(&mut storage, form, Local::now())?;
            success(format!(
                "Added {} on floor {} (id {}).",
                company.name, company.floor, company.id
            ));
        }

        CompanyCommand::List { search, page } => {
            let companies = CompanyLogic::search(&storage, search.as_deref())?;
            let empty = if search.is_some() {
                "No company matches the search."
            } else {
                "The directory is empty."
            };
            print_page(&companies, *page, cfg.page_size, empty, |rows| {
                companies_table(rows)
            })?;
        }

        CompanyCommand::Delete { id, yes } => {
            let Some(current) = lookup::<Company, _>(&storage, id)? else {
                warning(format!("No company with id {}. Nothing changed.", id));
                return Ok(());
            };
            if !confirm_delete(&format!("company '{}'", current.name), id, *yes) {
                return Ok(());
            }

            let outcome = CompanyLogic::delete(&mut storage, id)?;
            if let Some(c) = settle(outcome, Company::LABEL, id, RowAction::Delete) {
                success(format!("Removed {} from the directory.", c.name));
            }
        }
    }

    Ok(())
}
