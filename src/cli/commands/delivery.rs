use crate::cli::commands::{confirm_delete, print_page, settle, text};
use crate::cli::parser::DeliveryCommand;
use crate::config::Config;
use crate::core::deliveries::DeliveryLogic;
use crate::core::lookup;
use crate::errors::{AppError, AppResult};
use crate::forms::DeliveryForm;
use crate::models::{DeliveryItem, DeliveryType};
use crate::storage::SqliteStorage;
use crate::store::Record;
use crate::ui::messages::{success, warning};
use crate::views::render::deliveries_table;
use crate::views::{Actionable, RowAction};
use chrono::Local;

pub fn handle(cmd: &DeliveryCommand, cfg: &Config) -> AppResult<()> {
    let mut storage = SqliteStorage::open(&cfg.database)?;

    match cmd {
        DeliveryCommand::Add {
            recipient,
            company,
            kind,
            sender,
        } => {
            let kind = match kind {
                Some(code) => DeliveryType::from_code(code)
                    .ok_or_else(|| AppError::InvalidDeliveryType(code.clone()))?,
                None => cfg.delivery_type()?,
            };

            let form = DeliveryForm {
                recipient: text(recipient),
                company: text(company),
                kind,
                sender: text(sender),
            };

            let item = DeliveryLogic::receive(&mut storage, form, Local::now())?;
            success(format!(
                "Recorded {} for {} (id {}).",
                item.kind.label().to_lowercase(),
                item.recipient,
                item.id
            ));
        }

        DeliveryCommand::List { page } => {
            let items = DeliveryLogic::list(&storage)?;
            print_page(&items, *page, cfg.page_size, "No deliveries yet.", |rows| {
                deliveries_table(rows)
            })?;
        }

        DeliveryCommand::Pickup { id } => {
            let outcome = DeliveryLogic::pick_up(&mut storage, id, Local::now())?;
            if let Some(d) = settle(outcome, DeliveryItem::LABEL, id, RowAction::PickUp) {
                success(format!(
                    "{} picked up their delivery at {}.",
                    d.recipient,
                    d.pickup_time.unwrap_or_default()
                ));
            }
        }

        DeliveryCommand::Delete { id, yes } => {
            let Some(current) = lookup::<DeliveryItem, _>(&storage, id)? else {
                warning(format!("No delivery with id {}. Nothing changed.", id));
                return Ok(());
            };
            if !current.allows(RowAction::Delete) {
                warning(format!("Cannot delete delivery {}: it is {}.", id, current.state()));
                return Ok(());
            }
            if !confirm_delete(DeliveryItem::LABEL, id, *yes) {
                return Ok(());
            }

            let outcome = DeliveryLogic::delete(&mut storage, id)?;
            if settle(outcome, DeliveryItem::LABEL, id, RowAction::Delete).is_some() {
                success(format!("Deleted delivery {}.", id));
            }
        }
    }

    Ok(())
}
