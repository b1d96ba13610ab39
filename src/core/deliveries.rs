use crate::core::{Outcome, apply_action, delete_record};
use crate::errors::AppResult;
use crate::forms::DeliveryForm;
use crate::models::DeliveryItem;
use crate::storage::KvStorage;
use crate::store::{Store, load_snapshot};
use crate::views::RowAction;
use chrono::{DateTime, Local};

pub struct DeliveryLogic;

impl DeliveryLogic {
    /// Validate the form and prepend the new, pending delivery.
    pub fn receive<S>(storage: &mut S, form: DeliveryForm, now: DateTime<Local>) -> AppResult<DeliveryItem>
    where
        S: KvStorage + ?Sized,
    {
        form.validate()?;

        let mut store = Store::<DeliveryItem, S>::open(storage)?;
        let id = store.next_id(now.timestamp_millis());
        let item = form.into_record(id, now.naive_local())?;
        store.append(item.clone())?;

        Ok(item)
    }

    pub fn pick_up<S>(storage: &mut S, id: &str, now: DateTime<Local>) -> AppResult<Outcome<DeliveryItem>>
    where
        S: KvStorage + ?Sized,
    {
        let at = now.naive_local();
        apply_action(storage, id, RowAction::PickUp, |d: DeliveryItem| d.pick_up(at))
    }

    pub fn delete<S>(storage: &mut S, id: &str) -> AppResult<Outcome<DeliveryItem>>
    where
        S: KvStorage + ?Sized,
    {
        delete_record(storage, id)
    }

    pub fn list<S>(storage: &S) -> AppResult<Vec<DeliveryItem>>
    where
        S: KvStorage + ?Sized,
    {
        load_snapshot::<DeliveryItem, S>(storage)
    }
}
