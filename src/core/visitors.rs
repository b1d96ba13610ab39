use crate::core::{Outcome, apply_action, delete_record};
use crate::errors::AppResult;
use crate::forms::VisitorForm;
use crate::models::Visitor;
use crate::storage::KvStorage;
use crate::store::{Store, load_snapshot};
use crate::views::RowAction;
use chrono::{DateTime, Local};

pub struct VisitorLogic;

impl VisitorLogic {
    /// Validate the form and prepend the new, active visitor.
    pub fn check_in<S>(storage: &mut S, form: VisitorForm, now: DateTime<Local>) -> AppResult<Visitor>
    where
        S: KvStorage + ?Sized,
    {
        form.validate()?;

        let mut store = Store::<Visitor, S>::open(storage)?;
        let id = store.next_id(now.timestamp_millis());
        let visitor = form.into_record(id, now.naive_local())?;
        store.append(visitor.clone())?;

        Ok(visitor)
    }

    pub fn check_out<S>(storage: &mut S, id: &str, now: DateTime<Local>) -> AppResult<Outcome<Visitor>>
    where
        S: KvStorage + ?Sized,
    {
        let at = now.naive_local();
        apply_action(storage, id, RowAction::CheckOut, |v: Visitor| v.check_out(at))
    }

    pub fn delete<S>(storage: &mut S, id: &str) -> AppResult<Outcome<Visitor>>
    where
        S: KvStorage + ?Sized,
    {
        delete_record(storage, id)
    }

    pub fn list<S>(storage: &S) -> AppResult<Vec<Visitor>>
    where
        S: KvStorage + ?Sized,
    {
        load_snapshot::<Visitor, S>(storage)
    }
}
