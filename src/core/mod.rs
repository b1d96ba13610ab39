//! Front-desk operations: what each page does with its store.

pub mod companies;
pub mod dashboard;
pub mod deliveries;
pub mod visitors;

use crate::errors::AppResult;
use crate::storage::KvStorage;
use crate::store::{Record, Store, load_snapshot};
use crate::views::{Actionable, RowAction};

/// Result of a row action addressed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The action ran; carries the record as it is now (or as it was, for deletes).
    Done(T),
    /// No record has this id. Nothing was written.
    NotFound,
    /// The record exists but its current state does not offer the action.
    Unavailable { state: &'static str },
}

/// Current copy of the record with `id`, if any.
pub fn lookup<T, S>(storage: &S, id: &str) -> AppResult<Option<T>>
where
    T: Record,
    S: KvStorage + ?Sized,
{
    Ok(load_snapshot::<T, S>(storage)?
        .into_iter()
        .find(|r| r.id() == id))
}

pub(crate) fn apply_action<T, S, F>(
    storage: &mut S,
    id: &str,
    action: RowAction,
    transform: F,
) -> AppResult<Outcome<T>>
where
    T: Record + Actionable,
    S: KvStorage + ?Sized,
    F: FnMut(T) -> T,
{
    let mut store = Store::<T, S>::open(storage)?;

    let Some(current) = store.find(id) else {
        return Ok(Outcome::NotFound);
    };
    if !current.allows(action) {
        return Ok(Outcome::Unavailable {
            state: current.state(),
        });
    }

    store.update(id, transform)?;

    Ok(match store.find(id) {
        Some(updated) => Outcome::Done(updated.clone()),
        None => Outcome::NotFound,
    })
}

pub(crate) fn delete_record<T, S>(storage: &mut S, id: &str) -> AppResult<Outcome<T>>
where
    T: Record + Actionable,
    S: KvStorage + ?Sized,
{
    let mut store = Store::<T, S>::open(storage)?;

    let Some(current) = store.find(id).cloned() else {
        return Ok(Outcome::NotFound);
    };
    if !current.allows(RowAction::Delete) {
        return Ok(Outcome::Unavailable {
            state: current.state(),
        });
    }

    store.remove(id)?;
    Ok(Outcome::Done(current))
}
