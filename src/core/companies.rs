use crate::core::{Outcome, delete_record};
use crate::errors::AppResult;
use crate::forms::CompanyForm;
use crate::models::Company;
use crate::storage::KvStorage;
use crate::store::{Store, load_snapshot};
use crate::views::filter_companies;
use chrono::{DateTime, Local};

pub struct CompanyLogic;

impl CompanyLogic {
    pub fn add<S>(storage: &mut S, form: CompanyForm, now: DateTime<Local>) -> AppResult<Company>
    where
        S: KvStorage + ?Sized,
    {
        form.validate()?;

        let mut store = Store::<Company, S>::open(storage)?;
        let id = store.next_id(now.timestamp_millis());
        let company = form.into_record(id)?;
        store.append(company.clone())?;

        Ok(company)
    }

    pub fn delete<S>(storage: &mut S, id: &str) -> AppResult<Outcome<Company>>
    where
        S: KvStorage + ?Sized,
    {
        delete_record(storage, id)
    }

    /// Directory listing, optionally narrowed by a name/floor search.
    pub fn search<S>(storage: &S, text: Option<&str>) -> AppResult<Vec<Company>>
    where
        S: KvStorage + ?Sized,
    {
        let all = load_snapshot::<Company, S>(storage)?;
        Ok(match text {
            Some(t) => filter_companies(&all, t).into_iter().cloned().collect(),
            None => all,
        })
    }
}
