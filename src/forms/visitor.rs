use crate::errors::AppResult;
use crate::forms::{clean, require};
use crate::models::{Visitor, VisitorStatus};
use crate::utils::date::format_stamp;
use chrono::NaiveDateTime;

/// Check-in form. Required: name, host, floor.
#[derive(Debug, Clone, Default)]
pub struct VisitorForm {
    pub name: String,
    pub company: String,
    pub host: String,
    pub floor: String,
    pub purpose: String,
}

impl VisitorForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&[
            ("name", self.name.as_str()),
            ("host", self.host.as_str()),
            ("floor", self.floor.as_str()),
        ])
    }

    pub fn into_record(self, id: String, now: NaiveDateTime) -> AppResult<Visitor> {
        self.validate()?;
        Ok(Visitor {
            id,
            name: clean(&self.name),
            company: clean(&self.company),
            host: clean(&self.host),
            floor: clean(&self.floor),
            purpose: clean(&self.purpose),
            check_in_time: format_stamp(now),
            check_out_time: None,
            status: VisitorStatus::Active,
        })
    }
}
