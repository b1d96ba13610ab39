//! Creation forms.
//!
//! A form collects user-entered values, checks the required ones and then
//! builds the complete record: generated id first, user values next, computed
//! defaults (creation timestamp, initial status) last.

pub mod company;
pub mod delivery;
pub mod visitor;

pub use company::CompanyForm;
pub use delivery::DeliveryForm;
pub use visitor::VisitorForm;

use crate::errors::{AppError, AppResult};

/// Fail with every required field that is empty after trimming.
pub(crate) fn require(fields: &[(&str, &str)]) -> AppResult<()> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::MissingFields(missing))
    }
}

pub(crate) fn clean(value: &str) -> String {
    value.trim().to_string()
}
