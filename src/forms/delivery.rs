use crate::errors::AppResult;
use crate::forms::{clean, require};
use crate::models::{DeliveryItem, DeliveryStatus, DeliveryType};
use crate::utils::date::format_stamp;
use chrono::NaiveDateTime;

/// Incoming delivery form. Required: recipient.
#[derive(Debug, Clone)]
pub struct DeliveryForm {
    pub recipient: String,
    pub company: String,
    pub kind: DeliveryType,
    pub sender: String,
}

impl Default for DeliveryForm {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            company: String::new(),
            kind: DeliveryType::Package,
            sender: String::new(),
        }
    }
}

impl DeliveryForm {
    pub fn validate(&self) -> AppResult<()> {
        require(&[("recipient", self.recipient.as_str())])
    }

    pub fn into_record(self, id: String, now: NaiveDateTime) -> AppResult<DeliveryItem> {
        self.validate()?;
        Ok(DeliveryItem {
            id,
            recipient: clean(&self.recipient),
            company: clean(&self.company),
            kind: self.kind,
            sender: clean(&self.sender),
            arrival_time: format_stamp(now),
            pickup_time: None,
            status: DeliveryStatus::Pending,
        })
    }
}
