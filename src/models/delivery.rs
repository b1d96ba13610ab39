use crate::store::Record;
use crate::utils::date::format_stamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Pending,
    PickedUp,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::PickedUp => "picked_up",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Waiting",
            DeliveryStatus::PickedUp => "Collected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    Document,
    Package,
    Food,
}

impl DeliveryType {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::Document => "Document / letter",
            DeliveryType::Package => "Parcel",
            DeliveryType::Food => "Food / drinks",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "document" | "doc" => Some(DeliveryType::Document),
            "package" | "parcel" => Some(DeliveryType::Package),
            "food" => Some(DeliveryType::Food),
            _ => None,
        }
    }
}

/// A parcel, letter or meal left at reception for someone in the building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryItem {
    pub id: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub company: String,
    #[serde(rename = "type")]
    pub kind: DeliveryType,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub arrival_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<String>,
    pub status: DeliveryStatus,
}

impl DeliveryItem {
    pub fn is_pending(&self) -> bool {
        self.status == DeliveryStatus::Pending
    }

    /// Hand the item over. An item already collected is returned unchanged.
    pub fn pick_up(mut self, now: NaiveDateTime) -> Self {
        if self.status == DeliveryStatus::PickedUp {
            return self;
        }
        self.status = DeliveryStatus::PickedUp;
        self.pickup_time = Some(format_stamp(now));
        self
    }
}

impl Record for DeliveryItem {
    const STORAGE_KEY: &'static str = "reception_deliveries_data";
    const LABEL: &'static str = "delivery";

    fn id(&self) -> &str {
        &self.id
    }
}
