use crate::store::Record;
use crate::utils::date::format_stamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitorStatus {
    Active,
    Completed,
}

impl VisitorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisitorStatus::Active => "active",
            VisitorStatus::Completed => "completed",
        }
    }

    /// Human label shown in the list view.
    pub fn label(&self) -> &'static str {
        match self {
            VisitorStatus::Active => "On site",
            VisitorStatus::Completed => "Left",
        }
    }
}

/// A person signed in at the front desk.
///
/// `check_out_time` is set if and only if `status` is `Completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub check_in_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    pub status: VisitorStatus,
}

impl Visitor {
    pub fn is_active(&self) -> bool {
        self.status == VisitorStatus::Active
    }

    /// Mark the visitor as gone. A visitor who already left is returned unchanged.
    pub fn check_out(mut self, now: NaiveDateTime) -> Self {
        if self.status == VisitorStatus::Completed {
            return self;
        }
        self.status = VisitorStatus::Completed;
        self.check_out_time = Some(format_stamp(now));
        self
    }
}

impl Record for Visitor {
    const STORAGE_KEY: &'static str = "reception_visitors_data";
    const LABEL: &'static str = "visitor";

    fn id(&self) -> &str {
        &self.id
    }
}
