use crate::models::{Company, DeliveryItem, DeliveryStatus, Visitor, VisitorStatus};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    CheckOut,
    PickUp,
    Delete,
}

impl RowAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowAction::CheckOut => "checkout",
            RowAction::PickUp => "pickup",
            RowAction::Delete => "delete",
        }
    }
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row-level actions a list view offers for a record in its current state.
pub trait Actionable {
    fn actions(&self) -> &'static [RowAction];

    /// Short state description used when an action is refused.
    fn state(&self) -> &'static str;

    fn allows(&self, action: RowAction) -> bool {
        self.actions().contains(&action)
    }
}

impl Actionable for Visitor {
    fn actions(&self) -> &'static [RowAction] {
        match self.status {
            VisitorStatus::Active => &[RowAction::CheckOut],
            VisitorStatus::Completed => &[RowAction::Delete],
        }
    }

    fn state(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Actionable for DeliveryItem {
    fn actions(&self) -> &'static [RowAction] {
        match self.status {
            DeliveryStatus::Pending => &[RowAction::PickUp, RowAction::Delete],
            DeliveryStatus::PickedUp => &[RowAction::Delete],
        }
    }

    fn state(&self) -> &'static str {
        self.status.as_str()
    }
}

impl Actionable for Company {
    fn actions(&self) -> &'static [RowAction] {
        &[RowAction::Delete]
    }

    fn state(&self) -> &'static str {
        "listed"
    }
}
