//! Read-only counters over the three stores.

use crate::errors::AppResult;
use crate::models::{Company, DeliveryItem, Visitor};
use crate::storage::KvStorage;
use crate::store::load_snapshot;
use crate::utils::date::stamp_date;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_visitors: usize,
    pub today_visitors: usize,
    pub pending_deliveries: usize,
    pub total_companies: usize,
}

impl DashboardStats {
    /// Load a snapshot of every store and count once. Later writes are not tracked.
    pub fn collect<S>(storage: &S, today: NaiveDate) -> AppResult<Self>
    where
        S: KvStorage + ?Sized,
    {
        let visitors = load_snapshot::<Visitor, S>(storage)?;
        let deliveries = load_snapshot::<DeliveryItem, S>(storage)?;
        let companies = load_snapshot::<Company, S>(storage)?;

        Ok(Self::from_lists(&visitors, &deliveries, &companies, today))
    }

    pub fn from_lists(
        visitors: &[Visitor],
        deliveries: &[DeliveryItem],
        companies: &[Company],
        today: NaiveDate,
    ) -> Self {
        Self {
            active_visitors: visitors.iter().filter(|v| v.is_active()).count(),
            // compared on the calendar date, not on the rendered string
            today_visitors: visitors
                .iter()
                .filter(|v| stamp_date(&v.check_in_time) == Some(today))
                .count(),
            pending_deliveries: deliveries.iter().filter(|d| d.is_pending()).count(),
            total_companies: companies.len(),
        }
    }
}
