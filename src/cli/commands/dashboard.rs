use crate::config::Config;
use crate::core::dashboard::DashboardStats;
use crate::errors::AppResult;
use crate::storage::SqliteStorage;
use crate::ui::messages::header;
use crate::utils::date;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let storage = SqliteStorage::open(&cfg.database)?;
    let today = date::today();
    let stats = DashboardStats::collect(&storage, today)?;

    header(format!("Overview - {}", date::format_day(today)));
    println!("Visitors on site      : {}", stats.active_visitors);
    println!("Visitors today        : {}", stats.today_visitors);
    println!("Deliveries waiting    : {}", stats.pending_deliveries);
    println!("Companies in building : {}", stats.total_companies);

    Ok(())
}
