use crate::models::{Company, DeliveryItem, Visitor};
use crate::utils::table::Table;
use crate::views::Actionable;

const NONE: &str = "--";

fn or_none(s: &str) -> String {
    if s.trim().is_empty() {
        NONE.to_string()
    } else {
        s.to_string()
    }
}

fn actions_cell<T: Actionable>(record: &T) -> String {
    record
        .actions()
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn visitors_table<'a>(rows: impl IntoIterator<Item = &'a Visitor>) -> Table {
    let mut table = Table::new(&[
        "ID", "NAME", "FROM", "HOST", "FLOOR", "PURPOSE", "IN", "OUT", "STATUS", "ACTIONS",
    ]);
    for v in rows {
        table.add_row(vec![
            v.id.clone(),
            or_none(&v.name),
            or_none(&v.company),
            or_none(&v.host),
            or_none(&v.floor),
            or_none(&v.purpose),
            or_none(&v.check_in_time),
            or_none(v.check_out_time.as_deref().unwrap_or("")),
            v.status.label().to_string(),
            actions_cell(v),
        ]);
    }
    table
}

pub fn deliveries_table<'a>(rows: impl IntoIterator<Item = &'a DeliveryItem>) -> Table {
    let mut table = Table::new(&[
        "ID", "RECIPIENT", "COMPANY", "TYPE", "SENDER", "ARRIVED", "PICKED UP", "STATUS",
        "ACTIONS",
    ]);
    for d in rows {
        table.add_row(vec![
            d.id.clone(),
            or_none(&d.recipient),
            or_none(&d.company),
            d.kind.label().to_string(),
            or_none(&d.sender),
            or_none(&d.arrival_time),
            or_none(d.pickup_time.as_deref().unwrap_or("")),
            d.status.label().to_string(),
            actions_cell(d),
        ]);
    }
    table
}

pub fn companies_table<'a>(rows: impl IntoIterator<Item = &'a Company>) -> Table {
    let mut table = Table::new(&["ID", "COMPANY", "FLOOR", "ROOM", "CONTACT", "HOTLINE"]);
    for c in rows {
        table.add_row(vec![
            c.id.clone(),
            or_none(&c.name),
            or_none(&c.floor),
            or_none(&c.room),
            or_none(&c.contact_person),
            or_none(&c.hotline),
        ]);
    }
    table
}
