//! Display timestamps: `HH:mm DD/MM/YYYY`, 24-hour clock, day first.

use chrono::{Local, NaiveDate, NaiveDateTime};

pub const STAMP_FORMAT: &str = "%H:%M %d/%m/%Y";
pub const DAY_FORMAT: &str = "%d/%m/%Y";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_stamp(t: NaiveDateTime) -> String {
    t.format(STAMP_FORMAT).to_string()
}

pub fn format_day(d: NaiveDate) -> String {
    d.format(DAY_FORMAT).to_string()
}

pub fn parse_stamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), STAMP_FORMAT).ok()
}

/// Calendar date of a stored timestamp, `None` when it is not in the display format.
pub fn stamp_date(s: &str) -> Option<NaiveDate> {
    parse_stamp(s).map(|t| t.date())
}
