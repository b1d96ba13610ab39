//! Record identifiers.
//!
//! Ids are decimal strings of the creation time in milliseconds, so they stay
//! compatible with lists written by earlier versions. Two creations within the
//! same millisecond still get distinct ids: a new id is greater than every
//! numeric id already in the list, unless that would overflow.

use crate::store::Record;
use std::collections::HashSet;

pub fn next_id<T: Record>(existing: &[T], now_ms: i64) -> String {
    let taken: HashSet<i64> = existing
        .iter()
        .filter_map(|r| r.id().parse::<i64>().ok())
        .collect();

    let id = match taken.iter().max() {
        Some(&h) if h >= now_ms => match h.checked_add(1) {
            Some(next) => next,
            // i64::MAX is taken: use the first free value from now on
            None => (now_ms..=i64::MAX)
                .chain(0..now_ms)
                .find(|c| !taken.contains(c))
                .unwrap_or(now_ms),
        },
        _ => now_ms,
    };
    id.to_string()
}
