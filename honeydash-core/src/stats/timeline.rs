use crate::stats::constants::HOUR_PREFIX_LEN;
use crate::stats::types::TimelinePoint;
use std::collections::BTreeMap;

/// Truncate an ISO-8601 timestamp to its hour, e.g. `2024-01-01T03`.
///
/// Shorter strings come back whole. Truncation counts characters, never
/// splitting a multi-byte one.
pub fn hour_bucket(timestamp: &str) -> &str {
    match timestamp.char_indices().nth(HOUR_PREFIX_LEN) {
        Some((end, _)) => &timestamp[..end],
        None => timestamp,
    }
}

/// Count timestamps per hour, in ascending hour order.
///
/// Missing and empty timestamps are not counted. The bucket format sorts
/// lexicographically in chronological order, so a `BTreeMap` keyed by the
/// bucket string is already ordered.
pub fn build_timeline<'a, I>(timestamps: I) -> Vec<TimelinePoint>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut hours: BTreeMap<&str, u64> = BTreeMap::new();

    for ts in timestamps.into_iter().flatten() {
        if ts.is_empty() {
            continue;
        }
        *hours.entry(hour_bucket(ts)).or_insert(0) += 1;
    }

    hours
        .into_iter()
        .map(|(time, count)| TimelinePoint {
            time: time.to_string(),
            count,
        })
        .collect()
}
