use crate::stats::{TimelinePoint, build_timeline, hour_bucket};
use pretty_assertions::assert_eq;

fn point(time: &str, count: u64) -> TimelinePoint {
    TimelinePoint {
        time: time.to_string(),
        count,
    }
}

#[test]
fn hour_bucket_truncates_to_hour() {
    assert_eq!(hour_bucket("2024-01-01T03:15:00"), "2024-01-01T03");
    assert_eq!(hour_bucket("2024-01-01T03:59:59.999999Z"), "2024-01-01T03");
}

#[test]
fn hour_bucket_keeps_short_strings_whole() {
    assert_eq!(hour_bucket("2024-01-01"), "2024-01-01");
    assert_eq!(hour_bucket("2024-01-01T03"), "2024-01-01T03");
    assert_eq!(hour_bucket(""), "");
}

#[test]
fn hour_bucket_respects_char_boundaries() {
    let ts = "ééééééééééééééé";

    assert_eq!(hour_bucket(ts).chars().count(), 13);
}

#[test]
fn same_hour_shares_a_bucket_and_next_hour_sorts_later() {
    let timeline = build_timeline([
        Some("2024-01-01T04:00:00"),
        Some("2024-01-01T03:15:00"),
        Some("2024-01-01T03:59:00"),
    ]);

    assert_eq!(
        timeline,
        vec![point("2024-01-01T03", 2), point("2024-01-01T04", 1)]
    );
}

#[test]
fn missing_and_empty_timestamps_are_not_counted() {
    let timeline = build_timeline([None, Some(""), Some("2023-12-31T23:00:00")]);

    assert_eq!(timeline, vec![point("2023-12-31T23", 1)]);
}

#[test]
fn buckets_sort_across_days() {
    let timeline = build_timeline([
        Some("2024-01-02T00:10:00"),
        Some("2023-12-31T23:10:00"),
        Some("2024-01-01T12:10:00"),
    ]);

    let hours: Vec<&str> = timeline.iter().map(|p| p.time.as_str()).collect();
    assert_eq!(hours, vec!["2023-12-31T23", "2024-01-01T12", "2024-01-02T00"]);
}
