//! Statistics Aggregation
//!
//! Turns the buckets produced by [`crate::ingest`] into the snapshot the
//! dashboard shows: summary counters, top-10 rankings, an hourly timeline and
//! the mean session length.
//!
//! Aggregation is pure. It reads the buckets, allocates a fresh snapshot and
//! cannot fail.

mod aggregation;
mod constants;
mod frequency;
mod timeline;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{aggregate, average_duration, collect_snapshot};
pub use constants::*;
pub use frequency::FrequencyTable;
pub use timeline::{build_timeline, hour_bucket};
pub use types::{IpCount, NameCount, StatsSnapshot, Summary, TimelinePoint};
