//! Honeypot Log Ingestion
//!
//! Reads the honeypot's event log and sorts every line into typed buckets.
//!
//! The log is line-delimited JSON, one event per line, owned and appended to by
//! the honeypot. We never write to it and we never keep anything between calls:
//! every ingestion is a fresh full scan from the first byte.
//!
//! Each line goes through two steps:
//! - It is decoded into a [`RawEvent`], a partial record where every field is
//!   optional, so a missing key can never fail the decode.
//! - The raw record is turned into a [`HoneypotEvent`] by filling in defaults
//!   (`"unknown"` for identities, `0.0` for durations) and dispatching on the
//!   `eventid` tag.
//!
//! Anything that does not fit (garbage lines, unknown event kinds, empty
//! commands) is skipped. Ingestion has no error path visible to callers.
//!
//! The overall data processing architecture is:
//!
//! log file
//! parse_line
//! HoneypotEvent
//! EventBuckets
//!

mod buckets;
mod constants;
mod parse;
mod reader;
mod types;


pub use buckets::EventBuckets;
pub use constants::*;
pub use parse::{coerce_duration, parse_line};
pub use reader::{ingest_log, ingest_reader};
pub use types::{HoneypotEvent, RawEvent};
