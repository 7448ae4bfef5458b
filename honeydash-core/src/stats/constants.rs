/// Length of each ranked list in the snapshot.
pub const TOP_N: usize = 10;

/// `YYYY-MM-DDTHH` - the hour prefix of an ISO-8601 timestamp.
pub const HOUR_PREFIX_LEN: usize = 13;
