use crate::ingest::buckets::EventBuckets;
use crate::ingest::parse::parse_line;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Scan the honeypot log at `path` from the beginning.
///
/// A missing file is an empty log. Any other I/O failure is logged and the
/// buckets gathered up to that point are returned; callers never see an error.
pub fn ingest_log(path: &Path) -> EventBuckets {
    let mut buckets = EventBuckets::new();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "honeypot log not found; reporting empty data set");
            return buckets;
        }
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "failed to open honeypot log");
            return buckets;
        }
    };

    if let Err(e) = read_events(BufReader::new(file), &mut buckets) {
        tracing::warn!(
            error = %e,
            path = %path.display(),
            "error while reading honeypot log; returning partial data"
        );
    }

    buckets
}

/// Ingest line-delimited events from any buffered reader.
pub fn ingest_reader<R: BufRead>(reader: R) -> EventBuckets {
    let mut buckets = EventBuckets::new();

    if let Err(e) = read_events(reader, &mut buckets) {
        tracing::warn!(error = %e, "error while reading event stream; returning partial data");
    }

    buckets
}

fn read_events<R: BufRead>(reader: R, buckets: &mut EventBuckets) -> io::Result<()> {
    for line in reader.split(b'\n') {
        let line = line?;

        // Invalid UTF-8 only costs the line it appears on.
        let Ok(line) = std::str::from_utf8(&line) else {
            tracing::debug!("skipping non-UTF-8 log line");
            continue;
        };

        if let Some(event) = parse_line(line) {
            buckets.record(event);
        }
    }

    Ok(())
}
