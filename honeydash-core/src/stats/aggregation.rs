use crate::ingest::{EventBuckets, ingest_log};
use crate::stats::constants::TOP_N;
use crate::stats::frequency::FrequencyTable;
use crate::stats::timeline::build_timeline;
use crate::stats::types::{IpCount, NameCount, StatsSnapshot, Summary};
use std::path::Path;

/// Scan the log at `path` and aggregate it. One call per dashboard request.
pub fn collect_snapshot(path: &Path) -> StatsSnapshot {
    let buckets = ingest_log(path);
    let snapshot = aggregate(&buckets);

    tracing::debug!(
        path = %path.display(),
        connections = snapshot.summary.total_connections,
        login_attempts = snapshot.summary.total_login_attempts,
        commands = snapshot.summary.total_commands,
        "stats snapshot computed"
    );

    snapshot
}

pub fn aggregate(buckets: &EventBuckets) -> StatsSnapshot {
    let usernames = FrequencyTable::from_values(&buckets.usernames);
    let passwords = FrequencyTable::from_values(&buckets.passwords);
    let commands = FrequencyTable::from_values(&buckets.commands);
    let ips = FrequencyTable::from_values(&buckets.ips);

    let summary = Summary {
        total_connections: buckets.total_connections,
        total_login_attempts: buckets.total_login_attempts(),
        successful_logins: buckets.successful_logins,
        failed_logins: buckets.failed_logins,
        unique_ips: ips.distinct() as u64,
        unique_usernames: usernames.distinct() as u64,
        unique_passwords: passwords.distinct() as u64,
        total_commands: buckets.commands.len() as u64,
        avg_session_duration: average_duration(&buckets.session_durations),
    };

    StatsSnapshot {
        summary,
        top_usernames: ranked_names(&usernames),
        top_passwords: ranked_names(&passwords),
        top_commands: ranked_names(&commands),
        top_ips: ips
            .top(TOP_N)
            .into_iter()
            .map(|(ip, count)| IpCount {
                ip: ip.to_string(),
                count,
            })
            .collect(),
        timeline: build_timeline(buckets.timeline.iter().map(Option::as_deref)),
    }
}

/// Mean of `durations` rounded to two decimals, ties to even; `0.0` for no
/// sessions.
///
/// The mean is accumulated incrementally so large finite durations cannot
/// overflow a running sum.
pub fn average_duration(durations: &[f64]) -> f64 {
    let mut mean = 0.0_f64;
    for (i, d) in durations.iter().enumerate() {
        let n = (i + 1) as f64;
        mean += d / n - mean / n;
    }

    if !mean.is_finite() {
        return 0.0;
    }

    let scaled = mean * 100.0;
    if !scaled.is_finite() {
        // Far beyond integer precision; there are no decimals left to round.
        return mean;
    }
    scaled.round_ties_even() / 100.0
}

fn ranked_names(table: &FrequencyTable) -> Vec<NameCount> {
    table
        .top(TOP_N)
        .into_iter()
        .map(|(name, count)| NameCount {
            name: name.to_string(),
            count,
        })
        .collect()
}
