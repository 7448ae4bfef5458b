use crate::ingest::{
    EVENT_COMMAND_INPUT, EVENT_LOGIN_FAILED, EVENT_LOGIN_SUCCESS, EVENT_SESSION_CLOSED,
    EVENT_SESSION_CONNECT,
};
use crate::simulate::constants::*;
use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Value, json};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    pub attempts: usize,
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_ATTEMPTS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationReport {
    pub attempts: usize,
    pub successful_logins: usize,
    pub events_written: usize,
}

/// Append `options.attempts` simulated sessions to the log at `path`.
///
/// The file (and its parent directory) is created if missing. Existing
/// content is left alone.
pub fn simulate_to_file(path: &Path, options: SimulationOptions) -> Result<SimulationReport> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (events, report) = generate_events(&mut rng, options.attempts, Utc::now());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for event in &events {
        serde_json::to_writer(&mut out, event)?;
        out.write_all(b"\n")?;
    }
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        attempts = report.attempts,
        successful_logins = report.successful_logins,
        events = report.events_written,
        "simulated attack traffic written"
    );

    Ok(report)
}

/// Generate the events for `attempts` sessions, starting at `start`.
///
/// Output depends only on the rng state and `start`.
pub fn generate_events<R: Rng + ?Sized>(
    rng: &mut R,
    attempts: usize,
    start: DateTime<Utc>,
) -> (Vec<Value>, SimulationReport) {
    let mut clock = start;
    let mut events = Vec::new();
    let mut successful_logins = 0;

    for _ in 0..attempts {
        let session = format!("{:012x}", rng.random::<u64>() & 0xffff_ffff_ffff);
        let src_ip = pick(rng, &SOURCE_IPS);
        let username = pick(rng, &USERNAMES);
        let password = pick(rng, &PASSWORDS);
        let opened_at = clock;

        events.push(json!({
            "eventid": EVENT_SESSION_CONNECT,
            "timestamp": timestamp(clock),
            "session": session,
            "src_ip": src_ip,
        }));

        clock = advance(rng, clock);
        let success = rng.random_bool(LOGIN_SUCCESS_PROBABILITY);
        let login = if success {
            EVENT_LOGIN_SUCCESS
        } else {
            EVENT_LOGIN_FAILED
        };
        events.push(json!({
            "eventid": login,
            "timestamp": timestamp(clock),
            "session": session,
            "src_ip": src_ip,
            "username": username,
            "password": password,
        }));

        if success {
            successful_logins += 1;

            let count = rng.random_range(MIN_COMMANDS..=MAX_COMMANDS);
            let commands: Vec<&str> = COMMANDS.choose_multiple(rng, count).copied().collect();
            for input in commands {
                clock = advance(rng, clock);
                events.push(json!({
                    "eventid": EVENT_COMMAND_INPUT,
                    "timestamp": timestamp(clock),
                    "session": session,
                    "src_ip": src_ip,
                    "input": input,
                }));
            }
        }

        clock = advance(rng, clock);
        let duration = (clock - opened_at).num_milliseconds() as f64 / 1000.0;
        events.push(json!({
            "eventid": EVENT_SESSION_CLOSED,
            "timestamp": timestamp(clock),
            "session": session,
            "src_ip": src_ip,
            "duration": format!("{duration:.1}"),
        }));

        // Next attacker shows up a little later.
        clock = advance(rng, clock);
    }

    let report = SimulationReport {
        attempts,
        successful_logins,
        events_written: events.len(),
    };

    (events, report)
}

fn pick<R: Rng + ?Sized>(rng: &mut R, items: &[&'static str]) -> &'static str {
    items[rng.random_range(0..items.len())]
}

fn advance<R: Rng + ?Sized>(rng: &mut R, clock: DateTime<Utc>) -> DateTime<Utc> {
    let gap = rng.random_range(MIN_GAP_SECS..=MAX_GAP_SECS);
    clock + TimeDelta::milliseconds((gap * 1000.0) as i64)
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}
