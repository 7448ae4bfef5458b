use crate::conf::load_config;
use crate::stats::{StatsSnapshot, collect_snapshot};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::fmt::Write as _;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

const BAR_WIDTH: usize = 20;

/// One-shot: scan the honeypot log and print the snapshot.
///
/// `log` takes precedence over the log path in the config directory.
pub fn run_stats(config_dir: &Path, log: Option<PathBuf>, json: bool) -> Result<()> {
    let log_path = match log {
        Some(path) => path,
        None => load_config(config_dir)?.source.log_path,
    };

    let snapshot = collect_snapshot(&log_path);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let color = io::stdout().is_terminal();
        print!("{}", render_report(&log_path, &snapshot, color));
    }

    Ok(())
}

pub fn render_report(log_path: &Path, snapshot: &StatsSnapshot, color: bool) -> String {
    let mut out = String::new();
    let s = &snapshot.summary;

    let title = format!("Honeydash Stats ({})", log_path.display());
    let _ = writeln!(out, "{}", heading(&title, color));
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
    let _ = writeln!(
        out,
        "Connections: {} | unique IPs: {}",
        s.total_connections, s.unique_ips
    );
    let _ = writeln!(
        out,
        "Logins: {} attempts | {} ok | {} failed",
        s.total_login_attempts, s.successful_logins, s.failed_logins
    );
    let _ = writeln!(
        out,
        "Credentials: {} usernames | {} passwords",
        s.unique_usernames, s.unique_passwords
    );
    let _ = writeln!(
        out,
        "Commands: {} | avg session: {:.2}s",
        s.total_commands, s.avg_session_duration
    );
    out.push('\n');

    render_ranked(
        &mut out,
        "Top usernames",
        snapshot
            .top_usernames
            .iter()
            .map(|n| (n.name.as_str(), n.count))
            .collect(),
        color,
    );
    render_ranked(
        &mut out,
        "Top passwords",
        snapshot
            .top_passwords
            .iter()
            .map(|n| (n.name.as_str(), n.count))
            .collect(),
        color,
    );
    render_ranked(
        &mut out,
        "Top commands",
        snapshot
            .top_commands
            .iter()
            .map(|n| (n.name.as_str(), n.count))
            .collect(),
        color,
    );
    render_ranked(
        &mut out,
        "Top source IPs",
        snapshot
            .top_ips
            .iter()
            .map(|n| (n.ip.as_str(), n.count))
            .collect(),
        color,
    );
    render_ranked(
        &mut out,
        "Activity per hour",
        snapshot
            .timeline
            .iter()
            .map(|p| (p.time.as_str(), p.count))
            .collect(),
        color,
    );

    out
}

fn render_ranked(out: &mut String, title: &str, items: Vec<(&str, u64)>, color: bool) {
    let _ = writeln!(out, "{}:", heading(title, color));

    if items.is_empty() {
        let _ = writeln!(out, "  <no data>\n");
        return;
    }

    let max = items.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1);
    let label_width = items
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        .min(32);

    for (label, count) in items {
        let bars = ((count as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
        let bar = "█".repeat(bars.max(1));
        let bar = if color {
            bar.yellow().to_string()
        } else {
            bar
        };
        let _ = writeln!(
            out,
            "  {:<width$} {:>6} {}",
            truncate(label, label_width),
            count,
            bar,
            width = label_width
        );
    }
    out.push('\n');
}

fn heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

fn truncate(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let mut s: String = label.chars().take(width.saturating_sub(1)).collect();
    s.push('…');
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::ingest_reader;
    use crate::stats::aggregate;

    #[test]
    fn report_lists_summary_and_rankings() {
        let log = concat!(
            "{\"eventid\":\"cowrie.session.connect\",\"src_ip\":\"203.0.113.9\",\"timestamp\":\"2024-01-01T03:00:00Z\"}\n",
            "{\"eventid\":\"cowrie.login.failed\",\"username\":\"root\",\"password\":\"123456\"}\n",
            "{\"eventid\":\"cowrie.command.input\",\"input\":\"uname -a\"}\n",
        );
        let snapshot = aggregate(&ingest_reader(log.as_bytes()));

        let report = render_report(Path::new("cowrie.json"), &snapshot, false);

        assert!(report.contains("Honeydash Stats (cowrie.json)"));
        assert!(report.contains("Connections: 1 | unique IPs: 1"));
        assert!(report.contains("Logins: 1 attempts | 0 ok | 1 failed"));
        assert!(report.contains("203.0.113.9"));
        assert!(report.contains("uname -a"));
        assert!(report.contains("2024-01-01T03"));
        assert!(!report.contains('\u{1b}'));
    }

    #[test]
    fn empty_snapshot_reports_no_data() {
        let report = render_report(Path::new("x"), &StatsSnapshot::default(), false);

        assert!(report.contains("Top usernames:\n  <no data>"));
        assert!(report.contains("avg session: 0.00s"));
    }

    #[test]
    fn long_labels_are_truncated() {
        assert_eq!(truncate("abcdef", 4), "abc…");
        assert_eq!(truncate("abc", 4), "abc");
    }
}
