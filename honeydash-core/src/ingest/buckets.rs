use crate::ingest::types::HoneypotEvent;

/// Everything one scan of the log produced, grouped by event kind.
///
/// Sequences keep log order so that ranking ties can fall back to first
/// appearance.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventBuckets {
    pub total_connections: u64,
    pub successful_logins: u64,
    pub failed_logins: u64,

    pub ips: Vec<String>,
    pub usernames: Vec<String>,
    pub passwords: Vec<String>,
    pub commands: Vec<String>,
    pub session_durations: Vec<f64>,

    /// Timestamps of the events that are charted on the timeline.
    pub timeline: Vec<Option<String>>,
}

impl EventBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_login_attempts(&self) -> u64 {
        self.successful_logins + self.failed_logins
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.total_connections == 0
            && self.total_login_attempts() == 0
            && self.commands.is_empty()
            && self.session_durations.is_empty()
    }

    pub fn record(&mut self, event: HoneypotEvent) {
        if event.on_timeline() {
            self.timeline.push(event.timestamp().map(str::to_string));
        }

        match event {
            HoneypotEvent::Connect { src_ip, .. } => {
                self.total_connections += 1;
                self.ips.push(src_ip);
            }
            HoneypotEvent::LoginSuccess {
                username, password, ..
            } => {
                self.successful_logins += 1;
                self.usernames.push(username);
                self.passwords.push(password);
            }
            HoneypotEvent::LoginFailed {
                username, password, ..
            } => {
                self.failed_logins += 1;
                self.usernames.push(username);
                self.passwords.push(password);
            }
            HoneypotEvent::Command { input, .. } => {
                self.commands.push(input);
            }
            HoneypotEvent::SessionClosed { duration, .. } => {
                self.session_durations.push(duration);
            }
        }
    }
}

impl Extend<HoneypotEvent> for EventBuckets {
    fn extend<I: IntoIterator<Item = HoneypotEvent>>(&mut self, iter: I) {
        for event in iter {
            self.record(event);
        }
    }
}

impl FromIterator<HoneypotEvent> for EventBuckets {
    fn from_iter<I: IntoIterator<Item = HoneypotEvent>>(iter: I) -> Self {
        let mut buckets = EventBuckets::new();
        buckets.extend(iter);
        buckets
    }
}
