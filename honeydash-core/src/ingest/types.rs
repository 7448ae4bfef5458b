use serde::Deserialize;
use serde_json::Value;

/// One log line as it comes off disk: every field optional, nothing coerced yet.
///
/// The honeypot has written both strings and numbers into `duration`, and any
/// field may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
pub struct RawEvent {
    #[serde(default)]
    pub eventid: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Value>,
    #[serde(default)]
    pub src_ip: Option<Value>,
    #[serde(default)]
    pub username: Option<Value>,
    #[serde(default)]
    pub password: Option<Value>,
    #[serde(default)]
    pub input: Option<Value>,
    #[serde(default)]
    pub duration: Option<Value>,
}

/// A fully-defaulted honeypot event, one variant per event kind we track.
#[derive(Debug, Clone, PartialEq)]
pub enum HoneypotEvent {
    Connect {
        src_ip: String,
        timestamp: Option<String>,
    },
    LoginSuccess {
        username: String,
        password: String,
        timestamp: Option<String>,
    },
    LoginFailed {
        username: String,
        password: String,
        timestamp: Option<String>,
    },
    Command {
        input: String,
        timestamp: Option<String>,
    },
    SessionClosed {
        duration: f64,
        timestamp: Option<String>,
    },
}

impl HoneypotEvent {
    pub fn timestamp(&self) -> Option<&str> {
        match self {
            HoneypotEvent::Connect { timestamp, .. }
            | HoneypotEvent::LoginSuccess { timestamp, .. }
            | HoneypotEvent::LoginFailed { timestamp, .. }
            | HoneypotEvent::Command { timestamp, .. }
            | HoneypotEvent::SessionClosed { timestamp, .. } => timestamp.as_deref(),
        }
    }

    /// Whether this event contributes to the hourly timeline.
    ///
    /// Failed logins and closed sessions are left out; the dashboard has always
    /// charted connections, successful logins and commands only.
    pub fn on_timeline(&self) -> bool {
        matches!(
            self,
            HoneypotEvent::Connect { .. }
                | HoneypotEvent::LoginSuccess { .. }
                | HoneypotEvent::Command { .. }
        )
    }
}
