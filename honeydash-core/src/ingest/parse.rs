use crate::ingest::constants::*;
use crate::ingest::types::{HoneypotEvent, RawEvent};
use serde_json::Value;

/// Decode one log line into a typed event.
///
/// Returns `None` for blank lines, anything that is not a JSON object, unknown
/// or missing event kinds, and command events with no input.
pub fn parse_line(line: &str) -> Option<HoneypotEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Ok(json) = serde_json::from_str::<Value>(line) else {
        tracing::debug!("skipping malformed log line");
        return None;
    };

    if !json.is_object() {
        tracing::debug!("skipping non-object log line");
        return None;
    }

    let raw: RawEvent = serde_json::from_value(json).ok()?;
    parse_event(raw)
}

pub(crate) fn parse_event(raw: RawEvent) -> Option<HoneypotEvent> {
    let timestamp = as_string(raw.timestamp.as_ref());

    let event = match raw.eventid.as_ref().and_then(Value::as_str)? {
        EVENT_SESSION_CONNECT => HoneypotEvent::Connect {
            src_ip: identity(raw.src_ip.as_ref()),
            timestamp,
        },
        EVENT_LOGIN_SUCCESS => HoneypotEvent::LoginSuccess {
            username: identity(raw.username.as_ref()),
            password: identity(raw.password.as_ref()),
            timestamp,
        },
        EVENT_LOGIN_FAILED => HoneypotEvent::LoginFailed {
            username: identity(raw.username.as_ref()),
            password: identity(raw.password.as_ref()),
            timestamp,
        },
        EVENT_COMMAND_INPUT => {
            let input = as_string(raw.input.as_ref()).filter(|s| !s.is_empty())?;
            HoneypotEvent::Command { input, timestamp }
        }
        EVENT_SESSION_CLOSED => HoneypotEvent::SessionClosed {
            duration: coerce_duration(raw.duration.as_ref()),
            timestamp,
        },
        other => {
            tracing::trace!(eventid = other, "ignoring untracked event kind");
            return None;
        }
    };

    Some(event)
}

/// Session durations show up as numbers or as numeric strings ("12.5").
/// Anything else, including non-finite values, counts as `0.0`.
pub fn coerce_duration(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|d| d.is_finite()).unwrap_or(0.0)
}

fn as_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn identity(value: Option<&Value>) -> String {
    as_string(value).unwrap_or_else(|| UNKNOWN.to_string())
}
