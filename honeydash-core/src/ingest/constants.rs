pub const EVENT_SESSION_CONNECT: &str = "cowrie.session.connect";
pub const EVENT_LOGIN_SUCCESS: &str = "cowrie.login.success";
pub const EVENT_LOGIN_FAILED: &str = "cowrie.login.failed";
pub const EVENT_COMMAND_INPUT: &str = "cowrie.command.input";
pub const EVENT_SESSION_CLOSED: &str = "cowrie.session.closed";

/// Substituted for identity fields (ip, username, password) that are absent.
pub const UNKNOWN: &str = "unknown";
