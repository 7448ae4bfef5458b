use serde::{Deserialize, Serialize};

/// Everything the dashboard shows for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub summary: Summary,
    pub top_usernames: Vec<NameCount>,
    pub top_passwords: Vec<NameCount>,
    pub top_commands: Vec<NameCount>,
    pub top_ips: Vec<IpCount>,
    pub timeline: Vec<TimelinePoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_connections: u64,
    pub total_login_attempts: u64,
    pub successful_logins: u64,
    pub failed_logins: u64,
    pub unique_ips: u64,
    pub unique_usernames: u64,
    pub unique_passwords: u64,
    pub total_commands: u64,
    /// Seconds, rounded to two decimals.
    pub avg_session_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpCount {
    pub ip: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    /// Hour bucket, `YYYY-MM-DDTHH`.
    pub time: String,
    pub count: u64,
}
