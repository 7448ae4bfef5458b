use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Parsing
    #[error("failed to parse HCL in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: hcl::Error,
    },

    // Validation
    #[error("invalid listen address '{addr}': {reason}")]
    InvalidListenAddr { addr: String, reason: String },

    #[error("server.threads must be at least 1 (got {threads})")]
    InvalidThreads { threads: usize },

    #[error("source.log_path must not be empty")]
    EmptyLogPath,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: hcl::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Operator-facing hint printed under the error by `config check`.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ConfigError::ReadFile { .. } => Some(
                "Create a starter configuration with:\n\
                 \n\
                 honeydash config init",
            ),
            ConfigError::InvalidListenAddr { .. } => Some(
                "The listen address must be an IP and port.\n\
                 \n\
                 Example:\n\
                 \n\
                 server {\n\
                 \x20 listen = \"0.0.0.0:5000\"\n\
                 }",
            ),
            ConfigError::EmptyLogPath => Some(
                "Point the dashboard at the honeypot's JSON log.\n\
                 \n\
                 Example:\n\
                 \n\
                 source {\n\
                 \x20 log_path = \"/home/cowrie/cowrie/var/log/cowrie/cowrie.json\"\n\
                 }",
            ),
            _ => None,
        }
    }
}
