use crate::conf::error::ConfigError;
use crate::conf::types::DashboardConfig;
use std::ffi::OsString;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "honeydash.hcl";

/// Overrides `source.log_path` when set.
pub const LOG_PATH_ENV: &str = "HONEYDASH_LOG_PATH";

/// Load, override and validate `honeydash.hcl` from the config directory `root`.
pub fn load_config(root: &Path) -> Result<DashboardConfig, ConfigError> {
    let path = root.join(CONFIG_FILE_NAME);

    //--------------------------------------------------------------------------
    // Hard fail: IO and parsing
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
    let mut config = parse_config(&path, &contents)?;

    //--------------------------------------------------------------------------
    // Environment overrides
    //--------------------------------------------------------------------------
    apply_log_path_override(&mut config, std::env::var_os(LOG_PATH_ENV));

    validate(&config)?;

    Ok(config)
}

/// Parse config text. `path` is only used for error reporting.
pub fn parse_config(path: &Path, contents: &str) -> Result<DashboardConfig, ConfigError> {
    hcl::from_str(contents).map_err(|e| ConfigError::parse(path, e))
}

pub(crate) fn apply_log_path_override(config: &mut DashboardConfig, value: Option<OsString>) {
    if let Some(log_path) = value.filter(|v| !v.is_empty()) {
        tracing::debug!(env = LOG_PATH_ENV, "overriding source.log_path from environment");
        config.source.log_path = PathBuf::from(log_path);
    }
}

pub(crate) fn validate(config: &DashboardConfig) -> Result<(), ConfigError> {
    config
        .server
        .listen
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidListenAddr {
            addr: config.server.listen.clone(),
            reason: e.to_string(),
        })?;

    if config.server.threads == Some(0) {
        return Err(ConfigError::InvalidThreads { threads: 0 });
    }

    if config.source.log_path.as_os_str().is_empty() {
        return Err(ConfigError::EmptyLogPath);
    }

    Ok(())
}
