use honeydash_core::conf::DashboardConfig;
use std::path::Path;

/// Point a fixture config at a free port and a per-test log file.
pub fn patch_config(
    mut cfg: DashboardConfig,
    listen_port: u16,
    log_path: &Path,
) -> DashboardConfig {
    cfg.server.listen = format!("127.0.0.1:{listen_port}");
    cfg.server.pid_file = None;
    cfg.source.log_path = log_path.to_path_buf();
    cfg
}
