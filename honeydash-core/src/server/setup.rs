use crate::conf::DashboardConfig;
use crate::dashboard::DashboardGateway;
use crate::server::pid::PidFile;
use anyhow::{Context, Result};
use pingora::prelude::*;
use pingora::server::Server;
use pingora::server::configuration::ServerConf;

/// Run the dashboard server with the given configuration. Blocks forever.
pub fn run(config: DashboardConfig) -> Result<()> {
    // Pid file is best-effort: a failure is logged and startup continues.
    let pid_file = config
        .server
        .pid_file
        .as_deref()
        .and_then(|path| match PidFile::create(path) {
            Ok(pid_file) => {
                tracing::info!(pid_file = %path.display(), "pid file written");
                Some(pid_file)
            }
            Err(e) => {
                tracing::warn!(error = %e, pid_file = %path.display(), "failed to write pid file; continuing");
                None
            }
        });

    let server = build_pingora_server(&config)?;

    ctrlc::set_handler(move || {
        release(pid_file.as_ref());
        std::process::exit(0);
    })?;

    tracing::info!(
        listen = %config.server.listen,
        log_path = %config.source.log_path.display(),
        "honeydash dashboard starting"
    );

    server.run_forever();
}

/// Shutdown cleanup run from the Ctrl-C handler.
pub(crate) fn release(pid_file: Option<&PidFile>) {
    match pid_file {
        Some(pid_file) => {
            tracing::info!(pid_file = %pid_file.path().display(), "shutdown requested, removing pid file");
            pid_file.remove();
        }
        None => tracing::info!("shutdown requested"),
    }
}

/// Build the Pingora server hosting the dashboard gateway.
pub fn build_pingora_server(config: &DashboardConfig) -> Result<Server> {
    let mut server = if let Some(threads) = config.server.threads {
        tracing::debug!(
            threads,
            "Creating Pingora server with overridden worker threads"
        );
        let mut conf = ServerConf::new().context("could not construct pingora server configuration")?;
        conf.threads = threads;
        Server::new_with_opt_and_conf(None, conf)
    } else {
        // "None" is required here to truly tell Pingora to use its default settings.
        Server::new(None)?
    };

    server.bootstrap();

    let gateway = DashboardGateway::new(config.source.log_path.clone());

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&config.server.listen);

    server.add_service(svc);

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn release_removes_the_pid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("honeydash.pid");
        let pid_file = PidFile::create(&path).unwrap();

        release(Some(&pid_file));

        assert!(!path.exists());
    }

    #[test]
    fn release_without_pid_file_is_a_no_op() {
        release(None);
    }
}
