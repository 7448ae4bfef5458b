use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A pid file owned by this process. Removal is best-effort.
#[derive(Debug, Clone)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Write the current process id to `path`, replacing any stale file.
    pub fn create(path: &Path) -> Result<Self> {
        fs::write(path, format!("{}\n", std::process::id()))
            .with_context(|| format!("failed to write pid file {}", path.display()))?;

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn remove(&self) {
        if let Err(e) = fs::remove_file(&self.path) {
            tracing::debug!(error = %e, pid_file = %self.path.display(), "pid file not removed");
        }
    }
}
