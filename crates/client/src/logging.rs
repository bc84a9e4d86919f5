//! Session directories and tracing setup.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

pub const LOG_FILE: &str = "client.log";

/// Per-run directory holding the log file and the event log.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub dir: PathBuf,
}

impl Session {
    /// Resolves the session id and creates its directory.
    pub fn create(config: &CliConfig) -> Result<Self> {
        let id = config
            .session_id
            .clone()
            .unwrap_or_else(|| format!("session_{}", unix_seconds()));
        let root = config.log_dir.clone().unwrap_or_else(log_dir);
        let dir = root.join(&id);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create session directory: {}", dir.display()))?;
        Ok(Self { id, dir })
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }
}

/// Platform-specific log root.
///
/// - macOS: `~/Library/Caches/tactics/logs`
/// - Linux: `~/.cache/tactics/logs` (or `$XDG_CACHE_HOME/tactics/logs`)
/// - Windows: `%LOCALAPPDATA%\tactics\logs`
/// - Fallback: `/tmp/tactics/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "tactics")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/tactics"))
        .join("logs")
}

pub(crate) fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

/// Installs stderr and session-file logging.
///
/// The returned guard flushes the file writer on drop; keep it alive until
/// the program exits.
pub fn setup_logging(session: &Session) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(&session.dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session.id);
    tracing::info!("Log file: {}", session.log_path().display());

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_directory_is_created_under_log_root() {
        let root = tempfile::tempdir().unwrap();
        let config = CliConfig {
            session_id: Some("duel".into()),
            log_dir: Some(root.path().to_path_buf()),
            ..CliConfig::default()
        };

        let session = Session::create(&config).unwrap();
        assert_eq!(session.id, "duel");
        assert!(session.dir.is_dir());
        assert_eq!(session.log_path(), root.path().join("duel").join(LOG_FILE));
    }
}
