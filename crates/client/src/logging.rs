//! Session log setup.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Platform cache directory for logs, e.g. `~/.cache/galaxy/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "galaxy")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/galaxy"))
        .join("logs")
}

/// Session identifier used when none is configured.
pub fn generated_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

/// Setup logging to `<log_root>/<session>/turn-digest.log`, optionally
/// mirrored to stderr.
///
/// Returns the session log directory.
pub fn setup_logging(
    session_id: Option<&str>,
    log_root: Option<&Path>,
    to_stderr: bool,
) -> Result<PathBuf> {
    let session_id = session_id.map_or_else(generated_session_id, str::to_string);
    let log_root = log_root.map_or_else(default_log_dir, Path::to_path_buf);

    let session_log_dir = log_root.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "turn-digest.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = to_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .boxed()
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // Keep the file writer alive for the rest of the process
    std::mem::forget(guard);

    tracing::info!(session = %session_id, "Logging initialized");
    tracing::info!("Log file: {}/turn-digest.log", session_log_dir.display());

    Ok(session_log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_prefixed() {
        assert!(generated_session_id().starts_with("session_"));
    }

    #[test]
    fn default_log_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }
}
