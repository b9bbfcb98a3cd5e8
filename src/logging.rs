use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Install the process-wide subscriber that appends to `log_file`.
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// until the process exits.
pub fn init_logging(log_file: &Path) -> Result<WorkerGuard> {
    let (subscriber, guard) = file_subscriber(log_file)?;
    subscriber
        .try_init()
        .context("Failed to install logging subscriber")?;
    Ok(guard)
}

/// Build a subscriber writing to `log_file` without installing it
pub fn file_subscriber(
    log_file: &Path,
) -> Result<(impl Subscriber + Send + Sync + 'static, WorkerGuard)> {
    let log_dir = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = log_file
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", log_file.display()))?;

    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Never rotates; the appender opens the file in append mode
    let file_appender = rolling::never(log_dir, file_name);
    let (file_writer, guard) = non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    Ok((Registry::default().with(env_filter).with(file_layer), guard))
}
