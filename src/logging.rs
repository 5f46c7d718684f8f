use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file path.
pub const LOG_ENV_VAR: &str = "COUNTER_LOG";

/// Picks the log file base path: CLI flag, then `COUNTER_LOG`, then config.
pub fn resolve_log_path(
    cli: Option<&Path>,
    env: Option<OsString>,
    config: Option<&Path>,
) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| env.filter(|v| !v.is_empty()).map(PathBuf::from))
        .or_else(|| config.map(Path::to_path_buf))
}

/// `{base}.{timestamp}.{pid}`, so simultaneous instances never share a file.
pub fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless a path is given: stdout belongs to the TUI.
/// Returns the file actually written to.
pub fn init_tracing(base: Option<&Path>) -> Option<PathBuf> {
    let base = base?;
    let unique_path = unique_log_path(base);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!(
            "Warning: Failed to create log file: {}",
            unique_path.display()
        );
        return None;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(unique_path)
}
