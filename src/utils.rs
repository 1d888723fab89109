/// Utility functions used throughout the application
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("foliotui-debug.log");
    path
}

/// Initialise the logging subsystem.
///
/// The alternate screen owns the terminal, so output goes to a log file in
/// the temp directory. If the file cannot be opened, logging stays off.
///
/// Priority: RUST_LOG env var > CLI --debug flag > default "info".
pub fn init_logging(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_debug_log_path())
    {
        Ok(file) => file,
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .compact()
        .init();

    tracing::debug!("logging initialised");
}
