//! Logging Infrastructure
//!
//! `tracing` subscriber writing to stdout, or to a daily rolling file when a
//! log directory is configured.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("lunch_server={level},tower_http={level},{level}"))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(log_path) {
            eprintln!("Cannot create log directory {dir}: {e}, logging to stdout");
        } else {
            let file_appender = tracing_appender::rolling::daily(log_path, "lunch-server");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.init();
}
