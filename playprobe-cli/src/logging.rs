// ============================================================================
// playprobe-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and Optional File Logging
//
// All diagnostics go through the `log` facade. Console output goes to stderr
// so that stdout carries only the report. Without a log directory the
// console logger is `env_logger` (honouring RUST_LOG); with one, `fern`
// dispatches to both stderr and a timestamped file.
//
// USAGE:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug or -v: Detailed debugging information
// - RUST_LOG=trace: Raw IPC traffic

use crate::error::CliResult;

use log::LevelFilter;
use owo_colors::OwoColorize;
use playprobe_core::CoreError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("playprobe_{}.log", playprobe_cli::logging::get_timestamp());
/// assert!(log_filename.starts_with("playprobe_"));
/// ```
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Installs the global logger. Returns the log file path when one is written.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>, use_color: bool) -> CliResult<Option<PathBuf>> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };

    match log_dir {
        None => {
            let default_filter = level.to_string().to_lowercase();
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
                .format(move |buf, record| {
                    writeln!(buf, "{} {}", level_label(record.level(), use_color), record.args())
                })
                .try_init()
                .map_err(|e| CoreError::OperationFailed(format!("Failed to initialise logging: {e}")))?;
            Ok(None)
        }
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|e| {
                CoreError::PathError(format!(
                    "Failed to create log directory '{}': {}",
                    dir.display(),
                    e
                ))
            })?;
            let log_path = dir.join(format!("playprobe_{}.log", get_timestamp()));
            let log_file = fern::log_file(&log_path)?;

            let console = fern::Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!("{} {}", level_label(record.level(), use_color), message))
                })
                .chain(std::io::stderr());

            let file = fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} {:<5} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(log_file);

            fern::Dispatch::new()
                .level(level)
                .chain(console)
                .chain(file)
                .apply()
                .map_err(|e| CoreError::OperationFailed(format!("Failed to initialise logging: {e}")))?;

            log::debug!("Logging to {}", log_path.display());
            Ok(Some(log_path))
        }
    }
}

fn level_label(level: log::Level, use_color: bool) -> String {
    let label = match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "INFO ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    };
    if !use_color {
        return label.to_string();
    }
    match level {
        log::Level::Error => label.bright_red().to_string(),
        log::Level::Warn => label.yellow().to_string(),
        log::Level::Info => label.green().to_string(),
        log::Level::Debug => label.blue().to_string(),
        log::Level::Trace => label.magenta().to_string(),
    }
}
