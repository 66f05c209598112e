// ============================================================================
// vidslider-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: Console and File Logging via fern
//
// Installs the global `log` backend. Console lines go to stderr so stdout
// stays reserved for command output (payload JSON, generated paths). When a
// log directory is given, the same records are also written, unstyled, to a
// timestamped file in that directory.
//
// AI-ASSISTANT-INFO: Logging initialization and helper functions

use console::style;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
///
/// # Example
/// ```
/// let log_filename = format!("vidslider_{}.log", vidslider_cli::logging::get_timestamp());
/// assert!(log_filename.ends_with(".log"));
/// ```
#[must_use]
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Path of the log file for a run started now.
#[must_use]
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("vidslider_{}.log", get_timestamp()))
}

fn level_for(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes logging at Info (or Debug with `verbose`).
///
/// # Errors
///
/// Fails if the log directory or file cannot be created, or if a logger is
/// already installed.
pub fn init(verbose: bool, log_dir: Option<&Path>) -> Result<(), fern::InitError> {
    let level = level_for(verbose);

    let console = fern::Dispatch::new()
        .format(|out, message, record| {
            let level = match record.level() {
                log::Level::Error => style("ERROR").red().bold(),
                log::Level::Warn => style("WARN ").yellow(),
                log::Level::Info => style("INFO ").green(),
                log::Level::Debug => style("DEBUG").blue(),
                log::Level::Trace => style("TRACE").magenta(),
            };
            out.finish(format_args!(
                "{} {} {}",
                style(chrono::Local::now().format("%H:%M:%S")).dim(),
                level,
                message
            ));
        })
        .chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .level(level)
        // ffmpeg-sidecar logs its own internals at debug
        .level_for("ffmpeg_sidecar", LevelFilter::Warn)
        .chain(console);

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)?;
        let path = log_file_path(dir);
        let file = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} {:<5} [{}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ));
            })
            .chain(fern::log_file(&path)?);
        dispatch = dispatch.chain(file);
    }

    dispatch.apply()?;
    log::debug!("Logger initialized with level: {}", level);
    Ok(())
}
