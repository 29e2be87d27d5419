//! Logging for the inocli command line tool.
//!
//! Dual output: colored stderr (stdout is reserved for command output) and a
//! plain log file. Initialization is thread-safe and runs once.

use crate::error::InocliError;

use std::env::temp_dir;
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Set once the dispatch is installed.
static LOGGER_READY: AtomicBool = AtomicBool::new(false);

const APP_DIR_NAME: &str = "inocli";
const LOG_DIR_NAME: &str = "logs";
const LOG_FILE_NAME: &str = "inocli.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// `{data_local_dir}/inocli/logs`, or `{temp_dir}/inocli/logs` when the
/// platform has no local data directory.
pub fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(temp_dir)
        .join(APP_DIR_NAME)
        .join(LOG_DIR_NAME)
}

/// Initialize the logger with dual output (stderr + file).
///
/// Safe to call multiple times: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the dispatch cannot
/// be installed.
pub fn initialize(log_dir: &Path) -> Result<(), InocliError> {
    let mut result = Ok(());
    let mut first_call = false;

    // Concurrent callers block here until the first one has finished
    INIT_LOGGER_ONCE.call_once(|| {
        first_call = true;
        result = initialize_internal(log_dir);
        if result.is_ok() {
            LOGGER_READY.store(true, Ordering::SeqCst);
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");
        }
    });

    if !first_call {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
    }

    result
}

/// Whether log records reach stderr and the log file.
pub fn is_initialized() -> bool {
    LOGGER_READY.load(Ordering::SeqCst)
}

#[track_caller]
fn initialize_internal(log_dir: &Path) -> Result<(), InocliError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    // Connection pool chatter is only useful when debugging hyper itself
    let base_dispatch = Dispatch::new()
        .level(LOG_LEVEL)
        .level_for("hyper_util", LevelFilter::Warn)
        .level_for("rustls", LevelFilter::Warn);

    let stderr_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stderr());

    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {target}: {message}",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                target = record.target(),
                message = message,
            ))
        })
        .chain(
            fern::log_file(&log_file_path)
                .map_err(|e| InocliError::inocli(format!("Failed to create log file: {e}")))?,
        );

    base_dispatch
        .chain(stderr_dispatch)
        .chain(file_dispatch)
        .apply()
        .map_err(|e| InocliError::inocli(format!("Failed to initialize logger: {e}")))?;

    Ok(())
}
