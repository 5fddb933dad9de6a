// Logging setup plus conditional macros that compile away in release builds

use crate::wordbank::APP_DIR_NAME;
use chrono::Local;
use env_logger::Target;
use log::LevelFilter;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File name of the log written while the full-screen interface owns the terminal
pub const LOG_FILE_NAME: &str = "word-scramble.log";

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// Append to a file; logging is switched off if it cannot be opened.
    File(Option<PathBuf>),
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

/// Map the number of `-v` flags to a level filter.
#[must_use]
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Get the log file path, e.g. `~/.cache/word-scramble/word-scramble.log`
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Open `path` for appending, creating its parent directory if needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialise `env_logger`. `RUST_LOG` still overrides the verbosity flag.
pub fn init_logging(verbosity: u8, target: LogTarget) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_from_verbosity(verbosity))
        .parse_default_env();

    match target {
        LogTarget::Stderr => {
            builder.target(Target::Stderr);
        }
        LogTarget::File(path) => match path.as_deref().map(open_log_file) {
            Some(Ok(file)) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            // Stderr would draw over the alternate screen
            _ => {
                builder.filter_level(LevelFilter::Off);
            }
        },
    }

    let _ = builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
