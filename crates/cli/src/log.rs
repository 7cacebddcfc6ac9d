use std::{fmt, io::Write};

use chrono::Local;
use colored::Colorize;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

/// Log level for a number of `-v` flags, never going below the configured level.
#[must_use]
pub fn level(verbose: u8, configured: LevelFilter) -> LevelFilter {
    let requested = match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    requested.max(configured)
}

pub struct Entry {
    pub time: String,
    pub level: Level,
    pub message: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            Level::Error => "error".red().bold(),
            Level::Warn => "warning".yellow().bold(),
            Level::Info => "info".blue().bold(),
            Level::Debug => "debug".dimmed(),
            Level::Trace => "trace".dimmed(),
        };
        write!(f, "{} {}: {}", self.time.dimmed(), level, self.message)
    }
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let entry = Entry {
                time: Local::now().format("%b %d %H:%M:%S").to_string(),
                level: record.level(),
                message: record.args().to_string(),
            };
            let _ = writeln!(std::io::stderr().lock(), "{entry}");
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
