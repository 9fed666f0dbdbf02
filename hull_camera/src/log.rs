//! Logging system for the hull camera controller
//!
//! This module provides a small pluggable logging facility:
//! - Customizable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error) with a minimum filter
//! - Colored console output by default
//! - Thread-safe global logger slot guarded by an RwLock
//! - File and line information for ERROR logs

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route controller logs into the host's own console
/// or log file.
///
/// # Example
///
/// ```no_run
/// use hull_camera::hullcam::log::{Logger, LogEntry};
///
/// struct HostConsole;
///
/// impl Logger for HostConsole {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host's debug console...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "hullcam::Controller", "hullcam::Discovery")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-tick detail (mount resolution, standoff placement)
    Trace,

    /// Fallbacks and reselection decisions
    Debug,

    /// View transitions and lifecycle events
    Info,

    /// Recoverable oddities in host data
    Warn,

    /// Validation failures, with file:line details
    Error,
}

/// Console logger used until the host installs its own.
///
/// One line per entry: `HH:MM:SS.mmm LEVEL source: message`, with
/// ` @ file:line` appended when the entry carries a location. Warnings and
/// errors go to stderr, everything else to stdout.
pub struct DefaultLogger;

impl DefaultLogger {
    fn level_tag(severity: LogSeverity) -> ColoredString {
        match severity {
            LogSeverity::Trace => "trace".dimmed(),
            LogSeverity::Debug => "debug".blue(),
            LogSeverity::Info => " info".green(),
            LogSeverity::Warn => " warn".yellow().bold(),
            LogSeverity::Error => "error".white().on_red().bold(),
        }
    }

    fn format(entry: &LogEntry) -> String {
        let clock: DateTime<Local> = entry.timestamp.into();
        let mut line = format!(
            "{} {} {}: {}",
            clock.format("%H:%M:%S%.3f").to_string().dimmed(),
            Self::level_tag(entry.severity),
            entry.source.magenta(),
            entry.message,
        );
        if let (Some(file), Some(number)) = (entry.file, entry.line) {
            line.push_str(&format!(" @ {}:{}", file, number));
        }
        line
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let line = Self::format(entry);
        if entry.severity >= LogSeverity::Warn {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

// ===== GLOBAL LOGGER =====

struct LoggerSlot {
    logger: Box<dyn Logger>,
    min_severity: LogSeverity,
}

static LOGGER: OnceLock<RwLock<LoggerSlot>> = OnceLock::new();

fn slot() -> &'static RwLock<LoggerSlot> {
    LOGGER.get_or_init(|| {
        RwLock::new(LoggerSlot {
            logger: Box::new(DefaultLogger),
            min_severity: LogSeverity::Info,
        })
    })
}

/// Replace the global logger
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = slot().write() {
        lock.logger = Box::new(logger);
    }
}

/// Restore `DefaultLogger` and the default `Info` threshold
pub fn reset_logger() {
    if let Ok(mut lock) = slot().write() {
        lock.logger = Box::new(DefaultLogger);
        lock.min_severity = LogSeverity::Info;
    }
}

/// Drop entries below `severity`
pub fn set_min_severity(severity: LogSeverity) {
    if let Ok(mut lock) = slot().write() {
        lock.min_severity = severity;
    }
}

/// Current minimum severity
pub fn min_severity() -> LogSeverity {
    slot()
        .read()
        .map(|lock| lock.min_severity)
        .unwrap_or(LogSeverity::Info)
}

/// Logging entry point used by the `hullcam_*!` macros
pub fn log(severity: LogSeverity, source: &str, message: String) {
    dispatch(severity, source, message, None, None);
}

/// Logging entry point with file:line, used by `hullcam_error!`
pub fn log_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    dispatch(severity, source, message, Some(file), Some(line));
}

fn dispatch(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: Option<&'static str>,
    line: Option<u32>,
) {
    if let Ok(lock) = slot().read() {
        if severity < lock.min_severity {
            return;
        }
        lock.logger.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file,
            line,
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! hullcam_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Trace, $source, format!($($arg)*))
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! hullcam_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Debug, $source, format!($($arg)*))
    };
}

/// Log an INFO message
///
/// # Example
///
/// ```ignore
/// hullcam_info!("hullcam::Controller", "Viewing remote vehicle {}", name);
/// ```
#[macro_export]
macro_rules! hullcam_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Info, $source, format!($($arg)*))
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! hullcam_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log($crate::log::LogSeverity::Warn, $source, format!($($arg)*))
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! hullcam_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
