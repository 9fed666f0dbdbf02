//! Error types for the hull camera controller
//!
//! Camera-state fallbacks (no candidates, dead parts, lost line of sight) are
//! never errors. These types only cover configuration and descriptor
//! validation, and handle lookups against a host implementation.

use std::fmt;

/// Result type for hull camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Hull camera errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Controller configuration rejected by `ControllerConfig::validate`
    InvalidConfig(String),

    /// Camera source descriptor with degenerate or non-finite values
    InvalidDescriptor(String),

    /// Vehicle or part key that no longer refers to a live host object
    UnknownHandle(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::InvalidDescriptor(msg) => write!(f, "Invalid camera descriptor: {}", msg),
            Error::UnknownHandle(msg) => write!(f, "Unknown handle: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an `Error` variant and log it at ERROR level with file:line
///
/// # Example
///
/// ```ignore
/// let err = hullcam_err!("hullcam::Config", InvalidConfig, "standoff must be positive, got {}", d);
/// ```
#[macro_export]
macro_rules! hullcam_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::log::log_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!(),
        );
        $crate::hullcam::Error::$variant(message)
    }};
}

/// Log and return early with an `Error` variant
#[macro_export]
macro_rules! hullcam_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::hullcam_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
