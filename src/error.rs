//! Error types for the fallible boundaries (configuration, input parsing, export).
//!
//! The projection itself never fails; see [`crate::projector`].

use thiserror::Error;

/// Result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised outside the projection core.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Configuration file could not be parsed
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error (reading configuration)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export could not be written
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Export bytes are not valid UTF-8
    #[error("Export encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A date string is not in `DD/MM/YYYY` form
    #[error("Invalid date '{0}': expected DD/MM/YYYY")]
    InvalidDate(String),
}
