//! Error types for gridrange operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// The single user-facing rejection the range validator produces.
    /// Surfaced as a field-level validation message, never as a request abort.
    #[error("Wrong dates format.")]
    WrongDateFormat,
}

pub type Result<T> = std::result::Result<T, RangeError>;
