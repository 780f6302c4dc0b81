//! Error types for word-clock operations.
//!
//! Resolution itself is total; these only arise at the edges where callers
//! hand in text or tuning values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;
