//! Error types for time parsing and conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil time parsing or calendar conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date/time text could not be parsed.
    Parse(String),
    /// UTC offset text could not be parsed or is out of range.
    InvalidOffset(String),
    /// A calendar value or Julian Date is outside the supported range.
    OutOfRange(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "time parse error: {msg}"),
            Self::InvalidOffset(msg) => write!(f, "invalid UTC offset: {msg}"),
            Self::OutOfRange(msg) => write!(f, "time out of range: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
