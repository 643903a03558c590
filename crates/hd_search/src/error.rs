//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hd_chart::ChartError;
use hd_ephem::EphemerisError;
use hd_time::TimeError;

/// Errors from the chart pipeline.
///
/// Provider failures and solver non-convergence are recovered inside the
/// pipeline and never appear here; everything that does is fatal for the
/// request and carries its cause.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid configuration value.
    InvalidConfig(&'static str),
    /// Birth instant could not be converted.
    Time(TimeError),
    /// Ephemeris rejected the epoch outright.
    Ephemeris(EphemerisError),
    /// Static tables failed validation.
    Chart(ChartError),
    /// Latitude or longitude out of range.
    InvalidLocation(&'static str),
    /// The caller's deadline passed before the computation finished.
    Timeout,
    /// A concurrent chart computation panicked.
    Worker(String),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Timeout => write!(f, "computation timed out"),
            Self::Worker(msg) => write!(f, "worker failed: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Ephemeris(e) => Some(e),
            Self::Chart(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}

impl From<ChartError> for SearchError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_chain() {
        let e = SearchError::from(ChartError::MalformedTable("x".into()));
        assert!(e.source().is_some());
        assert!(e.to_string().contains("malformed"));
        assert!(SearchError::Timeout.source().is_none());
    }
}
