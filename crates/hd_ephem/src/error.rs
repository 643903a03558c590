//! Error types for ephemeris lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors a longitude source can report for a single lookup.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Epoch is NaN or infinite.
    InvalidEpoch,
    /// The backend has no data for this epoch.
    EpochOutOfRange { jd_tt: f64 },
    /// The backend does not model this body.
    UnsupportedBody(&'static str),
    /// Backend-specific failure.
    Backend(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEpoch => write!(f, "epoch must be finite"),
            Self::EpochOutOfRange { jd_tt } => write!(f, "epoch out of range: JD {jd_tt}"),
            Self::UnsupportedBody(name) => write!(f, "unsupported body: {name}"),
            Self::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
