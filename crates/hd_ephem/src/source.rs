//! Pluggable longitude backends.

use crate::body::Body;
use crate::error::EphemerisError;

/// A backend that can resolve a body's ecliptic longitude.
///
/// Implementations return degrees in [0, 360) on the tropical zodiac
/// (equinox of date) for a Julian Date in TT. They are free to refuse
/// any body or epoch; [`crate::Ephemeris`] decides what happens next.
pub trait LongitudeSource: Send + Sync {
    /// Short label used in log events.
    fn name(&self) -> &'static str;

    fn try_longitude(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError>;
}
