//! Birth data accepted by the chart engine.

use hd_time::{CivilTime, UtcTime, jd_ut_to_tt};

use crate::error::SearchError;

/// A birth instant with its UTC offset already applied, plus optional
/// geographic coordinates.
///
/// The coordinates are range-checked and carried through, but gate and
/// line computation does not depend on them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthData {
    pub civil: CivilTime,
    /// Degrees, north positive.
    pub latitude: Option<f64>,
    /// Degrees, east positive.
    pub longitude: Option<f64>,
}

impl BirthData {
    pub fn new(civil: CivilTime) -> Self {
        Self {
            civil,
            latitude: None,
            longitude: None,
        }
    }

    /// Attach coordinates; validated by [`BirthData::validate`].
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    pub fn validate(&self) -> Result<(), SearchError> {
        let in_range = |v: f64, limit: f64| v.is_finite() && (-limit..=limit).contains(&v);
        if self.latitude.is_some_and(|lat| !in_range(lat, 90.0)) {
            return Err(SearchError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if self.longitude.is_some_and(|lon| !in_range(lon, 180.0)) {
            return Err(SearchError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(())
    }

    pub fn utc(&self) -> Result<UtcTime, SearchError> {
        Ok(self.civil.to_utc()?)
    }

    /// Birth instant as Julian Date (TT).
    pub fn jd_tt(&self) -> Result<f64, SearchError> {
        Ok(jd_ut_to_tt(self.utc()?.to_jd_ut()))
    }
}
