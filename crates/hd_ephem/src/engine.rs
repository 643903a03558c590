//! Ephemeris engine: primary source, derived points and degradation.

use std::fmt::{Debug, Formatter};

use serde::Serialize;

use crate::analytic::AnalyticEphemeris;
use crate::body::{ALL_BODIES, Body, NodeMode};
use crate::error::EphemerisError;
use crate::fallback::MeanMotionFallback;
use crate::normalize_360;
use crate::source::LongitudeSource;

/// Longitudes of all 13 chart bodies at one epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyLongitudes {
    /// Degrees [0, 360), indexed by `Body::index()`.
    pub longitudes: [f64; 13],
}

impl BodyLongitudes {
    pub fn longitude(&self, body: Body) -> f64 {
        self.longitudes[body.index() as usize]
    }
}

/// Longitude provider used by chart computation.
///
/// `Ephemeris` is [`Send`] + [`Sync`] and holds no mutable state, so one
/// value can serve any number of concurrent chart computations.
///
/// Earth and the South Node are never looked up: they are the points
/// opposite the Sun and the North Node. When the primary source fails for
/// any other body, [`Ephemeris::longitude`] logs the failure and answers
/// from [`MeanMotionFallback`] instead, so callers always get a value.
pub struct Ephemeris {
    primary: Box<dyn LongitudeSource>,
    fallback: MeanMotionFallback,
}

impl Debug for Ephemeris {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ephemeris")
            .field("primary", &self.primary.name())
            .field("fallback", &self.fallback.name())
            .finish()
    }
}

impl Default for Ephemeris {
    fn default() -> Self {
        Self::analytic(NodeMode::default())
    }
}

impl Ephemeris {
    /// Engine over an arbitrary primary source.
    pub fn new(primary: Box<dyn LongitudeSource>) -> Self {
        Self {
            primary,
            fallback: MeanMotionFallback,
        }
    }

    /// Engine over the built-in analytic backend.
    pub fn analytic(node_mode: NodeMode) -> Self {
        Self::new(Box::new(AnalyticEphemeris::new(node_mode)))
    }

    pub fn primary_name(&self) -> &'static str {
        self.primary.name()
    }

    /// Longitude from the primary source only; failures are returned.
    pub fn try_longitude(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError> {
        if !jd_tt.is_finite() {
            return Err(EphemerisError::InvalidEpoch);
        }
        match body.opposite_of() {
            Some(base) => Ok(normalize_360(self.try_longitude(base, jd_tt)? + 180.0)),
            None => Ok(normalize_360(self.primary.try_longitude(body, jd_tt)?)),
        }
    }

    /// Longitude with fallback. Only a non-finite epoch is an error.
    pub fn longitude(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError> {
        if !jd_tt.is_finite() {
            return Err(EphemerisError::InvalidEpoch);
        }
        if let Some(base) = body.opposite_of() {
            return Ok(normalize_360(self.longitude(base, jd_tt)? + 180.0));
        }
        match self.primary.try_longitude(body, jd_tt) {
            Ok(lon) if lon.is_finite() => Ok(normalize_360(lon)),
            Ok(lon) => {
                tracing::warn!(
                    body = body.name(),
                    jd_tt,
                    source = self.primary.name(),
                    lon,
                    "non-finite longitude from primary source, using mean-motion approximation"
                );
                Ok(self.fallback.longitude(body, jd_tt))
            }
            Err(e) => {
                tracing::warn!(
                    body = body.name(),
                    jd_tt,
                    source = self.primary.name(),
                    error = %e,
                    "primary source unavailable, using mean-motion approximation"
                );
                Ok(self.fallback.longitude(body, jd_tt))
            }
        }
    }

    /// Longitudes of every chart body at one epoch.
    pub fn longitudes(&self, jd_tt: f64) -> Result<BodyLongitudes, EphemerisError> {
        let mut longitudes = [0.0; 13];
        for &body in ALL_BODIES.iter().filter(|b| b.opposite_of().is_none()) {
            longitudes[body.index() as usize] = self.longitude(body, jd_tt)?;
        }
        for &body in &ALL_BODIES {
            if let Some(base) = body.opposite_of() {
                longitudes[body.index() as usize] =
                    normalize_360(longitudes[base.index() as usize] + 180.0);
            }
        }
        Ok(BodyLongitudes { longitudes })
    }
}
