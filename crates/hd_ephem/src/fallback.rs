//! Mean-motion approximation used when the primary source cannot answer.
//!
//! Each body advances uniformly from its J2000.0 mean longitude at its
//! mean geocentric (Sun, Moon, node, inner planets) or heliocentric
//! (outer planets) rate. This ignores the equation of center and all
//! retrograde motion, so results can be tens of degrees off for the
//! planets. It exists so a chart can always be completed.

use hd_time::{J2000_JD, julian_centuries};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::normalize_360;
use crate::precession::precession_in_longitude_deg;
use crate::source::LongitudeSource;

/// `(mean longitude at J2000 in deg, mean motion in deg/day, referred to J2000 equinox)`
fn mean_elements(body: Body) -> (f64, f64, bool) {
    match body {
        // Mercury and Venus never stray far from the Sun; use its mean motion.
        Body::Sun | Body::Mercury | Body::Venus => (280.46646, 0.985_647_356_4, false),
        Body::Moon => (218.3164477, 13.176_396_48, false),
        Body::NorthNode => (125.0445479, -0.052_953_808_3, false),
        Body::Mars => (355.45332, 0.524_020_776_6, true),
        Body::Jupiter => (34.39644, 0.083_086_762_8, true),
        Body::Saturn => (49.95424, 0.033_470_695_0, true),
        Body::Uranus => (313.23810, 0.011_731_198_6, true),
        Body::Neptune => (304.87997, 0.005_981_093_6, true),
        Body::Pluto => (238.92904, 0.003_975_573_0, true),
        Body::Earth => (100.46646, 0.985_647_356_4, false),
        Body::SouthNode => (305.0445479, -0.052_953_808_3, false),
    }
}

/// Deterministic period-based extrapolation; never fails for a finite epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeanMotionFallback;

impl MeanMotionFallback {
    /// Approximate longitude in degrees [0, 360).
    pub fn longitude(&self, body: Body, jd_tt: f64) -> f64 {
        let (l0, rate, j2000_frame) = mean_elements(body);
        let days = jd_tt - J2000_JD;
        let mut lon = l0 + rate * days;
        if j2000_frame {
            lon += precession_in_longitude_deg(julian_centuries(jd_tt));
        }
        normalize_360(lon)
    }
}

impl LongitudeSource for MeanMotionFallback {
    fn name(&self) -> &'static str {
        "mean-motion"
    }

    fn try_longitude(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError> {
        if !jd_tt.is_finite() {
            return Err(EphemerisError::InvalidEpoch);
        }
        Ok(self.longitude(body, jd_tt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::ALL_BODIES;

    #[test]
    fn all_bodies_in_range() {
        let fb = MeanMotionFallback;
        for jd in [1_000_000.0, J2000_JD, 2_460_000.5, 3_000_000.0] {
            for &b in &ALL_BODIES {
                let lon = fb.longitude(b, jd);
                assert!((0.0..360.0).contains(&lon), "{b} at {jd}: {lon}");
            }
        }
    }

    #[test]
    fn derived_entries_are_opposite() {
        let fb = MeanMotionFallback;
        for jd in [2_440_000.5, 2_455_555.5] {
            let sun = fb.longitude(Body::Sun, jd);
            let earth = fb.longitude(Body::Earth, jd);
            assert!((normalize_360(earth - sun) - 180.0).abs() < 1e-9);
            let north = fb.longitude(Body::NorthNode, jd);
            let south = fb.longitude(Body::SouthNode, jd);
            assert!((normalize_360(south - north) - 180.0).abs() < 1e-9);
        }
    }

    #[test]
    fn sun_one_year_later_returns() {
        let fb = MeanMotionFallback;
        let a = fb.longitude(Body::Sun, J2000_JD);
        let b = fb.longitude(Body::Sun, J2000_JD + 365.2422);
        let d = (a - b).abs();
        assert!(d.min(360.0 - d) < 0.02, "drift {d}");
    }

    #[test]
    fn deterministic() {
        let fb = MeanMotionFallback;
        assert_eq!(
            fb.longitude(Body::Pluto, 2_447_000.25),
            fb.longitude(Body::Pluto, 2_447_000.25)
        );
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(
            MeanMotionFallback.try_longitude(Body::Moon, f64::NAN),
            Err(EphemerisError::InvalidEpoch)
        );
    }
}
