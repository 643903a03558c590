//! Design-moment search.
//!
//! The Design instant is the moment before birth when the Sun stood
//! `arc_deg` (88 deg) behind its birth longitude. Over a few weeks the Sun
//! advances monotonically at roughly one degree per day, so a linear scan
//! of a short window is enough:
//!
//! 1. Sample the Sun every `step_days`, starting `lead_days` before birth,
//!    for at most `max_samples` samples.
//! 2. Stop at the first sample within `tolerance_deg` of the target;
//!    otherwise keep the closest sample seen.
//! 3. If the provider answered no sample at all, use `fallback_days`
//!    before birth.
//!
//! An optional bisection between the chosen sample's neighbours polishes
//! the result when `refine_iterations > 0`.

use hd_chart::{angular_distance, signed_difference};
use hd_ephem::{Body, Ephemeris, EphemerisError, normalize_360};
use tracing::{debug, warn};

use crate::design_types::{Deadline, DesignConfig, DesignMethod, DesignMoment};
use crate::error::SearchError;

/// Target Design longitude: `(birth_sun − arc + 360) mod 360`.
pub fn design_target_longitude(birth_sun_lon_deg: f64, arc_deg: f64) -> f64 {
    normalize_360(birth_sun_lon_deg - arc_deg + 360.0)
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    jd: f64,
    lon: f64,
    distance: f64,
}

/// Sun longitude from the primary source; `None` when it cannot answer.
fn sun_sample(ephemeris: &Ephemeris, jd: f64) -> Option<f64> {
    match ephemeris.try_longitude(Body::Sun, jd) {
        Ok(lon) if lon.is_finite() => Some(lon),
        Ok(_) => {
            debug!(jd, "non-finite Sun sample skipped");
            None
        }
        Err(e) => {
            debug!(jd, error = %e, "Sun sample skipped");
            None
        }
    }
}

/// Find the Design instant for a birth at `birth_jd_tt` with Sun at `birth_sun_lon_deg`.
///
/// Provider failures on individual samples are skipped; only an invalid
/// configuration, a non-finite input or an expired `deadline` is an error.
pub fn find_design_instant(
    ephemeris: &Ephemeris,
    birth_jd_tt: f64,
    birth_sun_lon_deg: f64,
    config: &DesignConfig,
    deadline: Deadline,
) -> Result<DesignMoment, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !birth_jd_tt.is_finite() {
        return Err(EphemerisError::InvalidEpoch.into());
    }
    if !birth_sun_lon_deg.is_finite() {
        return Err(SearchError::InvalidConfig("birth Sun longitude must be finite"));
    }

    let target = design_target_longitude(birth_sun_lon_deg, config.arc_deg);
    let start = birth_jd_tt - config.lead_days;
    let mut best: Option<Sample> = None;
    let mut evaluated = 0u32;

    for i in 0..config.max_samples {
        deadline.check()?;
        let jd = start + f64::from(i) * config.step_days;
        let Some(lon) = sun_sample(ephemeris, jd) else {
            continue;
        };
        evaluated += 1;

        let sample = Sample {
            jd,
            lon,
            distance: angular_distance(lon, target),
        };
        if best.is_none_or(|b| sample.distance < b.distance) {
            best = Some(sample);
        }
        if sample.distance < config.tolerance_deg {
            let refined = refine(ephemeris, sample, target, config, deadline)?;
            return Ok(moment(refined, target, evaluated, DesignMethod::Converged));
        }
    }

    match best {
        Some(sample) => {
            let refined = refine(ephemeris, sample, target, config, deadline)?;
            let method = if refined.distance < config.tolerance_deg {
                DesignMethod::Converged
            } else {
                DesignMethod::BestSample
            };
            debug!(
                jd_tt = refined.jd,
                error_deg = refined.distance,
                "no sample within tolerance, using closest"
            );
            Ok(moment(refined, target, evaluated, method))
        }
        None => {
            let jd = birth_jd_tt - config.fallback_days;
            warn!(
                birth_jd_tt,
                fallback_days = config.fallback_days,
                "no Sun sample could be evaluated, using fixed Design offset"
            );
            let lon = ephemeris.longitude(Body::Sun, jd)?;
            let sample = Sample {
                jd,
                lon,
                distance: angular_distance(lon, target),
            };
            Ok(moment(sample, target, 0, DesignMethod::FixedOffset))
        }
    }
}

fn moment(sample: Sample, target: f64, evaluated: u32, method: DesignMethod) -> DesignMoment {
    DesignMoment {
        jd_tt: sample.jd,
        sun_longitude_deg: sample.lon,
        target_longitude_deg: target,
        error_deg: sample.distance,
        samples_evaluated: evaluated,
        method,
    }
}

/// Bisect the signed Sun-minus-target difference between the sample's
/// neighbours. Returns the input sample when refinement is disabled, the
/// bracket holds no crossing, or the provider stops answering.
fn refine(
    ephemeris: &Ephemeris,
    sample: Sample,
    target: f64,
    config: &DesignConfig,
    deadline: Deadline,
) -> Result<Sample, SearchError> {
    if config.refine_iterations == 0 {
        return Ok(sample);
    }
    let f = |jd: f64| sun_sample(ephemeris, jd).map(|lon| signed_difference(lon, target));

    let mut t_a = sample.jd - config.step_days;
    let mut t_b = sample.jd + config.step_days;
    let (Some(mut f_a), Some(f_b)) = (f(t_a), f(t_b)) else {
        return Ok(sample);
    };
    if f_a * f_b > 0.0 {
        return Ok(sample);
    }

    for _ in 0..config.refine_iterations {
        deadline.check()?;
        let t_mid = 0.5 * (t_a + t_b);
        let Some(f_mid) = f(t_mid) else {
            break;
        };
        if f_a * f_mid <= 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }

    let jd = 0.5 * (t_a + t_b);
    Ok(match sun_sample(ephemeris, jd) {
        Some(lon) if angular_distance(lon, target) < sample.distance => Sample {
            jd,
            lon,
            distance: angular_distance(lon, target),
        },
        _ => sample,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_ephem::LongitudeSource;
    use std::time::Instant;

    const BIRTH: f64 = 2_448_000.5;

    /// Sun moving uniformly; every other body unavailable.
    struct LinearSun {
        deg_per_day: f64,
        lon_at_birth: f64,
    }

    impl LongitudeSource for LinearSun {
        fn name(&self) -> &'static str {
            "linear-sun"
        }
        fn try_longitude(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError> {
            match body {
                Body::Sun => Ok(normalize_360(
                    self.lon_at_birth + (jd_tt - BIRTH) * self.deg_per_day,
                )),
                _ => Err(EphemerisError::UnsupportedBody(body.name())),
            }
        }
    }

    struct Offline;

    impl LongitudeSource for Offline {
        fn name(&self) -> &'static str {
            "offline"
        }
        fn try_longitude(&self, _body: Body, _jd_tt: f64) -> Result<f64, EphemerisError> {
            Err(EphemerisError::Backend("down".into()))
        }
    }

    fn linear(deg_per_day: f64, lon_at_birth: f64) -> Ephemeris {
        Ephemeris::new(Box::new(LinearSun {
            deg_per_day,
            lon_at_birth,
        }))
    }

    #[test]
    fn target_wraps_below_zero() {
        assert!((design_target_longitude(10.0, 88.0) - 282.0).abs() < 1e-12);
        assert!((design_target_longitude(200.0, 88.0) - 112.0).abs() < 1e-12);
    }

    #[test]
    fn first_sample_within_tolerance_wins() {
        let eph = linear(0.97, 200.0);
        let m = find_design_instant(&eph, BIRTH, 200.0, &DesignConfig::default(), Deadline::none())
            .unwrap();
        assert_eq!(m.method, DesignMethod::Converged);
        assert!(m.error_deg < 0.05);
        // exact crossing at 88 / 0.97 = 90.7216 days; the -90.75 sample is first within tolerance
        assert!((m.jd_tt - (BIRTH - 90.75)).abs() < 1e-9);
        assert_eq!(m.samples_evaluated, 86);
    }

    #[test]
    fn refinement_tightens_error() {
        let eph = linear(0.97, 200.0);
        let config = DesignConfig {
            refine_iterations: 40,
            ..DesignConfig::default()
        };
        let m = find_design_instant(&eph, BIRTH, 200.0, &config, Deadline::none()).unwrap();
        assert!(m.error_deg < 1e-6, "error {}", m.error_deg);
        assert!((m.jd_tt - (BIRTH - 88.0 / 0.97)).abs() < 1e-5);
    }

    #[test]
    fn target_outside_window_returns_best_sample() {
        // 0.1 deg/day never reaches 88 deg back within the window
        let eph = linear(0.1, 200.0);
        let m = find_design_instant(&eph, BIRTH, 200.0, &DesignConfig::default(), Deadline::none())
            .unwrap();
        assert_eq!(m.method, DesignMethod::BestSample);
        assert_eq!(m.samples_evaluated, 400);
        assert!((m.jd_tt - (BIRTH - 95.0)).abs() < 1e-9);
        assert!(m.error_deg > 0.05);
    }

    #[test]
    fn wraps_across_zero_aries() {
        let eph = linear(1.0, 30.0);
        let m = find_design_instant(&eph, BIRTH, 30.0, &DesignConfig::default(), Deadline::none())
            .unwrap();
        assert_eq!(m.method, DesignMethod::Converged);
        assert!((m.target_longitude_deg - 302.0).abs() < 1e-12);
        assert!(angular_distance(m.sun_longitude_deg, 302.0) < 0.05);
    }

    #[test]
    fn total_provider_failure_uses_fixed_offset() {
        let eph = Ephemeris::new(Box::new(Offline));
        let m = find_design_instant(&eph, BIRTH, 200.0, &DesignConfig::default(), Deadline::none())
            .unwrap();
        assert_eq!(m.method, DesignMethod::FixedOffset);
        assert_eq!(m.samples_evaluated, 0);
        assert!((m.jd_tt - (BIRTH - 88.5)).abs() < 1e-12);
        assert!((0.0..360.0).contains(&m.sun_longitude_deg));
    }

    #[test]
    fn expired_deadline_fails() {
        let eph = linear(1.0, 200.0);
        let err = find_design_instant(
            &eph,
            BIRTH,
            200.0,
            &DesignConfig::default(),
            Deadline::at(Instant::now()),
        )
        .unwrap_err();
        assert_eq!(err, SearchError::Timeout);
    }

    #[test]
    fn invalid_config_rejected() {
        let eph = linear(1.0, 200.0);
        let config = DesignConfig {
            step_days: -1.0,
            ..DesignConfig::default()
        };
        let err = find_design_instant(&eph, BIRTH, 200.0, &config, Deadline::none()).unwrap_err();
        assert!(matches!(err, SearchError::InvalidConfig(_)));
    }

    #[test]
    fn non_finite_birth_rejected() {
        let eph = linear(1.0, 200.0);
        let err = find_design_instant(
            &eph,
            f64::NAN,
            200.0,
            &DesignConfig::default(),
            Deadline::none(),
        )
        .unwrap_err();
        assert_eq!(err, SearchError::Ephemeris(EphemerisError::InvalidEpoch));
    }
}
