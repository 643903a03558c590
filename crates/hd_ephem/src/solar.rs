//! Apparent geocentric longitude of the Sun.
//!
//! Low-accuracy solar coordinates from Meeus, *Astronomical Algorithms*
//! (2nd ed.), chapter 25: geometric mean longitude plus the equation of
//! center, corrected for nutation and aberration. Accuracy is about
//! 0.01 deg, well inside one gate color (0.026 deg).

use crate::normalize_360;

/// Apparent ecliptic longitude of the Sun (equinox of date), degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_apparent_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + t * (36000.76983 + t * 0.0003032);
    let m = (357.52911 + t * (35999.05029 - t * 0.0001537)).to_radians();
    let c = (1.914602 - t * (0.004817 + t * 0.000014)) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let true_lon = l0 + c;
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(true_lon - 0.00569 - 0.00478 * omega.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD: apparent longitude 199.90895 deg
        let t = -0.072_183_436;
        let lon = sun_apparent_longitude_deg(t);
        assert!((lon - 199.909).abs() < 0.01, "got {lon}");
    }

    #[test]
    fn near_zero_at_march_equinox_2000() {
        // 2000-03-20 07:35 UT equinox
        let jd = 2_451_623.816;
        let t = (jd - 2_451_545.0) / 36_525.0;
        let lon = sun_apparent_longitude_deg(t);
        let d = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(d.abs() < 0.02, "got {lon}");
    }

    #[test]
    fn advances_about_one_degree_per_day() {
        let day = 1.0 / 36_525.0;
        let a = sun_apparent_longitude_deg(0.1);
        let b = sun_apparent_longitude_deg(0.1 + day);
        let step = normalize_360(b - a);
        assert!(step > 0.95 && step < 1.03, "got {step}");
    }
}
