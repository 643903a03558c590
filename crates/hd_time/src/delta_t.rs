//! Delta-T (TT − UT) from the Espenak–Meeus polynomial fits.
//!
//! Source: NASA Five Millennium Canon of Solar Eclipses (Espenak & Meeus
//! 2006), section "Polynomial Expressions for Delta T". Accuracy is a few
//! seconds over the historical record, which is far below what a chart
//! line boundary can resolve.

use crate::julian::jd_to_calendar;

/// Decimal year used as the Delta-T argument: `year + (month − 0.5) / 12`.
pub fn decimal_year(jd: f64) -> f64 {
    let (year, month, _) = jd_to_calendar(jd);
    year as f64 + (month as f64 - 0.5) / 12.0
}

fn long_term(y: f64) -> f64 {
    let u = (y - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Delta-T in seconds for a decimal year.
pub fn delta_t_seconds(y: f64) -> f64 {
    if y < -500.0 {
        long_term(y)
    } else if y < 500.0 {
        let u = y / 100.0;
        10583.6 - 1014.41 * u + 33.78311 * u.powi(2) - 5.952053 * u.powi(3)
            - 0.1798452 * u.powi(4)
            + 0.022174192 * u.powi(5)
            + 0.0090316521 * u.powi(6)
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        1574.2 - 556.01 * u + 71.23472 * u.powi(2) + 0.319781 * u.powi(3)
            - 0.8503463 * u.powi(4)
            - 0.005050998 * u.powi(5)
            + 0.0083572073 * u.powi(6)
    } else if y < 1700.0 {
        let t = y - 1600.0;
        120.0 - 0.9808 * t - 0.01532 * t.powi(2) + t.powi(3) / 7129.0
    } else if y < 1800.0 {
        let t = y - 1700.0;
        8.83 + 0.1603 * t - 0.0059285 * t.powi(2) + 0.00013336 * t.powi(3)
            - t.powi(4) / 1_174_000.0
    } else if y < 1860.0 {
        let t = y - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

/// Convert a UT Julian Date to TT.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / 86_400.0
}

/// Convert a TT Julian Date to UT.
///
/// Delta-T is evaluated at the TT epoch; the error from not iterating is
/// far below a millisecond.
pub fn jd_tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_seconds(decimal_year(jd_tt)) / 86_400.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn year_2000_about_64s() {
        let dt = delta_t_seconds(2000.0);
        assert!((dt - 63.86).abs() < 0.01, "got {dt}");
    }

    #[test]
    fn year_1950_about_29s() {
        let dt = delta_t_seconds(1950.0);
        assert!((dt - 29.07).abs() < 0.01, "got {dt}");
    }

    #[test]
    fn continuous_at_2050() {
        let before = delta_t_seconds(2049.999);
        let after = delta_t_seconds(2050.0);
        assert!((before - after).abs() < 1.0, "{before} vs {after}");
    }

    #[test]
    fn tt_ut_inverse() {
        let jd = calendar_to_jd(1987, 4, 10.3);
        let back = jd_tt_to_ut(jd_ut_to_tt(jd));
        assert!((back - jd).abs() * 86_400.0 < 1e-3);
    }

    #[test]
    fn decimal_year_mid_month() {
        let jd = calendar_to_jd(1990, 7, 15.0);
        assert!((decimal_year(jd) - (1990.0 + 6.5 / 12.0)).abs() < 1e-12);
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let jd = calendar_to_jd(2020, 1, 1.0);
        let tt = jd_ut_to_tt(jd);
        let secs = (tt - jd) * 86_400.0;
        assert!(secs > 60.0 && secs < 80.0, "got {secs}");
    }
}
