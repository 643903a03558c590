//! Geocentric longitude of the Moon.
//!
//! Principal periodic terms of the ELP-2000/82 series as tabulated in
//! Meeus, *Astronomical Algorithms* (2nd ed.), chapter 47 (Table 47.A),
//! truncated to the terms above 0.002 deg. Residual error is a few
//! hundredths of a degree.

use crate::normalize_360;

/// Delaunay-style lunar arguments in degrees (normalized), plus the
/// eccentricity factor `e` for terms involving the solar anomaly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Mean longitude of the Moon (L').
    pub mean_longitude: f64,
    /// Mean elongation of the Moon from the Sun (D).
    pub elongation: f64,
    /// Mean anomaly of the Sun (M).
    pub sun_anomaly: f64,
    /// Mean anomaly of the Moon (M').
    pub moon_anomaly: f64,
    /// Argument of latitude of the Moon (F).
    pub latitude_argument: f64,
    /// Earth orbit eccentricity factor (E).
    pub e: f64,
}

/// Lunar arguments at `t` Julian centuries of TT since J2000.0.
pub fn lunar_arguments(t: f64) -> LunarArguments {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    LunarArguments {
        mean_longitude: normalize_360(
            218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
                - t4 / 65_194_000.0,
        ),
        elongation: normalize_360(
            297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
                - t4 / 113_065_000.0,
        ),
        sun_anomaly: normalize_360(
            357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
        ),
        moon_anomaly: normalize_360(
            134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
                - t4 / 14_712_000.0,
        ),
        latitude_argument: normalize_360(
            93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        ),
        e: 1.0 - 0.002516 * t - 0.0000074 * t2,
    }
}

// [D, M, M', F, coefficient in 1e-6 deg]
#[rustfmt::skip]
static LONGITUDE_TERMS: [[i32; 5]; 32] = [
    [0,  0,  1,  0, 6_288_774],
    [2,  0, -1,  0, 1_274_027],
    [2,  0,  0,  0,   658_314],
    [0,  0,  2,  0,   213_618],
    [0,  1,  0,  0,  -185_116],
    [0,  0,  0,  2,  -114_332],
    [2,  0, -2,  0,    58_793],
    [2, -1, -1,  0,    57_066],
    [2,  0,  1,  0,    53_322],
    [2, -1,  0,  0,    45_758],
    [0,  1, -1,  0,   -40_923],
    [1,  0,  0,  0,   -34_720],
    [0,  1,  1,  0,   -30_383],
    [2,  0,  0, -2,    15_327],
    [0,  0,  1,  2,   -12_528],
    [0,  0,  1, -2,    10_980],
    [4,  0, -1,  0,    10_675],
    [0,  0,  3,  0,    10_034],
    [4,  0, -2,  0,     8_548],
    [2,  1, -1,  0,    -7_888],
    [2,  1,  0,  0,    -6_766],
    [1,  0, -1,  0,    -5_163],
    [1,  1,  0,  0,     4_987],
    [2, -1,  1,  0,     4_036],
    [2,  0,  2,  0,     3_994],
    [4,  0,  0,  0,     3_861],
    [2,  0, -3,  0,     3_665],
    [0,  1, -2,  0,    -2_689],
    [2,  0, -1,  2,    -2_602],
    [2, -1, -2,  0,     2_390],
    [1,  0,  1,  0,    -2_348],
    [2, -2,  0,  0,     2_236],
];

/// Geocentric ecliptic longitude of the Moon (equinox of date), degrees [0, 360).
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = lunar_arguments(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    let mut sum = 0.0_f64;
    for term in &LONGITUDE_TERMS {
        let angle = term[0] as f64 * d + term[1] as f64 * m + term[2] as f64 * mp
            + term[3] as f64 * f;
        let scale = match term[1].abs() {
            1 => args.e,
            2 => args.e * args.e,
            _ => 1.0,
        };
        sum += term[4] as f64 * scale * angle.sin();
    }

    // Venus, Jupiter and flattening perturbations.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let lp = args.mean_longitude.to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();

    normalize_360(args.mean_longitude + sum / 1_000_000.0)
}
