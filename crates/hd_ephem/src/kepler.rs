//! Heliocentric planet positions from mean Keplerian elements.
//!
//! Elements and their secular rates are from E. M. Standish, "Keplerian
//! Elements for Approximate Positions of the Major Planets" (JPL Solar
//! System Dynamics), Table 1, valid 1800 AD – 2050 AD. Positions are
//! heliocentric, J2000 ecliptic and equinox, in AU. Error is at the
//! arcminute level for the inner planets and a few arcminutes for the
//! outer ones.

use std::f64::consts::TAU;

/// Planets (plus the Earth–Moon barycenter) covered by the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    EarthMoonBarycenter,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// Lower bound of the element table's validity, centuries from J2000 (1800 AD).
pub const VALID_FROM_CENTURIES: f64 = -2.0;
/// Upper bound of the element table's validity, centuries from J2000 (2050 AD).
pub const VALID_TO_CENTURIES: f64 = 0.5;

/// `[a, e, I, L, long.peri, long.node]` and their rates per century.
struct Elements {
    base: [f64; 6],
    rate: [f64; 6],
}

#[rustfmt::skip]
static ELEMENTS: [Elements; 9] = [
    // Mercury
    Elements {
        base: [0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593],
        rate: [0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081],
    },
    // Venus
    Elements {
        base: [0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255],
        rate: [0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418],
    },
    // Earth-Moon barycenter
    Elements {
        base: [1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0],
        rate: [0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0],
    },
    // Mars
    Elements {
        base: [1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891],
        rate: [0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343],
    },
    // Jupiter
    Elements {
        base: [5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909],
        rate: [-0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106],
    },
    // Saturn
    Elements {
        base: [9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448],
        rate: [-0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794],
    },
    // Uranus
    Elements {
        base: [19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503],
        rate: [-0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589],
    },
    // Neptune
    Elements {
        base: [30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574],
        rate: [0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664],
    },
    // Pluto
    Elements {
        base: [39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684],
        rate: [-0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482],
    },
];

impl Planet {
    const fn table_index(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::EarthMoonBarycenter => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
            Self::Uranus => 6,
            Self::Neptune => 7,
            Self::Pluto => 8,
        }
    }
}

/// Solve Kepler's equation `M = E − e sin E` for `E` (radians).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric ecliptic J2000 position in AU, or `None` outside the
/// 1800–2050 validity window.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn heliocentric_position_au(planet: Planet, t: f64) -> Option<[f64; 3]> {
    if !(VALID_FROM_CENTURIES..=VALID_TO_CENTURIES).contains(&t) {
        return None;
    }
    let el = &ELEMENTS[planet.table_index()];
    let at = |i: usize| el.base[i] + el.rate[i] * t;

    let a = at(0);
    let e = at(1);
    let incl = at(2).to_radians();
    let mean_lon = at(3);
    let peri = at(4);
    let node = at(5);

    let arg_peri = (peri - node).to_radians();
    let node = node.to_radians();
    let mean_anomaly = (mean_lon - peri).to_radians().rem_euclid(TAU);
    let ecc_anomaly = solve_kepler(mean_anomaly, e);

    // Position in the orbital plane, x toward perihelion.
    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    Some([
        (cw * cn - sw * sn * ci) * xp + (-sw * cn - cw * sn * ci) * yp,
        (cw * sn + sw * cn * ci) * xp + (-sw * sn + cw * cn * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(v: &[f64; 3]) -> f64 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn kepler_circular_orbit_is_identity() {
        assert!((solve_kepler(1.234, 0.0) - 1.234).abs() < 1e-15);
    }

    #[test]
    fn kepler_satisfies_equation() {
        let m = 0.8;
        let e = 0.25;
        let ea = solve_kepler(m, e);
        assert!((ea - e * ea.sin() - m).abs() < 1e-12);
    }

    #[test]
    fn earth_distance_about_one_au() {
        let r = norm(&heliocentric_position_au(Planet::EarthMoonBarycenter, 0.1).unwrap());
        assert!((r - 1.0).abs() < 0.02, "got {r}");
    }

    #[test]
    fn jupiter_distance_in_range() {
        let r = norm(&heliocentric_position_au(Planet::Jupiter, -0.3).unwrap());
        assert!(r > 4.9 && r < 5.5, "got {r}");
    }

    #[test]
    fn outside_validity_is_none() {
        assert!(heliocentric_position_au(Planet::Mars, -2.5).is_none());
        assert!(heliocentric_position_au(Planet::Mars, 0.75).is_none());
    }
}
