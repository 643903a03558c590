//! Longitude of the Moon's ascending node (North Node).
//!
//! Mean node: polynomial from Meeus chapter 47. True node: mean node plus
//! the five largest periodic terms (Meeus, p. 344). The South Node is the
//! opposite point and is derived by the engine, not here.

use crate::body::NodeMode;
use crate::lunar::lunar_arguments;
use crate::normalize_360;

/// Mean ascending node longitude, degrees [0, 360).
pub fn mean_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    normalize_360(
        125.0445479 - 1934.1362891 * t + 0.0020754 * t2 + t2 * t / 467_441.0
            - t2 * t2 / 60_616_000.0,
    )
}

/// True ascending node longitude, degrees [0, 360).
pub fn true_node_deg(t: f64) -> f64 {
    let args = lunar_arguments(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();
    let correction = -1.4979 * (2.0 * (d - f)).sin() - 0.1500 * m.sin()
        - 0.1226 * (2.0 * d).sin()
        + 0.1176 * (2.0 * f).sin()
        - 0.0801 * (2.0 * (mp - f)).sin();
    normalize_360(mean_node_deg(t) + correction)
}

/// North Node longitude for the requested model.
pub fn node_longitude_deg(mode: NodeMode, t: f64) -> f64 {
    match mode {
        NodeMode::Mean => mean_node_deg(t),
        NodeMode::True => true_node_deg(t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_node_at_j2000() {
        assert!((mean_node_deg(0.0) - 125.0445).abs() < 1e-4);
    }

    #[test]
    fn regresses_about_19_34_per_year() {
        let r0 = mean_node_deg(0.0);
        let r1 = mean_node_deg(0.01);
        let mut diff = r1 - r0;
        if diff > 180.0 {
            diff -= 360.0;
        }
        assert!((diff + 19.34).abs() < 0.05, "got {diff}");
    }

    #[test]
    fn true_node_within_two_degrees_of_mean() {
        for i in 0..200 {
            let t = -1.0 + i as f64 * 0.01;
            let mut diff = true_node_deg(t) - mean_node_deg(t);
            if diff > 180.0 {
                diff -= 360.0;
            } else if diff < -180.0 {
                diff += 360.0;
            }
            assert!(diff.abs() < 2.0, "t={t}: {diff}");
        }
    }

    #[test]
    fn mode_dispatch() {
        assert_eq!(node_longitude_deg(NodeMode::Mean, 0.1), mean_node_deg(0.1));
        assert_eq!(node_longitude_deg(NodeMode::True, 0.1), true_node_deg(0.1));
    }
}
