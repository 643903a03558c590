//! Angle helpers shared by the encoder and the design search.

use hd_ephem::normalize_360;

/// Circular distance between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    d.min(360.0 - d)
}

/// `a − b` wrapped to (−180, 180].
pub fn signed_difference(a: f64, b: f64) -> f64 {
    let d = normalize_360(a - b);
    if d > 180.0 { d - 360.0 } else { d }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_wraps() {
        assert!((angular_distance(359.0, 1.0) - 2.0).abs() < 1e-12);
        assert!((angular_distance(1.0, 359.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn distance_max_is_180() {
        assert!((angular_distance(0.0, 180.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn signed_difference_sign() {
        assert!((signed_difference(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((signed_difference(350.0, 10.0) + 20.0).abs() < 1e-12);
    }
}
