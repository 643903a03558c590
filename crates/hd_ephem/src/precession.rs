//! General precession in ecliptic longitude.
//!
//! Planet positions from the Keplerian elements are referred to the
//! J2000 ecliptic and equinox. Adding the accumulated precession moves
//! them onto the equinox of date, which is the tropical zodiac the gate
//! wheel is laid out on.
//!
//! Polynomial: IAU 2006 p_A (Capitaine, Wallace & Chapront 2003).

/// Precession in longitude since J2000.0, in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn precession_in_longitude_deg(t: f64) -> f64 {
    let arcsec = t * (5028.796195 + t * (1.1054348 + t * (0.00007964 - t * 0.000023857)));
    arcsec / 3600.0
}
