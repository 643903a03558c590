//! Self-contained analytic backend.

use hd_time::julian_centuries;

use crate::body::{Body, NodeMode};
use crate::error::EphemerisError;
use crate::kepler::{Planet, heliocentric_position_au};
use crate::lunar::moon_longitude_deg;
use crate::nodes::node_longitude_deg;
use crate::normalize_360;
use crate::precession::precession_in_longitude_deg;
use crate::solar::sun_apparent_longitude_deg;
use crate::source::LongitudeSource;

/// Low-precision analytic ephemeris (Meeus Sun and Moon, JPL Keplerian planets).
///
/// Planets are only available inside the 1800–2050 element window; outside
/// it this source reports [`EphemerisError::EpochOutOfRange`]. Earth and the
/// South Node are refused because the engine derives them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticEphemeris {
    pub node_mode: NodeMode,
}

impl AnalyticEphemeris {
    pub fn new(node_mode: NodeMode) -> Self {
        Self { node_mode }
    }
}

fn planet_for(body: Body) -> Option<Planet> {
    match body {
        Body::Mercury => Some(Planet::Mercury),
        Body::Venus => Some(Planet::Venus),
        Body::Mars => Some(Planet::Mars),
        Body::Jupiter => Some(Planet::Jupiter),
        Body::Saturn => Some(Planet::Saturn),
        Body::Uranus => Some(Planet::Uranus),
        Body::Neptune => Some(Planet::Neptune),
        Body::Pluto => Some(Planet::Pluto),
        _ => None,
    }
}

/// Geocentric longitude of a planet, equinox of date.
fn geocentric_planet_deg(planet: Planet, t: f64) -> Option<f64> {
    let earth = heliocentric_position_au(Planet::EarthMoonBarycenter, t)?;
    let p = heliocentric_position_au(planet, t)?;
    let x = p[0] - earth[0];
    let y = p[1] - earth[1];
    Some(normalize_360(
        y.atan2(x).to_degrees() + precession_in_longitude_deg(t),
    ))
}

impl LongitudeSource for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn try_longitude(&self, body: Body, jd_tt: f64) -> Result<f64, EphemerisError> {
        if !jd_tt.is_finite() {
            return Err(EphemerisError::InvalidEpoch);
        }
        let t = julian_centuries(jd_tt);
        match body {
            Body::Sun => Ok(sun_apparent_longitude_deg(t)),
            Body::Moon => Ok(moon_longitude_deg(t)),
            Body::NorthNode => Ok(node_longitude_deg(self.node_mode, t)),
            Body::Earth | Body::SouthNode => {
                Err(EphemerisError::UnsupportedBody(body.name()))
            }
            _ => {
                let planet = planet_for(body).ok_or(EphemerisError::UnsupportedBody(body.name()))?;
                geocentric_planet_deg(planet, t).ok_or(EphemerisError::EpochOutOfRange { jd_tt })
            }
        }
    }
}
