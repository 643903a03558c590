//! Ecliptic longitude provider for chart computation.
//!
//! This crate provides:
//! - The [`Body`] catalog tracked by a chart (13 bodies)
//! - A [`LongitudeSource`] seam for pluggable backends
//! - [`AnalyticEphemeris`], a self-contained low-precision backend
//!   (Meeus solar and lunar series, JPL Keplerian planet elements)
//! - [`MeanMotionFallback`], a deterministic period-based approximation
//! - [`Ephemeris`], the engine that derives Earth and the South Node and
//!   degrades to the fallback whenever the primary source cannot answer
//!
//! All longitudes are tropical, ecliptic of date, in degrees [0, 360).
//! Epochs are Julian Dates in TT.

pub mod analytic;
pub mod body;
pub mod engine;
pub mod error;
pub mod fallback;
pub mod kepler;
pub mod lunar;
pub mod nodes;
pub mod precession;
pub mod solar;
pub mod source;

pub use analytic::AnalyticEphemeris;
pub use body::{ALL_BODIES, Body, NodeMode};
pub use engine::{BodyLongitudes, Ephemeris};
pub use error::EphemerisError;
pub use fallback::MeanMotionFallback;
pub use kepler::{Planet, heliocentric_position_au};
pub use lunar::{LunarArguments, lunar_arguments, moon_longitude_deg};
pub use nodes::{mean_node_deg, node_longitude_deg, true_node_deg};
pub use precession::precession_in_longitude_deg;
pub use solar::sun_apparent_longitude_deg;
pub use source::LongitudeSource;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
