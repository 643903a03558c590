//! Time handling for chart computation.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - `UtcTime`, the canonical UTC instant used throughout the workspace
//! - `CivilTime`, a local birth time with its UTC offset already resolved
//! - Delta-T (TT − UT) so analytic ephemerides can be evaluated in TT
//!
//! Time-zone *names* are resolved by callers; the core only ever sees a
//! civil time together with the fixed offset that applied at that moment.

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use civil::{CivilTime, parse_offset};
pub use delta_t::{decimal_year, delta_t_seconds, jd_tt_to_ut, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, jd_to_calendar, julian_centuries,
};
pub use utc_time::UtcTime;
