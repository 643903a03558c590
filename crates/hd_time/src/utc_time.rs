//! UTC calendar date/time with sub-second precision.
//!
//! Provides `UtcTime`, the canonical UTC representation used throughout
//! the workspace. Conversion to Julian Dates is in UT; use
//! [`crate::jd_ut_to_tt`] when a dynamical time scale is needed.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::error::TimeError;
use crate::julian::{J2000_JD, calendar_to_jd};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build from a chrono naive date-time that is already in UTC.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1e9,
        }
    }

    /// Convert to a chrono naive date-time, validating every field.
    pub fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        if !self.second.is_finite() || self.second < 0.0 || self.second >= 60.0 {
            return Err(TimeError::OutOfRange("second must be in [0, 60)"));
        }
        let whole = self.second.floor();
        let nanos = (((self.second - whole) * 1e9).round() as u32).min(999_999_999);
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_nano_opt(self.hour, self.minute, whole as u32, nanos))
            .ok_or(TimeError::OutOfRange("invalid calendar date or time of day"))
    }

    /// Julian Date in UT.
    pub fn to_jd_ut(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert a UT Julian Date back to a calendar instant (millisecond rounding).
    pub fn from_jd_ut(jd_ut: f64) -> Result<Self, TimeError> {
        if !jd_ut.is_finite() {
            return Err(TimeError::OutOfRange("Julian Date must be finite"));
        }
        let millis = ((jd_ut - J2000_JD) * MILLIS_PER_DAY).round();
        if millis.abs() > i64::MAX as f64 / 2.0 {
            return Err(TimeError::OutOfRange("Julian Date too far from J2000"));
        }
        let base = NaiveDate::from_ymd_opt(2000, 1, 1)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .ok_or(TimeError::OutOfRange("J2000 epoch"))?;
        let delta = TimeDelta::try_milliseconds(millis as i64)
            .ok_or(TimeError::OutOfRange("Julian Date too far from J2000"))?;
        base.checked_add_signed(delta)
            .map(Self::from_naive)
            .ok_or(TimeError::OutOfRange("Julian Date outside calendar range"))
    }

    /// Shift by a (possibly negative, fractional) number of days.
    pub fn add_days(&self, days: f64) -> Result<Self, TimeError> {
        Self::from_jd_ut(self.to_jd_ut() + days)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

impl FromStr for UtcTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.fff][Z]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('Z');
        let dt = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")?;
        Ok(Self::from_naive(dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_constructor() {
        let t = UtcTime::new(2024, 3, 20, 12, 30, 45.5);
        assert_eq!(t.year, 2024);
        assert_eq!(t.month, 3);
        assert_eq!(t.day, 20);
        assert_eq!(t.hour, 12);
        assert_eq!(t.minute, 30);
        assert!((t.second - 45.5).abs() < 1e-12);
    }

    #[test]
    fn display_whole_seconds() {
        let t = UtcTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
    }

    #[test]
    fn parse_with_and_without_suffix() {
        let a: UtcTime = "1990-05-15T14:30:00Z".parse().unwrap();
        let b: UtcTime = "1990-05-15T14:30:00".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hour, 14);
        assert_eq!(a.minute, 30);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not a date".parse::<UtcTime>().is_err());
    }

    #[test]
    fn jd_roundtrip_millisecond() {
        let t = UtcTime::new(1985, 7, 4, 3, 15, 27.25);
        let back = UtcTime::from_jd_ut(t.to_jd_ut()).unwrap();
        assert_eq!((back.year, back.month, back.day), (1985, 7, 4));
        assert_eq!((back.hour, back.minute), (3, 15));
        assert!((back.second - 27.25).abs() < 2e-3);
    }

    #[test]
    fn add_days_crosses_year_boundary() {
        let t = UtcTime::new(2024, 1, 10, 0, 0, 0.0);
        let earlier = t.add_days(-88.5).unwrap();
        assert_eq!((earlier.year, earlier.month, earlier.day), (2023, 10, 13));
        assert_eq!(earlier.hour, 12);
    }

    #[test]
    fn invalid_date_rejected() {
        let t = UtcTime::new(2023, 2, 30, 0, 0, 0.0);
        assert!(t.to_naive().is_err());
    }

    #[test]
    fn non_finite_jd_rejected() {
        assert!(UtcTime::from_jd_ut(f64::NAN).is_err());
    }
}
