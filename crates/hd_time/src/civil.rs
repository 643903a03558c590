//! Civil (local wall-clock) birth instants with a resolved UTC offset.

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};

use crate::error::TimeError;
use crate::utc_time::UtcTime;

/// Largest offset accepted, in seconds (UTC±18:00, the chrono bound).
const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// A local date-time together with the UTC offset in force at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTime {
    pub local: NaiveDateTime,
    pub offset: FixedOffset,
}

impl CivilTime {
    pub fn new(local: NaiveDateTime, offset: FixedOffset) -> Self {
        Self { local, offset }
    }

    /// Parse an RFC 3339 timestamp such as `1990-05-15T14:30:00+02:00`.
    pub fn parse_rfc3339(s: &str) -> Result<Self, TimeError> {
        let dt = DateTime::parse_from_rfc3339(s.trim())?;
        Ok(Self {
            local: dt.naive_local(),
            offset: *dt.offset(),
        })
    }

    /// Parse a naive local time (`YYYY-MM-DDThh:mm[:ss]`) plus a separate offset.
    pub fn from_parts(local: &str, offset: &str) -> Result<Self, TimeError> {
        let local = parse_naive(local)?;
        Ok(Self {
            local,
            offset: parse_offset(offset)?,
        })
    }

    /// Offset from UTC in minutes (east positive).
    pub fn offset_minutes(&self) -> i32 {
        self.offset.local_minus_utc() / 60
    }

    /// Remove the offset, yielding the UTC instant.
    pub fn to_utc(&self) -> Result<UtcTime, TimeError> {
        let shift = TimeDelta::try_seconds(self.offset.local_minus_utc() as i64)
            .ok_or(TimeError::InvalidOffset("offset overflow".into()))?;
        self.local
            .checked_sub_signed(shift)
            .map(UtcTime::from_naive)
            .ok_or(TimeError::OutOfRange("local time outside calendar range"))
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// RFC 3339 first; a bare local time is read as UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::parse_rfc3339(s) {
            Ok(civil) => Ok(civil),
            Err(_) => Self::from_parts(s.trim_end_matches('Z'), "+00:00"),
        }
    }
}

fn parse_naive(s: &str) -> Result<NaiveDateTime, TimeError> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .map_err(TimeError::from)
}

/// Parse a UTC offset: `Z`, `+05:30`, `-0800`, `+9`, or `UTC+2`.
pub fn parse_offset(s: &str) -> Result<FixedOffset, TimeError> {
    let raw = s.trim();
    let body = raw
        .strip_prefix("UTC")
        .or_else(|| raw.strip_prefix("GMT"))
        .unwrap_or(raw);
    if body.is_empty() || body == "Z" || body == "z" {
        return FixedOffset::east_opt(0).ok_or(TimeError::InvalidOffset(raw.into()));
    }

    let (sign, digits) = match body.as_bytes()[0] {
        b'+' => (1, &body[1..]),
        b'-' => (-1, &body[1..]),
        _ => return Err(TimeError::InvalidOffset(raw.into())),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return Err(TimeError::InvalidOffset(raw.into()));
    }
    // digits is ASCII from here on, so byte splits are char boundaries
    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None if digits.len() == 4 => digits.split_at(2),
        None => (digits, "0"),
    };
    let hours: i32 = hours
        .parse()
        .map_err(|_| TimeError::InvalidOffset(raw.into()))?;
    let minutes: i32 = minutes
        .parse()
        .map_err(|_| TimeError::InvalidOffset(raw.into()))?;
    if hours > MAX_OFFSET_SECONDS / 3600 || !(0..60).contains(&minutes) {
        return Err(TimeError::InvalidOffset(raw.into()));
    }
    let seconds = sign * (hours * 3600 + minutes * 60);
    if seconds.abs() > MAX_OFFSET_SECONDS {
        return Err(TimeError::InvalidOffset(raw.into()));
    }
    FixedOffset::east_opt(seconds).ok_or(TimeError::InvalidOffset(raw.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_positive_offset() {
        let c = CivilTime::parse_rfc3339("1990-05-15T14:30:00+02:00").unwrap();
        assert_eq!(c.offset_minutes(), 120);
        let utc = c.to_utc().unwrap();
        assert_eq!((utc.year, utc.month, utc.day), (1990, 5, 15));
        assert_eq!((utc.hour, utc.minute), (12, 30));
    }

    #[test]
    fn negative_offset_rolls_into_next_day() {
        let c = CivilTime::from_parts("1999-12-31T20:00:00", "-05:00").unwrap();
        let utc = c.to_utc().unwrap();
        assert_eq!((utc.year, utc.month, utc.day, utc.hour), (2000, 1, 1, 1));
    }

    #[test]
    fn half_hour_offset() {
        let c = CivilTime::from_parts("2001-03-01T00:15", "+05:30").unwrap();
        let utc = c.to_utc().unwrap();
        assert_eq!((utc.year, utc.month, utc.day), (2001, 2, 28));
        assert_eq!((utc.hour, utc.minute), (18, 45));
    }

    #[test]
    fn offset_formats() {
        assert_eq!(parse_offset("Z").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("+0930").unwrap().local_minus_utc(), 34_200);
        assert_eq!(parse_offset("-8").unwrap().local_minus_utc(), -28_800);
        assert_eq!(parse_offset("UTC+2").unwrap().local_minus_utc(), 7_200);
    }

    #[test]
    fn offset_out_of_range() {
        assert!(parse_offset("+19:00").is_err());
        assert!(parse_offset("+05:75").is_err());
        assert!(parse_offset("0500").is_err());
        assert!(parse_offset("+999999:00").is_err());
        assert!(parse_offset("-2147483647").is_err());
    }

    #[test]
    fn offset_non_ascii_rejected() {
        assert!(parse_offset("+1\u{e9}1").is_err());
        assert!(parse_offset("+\u{661}\u{662}").is_err());
        assert!(parse_offset("+").is_err());
        assert!(parse_offset("+05:3x").is_err());
    }

    #[test]
    fn bad_offset_through_from_parts() {
        let err = CivilTime::from_parts("1990-05-15T14:30:00", "+999999:00").unwrap_err();
        assert!(matches!(err, TimeError::InvalidOffset(_)));
    }

    #[test]
    fn bare_local_time_is_utc() {
        let c: CivilTime = "2010-06-01T08:00:00".parse().unwrap();
        assert_eq!(c.offset_minutes(), 0);
    }
}
