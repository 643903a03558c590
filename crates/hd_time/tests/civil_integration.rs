//! Civil birth instants through UTC, Julian Date and TT.

use hd_time::{CivilTime, J2000_JD, UtcTime, jd_tt_to_ut, jd_ut_to_tt};

fn jd_of(s: &str) -> f64 {
    CivilTime::parse_rfc3339(s).unwrap().to_utc().unwrap().to_jd_ut()
}

#[test]
fn reference_julian_dates() {
    assert!((jd_of("2000-01-01T12:00:00Z") - J2000_JD).abs() < 1e-9);
    assert!((jd_of("1858-11-17T00:00:00Z") - 2_400_000.5).abs() < 1e-9);
    assert!((jd_of("1990-05-15T12:30:00Z") - 2_448_027.020_833_3).abs() < 1e-6);
    assert!((jd_of("1969-07-20T20:17:40Z") - 2_440_423.345_601_9).abs() < 1e-6);
}

#[test]
fn same_instant_in_any_zone() {
    let utc = jd_of("1990-05-15T12:30:00Z");
    for local in [
        "1990-05-15T14:30:00+02:00",
        "1990-05-15T18:00:00+05:30",
        "1990-05-15T02:30:00-10:00",
        "1990-05-16T00:30:00+12:00",
    ] {
        assert!((jd_of(local) - utc).abs() < 1e-9, "{local}");
    }
}

#[test]
fn naive_parts_match_rfc3339() {
    let a = CivilTime::from_parts("1985-03-21T06:15:00", "-05:00").unwrap();
    let b = CivilTime::parse_rfc3339("1985-03-21T06:15:00-05:00").unwrap();
    assert_eq!(a, b);
}

#[test]
fn display_then_parse_is_stable() {
    let utc = CivilTime::parse_rfc3339("1972-11-02T03:04:05+01:00")
        .unwrap()
        .to_utc()
        .unwrap();
    assert_eq!(utc.to_string(), "1972-11-02T02:04:05Z");
    let back: UtcTime = utc.to_string().parse().unwrap();
    assert_eq!(back, utc);
}

#[test]
fn tt_round_trip_over_a_century() {
    for year in (1900..=2050).step_by(10) {
        let jd = jd_of(&format!("{year}-06-01T00:00:00Z"));
        let tt = jd_ut_to_tt(jd);
        assert!(tt > jd, "{year}");
        assert!((jd_tt_to_ut(tt) - jd).abs() * 86_400.0 < 0.01, "{year}");
    }
}

#[test]
fn jd_back_to_calendar() {
    let jd = jd_of("2024-02-29T23:59:59Z");
    let utc = UtcTime::from_jd_ut(jd).unwrap();
    assert_eq!((utc.year, utc.month, utc.day), (2024, 2, 29));
    assert_eq!((utc.hour, utc.minute), (23, 59));
    assert!((utc.second - 59.0).abs() < 1e-3);
}
