//! Chart engine: birth data to chart, and two charts to a composite.

use std::any::Any;
use std::fmt::Display;
use std::time::Duration;

use hd_chart::{Chart, ChartTables, CompositeChart, DEFAULT_DISPLAY_CAP, DefinitionMode, merge};
use hd_ephem::Ephemeris;
use hd_time::{UtcTime, jd_tt_to_ut};
use serde::{Serialize, Serializer};
use tracing::{debug, debug_span};

use crate::birth::BirthData;
use crate::design::find_design_instant;
use crate::design_types::{Deadline, DesignConfig, DesignMoment};
use crate::error::SearchError;
use crate::extract::extract_activations;

/// A chart together with the instants it was computed for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartReport {
    #[serde(serialize_with = "as_display")]
    pub birth_utc: UtcTime,
    pub birth_jd_tt: f64,
    #[serde(serialize_with = "as_display")]
    pub design_utc: UtcTime,
    pub design: DesignMoment,
    pub chart: Chart,
}

fn as_display<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Two individual charts and their composite.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeReport {
    pub first: ChartReport,
    pub second: ChartReport,
    pub composite: CompositeChart,
}

/// Stateless chart computation engine.
///
/// Holds the ephemeris, the validated tables and configuration. Nothing is
/// mutated after construction; every computation is independent.
#[derive(Debug)]
pub struct ChartEngine {
    ephemeris: Ephemeris,
    tables: ChartTables,
    design: DesignConfig,
    definition_mode: DefinitionMode,
    display_cap: usize,
    timeout: Option<Duration>,
}

impl ChartEngine {
    /// Engine over `ephemeris` with the standard tables and default settings.
    pub fn new(ephemeris: Ephemeris) -> Result<Self, SearchError> {
        Ok(Self {
            ephemeris,
            tables: ChartTables::standard()?,
            design: DesignConfig::default(),
            definition_mode: DefinitionMode::default(),
            display_cap: DEFAULT_DISPLAY_CAP,
            timeout: None,
        })
    }

    pub fn with_design_config(mut self, design: DesignConfig) -> Self {
        self.design = design;
        self
    }

    pub fn with_definition_mode(mut self, mode: DefinitionMode) -> Self {
        self.definition_mode = mode;
        self
    }

    pub fn with_display_cap(mut self, cap: usize) -> Self {
        self.display_cap = cap;
        self
    }

    /// Wall-clock bound applied to each top-level call.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn ephemeris(&self) -> &Ephemeris {
        &self.ephemeris
    }

    pub fn tables(&self) -> &ChartTables {
        &self.tables
    }

    pub fn design_config(&self) -> &DesignConfig {
        &self.design
    }

    pub fn compute_chart(&self, birth: &BirthData) -> Result<Chart, SearchError> {
        self.compute_report(birth).map(|r| r.chart)
    }

    /// Chart plus birth and Design instants.
    pub fn compute_report(&self, birth: &BirthData) -> Result<ChartReport, SearchError> {
        self.report_until(birth, Deadline::after(self.timeout))
    }

    fn report_until(
        &self,
        birth: &BirthData,
        deadline: Deadline,
    ) -> Result<ChartReport, SearchError> {
        birth.validate()?;
        let birth_utc = birth.utc()?;
        let birth_jd_tt = birth.jd_tt()?;
        let _span = debug_span!("compute_chart", birth = %birth_utc).entered();

        deadline.check()?;
        let personality =
            extract_activations(&self.ephemeris, birth_jd_tt, self.tables.gate_order)?;
        let birth_sun = personality.sun().coordinate.longitude;

        let design = find_design_instant(
            &self.ephemeris,
            birth_jd_tt,
            birth_sun,
            &self.design,
            deadline,
        )?;
        debug!(
            jd_tt = design.jd_tt,
            error_deg = design.error_deg,
            method = ?design.method,
            "design instant found"
        );

        deadline.check()?;
        let design_set =
            extract_activations(&self.ephemeris, design.jd_tt, self.tables.gate_order)?;
        let design_utc = UtcTime::from_jd_ut(jd_tt_to_ut(design.jd_tt))?;
        let chart = Chart::assemble(personality, design_set, &self.tables, self.definition_mode);
        debug!(
            chart_type = chart.chart_type.name(),
            profile = %chart.profile,
            channels = chart.channels.len(),
            "chart assembled"
        );

        Ok(ChartReport {
            birth_utc,
            birth_jd_tt,
            design_utc,
            design,
            chart,
        })
    }

    /// Merge two already computed charts.
    pub fn compute_composite(&self, a: &Chart, b: &Chart) -> CompositeChart {
        merge(a, b, self.display_cap)
    }

    /// Compute both charts concurrently, then merge them.
    ///
    /// Both sides share one deadline. If either side fails the whole call
    /// fails; no partial result is returned.
    pub fn compute_composite_for(
        &self,
        a: &BirthData,
        b: &BirthData,
    ) -> Result<CompositeReport, SearchError> {
        let deadline = Deadline::after(self.timeout);
        let (first, second) = std::thread::scope(|s| {
            let handle = s.spawn(|| self.report_until(a, deadline));
            let second = self.report_until(b, deadline);
            (handle.join(), second)
        });
        let first = first.map_err(|payload| SearchError::Worker(panic_message(&*payload)))??;
        let second = second?;

        let composite = self.compute_composite(&first.chart, &second.chart);
        Ok(CompositeReport {
            first,
            second,
            composite,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "chart computation panicked".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_types::DesignMethod;
    use hd_chart::Type;
    use hd_ephem::{Body, EphemerisError, LongitudeSource};
    use hd_time::CivilTime;

    fn birth(s: &str) -> BirthData {
        BirthData::new(CivilTime::parse_rfc3339(s).unwrap())
    }

    struct Offline;

    impl LongitudeSource for Offline {
        fn name(&self) -> &'static str {
            "offline"
        }
        fn try_longitude(&self, _body: Body, _jd_tt: f64) -> Result<f64, EphemerisError> {
            Err(EphemerisError::Backend("down".into()))
        }
    }

    #[test]
    fn chart_is_deterministic() {
        let engine = ChartEngine::new(Ephemeris::default()).unwrap();
        let b = birth("1985-03-21T06:15:00-05:00");
        let first = engine.compute_report(&b).unwrap();
        let second = engine.compute_report(&b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn design_precedes_birth_by_about_88_days() {
        let engine = ChartEngine::new(Ephemeris::default()).unwrap();
        let r = engine.compute_report(&birth("1990-05-15T14:30:00+02:00")).unwrap();
        let lead = r.birth_jd_tt - r.design.jd_tt;
        assert!((85.0..93.0).contains(&lead), "lead {lead}");
        assert_eq!(r.design.method, DesignMethod::Converged);
        assert!(r.design.error_deg < 0.05);
    }

    #[test]
    fn reflector_iff_nothing_defined() {
        let engine = ChartEngine::new(Ephemeris::default()).unwrap();
        let c = engine.compute_chart(&birth("1972-11-02T03:00:00Z")).unwrap();
        assert_eq!(c.chart_type == Type::Reflector, c.defined_centers.is_empty());
    }

    #[test]
    fn offline_provider_still_yields_chart() {
        let engine = ChartEngine::new(Ephemeris::new(Box::new(Offline))).unwrap();
        let r = engine.compute_report(&birth("2001-09-09T09:09:09Z")).unwrap();
        assert_eq!(r.design.method, DesignMethod::FixedOffset);
        assert_eq!(r.chart.personality.iter().count(), 13);
    }

    #[test]
    fn zero_timeout_fails_atomically() {
        let engine = ChartEngine::new(Ephemeris::default())
            .unwrap()
            .with_timeout(Some(Duration::ZERO));
        let err = engine.compute_chart(&birth("1990-05-15T14:30:00Z")).unwrap_err();
        assert_eq!(err, SearchError::Timeout);
    }

    #[test]
    fn invalid_location_rejected() {
        let engine = ChartEngine::new(Ephemeris::default()).unwrap();
        let b = birth("1990-05-15T14:30:00Z").with_location(100.0, 0.0);
        assert!(matches!(
            engine.compute_chart(&b),
            Err(SearchError::InvalidLocation(_))
        ));
    }

    #[test]
    fn location_does_not_change_chart() {
        let engine = ChartEngine::new(Ephemeris::default()).unwrap();
        let plain = birth("1990-05-15T14:30:00Z");
        let located = plain.with_location(-33.9, 151.2);
        assert_eq!(
            engine.compute_chart(&plain).unwrap(),
            engine.compute_chart(&located).unwrap()
        );
    }

    #[test]
    fn concurrent_composite_matches_sequential() {
        let engine = ChartEngine::new(Ephemeris::default()).unwrap();
        let a = birth("1985-03-21T06:15:00-05:00");
        let b = birth("1990-05-15T14:30:00+02:00");
        let report = engine.compute_composite_for(&a, &b).unwrap();
        let ca = engine.compute_chart(&a).unwrap();
        let cb = engine.compute_chart(&b).unwrap();
        assert_eq!(report.first.chart, ca);
        assert_eq!(report.second.chart, cb);
        assert_eq!(report.composite, engine.compute_composite(&ca, &cb));
        assert_eq!(
            report.composite.defined_centers,
            ca.defined_centers.union(cb.defined_centers)
        );
    }

    #[test]
    fn composite_fails_when_either_side_fails() {
        let engine = ChartEngine::new(Ephemeris::default()).unwrap();
        let good = birth("1985-03-21T06:15:00Z");
        let bad = birth("1985-03-21T06:15:00Z").with_location(0.0, 500.0);
        assert!(engine.compute_composite_for(&good, &bad).is_err());
        assert!(engine.compute_composite_for(&bad, &good).is_err());
    }

    // Compile-time assertion: ChartEngine must be Send + Sync.
    #[allow(dead_code)]
    const _: () = {
        fn assert_send_sync<T: Send + Sync>() {}
        fn check() {
            assert_send_sync::<ChartEngine>();
        }
    };

    #[test]
    fn panic_payloads_render() {
        let s: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(&*s), "boom");
        let s: Box<dyn Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(&*s), "bang");
        let s: Box<dyn Any + Send> = Box::new(7u8);
        assert_eq!(panic_message(&*s), "chart computation panicked");
    }
}
