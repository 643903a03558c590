//! Types for the Design-moment search.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::SearchError;

/// Configuration for [`find_design_instant`](crate::find_design_instant).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignConfig {
    /// Solar arc between the Design and the birth Sun, degrees (default 88).
    pub arc_deg: f64,
    /// Scan starts this many days before birth (default 95).
    pub lead_days: f64,
    /// Scan step in days (default 0.05).
    pub step_days: f64,
    /// Maximum samples in the scan window (default 400, i.e. 20 days).
    pub max_samples: u32,
    /// A sample within this distance of the target ends the scan (default 0.05 deg).
    pub tolerance_deg: f64,
    /// Offset used when no sample could be evaluated (default 88.5 days).
    pub fallback_days: f64,
    /// Bisection steps applied around the best sample; 0 disables (default 0).
    pub refine_iterations: u32,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            arc_deg: 88.0,
            lead_days: 95.0,
            step_days: 0.05,
            max_samples: 400,
            tolerance_deg: 0.05,
            fallback_days: 88.5,
            refine_iterations: 0,
        }
    }
}

impl DesignConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.arc_deg.is_finite() || self.arc_deg <= 0.0 || self.arc_deg >= 360.0 {
            return Err("arc_deg must be in (0, 360)");
        }
        if !self.lead_days.is_finite() || self.lead_days <= 0.0 {
            return Err("lead_days must be positive");
        }
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if self.max_samples == 0 {
            return Err("max_samples must be > 0");
        }
        if !self.tolerance_deg.is_finite() || self.tolerance_deg <= 0.0 {
            return Err("tolerance_deg must be positive");
        }
        if !self.fallback_days.is_finite() || self.fallback_days <= 0.0 {
            return Err("fallback_days must be positive");
        }
        Ok(())
    }
}

/// How the Design instant was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DesignMethod {
    /// A sample fell within tolerance.
    Converged,
    /// No sample within tolerance; the closest one was used.
    BestSample,
    /// No sample could be evaluated; fixed offset from birth.
    FixedOffset,
}

impl DesignMethod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Converged => "converged",
            Self::BestSample => "best-sample",
            Self::FixedOffset => "fixed-offset",
        }
    }
}

/// Result of the Design-moment search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignMoment {
    /// Design instant as Julian Date (TT).
    pub jd_tt: f64,
    /// Sun longitude at `jd_tt`, degrees [0, 360).
    pub sun_longitude_deg: f64,
    /// Longitude the search aimed for.
    pub target_longitude_deg: f64,
    /// Circular distance between the two, degrees.
    pub error_deg: f64,
    /// Samples the provider answered.
    pub samples_evaluated: u32,
    pub method: DesignMethod,
}

/// Optional wall-clock bound on a computation.
///
/// Checked between provider calls; once expired the computation fails
/// with [`SearchError::Timeout`] and returns no partial result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// No bound.
    pub const fn none() -> Self {
        Self(None)
    }

    pub fn at(instant: Instant) -> Self {
        Self(Some(instant))
    }

    /// Expires `timeout` from now; `None` means no bound.
    pub fn after(timeout: Option<Duration>) -> Self {
        Self(timeout.and_then(|t| Instant::now().checked_add(t)))
    }

    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|end| Instant::now() >= end)
    }

    pub(crate) fn check(&self) -> Result<(), SearchError> {
        if self.is_expired() {
            Err(SearchError::Timeout)
        } else {
            Ok(())
        }
    }
}
