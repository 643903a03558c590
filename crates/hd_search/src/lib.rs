//! Chart computation pipeline.
//!
//! This crate provides:
//! - The Design-moment solver (Sun 88 deg before its birth position)
//! - Activation extraction at the Personality and Design instants
//! - [`ChartEngine`], an explicitly constructed, stateless engine that
//!   turns birth data into a [`Chart`](hd_chart::Chart) and merges two
//!   charts into a composite
//!
//! Every call is independent. The engine holds only read-only tables and
//! configuration, so one value can be shared across threads.

pub mod birth;
pub mod design;
pub mod design_types;
pub mod engine;
pub mod error;
pub mod extract;

pub use birth::BirthData;
pub use design::{design_target_longitude, find_design_instant};
pub use design_types::{Deadline, DesignConfig, DesignMethod, DesignMoment};
pub use engine::{ChartEngine, ChartReport, CompositeReport};
pub use error::SearchError;
pub use extract::extract_activations;
