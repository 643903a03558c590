//! Symbolic chart computation over ecliptic longitudes.
//!
//! This crate provides:
//! - The gate wheel encoder (Gate / Line / Color / Tone / Base)
//! - The nine centers and the channel catalog
//! - Channel and center resolution from an activated gate set
//! - Type, Authority and Definition classification
//! - Profile and Incarnation Cross
//! - Composite (relationship) merging of two charts
//!
//! Everything here is pure: no I/O, no clocks, no shared mutable state.
//! The static tables are bundled in [`ChartTables`], which is validated
//! once when constructed and then only read.

pub mod activation;
pub mod center;
pub mod channel;
pub mod chart;
pub mod classify;
pub mod composite;
pub mod error;
pub mod gate;
pub mod profile;
pub mod tables;
pub mod util;

pub use activation::{Activation, ActivationSet, GateSet};
pub use center::{ALL_CENTERS, Center, CenterSet, GATE_CENTERS, center_of_gate};
pub use channel::{
    CHANNELS, Channel, MOTOR_TO_THROAT, defined_centers, formed_channels, hanging_gates,
    open_centers,
};
pub use chart::Chart;
pub use classify::{
    Authority, Classification, Definition, DefinitionMode, Type, classify, classify_authority,
    classify_definition, classify_type, definition_by_connectivity, definition_from_center_count,
};
pub use composite::{CompositeChart, CompositeDisplay, ConnectionTheme, DEFAULT_DISPLAY_CAP, merge};
pub use error::ChartError;
pub use gate::{
    GATE_OFFSET_DEG, GATE_ORDER, GATE_SPAN_DEG, GateCoordinate, encode, gate_start_longitude,
};
pub use profile::{CROSS_THEMES, CrossAngle, IncarnationCross, Profile};
pub use tables::ChartTables;
pub use util::{angular_distance, signed_difference};
