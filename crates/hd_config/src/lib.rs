//! Settings file for the chart engine.
//!
//! Every key is optional; a missing section or key keeps the engine
//! default. A minimal file:
//!
//! ```toml
//! [ephemeris]
//! node_mode = "mean"
//!
//! [design]
//! refine_iterations = 30
//!
//! [runtime]
//! timeout_ms = 2000
//! ```

pub mod error;
pub mod settings;

pub use error::ConfigError;
pub use settings::{
    CONFIG_ENV_VAR, ChartSettings, CompositeSettings, DEFAULT_CONFIG_FILE, DefinitionModeSetting,
    DesignSettings, EphemerisSettings, NodeModeSetting, RuntimeSettings, Settings,
};
