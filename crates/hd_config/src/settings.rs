//! Settings sections and their mapping onto engine types.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use hd_chart::{DEFAULT_DISPLAY_CAP, DefinitionMode};
use hd_ephem::{Ephemeris, NodeMode};
use hd_search::{ChartEngine, DesignConfig, SearchError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Environment variable naming a settings file.
pub const CONFIG_ENV_VAR: &str = "HD_CONFIG";

/// File picked up from the working directory when nothing else is named.
pub const DEFAULT_CONFIG_FILE: &str = "hd.toml";

/// Lunar node model, as spelled in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeModeSetting {
    Mean,
    #[default]
    True,
}

impl From<NodeModeSetting> for NodeMode {
    fn from(s: NodeModeSetting) -> Self {
        match s {
            NodeModeSetting::Mean => NodeMode::Mean,
            NodeModeSetting::True => NodeMode::True,
        }
    }
}

/// Definition rule, as spelled in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DefinitionModeSetting {
    #[default]
    CenterCount,
    Connectivity,
}

impl From<DefinitionModeSetting> for DefinitionMode {
    fn from(s: DefinitionModeSetting) -> Self {
        match s {
            DefinitionModeSetting::CenterCount => DefinitionMode::CenterCount,
            DefinitionModeSetting::Connectivity => DefinitionMode::Connectivity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EphemerisSettings {
    pub node_mode: NodeModeSetting,
}

/// `[design]`: Design-moment scan parameters.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignSettings {
    pub arc_deg: f64,
    pub lead_days: f64,
    pub step_days: f64,
    pub max_samples: u32,
    pub tolerance_deg: f64,
    pub fallback_days: f64,
    pub refine_iterations: u32,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignConfig::default().into()
    }
}

impl From<DesignConfig> for DesignSettings {
    fn from(c: DesignConfig) -> Self {
        Self {
            arc_deg: c.arc_deg,
            lead_days: c.lead_days,
            step_days: c.step_days,
            max_samples: c.max_samples,
            tolerance_deg: c.tolerance_deg,
            fallback_days: c.fallback_days,
            refine_iterations: c.refine_iterations,
        }
    }
}

impl From<DesignSettings> for DesignConfig {
    fn from(s: DesignSettings) -> Self {
        Self {
            arc_deg: s.arc_deg,
            lead_days: s.lead_days,
            step_days: s.step_days,
            max_samples: s.max_samples,
            tolerance_deg: s.tolerance_deg,
            fallback_days: s.fallback_days,
            refine_iterations: s.refine_iterations,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    pub definition_mode: DefinitionModeSetting,
}

/// `[composite]`: how many channels each composite list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompositeSettings {
    pub display_cap: usize,
}

impl Default for CompositeSettings {
    fn default() -> Self {
        Self {
            display_cap: DEFAULT_DISPLAY_CAP,
        }
    }
}

/// `[runtime]`: wall-clock bound per top-level call; absent means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeSettings {
    pub timeout_ms: Option<u64>,
}

/// All settings, one field per TOML section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub ephemeris: EphemerisSettings,
    pub design: DesignSettings,
    pub chart: ChartSettings,
    pub composite: CompositeSettings,
    pub runtime: RuntimeSettings,
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a settings file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Resolve settings from, in order: `explicit`, the `HD_CONFIG`
    /// variable, `hd.toml` in the working directory, built-in defaults.
    ///
    /// A named file that cannot be read is an error; a missing `hd.toml`
    /// is not.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::discover_in(explicit, from_env.as_deref(), Path::new("."))
    }

    fn discover_in(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        dir: &Path,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit.or(from_env) {
            return Self::load(path);
        }
        let local = dir.join(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(&local);
        }
        debug!("no settings file, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.design_config()
            .validate()
            .map_err(ConfigError::Invalid)?;
        if self.composite.display_cap == 0 {
            return Err(ConfigError::Invalid("display_cap must be > 0"));
        }
        if self.runtime.timeout_ms == Some(0) {
            return Err(ConfigError::Invalid("timeout_ms must be > 0"));
        }
        Ok(())
    }

    /// Render as TOML; `None` values are omitted.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn node_mode(&self) -> NodeMode {
        self.ephemeris.node_mode.into()
    }

    pub fn design_config(&self) -> DesignConfig {
        self.design.into()
    }

    pub fn definition_mode(&self) -> DefinitionMode {
        self.chart.definition_mode.into()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.runtime.timeout_ms.map(Duration::from_millis)
    }

    /// Engine over the analytic ephemeris, configured from these settings.
    pub fn build_engine(&self) -> Result<ChartEngine, SearchError> {
        Ok(ChartEngine::new(Ephemeris::analytic(self.node_mode()))?
            .with_design_config(self.design_config())
            .with_definition_mode(self.definition_mode())
            .with_display_cap(self.composite.display_cap)
            .with_timeout(self.timeout()))
    }
}
