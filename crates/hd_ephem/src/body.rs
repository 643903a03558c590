//! Bodies tracked by a chart.

use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::EphemerisError;

/// A celestial body or computed point that carries an activation.
///
/// Earth and the South Node are derived points: they are always the
/// opposite of the Sun and the North Node and are never looked up in a
/// backing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Earth,
    NorthNode,
    SouthNode,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All 13 bodies in chart order (index 0 = Sun, 12 = Pluto).
pub const ALL_BODIES: [Body; 13] = [
    Body::Sun,
    Body::Earth,
    Body::NorthNode,
    Body::SouthNode,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Serialize for Body {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Earth => "Earth",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based position in [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Earth => 1,
            Self::NorthNode => 2,
            Self::SouthNode => 3,
            Self::Moon => 4,
            Self::Mercury => 5,
            Self::Venus => 6,
            Self::Mars => 7,
            Self::Jupiter => 8,
            Self::Saturn => 9,
            Self::Uranus => 10,
            Self::Neptune => 11,
            Self::Pluto => 12,
        }
    }

    /// For derived points, the body they oppose.
    pub const fn opposite_of(self) -> Option<Body> {
        match self {
            Self::Earth => Some(Self::Sun),
            Self::SouthNode => Some(Self::NorthNode),
            _ => None,
        }
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    /// Case-insensitive; spaces, `_` and `-` are ignored (`north-node`, `NorthNode`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().replace(' ', "").eq_ignore_ascii_case(&key))
            .ok_or(EphemerisError::UnsupportedBody("unknown body name"))
    }
}

/// Which lunar node model to use for the North Node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum NodeMode {
    /// Mean node: smooth polynomial motion only.
    Mean,
    /// True node: mean node plus the principal periodic corrections.
    #[default]
    True,
}
