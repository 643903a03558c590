//! Type, Authority and Definition classification.
//!
//! All three are pure functions of the defined-center set and the formed
//! channels. Type is decided by Sacral definition and whether any motor
//! center reaches the Throat through a single channel. Authority follows a
//! fixed precedence over defined centers. Definition is a size bucket of
//! the defined-center set, or optionally the number of connected
//! components of the defined centers.

use serde::{Serialize, Serializer};

use crate::center::{ALL_CENTERS, Center, CenterSet};
use crate::channel::Channel;

/// Energy type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Generator,
    ManifestingGenerator,
    Manifestor,
    Projector,
    Reflector,
}

impl Type {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Manifestor => "Manifestor",
            Self::Projector => "Projector",
            Self::Reflector => "Reflector",
        }
    }

    pub const fn strategy(self) -> &'static str {
        match self {
            Self::Generator | Self::ManifestingGenerator => "To Respond",
            Self::Manifestor => "To Inform",
            Self::Projector => "Wait for the Invitation",
            Self::Reflector => "Wait a Lunar Cycle",
        }
    }

    pub const fn signature(self) -> &'static str {
        match self {
            Self::Generator | Self::ManifestingGenerator => "Satisfaction",
            Self::Manifestor => "Peace",
            Self::Projector => "Success",
            Self::Reflector => "Surprise",
        }
    }

    pub const fn not_self_theme(self) -> &'static str {
        match self {
            Self::Generator => "Frustration",
            Self::ManifestingGenerator => "Frustration and Anger",
            Self::Manifestor => "Anger",
            Self::Projector => "Bitterness",
            Self::Reflector => "Disappointment",
        }
    }
}

/// Inner decision-making authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    Ego,
    SelfProjected,
    Throat,
    Mental,
    Lunar,
}

impl Authority {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emotional => "Emotional",
            Self::Sacral => "Sacral",
            Self::Splenic => "Splenic",
            Self::Ego => "Heart (Ego)",
            Self::SelfProjected => "Self-Projected",
            Self::Throat => "Throat",
            Self::Mental => "Mental",
            Self::Lunar => "Lunar",
        }
    }
}

/// Coarse split classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Definition {
    None,
    Single,
    Split,
    TripleSplit,
    QuadrupleSplit,
}

impl Definition {
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "No Definition",
            Self::Single => "Single Definition",
            Self::Split => "Split Definition",
            Self::TripleSplit => "Triple Split Definition",
            Self::QuadrupleSplit => "Quadruple Split Definition",
        }
    }
}

/// How [`Definition`] is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DefinitionMode {
    /// Thresholds on the number of defined centers.
    #[default]
    CenterCount,
    /// Number of connected groups of defined centers.
    Connectivity,
}

macro_rules! serialize_by_name {
    ($($ty:ty),*) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    )*};
}

serialize_by_name!(Type, Authority, Definition);

/// Type, Authority and Definition of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub chart_type: Type,
    pub authority: Authority,
    pub definition: Definition,
}

/// True when any formed channel is one of `motor_to_throat`.
fn has_motor_to_throat(channels: &[Channel], motor_to_throat: &[(u8, u8)]) -> bool {
    channels.iter().any(|ch| motor_to_throat.contains(&ch.gates))
}

/// Energy type from the defined centers and formed channels.
///
/// No defined center at all is a Reflector.
pub fn classify_type(
    defined: CenterSet,
    channels: &[Channel],
    motor_to_throat: &[(u8, u8)],
) -> Type {
    if defined.is_empty() {
        return Type::Reflector;
    }
    let sacral = defined.contains(Center::Sacral);
    let motor_throat = has_motor_to_throat(channels, motor_to_throat);
    match (sacral, motor_throat) {
        (true, false) => Type::Generator,
        (true, true) => Type::ManifestingGenerator,
        (false, true) => Type::Manifestor,
        (false, false) => Type::Projector,
    }
}

/// First matching authority in precedence order; Lunar when nothing applies.
pub fn classify_authority(defined: CenterSet) -> Authority {
    const PRECEDENCE: [(Center, Authority); 7] = [
        (Center::SolarPlexus, Authority::Emotional),
        (Center::Sacral, Authority::Sacral),
        (Center::Spleen, Authority::Splenic),
        (Center::Heart, Authority::Ego),
        (Center::G, Authority::SelfProjected),
        (Center::Throat, Authority::Throat),
        (Center::Ajna, Authority::Mental),
    ];
    PRECEDENCE
        .iter()
        .find(|(center, _)| defined.contains(*center))
        .map_or(Authority::Lunar, |(_, authority)| *authority)
}

/// Bucket by number of defined centers: 0, 1-4, 5-6, 7-8, 9.
pub fn definition_from_center_count(count: usize) -> Definition {
    match count {
        0 => Definition::None,
        1..=4 => Definition::Single,
        5..=6 => Definition::Split,
        7..=8 => Definition::TripleSplit,
        _ => Definition::QuadrupleSplit,
    }
}

/// Bucket by the number of connected groups the formed channels make.
pub fn definition_by_connectivity(channels: &[Channel]) -> Definition {
    let mut parent: [usize; 9] = std::array::from_fn(|i| i);

    fn find(parent: &mut [usize; 9], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    let mut defined = CenterSet::empty();
    for ch in channels {
        let a = find(&mut parent, usize::from(ch.centers.0.index()));
        let b = find(&mut parent, usize::from(ch.centers.1.index()));
        parent[a] = b;
        defined.insert(ch.centers.0);
        defined.insert(ch.centers.1);
    }

    let mut roots = CenterSet::empty();
    for c in defined.iter() {
        let r = find(&mut parent, usize::from(c.index()));
        roots.insert(ALL_CENTERS[r]);
    }
    match roots.len() {
        0 => Definition::None,
        1 => Definition::Single,
        2 => Definition::Split,
        3 => Definition::TripleSplit,
        _ => Definition::QuadrupleSplit,
    }
}

pub fn classify_definition(
    mode: DefinitionMode,
    defined: CenterSet,
    channels: &[Channel],
) -> Definition {
    match mode {
        DefinitionMode::CenterCount => definition_from_center_count(defined.len()),
        DefinitionMode::Connectivity => definition_by_connectivity(channels),
    }
}

/// Type, Authority and Definition together.
pub fn classify(
    defined: CenterSet,
    channels: &[Channel],
    motor_to_throat: &[(u8, u8)],
    mode: DefinitionMode,
) -> Classification {
    Classification {
        chart_type: classify_type(defined, channels, motor_to_throat),
        authority: classify_authority(defined),
        definition: classify_definition(mode, defined, channels),
    }
}
