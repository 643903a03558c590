//! Channel catalog and channel/center resolution.
//!
//! A channel is formed when both of its gates are activated. Both centers
//! at the ends of a formed channel become defined; every other center is
//! open.

use serde::Serialize;

use crate::activation::GateSet;
use crate::center::{Center, CenterSet};

/// A channel joining two gates in two different centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Channel {
    /// Gate pair, lower gate first.
    pub gates: (u8, u8),
    pub name: &'static str,
    /// Centers of `gates.0` and `gates.1` respectively.
    pub centers: (Center, Center),
}

impl Channel {
    const fn new(a: u8, b: u8, name: &'static str, ca: Center, cb: Center) -> Self {
        Self {
            gates: (a, b),
            name,
            centers: (ca, cb),
        }
    }

    /// Canonical `low-high` key, e.g. `"20-34"`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.gates.0, self.gates.1)
    }

    pub fn contains_gate(&self, gate: u8) -> bool {
        self.gates.0 == gate || self.gates.1 == gate
    }

    pub fn touches(&self, center: Center) -> bool {
        self.centers.0 == center || self.centers.1 == center
    }

    /// True when both gates are in `gates`.
    pub fn is_formed_by(&self, gates: &GateSet) -> bool {
        gates.contains(self.gates.0) && gates.contains(self.gates.1)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {}", self.gates.0, self.gates.1, self.name)
    }
}

use Center::{Ajna, G, Head, Heart, Root, Sacral, SolarPlexus as Sp, Spleen, Throat};

/// The channel catalog, ordered by lower gate.
pub const CHANNELS: [Channel; 34] = [
    Channel::new(1, 8, "Inspiration", G, Throat),
    Channel::new(2, 14, "The Beat", G, Sacral),
    Channel::new(3, 60, "Mutation", Sacral, Root),
    Channel::new(4, 63, "Logic", Ajna, Head),
    Channel::new(5, 15, "Rhythm", Sacral, G),
    Channel::new(6, 59, "Mating", Sp, Sacral),
    Channel::new(7, 31, "The Alpha", G, Throat),
    Channel::new(9, 52, "Concentration", Sacral, Root),
    Channel::new(10, 20, "Awakening", G, Throat),
    Channel::new(10, 34, "Exploration", G, Sacral),
    Channel::new(11, 56, "Curiosity", Ajna, Throat),
    Channel::new(12, 22, "Openness", Throat, Sp),
    Channel::new(13, 33, "The Prodigal", G, Throat),
    Channel::new(16, 48, "The Wavelength", Throat, Spleen),
    Channel::new(17, 62, "Acceptance", Ajna, Throat),
    Channel::new(18, 58, "Judgment", Spleen, Root),
    Channel::new(19, 49, "Synthesis", Root, Sp),
    Channel::new(20, 34, "Charisma", Throat, Sacral),
    Channel::new(21, 45, "Money", Heart, Throat),
    Channel::new(23, 43, "Structuring", Throat, Ajna),
    Channel::new(24, 61, "Awareness", Ajna, Head),
    Channel::new(25, 51, "Initiation", G, Heart),
    Channel::new(26, 44, "Surrender", Heart, Spleen),
    Channel::new(27, 50, "Preservation", Sacral, Spleen),
    Channel::new(28, 38, "Struggle", Spleen, Root),
    Channel::new(29, 46, "Discovery", Sacral, G),
    Channel::new(30, 41, "Recognition", Sp, Root),
    Channel::new(32, 54, "Transformation", Spleen, Root),
    Channel::new(34, 57, "Power", Sacral, Spleen),
    Channel::new(35, 36, "Transitoriness", Throat, Sp),
    Channel::new(37, 40, "Community", Sp, Heart),
    Channel::new(39, 55, "Emoting", Root, Sp),
    Channel::new(42, 53, "Maturation", Sacral, Root),
    Channel::new(47, 64, "Abstraction", Ajna, Head),
];

/// Channels that connect a motor center directly to the Throat.
pub const MOTOR_TO_THROAT: [(u8, u8); 4] = [(12, 22), (20, 34), (21, 45), (35, 36)];

/// Channels of `catalog` whose two gates are both in `gates`, in catalog order.
pub fn formed_channels(catalog: &[Channel], gates: &GateSet) -> Vec<Channel> {
    catalog
        .iter()
        .filter(|ch| ch.is_formed_by(gates))
        .copied()
        .collect()
}

/// Centers at either end of any formed channel.
pub fn defined_centers(channels: &[Channel]) -> CenterSet {
    channels
        .iter()
        .flat_map(|ch| [ch.centers.0, ch.centers.1])
        .collect()
}

/// Complement of `defined`.
pub fn open_centers(defined: CenterSet) -> CenterSet {
    defined.complement()
}

/// Activated gates that belong to no formed channel, ascending.
pub fn hanging_gates(gates: &GateSet, channels: &[Channel]) -> Vec<u8> {
    gates
        .iter()
        .filter(|&g| !channels.iter().any(|ch| ch.contains_gate(g)))
        .collect()
}
