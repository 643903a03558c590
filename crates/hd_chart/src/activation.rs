//! Activations: one encoded gate coordinate per body.

use hd_ephem::{ALL_BODIES, Body, BodyLongitudes};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::gate::{GateCoordinate, encode_with};

/// A body and the wheel coordinate of its longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Activation {
    pub body: Body,
    #[serde(flatten)]
    pub coordinate: GateCoordinate,
}

/// All 13 activations of one moment (Personality or Design), in body order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ActivationSet {
    activations: [Activation; 13],
}

impl ActivationSet {
    /// Encode every body longitude against `gate_order`.
    pub fn from_longitudes(longitudes: &BodyLongitudes, gate_order: &[u8; 64]) -> Self {
        Self {
            activations: ALL_BODIES.map(|body| Activation {
                body,
                coordinate: encode_with(gate_order, longitudes.longitude(body)),
            }),
        }
    }

    pub fn get(&self, body: Body) -> &Activation {
        &self.activations[usize::from(body.index())]
    }

    pub fn sun(&self) -> &Activation {
        self.get(Body::Sun)
    }

    pub fn earth(&self) -> &Activation {
        self.get(Body::Earth)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activation> {
        self.activations.iter()
    }

    /// Gates activated at this moment.
    pub fn gates(&self) -> GateSet {
        self.activations.iter().map(|a| a.coordinate.gate).collect()
    }
}

/// A set of gate numbers 1..=64, iterated ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GateSet(u64);

impl GateSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Ignores numbers outside 1..=64.
    pub fn insert(&mut self, gate: u8) {
        if (1..=64).contains(&gate) {
            self.0 |= 1 << (gate - 1);
        }
    }

    pub const fn contains(&self, gate: u8) -> bool {
        gate >= 1 && gate <= 64 && self.0 & (1 << (gate - 1)) != 0
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub const fn union(&self, other: &Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + use<> {
        let bits = self.0;
        (1..=64u8).filter(move |g| bits & (1 << (g - 1)) != 0)
    }
}

impl FromIterator<u8> for GateSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for g in iter {
            set.insert(g);
        }
        set
    }
}

impl Serialize for GateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for g in self.iter() {
            seq.serialize_element(&g)?;
        }
        seq.end()
    }
}
