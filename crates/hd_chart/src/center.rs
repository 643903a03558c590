//! The nine centers and the gate-to-center map.

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

/// One of the nine centers of the body graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    Sacral,
    SolarPlexus,
    Spleen,
    Root,
}

/// All nine centers, top of the body graph first.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::Sacral,
    Center::SolarPlexus,
    Center::Spleen,
    Center::Root,
];

impl Center {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Heart => "Heart",
            Self::Sacral => "Sacral",
            Self::SolarPlexus => "Solar Plexus",
            Self::Spleen => "Spleen",
            Self::Root => "Root",
        }
    }

    /// 0-based position in [`ALL_CENTERS`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Head => 0,
            Self::Ajna => 1,
            Self::Throat => 2,
            Self::G => 3,
            Self::Heart => 4,
            Self::Sacral => 5,
            Self::SolarPlexus => 6,
            Self::Spleen => 7,
            Self::Root => 8,
        }
    }

    /// Motor centers: Sacral, Solar Plexus, Heart, Root.
    pub const fn is_motor(self) -> bool {
        matches!(
            self,
            Self::Sacral | Self::SolarPlexus | Self::Heart | Self::Root
        )
    }
}

impl std::fmt::Display for Center {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Center {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

use Center::{Ajna, G, Head, Heart, Root, Sacral, SolarPlexus as Sp, Spleen, Throat};

/// Center of each gate, indexed by `gate - 1`.
pub const GATE_CENTERS: [Center; 64] = [
    G, G, Sacral, Ajna, Sacral, Sp, G, Throat, // 1-8
    Sacral, G, Ajna, Throat, G, Sacral, G, Throat, // 9-16
    Ajna, Spleen, Root, Throat, Heart, Sp, Throat, Ajna, // 17-24
    G, Heart, Sacral, Spleen, Sacral, Sp, Throat, Spleen, // 25-32
    Throat, Sacral, Throat, Sp, Sp, Root, Root, Heart, // 33-40
    Root, Sacral, Ajna, Spleen, Throat, G, Ajna, Spleen, // 41-48
    Sp, Spleen, Heart, Root, Root, Root, Sp, Throat, // 49-56
    Spleen, Root, Sacral, Root, Head, Throat, Head, Head, // 57-64
];

/// Center owning `gate`, or `None` outside 1..=64.
pub fn center_of_gate(gate: u8) -> Option<Center> {
    match gate {
        1..=64 => Some(GATE_CENTERS[usize::from(gate - 1)]),
        _ => None,
    }
}

/// A set of centers, iterated in [`ALL_CENTERS`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CenterSet(u16);

impl CenterSet {
    const FULL: u16 = (1 << 9) - 1;

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn all() -> Self {
        Self(Self::FULL)
    }

    pub fn insert(&mut self, center: Center) {
        self.0 |= 1 << center.index();
    }

    pub const fn contains(self, center: Center) -> bool {
        self.0 & (1 << center.index()) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Centers not in this set.
    pub const fn complement(self) -> Self {
        Self(Self::all().0 & !self.0)
    }

    pub fn iter(self) -> impl Iterator<Item = Center> {
        ALL_CENTERS.into_iter().filter(move |c| self.contains(*c))
    }
}

impl FromIterator<Center> for CenterSet {
    fn from_iter<I: IntoIterator<Item = Center>>(iter: I) -> Self {
        let mut set = Self::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl Serialize for CenterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for c in self.iter() {
            seq.serialize_element(&c)?;
        }
        seq.end()
    }
}
