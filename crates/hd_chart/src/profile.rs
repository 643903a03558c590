//! Profile and Incarnation Cross.

use serde::{Serialize, Serializer};

use crate::activation::ActivationSet;

/// Personality Sun line over Design Sun line, e.g. `6/2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    pub personality_line: u8,
    pub design_line: u8,
}

impl Profile {
    pub fn from_activations(personality: &ActivationSet, design: &ActivationSet) -> Self {
        Self {
            personality_line: personality.sun().coordinate.line,
            design_line: design.sun().coordinate.line,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.personality_line, self.design_line)
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Angle of the cross, from the Personality Sun line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossAngle {
    RightAngle,
    Juxtaposition,
    LeftAngle,
}

impl CrossAngle {
    /// Lines 1-3 Right Angle, 4-5 Juxtaposition, 6 Left Angle.
    pub const fn from_line(line: u8) -> Self {
        match line {
            0..=3 => Self::RightAngle,
            4..=5 => Self::Juxtaposition,
            _ => Self::LeftAngle,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::RightAngle => "Right Angle",
            Self::Juxtaposition => "Juxtaposition",
            Self::LeftAngle => "Left Angle",
        }
    }
}

impl std::fmt::Display for CrossAngle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for CrossAngle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Cross theme keyed by the Personality Sun gate, indexed by `gate - 1`.
pub const CROSS_THEMES: [&str; 64] = [
    "the Sphinx", // 1
    "the Sphinx", // 2
    "Laws", // 3
    "Explanation", // 4
    "Consciousness", // 5
    "Eden", // 6
    "the Sphinx", // 7
    "Contagion", // 8
    "Planning", // 9
    "the Vessel of Love", // 10
    "Eden", // 11
    "Eden", // 12
    "the Sphinx", // 13
    "Contagion", // 14
    "the Vessel of Love", // 15
    "Planning", // 16
    "Service", // 17
    "Service", // 18
    "the Four Ways", // 19
    "the Sleeping Phoenix", // 20
    "Tension", // 21
    "Rulership", // 22
    "Explanation", // 23
    "the Four Ways", // 24
    "the Vessel of Love", // 25
    "Rulership", // 26
    "the Unexpected", // 27
    "the Unexpected", // 28
    "Contagion", // 29
    "Contagion", // 30
    "the Unexpected", // 31
    "Maya", // 32
    "the Four Ways", // 33
    "the Sleeping Phoenix", // 34
    "Consciousness", // 35
    "Eden", // 36
    "Planning", // 37
    "Tension", // 38
    "Tension", // 39
    "Planning", // 40
    "the Unexpected", // 41
    "Maya", // 42
    "Explanation", // 43
    "the Four Ways", // 44
    "Rulership", // 45
    "the Vessel of Love", // 46
    "Rulership", // 47
    "Tension", // 48
    "Explanation", // 49
    "Laws", // 50
    "Penetration", // 51
    "Service", // 52
    "Penetration", // 53
    "Penetration", // 54
    "the Sleeping Phoenix", // 55
    "Laws", // 56
    "Penetration", // 57
    "Service", // 58
    "the Sleeping Phoenix", // 59
    "Laws", // 60
    "Maya", // 61
    "Maya", // 62
    "Consciousness", // 63
    "Consciousness", // 64
];

/// Incarnation Cross: angle, theme and the four Sun/Earth gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncarnationCross {
    pub angle: CrossAngle,
    pub theme: &'static str,
    /// Personality Sun, Personality Earth, Design Sun, Design Earth.
    pub gates: [u8; 4],
    pub label: String,
}

impl IncarnationCross {
    pub fn from_activations(
        personality: &ActivationSet,
        design: &ActivationSet,
        themes: &[&'static str; 64],
    ) -> Self {
        let p_sun = personality.sun().coordinate;
        let gates = [
            p_sun.gate,
            personality.earth().coordinate.gate,
            design.sun().coordinate.gate,
            design.earth().coordinate.gate,
        ];
        let angle = CrossAngle::from_line(p_sun.line);
        let theme = themes[usize::from(p_sun.gate.clamp(1, 64) - 1)];
        let label = format!(
            "{angle} Cross of {theme} ({}/{} | {}/{})",
            gates[0], gates[1], gates[2], gates[3]
        );
        Self {
            angle,
            theme,
            gates,
            label,
        }
    }
}

impl std::fmt::Display for IncarnationCross {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::{GATE_ORDER, GATE_SPAN_DEG, gate_start_longitude};
    use hd_ephem::{Body, BodyLongitudes};

    /// Longitude in the middle of `line` of `gate`.
    fn lon(gate: u8, line: u8) -> f64 {
        gate_start_longitude(gate).unwrap() + (f64::from(line) - 0.5) * GATE_SPAN_DEG / 6.0
    }

    fn set(sun: f64, earth: f64) -> ActivationSet {
        let mut longitudes = [0.0; 13];
        longitudes[Body::Sun.index() as usize] = sun;
        longitudes[Body::Earth.index() as usize] = earth;
        ActivationSet::from_longitudes(&BodyLongitudes { longitudes }, &GATE_ORDER)
    }

    #[test]
    fn profile_display() {
        let p = set(lon(13, 6), lon(7, 6));
        let d = set(lon(1, 2), lon(2, 2));
        let profile = Profile::from_activations(&p, &d);
        assert_eq!(profile.to_string(), "6/2");
    }

    #[test]
    fn angle_thresholds() {
        assert_eq!(CrossAngle::from_line(1), CrossAngle::RightAngle);
        assert_eq!(CrossAngle::from_line(3), CrossAngle::RightAngle);
        assert_eq!(CrossAngle::from_line(4), CrossAngle::Juxtaposition);
        assert_eq!(CrossAngle::from_line(5), CrossAngle::Juxtaposition);
        assert_eq!(CrossAngle::from_line(6), CrossAngle::LeftAngle);
    }

    #[test]
    fn cross_label() {
        let p = set(lon(13, 1), lon(7, 1));
        let d = set(lon(1, 3), lon(2, 3));
        let cross = IncarnationCross::from_activations(&p, &d, &CROSS_THEMES);
        assert_eq!(cross.gates, [13, 7, 1, 2]);
        assert_eq!(cross.angle, CrossAngle::RightAngle);
        assert_eq!(
            cross.label,
            "Right Angle Cross of the Sphinx (13/7 | 1/2)"
        );
    }

    #[test]
    fn left_angle_cross() {
        let p = set(lon(41, 6), lon(31, 6));
        let d = set(lon(27, 4), lon(28, 4));
        let cross = IncarnationCross::from_activations(&p, &d, &CROSS_THEMES);
        assert_eq!(
            cross.to_string(),
            "Left Angle Cross of the Unexpected (41/31 | 27/28)"
        );
    }

    #[test]
    fn themes_complete() {
        assert!(CROSS_THEMES.iter().all(|t| !t.is_empty()));
    }
}
