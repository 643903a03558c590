//! Validated bundle of the static chart tables.

use crate::center::{Center, GATE_CENTERS};
use crate::channel::{CHANNELS, Channel, MOTOR_TO_THROAT};
use crate::error::ChartError;
use crate::gate::GATE_ORDER;
use crate::profile::CROSS_THEMES;

/// Read-only tables used to resolve a chart.
///
/// Construct with [`ChartTables::standard`] (or [`ChartTables::new`] for a
/// custom catalog); both validate internal consistency so that chart
/// assembly can index without further checks.
#[derive(Debug, Clone, Copy)]
pub struct ChartTables {
    pub gate_order: &'static [u8; 64],
    pub gate_centers: &'static [Center; 64],
    pub channels: &'static [Channel],
    pub motor_to_throat: &'static [(u8, u8)],
    pub cross_themes: &'static [&'static str; 64],
}

impl ChartTables {
    /// The built-in tables.
    pub fn standard() -> Result<Self, ChartError> {
        Self::new(
            &GATE_ORDER,
            &GATE_CENTERS,
            &CHANNELS,
            &MOTOR_TO_THROAT,
            &CROSS_THEMES,
        )
    }

    pub fn new(
        gate_order: &'static [u8; 64],
        gate_centers: &'static [Center; 64],
        channels: &'static [Channel],
        motor_to_throat: &'static [(u8, u8)],
        cross_themes: &'static [&'static str; 64],
    ) -> Result<Self, ChartError> {
        let tables = Self {
            gate_order,
            gate_centers,
            channels,
            motor_to_throat,
            cross_themes,
        };
        tables.validate()?;
        Ok(tables)
    }

    fn validate(&self) -> Result<(), ChartError> {
        let mut seen = [false; 64];
        for &g in self.gate_order {
            let idx = gate_slot(g)?;
            if seen[idx] {
                return Err(ChartError::MalformedTable(format!(
                    "gate {g} appears twice in gate order"
                )));
            }
            seen[idx] = true;
        }

        for (i, ch) in self.channels.iter().enumerate() {
            let (a, b) = ch.gates;
            let ca = self.gate_centers[gate_slot(a)?];
            let cb = self.gate_centers[gate_slot(b)?];
            if a >= b {
                return Err(ChartError::MalformedTable(format!(
                    "channel {a}-{b}: gates must be ascending"
                )));
            }
            if (ca, cb) != ch.centers {
                return Err(ChartError::MalformedTable(format!(
                    "channel {a}-{b}: centers {}/{} disagree with gate map {ca}/{cb}",
                    ch.centers.0, ch.centers.1
                )));
            }
            if ca == cb {
                return Err(ChartError::MalformedTable(format!(
                    "channel {a}-{b} joins {ca} to itself"
                )));
            }
            if self.channels[..i].iter().any(|other| other.gates == ch.gates) {
                return Err(ChartError::MalformedTable(format!(
                    "channel {a}-{b} listed twice"
                )));
            }
        }

        for &pair in self.motor_to_throat {
            let ch = self
                .channels
                .iter()
                .find(|ch| ch.gates == pair)
                .ok_or_else(|| {
                    ChartError::MalformedTable(format!(
                        "motor-to-throat channel {}-{} not in catalog",
                        pair.0, pair.1
                    ))
                })?;
            let motor = ch.centers.0.is_motor() || ch.centers.1.is_motor();
            if !motor || !ch.touches(Center::Throat) {
                return Err(ChartError::MalformedTable(format!(
                    "channel {} does not join a motor to the Throat",
                    ch.key()
                )));
            }
        }

        if let Some(i) = self.cross_themes.iter().position(|t| t.is_empty()) {
            return Err(ChartError::MalformedTable(format!(
                "no cross theme for gate {}",
                i + 1
            )));
        }
        Ok(())
    }
}

fn gate_slot(gate: u8) -> Result<usize, ChartError> {
    match gate {
        1..=64 => Ok(usize::from(gate - 1)),
        _ => Err(ChartError::InvalidGate(gate)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tables_validate() {
        let t = ChartTables::standard().unwrap();
        assert_eq!(t.channels.len(), 34);
    }

    static SWAPPED_ORDER: [u8; 64] = {
        let mut o = GATE_ORDER;
        o[1] = 41;
        o
    };

    #[test]
    fn duplicate_gate_in_order_rejected() {
        let err = ChartTables::new(
            &SWAPPED_ORDER,
            &GATE_CENTERS,
            &CHANNELS,
            &MOTOR_TO_THROAT,
            &CROSS_THEMES,
        )
        .unwrap_err();
        assert!(matches!(err, ChartError::MalformedTable(_)));
    }

    static WRONG_CENTERS: [Channel; 1] = [Channel {
        gates: (1, 8),
        name: "Inspiration",
        centers: (Center::G, Center::Root),
    }];

    #[test]
    fn channel_center_mismatch_rejected() {
        let err = ChartTables::new(
            &GATE_ORDER,
            &GATE_CENTERS,
            &WRONG_CENTERS,
            &[],
            &CROSS_THEMES,
        )
        .unwrap_err();
        assert!(err.to_string().contains("1-8"));
    }

    static BAD_GATE: [Channel; 1] = [Channel {
        gates: (0, 8),
        name: "Nowhere",
        centers: (Center::G, Center::Throat),
    }];

    #[test]
    fn out_of_range_gate_rejected() {
        let err =
            ChartTables::new(&GATE_ORDER, &GATE_CENTERS, &BAD_GATE, &[], &CROSS_THEMES).unwrap_err();
        assert_eq!(err, ChartError::InvalidGate(0));
    }

    #[test]
    fn non_motor_throat_rejected() {
        let err = ChartTables::new(
            &GATE_ORDER,
            &GATE_CENTERS,
            &CHANNELS,
            &[(1, 8)],
            &CROSS_THEMES,
        )
        .unwrap_err();
        assert!(err.to_string().contains("motor"));
    }

    static FIRST_THREE: [Channel; 3] = [CHANNELS[0], CHANNELS[1], CHANNELS[2]];

    #[test]
    fn uncatalogued_motor_channel_rejected() {
        let err = ChartTables::new(
            &GATE_ORDER,
            &GATE_CENTERS,
            &FIRST_THREE,
            &MOTOR_TO_THROAT,
            &CROSS_THEMES,
        )
        .unwrap_err();
        assert!(err.to_string().contains("not in catalog"));
    }
}
