//! Complete individual chart.

use serde::Serialize;

use crate::activation::{ActivationSet, GateSet};
use crate::center::CenterSet;
use crate::channel::{Channel, defined_centers, formed_channels, hanging_gates, open_centers};
use crate::classify::{Authority, Definition, DefinitionMode, Type, classify};
use crate::profile::{IncarnationCross, Profile};
use crate::tables::ChartTables;

/// Activations, resolved structure and classification of one birth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub personality: ActivationSet,
    pub design: ActivationSet,
    /// Union of Personality and Design gates.
    pub gates: GateSet,
    pub channels: Vec<Channel>,
    pub defined_centers: CenterSet,
    pub open_centers: CenterSet,
    pub hanging_gates: Vec<u8>,
    #[serde(rename = "type")]
    pub chart_type: Type,
    pub strategy: &'static str,
    pub signature: &'static str,
    pub not_self_theme: &'static str,
    pub authority: Authority,
    pub definition: Definition,
    pub profile: Profile,
    pub incarnation_cross: IncarnationCross,
}

impl Chart {
    /// Resolve channels and centers and classify, given both activation sets.
    pub fn assemble(
        personality: ActivationSet,
        design: ActivationSet,
        tables: &ChartTables,
        mode: DefinitionMode,
    ) -> Self {
        let gates = personality.gates().union(&design.gates());
        let channels = formed_channels(tables.channels, &gates);
        let defined = defined_centers(&channels);
        let class = classify(defined, &channels, tables.motor_to_throat, mode);
        let profile = Profile::from_activations(&personality, &design);
        let incarnation_cross =
            IncarnationCross::from_activations(&personality, &design, tables.cross_themes);

        Self {
            hanging_gates: hanging_gates(&gates, &channels),
            gates,
            defined_centers: defined,
            open_centers: open_centers(defined),
            channels,
            chart_type: class.chart_type,
            strategy: class.chart_type.strategy(),
            signature: class.chart_type.signature(),
            not_self_theme: class.chart_type.not_self_theme(),
            authority: class.authority,
            definition: class.definition,
            profile,
            incarnation_cross,
            personality,
            design,
        }
    }
}
