//! Activation extraction at one instant.

use hd_chart::ActivationSet;
use hd_ephem::Ephemeris;
use tracing::trace;

use crate::error::SearchError;

/// Encode every chart body at `jd_tt` against `gate_order`.
///
/// Uses the degrading provider path, so a body the primary source cannot
/// resolve is still encoded from the mean-motion approximation.
pub fn extract_activations(
    ephemeris: &Ephemeris,
    jd_tt: f64,
    gate_order: &[u8; 64],
) -> Result<ActivationSet, SearchError> {
    let longitudes = ephemeris.longitudes(jd_tt)?;
    let set = ActivationSet::from_longitudes(&longitudes, gate_order);
    trace!(jd_tt, gates = set.gates().len(), "activations extracted");
    Ok(set)
}
