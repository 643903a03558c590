//! Gate wheel encoding: longitude to Gate / Line / Color / Tone / Base.
//!
//! The wheel is 64 equal gates of 5.625 deg. It is rotated so that the
//! start of gate 41 sits at 302 deg tropical longitude, i.e. an offset of
//! +58 deg is applied before dividing.
//!
//! Each gate has 6 lines, each line 6 colors, each color 6 tones and each
//! tone 5 bases. Every stage is derived from the position of the adjusted
//! longitude on the whole circle, so stage boundaries coincide with the
//! gate boundaries.

use hd_ephem::normalize_360;
use serde::Serialize;

/// Span of one gate: 360/64 = 5.625 degrees.
pub const GATE_SPAN_DEG: f64 = 360.0 / 64.0;

/// Rotation applied to tropical longitude before indexing the wheel.
pub const GATE_OFFSET_DEG: f64 = 58.0;

/// Lines per gate.
pub const LINES_PER_GATE: u8 = 6;
/// Colors per line.
pub const COLORS_PER_LINE: u8 = 6;
/// Tones per color.
pub const TONES_PER_COLOR: u8 = 6;
/// Bases per tone.
pub const BASES_PER_TONE: u8 = 5;

const LINE_DIVISIONS: f64 = 64.0 * 6.0;
const COLOR_DIVISIONS: f64 = LINE_DIVISIONS * 6.0;
const TONE_DIVISIONS: f64 = COLOR_DIVISIONS * 6.0;
const BASE_DIVISIONS: f64 = TONE_DIVISIONS * 5.0;

/// Gate numbers in wheel order. Segment 0 (adjusted longitude 0 deg) is gate 41.
pub const GATE_ORDER: [u8; 64] = [
    41, 19, 13, 49, 30, 55, 37, 63, 22, 36, 25, 17, 21, 51, 42, 3, //
    27, 24, 2, 23, 8, 20, 16, 35, 45, 12, 15, 52, 39, 53, 62, 56, //
    31, 33, 7, 4, 29, 59, 40, 64, 47, 6, 46, 18, 48, 57, 32, 50, //
    28, 44, 1, 43, 14, 34, 9, 5, 26, 11, 10, 58, 38, 54, 61, 60,
];

/// Full wheel coordinate of one longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GateCoordinate {
    /// Gate number, 1-64.
    pub gate: u8,
    /// Line, 1-6.
    pub line: u8,
    /// Color, 1-6.
    pub color: u8,
    /// Tone, 1-6.
    pub tone: u8,
    /// Base, 1-5.
    pub base: u8,
    /// Input longitude normalized to [0, 360).
    pub longitude: f64,
}

impl GateCoordinate {
    /// Short `gate.line` notation, e.g. `41.1`.
    pub fn gate_line(&self) -> String {
        format!("{}.{}", self.gate, self.line)
    }
}

impl std::fmt::Display for GateCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{} color {} tone {} base {}",
            self.gate, self.line, self.color, self.tone, self.base
        )
    }
}

/// Longitude rotated onto the wheel, in [0, 360).
pub fn adjusted_longitude(longitude_deg: f64) -> f64 {
    let adjusted = normalize_360(longitude_deg + GATE_OFFSET_DEG);
    // normalize_360 returns 360.0 for tiny negative inputs
    if adjusted >= 360.0 { 0.0 } else { adjusted }
}

/// Encode a tropical longitude with the standard gate order.
pub fn encode(longitude_deg: f64) -> GateCoordinate {
    encode_with(&GATE_ORDER, longitude_deg)
}

/// Encode a tropical longitude against an explicit gate order.
pub fn encode_with(order: &[u8; 64], longitude_deg: f64) -> GateCoordinate {
    let adjusted = adjusted_longitude(longitude_deg);
    let fraction = adjusted / 360.0;
    // gate from the line slot so both stages share one floor
    let line_slot = (fraction * LINE_DIVISIONS).floor() as usize;
    let index = (line_slot / usize::from(LINES_PER_GATE)).min(63);

    GateCoordinate {
        gate: order[index],
        line: subdivision(fraction, LINE_DIVISIONS, LINES_PER_GATE),
        color: subdivision(fraction, COLOR_DIVISIONS, COLORS_PER_LINE),
        tone: subdivision(fraction, TONE_DIVISIONS, TONES_PER_COLOR),
        base: subdivision(fraction, BASE_DIVISIONS, BASES_PER_TONE),
        longitude: normalize_360(longitude_deg),
    }
}

/// 1-based position within a stage of `width` parts.
fn subdivision(fraction: f64, divisions: f64, width: u8) -> u8 {
    let pos = (fraction * divisions).floor() % f64::from(width);
    (pos as u8).min(width - 1) + 1
}

/// Tropical longitude at which `gate` begins, or `None` for an unknown gate.
pub fn gate_start_longitude(gate: u8) -> Option<f64> {
    GATE_ORDER
        .iter()
        .position(|&g| g == gate)
        .map(|idx| normalize_360(idx as f64 * GATE_SPAN_DEG - GATE_OFFSET_DEG))
}
