//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from chart table validation or lookups.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// A static table is inconsistent (bad permutation, unknown gate, ...).
    MalformedTable(String),
    /// A gate number outside 1..=64.
    InvalidGate(u8),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTable(msg) => write!(f, "malformed chart table: {msg}"),
            Self::InvalidGate(g) => write!(f, "invalid gate number: {g}"),
        }
    }
}

impl Error for ChartError {}
