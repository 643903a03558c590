//! Composite (relationship) chart of two individual charts.
//!
//! Defined centers are the union of both charts' defined centers. Channels
//! are bucketed by ownership:
//!
//! - Companionship: formed in both charts
//! - Dominance: formed only in the first chart
//! - Compromise: formed only in the second chart
//!
//! Dominance and Compromise keep the full sets; presentation shows at most
//! `display_cap` of each.

use serde::Serialize;

use crate::center::CenterSet;
use crate::channel::Channel;
use crate::chart::Chart;
use crate::classify::{Definition, definition_from_center_count};

/// Number of Dominance/Compromise entries shown by default.
pub const DEFAULT_DISPLAY_CAP: usize = 3;

/// `"{defined} - {open}, {label}"`, e.g. `7 - 2, Fun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionTheme {
    pub defined: u8,
    pub open: u8,
}

impl ConnectionTheme {
    pub fn from_defined(defined: CenterSet) -> Self {
        let d = defined.len() as u8;
        Self {
            defined: d,
            open: 9 - d,
        }
    }

    pub const fn label(self) -> &'static str {
        match self.defined {
            9 => "No Way Out",
            8 => "Work It Out",
            7 => "Fun",
            6 => "Hard Work",
            _ => "Separate Lives",
        }
    }
}

impl std::fmt::Display for ConnectionTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}, {}", self.defined, self.open, self.label())
    }
}

impl Serialize for ConnectionTheme {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Merged view of two charts.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeChart {
    pub defined_centers: CenterSet,
    pub open_centers: CenterSet,
    pub definition: Definition,
    pub connection_theme: ConnectionTheme,
    pub companionship: Vec<Channel>,
    pub dominance: Vec<Channel>,
    pub compromise: Vec<Channel>,
    /// Reserved; always empty.
    pub electromagnetic: Vec<Channel>,
    pub display_cap: usize,
}

/// Presentation form of a [`CompositeChart`] with capped bucket lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeDisplay<'a> {
    pub defined_centers: CenterSet,
    pub open_centers: CenterSet,
    pub definition: Definition,
    pub connection_theme: ConnectionTheme,
    pub companionship: &'a [Channel],
    pub dominance: &'a [Channel],
    pub compromise: &'a [Channel],
    pub electromagnetic: &'a [Channel],
}

impl CompositeChart {
    /// Dominance channels shown, at most `display_cap`.
    pub fn dominance_display(&self) -> &[Channel] {
        capped(&self.dominance, self.display_cap)
    }

    /// Compromise channels shown, at most `display_cap`.
    pub fn compromise_display(&self) -> &[Channel] {
        capped(&self.compromise, self.display_cap)
    }

    pub fn display(&self) -> CompositeDisplay<'_> {
        CompositeDisplay {
            defined_centers: self.defined_centers,
            open_centers: self.open_centers,
            definition: self.definition,
            connection_theme: self.connection_theme,
            companionship: &self.companionship,
            dominance: self.dominance_display(),
            compromise: self.compromise_display(),
            electromagnetic: &self.electromagnetic,
        }
    }
}

fn capped(channels: &[Channel], cap: usize) -> &[Channel] {
    &channels[..channels.len().min(cap)]
}

/// Merge two charts. Bucket lists keep catalog order.
pub fn merge(a: &Chart, b: &Chart, display_cap: usize) -> CompositeChart {
    let defined = a.defined_centers.union(b.defined_centers);

    let (companionship, dominance): (Vec<Channel>, Vec<Channel>) = a
        .channels
        .iter()
        .copied()
        .partition(|ch| b.channels.contains(ch));
    let compromise = b
        .channels
        .iter()
        .filter(|ch| !a.channels.contains(ch))
        .copied()
        .collect();

    CompositeChart {
        defined_centers: defined,
        open_centers: defined.complement(),
        definition: definition_from_center_count(defined.len()),
        connection_theme: ConnectionTheme::from_defined(defined),
        companionship,
        dominance,
        compromise,
        electromagnetic: Vec::new(),
        display_cap,
    }
}
