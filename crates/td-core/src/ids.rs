//! Identifiers for the dashboard's drawing surfaces.

use std::fmt;

/// Which of the two visualizations a surface (and its panel) belongs to.
///
/// The discriminant order is the order panels are ticked in on each refresh.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceId {
    /// The moving-vehicle stream.
    AgentFlow,
    /// The four-signal intersection grid.
    SignalGrid,
}

impl SurfaceId {
    /// Both surfaces, in tick order.
    pub const ALL: [SurfaceId; 2] = [SurfaceId::AgentFlow, SurfaceId::SignalGrid];

    /// Stable lowercase name, used as the host-side lookup key.
    pub fn name(self) -> &'static str {
        match self {
            SurfaceId::AgentFlow  => "agent-flow",
            SurfaceId::SignalGrid => "signal-grid",
        }
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
