//! Dashboard configuration.

use td_core::Point;
use td_entity::{AgentSpawn, SIGNAL_GRID};

use crate::{SimError, SimResult};

/// When the frame loops first start.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StartPolicy {
    /// Start as soon as the dashboard is built.
    #[default]
    Immediate,
    /// Wait for the first "now visible" signal from the host.
    WhenVisible,
}

/// Top-level dashboard configuration.
///
/// `Default` reproduces the reference dashboard: 50 agents with speeds in
/// `[1, 3)` and radii in `[5, 15)`, four signals flipping every 101 ticks,
/// started immediately.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardConfig {
    /// Master RNG seed.  The same seed always produces the same layout.
    pub seed: u64,

    /// Initial agent batch for the flow panel.
    pub agents: AgentSpawn,

    /// A signal holds each phase for `signal_threshold + 1` ticks.
    pub signal_threshold: u32,

    /// One signal is created per position, in this order.
    pub signal_positions: Vec<Point>,

    pub start_policy: StartPolicy,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            seed:             0,
            agents:           AgentSpawn::default(),
            signal_threshold: 100,
            signal_positions: SIGNAL_GRID.to_vec(),
            start_policy:     StartPolicy::Immediate,
        }
    }
}

impl DashboardConfig {
    /// Check spawn ranges and signal positions.
    pub fn validate(&self) -> SimResult<()> {
        self.agents.speed.validate_positive("agent speed")?;
        self.agents.radius.validate_positive("agent radius")?;
        if let Some(p) = self
            .signal_positions
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(SimError::Config(format!("signal position {p} is not finite")));
        }
        Ok(())
    }
}
